//! Lights Out puzzle engine.
//!
//! Levels are resolved from a one-based index ([`Catalog::resolve`]), boards are
//! generated for them ([`RandomBoardGenerator`]) and played through a
//! [`PlayEngine`], which freezes once the win evaluator reports a win. A
//! [`GameSession`] strings levels together and queues [`EngineEvent`]s for the
//! host.
//!
//! ```
//! use lightsout_core::*;
//!
//! let mut session = GameSession::from_seed(Catalog::standard(), SessionSettings::default(), 1);
//! session.start(1).unwrap();
//! for coords in [(0, 0), (0, 2), (2, 0), (2, 2)] {
//!     session.toggle(coords);
//! }
//! assert!(session.engine().unwrap().is_won());
//! ```

#![no_std]

extern crate alloc;

pub use analysis::*;
pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use level::*;
pub use session::*;
pub use shape::*;
pub use types::*;

mod analysis;
mod board;
mod cell;
mod engine;
mod error;
mod events;
mod generator;
mod level;
mod session;
mod shape;
mod types;

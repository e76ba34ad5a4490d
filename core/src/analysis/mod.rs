pub use solvability::*;
pub use win::*;

mod solvability;
mod win;

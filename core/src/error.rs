use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Level numbers start at 1")]
    InvalidLevelIndex,
    #[error("Grid size must be at least 1")]
    InvalidGridSize,
    #[error("Level catalog has no levels")]
    EmptyCatalog,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Fixed cell at ({0}, {1}) is outside the playable shape")]
    FixedInactiveCell(u8, u8),
    #[error("Malformed level catalog: {0}")]
    MalformedCatalog(String),
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid width and height must both be positive")]
    InvalidSize,
    #[error("Mine probability must be within (0, 1]")]
    InvalidProbability,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Flag counts are not tracked on this board")]
    FlagCountsUntracked,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Snapshot has an open mine")]
    OpenMine,
}

pub type Result<T> = core::result::Result<T, GameError>;

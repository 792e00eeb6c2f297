use std::fmt;

use crate::board::{BoardError, LayoutError, MoveError, NotationError};

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The starting grid is not a valid board
    Board(BoardError),
    /// A move could not be played
    Move(MoveError),
    /// A layout could not be loaded
    Layout(LayoutError),
    /// A notation string did not resolve to a legal move
    Notation(NotationError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Board(err) => write!(f, "{err}"),
            EngineError::Move(err) => write!(f, "{err}"),
            EngineError::Layout(err) => write!(f, "{err}"),
            EngineError::Notation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Board(err) => Some(err),
            EngineError::Move(err) => Some(err),
            EngineError::Layout(err) => Some(err),
            EngineError::Notation(err) => Some(err),
        }
    }
}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        EngineError::Board(err)
    }
}

impl From<MoveError> for EngineError {
    fn from(err: MoveError) -> Self {
        EngineError::Move(err)
    }
}

impl From<LayoutError> for EngineError {
    fn from(err: LayoutError) -> Self {
        EngineError::Layout(err)
    }
}

impl From<NotationError> for EngineError {
    fn from(err: NotationError) -> Self {
        EngineError::Notation(err)
    }
}

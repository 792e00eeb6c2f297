//! Error types for board, move, notation and layout operations.

use std::fmt;

use super::types::Coordinate;

/// Error type for board construction and lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A row of the grid has a different length than the first row
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// No piece stands on the requested square
    NotFound { coordinate: Coordinate },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::RaggedGrid {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Invalid board dimensions: row {row} has {found} cells, expected {expected}"
                )
            }
            BoardError::NotFound { coordinate } => {
                write!(f, "No piece at {coordinate}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for operations that are inconsistent with the current board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A move consequence starts on an empty square
    MoveFromEmpty { from: Coordinate },
    /// A move consequence lands on an occupied square
    MoveOntoOccupied { to: Coordinate },
    /// A remove consequence targets an empty square
    RemoveMissing { coordinate: Coordinate },
    /// A change consequence targets an empty square
    ChangeMissing { coordinate: Coordinate },
    /// A consequence references a square off the board
    OutOfBounds { coordinate: Coordinate },
    /// A promotion type was set on a move that does not promote
    NotPromotion,
    /// A promotion type was set twice
    PromotionAlreadySet,
    /// A promotion move was played without choosing a piece type
    MissingPromotion,
    /// No attack ray of the checker reaches the checked square
    NoAttackLine { from: Coordinate, to: Coordinate },
    /// The move is not among the currently generated moves
    NotAvailable,
    /// The engine has no position yet
    NotStarted,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MoveFromEmpty { from } => {
                write!(f, "Attempt to move a piece that doesn't exist at {from}")
            }
            MoveError::MoveOntoOccupied { to } => {
                write!(f, "Attempt to move a piece to an inhabited cell {to}")
            }
            MoveError::RemoveMissing { coordinate } => {
                write!(f, "Attempt to remove a piece that doesn't exist at {coordinate}")
            }
            MoveError::ChangeMissing { coordinate } => {
                write!(f, "Attempt to change a piece that doesn't exist at {coordinate}")
            }
            MoveError::OutOfBounds { coordinate } => {
                write!(f, "Coordinate {coordinate} is off the board")
            }
            MoveError::NotPromotion => write!(f, "Move is not a promotion"),
            MoveError::PromotionAlreadySet => write!(f, "Promotion type already chosen"),
            MoveError::MissingPromotion => {
                write!(f, "Promotion move played without a new piece type")
            }
            MoveError::NoAttackLine { from, to } => {
                write!(f, "No attack ray from {from} reaches {to}")
            }
            MoveError::NotAvailable => write!(f, "Move is not currently available"),
            MoveError::NotStarted => write!(f, "No game has been started"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for algebraic notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Character that is neither a letter nor a digit
    InvalidCharacter { char: char },
    /// File letters after rank digits
    LetterAfterDigit { notation: String },
    /// No file letters
    MissingFile { notation: String },
    /// File letters too long to form a column
    InvalidFile { notation: String },
    /// No rank digits
    MissingRank { notation: String },
    /// Rank digits that do not form a number
    InvalidRank { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// No generated move renders to this notation
    NoMatchingMove { notation: String },
    /// Several generated moves render to this notation
    AmbiguousMove { notation: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty notation string"),
            NotationError::InvalidCharacter { char } => {
                write!(f, "Invalid character '{char}' in notation")
            }
            NotationError::LetterAfterDigit { notation } => {
                write!(f, "File letters after rank digits in '{notation}'")
            }
            NotationError::MissingFile { notation } => {
                write!(f, "Missing file in '{notation}'")
            }
            NotationError::InvalidFile { notation } => {
                write!(f, "Invalid file in '{notation}'")
            }
            NotationError::MissingRank { notation } => {
                write!(f, "Missing rank in '{notation}'")
            }
            NotationError::InvalidRank { notation } => {
                write!(f, "Invalid rank in '{notation}'")
            }
            NotationError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            NotationError::NoMatchingMove { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
            NotationError::AmbiguousMove { notation } => {
                write!(f, "Several legal moves match '{notation}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The `w` or `h` key is absent
    MissingDimensions,
    /// A dimension is not a positive integer
    InvalidDimension { key: String, value: String },
    /// The `turn` value is not a side
    InvalidTurn { value: String },
    /// A line without a `key: value` shape
    InvalidLine { line: usize },
    /// A piece key that is not `<side><piece>`
    InvalidPieceKey { key: String },
    /// A diagram character that is not a piece
    UnknownPiece { char: char },
    /// A square that does not parse
    InvalidSquare { notation: String, source: NotationError },
    /// A square outside the declared dimensions
    SquareOutOfBounds { notation: String },
    /// Two pieces placed on one square
    SquareOccupied { notation: String },
    /// The resulting grid is not a valid board
    Board(BoardError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingDimensions => {
                write!(f, "Layout must declare both 'w' and 'h'")
            }
            LayoutError::InvalidDimension { key, value } => {
                write!(f, "Invalid dimension '{key}: {value}'")
            }
            LayoutError::InvalidTurn { value } => {
                write!(f, "Invalid turn '{value}', expected 'w' or 'b'")
            }
            LayoutError::InvalidLine { line } => {
                write!(f, "Line {line} is not a 'key: value' pair")
            }
            LayoutError::InvalidPieceKey { key } => {
                write!(f, "Invalid piece key '{key}'")
            }
            LayoutError::UnknownPiece { char } => {
                write!(f, "Unknown piece character '{char}'")
            }
            LayoutError::InvalidSquare { notation, source } => {
                write!(f, "Invalid square '{notation}': {source}")
            }
            LayoutError::SquareOutOfBounds { notation } => {
                write!(f, "Square '{notation}' is outside the board")
            }
            LayoutError::SquareOccupied { notation } => {
                write!(f, "Square '{notation}' is given two pieces")
            }
            LayoutError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidSquare { source, .. } => Some(source),
            LayoutError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for LayoutError {
    fn from(err: BoardError) -> Self {
        LayoutError::Board(err)
    }
}

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let layout = Layout::standard();
//! assert_eq!(layout.turn(), Player::White);
//! ```

pub use super::{
    Board, BoardError, Boards, Consequence, Coordinate, Layout, LayoutError, Move, MoveError,
    MoveGenerator, MoveProperty, NotationError, Piece, PieceRegistry, PieceType, Player,
};

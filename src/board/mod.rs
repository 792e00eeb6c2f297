//! Board representation and chess rules.
//!
//! Boards are rectangular grids of any size. Moves are lists of atomic edits
//! ([`Consequence`]s) generated from per-piece geometry and filtered for
//! legality by [`MoveGenerator`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Boards, Layout, MoveGenerator, PieceRegistry, Player};
//!
//! let registry = PieceRegistry::standard();
//! let mut boards = Boards::new(Layout::standard().board(), Player::White);
//! let moves = MoveGenerator::new(&registry).generate(&mut boards, Player::White).unwrap();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod flags;
mod history;
mod layout;
mod movegen;
mod pieces;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardError, LayoutError, MoveError, NotationError};
pub use history::Boards;
pub use layout::Layout;
pub use state::{Board, Grid};
pub use types::{
    flip_all, Consequence, Coordinate, Dimensions, Move, MoveProperty, MoveStyle, MoveType, Piece,
    PieceType, Player,
};

// Rules machinery
pub use flags::{FlagBoard, Maskable};
pub use movegen::{MoveGenerator, PinnedPiece};
pub use pieces::{jump, ray, PieceData, PieceRegistry};
pub use san::{coordinate_to_notation, file_to_string, notation_to_coordinate, rank_of};

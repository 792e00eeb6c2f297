//! Core rules types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Coordinate` and `Dimensions` - board positions, movement vectors, board extent
//! - `Piece`, `PieceType` and `Player` - piece identity
//! - `Consequence` and `Move` - atomic board edits and the moves built from them

mod coordinate;
mod moves;
mod piece;

pub use coordinate::{flip_all, Coordinate, Dimensions};
pub use moves::{Consequence, Move, MoveProperty, MoveStyle, MoveType};
pub use piece::{Piece, PieceType, Player};

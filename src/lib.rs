//! Chess rules on rectangular boards of any size.
//!
//! [`board`] holds the rules: positions, piece geometry, legal move
//! generation, notation and starting layouts. [`engine`] drives a game for a
//! host application and [`sync`] shares one across threads.

pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Board, Coordinate, Layout, Move, Piece, PieceRegistry, PieceType, Player};
pub use engine::{ChessEngine, EngineError, GameState};
pub use sync::SharedEngine;

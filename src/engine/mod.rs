//! Engine facade for host applications.
//!
//! Wraps position history, move generation and notation behind the handful
//! of calls a game front end needs: start a position, list the legal moves,
//! play one, and read back the state and move history.

mod controller;
mod error;

pub use controller::{ChessEngine, GameState};
pub use error::EngineError;

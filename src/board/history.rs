//! Position history.

use super::error::MoveError;
use super::state::Board;
use super::types::{Coordinate, Move, Player};

/// Append-only sequence of boards and the moves between them.
///
/// Always holds exactly one more board than moves. Nothing is ever popped;
/// earlier positions are reached by index.
#[derive(Clone, Debug)]
pub struct Boards {
    boards: Vec<Board>,
    moves: Vec<Move>,
    current_player: Player,
}

impl Boards {
    #[must_use]
    pub fn new(start: Board, player: Player) -> Self {
        Boards {
            boards: vec![start],
            moves: Vec::new(),
            current_player: player,
        }
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Board {
        let last = self.boards.len() - 1;
        &mut self.boards[last]
    }

    /// The board before the last move, if any move was played.
    #[must_use]
    pub fn previous(&self) -> Option<&Board> {
        self.boards.len().checked_sub(2).map(|i| &self.boards[i])
    }

    /// Board at ply `index`, 0 being the starting position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Returns true if any played move has landed a piece on `coordinate`.
    ///
    /// This tracks squares, not pieces: a piece that arrives on a vacated
    /// home square counts as moved, and so does anything later standing there.
    #[must_use]
    pub fn has_moved(&self, coordinate: Coordinate) -> bool {
        self.moves.iter().any(|mv| mv.moves_to(coordinate))
    }

    /// Play `mv` on the current board.
    ///
    /// On error nothing is appended and the side to move is unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let next = self.current().after(mv.consequences())?;
        self.boards.push(next);
        self.moves.push(mv);
        self.current_player = self.current_player.opponent();
        Ok(())
    }
}

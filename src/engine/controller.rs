//! Engine controller implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::board::{
    Board, Boards, Consequence, Grid, Layout, Move, MoveError, MoveGenerator, MoveProperty,
    PieceRegistry, Player,
};

use super::error::EngineError;

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    None,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    /// Returns true once no legal move remains.
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }

    const fn suffix(self) -> &'static str {
        match self {
            GameState::Check => "+",
            GameState::Checkmate => "#",
            GameState::None | GameState::Stalemate => "",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::None => "none",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// Game controller: owns the rule set, the position history and the legal
/// moves of the side to move.
#[derive(Clone, Debug)]
pub struct ChessEngine {
    /// Piece geometry used for every generation
    registry: PieceRegistry,
    /// Position history, `None` until a game is started
    boards: Option<Boards>,
    /// Legal moves of the side to move
    current_moves: Vec<Move>,
    /// State of the current position
    state: GameState,
    /// Notation of every played move, with check suffix
    history: Vec<String>,
}

impl Default for ChessEngine {
    fn default() -> Self {
        Self::new(PieceRegistry::standard())
    }
}

impl ChessEngine {
    #[must_use]
    pub fn new(registry: PieceRegistry) -> Self {
        ChessEngine {
            registry,
            boards: None,
            current_moves: Vec::new(),
            state: GameState::None,
            history: Vec::new(),
        }
    }

    /// Start a new game from `grid` with `player` to move.
    ///
    /// Any previous game is discarded.
    pub fn start(&mut self, grid: Grid, player: Player) -> Result<(), EngineError> {
        let board = Board::new(grid)?;
        self.start_board(board, player)
    }

    /// Start a new game from a layout.
    pub fn start_layout(&mut self, layout: &Layout) -> Result<(), EngineError> {
        self.start_board(layout.board(), layout.turn())
    }

    fn start_board(&mut self, board: Board, player: Player) -> Result<(), EngineError> {
        #[cfg(feature = "logging")]
        let dimensions = board.dimensions();

        self.boards = Some(Boards::new(board, player));
        self.history.clear();
        self.refresh()?;

        #[cfg(feature = "logging")]
        log::debug!(
            "started {dimensions} game, {player} to move, {} legal moves",
            self.current_moves.len()
        );
        Ok(())
    }

    /// Regenerate legal moves and the game state for the side to move.
    fn refresh(&mut self) -> Result<(), EngineError> {
        let boards = self.boards.as_mut().ok_or(MoveError::NotStarted)?;
        let player = boards.current_player();
        let moves = MoveGenerator::new(&self.registry).generate(boards, player)?;
        let in_check = boards.current().is_in_check();

        self.state = match (moves.is_empty(), in_check) {
            (true, true) => GameState::Checkmate,
            (true, false) => GameState::Stalemate,
            (false, true) => GameState::Check,
            (false, false) => GameState::None,
        };
        self.current_moves = moves;
        Ok(())
    }

    /// Play a move taken from [`ChessEngine::current_moves`].
    ///
    /// A promotion move must have its piece type chosen first. Returns the
    /// consequences applied to the board.
    pub fn make_move(&mut self, mv: &Move) -> Result<Vec<Consequence>, EngineError> {
        let boards = self.boards.as_mut().ok_or(MoveError::NotStarted)?;
        if !self.current_moves.iter().any(|legal| legal.same_action(mv)) {
            return Err(MoveError::NotAvailable.into());
        }
        if mv.property() == MoveProperty::Promotion && mv.promotion().is_none() {
            return Err(MoveError::MissingPromotion.into());
        }

        let mut notation = boards.current().move_notation(mv);
        boards.apply_move(mv.clone())?;
        self.refresh()?;
        notation.push_str(self.state.suffix());

        #[cfg(feature = "logging")]
        log::debug!("played {notation}, state {}", self.state);

        self.history.push(notation);
        Ok(mv.consequences().to_vec())
    }

    /// Resolve `notation` against the legal moves and play it.
    pub fn make_move_notation(&mut self, notation: &str) -> Result<Vec<Consequence>, EngineError> {
        let boards = self.boards.as_ref().ok_or(MoveError::NotStarted)?;
        let mv = boards
            .current()
            .parse_move(notation, &self.current_moves)?;
        self.make_move(&mv)
    }

    /// Legal moves of the side to move; empty before a game is started.
    #[must_use]
    pub fn current_moves(&self) -> &[Move] {
        &self.current_moves
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Side to move, if a game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        self.boards.as_ref().map(Boards::current_player)
    }

    /// Notation of every played move in order.
    #[must_use]
    pub fn move_history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn boards(&self) -> Option<&Boards> {
        self.boards.as_ref()
    }

    /// The current position, if a game is running.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.boards.as_ref().map(Boards::current)
    }

    #[must_use]
    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }
}

//! Legal move generation.
//!
//! Candidate moves come from each piece's geometry. They are then cut down
//! in stages:
//!
//! 1. every king gets a danger mask (squares an opposing piece would cover if
//!    the king were not standing where it is) and a list of checkers;
//! 2. a king in double check can only move, and two kings in double check, or
//!    one in double check while another is checked by a different piece,
//!    leave no legal move;
//! 3. kings move inside their danger mask;
//! 4. other pieces must capture the single checker or block its line;
//! 5. pinned pieces stay on their pin line.
//!
//! Castling and en passant are additionally replayed on a scratch board to
//! make sure no own king is left attacked.

mod checks;
mod pins;

pub use pins::PinnedPiece;

use super::error::MoveError;
use super::flags::FlagBoard;
use super::history::Boards;
use super::pieces::{castle_path, PieceRegistry};
use super::state::Board;
use super::types::{Coordinate, Move, MoveProperty, MoveStyle, MoveType, PieceType, Player};

/// Danger mask and checkers of one king.
#[derive(Clone, Debug)]
pub(crate) struct KingInformation {
    pub(crate) coordinate: Coordinate,
    pub(crate) move_mask: FlagBoard,
    pub(crate) checkers: Vec<Coordinate>,
}

/// Produces the legal moves of a position under a given rule set.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    registry: &'a PieceRegistry,
}

impl<'a> MoveGenerator<'a> {
    #[must_use]
    pub const fn new(registry: &'a PieceRegistry) -> Self {
        MoveGenerator { registry }
    }

    /// Every legal move of `player` on the current board.
    ///
    /// Also flags the current board as in check when any of `player`'s kings
    /// is attacked.
    pub fn generate(&self, boards: &mut Boards, player: Player) -> Result<Vec<Move>, MoveError> {
        let kings = self.king_information(boards.current(), player);
        let in_check = kings.iter().any(|king| !king.checkers.is_empty());
        boards.current_mut().set_in_check(in_check);
        let boards: &Boards = boards;

        let (double, single): (Vec<&KingInformation>, Vec<&KingInformation>) = kings
            .iter()
            .filter(|king| !king.checkers.is_empty())
            .partition(|king| king.checkers.len() > 1);

        #[cfg(feature = "logging")]
        log::trace!(
            "{player}: {} king(s), {} single check(s), {} double check(s)",
            kings.len(),
            single.len(),
            double.len()
        );

        match double.as_slice() {
            [] => {}
            [king] => return self.double_check_moves(boards, player, king, &single),
            _ => return Ok(Vec::new()),
        }

        let mut legal = Vec::new();
        for king in &kings {
            legal.extend(self.king_moves(boards, player, king)?);
        }

        let board = boards.current();
        let all_checkers = distinct_checkers(&single);
        let mut attackable = FlagBoard::new(board.dimensions(), true);
        match all_checkers.as_slice() {
            [] => {}
            [checker] => attackable.restrict([*checker]),
            _ => attackable.set_all(false),
        }
        let mut pushable = FlagBoard::new(board.dimensions(), true);
        for king in &single {
            for &checker in &king.checkers {
                pushable.restrict(self.blocks_to_attack(board, checker, king.coordinate)?);
            }
        }

        let pins = self.pins(board, player);
        #[cfg(feature = "logging")]
        log::trace!("{player}: {} pinned piece(s)", pins.len());

        for pin in &pins {
            if !board
                .piece_at(pin.coordinate())
                .is_some_and(|p| p.player == player && p.piece_type != PieceType::King)
            {
                continue;
            }
            let moves = self.registry.moves(
                boards,
                player,
                pin.coordinate(),
                MoveType::All,
                MoveStyle::All,
            );
            legal.extend(self.restrict(
                board,
                player,
                moves,
                &attackable,
                &pushable,
                Some(pin.move_mask()),
            )?);
        }

        let others: Vec<Coordinate> = board
            .occupied()
            .filter(|(origin, piece)| {
                piece.player == player
                    && piece.piece_type != PieceType::King
                    && !pins.iter().any(|pin| pin.coordinate() == *origin)
            })
            .map(|(origin, _)| origin)
            .collect();
        for origin in others {
            let moves = self
                .registry
                .moves(boards, player, origin, MoveType::All, MoveStyle::All);
            legal.extend(self.restrict(board, player, moves, &attackable, &pushable, None)?);
        }

        Ok(legal)
    }

    /// King moves inside the danger mask. Castling also needs the crossed
    /// square to be safe and must not uncover an own king.
    fn king_moves(
        &self,
        boards: &Boards,
        player: Player,
        king: &KingInformation,
    ) -> Result<Vec<Move>, MoveError> {
        let mut moves = self
            .registry
            .moves(boards, player, king.coordinate, MoveType::All, MoveStyle::All);
        king.move_mask.mask(&mut moves, false);

        let board = boards.current();
        let mut kept = Vec::with_capacity(moves.len());
        for mv in moves {
            if let Some(crossed) = castle_path(&mv) {
                if !king.move_mask.is_flagged(crossed)
                    || !self.leaves_kings_safe(board, &mv, player)?
                {
                    continue;
                }
            }
            kept.push(mv);
        }
        Ok(kept)
    }

    /// Moves while one king is in double check.
    ///
    /// With no other checked king that king simply steps out. Otherwise its
    /// move must also capture the one piece checking the other kings.
    fn double_check_moves(
        &self,
        boards: &Boards,
        player: Player,
        king: &KingInformation,
        single: &[&KingInformation],
    ) -> Result<Vec<Move>, MoveError> {
        let moves = self.king_moves(boards, player, king)?;
        if single.is_empty() {
            return Ok(moves);
        }
        match distinct_checkers(single).as_slice() {
            [checker] => Ok(moves
                .into_iter()
                .filter(|mv| mv.is_attack() && mv.to() == Some(*checker))
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Filter a non-king piece's moves by the check and pin masks.
    ///
    /// En passant skips the masks and is replayed instead.
    fn restrict(
        &self,
        board: &Board,
        player: Player,
        moves: Vec<Move>,
        attackable: &FlagBoard,
        pushable: &FlagBoard,
        pin: Option<&FlagBoard>,
    ) -> Result<Vec<Move>, MoveError> {
        let mut en_passant = Vec::new();
        let mut attacks = Vec::new();
        let mut pushes = Vec::new();
        for mv in moves {
            if mv.property() == MoveProperty::EnPassant {
                en_passant.push(mv);
            } else if mv.is_attack() {
                attacks.push(mv);
            } else {
                pushes.push(mv);
            }
        }

        attackable.mask(&mut attacks, false);
        pushable.mask(&mut pushes, false);
        pushes.append(&mut attacks);
        if let Some(pin) = pin {
            pin.mask(&mut pushes, false);
        }

        for mv in en_passant {
            if self.leaves_kings_safe(board, &mv, player)? {
                pushes.push(mv);
            }
        }
        Ok(pushes)
    }
}

/// Checkers of the given kings, each listed once.
fn distinct_checkers(kings: &[&KingInformation]) -> Vec<Coordinate> {
    let mut checkers: Vec<Coordinate> = Vec::new();
    for king in kings {
        for checker in &king.checkers {
            if !checkers.contains(checker) {
                checkers.push(*checker);
            }
        }
    }
    checkers
}

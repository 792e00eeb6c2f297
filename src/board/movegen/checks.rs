use super::super::error::MoveError;
use super::super::flags::FlagBoard;
use super::super::pieces::ray;
use super::super::state::Board;
use super::super::types::{Coordinate, Move, PieceType, Player};
use super::{KingInformation, MoveGenerator};

impl MoveGenerator<'_> {
    pub(crate) fn king_information(&self, board: &Board, player: Player) -> Vec<KingInformation> {
        board
            .positions_of(PieceType::King, player)
            .into_iter()
            .map(|coordinate| KingInformation {
                coordinate,
                move_mask: self.king_move_mask(board, player, coordinate),
                checkers: self.checkers(board, player, coordinate),
            })
            .collect()
    }

    /// Squares the king on `king` may step to.
    ///
    /// Everything an opposing piece covers is unflagged, computed as if the
    /// king were absent so it cannot retreat along a checking line.
    #[must_use]
    pub fn king_move_mask(&self, board: &Board, player: Player, king: Coordinate) -> FlagBoard {
        let mut mask = FlagBoard::new(board.dimensions(), true);
        let opponent = player.opponent();
        for (origin, piece) in board.occupied().filter(|(_, p)| p.player == opponent) {
            mask.unflag_all(
                self.registry
                    .get(piece.piece_type)
                    .covered_squares(board, opponent, origin, Some(king)),
            );
        }
        mask
    }

    /// Opposing pieces attacking the king of `player` on `king`.
    #[must_use]
    pub fn checkers(&self, board: &Board, player: Player, king: Coordinate) -> Vec<Coordinate> {
        let opponent = player.opponent();
        board
            .occupied()
            .filter(|(origin, piece)| {
                piece.player == opponent
                    && self
                        .registry
                        .get(piece.piece_type)
                        .attacks(board, opponent, *origin, king)
            })
            .map(|(origin, _)| origin)
            .collect()
    }

    /// Returns true if any piece of `by` attacks `target`.
    #[must_use]
    pub fn is_attacked(&self, board: &Board, target: Coordinate, by: Player) -> bool {
        board.occupied().any(|(origin, piece)| {
            piece.player == by
                && self
                    .registry
                    .get(piece.piece_type)
                    .attacks(board, by, origin, target)
        })
    }

    /// Squares strictly between the checker on `from` and `to`.
    ///
    /// Empty for a jumping checker. Fails when no attack of the piece on
    /// `from` reaches `to`.
    pub fn blocks_to_attack(
        &self,
        board: &Board,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Vec<Coordinate>, MoveError> {
        let piece = board
            .piece_at(from)
            .ok_or(MoveError::NoAttackLine { from, to })?;
        let data = self.registry.get(piece.piece_type);

        for &vector in data.attack_rays(piece.player) {
            let mut cells = ray(board, piece.player, vector, from, None, true);
            if cells.last() == Some(&to) {
                cells.pop();
                return Ok(cells);
            }
        }
        if data
            .attack_jumps(piece.player)
            .iter()
            .any(|&vector| from + vector == to)
        {
            return Ok(Vec::new());
        }
        Err(MoveError::NoAttackLine { from, to })
    }

    /// Replay `mv` and check that no king of `player` is attacked afterwards.
    pub(crate) fn leaves_kings_safe(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
    ) -> Result<bool, MoveError> {
        let next = board.after(mv.consequences())?;
        let opponent = player.opponent();
        Ok(next
            .positions_of(PieceType::King, player)
            .into_iter()
            .all(|king| !self.is_attacked(&next, king, opponent)))
    }
}

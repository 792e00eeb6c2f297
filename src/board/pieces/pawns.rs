use super::super::history::Boards;
use super::super::types::{
    Consequence, Coordinate, Move, MoveProperty, MoveStyle, MoveType, PieceType, Player,
};
use super::PieceRegistry;

/// Row a pawn of `player` promotes on.
#[inline]
fn promotion_row(player: Player, height: i64) -> i64 {
    match player {
        Player::White => 0,
        Player::Black => height - 1,
    }
}

impl PieceRegistry {
    pub(super) fn add_pawn_moves(
        &self,
        moves: &mut Vec<Move>,
        boards: &Boards,
        player: Player,
        origin: Coordinate,
        move_type: MoveType,
        move_style: MoveStyle,
    ) {
        let board = boards.current();
        let forward = Coordinate::UP.oriented(player);

        if move_type.includes(MoveType::Push)
            && move_style.includes(MoveStyle::Jump)
            && !boards.has_moved(origin)
        {
            let over = origin + forward;
            let to = over + forward;
            if board.contains(to) && !board.has_piece(over) && !board.has_piece(to) {
                moves.push(
                    Move::basic(MoveType::Push, MoveStyle::Jump, forward * 2, origin, to, false)
                        .retagged(MoveProperty::DoubleMove),
                );
            }
        }

        if move_type.includes(MoveType::Attack) && move_style.includes(MoveStyle::Jump) {
            if let Some(en_passant) = self.en_passant(boards, player, origin) {
                moves.push(en_passant);
            }
        }

        let last_row = promotion_row(player, board.dimensions().height);
        for mv in moves.iter_mut() {
            if mv.to().is_some_and(|to| to.row() == last_row) {
                mv.retag(MoveProperty::Promotion);
            }
        }
    }

    /// Capture of a pawn that just double-moved past `origin`'s attack square.
    fn en_passant(&self, boards: &Boards, player: Player, origin: Coordinate) -> Option<Move> {
        let last = boards.last_move()?;
        if last.property() != MoveProperty::DoubleMove {
            return None;
        }
        let (from, to, _) = last.primary()?;
        if to.row() != origin.row() || (to.column() - origin.column()).abs() != 1 {
            return None;
        }
        let board = boards.current();
        if !board
            .piece_at(to)
            .is_some_and(|p| p.player != player && p.piece_type == PieceType::Pawn)
        {
            return None;
        }

        let passed = Coordinate((from.row() + to.row()) / 2, (from.column() + to.column()) / 2);
        if !board.contains(passed) || board.has_piece(passed) {
            return None;
        }
        self.get(PieceType::Pawn)
            .attack_jumps(player)
            .iter()
            .find(|&&vector| origin + vector == passed)
            .map(|&vector| {
                Move::new(
                    vec![
                        Consequence::Move {
                            from: origin,
                            to: passed,
                            move_type: MoveType::Attack,
                            move_style: MoveStyle::Jump,
                            vector,
                        },
                        Consequence::Remove { coordinate: to },
                    ],
                    MoveProperty::EnPassant,
                )
            })
    }
}

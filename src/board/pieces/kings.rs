use super::super::history::Boards;
use super::super::types::{
    Consequence, Coordinate, Move, MoveProperty, MoveStyle, MoveType, PieceType, Player,
};
use super::{ray, PieceRegistry};

impl PieceRegistry {
    /// Castling toward each unmoved rook with only empty squares in between.
    ///
    /// The king lands two squares toward the rook, the rook on the square it
    /// crossed. At least two empty squares are needed.
    pub(super) fn add_king_moves(
        &self,
        moves: &mut Vec<Move>,
        boards: &Boards,
        player: Player,
        origin: Coordinate,
        move_type: MoveType,
        move_style: MoveStyle,
    ) {
        let board = boards.current();
        if !move_type.includes(MoveType::Push)
            || !move_style.includes(MoveStyle::Jump)
            || board.is_in_check()
            || boards.has_moved(origin)
        {
            return;
        }

        for direction in [Coordinate::LEFT, Coordinate::RIGHT] {
            let path = ray(board, player, direction, origin, None, false);
            let (Some(&rook_to), Some(&king_to), Some(&last)) =
                (path.first(), path.get(1), path.last())
            else {
                continue;
            };
            let rook_from = last + direction;
            let is_rook = board
                .piece_at(rook_from)
                .is_some_and(|p| p.is(PieceType::Rook, player));
            if !is_rook || boards.has_moved(rook_from) {
                continue;
            }

            moves.push(Move::new(
                vec![
                    Consequence::Move {
                        from: origin,
                        to: king_to,
                        move_type: MoveType::Push,
                        move_style: MoveStyle::Jump,
                        vector: king_to - origin,
                    },
                    Consequence::Move {
                        from: rook_from,
                        to: rook_to,
                        move_type: MoveType::Push,
                        move_style: MoveStyle::Jump,
                        vector: rook_to - rook_from,
                    },
                ],
                MoveProperty::Castle,
            ));
        }
    }
}

/// The square a castling king crosses on its way, if `mv` is a castle.
#[must_use]
pub(crate) fn castle_path(mv: &Move) -> Option<Coordinate> {
    if mv.property() != MoveProperty::Castle {
        return None;
    }
    mv.consequences().iter().skip(1).find_map(|c| match *c {
        Consequence::Move { to, .. } => Some(to),
        _ => None,
    })
}

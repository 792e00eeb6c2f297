use super::super::flags::FlagBoard;
use super::super::pieces::ray;
use super::super::state::Board;
use super::super::types::{Coordinate, PieceType, Player};
use super::MoveGenerator;

/// A piece that may only move along the line between its king and the
/// sliding piece pinning it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinnedPiece {
    coordinate: Coordinate,
    move_mask: FlagBoard,
}

impl PinnedPiece {
    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Destinations that keep the king covered.
    #[inline]
    #[must_use]
    pub const fn move_mask(&self) -> &FlagBoard {
        &self.move_mask
    }
}

impl MoveGenerator<'_> {
    /// Pieces of `player` pinned against one of its kings.
    ///
    /// A ray walked out from an opposing slider and the reversed ray walked
    /// out from a king must stop on the same piece of `player`. A piece pinned
    /// from several sides keeps only the squares common to every line.
    #[must_use]
    pub fn pins(&self, board: &Board, player: Player) -> Vec<PinnedPiece> {
        let opponent = player.opponent();
        let kings = board.positions_of(PieceType::King, player);
        let mut pinned: Vec<PinnedPiece> = Vec::new();

        for piece_type in PieceType::ALL {
            let data = self.registry.get(piece_type);
            if !data.has_attack_rays() {
                continue;
            }
            for attacker in board.positions_of(piece_type, opponent) {
                for &vector in data.attack_rays(opponent) {
                    let outgoing = ray(board, opponent, vector, attacker, None, true);
                    let Some(&target) = outgoing.last() else {
                        continue;
                    };
                    let pinnable = board
                        .piece_at(target)
                        .is_some_and(|p| p.player == player && p.piece_type != PieceType::King);
                    if !pinnable {
                        continue;
                    }

                    for &king in &kings {
                        let incoming = ray(board, opponent, -vector, king, None, true);
                        if incoming.last() != Some(&target) {
                            continue;
                        }
                        let line = outgoing
                            .iter()
                            .chain(&incoming)
                            .copied()
                            .chain(std::iter::once(attacker));
                        match pinned.iter_mut().find(|pin| pin.coordinate == target) {
                            Some(pin) => pin.move_mask.restrict(line),
                            None => {
                                let mut move_mask = FlagBoard::new(board.dimensions(), true);
                                move_mask.restrict(line);
                                pinned.push(PinnedPiece {
                                    coordinate: target,
                                    move_mask,
                                });
                            }
                        }
                    }
                }
            }
        }
        pinned
    }
}

//! Per-piece movement geometry.
//!
//! Each piece type is described by four vector tables, written from White's
//! point of view: sliding attack rays, single-step attack jumps, and the same
//! two for non-capturing pushes. Black uses the row-mirrored tables.
//!
//! Pawns and kings add special moves on top of their geometry: double moves,
//! en passant and promotion tagging for pawns, castling for kings.

mod kings;
mod pawns;

pub(crate) use kings::castle_path;

use super::history::Boards;
use super::state::Board;
use super::types::{Coordinate, Move, MoveStyle, MoveType, PieceType, Player};

/// Walk `origin + vector`, `origin + 2·vector`, ... while on the board.
///
/// Empty squares and `ignore` are collected. The walk stops at the first
/// other occupied square, which is collected only when `is_attack` is set and
/// it holds a piece not owned by `player`.
#[must_use]
pub fn ray(
    board: &Board,
    player: Player,
    vector: Coordinate,
    origin: Coordinate,
    ignore: Option<Coordinate>,
    is_attack: bool,
) -> Vec<Coordinate> {
    let mut cells = Vec::new();
    if vector == Coordinate::default() {
        return cells;
    }

    let mut cell = origin + vector;
    while board.contains(cell) {
        match board.piece_at(cell) {
            Some(_) if ignore != Some(cell) => {
                if is_attack && !board.is_owned_by(cell, player) {
                    cells.push(cell);
                }
                break;
            }
            _ => cells.push(cell),
        }
        cell = cell + vector;
    }
    cells
}

/// Single-step analogue of [`ray`].
#[must_use]
pub fn jump(
    board: &Board,
    player: Player,
    vector: Coordinate,
    origin: Coordinate,
    is_attack: bool,
) -> Option<Coordinate> {
    let cell = origin + vector;
    if !board.contains(cell) {
        return None;
    }
    match board.piece_at(cell) {
        None => Some(cell),
        Some(piece) if is_attack && piece.player != player => Some(cell),
        Some(_) => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct VectorSet {
    rays: Vec<Coordinate>,
    jumps: Vec<Coordinate>,
}

impl VectorSet {
    fn flipped(&self) -> Self {
        VectorSet {
            rays: super::types::flip_all(&self.rays),
            jumps: super::types::flip_all(&self.jumps),
        }
    }
}

/// Movement geometry of one piece type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceData {
    // Indexed [push, attack] then [white, black]
    sets: [[VectorSet; 2]; 2],
}

impl PieceData {
    /// Geometry from White's point of view.
    #[must_use]
    pub fn new(
        attack_rays: Vec<Coordinate>,
        attack_jumps: Vec<Coordinate>,
        push_rays: Vec<Coordinate>,
        push_jumps: Vec<Coordinate>,
    ) -> Self {
        let push = VectorSet {
            rays: push_rays,
            jumps: push_jumps,
        };
        let attack = VectorSet {
            rays: attack_rays,
            jumps: attack_jumps,
        };
        let push_black = push.flipped();
        let attack_black = attack.flipped();
        PieceData {
            sets: [[push, push_black], [attack, attack_black]],
        }
    }

    /// A piece that captures the same way it moves.
    #[must_use]
    pub fn symmetric(rays: Vec<Coordinate>, jumps: Vec<Coordinate>) -> Self {
        PieceData::new(rays.clone(), jumps.clone(), rays, jumps)
    }

    #[must_use]
    pub fn queen() -> Self {
        PieceData::symmetric(Coordinate::ALL_DIRECTIONS.to_vec(), Vec::new())
    }

    #[must_use]
    pub fn king() -> Self {
        PieceData::symmetric(Vec::new(), Coordinate::ALL_DIRECTIONS.to_vec())
    }

    #[must_use]
    pub fn bishop() -> Self {
        PieceData::symmetric(Coordinate::DIAGONALS.to_vec(), Vec::new())
    }

    #[must_use]
    pub fn rook() -> Self {
        PieceData::symmetric(Coordinate::ORTHOGONALS.to_vec(), Vec::new())
    }

    #[must_use]
    pub fn knight() -> Self {
        let jumps = vec![
            Coordinate(-2, -1),
            Coordinate(-2, 1),
            Coordinate(2, -1),
            Coordinate(2, 1),
            Coordinate(-1, 2),
            Coordinate(1, 2),
            Coordinate(-1, -2),
            Coordinate(1, -2),
        ];
        PieceData::symmetric(Vec::new(), jumps)
    }

    /// Steps forward, captures diagonally forward.
    #[must_use]
    pub fn pawn() -> Self {
        PieceData::new(
            Vec::new(),
            vec![Coordinate::UP_LEFT, Coordinate::UP_RIGHT],
            Vec::new(),
            vec![Coordinate::UP],
        )
    }

    fn set(&self, move_type: MoveType, player: Player) -> &VectorSet {
        let kind = usize::from(move_type == MoveType::Attack);
        let side = usize::from(player == Player::Black);
        &self.sets[kind][side]
    }

    #[must_use]
    pub fn rays(&self, move_type: MoveType, player: Player) -> &[Coordinate] {
        &self.set(move_type, player).rays
    }

    #[must_use]
    pub fn jumps(&self, move_type: MoveType, player: Player) -> &[Coordinate] {
        &self.set(move_type, player).jumps
    }

    #[must_use]
    pub fn attack_rays(&self, player: Player) -> &[Coordinate] {
        self.rays(MoveType::Attack, player)
    }

    #[must_use]
    pub fn attack_jumps(&self, player: Player) -> &[Coordinate] {
        self.jumps(MoveType::Attack, player)
    }

    /// Returns true if the piece can slide onto a capture.
    #[must_use]
    pub fn has_attack_rays(&self) -> bool {
        !self.sets[1][0].rays.is_empty()
    }

    /// Union of the requested vector tables for `player`.
    #[must_use]
    pub fn vectors(
        &self,
        move_type: MoveType,
        move_style: MoveStyle,
        player: Player,
    ) -> Vec<Coordinate> {
        let mut vectors = Vec::new();
        for kind in [MoveType::Push, MoveType::Attack] {
            if !move_type.includes(kind) {
                continue;
            }
            if move_style.includes(MoveStyle::Ray) {
                vectors.extend_from_slice(self.rays(kind, player));
            }
            if move_style.includes(MoveStyle::Jump) {
                vectors.extend_from_slice(self.jumps(kind, player));
            }
        }
        vectors
    }

    /// Moves produced by the geometry alone, without special rules.
    ///
    /// Pushes only land on empty squares; attacks only on opposing pieces.
    #[must_use]
    pub fn basic_moves(
        &self,
        board: &Board,
        player: Player,
        origin: Coordinate,
        move_type: MoveType,
        move_style: MoveStyle,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for kind in [MoveType::Push, MoveType::Attack] {
            if !move_type.includes(kind) {
                continue;
            }
            let is_attack = kind == MoveType::Attack;
            let mut emit = |style: MoveStyle, vector: Coordinate, to: Coordinate| {
                let capture = board.has_piece(to);
                if is_attack == capture {
                    moves.push(Move::basic(kind, style, vector, origin, to, capture));
                }
            };

            if move_style.includes(MoveStyle::Ray) {
                for &vector in self.rays(kind, player) {
                    for to in ray(board, player, vector, origin, None, is_attack) {
                        emit(MoveStyle::Ray, vector, to);
                    }
                }
            }
            if move_style.includes(MoveStyle::Jump) {
                for &vector in self.jumps(kind, player) {
                    if let Some(to) = jump(board, player, vector, origin, is_attack) {
                        emit(MoveStyle::Jump, vector, to);
                    }
                }
            }
        }
        moves
    }

    /// Squares a piece of `player` on `origin` covers with its captures.
    ///
    /// Unlike [`PieceData::basic_moves`] a ray also covers its first blocker
    /// whoever owns it, and jumps cover their target regardless of occupancy.
    /// `ignore` is treated as empty so rays run through it.
    #[must_use]
    pub fn covered_squares(
        &self,
        board: &Board,
        player: Player,
        origin: Coordinate,
        ignore: Option<Coordinate>,
    ) -> Vec<Coordinate> {
        let mut cells = Vec::new();
        for &vector in self.attack_rays(player) {
            if vector == Coordinate::default() {
                continue;
            }
            let mut cell = origin + vector;
            while board.contains(cell) {
                cells.push(cell);
                if board.has_piece(cell) && ignore != Some(cell) {
                    break;
                }
                cell = cell + vector;
            }
        }
        for &vector in self.attack_jumps(player) {
            let cell = origin + vector;
            if board.contains(cell) {
                cells.push(cell);
            }
        }
        cells
    }

    /// Returns true if a capture from `origin` could reach `target` as things stand.
    #[must_use]
    pub fn attacks(
        &self,
        board: &Board,
        player: Player,
        origin: Coordinate,
        target: Coordinate,
    ) -> bool {
        self.covered_squares(board, player, origin, None).contains(&target)
    }
}

/// Geometry for every piece type.
///
/// The rules in force are an explicit value: several registries may coexist,
/// each driving its own engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceRegistry {
    data: [PieceData; 6],
}

impl PieceRegistry {
    /// Orthodox chess geometry.
    #[must_use]
    pub fn standard() -> Self {
        PieceRegistry {
            data: [
                PieceData::queen(),
                PieceData::king(),
                PieceData::bishop(),
                PieceData::rook(),
                PieceData::knight(),
                PieceData::pawn(),
            ],
        }
    }

    /// Replace the geometry of one piece type.
    #[must_use]
    pub fn with_piece(mut self, piece_type: PieceType, data: PieceData) -> Self {
        self.data[piece_type.index()] = data;
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, piece_type: PieceType) -> &PieceData {
        &self.data[piece_type.index()]
    }

    /// Candidate moves for the piece of `player` on `origin`, special moves
    /// included. Returns nothing for an empty square or a foreign piece.
    #[must_use]
    pub fn moves(
        &self,
        boards: &Boards,
        player: Player,
        origin: Coordinate,
        move_type: MoveType,
        move_style: MoveStyle,
    ) -> Vec<Move> {
        let board = boards.current();
        let Some(piece) = board.piece_at(origin).filter(|p| p.player == player) else {
            return Vec::new();
        };
        let mut moves = self
            .get(piece.piece_type)
            .basic_moves(board, player, origin, move_type, move_style);
        match piece.piece_type {
            PieceType::Pawn => {
                self.add_pawn_moves(&mut moves, boards, player, origin, move_type, move_style);
            }
            PieceType::King => {
                self.add_king_moves(&mut moves, boards, player, origin, move_type, move_style);
            }
            _ => {}
        }
        moves
    }
}

impl Default for PieceRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::Layout;

    fn board(rows: &[&str]) -> Board {
        Layout::from_diagram(rows, Player::White).unwrap().board()
    }

    #[test]
    fn test_ray_stops_at_blockers() {
        let b = board(&["R..p", "....", "....", "...."]);
        let cells = ray(&b, Player::White, Coordinate::RIGHT, Coordinate(0, 0), None, false);
        assert_eq!(cells, vec![Coordinate(0, 1), Coordinate(0, 2)]);

        let cells = ray(&b, Player::White, Coordinate::RIGHT, Coordinate(0, 0), None, true);
        assert_eq!(cells.last(), Some(&Coordinate(0, 3)));
    }

    #[test]
    fn test_ray_sees_through_ignored_square() {
        let b = board(&["R.K.", "....", "....", "...."]);
        let cells = ray(
            &b,
            Player::Black,
            Coordinate::RIGHT,
            Coordinate(0, 0),
            Some(Coordinate(0, 2)),
            true,
        );
        assert_eq!(cells, vec![Coordinate(0, 1), Coordinate(0, 2), Coordinate(0, 3)]);
    }

    #[test]
    fn test_jump_respects_ownership() {
        let b = board(&["N..", "..P", ".p."]);
        assert_eq!(jump(&b, Player::White, Coordinate(1, 2), Coordinate(0, 0), true), None);
        assert_eq!(
            jump(&b, Player::White, Coordinate(2, 1), Coordinate(0, 0), true),
            Some(Coordinate(2, 1))
        );
        assert_eq!(jump(&b, Player::White, Coordinate(2, 1), Coordinate(0, 0), false), None);
        assert_eq!(jump(&b, Player::White, Coordinate(-1, 0), Coordinate(0, 0), false), None);
    }

    #[test]
    fn test_black_geometry_is_mirrored() {
        let pawn = PieceData::pawn();
        assert_eq!(pawn.jumps(MoveType::Push, Player::White), &[Coordinate::UP]);
        assert_eq!(pawn.jumps(MoveType::Push, Player::Black), &[Coordinate::DOWN]);
        assert_eq!(
            pawn.vectors(MoveType::Attack, MoveStyle::All, Player::Black),
            vec![Coordinate::DOWN_LEFT, Coordinate::DOWN_RIGHT]
        );
    }

    #[test]
    fn test_basic_moves_split_pushes_and_attacks() {
        let b = board(&["...", ".p.", ".P."]);
        let pawn = PieceData::pawn();
        let pushes =
            pawn.basic_moves(&b, Player::White, Coordinate(2, 1), MoveType::Push, MoveStyle::All);
        assert!(pushes.is_empty());

        let rook = PieceData::rook();
        let moves =
            rook.basic_moves(&b, Player::Black, Coordinate(1, 1), MoveType::All, MoveStyle::All);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), Some(Coordinate(2, 1)));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_covered_squares_include_defended_piece() {
        let b = board(&["R.N.", "....", "....", "...."]);
        let covered = PieceData::rook().covered_squares(&b, Player::White, Coordinate(0, 0), None);
        assert!(covered.contains(&Coordinate(0, 2)));
        assert!(!covered.contains(&Coordinate(0, 3)));
    }

    #[test]
    fn test_registry_override() {
        let registry = PieceRegistry::standard().with_piece(PieceType::Knight, PieceData::king());
        assert_eq!(registry.get(PieceType::Knight), &PieceData::king());
        assert_eq!(registry.get(PieceType::Rook), &PieceData::rook());
    }
}

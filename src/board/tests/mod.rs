//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Check, pin, en passant and castling scenarios
//! - `edge_cases.rs` - Special positions and degenerate boards
//! - `perft.rs` - Move counts against known totals
//! - `proptest.rs` - Property-based tests

mod perft;
mod proptest;

use crate::board::{
    notation_to_coordinate, Boards, Coordinate, Layout, Move, MoveGenerator, PieceRegistry, Player,
};

/// Square on an 8×8 board.
pub(super) fn sq(notation: &str) -> Coordinate {
    notation_to_coordinate(notation, 8).expect("valid square")
}

/// History starting from diagram `rows` with `player` to move.
pub(super) fn boards_from(rows: &[&str], player: Player) -> Boards {
    let layout = Layout::from_diagram(rows, player).expect("valid diagram");
    Boards::new(layout.board(), player)
}

/// Legal moves for the side to move.
pub(super) fn legal_moves(boards: &mut Boards) -> Vec<Move> {
    let registry = PieceRegistry::standard();
    let player = boards.current_player();
    MoveGenerator::new(&registry)
        .generate(boards, player)
        .expect("generation succeeds")
}

/// Legal moves whose primary movement starts on `from`.
pub(super) fn moves_from(moves: &[Move], from: Coordinate) -> Vec<&Move> {
    moves.iter().filter(|mv| mv.from() == Some(from)).collect()
}

/// Play the unique legal move from `from` to `to`.
pub(super) fn play(boards: &mut Boards, from: Coordinate, to: Coordinate) {
    let moves = legal_moves(boards);
    let mv = moves
        .iter()
        .find(|mv| mv.from() == Some(from) && mv.to() == Some(to))
        .unwrap_or_else(|| panic!("no legal move {from} -> {to}"))
        .clone();
    boards.apply_move(mv).expect("legal move applies");
}

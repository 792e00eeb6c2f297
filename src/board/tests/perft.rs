//! Perft (performance test) for move generation correctness.
//!
//! Promotions are counted once per piece type they can become.

use crate::board::{
    Boards, Layout, Move, MoveGenerator, MoveProperty, PieceRegistry, PieceType, Player,
};
use std::time::Instant;

const PROMOTIONS: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

struct TestPosition {
    name: &'static str,
    rows: [&'static str; 8],
    turn: Player,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Kiwipete",
        rows: [
            "r...k..r",
            "p.ppqpb.",
            "bn..pnp.",
            "...PN...",
            ".p..P...",
            "..N..Q.p",
            "PPPBBPPP",
            "R...K..R",
        ],
        turn: Player::White,
        depths: &[(1, 48)],
    },
    TestPosition {
        name: "Position 4",
        rows: [
            "r...k..r",
            "Pppp.ppp",
            ".b...nbN",
            "nP......",
            "BBP.P...",
            "q....N..",
            "Pp.P..PP",
            "R..Q.RK.",
        ],
        turn: Player::White,
        depths: &[(1, 6)],
    },
    TestPosition {
        name: "Position 5",
        rows: [
            "rnbq.k.r",
            "pp.Pbppp",
            "..p.....",
            "........",
            "..B.....",
            "........",
            "PPP.NnPP",
            "RNBQK..R",
        ],
        turn: Player::White,
        depths: &[(1, 44)],
    },
    TestPosition {
        name: "Promotion",
        rows: [
            "n.n.....",
            "PPPk....",
            "........",
            "........",
            "........",
            "........",
            "....Kppp",
            ".....N.N",
        ],
        turn: Player::Black,
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        rows: [
            "r...k..r",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ],
        turn: Player::White,
        depths: &[(1, 26), (2, 568)],
    },
];

fn perft(registry: &PieceRegistry, boards: &mut Boards, depth: usize) -> u64 {
    let player = boards.current_player();
    let moves = MoveGenerator::new(registry)
        .generate(boards, player)
        .expect("generation succeeds");

    let mut nodes = 0;
    for mv in moves {
        let choices: Vec<Move> = if mv.property() == MoveProperty::Promotion {
            PROMOTIONS
                .iter()
                .map(|&piece_type| mv.clone().with_promotion(piece_type).expect("promotion move"))
                .collect()
        } else {
            vec![mv]
        };
        if depth == 1 {
            nodes += choices.len() as u64;
            continue;
        }
        for choice in choices {
            let mut next = boards.clone();
            next.apply_move(choice).expect("legal move applies");
            nodes += perft(registry, &mut next, depth - 1);
        }
    }
    nodes
}

#[test]
fn test_initial_position_perft() {
    let registry = PieceRegistry::standard();
    for (depth, expected) in [(1, 20), (2, 400), (3, 8902)] {
        let mut boards = Boards::new(Layout::standard().board(), Player::White);
        assert_eq!(perft(&registry, &mut boards, depth), expected, "depth {depth}");
    }
}

#[test]
fn test_all_perft_positions() {
    let registry = PieceRegistry::standard();
    for position in TEST_POSITIONS {
        let layout = Layout::from_diagram(&position.rows, position.turn).expect("valid diagram");

        for &(depth, expected) in position.depths {
            let mut boards = Boards::new(layout.board(), position.turn);
            let start = Instant::now();
            let nodes = perft(&registry, &mut boards, depth);
            let duration = start.elapsed();

            println!("  Depth {}: {} nodes in {:?}", depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

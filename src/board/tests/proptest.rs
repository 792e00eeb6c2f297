//! Property-based tests using proptest.

use crate::board::{
    coordinate_to_notation, notation_to_coordinate, Boards, Coordinate, Layout, Move,
    MoveGenerator, MoveProperty, NotationError, PieceRegistry, PieceType, Player,
};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy for a board height and an in-bounds coordinate on it
fn coordinate_strategy() -> impl Strategy<Value = (Coordinate, i64)> {
    (1..=300i64, 0..=2000i64).prop_flat_map(|(height, column)| {
        (0..height).prop_map(move |row| (Coordinate(row, column), height))
    })
}

/// Pick a random legal move, choosing a queen for promotions.
fn pick(moves: &[Move], rng: &mut impl rand::Rng) -> Move {
    let mv = moves[rng.gen_range(0..moves.len())].clone();
    if mv.property() == MoveProperty::Promotion {
        mv.with_promotion(PieceType::Queen)
            .expect("promotion move accepts a type")
    } else {
        mv
    }
}

proptest! {
    /// Property: rendering then parsing a square gives it back
    #[test]
    fn prop_notation_roundtrip((coordinate, height) in coordinate_strategy()) {
        let notation = coordinate_to_notation(coordinate, height);
        prop_assert_eq!(notation_to_coordinate(&notation, height), Ok(coordinate));
    }

    /// Property: every generated move replays without error and leaves the
    /// mover's kings unattacked
    #[test]
    fn prop_generated_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let registry = PieceRegistry::standard();
        let generator = MoveGenerator::new(&registry);
        let mut boards = Boards::new(Layout::standard().board(), Player::White);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let player = boards.current_player();
            let moves = generator.generate(&mut boards, player).unwrap();
            if moves.is_empty() {
                break;
            }

            let board = boards.current();
            for mv in &moves {
                let next = board.after(mv.consequences());
                prop_assert!(next.is_ok(), "{} failed to replay: {:?}", mv, next);
                let next = next.unwrap();
                for king in next.positions_of(PieceType::King, player) {
                    prop_assert!(
                        !generator.is_attacked(&next, king, player.opponent()),
                        "{} leaves the king on {} attacked",
                        mv,
                        king
                    );
                }
            }

            let mv = pick(&moves, &mut rng);
            boards.apply_move(mv).unwrap();
        }
    }

    /// Property: the in-check flag matches an attack on one of the mover's kings
    #[test]
    fn prop_check_flag_matches_attacks(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let registry = PieceRegistry::standard();
        let generator = MoveGenerator::new(&registry);
        let mut boards = Boards::new(Layout::standard().board(), Player::White);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let player = boards.current_player();
            let moves = generator.generate(&mut boards, player).unwrap();

            let board = boards.current();
            let attacked = board
                .positions_of(PieceType::King, player)
                .into_iter()
                .any(|king| generator.is_attacked(board, king, player.opponent()));
            prop_assert_eq!(board.is_in_check(), attacked);

            if moves.is_empty() {
                break;
            }
            let mv = pick(&moves, &mut rng);
            boards.apply_move(mv).unwrap();
        }
    }

    /// Property: rendered move notation resolves to the same move, unless two
    /// moves share a rendering
    #[test]
    fn prop_move_notation_resolves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let registry = PieceRegistry::standard();
        let generator = MoveGenerator::new(&registry);
        let mut boards = Boards::new(Layout::standard().board(), Player::White);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let player = boards.current_player();
            let moves = generator.generate(&mut boards, player).unwrap();
            if moves.is_empty() {
                break;
            }

            let board = boards.current();
            for mv in &moves {
                let notation = board.move_notation(mv);
                match board.parse_move(&notation, &moves) {
                    Ok(parsed) => {
                        prop_assert!(parsed.same_action(mv), "{} parsed as {}", notation, parsed);
                    }
                    Err(NotationError::AmbiguousMove { .. }) => {}
                    Err(err) => {
                        prop_assert!(false, "{} failed to parse: {}", notation, err);
                    }
                }
            }

            let mv = pick(&moves, &mut rng);
            boards.apply_move(mv).unwrap();
        }
    }
}

use serde::Deserialize;

use chess_rules::board::Layout;
use chess_rules::{ChessEngine, GameState};

#[derive(Deserialize)]
struct Fixtures {
    positions: Vec<Position>,
    games: Vec<Game>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    layout: String,
    moves: usize,
    state: String,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    moves: Vec<String>,
    history: Vec<String>,
    state: String,
}

fn fixtures() -> Fixtures {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

fn state_name(state: GameState) -> String {
    state.to_string()
}

#[test]
fn legal_move_counts() {
    for position in fixtures().positions {
        let layout: Layout = position
            .layout
            .parse()
            .unwrap_or_else(|err| panic!("{}: {err}", position.name));

        let mut engine = ChessEngine::default();
        engine.start_layout(&layout).unwrap();

        assert_eq!(
            engine.current_moves().len(),
            position.moves,
            "move count for '{}'",
            position.name
        );
        assert_eq!(
            state_name(engine.state()),
            position.state,
            "state for '{}'",
            position.name
        );
    }
}

#[test]
fn scripted_games() {
    for game in fixtures().games {
        let mut engine = ChessEngine::default();
        engine.start_layout(&Layout::standard()).unwrap();

        for notation in &game.moves {
            engine
                .make_move_notation(notation)
                .unwrap_or_else(|err| panic!("{}: {notation}: {err}", game.name));
        }

        assert_eq!(engine.move_history(), game.history.as_slice(), "{}", game.name);
        assert_eq!(state_name(engine.state()), game.state, "{}", game.name);
    }
}

#[test]
fn layout_text_matches_standard() {
    let standard = fixtures()
        .positions
        .into_iter()
        .find(|p| p.name == "Standard")
        .expect("standard fixture");
    let layout: Layout = standard.layout.parse().unwrap();
    assert_eq!(layout.board(), Layout::standard().board());
}

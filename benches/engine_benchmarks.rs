//! Benchmarks for move generation and game play.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Boards, Layout, MoveGenerator, PieceRegistry, Player};
use chess_rules::ChessEngine;

const KIWIPETE: [&str; 8] = [
    "r...k..r",
    "p.ppqpb.",
    "bn..pnp.",
    "...PN...",
    ".p..P...",
    "..N..Q.p",
    "PPPBBPPP",
    "R...K..R",
];

fn perft(generator: &MoveGenerator<'_>, boards: &mut Boards, depth: usize) -> u64 {
    let player = boards.current_player();
    let Ok(moves) = generator.generate(boards, player) else {
        return 0;
    };
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let mut next = boards.clone();
        if next.apply_move(mv).is_ok() {
            nodes += perft(generator, &mut next, depth - 1);
        }
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let registry = PieceRegistry::standard();
    let generator = MoveGenerator::new(&registry);

    // Starting position
    let start = Boards::new(Layout::standard().board(), Player::White);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&generator, &mut start.clone(), black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let kiwipete = Layout::from_diagram(&KIWIPETE, Player::White).expect("valid diagram");
    let kiwipete = Boards::new(kiwipete.board(), Player::White);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&generator, &mut kiwipete.clone(), black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    let registry = PieceRegistry::standard();
    let generator = MoveGenerator::new(&registry);

    let mut startpos = Boards::new(Layout::standard().board(), Player::White);
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(generator.generate(&mut startpos, Player::White)))
    });

    let kiwipete = Layout::from_diagram(&KIWIPETE, Player::White).expect("valid diagram");
    let mut kiwipete = Boards::new(kiwipete.board(), Player::White);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(generator.generate(&mut kiwipete, Player::White)))
    });

    // Large board with few pieces
    let wide = Layout::parse("w: 16\nh: 16\nwK: h1\nwQ: d1\nwR: a1 p1\nbK: h16\nbQ: d16\n")
        .expect("valid layout");
    let mut wide = Boards::new(wide.board(), Player::White);
    group.bench_function("wide", |b| {
        b.iter(|| black_box(generator.generate(&mut wide, Player::White)))
    });

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("opening_line", |b| {
        b.iter(|| {
            let mut engine = ChessEngine::default();
            engine.start_layout(&Layout::standard()).expect("standard layout");
            for notation in ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O"] {
                engine
                    .make_move_notation(black_box(notation))
                    .expect("legal move");
            }
            black_box(engine.state())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_engine);
criterion_main!(benches);

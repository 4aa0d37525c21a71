//! Benchmarks for checkers engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use checkers_engine::board::{
    find_best_move, parallel_search, Board, Color, EvalKind, Rules, SearchParams, SearchState,
};

const MIDDLEGAME: &str = "
    .l.l...l
    l...l...
    ...l.l.l
    ..l.....
    .d...d..
    d...d...
    ...d.d.d
    d.d.....";

const ENDGAME: &str = "
    ........
    ..L.....
    ........
    ....d...
    ...D....
    ........
    .l......
    ......D.";

fn positions() -> Vec<(&'static str, Board)> {
    let mut positions = vec![("startpos", Board::new())];
    for (name, diagram) in [("middlegame", MIDDLEGAME), ("endgame", ENDGAME)] {
        if let Ok(board) = Board::from_diagram(diagram) {
            positions.push((name, board));
        }
    }
    positions
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    let rules = Rules::default();

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("legal", name), &board, |b, board| {
            b.iter(|| black_box(board.generate_moves(Color::Light, &rules)))
        });
        group.bench_with_input(BenchmarkId::new("quiet", name), &board, |b, board| {
            b.iter(|| black_box(board.quiet_candidates(Color::Light)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [3, 5, 7] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = SearchState::new(SearchParams::with_depth(depth));
                find_best_move(&Board::new(), Color::Light, &mut state)
            })
        });
    }

    if let Ok(board) = Board::from_diagram(MIDDLEGAME) {
        for depth in [5, 7] {
            group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
                b.iter(|| {
                    let mut state = SearchState::new(SearchParams::with_depth(depth));
                    find_best_move(&board, Color::Dark, &mut state)
                })
            });
            group.bench_with_input(BenchmarkId::new("middlegame_smp4", depth), &depth, |b, &depth| {
                b.iter(|| {
                    let mut state = SearchState::new(SearchParams::with_depth(depth));
                    parallel_search(&board, Color::Dark, &mut state, 4)
                })
            });
        }
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("material", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
        group.bench_with_input(BenchmarkId::new("king_weighted", name), &board, |b, board| {
            b.iter(|| black_box(EvalKind::KingWeighted.score(board, Color::Dark)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::SessionRng;
use common::connect_five::{
    Board, ConnectFiveGameState, GameMatch, GameSettings, Position, RandomMoveSelector,
    check_win, check_win_at,
};

fn create_mid_game_board() -> Board {
    let mut game = ConnectFiveGameState::new(GameSettings::square(15)).unwrap();
    let moves = [
        (7, 7), (8, 7), (7, 8), (8, 8), (6, 6), (9, 9), (5, 5), (10, 10),
        (6, 8), (8, 6), (9, 7), (7, 9), (10, 6), (6, 10), (5, 7), (7, 5),
        (4, 8), (8, 4), (3, 9), (9, 3),
    ];
    for (row, col) in moves {
        game.make_move(Position::new(row, col)).unwrap();
    }
    game.board().clone()
}

fn play_random_match(seed: u64) {
    let game = ConnectFiveGameState::new(GameSettings::square(15)).unwrap();
    let rng = SessionRng::new(seed);
    let mut game_match = GameMatch::new(
        game,
        RandomMoveSelector::new(rng.derive(0)),
        RandomMoveSelector::new(rng.derive(1)),
    );
    game_match.run_to_completion(|_, _| {}).unwrap();
}

fn win_detector_bench(c: &mut Criterion) {
    let board = create_mid_game_board();

    c.bench_function("check_win_at_last_move", |b| {
        b.iter(|| check_win_at(black_box(&board), black_box(Position::new(9, 3)), 5))
    });

    c.bench_function("check_win_full_scan", |b| {
        b.iter(|| check_win(black_box(&board), 5))
    });

    let mut group = c.benchmark_group("random_match");
    group.sample_size(20);
    group.bench_function("15x15", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            play_random_match(seed)
        })
    });
    group.finish();
}

criterion_group!(benches, win_detector_bench);
criterion_main!(benches);

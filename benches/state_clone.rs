//! Cost of the snapshots taken before every undoable action.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spider_engine::game::{Game, GameMode};
use spider_engine::{GameRng, RulesEngine};

/// A mid-game position: a few deals and some moves.
fn midgame(mode: GameMode) -> Game {
    let mut game = Game::with_seed(mode, 2024);
    let mut rng = GameRng::new(7);
    for _ in 0..60 {
        let actions = game.legal_actions();
        if actions.is_empty() {
            break;
        }
        game.apply_action(&actions[rng.gen_range_usize(0..actions.len())]);
    }
    game
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for mode in GameMode::ALL {
        let game = midgame(mode);
        group.bench_function(format!("copy/{mode}"), |b| b.iter(|| black_box(&game).copy()));
    }
    group.finish();
}

fn bench_restore(c: &mut Criterion) {
    let game = midgame(GameMode::FourSuits);
    let snapshot = game.copy();
    c.bench_function("snapshot/restore", |b| {
        b.iter(|| {
            let mut current = game.clone();
            current.restore_from(black_box(snapshot.clone()));
            current
        })
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let game = midgame(GameMode::TwoSuits);
    c.bench_function("rules/legal_actions", |b| b.iter(|| black_box(&game).legal_actions()));
}

criterion_group!(benches, bench_copy, bench_restore, bench_legal_actions);
criterion_main!(benches);

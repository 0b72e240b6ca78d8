//! Benchmarks for the event stack and for whole simulated games.
//!
//! Run with: `cargo bench`

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use four_souls::{
    Event, EventKind, EventStack, Game, GameConfig, PlayerId, RandomChoices, StarterCatalog, Target,
};

fn damage(amount: u8) -> Event {
    Event::new(
        PlayerId(0),
        EventKind::Damage {
            target: Target::Player(PlayerId(1)),
            amount,
            monster: None,
        },
    )
}

/// Push then pop a full stack.
fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Push/Pop");
    for depth in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut stack = EventStack::new();
                for i in 0..depth {
                    stack.push(damage(i as u8));
                }
                while let Some(node) = stack.pop() {
                    black_box(node.id());
                }
            });
        });
    }
    group.finish();
}

/// Search for the bottom node, the worst case for the id shortcut.
fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    for depth in [8usize, 64, 512] {
        let mut stack = EventStack::new();
        let bottom = stack.push(damage(0));
        for i in 1..depth {
            stack.push(damage(i as u8));
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &bottom, |b, &bottom| {
            b.iter(|| black_box(stack.search(black_box(bottom)).is_some()));
        });
    }
    group.finish();
}

/// A full random four-player game.
fn benchmark_random_game(c: &mut Criterion) {
    let catalog = Arc::new(StarterCatalog::new());
    c.bench_function("random_game_4p", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let config = GameConfig::new(4).with_seed(seed).with_max_turns(40);
            let game = Game::new(config, catalog.clone(), Box::new(RandomChoices::new(seed)));
            if let Ok(mut game) = game {
                black_box(game.run().ok());
            }
        });
    });
}

criterion_group!(benches, benchmark_push_pop, benchmark_search, benchmark_random_game);
criterion_main!(benches);

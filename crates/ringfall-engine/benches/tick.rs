//! Criterion micro-benchmarks for the tick loop.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ringfall_engine::{ChainConfig, ChainWorld};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for links in [10usize, 100, 1000] {
        group.bench_function(format!("links_{links}"), |b| {
            let mut world = ChainWorld::new(ChainConfig {
                links,
                ..ChainConfig::default()
            })
            .unwrap();
            b.iter(|| {
                let result = world.tick();
                black_box(result.frame.len());
            });
        });
    }

    group.finish();
}

fn bench_contact_cascade(c: &mut Criterion) {
    // First-tick worst case: every pair starts coincident and resolves.
    c.bench_function("first_tick_cascade_links_100", |b| {
        b.iter_batched(
            || {
                ChainWorld::new(ChainConfig {
                    links: 100,
                    ..ChainConfig::default()
                })
                .unwrap()
            },
            |mut world| {
                let resolved = world.tick().metrics.contacts_resolved;
                black_box(resolved);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tick, bench_contact_cascade);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};

use uth_sim::core::{Card, CardSet, CombinationIter, live_cards};

fn dead_pair() -> CardSet {
    ["As", "Ks"]
        .iter()
        .map(|s| s.parse::<Card>().unwrap())
        .collect()
}

fn bench_board_completions(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_completions");

    // One and two cards to come: the shapes the equity engine walks
    // most often.
    for k in [1usize, 2] {
        group.bench_with_input(
            criterion::BenchmarkId::new("choose", k),
            &k,
            |b, &k| {
                b.iter(|| CombinationIter::new(live_cards(dead_pair()), k).count());
            },
        );
    }

    group.finish();
}

fn bench_full_five_card_sweep(c: &mut Criterion) {
    c.bench_function("five_card_sweep", |b| {
        b.iter(|| CombinationIter::new(live_cards(CardSet::new()), 5).count());
    });
}

criterion_group!(benches, bench_board_completions, bench_full_five_card_sweep);
criterion_main!(benches);

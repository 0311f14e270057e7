use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use wallet_core::{History, ManualClock, Operation, SupplyPool, Units, Wallet};

fn make_history(len: usize, offset_ms: i64) -> History {
    let mut history = History::default();
    for i in 0..len {
        let at = DateTime::<Utc>::default() + Duration::milliseconds(2 * i as i64 + offset_ms);
        history.push(Operation::new(Units::new(i as u64), at));
    }
    history
}

fn bench_history_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_merge");
    let closing = Operation::new(Units::ZERO, DateTime::<Utc>::default() + Duration::days(1));

    for len in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("interleaved", len), &len, |b, &len| {
            b.iter_batched(
                || (make_history(len, 0), make_history(len, 1)),
                |(left, right)| black_box(History::merge(left, right, closing)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wallet_transfers(c: &mut Criterion) {
    let clock = Arc::new(ManualClock::default());
    let pool = SupplyPool::with_clock(wallet_core::TOTAL_SUPPLY, clock);

    c.bench_function("absorb_round_trip", |b| {
        b.iter_batched(
            || {
                (
                    Wallet::from_coins(&pool, 10).unwrap(),
                    Wallet::from_coins(&pool, 5).unwrap(),
                )
            },
            |(mut a, mut other)| {
                a.absorb(&mut other).unwrap();
                other.absorb(&mut a).unwrap();
                black_box((a, other))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_history_merge, bench_wallet_transfers);
criterion_main!(benches);

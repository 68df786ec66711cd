use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use tallymap::{top_words, weighted_sum_hash, ChainedTable};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("w{:016x}", n)
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("chained_table_put_10k", |b| {
        b.iter_batched(
            || ChainedTable::<u64>::new(2048, weighted_sum_hash).unwrap(),
            |mut table| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    table.put(&key(x), i as u64);
                }
                black_box(table)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_table_get_hit", |b| {
        let mut table = ChainedTable::<u64>::new(4096, weighted_sum_hash).unwrap();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            table.put(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(table.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_table_get_miss", |b| {
        let mut table = ChainedTable::<u64>::new(4096, weighted_sum_hash).unwrap();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            table.put(&key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in table
            let k = key(miss.next().unwrap());
            black_box(table.get(&k));
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("chained_table_resize_10k", |b| {
        b.iter_batched(
            || {
                let mut table = ChainedTable::<u64>::new(1024, weighted_sum_hash).unwrap();
                for (i, x) in lcg(3).take(10_000).enumerate() {
                    table.put(&key(x), i as u64);
                }
                table
            },
            |mut table| {
                table.resize(4096).unwrap();
                black_box(table)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_top_words(c: &mut Criterion) {
    c.bench_function("top_words_20k", |b| {
        let text = lcg(5)
            .take(20_000)
            .map(|x| format!("w{:03x}", x % 4096))
            .collect::<Vec<_>>()
            .join(" ");
        b.iter(|| black_box(top_words(&text, 10).unwrap()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_get_hit, bench_get_miss, bench_resize, bench_top_words
}
criterion_main!(benches);

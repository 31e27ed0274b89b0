use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use sorted_vec_set::SortedVecSet;

const COUNTS: [usize; 2] = [1000, 10000];

fn shuffled_keys(count: usize) -> Vec<u64> {
    let mut keys = (0..count as u64).collect::<Vec<_>>();
    keys.shuffle(&mut rand::thread_rng());
    keys
}

fn benchmark_sorted_vec_set(c: &mut Criterion) {
    for count in COUNTS {
        let keys = shuffled_keys(count);

        c.bench_function(format!("sorted_vec_set insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = SortedVecSet::new();
                for k in &keys {
                    set.insert(*k);
                }
                set
            });
        });

        c.bench_function(format!("sorted_vec_set bulk load {count}").as_str(), |b| {
            b.iter(|| keys.iter().copied().collect::<SortedVecSet<_>>());
        });

        c.bench_function(format!("sorted_vec_set get {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<SortedVecSet<_>>();

            b.iter(|| {
                for k in &keys {
                    black_box(set.get(k));
                }
            });
        });

        c.bench_function(format!("sorted_vec_set iter {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<SortedVecSet<_>>();

            b.iter(|| {
                let mut sum = 0u64;
                for k in set.iter() {
                    sum += *k;
                }
                sum
            });
        });

        c.bench_function(format!("sorted_vec_set remove {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<SortedVecSet<_>>();

            b.iter(|| {
                let mut set = set.clone();
                for k in &keys {
                    set.remove(k);
                }
                set
            });
        });
    }
}

fn benchmark_btree_set(c: &mut Criterion) {
    for count in COUNTS {
        let keys = shuffled_keys(count);

        c.bench_function(format!("btree_set insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for k in &keys {
                    set.insert(*k);
                }
                set
            });
        });

        c.bench_function(format!("btree_set get {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<BTreeSet<_>>();

            b.iter(|| {
                for k in &keys {
                    black_box(set.get(k));
                }
            });
        });

        c.bench_function(format!("btree_set iter {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<BTreeSet<_>>();

            b.iter(|| {
                let mut sum = 0u64;
                for k in set.iter() {
                    sum += *k;
                }
                sum
            });
        });

        c.bench_function(format!("btree_set remove {count}").as_str(), |b| {
            let set = keys.iter().copied().collect::<BTreeSet<_>>();

            b.iter(|| {
                let mut set = set.clone();
                for k in &keys {
                    set.remove(k);
                }
                set
            });
        });
    }
}

criterion_group!(benches, benchmark_sorted_vec_set, benchmark_btree_set);
criterion_main!(benches);

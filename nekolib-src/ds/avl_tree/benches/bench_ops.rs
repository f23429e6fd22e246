use std::collections::BTreeMap;

use avl_tree::AvlTree;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Permute, Shuffled};

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("avl_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0xE7, 0x58, 0x22, 0xB4, 0x6F, 0xD1, 0x07, 0x8E, 0x45,
        0xF3, 0x19, 0x6A, 0xC0, 0x2D, 0x94, 0x7B, 0xE8, 0x10, 0x5F, 0xA6, 0x33,
        0xCB, 0x04, 0x79, 0xDE, 0x62, 0x8B, 0x15, 0xF0,
    ]);

    for len in [1_000, 10_000, 100_000] {
        let keys =
            Shuffled { bound: 0..10 * len as i32, len }.generate(&mut rng);
        let queries = Permute(keys.clone()).generate(&mut rng);

        group.bench_with_input(
            BenchmarkId::new("insert/avl", len),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut tree = AvlTree::new();
                    for &k in keys {
                        tree.insert(k, k);
                    }
                    tree
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("insert/btree", len),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut map = BTreeMap::new();
                    for &k in keys {
                        map.entry(k).or_insert(k);
                    }
                    map
                })
            },
        );

        let tree: AvlTree<_, _> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<_, _> = keys.iter().map(|&k| (k, k)).collect();
        group.bench_with_input(
            BenchmarkId::new("search/avl", len),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for k in queries {
                        black_box(tree.search(k).ok());
                    }
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("search/btree", len),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for k in queries {
                        black_box(map.get(k));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("erase/avl", len),
            &queries,
            |b, queries| {
                b.iter_batched_ref(
                    || tree.clone(),
                    |tree| {
                        for k in queries {
                            tree.erase(k);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("clear/avl", len),
            &(),
            |b, _| {
                b.iter_batched_ref(
                    || tree.clone(),
                    |tree| tree.clear(),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);

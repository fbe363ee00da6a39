use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use chain_hash::HashTable;
use chain_hash::hash_table::Entry;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashTable as HashbrownHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use siphasher::sip::SipHasher;

const SIZES: &[usize] = &[1 << 10, 1 << 16];

fn hash_key(key: u64) -> u64 {
    let mut hasher = SipHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0x0ddba11);
    (0..count).map(|_| rng.random()).collect()
}

fn chain_table(keys: &[u64]) -> HashTable<u64> {
    let mut table = HashTable::with_capacity(keys.len());
    for &key in keys {
        if let Entry::Vacant(entry) = table.entry(hash_key(key), |k| *k == key) {
            entry.insert(key);
        }
    }
    table
}

fn hashbrown_table(keys: &[u64]) -> HashbrownHashTable<u64> {
    let mut table = HashbrownHashTable::with_capacity(keys.len());
    for &key in keys {
        table.insert_unique(hash_key(key), key, |k| hash_key(*k));
    }
    table
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashTable::with_capacity(keys.len());
                    for key in keys {
                        if let Entry::Vacant(entry) = table.entry(hash_key(key), |k| *k == key) {
                            entry.insert(key);
                        }
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashbrownHashTable::with_capacity(keys.len());
                    for key in keys {
                        table.insert_unique(hash_key(key), key, |k| hash_key(*k));
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_find_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hit");
    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        let chain = chain_table(&keys);
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter(|| {
                for &key in &keys {
                    black_box(chain.find(hash_key(key), |k| *k == key));
                }
            })
        });

        let brown = hashbrown_table(&keys);
        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter(|| {
                for &key in &keys {
                    black_box(brown.find(hash_key(key), |k| *k == key));
                }
            })
        });
    }
    group.finish();
}

fn bench_find_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_miss");
    for &size in SIZES {
        let keys = random_keys(size);
        let missing: Vec<u64> = keys.iter().map(|&key| !key).collect();
        group.throughput(Throughput::Elements(size as u64));

        let chain = chain_table(&keys);
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter(|| {
                for &key in &missing {
                    black_box(chain.find(hash_key(key), |k| *k == key));
                }
            })
        });

        let brown = hashbrown_table(&keys);
        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter(|| {
                for &key in &missing {
                    black_box(brown.find(hash_key(key), |k| *k == key));
                }
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        let chain = chain_table(&keys);
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter_batched(
                || chain.clone(),
                |mut table| {
                    for &key in &keys {
                        black_box(table.remove(hash_key(key), |k| *k == key));
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });

        let brown = hashbrown_table(&keys);
        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter_batched(
                || brown.clone(),
                |mut table| {
                    for &key in &keys {
                        if let Ok(entry) = table.find_entry(hash_key(key), |k| *k == key) {
                            black_box(entry.remove().0);
                        }
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_find_hit,
    bench_find_miss,
    bench_remove
);
criterion_main!(benches);

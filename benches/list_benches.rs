use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use rand::seq::SliceRandom;
use slotlist::DoublyLinkedList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// --- End insertion and removal ---

fn ends_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ends");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("push_then_pop", size), |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                list.push_values(0..size as u64);
                while let Some(value) = list.pop_value() {
                    black_box(value);
                }
            });
        });

        group.bench_function(BenchmarkId::new("unshift_then_shift", size), |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                list.unshift_values(0..size as u64);
                while let Some(value) = list.shift_value() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

// --- Indexed access ---

fn indexed_access_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_access");

    for size in SIZES {
        let list = DoublyLinkedList::from_values(0..size as u64);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("get_shuffled", size), |b| {
            b.iter_with_setup(
                || {
                    let mut indices: Vec<usize> = (0..size).collect();
                    indices.shuffle(&mut rand::rng());
                    indices
                },
                |indices| {
                    for index in indices {
                        black_box(list.get(index));
                    }
                },
            );
        });
    }

    group.finish();
}

// --- Relocation ---

fn relocation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("relocation");

    const MOVES: usize = 256;

    for size in SIZES {
        group.throughput(Throughput::Elements(MOVES as u64));
        group.bench_function(BenchmarkId::new("move_random", size), |b| {
            b.iter_with_setup(
                || {
                    let mut rng = rand::rng();
                    let pairs: Vec<(usize, usize)> = (0..MOVES)
                        .map(|_| (rng.random_range(0..size), rng.random_range(0..size)))
                        .collect();
                    (DoublyLinkedList::from_values(0..size as u64), pairs)
                },
                |(mut list, pairs)| {
                    for (from, to) in pairs {
                        list.move_node(from, to);
                    }
                    black_box(list.len());
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    ends_benchmark,
    indexed_access_benchmark,
    relocation_benchmark
);
criterion_main!(benches);

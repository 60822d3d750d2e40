use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use needle_map::{CompactMap, CompactMapConfig, NeedleIndex};
use needle_types::{NeedleId, Offset, Size};

const N: u64 = 100_000;

fn filled_map() -> CompactMap {
    let map = CompactMap::with_config(CompactMapConfig::default().with_initial_capacity(N as usize));
    for i in 0..N {
        map.set(NeedleId::new(i), Offset::from_u32(i as u32), Size(128));
    }
    map
}

fn compact_map_set(c: &mut Criterion) {
    c.bench_function("compact_map_set_100k", |b| {
        b.iter(filled_map);
    });
}

fn compact_map_get(c: &mut Criterion) {
    let map = filled_map();
    c.bench_function("compact_map_get_100k", |b| {
        b.iter(|| {
            for i in 0..N {
                assert!(map.get(NeedleId::new(i)).is_some());
            }
        });
    });
}

fn compact_map_ascending_visit(c: &mut Criterion) {
    c.bench_function("compact_map_ascending_visit_100k", |b| {
        b.iter_batched(
            filled_map,
            |map| {
                let mut count = 0u64;
                map.ascending_visit(|_| {
                    count += 1;
                    Ok::<(), ()>(())
                })
                .unwrap();
                assert_eq!(count, N);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    compact_map_set,
    compact_map_get,
    compact_map_ascending_visit
);
criterion_main!(benches);

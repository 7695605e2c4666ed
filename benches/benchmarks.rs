use tumbler::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        allocating_hundred_members,
        spinning_limited_round,
}

fn allocating_hundred_members(c: &mut criterion::Criterion) {
    let members = (0..100).map(|i| format!("member {}", i)).collect::<Vec<String>>();
    let allocator = Allocator::new(members, 7);
    c.bench_function("allocate 100 members into 7 groups", |b| {
        b.iter(|| allocator.allocate())
    });
}

fn spinning_limited_round(c: &mut criterion::Criterion) {
    let config = DrawConfig {
        mode: DrawMode::Limited,
        allow_duplicates: false,
    };
    let slots = (1..=8).map(|i| Slot::new(i, format!("wheel {}", i))).collect::<Vec<Slot>>();
    let pools = Pools::Shared(Pool::new(
        (0..64).map(|i| format!("option {}", i)).collect(),
    ));
    c.bench_function("spin 8 slots against a 64-option pool", |b| {
        b.iter(|| {
            let mut engine = DrawEngine::new(config, slots.clone(), pools.clone()).unwrap();
            engine.spin()
        })
    });
}

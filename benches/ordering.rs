use arrange::{Column, ColumnData, Engine, LocaleSelector, Mode, OrderSpec, Table};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn gen_table(n: usize, seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let words = [
        "alpha", "beta", "gamma", "delta", "mañana", "Ähre", "zebra", "Quark",
    ];
    let mut id: Vec<Option<i64>> = Vec::with_capacity(n);
    let mut val: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut name: Vec<Option<String>> = Vec::with_capacity(n);
    for _ in 0..n {
        id.push(Some(rng.gen_range(-1_000_000..1_000_000)));
        val.push(if rng.gen_bool(0.05) {
            None
        } else {
            Some(rng.gen::<f64>() * 1000.0)
        });
        name.push(Some(format!(
            "{}-{}",
            words[rng.gen_range(0..words.len())],
            rng.gen_range(0..1000)
        )));
    }
    Table::new(vec![
        Column::new("id", ColumnData::Int(id)),
        Column::new("val", ColumnData::Real(val)),
        Column::new("name", ColumnData::Text(name)),
    ])
    .expect("table build")
}

fn bench_ordering(c: &mut Criterion) {
    let ns = [10_000usize, 100_000usize];
    let mut group = c.benchmark_group("ordering");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);

    let engine = Engine::new();
    let numeric_specs = [OrderSpec::new("val").descending(), OrderSpec::new("id")];
    let text_specs = [OrderSpec::new("name"), OrderSpec::new("id")];

    for &n in &ns {
        let table = gen_table(n, 0xABCD_1234);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("radix_numeric", n), &n, |b, _| {
            b.iter(|| {
                engine
                    .order(&table, &numeric_specs, &LocaleSelector::C, Mode::Normal)
                    .expect("order")
            })
        });

        group.bench_with_input(BenchmarkId::new("radix_text_c", n), &n, |b, _| {
            b.iter(|| {
                engine
                    .order(&table, &text_specs, &LocaleSelector::C, Mode::Normal)
                    .expect("order")
            })
        });

        let es = LocaleSelector::parse("es").expect("locale");
        group.bench_with_input(BenchmarkId::new("radix_text_collated", n), &n, |b, _| {
            b.iter(|| {
                engine
                    .order(&table, &text_specs, &es, Mode::Normal)
                    .expect("order")
            })
        });

        group.bench_with_input(BenchmarkId::new("legacy_comparison", n), &n, |b, _| {
            b.iter(|| {
                engine
                    .order(&table, &text_specs, &LocaleSelector::C, Mode::Legacy)
                    .expect("order")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ordering);
criterion_main!(benches);

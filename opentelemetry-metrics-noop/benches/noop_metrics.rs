use criterion::{criterion_group, criterion_main, Criterion};
use opentelemetry::{
    metrics::{Counter, Histogram, MeterProvider as _},
    KeyValue,
};
use opentelemetry_metrics_noop::NoopMeterProvider;

use rand::{rngs::SmallRng, Rng, SeedableRng};

// Run this benchmark with:
// cargo bench --bench noop_metrics
fn create_counter() -> Counter<u64> {
    let meter_provider = NoopMeterProvider::new();
    let meter = meter_provider.meter("benchmarks");
    meter.u64_counter("counter_bench").build()
}

fn criterion_benchmark(c: &mut Criterion) {
    noop_counter_add(c);
    noop_histogram_record(c);
}

fn random_indices(num_samples: usize) -> Vec<(usize, usize, usize, usize)> {
    let mut rng = SmallRng::from_os_rng();
    (0..num_samples)
        .map(|_| {
            (
                rng.random_range(0..4),
                rng.random_range(0..4),
                rng.random_range(0..10),
                rng.random_range(0..10),
            )
        })
        .collect()
}

fn noop_counter_add(c: &mut Criterion) {
    let attribute_values = [
        "value1", "value2", "value3", "value4", "value5", "value6", "value7", "value8", "value9",
        "value10",
    ];
    let random_indices = random_indices(1000);

    let noop_counter = create_counter();
    c.bench_function("Noop_Counter", |b| {
        // Cycle through the pre-generated indices so every iteration gets a "random" set.
        let mut indices_iter = random_indices.iter().cycle();
        b.iter(|| {
            let (first, second, third, fourth) = indices_iter.next().unwrap();
            noop_counter.add(
                1,
                &[
                    KeyValue::new("attribute1", attribute_values[*first]),
                    KeyValue::new("attribute2", attribute_values[*second]),
                    KeyValue::new("attribute3", attribute_values[*third]),
                    KeyValue::new("attribute4", attribute_values[*fourth]),
                ],
            );
        });
    });

    c.bench_function("Noop_Counter_Without_Meter", |b| {
        let counter: Counter<u64> = opentelemetry_metrics_noop::counter();
        b.iter(|| counter.add(1, &[]));
    });
}

fn noop_histogram_record(c: &mut Criterion) {
    let histogram: Histogram<f64> = opentelemetry_metrics_noop::meter()
        .f64_histogram("histogram_bench")
        .build();
    c.bench_function("Noop_Histogram", |b| {
        b.iter(|| histogram.record(0.5, &[KeyValue::new("attribute1", "value1")]));
    });
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use opentelemetry::metrics::MeterProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_metrics_noop::NoopMeterProvider;
use opentelemetry_semconv_metrics::attribute::HttpRequestMethod;
use opentelemetry_semconv_metrics::{db, http};

use rand::{rngs::SmallRng, Rng, SeedableRng};

// Run this benchmark with:
// cargo bench --bench semconv_metrics
fn criterion_benchmark(c: &mut Criterion) {
    histogram_record(c);
    counter_add(c);
}

const METHODS: [HttpRequestMethod; 4] = [
    HttpRequestMethod::Get,
    HttpRequestMethod::Post,
    HttpRequestMethod::Put,
    HttpRequestMethod::Delete,
];

fn random_methods(num_samples: usize) -> Vec<usize> {
    let mut rng = SmallRng::from_os_rng();
    (0..num_samples)
        .map(|_| rng.random_range(0..METHODS.len()))
        .collect()
}

fn histogram_record(c: &mut Criterion) {
    let indices = random_methods(1000);
    let meter = NoopMeterProvider::new().meter("benchmarks");

    let raw = meter.f64_histogram("http.server.request.duration").build();
    c.bench_function("Raw_Histogram_Required_Attributes", |b| {
        let mut indices_iter = indices.iter().cycle();
        b.iter(|| {
            let method = METHODS[*indices_iter.next().unwrap()];
            raw.record(
                0.1,
                &[
                    KeyValue::new("http.request.method", method),
                    KeyValue::new("url.scheme", "https"),
                ],
            );
        });
    });

    let typed = http::ServerRequestDuration::new(Some(&meter));
    c.bench_function("Semconv_Histogram_Required_Attributes", |b| {
        let mut indices_iter = indices.iter().cycle();
        b.iter(|| {
            let method = METHODS[*indices_iter.next().unwrap()];
            typed.record(0.1, method, "https", &[]);
        });
    });

    c.bench_function("Semconv_Histogram_Extra_Attributes", |b| {
        let mut indices_iter = indices.iter().cycle();
        b.iter(|| {
            let method = METHODS[*indices_iter.next().unwrap()];
            typed.record(
                0.1,
                method,
                "https",
                &[
                    http::ServerRequestDuration::attr_response_status_code(200),
                    http::ServerRequestDuration::attr_route("/users/{id}"),
                ],
            );
        });
    });

    let without_meter = http::ServerRequestDuration::new(None);
    c.bench_function("Semconv_Histogram_Without_Meter", |b| {
        b.iter(|| without_meter.record(0.1, HttpRequestMethod::Get, "https", &[]));
    });
}

fn counter_add(c: &mut Criterion) {
    let timeouts = db::ClientConnectionTimeouts::new(None);
    c.bench_function("Semconv_Counter_Without_Meter", |b| {
        b.iter(|| timeouts.add(1, "primary", &[]));
    });
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);

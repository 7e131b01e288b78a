use opentelemetry::KeyValue;
use opentelemetry_semconv_metrics::attribute::{
    CpuMode, DbClientConnectionState, DbSystemName, HttpRequestMethod, MessagingSystem,
    ProcessContextSwitchType,
};
use opentelemetry_semconv_metrics::testing::{InstrumentKind, Measurement, RecordingMeter};
use opentelemetry_semconv_metrics::{db, http, messaging, process, rpc, system, HistogramOptions};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

#[test]
fn instruments_are_created_with_convention_metadata() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let _duration = http::ServerRequestDuration::new(Some(&meter));
    let _timeouts = db::ClientConnectionTimeouts::new(Some(&meter));
    let _count = db::ClientConnectionCount::new(Some(&meter));

    let created = recorder.instruments();
    assert_eq!(created.len(), 3);

    assert_eq!(created[0].kind, InstrumentKind::Histogram);
    assert_eq!(created[0].name, "http.server.request.duration");
    assert_eq!(created[0].unit.as_deref(), Some("s"));
    assert_eq!(
        created[0].description.as_deref(),
        Some("Duration of HTTP server requests.")
    );
    assert_eq!(created[0].boundaries, None);

    assert_eq!(created[1].kind, InstrumentKind::Counter);
    assert_eq!(created[1].unit.as_deref(), Some("{timeout}"));
    assert_eq!(created[2].kind, InstrumentKind::UpDownCounter);
}

#[test]
fn required_attributes_precede_extra_ones() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let duration = http::ServerRequestDuration::new(Some(&meter));
    duration.record(
        0.25,
        HttpRequestMethod::Get,
        "https",
        &[
            http::ServerRequestDuration::attr_response_status_code(404),
            http::ServerRequestDuration::attr_route("/items/{id}"),
        ],
    );

    let measurements = recorder.measurements();
    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].instrument, "http.server.request.duration");
    assert_eq!(measurements[0].value, Measurement::F64(0.25));
    assert_eq!(
        measurements[0].attributes,
        vec![
            KeyValue::new("http.request.method", "GET"),
            KeyValue::new("url.scheme", "https"),
            KeyValue::new("http.response.status_code", 404),
            KeyValue::new("http.route", "/items/{id}"),
        ]
    );
}

#[test]
fn required_attributes_alone() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let connections = db::ClientConnectionCount::new(Some(&meter));
    connections.add(2, "pool-a", DbClientConnectionState::Used, &[]);
    connections.add(-1, String::from("pool-a"), DbClientConnectionState::Idle, &[]);

    let operation = db::ClientOperationDuration::new(Some(&meter));
    operation.record(
        0.003,
        DbSystemName::Custom("duckdb".into()),
        &[db::ClientOperationDuration::attr_collection_name("users")],
    );

    let sent = messaging::ClientSentMessages::new(Some(&meter));
    sent.add(5, "publish", MessagingSystem::Rabbitmq, &[]);

    let measurements = recorder.measurements();
    assert_eq!(measurements.len(), 4);
    assert_eq!(measurements[0].value, Measurement::I64(2));
    assert_eq!(
        measurements[0].attributes,
        vec![
            KeyValue::new("db.client.connection.pool.name", "pool-a"),
            KeyValue::new("db.client.connection.state", "used"),
        ]
    );
    assert_eq!(measurements[1].value, Measurement::I64(-1));
    assert_eq!(
        measurements[1].attributes[1],
        KeyValue::new("db.client.connection.state", "idle")
    );
    assert_eq!(
        measurements[2].attributes,
        vec![
            KeyValue::new("db.system.name", "duckdb"),
            KeyValue::new("db.collection.name", "users"),
        ]
    );
    assert_eq!(measurements[3].value, Measurement::U64(5));
    assert_eq!(
        measurements[3].attributes,
        vec![
            KeyValue::new("messaging.operation.name", "publish"),
            KeyValue::new("messaging.system", "rabbitmq"),
        ]
    );
}

#[test]
fn metrics_without_required_attributes_pass_extras_through() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let size = rpc::ClientRequestSize::new(Some(&meter));
    size.record(512, &[]);
    size.record(1024, &[rpc::ClientRequestSize::attr_service("Greeter")]);

    let measurements = recorder.measurements();
    assert_eq!(measurements.len(), 2);
    assert_eq!(measurements[0].value, Measurement::U64(512));
    assert!(measurements[0].attributes.is_empty());
    assert_eq!(
        measurements[1].attributes,
        vec![KeyValue::new("rpc.service", "Greeter")]
    );
}

#[test]
fn overrides_reach_the_meter() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let histogram = rpc::ServerDuration::with_options(
        Some(&meter),
        HistogramOptions::new()
            .with_description("Server side RPC latency.")
            .with_boundaries(vec![1.0, 10.0, 100.0]),
    )
    .expect("options are valid");
    histogram.record(7.0, &[]);

    let created = recorder.instruments();
    assert_eq!(created[0].name, "rpc.server.duration");
    assert_eq!(created[0].unit.as_deref(), Some("ms"));
    assert_eq!(
        created[0].description.as_deref(),
        Some("Server side RPC latency.")
    );
    assert_eq!(created[0].boundaries, Some(vec![1.0, 10.0, 100.0]));
}

#[test]
fn invalid_options_create_nothing() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let result = http::ClientRequestBodySize::with_options(
        Some(&meter),
        HistogramOptions::new().with_boundaries(vec![]),
    );
    assert!(result.is_err());
    assert!(recorder.instruments().is_empty());
}

#[test]
fn observable_callbacks_run_on_collect() {
    let recorder = RecordingMeter::new();
    let meter = recorder.meter();

    let switches = Arc::new(AtomicI64::new(0));
    let observed = Arc::clone(&switches);
    let _context_switches = process::ContextSwitches::new(Some(&meter), move |observer| {
        let voluntary = observed.fetch_add(10, Ordering::SeqCst) + 10;
        observer.observe(
            voluntary as u64,
            &[process::ContextSwitches::attr_context_switch_type(
                ProcessContextSwitchType::Voluntary,
            )],
        );
    });
    let _cpu_time = system::CpuTime::new(Some(&meter), |observer| {
        observer.observe(
            1.5,
            &[
                system::CpuTime::attr_cpu_logical_number(0),
                system::CpuTime::attr_cpu_mode(CpuMode::User),
            ],
        );
    });

    assert!(recorder.measurements().is_empty());
    let created = recorder.instruments();
    assert_eq!(created[0].kind, InstrumentKind::ObservableCounter);
    assert_eq!(created[0].name, "process.context_switches");

    recorder.collect();
    recorder.collect();

    let measurements = recorder.measurements();
    assert_eq!(measurements.len(), 4);
    assert_eq!(measurements[0].value, Measurement::U64(10));
    assert_eq!(
        measurements[0].attributes,
        vec![KeyValue::new("process.context_switch_type", "voluntary")]
    );
    assert_eq!(measurements[1].instrument, "system.cpu.time");
    assert_eq!(
        measurements[1].attributes,
        vec![
            KeyValue::new("cpu.logical_number", 0),
            KeyValue::new("cpu.mode", "user"),
        ]
    );
    assert_eq!(measurements[2].value, Measurement::U64(20));
}

#[test]
fn missing_meter_records_nothing_anywhere() {
    let recorder = RecordingMeter::new();

    let duration = http::ClientRequestDuration::new(None);
    duration.record(1.0, HttpRequestMethod::Put, "example.com", 443, &[]);
    let _limit = system::MemoryLimit::new(None, |observer| observer.observe(1, &[]));
    recorder.collect();

    assert!(recorder.instruments().is_empty());
    assert!(recorder.measurements().is_empty());
}

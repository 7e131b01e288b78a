use opentelemetry::{KeyValue, Value};
use opentelemetry_semantic_conventions as semconv;
use opentelemetry_semconv_metrics::attribute::{
    DbSystemName, ErrorType, HttpRequestMethod, MessagingSystem, RpcGrpcStatusCode, RpcSystem,
    SystemMemoryState,
};
use opentelemetry_semconv_metrics::{
    db, http, messaging, process, rpc, system, HistogramOptions, InstrumentOptions, Metric,
    MetricError, Stability,
};
use rstest::rstest;

fn metadata<M: Metric>() -> (&'static str, &'static str, &'static str) {
    (M::NAME, M::UNIT, M::DESCRIPTION)
}

#[rstest]
#[case(
    metadata::<http::ClientActiveRequests>(),
    semconv::metric::HTTP_CLIENT_ACTIVE_REQUESTS,
    "{request}",
    "Number of active HTTP requests."
)]
#[case(
    metadata::<http::ClientConnectionDuration>(),
    semconv::metric::HTTP_CLIENT_CONNECTION_DURATION,
    "s",
    "The duration of the successfully established outbound HTTP connections."
)]
#[case(
    metadata::<http::ClientOpenConnections>(),
    semconv::metric::HTTP_CLIENT_OPEN_CONNECTIONS,
    "{connection}",
    "Number of outbound HTTP connections that are currently active or idle on the client."
)]
#[case(
    metadata::<http::ClientRequestBodySize>(),
    semconv::metric::HTTP_CLIENT_REQUEST_BODY_SIZE,
    "By",
    "Size of HTTP client request bodies."
)]
#[case(
    metadata::<http::ClientRequestDuration>(),
    semconv::metric::HTTP_CLIENT_REQUEST_DURATION,
    "s",
    "Duration of HTTP client requests."
)]
#[case(
    metadata::<http::ClientResponseBodySize>(),
    semconv::metric::HTTP_CLIENT_RESPONSE_BODY_SIZE,
    "By",
    "Size of HTTP client response bodies."
)]
#[case(
    metadata::<http::ServerActiveRequests>(),
    semconv::metric::HTTP_SERVER_ACTIVE_REQUESTS,
    "{request}",
    "Number of active HTTP server requests."
)]
#[case(
    metadata::<http::ServerRequestBodySize>(),
    semconv::metric::HTTP_SERVER_REQUEST_BODY_SIZE,
    "By",
    "Size of HTTP server request bodies."
)]
#[case(
    metadata::<http::ServerRequestDuration>(),
    semconv::metric::HTTP_SERVER_REQUEST_DURATION,
    "s",
    "Duration of HTTP server requests."
)]
#[case(
    metadata::<http::ServerResponseBodySize>(),
    semconv::metric::HTTP_SERVER_RESPONSE_BODY_SIZE,
    "By",
    "Size of HTTP server response bodies."
)]
#[case(
    metadata::<db::ClientConnectionCount>(),
    semconv::metric::DB_CLIENT_CONNECTION_COUNT,
    "{connection}",
    "The number of connections that are currently in state described by the `state` attribute."
)]
#[case(
    metadata::<db::ClientConnectionCreateTime>(),
    semconv::metric::DB_CLIENT_CONNECTION_CREATE_TIME,
    "s",
    "The time it took to create a new connection."
)]
#[case(
    metadata::<db::ClientConnectionIdleMax>(),
    semconv::metric::DB_CLIENT_CONNECTION_IDLE_MAX,
    "{connection}",
    "The maximum number of idle open connections allowed."
)]
#[case(
    metadata::<db::ClientConnectionIdleMin>(),
    semconv::metric::DB_CLIENT_CONNECTION_IDLE_MIN,
    "{connection}",
    "The minimum number of idle open connections allowed."
)]
#[case(
    metadata::<db::ClientConnectionMax>(),
    semconv::metric::DB_CLIENT_CONNECTION_MAX,
    "{connection}",
    "The maximum number of open connections allowed."
)]
#[case(
    metadata::<db::ClientConnectionPendingRequests>(),
    semconv::metric::DB_CLIENT_CONNECTION_PENDING_REQUESTS,
    "{request}",
    "The number of current pending requests for an open connection."
)]
#[case(
    metadata::<db::ClientConnectionTimeouts>(),
    semconv::metric::DB_CLIENT_CONNECTION_TIMEOUTS,
    "{timeout}",
    "The number of connection timeouts that have occurred trying to obtain a connection from the pool."
)]
#[case(
    metadata::<db::ClientConnectionUseTime>(),
    semconv::metric::DB_CLIENT_CONNECTION_USE_TIME,
    "s",
    "The time between borrowing a connection and returning it to the pool."
)]
#[case(
    metadata::<db::ClientConnectionWaitTime>(),
    semconv::metric::DB_CLIENT_CONNECTION_WAIT_TIME,
    "s",
    "The time it took to obtain an open connection from the pool."
)]
#[case(
    metadata::<db::ClientOperationDuration>(),
    semconv::metric::DB_CLIENT_OPERATION_DURATION,
    "s",
    "Duration of database client operations."
)]
#[case(
    metadata::<db::ClientResponseReturnedRows>(),
    semconv::metric::DB_CLIENT_RESPONSE_RETURNED_ROWS,
    "{row}",
    "The actual number of records returned by the database operation."
)]
#[case(
    metadata::<rpc::ClientDuration>(),
    semconv::metric::RPC_CLIENT_DURATION,
    "ms",
    "Measures the duration of outbound RPC."
)]
#[case(
    metadata::<rpc::ClientRequestSize>(),
    semconv::metric::RPC_CLIENT_REQUEST_SIZE,
    "By",
    "Measures the size of RPC request messages (uncompressed)."
)]
#[case(
    metadata::<rpc::ClientRequestsPerRpc>(),
    semconv::metric::RPC_CLIENT_REQUESTS_PER_RPC,
    "{count}",
    "Measures the number of messages received per RPC."
)]
#[case(
    metadata::<rpc::ClientResponseSize>(),
    semconv::metric::RPC_CLIENT_RESPONSE_SIZE,
    "By",
    "Measures the size of RPC response messages (uncompressed)."
)]
#[case(
    metadata::<rpc::ClientResponsesPerRpc>(),
    semconv::metric::RPC_CLIENT_RESPONSES_PER_RPC,
    "{count}",
    "Measures the number of messages sent per RPC."
)]
#[case(
    metadata::<rpc::ServerDuration>(),
    semconv::metric::RPC_SERVER_DURATION,
    "ms",
    "Measures the duration of inbound RPC."
)]
#[case(
    metadata::<rpc::ServerRequestSize>(),
    semconv::metric::RPC_SERVER_REQUEST_SIZE,
    "By",
    "Measures the size of RPC request messages (uncompressed)."
)]
#[case(
    metadata::<rpc::ServerRequestsPerRpc>(),
    semconv::metric::RPC_SERVER_REQUESTS_PER_RPC,
    "{count}",
    "Measures the number of messages received per RPC."
)]
#[case(
    metadata::<rpc::ServerResponseSize>(),
    semconv::metric::RPC_SERVER_RESPONSE_SIZE,
    "By",
    "Measures the size of RPC response messages (uncompressed)."
)]
#[case(
    metadata::<rpc::ServerResponsesPerRpc>(),
    semconv::metric::RPC_SERVER_RESPONSES_PER_RPC,
    "{count}",
    "Measures the number of messages sent per RPC."
)]
#[case(
    metadata::<messaging::ClientConsumedMessages>(),
    semconv::metric::MESSAGING_CLIENT_CONSUMED_MESSAGES,
    "{message}",
    "Number of messages that were delivered to the application."
)]
#[case(
    metadata::<messaging::ClientOperationDuration>(),
    semconv::metric::MESSAGING_CLIENT_OPERATION_DURATION,
    "s",
    "Duration of messaging operation initiated by a producer or consumer client."
)]
#[case(
    metadata::<messaging::ClientSentMessages>(),
    semconv::metric::MESSAGING_CLIENT_SENT_MESSAGES,
    "{message}",
    "Number of messages producer attempted to send to the broker."
)]
#[case(
    metadata::<messaging::ProcessDuration>(),
    semconv::metric::MESSAGING_PROCESS_DURATION,
    "s",
    "Duration of processing operation."
)]
#[case(
    metadata::<system::CpuFrequency>(),
    semconv::metric::SYSTEM_CPU_FREQUENCY,
    "Hz",
    "Operating frequency of the logical CPU in Hertz."
)]
#[case(
    metadata::<system::CpuLogicalCount>(),
    semconv::metric::SYSTEM_CPU_LOGICAL_COUNT,
    "{cpu}",
    "Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking."
)]
#[case(
    metadata::<system::CpuPhysicalCount>(),
    semconv::metric::SYSTEM_CPU_PHYSICAL_COUNT,
    "{cpu}",
    "Reports the number of actual physical processor cores on the hardware."
)]
#[case(
    metadata::<system::CpuTime>(),
    semconv::metric::SYSTEM_CPU_TIME,
    "s",
    "Seconds each logical CPU spent on each mode."
)]
#[case(
    metadata::<system::CpuUtilization>(),
    semconv::metric::SYSTEM_CPU_UTILIZATION,
    "1",
    "For each logical CPU, the utilization is calculated as the change in cumulative CPU time (cpu.time) over a measurement interval, divided by the elapsed time."
)]
#[case(
    metadata::<system::DiskIo>(),
    semconv::metric::SYSTEM_DISK_IO,
    "By",
    "Disk bytes transferred."
)]
#[case(
    metadata::<system::DiskIoTime>(),
    semconv::metric::SYSTEM_DISK_IO_TIME,
    "s",
    "Time disk spent activated."
)]
#[case(
    metadata::<system::FilesystemUsage>(),
    semconv::metric::SYSTEM_FILESYSTEM_USAGE,
    "By",
    "Reports a filesystem's space usage across different states."
)]
#[case(
    metadata::<system::MemoryLimit>(),
    semconv::metric::SYSTEM_MEMORY_LIMIT,
    "By",
    "Total memory available in the system."
)]
#[case(
    metadata::<system::MemoryUsage>(),
    semconv::metric::SYSTEM_MEMORY_USAGE,
    "By",
    "Reports memory in use by state."
)]
#[case(
    metadata::<system::MemoryUtilization>(),
    semconv::metric::SYSTEM_MEMORY_UTILIZATION,
    "1",
    "Percentage of memory bytes in use."
)]
#[case(
    metadata::<system::NetworkIo>(),
    semconv::metric::SYSTEM_NETWORK_IO,
    "By",
    "The number of bytes transmitted and received."
)]
#[case(
    metadata::<system::ProcessCount>(),
    semconv::metric::SYSTEM_PROCESS_COUNT,
    "{process}",
    "Total number of processes in each state."
)]
#[case(
    metadata::<system::ProcessCreated>(),
    semconv::metric::SYSTEM_PROCESS_CREATED,
    "{process}",
    "Total number of processes created over uptime of the host."
)]
#[case(
    metadata::<system::Uptime>(),
    semconv::metric::SYSTEM_UPTIME,
    "s",
    "The time the system has been running."
)]
#[case(
    metadata::<process::ContextSwitches>(),
    semconv::metric::PROCESS_CONTEXT_SWITCHES,
    "{context_switch}",
    "Number of times the process has been context switched."
)]
#[case(
    metadata::<process::CpuTime>(),
    semconv::metric::PROCESS_CPU_TIME,
    "s",
    "Total CPU seconds broken down by different states."
)]
#[case(
    metadata::<process::CpuUtilization>(),
    semconv::metric::PROCESS_CPU_UTILIZATION,
    "1",
    "Difference in process.cpu.time since the last measurement, divided by the elapsed time and number of CPUs available to the process."
)]
#[case(
    metadata::<process::DiskIo>(),
    semconv::metric::PROCESS_DISK_IO,
    "By",
    "Disk bytes transferred."
)]
#[case(
    metadata::<process::MemoryUsage>(),
    semconv::metric::PROCESS_MEMORY_USAGE,
    "By",
    "The amount of physical memory in use."
)]
#[case(
    metadata::<process::MemoryVirtual>(),
    semconv::metric::PROCESS_MEMORY_VIRTUAL,
    "By",
    "The amount of committed virtual memory."
)]
#[case(
    metadata::<process::NetworkIo>(),
    semconv::metric::PROCESS_NETWORK_IO,
    "By",
    "Network bytes transferred."
)]
#[case(
    metadata::<process::PagingFaults>(),
    semconv::metric::PROCESS_PAGING_FAULTS,
    "{fault}",
    "Number of page faults the process has made."
)]
#[case(
    metadata::<process::ThreadCount>(),
    semconv::metric::PROCESS_THREAD_COUNT,
    "{thread}",
    "Process threads count."
)]
#[case(
    metadata::<process::OpenFileDescriptorCount>(),
    semconv::metric::PROCESS_OPEN_FILE_DESCRIPTOR_COUNT,
    "{file_descriptor}",
    "Number of file descriptors in use by the process."
)]
#[case(
    metadata::<process::Uptime>(),
    semconv::metric::PROCESS_UPTIME,
    "s",
    "The time the process has been running."
)]
fn catalog_matches_published_conventions(
    #[case] actual: (&'static str, &'static str, &'static str),
    #[case] published_name: &'static str,
    #[case] expected_unit: &'static str,
    #[case] expected_description: &'static str,
) {
    let (name, unit, description) = actual;
    assert_eq!(name, published_name);
    assert_eq!(unit, expected_unit, "unit of {name}");
    assert_eq!(description, expected_description, "description of {name}");
}

#[test]
fn attribute_keys_match_the_published_conventions() {
    assert_eq!(HttpRequestMethod::KEY, semconv::attribute::HTTP_REQUEST_METHOD);
    assert_eq!(ErrorType::KEY, semconv::attribute::ERROR_TYPE);
    assert_eq!(DbSystemName::KEY, semconv::attribute::DB_SYSTEM_NAME);
    assert_eq!(RpcSystem::KEY, semconv::attribute::RPC_SYSTEM);
    assert_eq!(MessagingSystem::KEY, semconv::attribute::MESSAGING_SYSTEM);
    assert_eq!(
        http::ServerRequestDuration::attr_response_status_code(200).key.as_str(),
        semconv::attribute::HTTP_RESPONSE_STATUS_CODE
    );
    assert_eq!(
        http::ServerRequestDuration::attr_server_address("example.com")
            .key
            .as_str(),
        semconv::attribute::SERVER_ADDRESS
    );
    assert_eq!(
        db::ClientOperationDuration::attr_stored_procedure_name("GetCustomer"),
        KeyValue::new(semconv::attribute::DB_STORED_PROCEDURE_NAME, "GetCustomer")
    );
}

#[rstest]
#[case(http::ServerRequestDuration::STABILITY, Stability::Stable)]
#[case(http::ClientRequestDuration::STABILITY, Stability::Stable)]
#[case(db::ClientOperationDuration::STABILITY, Stability::Stable)]
#[case(http::ServerActiveRequests::STABILITY, Stability::Development)]
#[case(rpc::ClientDuration::STABILITY, Stability::Development)]
#[case(system::CpuTime::STABILITY, Stability::Development)]
fn stability_levels(#[case] actual: Stability, #[case] expected: Stability) {
    assert_eq!(actual, expected);
}

#[rstest]
#[case(HttpRequestMethod::Get, "GET")]
#[case(HttpRequestMethod::Connect, "CONNECT")]
#[case(HttpRequestMethod::Other, "_OTHER")]
fn closed_enum_values(#[case] method: HttpRequestMethod, #[case] expected: &'static str) {
    assert_eq!(method.as_str(), expected);
    assert_eq!(method.to_string(), expected);
    assert_eq!(Value::from(method), Value::from(expected));
}

#[rstest]
#[case(DbSystemName::Postgresql, "postgresql")]
#[case(DbSystemName::MicrosoftSqlServer, "microsoft.sql_server")]
#[case(DbSystemName::OtherSql, "other_sql")]
#[case(DbSystemName::Custom("duckdb".into()), "duckdb")]
fn open_enum_values(#[case] system: DbSystemName, #[case] expected: &'static str) {
    assert_eq!(system.as_str(), expected);
    assert_eq!(Value::from(system), Value::from(expected));
}

#[test]
fn custom_values_may_be_owned() {
    let error = ErrorType::Custom(format!("{}Error", "Timeout").into());
    assert_eq!(error.as_str(), "TimeoutError");
    assert_eq!(Value::from(error), Value::from("TimeoutError"));
}

#[rstest]
#[case(RpcGrpcStatusCode::Ok, 0)]
#[case(RpcGrpcStatusCode::NotFound, 5)]
#[case(RpcGrpcStatusCode::Unauthenticated, 16)]
fn grpc_status_codes_are_integers(#[case] code: RpcGrpcStatusCode, #[case] expected: i64) {
    assert_eq!(code.as_i64(), expected);
    assert_eq!(Value::from(code), Value::I64(expected));
}

#[test]
fn attribute_helpers_build_typed_values() {
    assert_eq!(
        rpc::ClientDuration::attr_grpc_status_code(RpcGrpcStatusCode::Unavailable),
        KeyValue::new("rpc.grpc.status_code", 14)
    );
    assert_eq!(
        rpc::ClientDuration::attr_system(RpcSystem::Grpc),
        KeyValue::new("rpc.system", "grpc")
    );
    assert_eq!(
        system::MemoryUsage::attr_memory_state(SystemMemoryState::Cached),
        KeyValue::new("system.memory.state", "cached")
    );
    assert_eq!(
        messaging::ClientSentMessages::attr_destination_name(String::from("orders")),
        KeyValue::new("messaging.destination.name", "orders")
    );
}

#[test]
fn instruments_without_meter_accept_measurements() {
    http::ServerRequestDuration::new(None).record(
        0.1,
        HttpRequestMethod::Post,
        "http",
        &[http::ServerRequestDuration::attr_error_type(ErrorType::Other)],
    );
    http::ClientOpenConnections::new(None).add(
        -1,
        opentelemetry_semconv_metrics::attribute::HttpConnectionState::Idle,
        "example.com",
        443,
        &[],
    );
    db::ClientConnectionTimeouts::new(None).add(1, "primary", &[]);
    rpc::ServerResponsesPerRpc::new(None).record(3, &[]);
    messaging::ClientConsumedMessages::new(None).add(
        10,
        "poll",
        MessagingSystem::Kafka,
        &[],
    );
    let _uptime = process::Uptime::new(None, |observer| observer.observe(12.5, &[]));
}

#[test]
fn invalid_units_are_rejected() {
    let err = http::ServerActiveRequests::with_options(
        None,
        InstrumentOptions::new().with_unit("ünit"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MetricError::InvalidUnit {
            metric: "http.server.active_requests",
            ..
        }
    ));

    let err = system::Uptime::with_options(
        None,
        InstrumentOptions::new().with_unit("s".repeat(64)),
        |_| {},
    )
    .unwrap_err();
    assert!(matches!(err, MetricError::InvalidUnit { metric: "system.uptime", .. }));
}

#[test]
fn invalid_boundaries_are_rejected() {
    let err = db::ClientOperationDuration::with_options(
        None,
        HistogramOptions::new().with_boundaries(vec![1.0, 0.5]),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid histogram boundaries for db.client.operation.duration: boundaries must be strictly increasing"
    );
}

#[test]
fn valid_options_are_accepted() {
    let histogram = http::ClientRequestDuration::with_options(
        None,
        HistogramOptions::new()
            .with_unit("ms")
            .with_boundaries(vec![5.0, 10.0, 25.0, 50.0]),
    );
    assert!(histogram.is_ok());
}

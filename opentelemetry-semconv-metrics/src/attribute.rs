// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/attribute.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! Typed values for enumerated semantic-convention attributes.
//!
//! Closed enums list every value the conventions allow. Open enums also
//! carry a `Custom` variant for values the conventions do not know about.
use opentelemetry::{StringValue, Value};
use std::borrow::Cow;
use std::fmt;

/// The mode of the CPU
///
/// Values of the `cpu.mode` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CpuMode {
    /// user
    User,
    /// system
    System,
    /// nice
    Nice,
    /// idle
    Idle,
    /// iowait
    Iowait,
    /// interrupt
    Interrupt,
    /// steal
    Steal,
    /// kernel
    Kernel,
}

impl CpuMode {
    /// The attribute key, `cpu.mode`.
    pub const KEY: &'static str = "cpu.mode";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            CpuMode::User => "user",
            CpuMode::System => "system",
            CpuMode::Nice => "nice",
            CpuMode::Idle => "idle",
            CpuMode::Iowait => "iowait",
            CpuMode::Interrupt => "interrupt",
            CpuMode::Steal => "steal",
            CpuMode::Kernel => "kernel",
        }
    }
}

impl fmt::Display for CpuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CpuMode> for Value {
    fn from(value: CpuMode) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The state of a connection in the pool
///
/// Values of the `db.client.connection.state` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DbClientConnectionState {
    /// idle
    Idle,
    /// used
    Used,
}

impl DbClientConnectionState {
    /// The attribute key, `db.client.connection.state`.
    pub const KEY: &'static str = "db.client.connection.state";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DbClientConnectionState::Idle => "idle",
            DbClientConnectionState::Used => "used",
        }
    }
}

impl fmt::Display for DbClientConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DbClientConnectionState> for Value {
    fn from(value: DbClientConnectionState) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The database management system (DBMS) product as identified by the client instrumentation.
///
/// Values of the `db.system.name` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DbSystemName {
    /// Some other SQL database. Fallback only.
    OtherSql,
    /// [Amazon DynamoDB](https://aws.amazon.com/pm/dynamodb/)
    AwsDynamodb,
    /// [Azure Cosmos DB](https://learn.microsoft.com/azure/cosmos-db)
    AzureCosmosdb,
    /// [Apache Cassandra](https://cassandra.apache.org/)
    Cassandra,
    /// [ClickHouse](https://clickhouse.com/)
    Clickhouse,
    /// [CockroachDB](https://www.cockroachlabs.com/)
    Cockroachdb,
    /// [Couchbase](https://www.couchbase.com/)
    Couchbase,
    /// [Apache CouchDB](https://couchdb.apache.org/)
    Couchdb,
    /// [Elasticsearch](https://www.elastic.co/elasticsearch)
    Elasticsearch,
    /// [H2 Database](https://h2database.com/)
    H2database,
    /// [Apache HBase](https://hbase.apache.org/)
    Hbase,
    /// [IBM Db2](https://www.ibm.com/db2)
    IbmDb2,
    /// [MariaDB](https://mariadb.org/)
    Mariadb,
    /// [Memcached](https://memcached.org/)
    Memcached,
    /// [Microsoft SQL Server](https://www.microsoft.com/sql-server)
    MicrosoftSqlServer,
    /// [MongoDB](https://www.mongodb.com/)
    Mongodb,
    /// [MySQL](https://www.mysql.com/)
    Mysql,
    /// [Neo4j](https://neo4j.com/)
    Neo4j,
    /// [OpenSearch](https://opensearch.org/)
    Opensearch,
    /// [Oracle Database](https://www.oracle.com/database/)
    OracleDb,
    /// [PostgreSQL](https://www.postgresql.org/)
    Postgresql,
    /// [Redis](https://redis.io/)
    Redis,
    /// [SQLite](https://www.sqlite.org/)
    Sqlite,
    /// [Trino](https://trino.io/)
    Trino,
    /// A value not listed in the semantic conventions.
    Custom(Cow<'static, str>),
}

impl DbSystemName {
    /// The attribute key, `db.system.name`.
    pub const KEY: &'static str = "db.system.name";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            DbSystemName::OtherSql => "other_sql",
            DbSystemName::AwsDynamodb => "aws.dynamodb",
            DbSystemName::AzureCosmosdb => "azure.cosmosdb",
            DbSystemName::Cassandra => "cassandra",
            DbSystemName::Clickhouse => "clickhouse",
            DbSystemName::Cockroachdb => "cockroachdb",
            DbSystemName::Couchbase => "couchbase",
            DbSystemName::Couchdb => "couchdb",
            DbSystemName::Elasticsearch => "elasticsearch",
            DbSystemName::H2database => "h2database",
            DbSystemName::Hbase => "hbase",
            DbSystemName::IbmDb2 => "ibm.db2",
            DbSystemName::Mariadb => "mariadb",
            DbSystemName::Memcached => "memcached",
            DbSystemName::MicrosoftSqlServer => "microsoft.sql_server",
            DbSystemName::Mongodb => "mongodb",
            DbSystemName::Mysql => "mysql",
            DbSystemName::Neo4j => "neo4j",
            DbSystemName::Opensearch => "opensearch",
            DbSystemName::OracleDb => "oracle.db",
            DbSystemName::Postgresql => "postgresql",
            DbSystemName::Redis => "redis",
            DbSystemName::Sqlite => "sqlite",
            DbSystemName::Trino => "trino",
            DbSystemName::Custom(value) => value,
        }
    }
}

impl fmt::Display for DbSystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DbSystemName> for Value {
    fn from(value: DbSystemName) -> Self {
        let value = match value {
            DbSystemName::OtherSql => Cow::Borrowed("other_sql"),
            DbSystemName::AwsDynamodb => Cow::Borrowed("aws.dynamodb"),
            DbSystemName::AzureCosmosdb => Cow::Borrowed("azure.cosmosdb"),
            DbSystemName::Cassandra => Cow::Borrowed("cassandra"),
            DbSystemName::Clickhouse => Cow::Borrowed("clickhouse"),
            DbSystemName::Cockroachdb => Cow::Borrowed("cockroachdb"),
            DbSystemName::Couchbase => Cow::Borrowed("couchbase"),
            DbSystemName::Couchdb => Cow::Borrowed("couchdb"),
            DbSystemName::Elasticsearch => Cow::Borrowed("elasticsearch"),
            DbSystemName::H2database => Cow::Borrowed("h2database"),
            DbSystemName::Hbase => Cow::Borrowed("hbase"),
            DbSystemName::IbmDb2 => Cow::Borrowed("ibm.db2"),
            DbSystemName::Mariadb => Cow::Borrowed("mariadb"),
            DbSystemName::Memcached => Cow::Borrowed("memcached"),
            DbSystemName::MicrosoftSqlServer => Cow::Borrowed("microsoft.sql_server"),
            DbSystemName::Mongodb => Cow::Borrowed("mongodb"),
            DbSystemName::Mysql => Cow::Borrowed("mysql"),
            DbSystemName::Neo4j => Cow::Borrowed("neo4j"),
            DbSystemName::Opensearch => Cow::Borrowed("opensearch"),
            DbSystemName::OracleDb => Cow::Borrowed("oracle.db"),
            DbSystemName::Postgresql => Cow::Borrowed("postgresql"),
            DbSystemName::Redis => Cow::Borrowed("redis"),
            DbSystemName::Sqlite => Cow::Borrowed("sqlite"),
            DbSystemName::Trino => Cow::Borrowed("trino"),
            DbSystemName::Custom(value) => value,
        };
        Value::String(StringValue::from(value))
    }
}

/// The disk IO operation direction.
///
/// Values of the `disk.io.direction` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DiskIoDirection {
    /// read
    Read,
    /// write
    Write,
}

impl DiskIoDirection {
    /// The attribute key, `disk.io.direction`.
    pub const KEY: &'static str = "disk.io.direction";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskIoDirection::Read => "read",
            DiskIoDirection::Write => "write",
        }
    }
}

impl fmt::Display for DiskIoDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DiskIoDirection> for Value {
    fn from(value: DiskIoDirection) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// Describes a class of error the operation ended with.
///
/// Values of the `error.type` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorType {
    /// A fallback error value to be used when the instrumentation doesn't define a custom value.
    Other,
    /// A value not listed in the semantic conventions.
    Custom(Cow<'static, str>),
}

impl ErrorType {
    /// The attribute key, `error.type`.
    pub const KEY: &'static str = "error.type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorType::Other => "_OTHER",
            ErrorType::Custom(value) => value,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorType> for Value {
    fn from(value: ErrorType) -> Self {
        let value = match value {
            ErrorType::Other => Cow::Borrowed("_OTHER"),
            ErrorType::Custom(value) => value,
        };
        Value::String(StringValue::from(value))
    }
}

/// State of the HTTP connection in the HTTP connection pool.
///
/// Values of the `http.connection.state` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HttpConnectionState {
    /// active state.
    Active,
    /// idle state.
    Idle,
}

impl HttpConnectionState {
    /// The attribute key, `http.connection.state`.
    pub const KEY: &'static str = "http.connection.state";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpConnectionState::Active => "active",
            HttpConnectionState::Idle => "idle",
        }
    }
}

impl fmt::Display for HttpConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpConnectionState> for Value {
    fn from(value: HttpConnectionState) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// HTTP request method.
///
/// Values of the `http.request.method` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HttpRequestMethod {
    /// CONNECT method.
    Connect,
    /// DELETE method.
    Delete,
    /// GET method.
    Get,
    /// HEAD method.
    Head,
    /// OPTIONS method.
    Options,
    /// PATCH method.
    Patch,
    /// POST method.
    Post,
    /// PUT method.
    Put,
    /// TRACE method.
    Trace,
    /// Any HTTP method that the instrumentation has no prior knowledge of.
    Other,
}

impl HttpRequestMethod {
    /// The attribute key, `http.request.method`.
    pub const KEY: &'static str = "http.request.method";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpRequestMethod::Connect => "CONNECT",
            HttpRequestMethod::Delete => "DELETE",
            HttpRequestMethod::Get => "GET",
            HttpRequestMethod::Head => "HEAD",
            HttpRequestMethod::Options => "OPTIONS",
            HttpRequestMethod::Patch => "PATCH",
            HttpRequestMethod::Post => "POST",
            HttpRequestMethod::Put => "PUT",
            HttpRequestMethod::Trace => "TRACE",
            HttpRequestMethod::Other => "_OTHER",
        }
    }
}

impl fmt::Display for HttpRequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpRequestMethod> for Value {
    fn from(value: HttpRequestMethod) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// A string identifying the type of the messaging operation.
///
/// Values of the `messaging.operation.type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MessagingOperationType {
    /// A message is created. "Create" spans always refer to a single message and are used to provide a unique creation context for messages in batch sending scenarios.
    Create,
    /// One or more messages are provided for sending to an intermediary. If a single message is sent, the context of the "Send" span can be used as the creation context and no "Create" span needs to be created.
    Send,
    /// One or more messages are requested by a consumer. This operation refers to pull-based scenarios, where consumers explicitly call methods of messaging SDKs to receive messages.
    Receive,
    /// One or more messages are processed by a consumer.
    Process,
    /// One or more messages are settled.
    Settle,
}

impl MessagingOperationType {
    /// The attribute key, `messaging.operation.type`.
    pub const KEY: &'static str = "messaging.operation.type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagingOperationType::Create => "create",
            MessagingOperationType::Send => "send",
            MessagingOperationType::Receive => "receive",
            MessagingOperationType::Process => "process",
            MessagingOperationType::Settle => "settle",
        }
    }
}

impl fmt::Display for MessagingOperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MessagingOperationType> for Value {
    fn from(value: MessagingOperationType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The messaging system as identified by the client instrumentation.
///
/// Values of the `messaging.system` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MessagingSystem {
    /// Apache ActiveMQ
    Activemq,
    /// Amazon Simple Queue Service (SQS)
    AwsSqs,
    /// Azure Event Grid
    Eventgrid,
    /// Azure Event Hubs
    Eventhubs,
    /// Azure Service Bus
    Servicebus,
    /// Google Cloud Pub/Sub
    GcpPubsub,
    /// Java Message Service
    Jms,
    /// Apache Kafka
    Kafka,
    /// RabbitMQ
    Rabbitmq,
    /// Apache RocketMQ
    Rocketmq,
    /// Apache Pulsar
    Pulsar,
    /// A value not listed in the semantic conventions.
    Custom(Cow<'static, str>),
}

impl MessagingSystem {
    /// The attribute key, `messaging.system`.
    pub const KEY: &'static str = "messaging.system";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            MessagingSystem::Activemq => "activemq",
            MessagingSystem::AwsSqs => "aws_sqs",
            MessagingSystem::Eventgrid => "eventgrid",
            MessagingSystem::Eventhubs => "eventhubs",
            MessagingSystem::Servicebus => "servicebus",
            MessagingSystem::GcpPubsub => "gcp_pubsub",
            MessagingSystem::Jms => "jms",
            MessagingSystem::Kafka => "kafka",
            MessagingSystem::Rabbitmq => "rabbitmq",
            MessagingSystem::Rocketmq => "rocketmq",
            MessagingSystem::Pulsar => "pulsar",
            MessagingSystem::Custom(value) => value,
        }
    }
}

impl fmt::Display for MessagingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MessagingSystem> for Value {
    fn from(value: MessagingSystem) -> Self {
        let value = match value {
            MessagingSystem::Activemq => Cow::Borrowed("activemq"),
            MessagingSystem::AwsSqs => Cow::Borrowed("aws_sqs"),
            MessagingSystem::Eventgrid => Cow::Borrowed("eventgrid"),
            MessagingSystem::Eventhubs => Cow::Borrowed("eventhubs"),
            MessagingSystem::Servicebus => Cow::Borrowed("servicebus"),
            MessagingSystem::GcpPubsub => Cow::Borrowed("gcp_pubsub"),
            MessagingSystem::Jms => Cow::Borrowed("jms"),
            MessagingSystem::Kafka => Cow::Borrowed("kafka"),
            MessagingSystem::Rabbitmq => Cow::Borrowed("rabbitmq"),
            MessagingSystem::Rocketmq => Cow::Borrowed("rocketmq"),
            MessagingSystem::Pulsar => Cow::Borrowed("pulsar"),
            MessagingSystem::Custom(value) => value,
        };
        Value::String(StringValue::from(value))
    }
}

/// The network IO operation direction.
///
/// Values of the `network.io.direction` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NetworkIoDirection {
    /// transmit
    Transmit,
    /// receive
    Receive,
}

impl NetworkIoDirection {
    /// The attribute key, `network.io.direction`.
    pub const KEY: &'static str = "network.io.direction";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkIoDirection::Transmit => "transmit",
            NetworkIoDirection::Receive => "receive",
        }
    }
}

impl fmt::Display for NetworkIoDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NetworkIoDirection> for Value {
    fn from(value: NetworkIoDirection) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process communication method](https://wikipedia.org/wiki/Inter-process_communication).
///
/// Values of the `network.transport` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NetworkTransport {
    /// TCP
    Tcp,
    /// UDP
    Udp,
    /// Named or anonymous pipe.
    Pipe,
    /// Unix domain socket
    Unix,
    /// QUIC
    Quic,
}

impl NetworkTransport {
    /// The attribute key, `network.transport`.
    pub const KEY: &'static str = "network.transport";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkTransport::Tcp => "tcp",
            NetworkTransport::Udp => "udp",
            NetworkTransport::Pipe => "pipe",
            NetworkTransport::Unix => "unix",
            NetworkTransport::Quic => "quic",
        }
    }
}

impl fmt::Display for NetworkTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NetworkTransport> for Value {
    fn from(value: NetworkTransport) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
///
/// Values of the `network.type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NetworkType {
    /// IPv4
    Ipv4,
    /// IPv6
    Ipv6,
}

impl NetworkType {
    /// The attribute key, `network.type`.
    pub const KEY: &'static str = "network.type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Ipv4 => "ipv4",
            NetworkType::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NetworkType> for Value {
    fn from(value: NetworkType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// Specifies whether the context switches for this data point were voluntary or involuntary.
///
/// Values of the `process.context_switch_type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProcessContextSwitchType {
    /// voluntary
    Voluntary,
    /// involuntary
    Involuntary,
}

impl ProcessContextSwitchType {
    /// The attribute key, `process.context_switch_type`.
    pub const KEY: &'static str = "process.context_switch_type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessContextSwitchType::Voluntary => "voluntary",
            ProcessContextSwitchType::Involuntary => "involuntary",
        }
    }
}

impl fmt::Display for ProcessContextSwitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessContextSwitchType> for Value {
    fn from(value: ProcessContextSwitchType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The type of page fault for this data point. Type `major` is for major/hard page faults, and `minor` is for minor/soft page faults.
///
/// Values of the `process.paging.fault_type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProcessPagingFaultType {
    /// major
    Major,
    /// minor
    Minor,
}

impl ProcessPagingFaultType {
    /// The attribute key, `process.paging.fault_type`.
    pub const KEY: &'static str = "process.paging.fault_type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessPagingFaultType::Major => "major",
            ProcessPagingFaultType::Minor => "minor",
        }
    }
}

impl fmt::Display for ProcessPagingFaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessPagingFaultType> for Value {
    fn from(value: ProcessPagingFaultType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of the gRPC request.
///
/// Values of the `rpc.grpc.status_code` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RpcGrpcStatusCode {
    /// OK
    Ok,
    /// CANCELLED
    Cancelled,
    /// UNKNOWN
    Unknown,
    /// INVALID_ARGUMENT
    InvalidArgument,
    /// DEADLINE_EXCEEDED
    DeadlineExceeded,
    /// NOT_FOUND
    NotFound,
    /// ALREADY_EXISTS
    AlreadyExists,
    /// PERMISSION_DENIED
    PermissionDenied,
    /// RESOURCE_EXHAUSTED
    ResourceExhausted,
    /// FAILED_PRECONDITION
    FailedPrecondition,
    /// ABORTED
    Aborted,
    /// OUT_OF_RANGE
    OutOfRange,
    /// UNIMPLEMENTED
    Unimplemented,
    /// INTERNAL
    Internal,
    /// UNAVAILABLE
    Unavailable,
    /// DATA_LOSS
    DataLoss,
    /// UNAUTHENTICATED
    Unauthenticated,
}

impl RpcGrpcStatusCode {
    /// The attribute key, `rpc.grpc.status_code`.
    pub const KEY: &'static str = "rpc.grpc.status_code";

    /// The numeric value sent on the wire.
    pub fn as_i64(&self) -> i64 {
        match self {
            RpcGrpcStatusCode::Ok => 0,
            RpcGrpcStatusCode::Cancelled => 1,
            RpcGrpcStatusCode::Unknown => 2,
            RpcGrpcStatusCode::InvalidArgument => 3,
            RpcGrpcStatusCode::DeadlineExceeded => 4,
            RpcGrpcStatusCode::NotFound => 5,
            RpcGrpcStatusCode::AlreadyExists => 6,
            RpcGrpcStatusCode::PermissionDenied => 7,
            RpcGrpcStatusCode::ResourceExhausted => 8,
            RpcGrpcStatusCode::FailedPrecondition => 9,
            RpcGrpcStatusCode::Aborted => 10,
            RpcGrpcStatusCode::OutOfRange => 11,
            RpcGrpcStatusCode::Unimplemented => 12,
            RpcGrpcStatusCode::Internal => 13,
            RpcGrpcStatusCode::Unavailable => 14,
            RpcGrpcStatusCode::DataLoss => 15,
            RpcGrpcStatusCode::Unauthenticated => 16,
        }
    }
}

impl fmt::Display for RpcGrpcStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl From<RpcGrpcStatusCode> for Value {
    fn from(value: RpcGrpcStatusCode) -> Self {
        Value::I64(value.as_i64())
    }
}

/// A string identifying the remoting system. See below for a list of well-known identifiers.
///
/// Values of the `rpc.system` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RpcSystem {
    /// gRPC
    Grpc,
    /// Java RMI
    JavaRmi,
    /// .NET WCF
    DotnetWcf,
    /// Apache Dubbo
    ApacheDubbo,
    /// Connect RPC
    ConnectRpc,
    /// A value not listed in the semantic conventions.
    Custom(Cow<'static, str>),
}

impl RpcSystem {
    /// The attribute key, `rpc.system`.
    pub const KEY: &'static str = "rpc.system";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            RpcSystem::Grpc => "grpc",
            RpcSystem::JavaRmi => "java_rmi",
            RpcSystem::DotnetWcf => "dotnet_wcf",
            RpcSystem::ApacheDubbo => "apache_dubbo",
            RpcSystem::ConnectRpc => "connect_rpc",
            RpcSystem::Custom(value) => value,
        }
    }
}

impl fmt::Display for RpcSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RpcSystem> for Value {
    fn from(value: RpcSystem) -> Self {
        let value = match value {
            RpcSystem::Grpc => Cow::Borrowed("grpc"),
            RpcSystem::JavaRmi => Cow::Borrowed("java_rmi"),
            RpcSystem::DotnetWcf => Cow::Borrowed("dotnet_wcf"),
            RpcSystem::ApacheDubbo => Cow::Borrowed("apache_dubbo"),
            RpcSystem::ConnectRpc => Cow::Borrowed("connect_rpc"),
            RpcSystem::Custom(value) => value,
        };
        Value::String(StringValue::from(value))
    }
}

/// The filesystem state
///
/// Values of the `system.filesystem.state` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemFilesystemState {
    /// used
    Used,
    /// free
    Free,
    /// reserved
    Reserved,
}

impl SystemFilesystemState {
    /// The attribute key, `system.filesystem.state`.
    pub const KEY: &'static str = "system.filesystem.state";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemFilesystemState::Used => "used",
            SystemFilesystemState::Free => "free",
            SystemFilesystemState::Reserved => "reserved",
        }
    }
}

impl fmt::Display for SystemFilesystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SystemFilesystemState> for Value {
    fn from(value: SystemFilesystemState) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The filesystem type
///
/// Values of the `system.filesystem.type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemFilesystemType {
    /// fat32
    Fat32,
    /// exfat
    Exfat,
    /// ntfs
    Ntfs,
    /// refs
    Refs,
    /// hfsplus
    Hfsplus,
    /// ext4
    Ext4,
}

impl SystemFilesystemType {
    /// The attribute key, `system.filesystem.type`.
    pub const KEY: &'static str = "system.filesystem.type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemFilesystemType::Fat32 => "fat32",
            SystemFilesystemType::Exfat => "exfat",
            SystemFilesystemType::Ntfs => "ntfs",
            SystemFilesystemType::Refs => "refs",
            SystemFilesystemType::Hfsplus => "hfsplus",
            SystemFilesystemType::Ext4 => "ext4",
        }
    }
}

impl fmt::Display for SystemFilesystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SystemFilesystemType> for Value {
    fn from(value: SystemFilesystemType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The memory state
///
/// Values of the `system.memory.state` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemMemoryState {
    /// Actual used virtual memory in bytes.
    Used,
    /// free
    Free,
    /// buffers
    Buffers,
    /// cached
    Cached,
}

impl SystemMemoryState {
    /// The attribute key, `system.memory.state`.
    pub const KEY: &'static str = "system.memory.state";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemMemoryState::Used => "used",
            SystemMemoryState::Free => "free",
            SystemMemoryState::Buffers => "buffers",
            SystemMemoryState::Cached => "cached",
        }
    }
}

impl fmt::Display for SystemMemoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SystemMemoryState> for Value {
    fn from(value: SystemMemoryState) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// The process state, e.g., [Linux Process State Codes](https://man7.org/linux/man-pages/man1/ps.1.html#PROCESS_STATE_CODES)
///
/// Values of the `system.process.status` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SystemProcessStatus {
    /// running
    Running,
    /// sleeping
    Sleeping,
    /// stopped
    Stopped,
    /// defunct
    Defunct,
}

impl SystemProcessStatus {
    /// The attribute key, `system.process.status`.
    pub const KEY: &'static str = "system.process.status";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemProcessStatus::Running => "running",
            SystemProcessStatus::Sleeping => "sleeping",
            SystemProcessStatus::Stopped => "stopped",
            SystemProcessStatus::Defunct => "defunct",
        }
    }
}

impl fmt::Display for SystemProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SystemProcessStatus> for Value {
    fn from(value: SystemProcessStatus) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

/// Specifies the category of synthetic traffic, such as tests or bots.
///
/// Values of the `user_agent.synthetic.type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UserAgentSyntheticType {
    /// Bot source.
    Bot,
    /// Synthetic test source.
    Test,
}

impl UserAgentSyntheticType {
    /// The attribute key, `user_agent.synthetic.type`.
    pub const KEY: &'static str = "user_agent.synthetic.type";

    /// The value as it is sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAgentSyntheticType::Bot => "bot",
            UserAgentSyntheticType::Test => "test",
        }
    }
}

impl fmt::Display for UserAgentSyntheticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserAgentSyntheticType> for Value {
    fn from(value: UserAgentSyntheticType) -> Self {
        Value::String(StringValue::from(value.as_str()))
    }
}

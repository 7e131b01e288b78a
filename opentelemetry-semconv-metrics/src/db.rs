// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # Database metrics
//!
//! Typed instruments for the `db.*` metric semantic conventions
//! (version 1.36.0).
//!
//! Each instrument knows its name, unit and description, and takes the
//! attributes the conventions require as typed parameters.
use crate::attribute::{DbClientConnectionState, DbSystemName, ErrorType};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::{HistogramOptions, InstrumentOptions};
use opentelemetry::metrics::{Counter, Histogram, Meter, UpDownCounter};
use opentelemetry::{KeyValue, StringValue, Value};

/// `db.client.connection.count`
///
/// The number of connections that are currently in state described by the `state` attribute.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.count` | UpDownCounter | `{connection}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
/// | [`db.client.connection.state`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionCount::add
/// [`db.client.connection.state`]: crate::attribute::DbClientConnectionState
#[derive(Clone, Debug)]
pub struct ClientConnectionCount {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientConnectionCount {
    const NAME: &'static str = "db.client.connection.count";
    const UNIT: &'static str = "{connection}";
    const DESCRIPTION: &'static str = "The number of connections that are currently in state described by the `state` attribute.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionCount {
    /// Creates the `db.client.connection.count` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.count` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &UpDownCounter<i64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(
        &self,
        incr: i64,
        pool_name: impl Into<StringValue>,
        state: DbClientConnectionState,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
                KeyValue::new("db.client.connection.state", state),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.create_time`
///
/// The time it took to create a new connection.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.create_time` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionCreateTime::record
#[derive(Clone, Debug)]
pub struct ClientConnectionCreateTime {
    inner: Histogram<f64>,
}

impl Metric for ClientConnectionCreateTime {
    const NAME: &'static str = "db.client.connection.create_time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The time it took to create a new connection.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionCreateTime {
    /// Creates the `db.client.connection.create_time` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `db.client.connection.create_time` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: HistogramOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_histogram::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Histogram<f64> {
        &self.inner
    }

    /// Records `value` on the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn record(&self, value: f64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }
}

/// `db.client.connection.idle.max`
///
/// The maximum number of idle open connections allowed.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.idle.max` | UpDownCounter | `{connection}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionIdleMax::add
#[derive(Clone, Debug)]
pub struct ClientConnectionIdleMax {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientConnectionIdleMax {
    const NAME: &'static str = "db.client.connection.idle.max";
    const UNIT: &'static str = "{connection}";
    const DESCRIPTION: &'static str = "The maximum number of idle open connections allowed.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionIdleMax {
    /// Creates the `db.client.connection.idle.max` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.idle.max` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &UpDownCounter<i64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(&self, incr: i64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.idle.min`
///
/// The minimum number of idle open connections allowed.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.idle.min` | UpDownCounter | `{connection}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionIdleMin::add
#[derive(Clone, Debug)]
pub struct ClientConnectionIdleMin {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientConnectionIdleMin {
    const NAME: &'static str = "db.client.connection.idle.min";
    const UNIT: &'static str = "{connection}";
    const DESCRIPTION: &'static str = "The minimum number of idle open connections allowed.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionIdleMin {
    /// Creates the `db.client.connection.idle.min` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.idle.min` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &UpDownCounter<i64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(&self, incr: i64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.max`
///
/// The maximum number of open connections allowed.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.max` | UpDownCounter | `{connection}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionMax::add
#[derive(Clone, Debug)]
pub struct ClientConnectionMax {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientConnectionMax {
    const NAME: &'static str = "db.client.connection.max";
    const UNIT: &'static str = "{connection}";
    const DESCRIPTION: &'static str = "The maximum number of open connections allowed.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionMax {
    /// Creates the `db.client.connection.max` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.max` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &UpDownCounter<i64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(&self, incr: i64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.pending_requests`
///
/// The number of current pending requests for an open connection.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.pending_requests` | UpDownCounter | `{request}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionPendingRequests::add
#[derive(Clone, Debug)]
pub struct ClientConnectionPendingRequests {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientConnectionPendingRequests {
    const NAME: &'static str = "db.client.connection.pending_requests";
    const UNIT: &'static str = "{request}";
    const DESCRIPTION: &'static str = "The number of current pending requests for an open connection.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionPendingRequests {
    /// Creates the `db.client.connection.pending_requests` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.pending_requests` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &UpDownCounter<i64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(&self, incr: i64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.timeouts`
///
/// The number of connection timeouts that have occurred trying to obtain a connection from the pool.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.timeouts` | Counter | `{timeout}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionTimeouts::add
#[derive(Clone, Debug)]
pub struct ClientConnectionTimeouts {
    inner: Counter<u64>,
}

impl Metric for ClientConnectionTimeouts {
    const NAME: &'static str = "db.client.connection.timeouts";
    const UNIT: &'static str = "{timeout}";
    const DESCRIPTION: &'static str = "The number of connection timeouts that have occurred trying to obtain a connection from the pool.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionTimeouts {
    /// Creates the `db.client.connection.timeouts` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `db.client.connection.timeouts` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: InstrumentOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_counter::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Counter<u64> {
        &self.inner
    }

    /// Adds `incr` to the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn add(&self, incr: u64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }
}

/// `db.client.connection.use_time`
///
/// The time between borrowing a connection and returning it to the pool.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.use_time` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionUseTime::record
#[derive(Clone, Debug)]
pub struct ClientConnectionUseTime {
    inner: Histogram<f64>,
}

impl Metric for ClientConnectionUseTime {
    const NAME: &'static str = "db.client.connection.use_time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The time between borrowing a connection and returning it to the pool.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionUseTime {
    /// Creates the `db.client.connection.use_time` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `db.client.connection.use_time` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: HistogramOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_histogram::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Histogram<f64> {
        &self.inner
    }

    /// Records `value` on the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn record(&self, value: f64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }
}

/// `db.client.connection.wait_time`
///
/// The time it took to obtain an open connection from the pool.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.connection.wait_time` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.client.connection.pool.name`] | `Required` |
///
/// [`db.client.connection.pool.name`]: ClientConnectionWaitTime::record
#[derive(Clone, Debug)]
pub struct ClientConnectionWaitTime {
    inner: Histogram<f64>,
}

impl Metric for ClientConnectionWaitTime {
    const NAME: &'static str = "db.client.connection.wait_time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The time it took to obtain an open connection from the pool.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionWaitTime {
    /// Creates the `db.client.connection.wait_time` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `db.client.connection.wait_time` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: HistogramOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_histogram::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Histogram<f64> {
        &self.inner
    }

    /// Records `value` on the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn record(&self, value: f64, pool_name: impl Into<StringValue>, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.client.connection.pool.name", Value::String(pool_name.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }
}

/// `db.client.operation.duration`
///
/// Duration of database client operations.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.operation.duration` | Histogram | `s` | Stable |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.system.name`] | `Required` |
/// | [`db.collection.name`] | `Conditionally_required` |
/// | [`db.namespace`] | `Conditionally_required` |
/// | [`db.operation.name`] | `Conditionally_required` |
/// | [`db.response.status_code`] | `Conditionally_required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`server.port`] | `Conditionally_required` |
/// | [`db.query.summary`] | `Recommended` |
/// | [`db.stored_procedure.name`] | `Recommended` |
/// | [`network.peer.address`] | `Recommended` |
/// | [`network.peer.port`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`db.query.text`] | `Opt_in` |
///
/// [`db.system.name`]: crate::attribute::DbSystemName
/// [`db.collection.name`]: ClientOperationDuration::attr_collection_name
/// [`db.namespace`]: ClientOperationDuration::attr_namespace
/// [`db.operation.name`]: ClientOperationDuration::attr_operation_name
/// [`db.response.status_code`]: ClientOperationDuration::attr_response_status_code
/// [`error.type`]: crate::attribute::ErrorType
/// [`server.port`]: ClientOperationDuration::attr_server_port
/// [`db.query.summary`]: ClientOperationDuration::attr_query_summary
/// [`db.stored_procedure.name`]: ClientOperationDuration::attr_stored_procedure_name
/// [`network.peer.address`]: ClientOperationDuration::attr_network_peer_address
/// [`network.peer.port`]: ClientOperationDuration::attr_network_peer_port
/// [`server.address`]: ClientOperationDuration::attr_server_address
/// [`db.query.text`]: ClientOperationDuration::attr_query_text
#[derive(Clone, Debug)]
pub struct ClientOperationDuration {
    inner: Histogram<f64>,
}

impl Metric for ClientOperationDuration {
    const NAME: &'static str = "db.client.operation.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Duration of database client operations.";
    const STABILITY: Stability = Stability::Stable;
}

impl ClientOperationDuration {
    /// Creates the `db.client.operation.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `db.client.operation.duration` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: HistogramOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_histogram::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Histogram<f64> {
        &self.inner
    }

    /// Records `value` on the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn record(&self, value: f64, system_name: DbSystemName, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.system.name", system_name),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `db.collection.name` attribute.
    ///
    /// The name of a collection (table, container) within the database.
    pub fn attr_collection_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.collection.name", Value::String(value.into()))
    }

    /// Returns an optional `db.namespace` attribute.
    ///
    /// The name of the database, fully qualified within the server address and port.
    pub fn attr_namespace(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.namespace", Value::String(value.into()))
    }

    /// Returns an optional `db.operation.name` attribute.
    ///
    /// The name of the operation or command being executed.
    pub fn attr_operation_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.operation.name", Value::String(value.into()))
    }

    /// Returns an optional `db.response.status_code` attribute.
    ///
    /// Database response status code.
    pub fn attr_response_status_code(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.response.status_code", Value::String(value.into()))
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }

    /// Returns an optional `db.query.summary` attribute.
    ///
    /// Low cardinality summary of a database query.
    pub fn attr_query_summary(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.query.summary", Value::String(value.into()))
    }

    /// Returns an optional `db.stored_procedure.name` attribute.
    ///
    /// The name of a stored procedure within the database.
    pub fn attr_stored_procedure_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.stored_procedure.name", Value::String(value.into()))
    }

    /// Returns an optional `network.peer.address` attribute.
    ///
    /// Peer address of the network connection - IP address or Unix domain socket name.
    pub fn attr_network_peer_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.peer.address", Value::String(value.into()))
    }

    /// Returns an optional `network.peer.port` attribute.
    ///
    /// Peer port number of the network connection.
    pub fn attr_network_peer_port(value: i64) -> KeyValue {
        KeyValue::new("network.peer.port", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `db.query.text` attribute.
    ///
    /// The database query being executed.
    pub fn attr_query_text(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.query.text", Value::String(value.into()))
    }
}

/// `db.client.response.returned_rows`
///
/// The actual number of records returned by the database operation.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `db.client.response.returned_rows` | Histogram | `{row}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`db.system.name`] | `Required` |
/// | [`db.collection.name`] | `Conditionally_required` |
/// | [`db.namespace`] | `Conditionally_required` |
/// | [`db.operation.name`] | `Conditionally_required` |
/// | [`db.response.status_code`] | `Conditionally_required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`server.port`] | `Conditionally_required` |
/// | [`db.query.summary`] | `Recommended` |
/// | [`network.peer.address`] | `Recommended` |
/// | [`network.peer.port`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`db.query.text`] | `Opt_in` |
///
/// [`db.system.name`]: crate::attribute::DbSystemName
/// [`db.collection.name`]: ClientResponseReturnedRows::attr_collection_name
/// [`db.namespace`]: ClientResponseReturnedRows::attr_namespace
/// [`db.operation.name`]: ClientResponseReturnedRows::attr_operation_name
/// [`db.response.status_code`]: ClientResponseReturnedRows::attr_response_status_code
/// [`error.type`]: crate::attribute::ErrorType
/// [`server.port`]: ClientResponseReturnedRows::attr_server_port
/// [`db.query.summary`]: ClientResponseReturnedRows::attr_query_summary
/// [`network.peer.address`]: ClientResponseReturnedRows::attr_network_peer_address
/// [`network.peer.port`]: ClientResponseReturnedRows::attr_network_peer_port
/// [`server.address`]: ClientResponseReturnedRows::attr_server_address
/// [`db.query.text`]: ClientResponseReturnedRows::attr_query_text
#[derive(Clone, Debug)]
pub struct ClientResponseReturnedRows {
    inner: Histogram<u64>,
}

impl Metric for ClientResponseReturnedRows {
    const NAME: &'static str = "db.client.response.returned_rows";
    const UNIT: &'static str = "{row}";
    const DESCRIPTION: &'static str = "The actual number of records returned by the database operation.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientResponseReturnedRows {
    /// Creates the `db.client.response.returned_rows` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `db.client.response.returned_rows` instrument, applying `options`.
    pub fn with_options(meter: Option<&Meter>, options: HistogramOptions) -> Result<Self> {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_histogram::<Self>(meter, &options),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &Histogram<u64> {
        &self.inner
    }

    /// Records `value` on the instrument.
    ///
    /// The required attributes come first, followed by `attrs`.
    pub fn record(&self, value: u64, system_name: DbSystemName, attrs: &[KeyValue]) {
        instrument::with_attributes(
            [
                KeyValue::new("db.system.name", system_name),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `db.collection.name` attribute.
    ///
    /// The name of a collection (table, container) within the database.
    pub fn attr_collection_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.collection.name", Value::String(value.into()))
    }

    /// Returns an optional `db.namespace` attribute.
    ///
    /// The name of the database, fully qualified within the server address and port.
    pub fn attr_namespace(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.namespace", Value::String(value.into()))
    }

    /// Returns an optional `db.operation.name` attribute.
    ///
    /// The name of the operation or command being executed.
    pub fn attr_operation_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.operation.name", Value::String(value.into()))
    }

    /// Returns an optional `db.response.status_code` attribute.
    ///
    /// Database response status code.
    pub fn attr_response_status_code(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.response.status_code", Value::String(value.into()))
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }

    /// Returns an optional `db.query.summary` attribute.
    ///
    /// Low cardinality summary of a database query.
    pub fn attr_query_summary(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.query.summary", Value::String(value.into()))
    }

    /// Returns an optional `network.peer.address` attribute.
    ///
    /// Peer address of the network connection - IP address or Unix domain socket name.
    pub fn attr_network_peer_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.peer.address", Value::String(value.into()))
    }

    /// Returns an optional `network.peer.port` attribute.
    ///
    /// Peer port number of the network connection.
    pub fn attr_network_peer_port(value: i64) -> KeyValue {
        KeyValue::new("network.peer.port", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `db.query.text` attribute.
    ///
    /// The database query being executed.
    pub fn attr_query_text(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("db.query.text", Value::String(value.into()))
    }
}

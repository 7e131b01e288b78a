// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # RPC metrics
//!
//! Typed instruments for the `rpc.*` metric semantic conventions
//! (version 1.36.0).
//!
//! Each instrument knows its name, unit and description, and takes the
//! attributes the conventions require as typed parameters.
use crate::attribute::{NetworkTransport, NetworkType, RpcGrpcStatusCode, RpcSystem};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::HistogramOptions;
use opentelemetry::metrics::{Histogram, Meter};
use opentelemetry::{KeyValue, StringValue, Value};

/// `rpc.client.duration`
///
/// Measures the duration of outbound RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.client.duration` | Histogram | `ms` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ClientDuration::attr_method
/// [`rpc.service`]: ClientDuration::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ClientDuration::attr_server_address
/// [`server.port`]: ClientDuration::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientDuration {
    inner: Histogram<f64>,
}

impl Metric for ClientDuration {
    const NAME: &'static str = "rpc.client.duration";
    const UNIT: &'static str = "ms";
    const DESCRIPTION: &'static str = "Measures the duration of outbound RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientDuration {
    /// Creates the `rpc.client.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.client.duration` instrument, applying `options`.
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
    pub fn record(&self, value: f64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.client.request.size`
///
/// Measures the size of RPC request messages (uncompressed).
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.client.request.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ClientRequestSize::attr_method
/// [`rpc.service`]: ClientRequestSize::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ClientRequestSize::attr_server_address
/// [`server.port`]: ClientRequestSize::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientRequestSize {
    inner: Histogram<u64>,
}

impl Metric for ClientRequestSize {
    const NAME: &'static str = "rpc.client.request.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Measures the size of RPC request messages (uncompressed).";
    const STABILITY: Stability = Stability::Development;
}

impl ClientRequestSize {
    /// Creates the `rpc.client.request.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.client.request.size` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.client.requests_per_rpc`
///
/// Measures the number of messages received per RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.client.requests_per_rpc` | Histogram | `{count}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ClientRequestsPerRpc::attr_method
/// [`rpc.service`]: ClientRequestsPerRpc::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ClientRequestsPerRpc::attr_server_address
/// [`server.port`]: ClientRequestsPerRpc::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientRequestsPerRpc {
    inner: Histogram<u64>,
}

impl Metric for ClientRequestsPerRpc {
    const NAME: &'static str = "rpc.client.requests_per_rpc";
    const UNIT: &'static str = "{count}";
    const DESCRIPTION: &'static str = "Measures the number of messages received per RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientRequestsPerRpc {
    /// Creates the `rpc.client.requests_per_rpc` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.client.requests_per_rpc` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.client.response.size`
///
/// Measures the size of RPC response messages (uncompressed).
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.client.response.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ClientResponseSize::attr_method
/// [`rpc.service`]: ClientResponseSize::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ClientResponseSize::attr_server_address
/// [`server.port`]: ClientResponseSize::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientResponseSize {
    inner: Histogram<u64>,
}

impl Metric for ClientResponseSize {
    const NAME: &'static str = "rpc.client.response.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Measures the size of RPC response messages (uncompressed).";
    const STABILITY: Stability = Stability::Development;
}

impl ClientResponseSize {
    /// Creates the `rpc.client.response.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.client.response.size` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.client.responses_per_rpc`
///
/// Measures the number of messages sent per RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.client.responses_per_rpc` | Histogram | `{count}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ClientResponsesPerRpc::attr_method
/// [`rpc.service`]: ClientResponsesPerRpc::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ClientResponsesPerRpc::attr_server_address
/// [`server.port`]: ClientResponsesPerRpc::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientResponsesPerRpc {
    inner: Histogram<u64>,
}

impl Metric for ClientResponsesPerRpc {
    const NAME: &'static str = "rpc.client.responses_per_rpc";
    const UNIT: &'static str = "{count}";
    const DESCRIPTION: &'static str = "Measures the number of messages sent per RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientResponsesPerRpc {
    /// Creates the `rpc.client.responses_per_rpc` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.client.responses_per_rpc` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.server.duration`
///
/// Measures the duration of inbound RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.server.duration` | Histogram | `ms` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ServerDuration::attr_method
/// [`rpc.service`]: ServerDuration::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ServerDuration::attr_server_address
/// [`server.port`]: ServerDuration::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerDuration {
    inner: Histogram<f64>,
}

impl Metric for ServerDuration {
    const NAME: &'static str = "rpc.server.duration";
    const UNIT: &'static str = "ms";
    const DESCRIPTION: &'static str = "Measures the duration of inbound RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerDuration {
    /// Creates the `rpc.server.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.server.duration` instrument, applying `options`.
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
    pub fn record(&self, value: f64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.server.request.size`
///
/// Measures the size of RPC request messages (uncompressed).
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.server.request.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ServerRequestSize::attr_method
/// [`rpc.service`]: ServerRequestSize::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ServerRequestSize::attr_server_address
/// [`server.port`]: ServerRequestSize::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerRequestSize {
    inner: Histogram<u64>,
}

impl Metric for ServerRequestSize {
    const NAME: &'static str = "rpc.server.request.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Measures the size of RPC request messages (uncompressed).";
    const STABILITY: Stability = Stability::Development;
}

impl ServerRequestSize {
    /// Creates the `rpc.server.request.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.server.request.size` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.server.requests_per_rpc`
///
/// Measures the number of messages received per RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.server.requests_per_rpc` | Histogram | `{count}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ServerRequestsPerRpc::attr_method
/// [`rpc.service`]: ServerRequestsPerRpc::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ServerRequestsPerRpc::attr_server_address
/// [`server.port`]: ServerRequestsPerRpc::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerRequestsPerRpc {
    inner: Histogram<u64>,
}

impl Metric for ServerRequestsPerRpc {
    const NAME: &'static str = "rpc.server.requests_per_rpc";
    const UNIT: &'static str = "{count}";
    const DESCRIPTION: &'static str = "Measures the number of messages received per RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerRequestsPerRpc {
    /// Creates the `rpc.server.requests_per_rpc` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.server.requests_per_rpc` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.server.response.size`
///
/// Measures the size of RPC response messages (uncompressed).
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.server.response.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ServerResponseSize::attr_method
/// [`rpc.service`]: ServerResponseSize::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ServerResponseSize::attr_server_address
/// [`server.port`]: ServerResponseSize::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerResponseSize {
    inner: Histogram<u64>,
}

impl Metric for ServerResponseSize {
    const NAME: &'static str = "rpc.server.response.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Measures the size of RPC response messages (uncompressed).";
    const STABILITY: Stability = Stability::Development;
}

impl ServerResponseSize {
    /// Creates the `rpc.server.response.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.server.response.size` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `rpc.server.responses_per_rpc`
///
/// Measures the number of messages sent per RPC.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `rpc.server.responses_per_rpc` | Histogram | `{count}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`rpc.grpc.status_code`] | `Conditionally_required` |
/// | [`network.transport`] | `Recommended` |
/// | [`network.type`] | `Recommended` |
/// | [`rpc.method`] | `Recommended` |
/// | [`rpc.service`] | `Recommended` |
/// | [`rpc.system`] | `Recommended` |
/// | [`server.address`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`rpc.grpc.status_code`]: crate::attribute::RpcGrpcStatusCode
/// [`network.transport`]: crate::attribute::NetworkTransport
/// [`network.type`]: crate::attribute::NetworkType
/// [`rpc.method`]: ServerResponsesPerRpc::attr_method
/// [`rpc.service`]: ServerResponsesPerRpc::attr_service
/// [`rpc.system`]: crate::attribute::RpcSystem
/// [`server.address`]: ServerResponsesPerRpc::attr_server_address
/// [`server.port`]: ServerResponsesPerRpc::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerResponsesPerRpc {
    inner: Histogram<u64>,
}

impl Metric for ServerResponsesPerRpc {
    const NAME: &'static str = "rpc.server.responses_per_rpc";
    const UNIT: &'static str = "{count}";
    const DESCRIPTION: &'static str = "Measures the number of messages sent per RPC.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerResponsesPerRpc {
    /// Creates the `rpc.server.responses_per_rpc` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `rpc.server.responses_per_rpc` instrument, applying `options`.
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
    pub fn record(&self, value: u64, attrs: &[KeyValue]) {
        self.inner.record(value, attrs)
    }

    /// Returns an optional `rpc.grpc.status_code` attribute.
    ///
    /// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md) of
    /// the gRPC request.
    pub fn attr_grpc_status_code(value: RpcGrpcStatusCode) -> KeyValue {
        KeyValue::new("rpc.grpc.status_code", value)
    }

    /// Returns an optional `network.transport` attribute.
    ///
    /// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process
    /// communication method](https://wikipedia.org/wiki/Inter-process_communication).
    pub fn attr_network_transport(value: NetworkTransport) -> KeyValue {
        KeyValue::new("network.transport", value)
    }

    /// Returns an optional `network.type` attribute.
    ///
    /// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
    pub fn attr_network_type(value: NetworkType) -> KeyValue {
        KeyValue::new("network.type", value)
    }

    /// Returns an optional `rpc.method` attribute.
    ///
    /// The name of the (logical) method being called, must be equal to the $method part in the
    /// span name.
    pub fn attr_method(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.method", Value::String(value.into()))
    }

    /// Returns an optional `rpc.service` attribute.
    ///
    /// The full (logical) name of the service being called, including its package name, if
    /// applicable.
    pub fn attr_service(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("rpc.service", Value::String(value.into()))
    }

    /// Returns an optional `rpc.system` attribute.
    ///
    /// A string identifying the remoting system. See below for a list of well-known identifiers.
    pub fn attr_system(value: RpcSystem) -> KeyValue {
        KeyValue::new("rpc.system", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

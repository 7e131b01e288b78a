// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # HTTP metrics
//!
//! Typed instruments for the `http.*` metric semantic conventions
//! (version 1.36.0).
//!
//! Each instrument knows its name, unit and description, and takes the
//! attributes the conventions require as typed parameters.
use crate::attribute::{ErrorType, HttpConnectionState, HttpRequestMethod, UserAgentSyntheticType};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::{HistogramOptions, InstrumentOptions};
use opentelemetry::metrics::{Histogram, Meter, UpDownCounter};
use opentelemetry::{KeyValue, StringValue, Value};

/// `http.client.active_requests`
///
/// Number of active HTTP requests.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.active_requests` | UpDownCounter | `{request}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`http.request.method`] | `Recommended` |
/// | [`url.template`] | `Conditionally_required` |
/// | [`url.scheme`] | `Opt_in` |
///
/// [`server.address`]: ClientActiveRequests::add
/// [`server.port`]: ClientActiveRequests::add
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`url.template`]: ClientActiveRequests::attr_url_template
/// [`url.scheme`]: ClientActiveRequests::attr_url_scheme
#[derive(Clone, Debug)]
pub struct ClientActiveRequests {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientActiveRequests {
    const NAME: &'static str = "http.client.active_requests";
    const UNIT: &'static str = "{request}";
    const DESCRIPTION: &'static str = "Number of active HTTP requests.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientActiveRequests {
    /// Creates the `http.client.active_requests` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `http.client.active_requests` instrument, applying `options`.
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
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }

    /// Returns an optional `http.request.method` attribute.
    ///
    /// HTTP request method.
    pub fn attr_request_method(value: HttpRequestMethod) -> KeyValue {
        KeyValue::new("http.request.method", value)
    }

    /// Returns an optional `url.template` attribute.
    ///
    /// The low-cardinality template of an [absolute path
    /// reference](https://www.rfc-editor.org/rfc/rfc3986#section-4.2).
    pub fn attr_url_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.template", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }
}

/// `http.client.connection.duration`
///
/// The duration of the successfully established outbound HTTP connections.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.connection.duration` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`network.peer.address`] | `Recommended` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`url.scheme`] | `Opt_in` |
///
/// [`server.address`]: ClientConnectionDuration::record
/// [`server.port`]: ClientConnectionDuration::record
/// [`network.peer.address`]: ClientConnectionDuration::attr_network_peer_address
/// [`network.protocol.version`]: ClientConnectionDuration::attr_network_protocol_version
/// [`url.scheme`]: ClientConnectionDuration::attr_url_scheme
#[derive(Clone, Debug)]
pub struct ClientConnectionDuration {
    inner: Histogram<f64>,
}

impl Metric for ClientConnectionDuration {
    const NAME: &'static str = "http.client.connection.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The duration of the successfully established outbound HTTP connections.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConnectionDuration {
    /// Creates the `http.client.connection.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.client.connection.duration` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: f64,
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `network.peer.address` attribute.
    ///
    /// Peer address of the network connection - IP address or Unix domain socket name.
    pub fn attr_network_peer_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.peer.address", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }
}

/// `http.client.open_connections`
///
/// Number of outbound HTTP connections that are currently active or idle on the client.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.open_connections` | UpDownCounter | `{connection}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.connection.state`] | `Required` |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`network.peer.address`] | `Recommended` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`url.scheme`] | `Opt_in` |
///
/// [`http.connection.state`]: crate::attribute::HttpConnectionState
/// [`server.address`]: ClientOpenConnections::add
/// [`server.port`]: ClientOpenConnections::add
/// [`network.peer.address`]: ClientOpenConnections::attr_network_peer_address
/// [`network.protocol.version`]: ClientOpenConnections::attr_network_protocol_version
/// [`url.scheme`]: ClientOpenConnections::attr_url_scheme
#[derive(Clone, Debug)]
pub struct ClientOpenConnections {
    inner: UpDownCounter<i64>,
}

impl Metric for ClientOpenConnections {
    const NAME: &'static str = "http.client.open_connections";
    const UNIT: &'static str = "{connection}";
    const DESCRIPTION: &'static str = "Number of outbound HTTP connections that are currently active or idle on the client.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientOpenConnections {
    /// Creates the `http.client.open_connections` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `http.client.open_connections` instrument, applying `options`.
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
        connection_state: HttpConnectionState,
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.connection.state", connection_state),
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }

    /// Returns an optional `network.peer.address` attribute.
    ///
    /// Peer address of the network connection - IP address or Unix domain socket name.
    pub fn attr_network_peer_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.peer.address", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }
}

/// `http.client.request.body.size`
///
/// Size of HTTP client request bodies.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.request.body.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`url.template`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`url.scheme`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`server.address`]: ClientRequestBodySize::record
/// [`server.port`]: ClientRequestBodySize::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ClientRequestBodySize::attr_response_status_code
/// [`network.protocol.name`]: ClientRequestBodySize::attr_network_protocol_name
/// [`url.template`]: ClientRequestBodySize::attr_url_template
/// [`network.protocol.version`]: ClientRequestBodySize::attr_network_protocol_version
/// [`url.scheme`]: ClientRequestBodySize::attr_url_scheme
#[derive(Clone, Debug)]
pub struct ClientRequestBodySize {
    inner: Histogram<u64>,
}

impl Metric for ClientRequestBodySize {
    const NAME: &'static str = "http.client.request.body.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Size of HTTP client request bodies.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientRequestBodySize {
    /// Creates the `http.client.request.body.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.client.request.body.size` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: u64,
        request_method: HttpRequestMethod,
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `url.template` attribute.
    ///
    /// The low-cardinality template of an [absolute path
    /// reference](https://www.rfc-editor.org/rfc/rfc3986#section-4.2).
    pub fn attr_url_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.template", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }
}

/// `http.client.request.duration`
///
/// Duration of HTTP client requests.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.request.duration` | Histogram | `s` | Stable |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`url.scheme`] | `Opt_in` |
/// | [`url.template`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`server.address`]: ClientRequestDuration::record
/// [`server.port`]: ClientRequestDuration::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ClientRequestDuration::attr_response_status_code
/// [`network.protocol.name`]: ClientRequestDuration::attr_network_protocol_name
/// [`network.protocol.version`]: ClientRequestDuration::attr_network_protocol_version
/// [`url.scheme`]: ClientRequestDuration::attr_url_scheme
/// [`url.template`]: ClientRequestDuration::attr_url_template
#[derive(Clone, Debug)]
pub struct ClientRequestDuration {
    inner: Histogram<f64>,
}

impl Metric for ClientRequestDuration {
    const NAME: &'static str = "http.client.request.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Duration of HTTP client requests.";
    const STABILITY: Stability = Stability::Stable;
}

impl ClientRequestDuration {
    /// Creates the `http.client.request.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.client.request.duration` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: f64,
        request_method: HttpRequestMethod,
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }

    /// Returns an optional `url.template` attribute.
    ///
    /// The low-cardinality template of an [absolute path
    /// reference](https://www.rfc-editor.org/rfc/rfc3986#section-4.2).
    pub fn attr_url_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.template", Value::String(value.into()))
    }
}

/// `http.client.response.body.size`
///
/// Size of HTTP client response bodies.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.client.response.body.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`server.address`] | `Required` |
/// | [`server.port`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`url.template`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`url.scheme`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`server.address`]: ClientResponseBodySize::record
/// [`server.port`]: ClientResponseBodySize::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ClientResponseBodySize::attr_response_status_code
/// [`network.protocol.name`]: ClientResponseBodySize::attr_network_protocol_name
/// [`url.template`]: ClientResponseBodySize::attr_url_template
/// [`network.protocol.version`]: ClientResponseBodySize::attr_network_protocol_version
/// [`url.scheme`]: ClientResponseBodySize::attr_url_scheme
#[derive(Clone, Debug)]
pub struct ClientResponseBodySize {
    inner: Histogram<u64>,
}

impl Metric for ClientResponseBodySize {
    const NAME: &'static str = "http.client.response.body.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Size of HTTP client response bodies.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientResponseBodySize {
    /// Creates the `http.client.response.body.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.client.response.body.size` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: u64,
        request_method: HttpRequestMethod,
        server_address: impl Into<StringValue>,
        server_port: i64,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("server.address", Value::String(server_address.into())),
                KeyValue::new("server.port", server_port),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `url.template` attribute.
    ///
    /// The low-cardinality template of an [absolute path
    /// reference](https://www.rfc-editor.org/rfc/rfc3986#section-4.2).
    pub fn attr_url_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.template", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
    }

    /// Returns an optional `url.scheme` attribute.
    ///
    /// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying
    /// the used protocol.
    pub fn attr_url_scheme(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("url.scheme", Value::String(value.into()))
    }
}

/// `http.server.active_requests`
///
/// Number of active HTTP server requests.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.server.active_requests` | UpDownCounter | `{request}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`url.scheme`] | `Required` |
/// | [`server.address`] | `Opt_in` |
/// | [`server.port`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`url.scheme`]: ServerActiveRequests::add
/// [`server.address`]: ServerActiveRequests::attr_server_address
/// [`server.port`]: ServerActiveRequests::attr_server_port
#[derive(Clone, Debug)]
pub struct ServerActiveRequests {
    inner: UpDownCounter<i64>,
}

impl Metric for ServerActiveRequests {
    const NAME: &'static str = "http.server.active_requests";
    const UNIT: &'static str = "{request}";
    const DESCRIPTION: &'static str = "Number of active HTTP server requests.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerActiveRequests {
    /// Creates the `http.server.active_requests` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::i64_up_down_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `http.server.active_requests` instrument, applying `options`.
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
        request_method: HttpRequestMethod,
        url_scheme: impl Into<StringValue>,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("url.scheme", Value::String(url_scheme.into())),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
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

/// `http.server.request.body.size`
///
/// Size of HTTP server request bodies.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.server.request.body.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`url.scheme`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`http.route`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`server.address`] | `Opt_in` |
/// | [`server.port`] | `Opt_in` |
/// | [`user_agent.synthetic.type`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`url.scheme`]: ServerRequestBodySize::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ServerRequestBodySize::attr_response_status_code
/// [`http.route`]: ServerRequestBodySize::attr_route
/// [`network.protocol.name`]: ServerRequestBodySize::attr_network_protocol_name
/// [`network.protocol.version`]: ServerRequestBodySize::attr_network_protocol_version
/// [`server.address`]: ServerRequestBodySize::attr_server_address
/// [`server.port`]: ServerRequestBodySize::attr_server_port
/// [`user_agent.synthetic.type`]: crate::attribute::UserAgentSyntheticType
#[derive(Clone, Debug)]
pub struct ServerRequestBodySize {
    inner: Histogram<u64>,
}

impl Metric for ServerRequestBodySize {
    const NAME: &'static str = "http.server.request.body.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Size of HTTP server request bodies.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerRequestBodySize {
    /// Creates the `http.server.request.body.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.server.request.body.size` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: u64,
        request_method: HttpRequestMethod,
        url_scheme: impl Into<StringValue>,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("url.scheme", Value::String(url_scheme.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `http.route` attribute.
    ///
    /// The matched route, that is, the path template in the format used by the respective server
    /// framework.
    pub fn attr_route(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("http.route", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
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

    /// Returns an optional `user_agent.synthetic.type` attribute.
    ///
    /// Specifies the category of synthetic traffic, such as tests or bots.
    pub fn attr_user_agent_synthetic_type(value: UserAgentSyntheticType) -> KeyValue {
        KeyValue::new("user_agent.synthetic.type", value)
    }
}

/// `http.server.request.duration`
///
/// Duration of HTTP server requests.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.server.request.duration` | Histogram | `s` | Stable |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`url.scheme`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`http.route`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`server.address`] | `Opt_in` |
/// | [`server.port`] | `Opt_in` |
/// | [`user_agent.synthetic.type`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`url.scheme`]: ServerRequestDuration::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ServerRequestDuration::attr_response_status_code
/// [`http.route`]: ServerRequestDuration::attr_route
/// [`network.protocol.name`]: ServerRequestDuration::attr_network_protocol_name
/// [`network.protocol.version`]: ServerRequestDuration::attr_network_protocol_version
/// [`server.address`]: ServerRequestDuration::attr_server_address
/// [`server.port`]: ServerRequestDuration::attr_server_port
/// [`user_agent.synthetic.type`]: crate::attribute::UserAgentSyntheticType
#[derive(Clone, Debug)]
pub struct ServerRequestDuration {
    inner: Histogram<f64>,
}

impl Metric for ServerRequestDuration {
    const NAME: &'static str = "http.server.request.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Duration of HTTP server requests.";
    const STABILITY: Stability = Stability::Stable;
}

impl ServerRequestDuration {
    /// Creates the `http.server.request.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.server.request.duration` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: f64,
        request_method: HttpRequestMethod,
        url_scheme: impl Into<StringValue>,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("url.scheme", Value::String(url_scheme.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `http.route` attribute.
    ///
    /// The matched route, that is, the path template in the format used by the respective server
    /// framework.
    pub fn attr_route(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("http.route", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
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

    /// Returns an optional `user_agent.synthetic.type` attribute.
    ///
    /// Specifies the category of synthetic traffic, such as tests or bots.
    pub fn attr_user_agent_synthetic_type(value: UserAgentSyntheticType) -> KeyValue {
        KeyValue::new("user_agent.synthetic.type", value)
    }
}

/// `http.server.response.body.size`
///
/// Size of HTTP server response bodies.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `http.server.response.body.size` | Histogram | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`http.request.method`] | `Required` |
/// | [`url.scheme`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`http.response.status_code`] | `Conditionally_required` |
/// | [`http.route`] | `Conditionally_required` |
/// | [`network.protocol.name`] | `Conditionally_required` |
/// | [`network.protocol.version`] | `Recommended` |
/// | [`server.address`] | `Opt_in` |
/// | [`server.port`] | `Opt_in` |
/// | [`user_agent.synthetic.type`] | `Opt_in` |
///
/// [`http.request.method`]: crate::attribute::HttpRequestMethod
/// [`url.scheme`]: ServerResponseBodySize::record
/// [`error.type`]: crate::attribute::ErrorType
/// [`http.response.status_code`]: ServerResponseBodySize::attr_response_status_code
/// [`http.route`]: ServerResponseBodySize::attr_route
/// [`network.protocol.name`]: ServerResponseBodySize::attr_network_protocol_name
/// [`network.protocol.version`]: ServerResponseBodySize::attr_network_protocol_version
/// [`server.address`]: ServerResponseBodySize::attr_server_address
/// [`server.port`]: ServerResponseBodySize::attr_server_port
/// [`user_agent.synthetic.type`]: crate::attribute::UserAgentSyntheticType
#[derive(Clone, Debug)]
pub struct ServerResponseBodySize {
    inner: Histogram<u64>,
}

impl Metric for ServerResponseBodySize {
    const NAME: &'static str = "http.server.response.body.size";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Size of HTTP server response bodies.";
    const STABILITY: Stability = Stability::Development;
}

impl ServerResponseBodySize {
    /// Creates the `http.server.response.body.size` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `http.server.response.body.size` instrument, applying `options`.
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
    pub fn record(
        &self,
        value: u64,
        request_method: HttpRequestMethod,
        url_scheme: impl Into<StringValue>,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("http.request.method", request_method),
                KeyValue::new("url.scheme", Value::String(url_scheme.into())),
            ],
            attrs,
            |attributes| self.inner.record(value, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `http.response.status_code` attribute.
    ///
    /// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
    pub fn attr_response_status_code(value: i64) -> KeyValue {
        KeyValue::new("http.response.status_code", value)
    }

    /// Returns an optional `http.route` attribute.
    ///
    /// The matched route, that is, the path template in the format used by the respective server
    /// framework.
    pub fn attr_route(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("http.route", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.name` attribute.
    ///
    /// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI
    /// equivalent.
    pub fn attr_network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.name", Value::String(value.into()))
    }

    /// Returns an optional `network.protocol.version` attribute.
    ///
    /// The actual version of the protocol used for network communication.
    pub fn attr_network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.protocol.version", Value::String(value.into()))
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

    /// Returns an optional `user_agent.synthetic.type` attribute.
    ///
    /// Specifies the category of synthetic traffic, such as tests or bots.
    pub fn attr_user_agent_synthetic_type(value: UserAgentSyntheticType) -> KeyValue {
        KeyValue::new("user_agent.synthetic.type", value)
    }
}

// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # Messaging metrics
//!
//! Typed instruments for the `messaging.*` metric semantic conventions
//! (version 1.36.0).
//!
//! Each instrument knows its name, unit and description, and takes the
//! attributes the conventions require as typed parameters.
use crate::attribute::{ErrorType, MessagingOperationType, MessagingSystem};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::{HistogramOptions, InstrumentOptions};
use opentelemetry::metrics::{Counter, Histogram, Meter};
use opentelemetry::{KeyValue, StringValue, Value};

/// `messaging.client.consumed.messages`
///
/// Number of messages that were delivered to the application.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `messaging.client.consumed.messages` | Counter | `{message}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`messaging.operation.name`] | `Required` |
/// | [`messaging.system`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`messaging.consumer.group.name`] | `Conditionally_required` |
/// | [`messaging.destination.name`] | `Conditionally_required` |
/// | [`messaging.destination.subscription.name`] | `Conditionally_required` |
/// | [`messaging.destination.template`] | `Conditionally_required` |
/// | [`server.address`] | `Conditionally_required` |
/// | [`messaging.destination.partition.id`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`messaging.operation.name`]: ClientConsumedMessages::add
/// [`messaging.system`]: crate::attribute::MessagingSystem
/// [`error.type`]: crate::attribute::ErrorType
/// [`messaging.consumer.group.name`]: ClientConsumedMessages::attr_consumer_group_name
/// [`messaging.destination.name`]: ClientConsumedMessages::attr_destination_name
/// [`messaging.destination.subscription.name`]: ClientConsumedMessages::attr_destination_subscription_name
/// [`messaging.destination.template`]: ClientConsumedMessages::attr_destination_template
/// [`server.address`]: ClientConsumedMessages::attr_server_address
/// [`messaging.destination.partition.id`]: ClientConsumedMessages::attr_destination_partition_id
/// [`server.port`]: ClientConsumedMessages::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientConsumedMessages {
    inner: Counter<u64>,
}

impl Metric for ClientConsumedMessages {
    const NAME: &'static str = "messaging.client.consumed.messages";
    const UNIT: &'static str = "{message}";
    const DESCRIPTION: &'static str = "Number of messages that were delivered to the application.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientConsumedMessages {
    /// Creates the `messaging.client.consumed.messages` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `messaging.client.consumed.messages` instrument, applying `options`.
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
    pub fn add(
        &self,
        incr: u64,
        operation_name: impl Into<StringValue>,
        system: MessagingSystem,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("messaging.operation.name", Value::String(operation_name.into())),
                KeyValue::new("messaging.system", system),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `messaging.consumer.group.name` attribute.
    ///
    /// The name of the consumer group with which a consumer is associated.
    pub fn attr_consumer_group_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.consumer.group.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.name` attribute.
    ///
    /// The message destination name
    pub fn attr_destination_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.subscription.name` attribute.
    ///
    /// The name of the destination subscription from which a message is consumed.
    pub fn attr_destination_subscription_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.subscription.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.template` attribute.
    ///
    /// Low cardinality representation of the messaging destination name
    pub fn attr_destination_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.template", Value::String(value.into()))
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.partition.id` attribute.
    ///
    /// The identifier of the partition messages are sent to or received from, unique within the
    /// `messaging.destination.name`.
    pub fn attr_destination_partition_id(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.partition.id", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `messaging.client.operation.duration`
///
/// Duration of messaging operation initiated by a producer or consumer client.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `messaging.client.operation.duration` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`messaging.operation.name`] | `Required` |
/// | [`messaging.system`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`messaging.consumer.group.name`] | `Conditionally_required` |
/// | [`messaging.destination.name`] | `Conditionally_required` |
/// | [`messaging.destination.subscription.name`] | `Conditionally_required` |
/// | [`messaging.destination.template`] | `Conditionally_required` |
/// | [`messaging.operation.type`] | `Conditionally_required` |
/// | [`server.address`] | `Conditionally_required` |
/// | [`messaging.destination.partition.id`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`messaging.operation.name`]: ClientOperationDuration::record
/// [`messaging.system`]: crate::attribute::MessagingSystem
/// [`error.type`]: crate::attribute::ErrorType
/// [`messaging.consumer.group.name`]: ClientOperationDuration::attr_consumer_group_name
/// [`messaging.destination.name`]: ClientOperationDuration::attr_destination_name
/// [`messaging.destination.subscription.name`]: ClientOperationDuration::attr_destination_subscription_name
/// [`messaging.destination.template`]: ClientOperationDuration::attr_destination_template
/// [`messaging.operation.type`]: crate::attribute::MessagingOperationType
/// [`server.address`]: ClientOperationDuration::attr_server_address
/// [`messaging.destination.partition.id`]: ClientOperationDuration::attr_destination_partition_id
/// [`server.port`]: ClientOperationDuration::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientOperationDuration {
    inner: Histogram<f64>,
}

impl Metric for ClientOperationDuration {
    const NAME: &'static str = "messaging.client.operation.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Duration of messaging operation initiated by a producer or consumer client.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientOperationDuration {
    /// Creates the `messaging.client.operation.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `messaging.client.operation.duration` instrument, applying `options`.
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
        operation_name: impl Into<StringValue>,
        system: MessagingSystem,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("messaging.operation.name", Value::String(operation_name.into())),
                KeyValue::new("messaging.system", system),
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

    /// Returns an optional `messaging.consumer.group.name` attribute.
    ///
    /// The name of the consumer group with which a consumer is associated.
    pub fn attr_consumer_group_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.consumer.group.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.name` attribute.
    ///
    /// The message destination name
    pub fn attr_destination_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.subscription.name` attribute.
    ///
    /// The name of the destination subscription from which a message is consumed.
    pub fn attr_destination_subscription_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.subscription.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.template` attribute.
    ///
    /// Low cardinality representation of the messaging destination name
    pub fn attr_destination_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.template", Value::String(value.into()))
    }

    /// Returns an optional `messaging.operation.type` attribute.
    ///
    /// A string identifying the type of the messaging operation.
    pub fn attr_operation_type(value: MessagingOperationType) -> KeyValue {
        KeyValue::new("messaging.operation.type", value)
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.partition.id` attribute.
    ///
    /// The identifier of the partition messages are sent to or received from, unique within the
    /// `messaging.destination.name`.
    pub fn attr_destination_partition_id(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.partition.id", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `messaging.client.sent.messages`
///
/// Number of messages producer attempted to send to the broker.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `messaging.client.sent.messages` | Counter | `{message}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`messaging.operation.name`] | `Required` |
/// | [`messaging.system`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`messaging.destination.name`] | `Conditionally_required` |
/// | [`messaging.destination.template`] | `Conditionally_required` |
/// | [`server.address`] | `Conditionally_required` |
/// | [`messaging.destination.partition.id`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`messaging.operation.name`]: ClientSentMessages::add
/// [`messaging.system`]: crate::attribute::MessagingSystem
/// [`error.type`]: crate::attribute::ErrorType
/// [`messaging.destination.name`]: ClientSentMessages::attr_destination_name
/// [`messaging.destination.template`]: ClientSentMessages::attr_destination_template
/// [`server.address`]: ClientSentMessages::attr_server_address
/// [`messaging.destination.partition.id`]: ClientSentMessages::attr_destination_partition_id
/// [`server.port`]: ClientSentMessages::attr_server_port
#[derive(Clone, Debug)]
pub struct ClientSentMessages {
    inner: Counter<u64>,
}

impl Metric for ClientSentMessages {
    const NAME: &'static str = "messaging.client.sent.messages";
    const UNIT: &'static str = "{message}";
    const DESCRIPTION: &'static str = "Number of messages producer attempted to send to the broker.";
    const STABILITY: Stability = Stability::Development;
}

impl ClientSentMessages {
    /// Creates the `messaging.client.sent.messages` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::u64_counter::<Self>(meter, &InstrumentOptions::new()),
        }
    }

    /// Creates the `messaging.client.sent.messages` instrument, applying `options`.
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
    pub fn add(
        &self,
        incr: u64,
        operation_name: impl Into<StringValue>,
        system: MessagingSystem,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("messaging.operation.name", Value::String(operation_name.into())),
                KeyValue::new("messaging.system", system),
            ],
            attrs,
            |attributes| self.inner.add(incr, attributes),
        )
    }

    /// Returns an optional `error.type` attribute.
    ///
    /// Describes a class of error the operation ended with.
    pub fn attr_error_type(value: ErrorType) -> KeyValue {
        KeyValue::new("error.type", value)
    }

    /// Returns an optional `messaging.destination.name` attribute.
    ///
    /// The message destination name
    pub fn attr_destination_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.template` attribute.
    ///
    /// Low cardinality representation of the messaging destination name
    pub fn attr_destination_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.template", Value::String(value.into()))
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.partition.id` attribute.
    ///
    /// The identifier of the partition messages are sent to or received from, unique within the
    /// `messaging.destination.name`.
    pub fn attr_destination_partition_id(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.partition.id", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

/// `messaging.process.duration`
///
/// Duration of processing operation.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `messaging.process.duration` | Histogram | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`messaging.operation.name`] | `Required` |
/// | [`messaging.system`] | `Required` |
/// | [`error.type`] | `Conditionally_required` |
/// | [`messaging.consumer.group.name`] | `Conditionally_required` |
/// | [`messaging.destination.name`] | `Conditionally_required` |
/// | [`messaging.destination.subscription.name`] | `Conditionally_required` |
/// | [`messaging.destination.template`] | `Conditionally_required` |
/// | [`server.address`] | `Conditionally_required` |
/// | [`messaging.destination.partition.id`] | `Recommended` |
/// | [`server.port`] | `Recommended` |
///
/// [`messaging.operation.name`]: ProcessDuration::record
/// [`messaging.system`]: crate::attribute::MessagingSystem
/// [`error.type`]: crate::attribute::ErrorType
/// [`messaging.consumer.group.name`]: ProcessDuration::attr_consumer_group_name
/// [`messaging.destination.name`]: ProcessDuration::attr_destination_name
/// [`messaging.destination.subscription.name`]: ProcessDuration::attr_destination_subscription_name
/// [`messaging.destination.template`]: ProcessDuration::attr_destination_template
/// [`server.address`]: ProcessDuration::attr_server_address
/// [`messaging.destination.partition.id`]: ProcessDuration::attr_destination_partition_id
/// [`server.port`]: ProcessDuration::attr_server_port
#[derive(Clone, Debug)]
pub struct ProcessDuration {
    inner: Histogram<f64>,
}

impl Metric for ProcessDuration {
    const NAME: &'static str = "messaging.process.duration";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Duration of processing operation.";
    const STABILITY: Stability = Stability::Development;
}

impl ProcessDuration {
    /// Creates the `messaging.process.duration` instrument.
    ///
    /// Without a meter the instrument is a no-op.
    pub fn new(meter: Option<&Meter>) -> Self {
        Self {
            inner: instrument::f64_histogram::<Self>(meter, &HistogramOptions::new()),
        }
    }

    /// Creates the `messaging.process.duration` instrument, applying `options`.
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
        operation_name: impl Into<StringValue>,
        system: MessagingSystem,
        attrs: &[KeyValue],
    ) {
        instrument::with_attributes(
            [
                KeyValue::new("messaging.operation.name", Value::String(operation_name.into())),
                KeyValue::new("messaging.system", system),
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

    /// Returns an optional `messaging.consumer.group.name` attribute.
    ///
    /// The name of the consumer group with which a consumer is associated.
    pub fn attr_consumer_group_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.consumer.group.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.name` attribute.
    ///
    /// The message destination name
    pub fn attr_destination_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.subscription.name` attribute.
    ///
    /// The name of the destination subscription from which a message is consumed.
    pub fn attr_destination_subscription_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.subscription.name", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.template` attribute.
    ///
    /// Low cardinality representation of the messaging destination name
    pub fn attr_destination_template(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.template", Value::String(value.into()))
    }

    /// Returns an optional `server.address` attribute.
    ///
    /// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix
    /// domain socket name.
    pub fn attr_server_address(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("server.address", Value::String(value.into()))
    }

    /// Returns an optional `messaging.destination.partition.id` attribute.
    ///
    /// The identifier of the partition messages are sent to or received from, unique within the
    /// `messaging.destination.name`.
    pub fn attr_destination_partition_id(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("messaging.destination.partition.id", Value::String(value.into()))
    }

    /// Returns an optional `server.port` attribute.
    ///
    /// Server port number.
    pub fn attr_server_port(value: i64) -> KeyValue {
        KeyValue::new("server.port", value)
    }
}

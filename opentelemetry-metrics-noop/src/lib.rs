//! # No-op OpenTelemetry Metrics Implementation
//!
//! A public, zero-cost implementation of the [OpenTelemetry metrics API]. Every
//! instrument it creates discards its measurements, and callbacks registered
//! with observable instruments are never run. Use it to switch telemetry off
//! while keeping the `opentelemetry` types flowing through your code.
//!
//! The `opentelemetry` crate keeps its own no-op meter private, so libraries
//! that want an explicit "telemetry off" value depend on this crate instead.
//!
//! ```
//! use opentelemetry::metrics::MeterProvider;
//! use opentelemetry::KeyValue;
//! use opentelemetry_metrics_noop::NoopMeterProvider;
//!
//! let provider = NoopMeterProvider::new();
//! let meter = provider.meter("my_library");
//!
//! let counter = meter.u64_counter("requests").build();
//! counter.add(1, &[KeyValue::new("route", "/")]); // does nothing
//! ```
//!
//! Instruments can also be created without a meter at all:
//!
//! ```
//! let histogram = opentelemetry_metrics_noop::histogram::<f64>();
//! histogram.record(0.25, &[]);
//! ```
//!
//! [OpenTelemetry metrics API]: https://github.com/open-telemetry/opentelemetry-specification/blob/main/specification/metrics/api.md
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

mod env;
mod instrument;
mod provider;

pub use env::{meter_provider_or_noop, metrics_disabled};
pub use instrument::{
    counter, gauge, histogram, up_down_counter, NoopAsyncInstrument, NoopSyncInstrument,
};
pub use provider::{meter, NoopMeter, NoopMeterProvider};

//! # Typed Semantic-Convention Metrics
//!
//! Strongly typed wrappers around OpenTelemetry instruments, one per metric
//! defined in the [metric semantic conventions]. Each wrapper fixes the
//! metric name, unit and description, and takes the attributes the
//! conventions mark as required as typed parameters, so a recording site
//! cannot get them wrong.
//!
//! Passing `None` instead of a meter yields an instrument backed by the
//! no-op implementation from [`opentelemetry_metrics_noop`]. Calls on it
//! cost next to nothing, which lets libraries instrument unconditionally.
//!
//! ## Usage
//!
//! ```
//! use opentelemetry::metrics::MeterProvider;
//! use opentelemetry_metrics_noop::NoopMeterProvider;
//! use opentelemetry_semconv_metrics::attribute::HttpRequestMethod;
//! use opentelemetry_semconv_metrics::http;
//!
//! // Any `MeterProvider` works here, usually an SDK one.
//! let meter = NoopMeterProvider::new().meter("my_library");
//!
//! let duration = http::ServerRequestDuration::new(Some(&meter));
//! duration.record(
//!     0.042,
//!     HttpRequestMethod::Get,
//!     "https",
//!     &[
//!         http::ServerRequestDuration::attr_response_status_code(200),
//!         http::ServerRequestDuration::attr_route("/users/{id}"),
//!     ],
//! );
//!
//! // Without a meter the instrument records nothing.
//! let active = http::ServerActiveRequests::new(None);
//! active.add(1, HttpRequestMethod::Get, "https", &[]);
//! ```
//!
//! Instruments reported through callbacks take the callback when they are
//! created:
//!
//! ```
//! use opentelemetry::KeyValue;
//! use opentelemetry_semconv_metrics::attribute::SystemMemoryState;
//! use opentelemetry_semconv_metrics::system;
//!
//! let _usage = system::MemoryUsage::new(None, |observer| {
//!     observer.observe(
//!         1 << 30,
//!         &[system::MemoryUsage::attr_memory_state(SystemMemoryState::Used)],
//!     );
//! });
//! ```
//!
//! ## Stability
//!
//! Every wrapper implements [`Metric`], whose [`Metric::STABILITY`] tells
//! whether the definition is stable or still in development. Development
//! metrics may change shape between releases of this crate.
//!
//! [metric semantic conventions]: https://github.com/open-telemetry/semantic-conventions/tree/main/docs
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

mod error;
mod instrument;
mod metric;
mod options;

pub mod attribute;
pub mod db;
pub mod http;
pub mod messaging;
pub mod process;
pub mod rpc;
pub mod system;

#[cfg(any(feature = "testing", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

pub use error::{MetricError, Result};
pub use metric::{Metric, Stability};
pub use options::{HistogramOptions, InstrumentOptions};

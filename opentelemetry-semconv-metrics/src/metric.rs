use std::fmt;

/// Maturity of a metric in the semantic conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stability {
    /// The definition is stable and will not change in a breaking way.
    Stable,
    /// The definition is still being worked on and may change.
    Development,
}

impl Stability {
    /// The value as it appears in the semantic-convention model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Development => "development",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a semantic-convention metric.
///
/// Every generated instrument implements this trait, so the convention that
/// backs an instrument can be inspected without creating one:
///
/// ```
/// use opentelemetry_semconv_metrics::{http, Metric, Stability};
///
/// assert_eq!(http::ServerRequestDuration::NAME, "http.server.request.duration");
/// assert_eq!(http::ServerRequestDuration::UNIT, "s");
/// assert_eq!(http::ServerRequestDuration::STABILITY, Stability::Stable);
/// ```
pub trait Metric {
    /// The metric name, e.g. `http.server.request.duration`.
    const NAME: &'static str;
    /// The UCUM unit of the metric, e.g. `s` or `By`.
    const UNIT: &'static str;
    /// The human readable description from the semantic conventions.
    const DESCRIPTION: &'static str;
    /// Maturity of the definition.
    const STABILITY: Stability;
}

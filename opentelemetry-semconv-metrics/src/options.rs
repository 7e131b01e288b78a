use crate::error::{MetricError, Result};
use std::borrow::Cow;

const INSTRUMENT_UNIT_MAX_LENGTH: usize = 63;

// option validation error strings
const INSTRUMENT_UNIT_LENGTH: &str = "instrument unit must be less than 64 characters";
const INSTRUMENT_UNIT_INVALID_CHAR: &str = "characters in instrument unit must be ASCII";
const BOUNDARIES_EMPTY: &str = "at least one boundary is required";
const BOUNDARIES_NOT_FINITE: &str = "boundaries must be finite numbers";
const BOUNDARIES_NOT_INCREASING: &str = "boundaries must be strictly increasing";

/// Overrides applied when building a semantic-convention instrument.
///
/// Anything left unset keeps the value from the semantic conventions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstrumentOptions {
    pub(crate) description: Option<Cow<'static, str>>,
    pub(crate) unit: Option<Cow<'static, str>>,
}

impl InstrumentOptions {
    /// Options that keep every value from the semantic conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description of the instrument.
    pub fn with_description<S: Into<Cow<'static, str>>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the unit of the instrument.
    ///
    /// Unit is case sensitive(`kb` is not the same as `kB`).
    ///
    /// Unit must be:
    /// - ASCII string
    /// - No longer than 63 characters
    pub fn with_unit<S: Into<Cow<'static, str>>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub(crate) fn validate(&self, metric: &'static str) -> Result<()> {
        if let Some(unit) = &self.unit {
            if unit.len() > INSTRUMENT_UNIT_MAX_LENGTH {
                return Err(MetricError::InvalidUnit {
                    metric,
                    reason: INSTRUMENT_UNIT_LENGTH,
                });
            }
            if unit.contains(|c: char| !c.is_ascii()) {
                return Err(MetricError::InvalidUnit {
                    metric,
                    reason: INSTRUMENT_UNIT_INVALID_CHAR,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn description_or(&self, default: &'static str) -> Cow<'static, str> {
        self.description
            .clone()
            .unwrap_or(Cow::Borrowed(default))
    }

    pub(crate) fn unit_or(&self, default: &'static str) -> Cow<'static, str> {
        self.unit.clone().unwrap_or(Cow::Borrowed(default))
    }
}

/// Overrides applied when building a semantic-convention histogram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistogramOptions {
    pub(crate) instrument: InstrumentOptions,
    pub(crate) boundaries: Option<Vec<f64>>,
}

impl HistogramOptions {
    /// Options that keep every value from the semantic conventions and leave
    /// bucket boundaries to the SDK.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description of the histogram.
    pub fn with_description<S: Into<Cow<'static, str>>>(mut self, description: S) -> Self {
        self.instrument = self.instrument.with_description(description);
        self
    }

    /// Replace the unit of the histogram. See [`InstrumentOptions::with_unit`].
    pub fn with_unit<S: Into<Cow<'static, str>>>(mut self, unit: S) -> Self {
        self.instrument = self.instrument.with_unit(unit);
        self
    }

    /// Set explicit bucket boundaries, used as an advisory parameter by the SDK.
    ///
    /// Boundaries must be finite and strictly increasing.
    pub fn with_boundaries(mut self, boundaries: Vec<f64>) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    pub(crate) fn validate(&self, metric: &'static str) -> Result<()> {
        self.instrument.validate(metric)?;
        if let Some(boundaries) = &self.boundaries {
            validate_boundaries(metric, boundaries)?;
        }
        Ok(())
    }
}

impl From<InstrumentOptions> for HistogramOptions {
    fn from(instrument: InstrumentOptions) -> Self {
        HistogramOptions {
            instrument,
            boundaries: None,
        }
    }
}

fn validate_boundaries(metric: &'static str, boundaries: &[f64]) -> Result<()> {
    if boundaries.is_empty() {
        return Err(MetricError::InvalidBoundaries {
            metric,
            reason: BOUNDARIES_EMPTY,
        });
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err(MetricError::InvalidBoundaries {
            metric,
            reason: BOUNDARIES_NOT_FINITE,
        });
    }
    if boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(MetricError::InvalidBoundaries {
            metric,
            reason: BOUNDARIES_NOT_INCREASING,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("s", "")]
    #[case("kb", "")]
    #[case("Kb/sec", "")]
    #[case("%", "")]
    #[case("{request}", "")]
    #[case("", "")]
    #[case(
        "1234567890123456789012345678901234567890123456789012345678901234",
        INSTRUMENT_UNIT_LENGTH
    )]
    #[case("utf8char锈", INSTRUMENT_UNIT_INVALID_CHAR)]
    fn unit_validation(#[case] unit: &'static str, #[case] expected_error: &'static str) {
        let result = InstrumentOptions::new().with_unit(unit).validate("test.metric");
        if expected_error.is_empty() {
            assert!(result.is_ok(), "unit {unit:?} should be accepted");
        } else {
            assert_eq!(
                result,
                Err(MetricError::InvalidUnit {
                    metric: "test.metric",
                    reason: expected_error,
                })
            );
        }
    }

    #[rstest]
    #[case(vec![0.0, 5.0, 10.0], "")]
    #[case(vec![-1.0], "")]
    #[case(vec![], BOUNDARIES_EMPTY)]
    #[case(vec![0.0, f64::NAN], BOUNDARIES_NOT_FINITE)]
    #[case(vec![f64::NEG_INFINITY, 0.0], BOUNDARIES_NOT_FINITE)]
    #[case(vec![1.0, 1.0], BOUNDARIES_NOT_INCREASING)]
    #[case(vec![5.0, 1.0], BOUNDARIES_NOT_INCREASING)]
    fn boundary_validation(#[case] boundaries: Vec<f64>, #[case] expected_error: &'static str) {
        let result = HistogramOptions::new()
            .with_boundaries(boundaries)
            .validate("test.histogram");
        if expected_error.is_empty() {
            assert!(result.is_ok());
        } else {
            assert_eq!(
                result,
                Err(MetricError::InvalidBoundaries {
                    metric: "test.histogram",
                    reason: expected_error,
                })
            );
        }
    }

    #[test]
    fn histogram_options_validate_unit_too() {
        let result = HistogramOptions::new()
            .with_unit("µs")
            .validate("test.histogram");
        assert!(matches!(result, Err(MetricError::InvalidUnit { .. })));
    }

    #[test]
    fn overrides_fall_back_to_convention_values() {
        let options = InstrumentOptions::new();
        assert_eq!(options.description_or("default"), "default");
        assert_eq!(options.unit_or("s"), "s");

        let options = options.with_description("custom").with_unit("ms");
        assert_eq!(options.description_or("default"), "custom");
        assert_eq!(options.unit_or("s"), "ms");
    }

    #[test]
    fn error_messages_name_the_metric() {
        let err = HistogramOptions::new()
            .with_boundaries(vec![])
            .validate("http.server.request.duration")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid histogram boundaries for http.server.request.duration: at least one boundary is required"
        );
    }
}

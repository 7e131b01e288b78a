use crate::provider::NoopMeterProvider;
use opentelemetry::metrics::MeterProvider;
use opentelemetry::otel_info;
use std::env;
use std::sync::Arc;

const OTEL_SDK_DISABLED: &str = "OTEL_SDK_DISABLED";
const OTEL_METRICS_EXPORTER: &str = "OTEL_METRICS_EXPORTER";

/// Returns `true` when the environment turns the metrics signal off.
///
/// Metrics are off when `OTEL_SDK_DISABLED` is `true` (case-insensitive), or
/// when every entry of the comma-separated `OTEL_METRICS_EXPORTER` list is
/// `none`. Unset or unparsable values leave metrics on.
pub fn metrics_disabled() -> bool {
    let sdk_disabled = env::var(OTEL_SDK_DISABLED)
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let exporter_none = env::var(OTEL_METRICS_EXPORTER)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .all(|exporter| exporter.eq_ignore_ascii_case("none"))
        })
        .unwrap_or(false);

    sdk_disabled || exporter_none
}

/// Returns `provider`, or a [`NoopMeterProvider`] when [`metrics_disabled`].
///
/// ```
/// use opentelemetry::metrics::MeterProvider;
/// use opentelemetry_metrics_noop::{meter_provider_or_noop, NoopMeterProvider};
///
/// let provider = meter_provider_or_noop(NoopMeterProvider::new());
/// let counter = provider.meter("my_app").u64_counter("requests").build();
/// counter.add(1, &[]);
/// ```
pub fn meter_provider_or_noop<P>(provider: P) -> Arc<dyn MeterProvider + Send + Sync>
where
    P: MeterProvider + Send + Sync + 'static,
{
    if metrics_disabled() {
        otel_info!(
            name: "NoopMeterProvider.Selected",
            message = "Metrics are disabled by the environment. Instruments will record nothing."
        );
        Arc::new(NoopMeterProvider::new())
    } else {
        Arc::new(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::metrics::Meter;
    use opentelemetry::InstrumentationScope;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[case(Some("true"), None, true)]
    #[case(Some("TRUE"), None, true)]
    #[case(Some(" true "), None, true)]
    #[case(Some("false"), None, false)]
    #[case(Some("1"), None, false)]
    #[case(None, Some("none"), true)]
    #[case(None, Some("none, NONE"), true)]
    #[case(None, Some("otlp"), false)]
    #[case(None, Some("none,otlp"), false)]
    #[case(None, Some(""), false)]
    #[case(None, None, false)]
    #[case(Some("false"), Some("none"), true)]
    fn reads_disable_switches(
        #[case] sdk_disabled: Option<&str>,
        #[case] exporter: Option<&str>,
        #[case] expected: bool,
    ) {
        temp_env::with_vars(
            [
                (OTEL_SDK_DISABLED, sdk_disabled),
                (OTEL_METRICS_EXPORTER, exporter),
            ],
            || assert_eq!(metrics_disabled(), expected),
        );
    }

    #[derive(Debug, Default)]
    struct CountingProvider {
        meters: Arc<AtomicUsize>,
    }

    impl MeterProvider for CountingProvider {
        fn meter_with_scope(&self, _scope: InstrumentationScope) -> Meter {
            self.meters.fetch_add(1, Ordering::SeqCst);
            crate::meter().clone()
        }
    }

    #[test]
    fn keeps_the_given_provider_when_enabled() {
        temp_env::with_vars_unset([OTEL_SDK_DISABLED, OTEL_METRICS_EXPORTER], || {
            let meters = Arc::new(AtomicUsize::new(0));
            let provider = meter_provider_or_noop(CountingProvider {
                meters: Arc::clone(&meters),
            });

            provider.meter("enabled").u64_counter("requests").build().add(1, &[]);
            assert_eq!(meters.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn swaps_in_noop_when_disabled() {
        temp_env::with_var(OTEL_SDK_DISABLED, Some("true"), || {
            let meters = Arc::new(AtomicUsize::new(0));
            let provider = meter_provider_or_noop(CountingProvider {
                meters: Arc::clone(&meters),
            });

            provider
                .meter("disabled")
                .f64_histogram("latency")
                .build()
                .record(0.25, &[]);
            assert_eq!(meters.load(Ordering::SeqCst), 0);
        });
    }
}

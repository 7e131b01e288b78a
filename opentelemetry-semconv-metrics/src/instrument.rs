//! Shared plumbing for the generated instruments.
//!
//! The generated modules only describe *what* each metric is. Resolving the
//! meter, applying options and assembling attributes happens here.
use crate::metric::Metric;
use crate::options::{HistogramOptions, InstrumentOptions};
use opentelemetry::metrics::{
    AsyncInstrument, Counter, Histogram, Meter, ObservableCounter, ObservableGauge,
    ObservableUpDownCounter, UpDownCounter,
};
use opentelemetry::{otel_debug, KeyValue};

/// Resolves the meter an instrument is created from.
///
/// `None` means telemetry is switched off for the caller, which gets the
/// shared no-op meter.
fn meter_or_noop<M: Metric>(meter: Option<&Meter>) -> &Meter {
    match meter {
        Some(meter) => meter,
        None => {
            otel_debug!(
                name: "SemconvMetrics.NoopMeterFallback",
                metric = M::NAME,
                message = "No meter supplied. The instrument will record nothing."
            );
            opentelemetry_metrics_noop::meter()
        }
    }
}

macro_rules! sync_instrument {
    ($fn_name:ident, $builder:ident, $ty:ty) => {
        pub(crate) fn $fn_name<M: Metric>(
            meter: Option<&Meter>,
            options: &InstrumentOptions,
        ) -> $ty {
            meter_or_noop::<M>(meter)
                .$builder(M::NAME)
                .with_description(options.description_or(M::DESCRIPTION))
                .with_unit(options.unit_or(M::UNIT))
                .build()
        }
    };
}

macro_rules! histogram {
    ($fn_name:ident, $builder:ident, $value:ty) => {
        pub(crate) fn $fn_name<M: Metric>(
            meter: Option<&Meter>,
            options: &HistogramOptions,
        ) -> Histogram<$value> {
            let builder = meter_or_noop::<M>(meter)
                .$builder(M::NAME)
                .with_description(options.instrument.description_or(M::DESCRIPTION))
                .with_unit(options.instrument.unit_or(M::UNIT));
            match &options.boundaries {
                Some(boundaries) => builder.with_boundaries(boundaries.clone()).build(),
                None => builder.build(),
            }
        }
    };
}

macro_rules! observable_instrument {
    ($fn_name:ident, $builder:ident, $ty:ty, $value:ty) => {
        pub(crate) fn $fn_name<M, F>(
            meter: Option<&Meter>,
            options: &InstrumentOptions,
            callback: F,
        ) -> $ty
        where
            M: Metric,
            F: Fn(&dyn AsyncInstrument<$value>) + Send + Sync + 'static,
        {
            meter_or_noop::<M>(meter)
                .$builder(M::NAME)
                .with_description(options.description_or(M::DESCRIPTION))
                .with_unit(options.unit_or(M::UNIT))
                .with_callback(callback)
                .build()
        }
    };
}

sync_instrument!(u64_counter, u64_counter, Counter<u64>);
sync_instrument!(i64_up_down_counter, i64_up_down_counter, UpDownCounter<i64>);

histogram!(u64_histogram, u64_histogram, u64);
histogram!(f64_histogram, f64_histogram, f64);

observable_instrument!(
    u64_observable_counter,
    u64_observable_counter,
    ObservableCounter<u64>,
    u64
);
observable_instrument!(
    f64_observable_counter,
    f64_observable_counter,
    ObservableCounter<f64>,
    f64
);
observable_instrument!(
    i64_observable_up_down_counter,
    i64_observable_up_down_counter,
    ObservableUpDownCounter<i64>,
    i64
);
observable_instrument!(
    i64_observable_gauge,
    i64_observable_gauge,
    ObservableGauge<i64>,
    i64
);
observable_instrument!(
    f64_observable_gauge,
    f64_observable_gauge,
    ObservableGauge<f64>,
    f64
);

/// Hands `f` the required attributes followed by the caller's extra ones.
///
/// Without extras the fixed array is passed as is; otherwise a single buffer
/// sized for both is filled.
#[inline]
pub(crate) fn with_attributes<const N: usize, R>(
    fixed: [KeyValue; N],
    extra: &[KeyValue],
    f: impl FnOnce(&[KeyValue]) -> R,
) -> R {
    if extra.is_empty() {
        return f(&fixed);
    }
    let mut attributes = Vec::with_capacity(N + extra.len());
    attributes.extend(fixed);
    attributes.extend_from_slice(extra);
    f(&attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Stability;
    use crate::testing::{Measurement, RecordingMeter};

    struct TestMetric;

    impl Metric for TestMetric {
        const NAME: &'static str = "test.metric";
        const UNIT: &'static str = "{thing}";
        const DESCRIPTION: &'static str = "A metric used in tests.";
        const STABILITY: Stability = Stability::Development;
    }

    #[test]
    fn missing_meter_falls_back_to_noop() {
        let counter = u64_counter::<TestMetric>(None, &InstrumentOptions::new());
        counter.add(1, &[KeyValue::new("key", "value")]);

        let histogram = f64_histogram::<TestMetric>(
            None,
            &HistogramOptions::new().with_boundaries(vec![1.0, 2.0]),
        );
        histogram.record(1.5, &[]);
    }

    #[test]
    fn conventions_are_applied_unless_overridden() {
        let recorder = RecordingMeter::new();
        let meter = recorder.meter();

        let _ = i64_up_down_counter::<TestMetric>(Some(&meter), &InstrumentOptions::new());
        let _ = u64_histogram::<TestMetric>(
            Some(&meter),
            &HistogramOptions::new()
                .with_description("custom")
                .with_unit("By")
                .with_boundaries(vec![10.0, 100.0]),
        );

        let created = recorder.instruments();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].name, "test.metric");
        assert_eq!(created[0].description.as_deref(), Some("A metric used in tests."));
        assert_eq!(created[0].unit.as_deref(), Some("{thing}"));
        assert_eq!(created[0].boundaries, None);
        assert_eq!(created[1].description.as_deref(), Some("custom"));
        assert_eq!(created[1].unit.as_deref(), Some("By"));
        assert_eq!(created[1].boundaries, Some(vec![10.0, 100.0]));
    }

    #[test]
    fn observable_callbacks_reach_the_meter() {
        let recorder = RecordingMeter::new();
        let meter = recorder.meter();

        let _gauge = f64_observable_gauge::<TestMetric, _>(
            Some(&meter),
            &InstrumentOptions::new(),
            |observer| observer.observe(0.5, &[KeyValue::new("state", "used")]),
        );
        recorder.collect();

        let measurements = recorder.measurements();
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].instrument, "test.metric");
        assert_eq!(measurements[0].value, Measurement::F64(0.5));
        assert_eq!(measurements[0].attributes, vec![KeyValue::new("state", "used")]);
    }

    #[test]
    fn fixed_attributes_come_first() {
        let fixed = [KeyValue::new("a", 1), KeyValue::new("b", 2)];

        let without_extra = with_attributes(fixed.clone(), &[], |attrs| attrs.to_vec());
        assert_eq!(without_extra, fixed.to_vec());

        let with_extra = with_attributes(fixed, &[KeyValue::new("c", 3)], |attrs| attrs.to_vec());
        assert_eq!(
            with_extra,
            vec![
                KeyValue::new("a", 1),
                KeyValue::new("b", 2),
                KeyValue::new("c", 3),
            ]
        );
    }

    #[test]
    fn empty_fixed_attributes_pass_extras_through() {
        let extra = [KeyValue::new("only", "extra")];
        let attrs = with_attributes([], &extra, |attrs| attrs.to_vec());
        assert_eq!(attrs, extra.to_vec());
    }
}

use crate::instrument::NoopSyncInstrument;
use opentelemetry::metrics::{
    AsyncInstrumentBuilder, Counter, Gauge, Histogram, HistogramBuilder, InstrumentBuilder,
    InstrumentProvider, Meter, MeterProvider, ObservableCounter, ObservableGauge,
    ObservableUpDownCounter, UpDownCounter,
};
use opentelemetry::InstrumentationScope;
use std::sync::{Arc, OnceLock};

/// The process-wide no-op [`Meter`].
static NOOP_METER: OnceLock<Meter> = OnceLock::new();

/// Returns a shared [`Meter`] whose instruments record nothing.
///
/// The meter is created on first use and reused afterwards, so handing it out
/// costs a reference copy.
pub fn meter() -> &'static Meter {
    NOOP_METER.get_or_init(|| Meter::new(Arc::new(NoopMeter::new())))
}

/// A no-op instance of a [`MeterProvider`].
///
/// Every scope resolves to the shared no-op [`Meter`], so obtaining meters from
/// this provider never allocates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMeterProvider {
    _private: (),
}

impl NoopMeterProvider {
    /// Create a new no-op meter provider.
    pub fn new() -> Self {
        NoopMeterProvider { _private: () }
    }
}

impl MeterProvider for NoopMeterProvider {
    fn meter_with_scope(&self, _scope: InstrumentationScope) -> Meter {
        meter().clone()
    }
}

/// A no-op instance of a `Meter`.
///
/// Every instrument it hands out ignores its measurements. Callbacks given to
/// observable instruments are dropped without ever being invoked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMeter {
    _private: (),
}

impl NoopMeter {
    /// Create a new no-op meter core.
    pub fn new() -> Self {
        NoopMeter { _private: () }
    }
}

impl InstrumentProvider for NoopMeter {
    fn u64_counter(&self, _builder: InstrumentBuilder<'_, Counter<u64>>) -> Counter<u64> {
        Counter::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn f64_counter(&self, _builder: InstrumentBuilder<'_, Counter<f64>>) -> Counter<f64> {
        Counter::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn u64_observable_counter(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableCounter<u64>, u64>,
    ) -> ObservableCounter<u64> {
        ObservableCounter::new()
    }

    fn f64_observable_counter(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableCounter<f64>, f64>,
    ) -> ObservableCounter<f64> {
        ObservableCounter::new()
    }

    fn i64_up_down_counter(
        &self,
        _builder: InstrumentBuilder<'_, UpDownCounter<i64>>,
    ) -> UpDownCounter<i64> {
        UpDownCounter::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn f64_up_down_counter(
        &self,
        _builder: InstrumentBuilder<'_, UpDownCounter<f64>>,
    ) -> UpDownCounter<f64> {
        UpDownCounter::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn i64_observable_up_down_counter(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableUpDownCounter<i64>, i64>,
    ) -> ObservableUpDownCounter<i64> {
        ObservableUpDownCounter::new()
    }

    fn f64_observable_up_down_counter(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableUpDownCounter<f64>, f64>,
    ) -> ObservableUpDownCounter<f64> {
        ObservableUpDownCounter::new()
    }

    fn u64_gauge(&self, _builder: InstrumentBuilder<'_, Gauge<u64>>) -> Gauge<u64> {
        Gauge::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn f64_gauge(&self, _builder: InstrumentBuilder<'_, Gauge<f64>>) -> Gauge<f64> {
        Gauge::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn i64_gauge(&self, _builder: InstrumentBuilder<'_, Gauge<i64>>) -> Gauge<i64> {
        Gauge::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn u64_observable_gauge(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableGauge<u64>, u64>,
    ) -> ObservableGauge<u64> {
        ObservableGauge::new()
    }

    fn i64_observable_gauge(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableGauge<i64>, i64>,
    ) -> ObservableGauge<i64> {
        ObservableGauge::new()
    }

    fn f64_observable_gauge(
        &self,
        _builder: AsyncInstrumentBuilder<'_, ObservableGauge<f64>, f64>,
    ) -> ObservableGauge<f64> {
        ObservableGauge::new()
    }

    fn f64_histogram(&self, _builder: HistogramBuilder<'_, Histogram<f64>>) -> Histogram<f64> {
        Histogram::new(Arc::new(NoopSyncInstrument::new()))
    }

    fn u64_histogram(&self, _builder: HistogramBuilder<'_, Histogram<u64>>) -> Histogram<u64> {
        Histogram::new(Arc::new(NoopSyncInstrument::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn provider_hands_out_the_shared_meter() {
        let provider = NoopMeterProvider::new();
        let scope = InstrumentationScope::builder("noop-test")
            .with_version("1.0.0")
            .build();

        // Neither call may panic, regardless of the scope.
        let _ = provider.meter("noop-test");
        let _ = provider.meter_with_scope(scope);
        assert!(std::ptr::eq(meter(), meter()));
    }

    #[test]
    fn sync_instruments_accept_measurements() {
        let meter = NoopMeterProvider::new().meter("noop-test");
        let attributes = [KeyValue::new("key", "value")];

        meter.u64_counter("u64_counter").build().add(1, &attributes);
        meter.f64_counter("f64_counter").build().add(1.5, &attributes);
        meter
            .i64_up_down_counter("i64_up_down_counter")
            .build()
            .add(-1, &attributes);
        meter
            .f64_up_down_counter("f64_up_down_counter")
            .build()
            .add(-1.5, &attributes);
        meter.u64_gauge("u64_gauge").build().record(1, &attributes);
        meter.i64_gauge("i64_gauge").build().record(-1, &attributes);
        meter.f64_gauge("f64_gauge").build().record(1.5, &attributes);
        meter
            .u64_histogram("u64_histogram")
            .with_boundaries(vec![1.0, 2.0])
            .build()
            .record(1, &attributes);
        meter
            .f64_histogram("f64_histogram")
            .with_description("ignored")
            .with_unit("s")
            .build()
            .record(1.5, &attributes);
    }

    #[test]
    fn observable_callbacks_are_never_invoked() {
        let meter = NoopMeterProvider::new().meter("noop-test");
        let calls = Arc::new(AtomicUsize::new(0));

        let counted = Arc::clone(&calls);
        let _counter = meter
            .u64_observable_counter("u64_observable_counter")
            .with_callback(move |observer| {
                counted.fetch_add(1, Ordering::SeqCst);
                observer.observe(1, &[]);
            })
            .build();
        let counted = Arc::clone(&calls);
        let _up_down = meter
            .i64_observable_up_down_counter("i64_observable_up_down_counter")
            .with_callback(move |observer| {
                counted.fetch_add(1, Ordering::SeqCst);
                observer.observe(-1, &[]);
            })
            .build();
        let counted = Arc::clone(&calls);
        let _gauge = meter
            .f64_observable_gauge("f64_observable_gauge")
            .with_callback(move |observer| {
                counted.fetch_add(1, Ordering::SeqCst);
                observer.observe(1.0, &[]);
            })
            .build();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

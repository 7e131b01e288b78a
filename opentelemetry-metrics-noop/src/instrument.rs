use opentelemetry::metrics::{
    AsyncInstrument, Counter, Gauge, Histogram, SyncInstrument, UpDownCounter,
};
use opentelemetry::KeyValue;
use std::sync::Arc;

/// A no-op sync instrument
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSyncInstrument {
    _private: (),
}

impl NoopSyncInstrument {
    /// Create a new no-op sync instrument
    pub fn new() -> Self {
        NoopSyncInstrument { _private: () }
    }
}

impl<T> SyncInstrument<T> for NoopSyncInstrument {
    fn measure(&self, _measurement: T, _attributes: &[KeyValue]) {
        // Ignored
    }
}

/// A no-op async instrument.
///
/// Also usable as the observer argument when invoking observable callbacks by
/// hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAsyncInstrument {
    _private: (),
}

impl NoopAsyncInstrument {
    /// Create a new no-op async instrument
    pub fn new() -> Self {
        NoopAsyncInstrument { _private: () }
    }
}

impl<T> AsyncInstrument<T> for NoopAsyncInstrument {
    fn observe(&self, _measurement: T, _attributes: &[KeyValue]) {
        // Ignored
    }
}

/// A [`Counter`] that records nothing.
pub fn counter<T>() -> Counter<T> {
    Counter::new(Arc::new(NoopSyncInstrument::new()))
}

/// An [`UpDownCounter`] that records nothing.
pub fn up_down_counter<T>() -> UpDownCounter<T> {
    UpDownCounter::new(Arc::new(NoopSyncInstrument::new()))
}

/// A [`Gauge`] that records nothing.
pub fn gauge<T>() -> Gauge<T> {
    Gauge::new(Arc::new(NoopSyncInstrument::new()))
}

/// A [`Histogram`] that records nothing.
pub fn histogram<T>() -> Histogram<T> {
    Histogram::new(Arc::new(NoopSyncInstrument::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn noop_instruments_are_thread_safe() {
        assert_send_sync::<NoopSyncInstrument>();
        assert_send_sync::<NoopAsyncInstrument>();
        assert_send_sync::<Counter<u64>>();
        assert_send_sync::<Histogram<f64>>();
    }

    #[test]
    fn standalone_instruments_ignore_measurements() {
        let attributes = [KeyValue::new("key", "value")];

        counter::<u64>().add(10, &attributes);
        counter::<f64>().add(0.5, &[]);
        up_down_counter::<i64>().add(-3, &attributes);
        gauge::<f64>().record(42.0, &attributes);
        histogram::<u64>().record(1024, &attributes);

        let observer = NoopAsyncInstrument::new();
        AsyncInstrument::<i64>::observe(&observer, 7, &attributes);
    }

    #[test]
    fn clones_share_the_noop_backend() {
        let first = counter::<u64>();
        let second = first.clone();
        first.add(1, &[]);
        second.add(1, &[]);
    }
}

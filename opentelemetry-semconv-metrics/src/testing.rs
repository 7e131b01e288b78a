//! An in-memory [`InstrumentProvider`] for asserting on what instruments do.
use opentelemetry::metrics::{
    AsyncInstrument, AsyncInstrumentBuilder, Counter, Gauge, Histogram, HistogramBuilder,
    InstrumentBuilder, InstrumentProvider, Meter, ObservableCounter, ObservableGauge,
    ObservableUpDownCounter, SyncInstrument, UpDownCounter,
};
use opentelemetry::KeyValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// The kind of instrument that was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstrumentKind {
    /// A sync counter.
    Counter,
    /// A sync up-down counter.
    UpDownCounter,
    /// A sync gauge.
    Gauge,
    /// A histogram.
    Histogram,
    /// A counter reported through a callback.
    ObservableCounter,
    /// An up-down counter reported through a callback.
    ObservableUpDownCounter,
    /// A gauge reported through a callback.
    ObservableGauge,
}

/// What an instrument was created with.
#[derive(Clone, Debug, PartialEq)]
pub struct InstrumentDescriptor {
    /// Instrument kind.
    pub kind: InstrumentKind,
    /// Instrument name.
    pub name: String,
    /// Instrument description, if one was given.
    pub description: Option<String>,
    /// Instrument unit, if one was given.
    pub unit: Option<String>,
    /// Explicit bucket boundaries, histograms only.
    pub boundaries: Option<Vec<f64>>,
}

/// A single measured value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurement {
    /// An unsigned integer measurement.
    U64(u64),
    /// A signed integer measurement.
    I64(i64),
    /// A floating point measurement.
    F64(f64),
}

impl From<u64> for Measurement {
    fn from(value: u64) -> Self {
        Measurement::U64(value)
    }
}

impl From<i64> for Measurement {
    fn from(value: i64) -> Self {
        Measurement::I64(value)
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::F64(value)
    }
}

/// A measurement together with the instrument and attributes it was made with.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedMeasurement {
    /// Name of the instrument.
    pub instrument: String,
    /// The measured value.
    pub value: Measurement,
    /// The attributes, in the order they were passed.
    pub attributes: Vec<KeyValue>,
}

type Collector = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct State {
    instruments: Vec<InstrumentDescriptor>,
    measurements: Vec<RecordedMeasurement>,
    collectors: Vec<Collector>,
}

/// An [`InstrumentProvider`] that keeps everything in memory.
///
/// Sync measurements are stored as they happen. Observable callbacks are kept
/// and only run when [`RecordingMeter::collect`] is called.
#[derive(Clone, Default)]
pub struct RecordingMeter {
    state: Arc<Mutex<State>>,
}

impl fmt::Debug for RecordingMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("RecordingMeter")
            .field("instruments", &state.instruments)
            .field("measurements", &state.measurements)
            .field("collectors", &state.collectors.len())
            .finish()
    }
}

impl RecordingMeter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`Meter`] whose instruments report into this recorder.
    pub fn meter(&self) -> Meter {
        Meter::new(Arc::new(self.clone()))
    }

    /// Every instrument created so far, in creation order.
    pub fn instruments(&self) -> Vec<InstrumentDescriptor> {
        self.lock().instruments.clone()
    }

    /// Every measurement recorded so far, in recording order.
    pub fn measurements(&self) -> Vec<RecordedMeasurement> {
        self.lock().measurements.clone()
    }

    /// Run every registered observable callback once.
    pub fn collect(&self) {
        // Callbacks record through the same state, so the lock must not be held.
        let collectors = self.lock().collectors.clone();
        for collector in collectors {
            collector();
        }
    }

    /// Forget all recorded measurements, keeping instruments and callbacks.
    pub fn reset(&self) {
        self.lock().measurements.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn register(
        &self,
        kind: InstrumentKind,
        name: &Cow<'static, str>,
        description: &Option<Cow<'static, str>>,
        unit: &Option<Cow<'static, str>>,
        boundaries: Option<Vec<f64>>,
    ) -> Arc<RecordingInstrument> {
        self.lock().instruments.push(InstrumentDescriptor {
            kind,
            name: name.to_string(),
            description: description.as_ref().map(|d| d.to_string()),
            unit: unit.as_ref().map(|u| u.to_string()),
            boundaries,
        });
        Arc::new(RecordingInstrument {
            name: name.to_string(),
            state: Arc::clone(&self.state),
        })
    }

    fn sync<T>(
        &self,
        kind: InstrumentKind,
        builder: InstrumentBuilder<'_, T>,
    ) -> Arc<RecordingInstrument> {
        self.register(kind, &builder.name, &builder.description, &builder.unit, None)
    }

    fn histogram<T>(&self, builder: HistogramBuilder<'_, T>) -> Arc<RecordingInstrument> {
        self.register(
            InstrumentKind::Histogram,
            &builder.name,
            &builder.description,
            &builder.unit,
            builder.boundaries.clone(),
        )
    }

    fn observable<I, M>(&self, kind: InstrumentKind, builder: AsyncInstrumentBuilder<'_, I, M>)
    where
        M: Into<Measurement> + 'static,
    {
        let observer =
            self.register(kind, &builder.name, &builder.description, &builder.unit, None);
        let callbacks = builder.callbacks;
        self.lock().collectors.push(Arc::new(move || {
            for callback in &callbacks {
                callback(observer.as_ref());
            }
        }));
    }
}

struct RecordingInstrument {
    name: String,
    state: Arc<Mutex<State>>,
}

impl RecordingInstrument {
    fn push(&self, value: Measurement, attributes: &[KeyValue]) {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .measurements
            .push(RecordedMeasurement {
                instrument: self.name.clone(),
                value,
                attributes: attributes.to_vec(),
            });
    }
}

impl<T: Into<Measurement>> SyncInstrument<T> for RecordingInstrument {
    fn measure(&self, measurement: T, attributes: &[KeyValue]) {
        self.push(measurement.into(), attributes)
    }
}

impl<T: Into<Measurement>> AsyncInstrument<T> for RecordingInstrument {
    fn observe(&self, measurement: T, attributes: &[KeyValue]) {
        self.push(measurement.into(), attributes)
    }
}

impl InstrumentProvider for RecordingMeter {
    fn u64_counter(&self, builder: InstrumentBuilder<'_, Counter<u64>>) -> Counter<u64> {
        Counter::new(self.sync(InstrumentKind::Counter, builder))
    }

    fn f64_counter(&self, builder: InstrumentBuilder<'_, Counter<f64>>) -> Counter<f64> {
        Counter::new(self.sync(InstrumentKind::Counter, builder))
    }

    fn u64_observable_counter(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableCounter<u64>, u64>,
    ) -> ObservableCounter<u64> {
        self.observable(InstrumentKind::ObservableCounter, builder);
        ObservableCounter::new()
    }

    fn f64_observable_counter(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableCounter<f64>, f64>,
    ) -> ObservableCounter<f64> {
        self.observable(InstrumentKind::ObservableCounter, builder);
        ObservableCounter::new()
    }

    fn i64_up_down_counter(
        &self,
        builder: InstrumentBuilder<'_, UpDownCounter<i64>>,
    ) -> UpDownCounter<i64> {
        UpDownCounter::new(self.sync(InstrumentKind::UpDownCounter, builder))
    }

    fn f64_up_down_counter(
        &self,
        builder: InstrumentBuilder<'_, UpDownCounter<f64>>,
    ) -> UpDownCounter<f64> {
        UpDownCounter::new(self.sync(InstrumentKind::UpDownCounter, builder))
    }

    fn i64_observable_up_down_counter(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableUpDownCounter<i64>, i64>,
    ) -> ObservableUpDownCounter<i64> {
        self.observable(InstrumentKind::ObservableUpDownCounter, builder);
        ObservableUpDownCounter::new()
    }

    fn f64_observable_up_down_counter(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableUpDownCounter<f64>, f64>,
    ) -> ObservableUpDownCounter<f64> {
        self.observable(InstrumentKind::ObservableUpDownCounter, builder);
        ObservableUpDownCounter::new()
    }

    fn u64_gauge(&self, builder: InstrumentBuilder<'_, Gauge<u64>>) -> Gauge<u64> {
        Gauge::new(self.sync(InstrumentKind::Gauge, builder))
    }

    fn f64_gauge(&self, builder: InstrumentBuilder<'_, Gauge<f64>>) -> Gauge<f64> {
        Gauge::new(self.sync(InstrumentKind::Gauge, builder))
    }

    fn i64_gauge(&self, builder: InstrumentBuilder<'_, Gauge<i64>>) -> Gauge<i64> {
        Gauge::new(self.sync(InstrumentKind::Gauge, builder))
    }

    fn u64_observable_gauge(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableGauge<u64>, u64>,
    ) -> ObservableGauge<u64> {
        self.observable(InstrumentKind::ObservableGauge, builder);
        ObservableGauge::new()
    }

    fn i64_observable_gauge(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableGauge<i64>, i64>,
    ) -> ObservableGauge<i64> {
        self.observable(InstrumentKind::ObservableGauge, builder);
        ObservableGauge::new()
    }

    fn f64_observable_gauge(
        &self,
        builder: AsyncInstrumentBuilder<'_, ObservableGauge<f64>, f64>,
    ) -> ObservableGauge<f64> {
        self.observable(InstrumentKind::ObservableGauge, builder);
        ObservableGauge::new()
    }

    fn f64_histogram(&self, builder: HistogramBuilder<'_, Histogram<f64>>) -> Histogram<f64> {
        Histogram::new(self.histogram(builder))
    }

    fn u64_histogram(&self, builder: HistogramBuilder<'_, Histogram<u64>>) -> Histogram<u64> {
        Histogram::new(self.histogram(builder))
    }
}

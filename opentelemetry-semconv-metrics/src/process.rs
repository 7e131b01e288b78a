// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # Process metrics
//!
//! Typed instruments for the `process.*` metric semantic conventions
//! (version 1.36.0).
//!
//! These are reported through callbacks, run by the SDK at collection time.
use crate::attribute::{
    CpuMode, DiskIoDirection, NetworkIoDirection, ProcessContextSwitchType,
    ProcessPagingFaultType,
};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::InstrumentOptions;
use opentelemetry::metrics::{
    AsyncInstrument, Meter, ObservableCounter, ObservableGauge, ObservableUpDownCounter,
};
use opentelemetry::KeyValue;

/// `process.context_switches`
///
/// Number of times the process has been context switched.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.context_switches` | Counter | `{context_switch}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`process.context_switch_type`] | `Recommended` |
///
/// [`process.context_switch_type`]: crate::attribute::ProcessContextSwitchType
#[derive(Clone, Debug)]
pub struct ContextSwitches {
    inner: ObservableCounter<u64>,
}

impl Metric for ContextSwitches {
    const NAME: &'static str = "process.context_switches";
    const UNIT: &'static str = "{context_switch}";
    const DESCRIPTION: &'static str = "Number of times the process has been context switched.";
    const STABILITY: Stability = Stability::Development;
}

impl ContextSwitches {
    /// Registers `process.context_switches` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::u64_observable_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.context_switches` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_observable_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableCounter<u64> {
        &self.inner
    }

    /// Returns an optional `process.context_switch_type` attribute.
    ///
    /// Specifies whether the context switches for this data point were voluntary or involuntary.
    pub fn attr_context_switch_type(value: ProcessContextSwitchType) -> KeyValue {
        KeyValue::new("process.context_switch_type", value)
    }
}

/// `process.cpu.time`
///
/// Total CPU seconds broken down by different states.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.cpu.time` | Counter | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`cpu.mode`] | `Recommended` |
///
/// [`cpu.mode`]: crate::attribute::CpuMode
#[derive(Clone, Debug)]
pub struct CpuTime {
    inner: ObservableCounter<f64>,
}

impl Metric for CpuTime {
    const NAME: &'static str = "process.cpu.time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Total CPU seconds broken down by different states.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuTime {
    /// Registers `process.cpu.time` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::f64_observable_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.cpu.time` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_observable_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableCounter<f64> {
        &self.inner
    }

    /// Returns an optional `cpu.mode` attribute.
    ///
    /// The mode of the CPU
    pub fn attr_cpu_mode(value: CpuMode) -> KeyValue {
        KeyValue::new("cpu.mode", value)
    }
}

/// `process.cpu.utilization`
///
/// Difference in process.cpu.time since the last measurement, divided by the elapsed time and number of CPUs available to the process.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.cpu.utilization` | Gauge | `1` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`cpu.mode`] | `Recommended` |
///
/// [`cpu.mode`]: crate::attribute::CpuMode
#[derive(Clone, Debug)]
pub struct CpuUtilization {
    inner: ObservableGauge<f64>,
}

impl Metric for CpuUtilization {
    const NAME: &'static str = "process.cpu.utilization";
    const UNIT: &'static str = "1";
    const DESCRIPTION: &'static str = "Difference in process.cpu.time since the last measurement, divided by the elapsed time and number of CPUs available to the process.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuUtilization {
    /// Registers `process.cpu.utilization` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::f64_observable_gauge::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.cpu.utilization` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_observable_gauge::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableGauge<f64> {
        &self.inner
    }

    /// Returns an optional `cpu.mode` attribute.
    ///
    /// The mode of the CPU
    pub fn attr_cpu_mode(value: CpuMode) -> KeyValue {
        KeyValue::new("cpu.mode", value)
    }
}

/// `process.disk.io`
///
/// Disk bytes transferred.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.disk.io` | Counter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`disk.io.direction`] | `Recommended` |
///
/// [`disk.io.direction`]: crate::attribute::DiskIoDirection
#[derive(Clone, Debug)]
pub struct DiskIo {
    inner: ObservableCounter<u64>,
}

impl Metric for DiskIo {
    const NAME: &'static str = "process.disk.io";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Disk bytes transferred.";
    const STABILITY: Stability = Stability::Development;
}

impl DiskIo {
    /// Registers `process.disk.io` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::u64_observable_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.disk.io` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_observable_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableCounter<u64> {
        &self.inner
    }

    /// Returns an optional `disk.io.direction` attribute.
    ///
    /// The disk IO operation direction.
    pub fn attr_disk_io_direction(value: DiskIoDirection) -> KeyValue {
        KeyValue::new("disk.io.direction", value)
    }
}

/// `process.memory.usage`
///
/// The amount of physical memory in use.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.memory.usage` | UpDownCounter | `By` | Development |
#[derive(Clone, Debug)]
pub struct MemoryUsage {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for MemoryUsage {
    const NAME: &'static str = "process.memory.usage";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "The amount of physical memory in use.";
    const STABILITY: Stability = Stability::Development;
}

impl MemoryUsage {
    /// Registers `process.memory.usage` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.memory.usage` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableUpDownCounter<i64> {
        &self.inner
    }
}

/// `process.memory.virtual`
///
/// The amount of committed virtual memory.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.memory.virtual` | UpDownCounter | `By` | Development |
#[derive(Clone, Debug)]
pub struct MemoryVirtual {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for MemoryVirtual {
    const NAME: &'static str = "process.memory.virtual";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "The amount of committed virtual memory.";
    const STABILITY: Stability = Stability::Development;
}

impl MemoryVirtual {
    /// Registers `process.memory.virtual` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.memory.virtual` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableUpDownCounter<i64> {
        &self.inner
    }
}

/// `process.network.io`
///
/// Network bytes transferred.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.network.io` | Counter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`network.io.direction`] | `Recommended` |
///
/// [`network.io.direction`]: crate::attribute::NetworkIoDirection
#[derive(Clone, Debug)]
pub struct NetworkIo {
    inner: ObservableCounter<u64>,
}

impl Metric for NetworkIo {
    const NAME: &'static str = "process.network.io";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Network bytes transferred.";
    const STABILITY: Stability = Stability::Development;
}

impl NetworkIo {
    /// Registers `process.network.io` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::u64_observable_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.network.io` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_observable_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableCounter<u64> {
        &self.inner
    }

    /// Returns an optional `network.io.direction` attribute.
    ///
    /// The network IO operation direction.
    pub fn attr_network_io_direction(value: NetworkIoDirection) -> KeyValue {
        KeyValue::new("network.io.direction", value)
    }
}

/// `process.paging.faults`
///
/// Number of page faults the process has made.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.paging.faults` | Counter | `{fault}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`process.paging.fault_type`] | `Recommended` |
///
/// [`process.paging.fault_type`]: crate::attribute::ProcessPagingFaultType
#[derive(Clone, Debug)]
pub struct PagingFaults {
    inner: ObservableCounter<u64>,
}

impl Metric for PagingFaults {
    const NAME: &'static str = "process.paging.faults";
    const UNIT: &'static str = "{fault}";
    const DESCRIPTION: &'static str = "Number of page faults the process has made.";
    const STABILITY: Stability = Stability::Development;
}

impl PagingFaults {
    /// Registers `process.paging.faults` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::u64_observable_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.paging.faults` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<u64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::u64_observable_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableCounter<u64> {
        &self.inner
    }

    /// Returns an optional `process.paging.fault_type` attribute.
    ///
    /// The type of page fault for this data point. Type `major` is for major/hard page faults,
    /// and `minor` is for minor/soft page faults.
    pub fn attr_paging_fault_type(value: ProcessPagingFaultType) -> KeyValue {
        KeyValue::new("process.paging.fault_type", value)
    }
}

/// `process.thread.count`
///
/// Process threads count.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.thread.count` | UpDownCounter | `{thread}` | Development |
#[derive(Clone, Debug)]
pub struct ThreadCount {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for ThreadCount {
    const NAME: &'static str = "process.thread.count";
    const UNIT: &'static str = "{thread}";
    const DESCRIPTION: &'static str = "Process threads count.";
    const STABILITY: Stability = Stability::Development;
}

impl ThreadCount {
    /// Registers `process.thread.count` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.thread.count` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableUpDownCounter<i64> {
        &self.inner
    }
}

/// `process.open_file_descriptor.count`
///
/// Number of file descriptors in use by the process.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.open_file_descriptor.count` | UpDownCounter | `{file_descriptor}` | Development |
#[derive(Clone, Debug)]
pub struct OpenFileDescriptorCount {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for OpenFileDescriptorCount {
    const NAME: &'static str = "process.open_file_descriptor.count";
    const UNIT: &'static str = "{file_descriptor}";
    const DESCRIPTION: &'static str = "Number of file descriptors in use by the process.";
    const STABILITY: Stability = Stability::Development;
}

impl OpenFileDescriptorCount {
    /// Registers `process.open_file_descriptor.count` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.open_file_descriptor.count` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::i64_observable_up_down_counter::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableUpDownCounter<i64> {
        &self.inner
    }
}

/// `process.uptime`
///
/// The time the process has been running.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `process.uptime` | Gauge | `s` | Development |
#[derive(Clone, Debug)]
pub struct Uptime {
    inner: ObservableGauge<f64>,
}

impl Metric for Uptime {
    const NAME: &'static str = "process.uptime";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The time the process has been running.";
    const STABILITY: Stability = Stability::Development;
}

impl Uptime {
    /// Registers `process.uptime` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::f64_observable_gauge::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `process.uptime` with `callback`, applying `options`.
    pub fn with_options<F>(
        meter: Option<&Meter>,
        options: InstrumentOptions,
        callback: F,
    ) -> Result<Self>
    where
        F: Fn(&dyn AsyncInstrument<f64>) + Send + Sync + 'static,
    {
        options.validate(Self::NAME)?;
        Ok(Self {
            inner: instrument::f64_observable_gauge::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableGauge<f64> {
        &self.inner
    }
}

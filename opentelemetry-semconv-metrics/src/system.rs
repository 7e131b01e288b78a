// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the template at scripts/templates/registry/rust/metrics.rs.j2
// - Run the script at scripts/generate-metrics-from-spec.sh

//! # System metrics
//!
//! Typed instruments for the `system.*` metric semantic conventions
//! (version 1.36.0).
//!
//! These are reported through callbacks, run by the SDK at collection time.
use crate::attribute::{
    CpuMode, DiskIoDirection, NetworkIoDirection, SystemFilesystemState, SystemFilesystemType,
    SystemMemoryState, SystemProcessStatus,
};
use crate::error::Result;
use crate::instrument;
use crate::metric::{Metric, Stability};
use crate::options::InstrumentOptions;
use opentelemetry::metrics::{
    AsyncInstrument, Meter, ObservableCounter, ObservableGauge, ObservableUpDownCounter,
};
use opentelemetry::{KeyValue, StringValue, Value};

/// `system.cpu.frequency`
///
/// Operating frequency of the logical CPU in Hertz.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.cpu.frequency` | Gauge | `Hz` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`cpu.logical_number`] | `Recommended` |
///
/// [`cpu.logical_number`]: CpuFrequency::attr_cpu_logical_number
#[derive(Clone, Debug)]
pub struct CpuFrequency {
    inner: ObservableGauge<i64>,
}

impl Metric for CpuFrequency {
    const NAME: &'static str = "system.cpu.frequency";
    const UNIT: &'static str = "Hz";
    const DESCRIPTION: &'static str = "Operating frequency of the logical CPU in Hertz.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuFrequency {
    /// Registers `system.cpu.frequency` with `callback`.
    ///
    /// Without a meter the callback is dropped and never invoked.
    pub fn new<F>(meter: Option<&Meter>, callback: F) -> Self
    where
        F: Fn(&dyn AsyncInstrument<i64>) + Send + Sync + 'static,
    {
        Self {
            inner: instrument::i64_observable_gauge::<Self, F>(
                meter,
                &InstrumentOptions::new(),
                callback,
            ),
        }
    }

    /// Registers `system.cpu.frequency` with `callback`, applying `options`.
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
            inner: instrument::i64_observable_gauge::<Self, F>(meter, &options, callback),
        })
    }

    /// The underlying instrument.
    pub fn inst(&self) -> &ObservableGauge<i64> {
        &self.inner
    }

    /// Returns an optional `cpu.logical_number` attribute.
    ///
    /// The logical CPU number [0..n-1]
    pub fn attr_cpu_logical_number(value: i64) -> KeyValue {
        KeyValue::new("cpu.logical_number", value)
    }
}

/// `system.cpu.logical.count`
///
/// Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.cpu.logical.count` | UpDownCounter | `{cpu}` | Development |
#[derive(Clone, Debug)]
pub struct CpuLogicalCount {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for CpuLogicalCount {
    const NAME: &'static str = "system.cpu.logical.count";
    const UNIT: &'static str = "{cpu}";
    const DESCRIPTION: &'static str = "Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuLogicalCount {
    /// Registers `system.cpu.logical.count` with `callback`.
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

    /// Registers `system.cpu.logical.count` with `callback`, applying `options`.
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

/// `system.cpu.physical.count`
///
/// Reports the number of actual physical processor cores on the hardware.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.cpu.physical.count` | UpDownCounter | `{cpu}` | Development |
#[derive(Clone, Debug)]
pub struct CpuPhysicalCount {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for CpuPhysicalCount {
    const NAME: &'static str = "system.cpu.physical.count";
    const UNIT: &'static str = "{cpu}";
    const DESCRIPTION: &'static str = "Reports the number of actual physical processor cores on the hardware.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuPhysicalCount {
    /// Registers `system.cpu.physical.count` with `callback`.
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

    /// Registers `system.cpu.physical.count` with `callback`, applying `options`.
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

/// `system.cpu.time`
///
/// Seconds each logical CPU spent on each mode.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.cpu.time` | Counter | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`cpu.logical_number`] | `Recommended` |
/// | [`cpu.mode`] | `Recommended` |
///
/// [`cpu.logical_number`]: CpuTime::attr_cpu_logical_number
/// [`cpu.mode`]: crate::attribute::CpuMode
#[derive(Clone, Debug)]
pub struct CpuTime {
    inner: ObservableCounter<f64>,
}

impl Metric for CpuTime {
    const NAME: &'static str = "system.cpu.time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Seconds each logical CPU spent on each mode.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuTime {
    /// Registers `system.cpu.time` with `callback`.
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

    /// Registers `system.cpu.time` with `callback`, applying `options`.
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

    /// Returns an optional `cpu.logical_number` attribute.
    ///
    /// The logical CPU number [0..n-1]
    pub fn attr_cpu_logical_number(value: i64) -> KeyValue {
        KeyValue::new("cpu.logical_number", value)
    }

    /// Returns an optional `cpu.mode` attribute.
    ///
    /// The mode of the CPU
    pub fn attr_cpu_mode(value: CpuMode) -> KeyValue {
        KeyValue::new("cpu.mode", value)
    }
}

/// `system.cpu.utilization`
///
/// For each logical CPU, the utilization is calculated as the change in cumulative CPU time (cpu.time) over a measurement interval, divided by the elapsed time.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.cpu.utilization` | Gauge | `1` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`cpu.logical_number`] | `Recommended` |
/// | [`cpu.mode`] | `Recommended` |
///
/// [`cpu.logical_number`]: CpuUtilization::attr_cpu_logical_number
/// [`cpu.mode`]: crate::attribute::CpuMode
#[derive(Clone, Debug)]
pub struct CpuUtilization {
    inner: ObservableGauge<f64>,
}

impl Metric for CpuUtilization {
    const NAME: &'static str = "system.cpu.utilization";
    const UNIT: &'static str = "1";
    const DESCRIPTION: &'static str = "For each logical CPU, the utilization is calculated as the change in cumulative CPU time (cpu.time) over a measurement interval, divided by the elapsed time.";
    const STABILITY: Stability = Stability::Development;
}

impl CpuUtilization {
    /// Registers `system.cpu.utilization` with `callback`.
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

    /// Registers `system.cpu.utilization` with `callback`, applying `options`.
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

    /// Returns an optional `cpu.logical_number` attribute.
    ///
    /// The logical CPU number [0..n-1]
    pub fn attr_cpu_logical_number(value: i64) -> KeyValue {
        KeyValue::new("cpu.logical_number", value)
    }

    /// Returns an optional `cpu.mode` attribute.
    ///
    /// The mode of the CPU
    pub fn attr_cpu_mode(value: CpuMode) -> KeyValue {
        KeyValue::new("cpu.mode", value)
    }
}

/// `system.disk.io`
///
/// Disk bytes transferred.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.disk.io` | Counter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`disk.io.direction`] | `Recommended` |
/// | [`system.device`] | `Recommended` |
///
/// [`disk.io.direction`]: crate::attribute::DiskIoDirection
/// [`system.device`]: DiskIo::attr_device
#[derive(Clone, Debug)]
pub struct DiskIo {
    inner: ObservableCounter<u64>,
}

impl Metric for DiskIo {
    const NAME: &'static str = "system.disk.io";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Disk bytes transferred.";
    const STABILITY: Stability = Stability::Development;
}

impl DiskIo {
    /// Registers `system.disk.io` with `callback`.
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

    /// Registers `system.disk.io` with `callback`, applying `options`.
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

    /// Returns an optional `system.device` attribute.
    ///
    /// The device identifier
    pub fn attr_device(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("system.device", Value::String(value.into()))
    }
}

/// `system.disk.io_time`
///
/// Time disk spent activated.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.disk.io_time` | Counter | `s` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`system.device`] | `Recommended` |
///
/// [`system.device`]: DiskIoTime::attr_device
#[derive(Clone, Debug)]
pub struct DiskIoTime {
    inner: ObservableCounter<f64>,
}

impl Metric for DiskIoTime {
    const NAME: &'static str = "system.disk.io_time";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "Time disk spent activated.";
    const STABILITY: Stability = Stability::Development;
}

impl DiskIoTime {
    /// Registers `system.disk.io_time` with `callback`.
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

    /// Registers `system.disk.io_time` with `callback`, applying `options`.
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

    /// Returns an optional `system.device` attribute.
    ///
    /// The device identifier
    pub fn attr_device(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("system.device", Value::String(value.into()))
    }
}

/// `system.filesystem.usage`
///
/// Reports a filesystem's space usage across different states.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.filesystem.usage` | UpDownCounter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`system.device`] | `Recommended` |
/// | [`system.filesystem.mode`] | `Recommended` |
/// | [`system.filesystem.mountpoint`] | `Recommended` |
/// | [`system.filesystem.state`] | `Recommended` |
/// | [`system.filesystem.type`] | `Recommended` |
///
/// [`system.device`]: FilesystemUsage::attr_device
/// [`system.filesystem.mode`]: FilesystemUsage::attr_filesystem_mode
/// [`system.filesystem.mountpoint`]: FilesystemUsage::attr_filesystem_mountpoint
/// [`system.filesystem.state`]: crate::attribute::SystemFilesystemState
/// [`system.filesystem.type`]: crate::attribute::SystemFilesystemType
#[derive(Clone, Debug)]
pub struct FilesystemUsage {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for FilesystemUsage {
    const NAME: &'static str = "system.filesystem.usage";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Reports a filesystem's space usage across different states.";
    const STABILITY: Stability = Stability::Development;
}

impl FilesystemUsage {
    /// Registers `system.filesystem.usage` with `callback`.
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

    /// Registers `system.filesystem.usage` with `callback`, applying `options`.
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

    /// Returns an optional `system.device` attribute.
    ///
    /// The device identifier
    pub fn attr_device(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("system.device", Value::String(value.into()))
    }

    /// Returns an optional `system.filesystem.mode` attribute.
    ///
    /// The filesystem mode
    pub fn attr_filesystem_mode(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("system.filesystem.mode", Value::String(value.into()))
    }

    /// Returns an optional `system.filesystem.mountpoint` attribute.
    ///
    /// The filesystem mount path
    pub fn attr_filesystem_mountpoint(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("system.filesystem.mountpoint", Value::String(value.into()))
    }

    /// Returns an optional `system.filesystem.state` attribute.
    ///
    /// The filesystem state
    pub fn attr_filesystem_state(value: SystemFilesystemState) -> KeyValue {
        KeyValue::new("system.filesystem.state", value)
    }

    /// Returns an optional `system.filesystem.type` attribute.
    ///
    /// The filesystem type
    pub fn attr_filesystem_type(value: SystemFilesystemType) -> KeyValue {
        KeyValue::new("system.filesystem.type", value)
    }
}

/// `system.memory.limit`
///
/// Total memory available in the system.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.memory.limit` | UpDownCounter | `By` | Development |
#[derive(Clone, Debug)]
pub struct MemoryLimit {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for MemoryLimit {
    const NAME: &'static str = "system.memory.limit";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Total memory available in the system.";
    const STABILITY: Stability = Stability::Development;
}

impl MemoryLimit {
    /// Registers `system.memory.limit` with `callback`.
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

    /// Registers `system.memory.limit` with `callback`, applying `options`.
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

/// `system.memory.usage`
///
/// Reports memory in use by state.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.memory.usage` | UpDownCounter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`system.memory.state`] | `Recommended` |
///
/// [`system.memory.state`]: crate::attribute::SystemMemoryState
#[derive(Clone, Debug)]
pub struct MemoryUsage {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for MemoryUsage {
    const NAME: &'static str = "system.memory.usage";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "Reports memory in use by state.";
    const STABILITY: Stability = Stability::Development;
}

impl MemoryUsage {
    /// Registers `system.memory.usage` with `callback`.
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

    /// Registers `system.memory.usage` with `callback`, applying `options`.
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

    /// Returns an optional `system.memory.state` attribute.
    ///
    /// The memory state
    pub fn attr_memory_state(value: SystemMemoryState) -> KeyValue {
        KeyValue::new("system.memory.state", value)
    }
}

/// `system.memory.utilization`
///
/// Percentage of memory bytes in use.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.memory.utilization` | Gauge | `1` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`system.memory.state`] | `Recommended` |
///
/// [`system.memory.state`]: crate::attribute::SystemMemoryState
#[derive(Clone, Debug)]
pub struct MemoryUtilization {
    inner: ObservableGauge<f64>,
}

impl Metric for MemoryUtilization {
    const NAME: &'static str = "system.memory.utilization";
    const UNIT: &'static str = "1";
    const DESCRIPTION: &'static str = "Percentage of memory bytes in use.";
    const STABILITY: Stability = Stability::Development;
}

impl MemoryUtilization {
    /// Registers `system.memory.utilization` with `callback`.
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

    /// Registers `system.memory.utilization` with `callback`, applying `options`.
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

    /// Returns an optional `system.memory.state` attribute.
    ///
    /// The memory state
    pub fn attr_memory_state(value: SystemMemoryState) -> KeyValue {
        KeyValue::new("system.memory.state", value)
    }
}

/// `system.network.io`
///
/// The number of bytes transmitted and received.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.network.io` | Counter | `By` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`network.interface.name`] | `Recommended` |
/// | [`network.io.direction`] | `Recommended` |
///
/// [`network.interface.name`]: NetworkIo::attr_network_interface_name
/// [`network.io.direction`]: crate::attribute::NetworkIoDirection
#[derive(Clone, Debug)]
pub struct NetworkIo {
    inner: ObservableCounter<u64>,
}

impl Metric for NetworkIo {
    const NAME: &'static str = "system.network.io";
    const UNIT: &'static str = "By";
    const DESCRIPTION: &'static str = "The number of bytes transmitted and received.";
    const STABILITY: Stability = Stability::Development;
}

impl NetworkIo {
    /// Registers `system.network.io` with `callback`.
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

    /// Registers `system.network.io` with `callback`, applying `options`.
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

    /// Returns an optional `network.interface.name` attribute.
    ///
    /// The network interface name.
    pub fn attr_network_interface_name(value: impl Into<StringValue>) -> KeyValue {
        KeyValue::new("network.interface.name", Value::String(value.into()))
    }

    /// Returns an optional `network.io.direction` attribute.
    ///
    /// The network IO operation direction.
    pub fn attr_network_io_direction(value: NetworkIoDirection) -> KeyValue {
        KeyValue::new("network.io.direction", value)
    }
}

/// `system.process.count`
///
/// Total number of processes in each state.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.process.count` | UpDownCounter | `{process}` | Development |
///
/// ## Attributes
///
/// | Name | Requirement |
/// |:-|:- |
/// | [`system.process.status`] | `Recommended` |
///
/// [`system.process.status`]: crate::attribute::SystemProcessStatus
#[derive(Clone, Debug)]
pub struct ProcessCount {
    inner: ObservableUpDownCounter<i64>,
}

impl Metric for ProcessCount {
    const NAME: &'static str = "system.process.count";
    const UNIT: &'static str = "{process}";
    const DESCRIPTION: &'static str = "Total number of processes in each state.";
    const STABILITY: Stability = Stability::Development;
}

impl ProcessCount {
    /// Registers `system.process.count` with `callback`.
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

    /// Registers `system.process.count` with `callback`, applying `options`.
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

    /// Returns an optional `system.process.status` attribute.
    ///
    /// The process state, e.g., [Linux Process State
    /// Codes](https://man7.org/linux/man-pages/man1/ps.1.html#PROCESS_STATE_CODES)
    pub fn attr_process_status(value: SystemProcessStatus) -> KeyValue {
        KeyValue::new("system.process.status", value)
    }
}

/// `system.process.created`
///
/// Total number of processes created over uptime of the host.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.process.created` | Counter | `{process}` | Development |
#[derive(Clone, Debug)]
pub struct ProcessCreated {
    inner: ObservableCounter<u64>,
}

impl Metric for ProcessCreated {
    const NAME: &'static str = "system.process.created";
    const UNIT: &'static str = "{process}";
    const DESCRIPTION: &'static str = "Total number of processes created over uptime of the host.";
    const STABILITY: Stability = Stability::Development;
}

impl ProcessCreated {
    /// Registers `system.process.created` with `callback`.
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

    /// Registers `system.process.created` with `callback`, applying `options`.
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
}

/// `system.uptime`
///
/// The time the system has been running.
///
/// | Name | Instrument Kind | Unit (UCUM) | Stability |
/// | -------- | --------------- | ----------- | --------- |
/// | `system.uptime` | Gauge | `s` | Development |
#[derive(Clone, Debug)]
pub struct Uptime {
    inner: ObservableGauge<f64>,
}

impl Metric for Uptime {
    const NAME: &'static str = "system.uptime";
    const UNIT: &'static str = "s";
    const DESCRIPTION: &'static str = "The time the system has been running.";
    const STABILITY: Stability = Stability::Development;
}

impl Uptime {
    /// Registers `system.uptime` with `callback`.
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

    /// Registers `system.uptime` with `callback`, applying `options`.
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

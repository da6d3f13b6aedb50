//! Typed configuration request.
//!
//! One optional field per recognised setting: `None` means "leave this
//! setting alone" and contributes no bytes. Numbers are `f64`; fractional
//! values are truncated when written, after any ×10 scaling.
//!
//! ## Example
//!
//! ```rust
//! use wt101_codec::{ConfigurationRequest, settings::FreezeProtection};
//!
//! let request = ConfigurationRequest::new()
//!     .with_timezone(8.0)
//!     .with_freeze_protection(FreezeProtection::enabled(5.0))
//!     .with_child_lock(true);
//!
//! let downlink = wt101_codec::encode(&request)?;
//! assert_eq!(downlink.len(), 4 + 5 + 3);
//! # Ok::<(), wt101_codec::EncodeError>(())
//! ```

use crate::settings::{
    ControlMode, FreezeProtection, OpenWindowDetection, TemperatureCalibration, TemperatureControl,
    ValveControlAlgorithm,
};

/// Device settings to push in one downlink
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigurationRequest {
    /// Restart the device
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reboot: Option<bool>,
    /// Request an immediate status report
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub report_status: Option<bool>,
    /// Request time synchronisation
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sync_time: Option<bool>,
    /// Report interval in minutes, 1-1440
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub report_interval: Option<f64>,
    /// Timezone offset in hours, -12 to 12
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub timezone: Option<f64>,
    /// Temperature sensor calibration
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature_calibration: Option<TemperatureCalibration>,
    /// Temperature control enable and mode
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature_control: Option<TemperatureControl>,
    /// Target temperature, whole °C
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature_target: Option<f64>,
    /// Target tolerance in °C; required with `temperature_target`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature_error: Option<f64>,
    /// Open window detection
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub open_window_detection: Option<OpenWindowDetection>,
    /// Leave the open-window state
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub restore_open_window_detection_status: Option<bool>,
    /// Manual valve opening in percent, 0-100
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub valve_opening: Option<f64>,
    /// Run a valve calibration
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub valve_calibration: Option<bool>,
    /// Valve control algorithm
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub valve_control_algorithm: Option<ValveControlAlgorithm>,
    /// Freeze protection
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub freeze_protection: Option<FreezeProtection>,
    /// Child lock
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub child_lock: Option<bool>,
}

impl ConfigurationRequest {
    /// An empty request (encodes to zero bytes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no setting is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Restart the device (`false` sends nothing)
    #[must_use]
    pub fn with_reboot(mut self, reboot: bool) -> Self {
        self.reboot = Some(reboot);
        self
    }

    /// Ask for a status report (`false` sends nothing)
    #[must_use]
    pub fn with_report_status(mut self, report_status: bool) -> Self {
        self.report_status = Some(report_status);
        self
    }

    /// Ask for time synchronisation (`false` sends nothing)
    #[must_use]
    pub fn with_sync_time(mut self, sync_time: bool) -> Self {
        self.sync_time = Some(sync_time);
        self
    }

    /// Set the report interval in minutes
    #[must_use]
    pub fn with_report_interval(mut self, minutes: f64) -> Self {
        self.report_interval = Some(minutes);
        self
    }

    /// Set the timezone offset in hours
    #[must_use]
    pub fn with_timezone(mut self, hours: f64) -> Self {
        self.timezone = Some(hours);
        self
    }

    /// Set the temperature sensor calibration
    #[must_use]
    pub fn with_temperature_calibration(mut self, calibration: TemperatureCalibration) -> Self {
        self.temperature_calibration = Some(calibration);
        self
    }

    /// Set `temperature_control.enable`, keeping any mode already set
    #[must_use]
    pub fn with_temperature_control_enable(mut self, enable: bool) -> Self {
        self.temperature_control.get_or_insert_with(TemperatureControl::default).enable = Some(enable);
        self
    }

    /// Set `temperature_control.mode`, keeping any enable flag already set
    #[must_use]
    pub fn with_temperature_control_mode(mut self, mode: ControlMode) -> Self {
        self.temperature_control.get_or_insert_with(TemperatureControl::default).mode = Some(mode);
        self
    }

    /// Set the target temperature together with its tolerance
    #[must_use]
    pub fn with_temperature_target(mut self, target: f64, error: f64) -> Self {
        self.temperature_target = Some(target);
        self.temperature_error = Some(error);
        self
    }

    /// Set open window detection
    #[must_use]
    pub fn with_open_window_detection(mut self, detection: OpenWindowDetection) -> Self {
        self.open_window_detection = Some(detection);
        self
    }

    /// Leave the open-window state (`false` sends nothing)
    #[must_use]
    pub fn with_restore_open_window_detection_status(mut self, restore: bool) -> Self {
        self.restore_open_window_detection_status = Some(restore);
        self
    }

    /// Set the manual valve opening in percent
    #[must_use]
    pub fn with_valve_opening(mut self, percent: f64) -> Self {
        self.valve_opening = Some(percent);
        self
    }

    /// Run a valve calibration (`false` sends nothing)
    #[must_use]
    pub fn with_valve_calibration(mut self, calibrate: bool) -> Self {
        self.valve_calibration = Some(calibrate);
        self
    }

    /// Set the valve control algorithm
    #[must_use]
    pub fn with_valve_control_algorithm(mut self, algorithm: ValveControlAlgorithm) -> Self {
        self.valve_control_algorithm = Some(algorithm);
        self
    }

    /// Set freeze protection
    #[must_use]
    pub fn with_freeze_protection(mut self, protection: FreezeProtection) -> Self {
        self.freeze_protection = Some(protection);
        self
    }

    /// Lock or unlock the device buttons
    #[must_use]
    pub fn with_child_lock(mut self, child_lock: bool) -> Self {
        self.child_lock = Some(child_lock);
        self
    }
}

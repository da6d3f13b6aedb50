//! Building requests from dynamic JSON mappings.
//!
//! Network servers hand the encoder an untyped object such as
//! `{"timezone": 8, "temperature_control": {"mode": "auto"}}`. This module
//! checks each recognised key's shape and produces a [`ConfigurationRequest`].
//!
//! - A key is present when it exists in the mapping, whatever its value.
//!   `null` counts as present and fails the type check.
//! - Value sub-fields of a disabled setting (`temperature`, `rate`, `time`)
//!   are not read, so any value there is accepted.
//! - Unrecognised keys are ignored.
//! - Type errors name the dotted field path (`temperature_calibration.enable`).

use serde_json::{Map, Value};

use crate::error::{EncodeError, Result, ValueKind};
use crate::request::ConfigurationRequest;
use crate::settings::{
    ControlMode, FreezeProtection, OpenWindowDetection, TemperatureCalibration, TemperatureControl,
    ValveControlAlgorithm,
};

type Object = Map<String, Value>;

fn object<'a>(value: &'a Value, field: &'static str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| EncodeError::type_mismatch(field, ValueKind::Object))
}

fn boolean(map: &Object, key: &str, field: &'static str) -> Result<Option<bool>> {
    map.get(key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| EncodeError::type_mismatch(field, ValueKind::Boolean))
        })
        .transpose()
}

fn required_boolean(map: &Object, key: &str, field: &'static str) -> Result<bool> {
    boolean(map, key, field)?.ok_or_else(|| EncodeError::missing_field(field, ValueKind::Boolean))
}

fn number(map: &Object, key: &str, field: &'static str) -> Result<Option<f64>> {
    map.get(key)
        .map(|value| {
            value
                .as_f64()
                .ok_or_else(|| EncodeError::type_mismatch(field, ValueKind::Number))
        })
        .transpose()
}

/// Sub-field of a toggled setting. It only matters when the setting is
/// enabled, so a disabled setting skips the check and reads as `None`.
fn enabled_number(map: &Object, enable: bool, key: &str, field: &'static str) -> Result<Option<f64>> {
    if enable {
        number(map, key, field)
    } else {
        Ok(None)
    }
}

fn string<'a>(map: &'a Object, key: &str, field: &'static str) -> Result<Option<&'a str>> {
    map.get(key)
        .map(|value| {
            value
                .as_str()
                .ok_or_else(|| EncodeError::type_mismatch(field, ValueKind::String))
        })
        .transpose()
}

fn nested<T>(
    map: &Object,
    key: &'static str,
    parse: impl FnOnce(&Object) -> Result<T>,
) -> Result<Option<T>> {
    map.get(key).map(|value| parse(object(value, key)?)).transpose()
}

fn temperature_calibration(map: &Object) -> Result<TemperatureCalibration> {
    let enable = required_boolean(map, "enable", "temperature_calibration.enable")?;
    Ok(TemperatureCalibration {
        enable,
        temperature: enabled_number(map, enable, "temperature", "temperature_calibration.temperature")?,
    })
}

fn temperature_control(map: &Object) -> Result<TemperatureControl> {
    Ok(TemperatureControl {
        enable: boolean(map, "enable", "temperature_control.enable")?,
        mode: string(map, "mode", "temperature_control.mode")?.map(ControlMode::from_name),
    })
}

fn open_window_detection(map: &Object) -> Result<OpenWindowDetection> {
    let enable = required_boolean(map, "enable", "open_window_detection.enable")?;
    Ok(OpenWindowDetection {
        enable,
        rate: enabled_number(map, enable, "rate", "open_window_detection.rate")?,
        time: enabled_number(map, enable, "time", "open_window_detection.time")?,
    })
}

fn freeze_protection(map: &Object) -> Result<FreezeProtection> {
    let enable = required_boolean(map, "enable", "freeze_protection.enable")?;
    Ok(FreezeProtection {
        enable,
        temperature: enabled_number(map, enable, "temperature", "freeze_protection.temperature")?,
    })
}

impl ConfigurationRequest {
    /// Build a request from a JSON object, checking every recognised key's type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wt101_codec::ConfigurationRequest;
    ///
    /// let value = serde_json::json!({ "timezone": -4, "unknown_key": "ignored" });
    /// let request = ConfigurationRequest::from_json_value(&value)?;
    /// assert_eq!(request.timezone, Some(-4.0));
    /// # Ok::<(), wt101_codec::EncodeError>(())
    /// ```
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let root = object(value, "request")?;

        let temperature_target = number(root, "temperature_target", "temperature_target")?;
        // The tolerance only travels with a target
        let temperature_error = if temperature_target.is_some() {
            number(root, "temperature_error", "temperature_error")?
        } else {
            None
        };

        Ok(Self {
            reboot: boolean(root, "reboot", "reboot")?,
            report_status: boolean(root, "report_status", "report_status")?,
            sync_time: boolean(root, "sync_time", "sync_time")?,
            report_interval: number(root, "report_interval", "report_interval")?,
            timezone: number(root, "timezone", "timezone")?,
            temperature_calibration: nested(root, "temperature_calibration", temperature_calibration)?,
            temperature_control: nested(root, "temperature_control", temperature_control)?,
            temperature_target,
            temperature_error,
            open_window_detection: nested(root, "open_window_detection", open_window_detection)?,
            restore_open_window_detection_status: boolean(
                root,
                "restore_open_window_detection_status",
                "restore_open_window_detection_status",
            )?,
            valve_opening: number(root, "valve_opening", "valve_opening")?,
            valve_calibration: boolean(root, "valve_calibration", "valve_calibration")?,
            valve_control_algorithm: string(root, "valve_control_algorithm", "valve_control_algorithm")?
                .map(ValveControlAlgorithm::from_name)
                .transpose()?,
            freeze_protection: nested(root, "freeze_protection", freeze_protection)?,
            child_lock: boolean(root, "child_lock", "child_lock")?,
        })
    }
}

impl TryFrom<&Value> for ConfigurationRequest {
    type Error = EncodeError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json_value(value)
    }
}

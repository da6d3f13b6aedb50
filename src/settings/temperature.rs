//! Temperature commands: calibration, control, target, freeze protection.
//!
//! ## Layouts
//!
//! ```text
//! temperature_calibration  FF AB 01 <i16 LE °C×10>    (enabled)
//!                          FF AB 00                   (disabled)
//! temperature_control      FF B3 <0|1>
//! temperature_control mode FF AE <0 auto | 1 manual>
//! temperature_target       FF B1 <i8 °C> <u16 LE tolerance×10>
//! freeze_protection        FF B0 <0|1> <i16 LE °C×10> (zero when disabled)
//! ```

use core::fmt;

use crate::error::Result;
use crate::protocol::constants::Opcode;
use crate::protocol::frame::{command, scale, truncate, Frame, FrameWriter};
use crate::settings::{finite, required};

/// Temperature sensor calibration offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureCalibration {
    /// Apply the calibration offset
    pub enable: bool,
    /// Offset in °C, one decimal digit. Required when enabled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub temperature: Option<f64>,
}

impl TemperatureCalibration {
    /// Calibration enabled with the given offset
    pub const fn enabled(temperature: f64) -> Self {
        Self {
            enable: true,
            temperature: Some(temperature),
        }
    }

    /// Calibration disabled
    pub const fn disabled() -> Self {
        Self {
            enable: false,
            temperature: None,
        }
    }
}

/// Temperature control sub-settings. Each present field emits its own frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureControl {
    /// Turn temperature control on or off
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub enable: Option<bool>,
    /// Automatic or manual control
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mode: Option<ControlMode>,
}

/// Temperature control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ControlMode {
    /// Device regulates toward the target temperature
    Auto = 0,
    /// Valve position is set manually
    Manual = 1,
}

impl ControlMode {
    /// Map a mode name. Only `"auto"` selects [`ControlMode::Auto`]; every
    /// other string selects [`ControlMode::Manual`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "auto" => Self::Auto,
            "manual" => Self::Manual,
            other => {
                codec_log!(warn, "temperature_control.mode '{}' treated as manual", other);
                Self::Manual
            }
        }
    }

    /// Mode name as accepted in requests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ControlMode {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModeVisitor;

        impl serde::de::Visitor<'_> for ModeVisitor {
            type Value = ControlMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a temperature control mode string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> core::result::Result<ControlMode, E> {
                Ok(ControlMode::from_name(v))
            }
        }

        deserializer.deserialize_str(ModeVisitor)
    }
}

/// Freeze protection threshold
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreezeProtection {
    /// Open the valve when the room drops below the threshold
    pub enable: bool,
    /// Threshold in °C, one decimal digit. Required when enabled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub temperature: Option<f64>,
}

impl FreezeProtection {
    /// Protection enabled at the given threshold
    pub const fn enabled(temperature: f64) -> Self {
        Self {
            enable: true,
            temperature: Some(temperature),
        }
    }

    /// Protection disabled
    pub const fn disabled() -> Self {
        Self {
            enable: false,
            temperature: None,
        }
    }
}

/// Temperature calibration. The disabled form has no temperature field.
pub fn temperature_calibration(calibration: &TemperatureCalibration) -> Result<Frame> {
    if !calibration.enable {
        return Ok(command(Opcode::TemperatureCalibration, 0x00));
    }

    let temperature = required("temperature_calibration.temperature", calibration.temperature)?;

    let mut writer = FrameWriter::<5>::new(Opcode::TemperatureCalibration)?;
    writer.write_u8(0x01)?;
    writer.write_i16_le(scale(temperature) as i16)?;
    writer.finish()
}

/// Turn temperature control on or off
pub fn temperature_control(enable: bool) -> Frame {
    command(Opcode::TemperatureControl, u8::from(enable))
}

/// Select automatic or manual temperature control
pub fn temperature_control_mode(mode: ControlMode) -> Frame {
    command(Opcode::TemperatureControlMode, mode as u8)
}

/// Target temperature (whole °C) and its tolerance (°C, one decimal digit).
///
/// The tolerance comes from the request's `temperature_error` key and must be
/// present whenever a target is set.
pub fn temperature_target(target: f64, error: Option<f64>) -> Result<Frame> {
    let target = finite("temperature_target", target)?;
    let error = required("temperature_error", error)?;

    let mut writer = FrameWriter::<5>::new(Opcode::TemperatureTarget)?;
    writer.write_i8(truncate(target) as i8)?;
    writer.write_u16_le(scale(error) as u16)?;
    writer.finish()
}

/// Freeze protection. The temperature field is always present and zero
/// when protection is disabled.
pub fn freeze_protection(protection: &FreezeProtection) -> Result<Frame> {
    let temperature = if protection.enable {
        scale(required("freeze_protection.temperature", protection.temperature)?)
    } else {
        0
    };

    let mut writer = FrameWriter::<5>::new(Opcode::FreezeProtection)?;
    writer.write_u8(u8::from(protection.enable))?;
    writer.write_i16_le(temperature as i16)?;
    writer.finish()
}

//! Per-setting command encoders.
//!
//! Each recognised request key maps to exactly one opcode and one fixed
//! payload layout. Encoders are grouped by what they configure:
//!
//! - [`device`] - reboot, status report, time sync, report interval, timezone, child lock
//! - [`temperature`] - calibration, control, target, freeze protection
//! - [`window`] - open window detection and its restore command
//! - [`valve`] - valve opening, calibration, control algorithm
//!
//! Trigger commands (`reboot`, `report_status`, ...) return `Option<Frame>`:
//! `false` asks for nothing and produces no frame. Settings carrying a value
//! return `Result<Frame>` and fail on out-of-range input.
//!
//! ## Usage
//!
//! ```rust
//! use wt101_codec::settings::{device, valve, ValveControlAlgorithm};
//!
//! let tz = device::timezone(8.0)?;
//! assert_eq!(tz.as_bytes(), &[0xFF, 0x17, 0x50, 0x00]);
//!
//! let algo = valve::valve_control_algorithm(ValveControlAlgorithm::from_name("pid")?);
//! assert_eq!(algo.as_bytes(), &[0xFF, 0xAC, 0x01]);
//! # Ok::<(), wt101_codec::EncodeError>(())
//! ```

use crate::error::{EncodeError, Result, ValueKind};

pub mod device;
pub mod temperature;
pub mod valve;
pub mod window;

// Re-export setting value types
#[doc(inline)]
pub use temperature::{ControlMode, FreezeProtection, TemperatureCalibration, TemperatureControl};
#[doc(inline)]
pub use valve::ValveControlAlgorithm;
#[doc(inline)]
pub use window::OpenWindowDetection;

/// Reject NaN and infinities
#[inline]
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EncodeError::not_finite(field))
    }
}

/// Check a number against inclusive integer bounds
#[inline]
pub(crate) fn in_range(field: &'static str, value: f64, (min, max): (i32, i32)) -> Result<f64> {
    let value = finite(field, value)?;
    if value < f64::from(min) || value > f64::from(max) {
        return Err(EncodeError::out_of_range(field, min, max));
    }
    Ok(value)
}

/// A number an enabled setting cannot do without
#[inline]
pub(crate) fn required(field: &'static str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or_else(|| EncodeError::missing_field(field, ValueKind::Number))?;
    finite(field, value)
}

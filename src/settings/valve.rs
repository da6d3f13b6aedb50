//! Valve commands.
//!
//! ```text
//! valve_opening            FF B4 <u8 percent>
//! valve_calibration        FF AD FF
//! valve_control_algorithm  FF AC <0 rate | 1 pid>
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{EncodeError, Result};
use crate::protocol::constants::{Opcode, VALVE_OPENING_RANGE};
use crate::protocol::frame::{command, trigger, truncate, Frame, FrameWriter};
use crate::settings::in_range;

/// Valve control algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ValveControlAlgorithm {
    /// Rate-based control
    Rate = 0,
    /// PID control
    Pid = 1,
}

impl ValveControlAlgorithm {
    /// Accepted names, indexed by wire value
    pub const NAMES: &'static [&'static str] = &["rate", "pid"];

    /// Parse an algorithm name. Unknown names are rejected.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rate" => Ok(Self::Rate),
            "pid" => Ok(Self::Pid),
            _ => Err(EncodeError::unknown_variant("valve_control_algorithm", Self::NAMES)),
        }
    }

    /// Algorithm name as accepted in requests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Pid => "pid",
        }
    }
}

impl FromStr for ValveControlAlgorithm {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ValveControlAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Manual valve opening, 0-100 %
pub fn valve_opening(percent: f64) -> Result<Frame> {
    let percent = in_range("valve_opening", percent, VALVE_OPENING_RANGE)?;

    let mut writer = FrameWriter::<3>::new(Opcode::ValveOpening)?;
    writer.write_u8(truncate(percent) as u8)?;
    writer.finish()
}

/// Run a valve calibration. `false` produces no frame.
pub fn valve_calibration(calibrate: bool) -> Option<Frame> {
    calibrate.then(|| trigger(Opcode::ValveCalibration))
}

/// Select the valve control algorithm
pub fn valve_control_algorithm(algorithm: ValveControlAlgorithm) -> Frame {
    command(Opcode::ValveControlAlgorithm, algorithm as u8)
}

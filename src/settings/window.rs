//! Open window detection.
//!
//! ```text
//! open_window_detection                 FF AF <0|1> <i8 °C/min×10> <u16 LE minutes>
//! restore_open_window_detection_status  FF 57 FF
//! ```

use crate::error::Result;
use crate::protocol::constants::Opcode;
use crate::protocol::frame::{scale, trigger, truncate, Frame, FrameWriter};
use crate::settings::required;

/// Open window detection parameters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenWindowDetection {
    /// Close the valve when a sudden temperature drop is detected
    pub enable: bool,
    /// Cooling rate that triggers detection, °C per minute. Required when enabled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rate: Option<f64>,
    /// How long the valve stays closed, minutes. Required when enabled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub time: Option<f64>,
}

impl OpenWindowDetection {
    /// Detection enabled
    pub const fn enabled(rate: f64, time: f64) -> Self {
        Self {
            enable: true,
            rate: Some(rate),
            time: Some(time),
        }
    }

    /// Detection disabled
    pub const fn disabled() -> Self {
        Self {
            enable: false,
            rate: None,
            time: None,
        }
    }
}

/// Open window detection. Rate and time are zero when disabled.
///
/// The rate byte is signed and holds tenths, so rates above 12.7 °C/min wrap.
pub fn open_window_detection(detection: &OpenWindowDetection) -> Result<Frame> {
    let (rate, time) = if detection.enable {
        let rate = required("open_window_detection.rate", detection.rate)?;
        let time = required("open_window_detection.time", detection.time)?;
        (scale(rate), truncate(time))
    } else {
        (0, 0)
    };

    let mut writer = FrameWriter::<6>::new(Opcode::OpenWindowDetection)?;
    writer.write_u8(u8::from(detection.enable))?;
    writer.write_i8(rate as i8)?;
    writer.write_u16_le(time as u16)?;
    writer.finish()
}

/// Leave the open-window state. `false` produces no frame.
pub fn restore_open_window_detection(restore: bool) -> Option<Frame> {
    restore.then(|| trigger(Opcode::RestoreOpenWindowDetection))
}

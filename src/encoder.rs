//! Request dispatch: settings in, downlink bytes out.
//!
//! Frames are emitted in a fixed order regardless of how the request was
//! built (see [`Opcode::ALL`](crate::protocol::Opcode::ALL)):
//!
//! ```text
//! reboot → report_status → sync_time → report_interval → timezone →
//! temperature_calibration → temperature_control.enable → temperature_control.mode →
//! temperature_target → open_window_detection → restore_open_window_detection_status →
//! valve_opening → valve_calibration → valve_control_algorithm → freeze_protection →
//! child_lock
//! ```
//!
//! The downlink is the plain concatenation of those frames, with no length
//! prefix or terminator. Any validation failure aborts the whole request.

use crate::error::{EncodeError, Result};
use crate::protocol::constants::{MAX_DOWNLINK_SIZE, MAX_FRAMES};
use crate::protocol::frame::Frame;
use crate::request::ConfigurationRequest;
use crate::settings::{device, temperature, valve, window};

/// Encoded downlink bytes
pub type Downlink = heapless::Vec<u8, MAX_DOWNLINK_SIZE>;

/// Individual frames of one request, in emission order
pub type Frames = heapless::Vec<Frame, MAX_FRAMES>;

#[inline]
fn push(frames: &mut Frames, frame: Frame) -> Result<()> {
    codec_log!(trace, "frame {} ({} bytes)", frame.opcode(), frame.len());
    if frames.push(frame).is_err() {
        return Err(EncodeError::downlink_full());
    }
    Ok(())
}

#[inline]
fn push_trigger(frames: &mut Frames, frame: Option<Frame>) -> Result<()> {
    match frame {
        Some(frame) => push(frames, frame),
        None => Ok(()),
    }
}

/// Encode every present setting into its own frame, in emission order.
pub fn frames(request: &ConfigurationRequest) -> Result<Frames> {
    let mut frames = Frames::new();

    if let Some(reboot) = request.reboot {
        push_trigger(&mut frames, device::reboot(reboot))?;
    }
    if let Some(report_status) = request.report_status {
        push_trigger(&mut frames, device::report_status(report_status))?;
    }
    if let Some(sync_time) = request.sync_time {
        push_trigger(&mut frames, device::sync_time(sync_time))?;
    }
    if let Some(minutes) = request.report_interval {
        push(&mut frames, device::report_interval(minutes)?)?;
    }
    if let Some(hours) = request.timezone {
        push(&mut frames, device::timezone(hours)?)?;
    }
    if let Some(calibration) = &request.temperature_calibration {
        push(&mut frames, temperature::temperature_calibration(calibration)?)?;
    }
    if let Some(control) = &request.temperature_control {
        if let Some(enable) = control.enable {
            push(&mut frames, temperature::temperature_control(enable))?;
        }
        if let Some(mode) = control.mode {
            push(&mut frames, temperature::temperature_control_mode(mode))?;
        }
    }
    if let Some(target) = request.temperature_target {
        push(
            &mut frames,
            temperature::temperature_target(target, request.temperature_error)?,
        )?;
    }
    if let Some(detection) = &request.open_window_detection {
        push(&mut frames, window::open_window_detection(detection)?)?;
    }
    if let Some(restore) = request.restore_open_window_detection_status {
        push_trigger(&mut frames, window::restore_open_window_detection(restore))?;
    }
    if let Some(percent) = request.valve_opening {
        push(&mut frames, valve::valve_opening(percent)?)?;
    }
    if let Some(calibrate) = request.valve_calibration {
        push_trigger(&mut frames, valve::valve_calibration(calibrate))?;
    }
    if let Some(algorithm) = request.valve_control_algorithm {
        push(&mut frames, valve::valve_control_algorithm(algorithm))?;
    }
    if let Some(protection) = &request.freeze_protection {
        push(&mut frames, temperature::freeze_protection(protection)?)?;
    }
    if let Some(child_lock) = request.child_lock {
        push(&mut frames, device::child_lock(child_lock))?;
    }

    Ok(frames)
}

/// Encode a request into one downlink byte sequence.
///
/// Absent settings contribute nothing; an empty request yields an empty
/// downlink. The request is only read.
///
/// # Example
///
/// ```rust
/// use wt101_codec::ConfigurationRequest;
///
/// let request = ConfigurationRequest::new().with_child_lock(true).with_reboot(true);
/// let downlink = wt101_codec::encode(&request)?;
/// assert_eq!(downlink.as_slice(), &[0xFF, 0x10, 0xFF, 0xFF, 0x25, 0x01]);
/// # Ok::<(), wt101_codec::EncodeError>(())
/// ```
pub fn encode(request: &ConfigurationRequest) -> Result<Downlink> {
    let frames = frames(request)?;

    let mut downlink = Downlink::new();
    for frame in &frames {
        if downlink.extend_from_slice(frame.as_bytes()).is_err() {
            return Err(EncodeError::downlink_full());
        }
    }

    codec_log!(debug, "encoded {} frames into {} bytes", frames.len(), downlink.len());
    Ok(downlink)
}

/// Encode a dynamic JSON mapping (the `data` object of a downlink request).
#[cfg(feature = "json")]
pub fn encode_json(value: &serde_json::Value) -> Result<Downlink> {
    encode(&ConfigurationRequest::from_json_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::Opcode;
    use crate::settings::{
        ControlMode, FreezeProtection, OpenWindowDetection, TemperatureCalibration,
        ValveControlAlgorithm,
    };

    fn everything() -> ConfigurationRequest {
        ConfigurationRequest::new()
            .with_child_lock(true)
            .with_freeze_protection(FreezeProtection::enabled(5.0))
            .with_valve_control_algorithm(ValveControlAlgorithm::Pid)
            .with_valve_calibration(true)
            .with_valve_opening(50.0)
            .with_restore_open_window_detection_status(true)
            .with_open_window_detection(OpenWindowDetection::enabled(2.0, 1.0))
            .with_temperature_target(10.0, 0.1)
            .with_temperature_control_mode(ControlMode::Manual)
            .with_temperature_control_enable(true)
            .with_temperature_calibration(TemperatureCalibration::enabled(5.0))
            .with_timezone(8.0)
            .with_report_interval(10.0)
            .with_sync_time(true)
            .with_report_status(true)
            .with_reboot(true)
    }

    #[test]
    fn test_empty_request() {
        let downlink = encode(&ConfigurationRequest::new()).unwrap();
        assert!(downlink.is_empty());
    }

    #[test]
    fn test_all_settings_in_fixed_order() {
        let frames = frames(&everything()).unwrap();
        let opcodes: Vec<Opcode> = frames.iter().map(Frame::opcode).collect();
        assert_eq!(opcodes, Opcode::ALL.to_vec());

        let downlink = encode(&everything()).unwrap();
        assert_eq!(downlink.len(), 60);
    }

    #[test]
    fn test_false_triggers_contribute_nothing() {
        let request = ConfigurationRequest::new()
            .with_reboot(false)
            .with_report_status(false)
            .with_sync_time(false)
            .with_restore_open_window_detection_status(false)
            .with_valve_calibration(false);
        assert!(encode(&request).unwrap().is_empty());
    }

    #[test]
    fn test_child_lock_false_still_emits() {
        let request = ConfigurationRequest::new().with_child_lock(false);
        assert_eq!(encode(&request).unwrap().as_slice(), &[0xFF, 0x25, 0x00]);
    }

    #[test]
    fn test_failure_aborts_whole_request() {
        let request = ConfigurationRequest::new().with_reboot(true).with_timezone(20.0);
        let err = encode(&request).unwrap_err();
        assert_eq!(err.field(), Some("timezone"));
    }

    #[test]
    fn test_error_without_target_is_ignored() {
        let request = ConfigurationRequest {
            temperature_error: Some(0.5),
            ..ConfigurationRequest::default()
        };
        assert!(encode(&request).unwrap().is_empty());
    }

    #[test]
    fn test_temperature_control_sub_keys_independent() {
        let request = ConfigurationRequest::new().with_temperature_control_mode(ControlMode::Auto);
        assert_eq!(encode(&request).unwrap().as_slice(), &[0xFF, 0xAE, 0x00]);

        let request = ConfigurationRequest::new()
            .with_temperature_control_mode(ControlMode::Manual)
            .with_temperature_control_enable(false);
        assert_eq!(
            encode(&request).unwrap().as_slice(),
            &[0xFF, 0xB3, 0x00, 0xFF, 0xAE, 0x01]
        );
    }
}

//! Device-level commands: reboot, status, time, reporting, child lock.
//!
//! ## Layouts
//!
//! ```text
//! reboot           FF 10 FF
//! report_status    FF 28 FF
//! sync_time        FF 3B 02
//! report_interval  FF 8E 00 <u16 LE minutes>
//! timezone         FF 17 <i16 LE hours×10>
//! child_lock       FF 25 <0|1>
//! ```

use crate::error::Result;
use crate::protocol::constants::{
    Opcode, REPORT_INTERVAL_RANGE, REPORT_INTERVAL_RESERVED, SYNC_TIME_PAYLOAD, TIMEZONE_RANGE,
};
use crate::protocol::frame::{command, scale, trigger, truncate, Frame, FrameWriter};
use crate::settings::in_range;

/// Restart the device. `false` produces no frame.
pub fn reboot(reboot: bool) -> Option<Frame> {
    reboot.then(|| trigger(Opcode::Reboot))
}

/// Ask the device for an immediate status report. `false` produces no frame.
pub fn report_status(report_status: bool) -> Option<Frame> {
    report_status.then(|| trigger(Opcode::ReportStatus))
}

/// Ask the device to resynchronise its clock. `false` produces no frame.
pub fn sync_time(sync_time: bool) -> Option<Frame> {
    sync_time.then(|| command(Opcode::SyncTime, SYNC_TIME_PAYLOAD))
}

/// Periodic report interval, 1-1440 minutes
pub fn report_interval(minutes: f64) -> Result<Frame> {
    let minutes = in_range("report_interval", minutes, REPORT_INTERVAL_RANGE)?;

    let mut writer = FrameWriter::<5>::new(Opcode::ReportInterval)?;
    writer.write_u8(REPORT_INTERVAL_RESERVED)?;
    writer.write_u16_le(truncate(minutes) as u16)?;
    writer.finish()
}

/// Timezone offset, -12 to +12 hours in tenths
pub fn timezone(hours: f64) -> Result<Frame> {
    let hours = in_range("timezone", hours, TIMEZONE_RANGE)?;

    let mut writer = FrameWriter::<4>::new(Opcode::Timezone)?;
    writer.write_i16_le(scale(hours) as i16)?;
    writer.finish()
}

/// Lock or unlock the device buttons
pub fn child_lock(enable: bool) -> Frame {
    command(Opcode::ChildLock, u8::from(enable))
}

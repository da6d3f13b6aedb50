//! WT101 downlink constants and command opcodes.

use core::fmt;

/// Marker byte that starts every command frame
pub const COMMAND_PREFIX: u8 = 0xFF;

/// Payload byte of argument-less trigger commands
pub const TRIGGER_PAYLOAD: u8 = 0xFF;

/// Payload byte of the sync-time command
pub const SYNC_TIME_PAYLOAD: u8 = 0x02;

/// Reserved byte preceding the report interval
pub const REPORT_INTERVAL_RESERVED: u8 = 0x00;

/// Multiplier for fields carrying one decimal digit
pub const FIXED_POINT_SCALE: f64 = 10.0;

/// Largest frame the device accepts (open window detection)
pub const MAX_FRAME_SIZE: usize = 6;

/// Capacity of a full downlink (all 16 settings come to 60 bytes)
pub const MAX_DOWNLINK_SIZE: usize = 64;

/// Number of distinct frames a single request can produce
pub const MAX_FRAMES: usize = 16;

// =============================================================================
// Validation Bounds (inclusive)
// =============================================================================

/// Timezone offset in hours
pub const TIMEZONE_RANGE: (i32, i32) = (-12, 12);

/// Report interval in minutes
pub const REPORT_INTERVAL_RANGE: (i32, i32) = (1, 1440);

/// Valve opening in percent
pub const VALVE_OPENING_RANGE: (i32, i32) = (0, 100);

// =============================================================================
// Opcodes
// =============================================================================

/// WT101 downlink command opcodes
///
/// Declaration order is the order frames are emitted in when a request
/// configures several settings at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Restart the device
    Reboot = 0x10,
    /// Request an immediate status report
    ReportStatus = 0x28,
    /// Request time synchronisation
    SyncTime = 0x3B,
    /// Periodic report interval
    ReportInterval = 0x8E,
    /// Timezone offset
    Timezone = 0x17,
    /// Temperature sensor calibration
    TemperatureCalibration = 0xAB,
    /// Temperature control on/off
    TemperatureControl = 0xB3,
    /// Temperature control mode (auto/manual)
    TemperatureControlMode = 0xAE,
    /// Target temperature and tolerance
    TemperatureTarget = 0xB1,
    /// Open window detection
    OpenWindowDetection = 0xAF,
    /// Leave the open-window state
    RestoreOpenWindowDetection = 0x57,
    /// Manual valve opening
    ValveOpening = 0xB4,
    /// Valve calibration
    ValveCalibration = 0xAD,
    /// Valve control algorithm
    ValveControlAlgorithm = 0xAC,
    /// Freeze protection
    FreezeProtection = 0xB0,
    /// Child lock
    ChildLock = 0x25,
}

impl Opcode {
    /// All opcodes in emission order
    pub const ALL: [Opcode; MAX_FRAMES] = [
        Opcode::Reboot,
        Opcode::ReportStatus,
        Opcode::SyncTime,
        Opcode::ReportInterval,
        Opcode::Timezone,
        Opcode::TemperatureCalibration,
        Opcode::TemperatureControl,
        Opcode::TemperatureControlMode,
        Opcode::TemperatureTarget,
        Opcode::OpenWindowDetection,
        Opcode::RestoreOpenWindowDetection,
        Opcode::ValveOpening,
        Opcode::ValveCalibration,
        Opcode::ValveControlAlgorithm,
        Opcode::FreezeProtection,
        Opcode::ChildLock,
    ];

    /// Convert from raw opcode byte
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x10 => Some(Self::Reboot),
            0x28 => Some(Self::ReportStatus),
            0x3B => Some(Self::SyncTime),
            0x8E => Some(Self::ReportInterval),
            0x17 => Some(Self::Timezone),
            0xAB => Some(Self::TemperatureCalibration),
            0xB3 => Some(Self::TemperatureControl),
            0xAE => Some(Self::TemperatureControlMode),
            0xB1 => Some(Self::TemperatureTarget),
            0xAF => Some(Self::OpenWindowDetection),
            0x57 => Some(Self::RestoreOpenWindowDetection),
            0xB4 => Some(Self::ValveOpening),
            0xAD => Some(Self::ValveCalibration),
            0xAC => Some(Self::ValveControlAlgorithm),
            0xB0 => Some(Self::FreezeProtection),
            0x25 => Some(Self::ChildLock),
            _ => None,
        }
    }

    /// Convert to raw opcode byte
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Request key that configures this opcode
    pub const fn key(self) -> &'static str {
        match self {
            Self::Reboot => "reboot",
            Self::ReportStatus => "report_status",
            Self::SyncTime => "sync_time",
            Self::ReportInterval => "report_interval",
            Self::Timezone => "timezone",
            Self::TemperatureCalibration => "temperature_calibration",
            Self::TemperatureControl => "temperature_control.enable",
            Self::TemperatureControlMode => "temperature_control.mode",
            Self::TemperatureTarget => "temperature_target",
            Self::OpenWindowDetection => "open_window_detection",
            Self::RestoreOpenWindowDetection => "restore_open_window_detection_status",
            Self::ValveOpening => "valve_opening",
            Self::ValveCalibration => "valve_calibration",
            Self::ValveControlAlgorithm => "valve_control_algorithm",
            Self::FreezeProtection => "freeze_protection",
            Self::ChildLock => "child_lock",
        }
    }

    /// Total frame length (prefix + opcode + payload)
    ///
    /// A disabled temperature calibration is the one short form: it drops the
    /// temperature field and is 3 bytes instead of the 5 given here.
    pub const fn frame_len(self) -> usize {
        match self {
            Self::Reboot
            | Self::ReportStatus
            | Self::SyncTime
            | Self::TemperatureControl
            | Self::TemperatureControlMode
            | Self::RestoreOpenWindowDetection
            | Self::ValveOpening
            | Self::ValveCalibration
            | Self::ValveControlAlgorithm
            | Self::ChildLock => 3,
            Self::Timezone => 4,
            Self::ReportInterval
            | Self::TemperatureCalibration
            | Self::TemperatureTarget
            | Self::FreezeProtection => 5,
            Self::OpenWindowDetection => 6,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.key(), self.to_u8())
    }
}

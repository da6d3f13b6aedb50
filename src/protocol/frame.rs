//! Command frame layout and the little-endian frame writer.
//!
//! Every downlink command is one fixed-length frame:
//!
//! ```text
//! ┌──────────┬──────────┬──────────────────────────────┐
//! │  0xFF    │  Opcode  │  Payload (1-4 bytes, LE)     │
//! │ (1 byte) │ (1 byte) │  fixed width per opcode      │
//! └──────────┴──────────┴──────────────────────────────┘
//! ```
//!
//! Frames carry no length field. A decoder splits a downlink by knowing each
//! opcode's payload width.
//!
//! ## Example
//!
//! ```rust
//! use wt101_codec::protocol::{FrameWriter, Opcode};
//!
//! let mut writer = FrameWriter::<4>::new(Opcode::Timezone)?;
//! writer.write_i16_le(-40)?;
//! let frame = writer.finish()?;
//! assert_eq!(frame.as_bytes(), &[0xFF, 0x17, 0xD8, 0xFF]);
//! # Ok::<(), wt101_codec::EncodeError>(())
//! ```

use crate::error::{EncodeError, Result};
use crate::protocol::constants::{Opcode, COMMAND_PREFIX, FIXED_POINT_SCALE, MAX_FRAME_SIZE, TRIGGER_PAYLOAD};

/// Size of the frame header (prefix + opcode)
pub const HEADER_SIZE: usize = 2;

/// One encoded command frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    opcode: Opcode,
    bytes: heapless::Vec<u8, MAX_FRAME_SIZE>,
}

impl Frame {
    fn from_slice(opcode: Opcode, data: &[u8]) -> Result<Self> {
        let Ok(bytes) = heapless::Vec::from_slice(data) else {
            return Err(EncodeError::frame_overflow());
        };
        Ok(Self { opcode, bytes })
    }

    /// Opcode this frame configures
    #[inline]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The raw frame bytes, header included
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload bytes after prefix and opcode
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Frame length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: frames hold at least the header
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Build a 3-byte command with a single payload byte: `[0xFF, opcode, payload]`
pub fn command(opcode: Opcode, payload: u8) -> Frame {
    Frame {
        opcode,
        bytes: heapless::Vec::from_iter([COMMAND_PREFIX, opcode.to_u8(), payload]),
    }
}

/// Build an argument-less trigger frame: `[0xFF, opcode, 0xFF]`
pub fn trigger(opcode: Opcode) -> Frame {
    command(opcode, TRIGGER_PAYLOAD)
}

/// Fixed-size frame writer with an advancing cursor.
///
/// `N` is the exact frame length; the header is written by [`FrameWriter::new`].
/// Fields are little-endian. Signed fields are reinterpreted as their two's
/// complement bit pattern and go through the same splitter as unsigned ones.
#[derive(Debug)]
pub struct FrameWriter<const N: usize> {
    opcode: Opcode,
    buffer: [u8; N],
    offset: usize,
}

impl<const N: usize> FrameWriter<N> {
    /// Start a frame for `opcode`, writing the prefix and opcode bytes
    pub fn new(opcode: Opcode) -> Result<Self> {
        let mut writer = Self {
            opcode,
            buffer: [0u8; N],
            offset: 0,
        };
        writer.write_u8(COMMAND_PREFIX)?;
        writer.write_u8(opcode.to_u8())?;
        Ok(writer)
    }

    /// Bytes left before the frame is complete
    #[inline]
    pub const fn remaining(&self) -> usize {
        N - self.offset
    }

    #[inline]
    fn write_le(&mut self, value: u32, width: usize) -> Result<()> {
        let end = self.offset + width;
        if end > N {
            return Err(EncodeError::frame_overflow());
        }
        for (index, byte) in self.buffer[self.offset..end].iter_mut().enumerate() {
            *byte = (value >> (index * 8)) as u8;
        }
        self.offset = end;
        Ok(())
    }

    /// Write an unsigned 8-bit field
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_le(u32::from(value), 1)
    }

    /// Write a signed 8-bit field
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_le(u32::from(value as u8), 1)
    }

    /// Write an unsigned 16-bit little-endian field
    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.write_le(u32::from(value), 2)
    }

    /// Write a signed 16-bit little-endian field
    pub fn write_i16_le(&mut self, value: i16) -> Result<()> {
        self.write_le(u32::from(value as u16), 2)
    }

    /// Write an unsigned 32-bit little-endian field
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.write_le(value, 4)
    }

    /// Write a signed 32-bit little-endian field
    pub fn write_i32_le(&mut self, value: i32) -> Result<()> {
        self.write_le(value as u32, 4)
    }

    /// Complete the frame. Fails unless exactly `N` bytes were written.
    pub fn finish(self) -> Result<Frame> {
        if self.offset != N {
            return Err(EncodeError::frame_incomplete());
        }
        Frame::from_slice(self.opcode, &self.buffer)
    }
}

/// Truncate toward zero (NaN becomes 0). Callers narrow the result to the
/// field width, which wraps like a two's complement store.
#[inline]
pub fn truncate(value: f64) -> i64 {
    value as i64
}

/// Fixed-point ×10: keep one decimal digit, truncate the rest
#[inline]
pub fn scale(value: f64) -> i64 {
    truncate(value * FIXED_POINT_SCALE)
}

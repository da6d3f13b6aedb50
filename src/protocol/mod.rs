//! WT101 downlink protocol layer.
//!
//! - [`constants`] - Opcodes, marker bytes, validation bounds
//! - [`frame`] - Frame type and the little-endian frame writer

pub mod constants;
pub mod frame;

// Re-export commonly used types
#[doc(inline)]
pub use constants::Opcode;
#[doc(inline)]
pub use frame::{Frame, FrameWriter};

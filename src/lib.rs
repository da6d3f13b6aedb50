#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # wt101-codec
//!
//! Downlink command encoder for the WT101 thermostatic radiator valve.
//!
//! A [`ConfigurationRequest`] names the settings to change; [`encode`] turns
//! every present setting into one fixed-length command frame
//! (`0xFF, opcode, payload...`) and concatenates the frames in a fixed order.
//!
//! ## Features
//!
//! - `no_std`, allocation-free (`heapless` buffers)
//! - Typed request with one optional field per setting
//! - Structured errors naming the offending field
//! - Optional JSON front end for untyped requests (`json`, on by default)
//! - Logging through `log` or `defmt`
//!
//! ## Example
//!
//! ```rust
//! use wt101_codec::{encode, ConfigurationRequest};
//!
//! let request = ConfigurationRequest::new().with_timezone(-4.0);
//! assert_eq!(encode(&request)?.as_slice(), &[0xFF, 0x17, 0xD8, 0xFF]);
//! # Ok::<(), wt101_codec::EncodeError>(())
//! ```

// Macro modules (must be declared before use)
#[macro_use]
mod logging;

pub mod encoder;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod protocol;
pub mod request;
pub mod settings;

// Re-export commonly used types
#[doc(inline)]
pub use encoder::{encode, frames, Downlink, Frames};
#[cfg(feature = "json")]
#[doc(inline)]
pub use encoder::encode_json;
#[doc(inline)]
pub use error::{EncodeError, Result};
#[doc(inline)]
pub use protocol::{Frame, Opcode};
#[doc(inline)]
pub use request::ConfigurationRequest;

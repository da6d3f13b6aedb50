//! Unified logging macro for the encoder
//!
//! Selects the backend from the active feature flags:
//!
//! - `log` - Uses the `log` crate (host-side network servers, integrations)
//! - `defmt` - Uses `defmt::` (firmware builds)
//! - neither - Compiles to nothing; arguments are still type-checked
//!
//! # Usage
//!
//! ```rust,ignore
//! codec_log!(debug, "Encoded {} frames", count);
//! codec_log!(trace, "Frame {} ({} bytes)", opcode, len);
//! codec_log!(warn, "Unknown mode treated as manual");
//! ```

#[cfg(feature = "log")]
macro_rules! codec_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! codec_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! codec_log {
    ($level:ident, $($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}

//! Error types for downlink encoding following M-ERRORS-CANONICAL-STRUCTS guideline.
//!
//! Every failure names the offending request field (dotted path, e.g.
//! `temperature_calibration.enable`) and the violated constraint. Errors carry a
//! backtrace when the `std` feature is enabled.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for encoding operations.
pub type Result<T> = core::result::Result<T, EncodeError>;

/// Shape of a request value, as seen by the type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    /// `true` / `false`
    Boolean,
    /// Any JSON-style number
    Number,
    /// A string
    String,
    /// A nested mapping with sub-keys
    Object,
}

impl ValueKind {
    /// Article + name, as used in error messages ("a boolean").
    pub const fn describe(self) -> &'static str {
        match self {
            ValueKind::Boolean => "a boolean",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::Object => "an object",
        }
    }
}

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Type error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeErrorKind {
    /// Value present with the wrong shape
    Mismatch,
    /// Value required by an enabled setting but absent
    Missing,
}

/// Range error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeErrorKind {
    OutOfBounds { min: i32, max: i32 },
    UnknownVariant { allowed: &'static [&'static str] },
    NotFinite,
}

/// Frame writer variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameErrorKind {
    Overflow,
    Incomplete,
    DownlinkFull,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Downlink encoding error.
///
/// Any error aborts the whole encode call; no partial downlink is returned.
#[derive(Debug)]
pub enum EncodeError {
    /// A value has the wrong type, or a required value is missing
    Type(TypeError),
    /// A value has the right type but violates its bound or enumeration
    Range(RangeError),
    /// Internal frame layout failure (a writer was sized wrong)
    Frame(FrameError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Type error with optional backtrace
#[derive(Debug)]
pub struct TypeError {
    field: &'static str,
    expected: ValueKind,
    kind: TypeErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl TypeError {
    pub(crate) fn new(field: &'static str, expected: ValueKind, kind: TypeErrorKind) -> Self {
        Self {
            field,
            expected,
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Dotted name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The value shape the field requires
    pub fn expected(&self) -> ValueKind {
        self.expected
    }

    /// Check if the field was absent rather than mistyped
    pub fn is_missing(&self) -> bool {
        matches!(self.kind, TypeErrorKind::Missing)
    }

    /// Backtrace captured where the error was raised
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// Range error with optional backtrace
#[derive(Debug)]
pub struct RangeError {
    field: &'static str,
    kind: RangeErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl RangeError {
    pub(crate) fn new(field: &'static str, kind: RangeErrorKind) -> Self {
        Self {
            field,
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Dotted name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Inclusive bounds that were violated, if this is a bounds error
    pub fn bounds(&self) -> Option<(i32, i32)> {
        match self.kind {
            RangeErrorKind::OutOfBounds { min, max } => Some((min, max)),
            _ => None,
        }
    }

    /// Check if a number fell outside its bounds
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, RangeErrorKind::OutOfBounds { .. })
    }

    /// Check if a string did not name an accepted variant
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self.kind, RangeErrorKind::UnknownVariant { .. })
    }

    /// Check if a number was NaN or infinite
    pub fn is_not_finite(&self) -> bool {
        matches!(self.kind, RangeErrorKind::NotFinite)
    }

    /// Backtrace captured where the error was raised
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// Frame writer error with optional backtrace
#[derive(Debug)]
pub struct FrameError {
    kind: FrameErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl FrameError {
    pub(crate) fn new(kind: FrameErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a write ran past the end of the frame buffer
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, FrameErrorKind::Overflow)
    }

    /// Backtrace captured where the error was raised
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

// =============================================================================
// Convenience Constructors for EncodeError
// =============================================================================

impl EncodeError {
    // Type errors
    #[cfg_attr(
        not(feature = "json"),
        allow(dead_code, reason = "Only the JSON front end sees untyped values")
    )]
    pub(crate) fn type_mismatch(field: &'static str, expected: ValueKind) -> Self {
        Self::Type(TypeError::new(field, expected, TypeErrorKind::Mismatch))
    }

    pub(crate) fn missing_field(field: &'static str, expected: ValueKind) -> Self {
        Self::Type(TypeError::new(field, expected, TypeErrorKind::Missing))
    }

    // Range errors
    pub(crate) fn out_of_range(field: &'static str, min: i32, max: i32) -> Self {
        Self::Range(RangeError::new(field, RangeErrorKind::OutOfBounds { min, max }))
    }

    pub(crate) fn unknown_variant(field: &'static str, allowed: &'static [&'static str]) -> Self {
        Self::Range(RangeError::new(field, RangeErrorKind::UnknownVariant { allowed }))
    }

    pub(crate) fn not_finite(field: &'static str) -> Self {
        Self::Range(RangeError::new(field, RangeErrorKind::NotFinite))
    }

    // Frame errors
    pub(crate) fn frame_overflow() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::Overflow))
    }

    pub(crate) fn frame_incomplete() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::Incomplete))
    }

    pub(crate) fn downlink_full() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::DownlinkFull))
    }

    /// Dotted name of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EncodeError::Type(e) => Some(e.field),
            EncodeError::Range(e) => Some(e.field),
            EncodeError::Frame(_) => None,
        }
    }

    /// Check if this is a type error (wrong shape or missing)
    pub fn is_type_error(&self) -> bool {
        matches!(self, EncodeError::Type(_))
    }

    /// Check if this is a range error (bounds, enumeration, non-finite)
    pub fn is_range_error(&self) -> bool {
        matches!(self, EncodeError::Range(_))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Type(e) => match e.kind {
                TypeErrorKind::Mismatch => {
                    write!(f, "{} must be {}", e.field, e.expected.describe())
                }
                TypeErrorKind::Missing => {
                    write!(f, "{} is required and must be {}", e.field, e.expected.describe())
                }
            },
            EncodeError::Range(e) => match e.kind {
                RangeErrorKind::OutOfBounds { min, max } => {
                    write!(f, "{} must be between {} and {}", e.field, min, max)
                }
                RangeErrorKind::UnknownVariant { allowed } => {
                    write!(f, "{} must be one of ", e.field)?;
                    for (i, name) in allowed.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        f.write_str(name)?;
                    }
                    Ok(())
                }
                RangeErrorKind::NotFinite => write!(f, "{} must be a finite number", e.field),
            },
            EncodeError::Frame(e) => write!(f, "Frame error: {:?}", e.kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for EncodeError {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            EncodeError::Type(e) if e.is_missing() => {
                defmt::write!(f, "{} is required and must be {}", e.field, e.expected);
            }
            EncodeError::Type(e) => defmt::write!(f, "{} must be {}", e.field, e.expected),
            EncodeError::Range(e) => match e.kind {
                RangeErrorKind::OutOfBounds { min, max } => {
                    defmt::write!(f, "{} must be between {} and {}", e.field, min, max);
                }
                RangeErrorKind::UnknownVariant { .. } => {
                    defmt::write!(f, "{} is not an accepted value", e.field);
                }
                RangeErrorKind::NotFinite => defmt::write!(f, "{} must be a finite number", e.field),
            },
            EncodeError::Frame(e) => defmt::write!(f, "frame error (overflow={})", e.is_overflow()),
        }
    }
}

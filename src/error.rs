//! Error types for the float codec
//!
//! Every failed conversion is a value of [`Error`]. Each variant exposes a stable,
//! machine-matchable [`identifier`](Error::identifier) and a human-readable
//! [`reason`](Error::reason) naming the target type and the offending input.

use thiserror::Error;

use crate::constants::WireTag;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Identifier shared by every float conversion failure
pub const BINARY_FLOATING_POINT: &str = "binaryFloatingPoint";

/// Identifier for transcoder length failures
pub const INVALID_LENGTH: &str = "invalidLength";

/// Identifier for temporal codec failures
pub const TEMPORAL: &str = "temporal";

/// Main error type for the codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    // =========================================================================
    // Conversion Errors
    // =========================================================================
    /// The source wire tag cannot be converted to the target float type
    #[error("Could not decode {target} from binary data type: {tag}.")]
    UnsupportedTag {
        /// Target type name (`f32` or `f64`)
        target: &'static str,
        /// Source tag of the binary payload
        tag: WireTag,
    },

    /// The payload length does not match the width implied by its tag.
    ///
    /// Rendered exactly like [`Error::UnsupportedTag`].
    #[error("Could not decode {target} from binary data type: {tag}.")]
    LengthMismatch {
        /// Target type name (`f32` or `f64`)
        target: &'static str,
        /// Source tag of the binary payload
        tag: WireTag,
        /// Byte count required by the tag
        expected: usize,
        /// Byte count actually received
        actual: usize,
    },

    /// A text payload is not a floating-point literal
    #[error("Could not decode {target} from string: {text}.")]
    MalformedText {
        /// Target type name (`f32` or `f64`)
        target: &'static str,
        /// The offending text, unmodified
        text: String,
    },

    /// A NULL wire value was decoded into a non-optional float
    #[error("Could not decode {target} from `null` data.")]
    UnexpectedNull {
        /// Target type name (`f32` or `f64`)
        target: &'static str,
    },

    // =========================================================================
    // Lower-level Errors
    // =========================================================================
    /// Fixed-width scalar read with the wrong number of bytes
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The temporal codec rejected a payload
    #[error("could not decode {tag}: {message}")]
    Temporal { tag: WireTag, message: String },
}

impl Error {
    /// Create a temporal codec error
    pub fn temporal(tag: WireTag, message: impl Into<String>) -> Self {
        Error::Temporal {
            tag,
            message: message.into(),
        }
    }

    /// Stable identifier for this failure
    pub fn identifier(&self) -> &'static str {
        match self {
            Error::UnsupportedTag { .. }
            | Error::LengthMismatch { .. }
            | Error::MalformedText { .. }
            | Error::UnexpectedNull { .. } => BINARY_FLOATING_POINT,
            Error::InvalidLength { .. } => INVALID_LENGTH,
            Error::Temporal { .. } => TEMPORAL,
        }
    }

    /// Human-readable reason
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Name of the float type that was being decoded, if any
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Error::UnsupportedTag { target, .. }
            | Error::LengthMismatch { target, .. }
            | Error::MalformedText { target, .. }
            | Error::UnexpectedNull { target } => Some(*target),
            Error::InvalidLength { .. } | Error::Temporal { .. } => None,
        }
    }

    /// Check if this error came from a NULL source value
    pub fn is_null(&self) -> bool {
        matches!(self, Error::UnexpectedNull { .. })
    }

    /// Check if this error is reported as an unsupported source tag.
    ///
    /// Length mismatches count as unsupported tags.
    pub fn is_unsupported_tag(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedTag { .. } | Error::LengthMismatch { .. }
        )
    }
}

//! Tagged wire values
//!
//! A [`WireValue`] is what the transport hands to the codec for one column or bind
//! parameter: binary bytes with their source type tag, a text-format string, or NULL.

use bytes::Bytes;

use crate::constants::WireTag;

/// Transmission format code of a non-null value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum WireFormat {
    /// Text format (code 0)
    Text = 0,
    /// Binary format (code 1)
    Binary = 1,
}

/// A single value as carried on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Binary payload tagged with its source type
    Binary {
        /// Source type of the payload
        tag: WireTag,
        /// Raw payload bytes, big-endian for numeric types
        data: Bytes,
    },
    /// Text-format payload
    Text(String),
    /// SQL NULL
    Null,
}

impl WireValue {
    /// Create a binary value
    pub fn binary(tag: WireTag, data: impl Into<Bytes>) -> Self {
        WireValue::Binary {
            tag,
            data: data.into(),
        }
    }

    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        WireValue::Text(value.into())
    }

    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    /// Source tag, for binary values
    pub fn tag(&self) -> Option<WireTag> {
        match self {
            WireValue::Binary { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Format code, or `None` for NULL
    pub fn format(&self) -> Option<WireFormat> {
        match self {
            WireValue::Binary { .. } => Some(WireFormat::Binary),
            WireValue::Text(_) => Some(WireFormat::Text),
            WireValue::Null => None,
        }
    }

    /// Try to get the binary payload
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            WireValue::Binary { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Try to get the text payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

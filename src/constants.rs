//! Wire protocol constants
//!
//! Type tags carried alongside binary payloads, their PostgreSQL type OIDs, and the
//! set of float widths this crate can convert.

use std::fmt;

// =============================================================================
// Type OIDs
// =============================================================================

/// PostgreSQL type OIDs (`pg_type.oid`) for the tags this crate knows about
#[allow(missing_docs)]
pub mod oid {
    pub const BOOL: u32 = 16;
    pub const CHAR: u32 = 18;
    pub const INT8: u32 = 20;
    pub const INT2: u32 = 21;
    pub const INT4: u32 = 23;
    pub const TEXT: u32 = 25;
    pub const FLOAT4: u32 = 700;
    pub const FLOAT8: u32 = 701;
    pub const ARRAY_FLOAT4: u32 = 1021;
    pub const ARRAY_FLOAT8: u32 = 1022;
    pub const VARCHAR: u32 = 1043;
    pub const DATE: u32 = 1082;
    pub const TIME: u32 = 1083;
    pub const TIMESTAMP: u32 = 1114;
    pub const TIMESTAMPTZ: u32 = 1184;
    pub const NUMERIC: u32 = 1700;
}

// =============================================================================
// Wire Tags
// =============================================================================

/// Data type tag accompanying a binary wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireTag {
    /// `bool`
    Bool,
    /// `"char"`, a single signed byte
    Char,
    /// `int8` / `bigint`
    Int8,
    /// `int2` / `smallint`
    Int2,
    /// `int4` / `integer`
    Int4,
    /// `text`
    Text,
    /// `float4` / `real`
    Float4,
    /// `float8` / `double precision`
    Float8,
    /// `float4[]`
    ArrayFloat4,
    /// `float8[]`
    ArrayFloat8,
    /// `varchar`
    Varchar,
    /// `date`
    Date,
    /// `time` (without time zone)
    Time,
    /// `timestamp` (without time zone)
    Timestamp,
    /// `timestamptz`
    Timestamptz,
    /// `numeric`
    Numeric,
    /// Any other type, by OID
    Other(u32),
}

impl WireTag {
    /// Map a type OID to its tag. Unknown OIDs land in [`WireTag::Other`].
    pub fn from_oid(value: u32) -> Self {
        match value {
            oid::BOOL => WireTag::Bool,
            oid::CHAR => WireTag::Char,
            oid::INT8 => WireTag::Int8,
            oid::INT2 => WireTag::Int2,
            oid::INT4 => WireTag::Int4,
            oid::TEXT => WireTag::Text,
            oid::FLOAT4 => WireTag::Float4,
            oid::FLOAT8 => WireTag::Float8,
            oid::ARRAY_FLOAT4 => WireTag::ArrayFloat4,
            oid::ARRAY_FLOAT8 => WireTag::ArrayFloat8,
            oid::VARCHAR => WireTag::Varchar,
            oid::DATE => WireTag::Date,
            oid::TIME => WireTag::Time,
            oid::TIMESTAMP => WireTag::Timestamp,
            oid::TIMESTAMPTZ => WireTag::Timestamptz,
            oid::NUMERIC => WireTag::Numeric,
            other => WireTag::Other(other),
        }
    }

    /// The type OID of this tag
    pub fn oid(&self) -> u32 {
        match self {
            WireTag::Bool => oid::BOOL,
            WireTag::Char => oid::CHAR,
            WireTag::Int8 => oid::INT8,
            WireTag::Int2 => oid::INT2,
            WireTag::Int4 => oid::INT4,
            WireTag::Text => oid::TEXT,
            WireTag::Float4 => oid::FLOAT4,
            WireTag::Float8 => oid::FLOAT8,
            WireTag::ArrayFloat4 => oid::ARRAY_FLOAT4,
            WireTag::ArrayFloat8 => oid::ARRAY_FLOAT8,
            WireTag::Varchar => oid::VARCHAR,
            WireTag::Date => oid::DATE,
            WireTag::Time => oid::TIME,
            WireTag::Timestamp => oid::TIMESTAMP,
            WireTag::Timestamptz => oid::TIMESTAMPTZ,
            WireTag::Numeric => oid::NUMERIC,
            WireTag::Other(value) => *value,
        }
    }

    /// Type name as it appears in the catalog
    pub fn name(&self) -> &'static str {
        match self {
            WireTag::Bool => "bool",
            WireTag::Char => "char",
            WireTag::Int8 => "int8",
            WireTag::Int2 => "int2",
            WireTag::Int4 => "int4",
            WireTag::Text => "text",
            WireTag::Float4 => "float4",
            WireTag::Float8 => "float8",
            WireTag::ArrayFloat4 => "_float4",
            WireTag::ArrayFloat8 => "_float8",
            WireTag::Varchar => "varchar",
            WireTag::Date => "date",
            WireTag::Time => "time",
            WireTag::Timestamp => "timestamp",
            WireTag::Timestamptz => "timestamptz",
            WireTag::Numeric => "numeric",
            WireTag::Other(_) => "unknown",
        }
    }

    /// Byte length of the binary representation for fixed-width types
    pub fn fixed_len(&self) -> Option<usize> {
        match self {
            WireTag::Bool | WireTag::Char => Some(1),
            WireTag::Int2 => Some(2),
            WireTag::Int4 | WireTag::Float4 | WireTag::Date => Some(4),
            WireTag::Int8
            | WireTag::Float8
            | WireTag::Time
            | WireTag::Timestamp
            | WireTag::Timestamptz => Some(8),
            _ => None,
        }
    }

    /// Check if this tag is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, WireTag::ArrayFloat4 | WireTag::ArrayFloat8)
    }
}

impl From<u32> for WireTag {
    fn from(value: u32) -> Self {
        WireTag::from_oid(value)
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireTag::Other(value) => write!(f, "oid {}", value),
            tag => f.write_str(tag.name()),
        }
    }
}

// =============================================================================
// Float Widths
// =============================================================================

/// Bit widths of the float types the codec can convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// IEEE-754 single precision
    Bits32,
    /// IEEE-754 double precision
    Bits64,
}

impl FloatWidth {
    /// Validate a bit width reported by a foreign type description
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(FloatWidth::Bits32),
            64 => Some(FloatWidth::Bits64),
            _ => None,
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::Bits32 => 32,
            FloatWidth::Bits64 => 64,
        }
    }

    /// Number of bytes on the wire
    pub const fn byte_len(self) -> usize {
        match self {
            FloatWidth::Bits32 => 4,
            FloatWidth::Bits64 => 8,
        }
    }

    /// Tag used to send and validate scalar values of this width
    pub const fn scalar_tag(self) -> WireTag {
        match self {
            FloatWidth::Bits32 => WireTag::Float4,
            FloatWidth::Bits64 => WireTag::Float8,
        }
    }

    /// Tag used when values of this width are array elements
    pub const fn array_tag(self) -> WireTag {
        match self {
            FloatWidth::Bits32 => WireTag::ArrayFloat4,
            FloatWidth::Bits64 => WireTag::ArrayFloat8,
        }
    }
}

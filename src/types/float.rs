//! Float conversions between host values and wire values
//!
//! Decoding into `f32` or `f64` accepts more than the matching float tag:
//!
//! | Source | Conversion |
//! |--------|------------|
//! | `float4`, `float8` | reinterpret, then widen or narrow |
//! | `char`, `int2`, `int4`, `int8` | signed integer, then `as` conversion |
//! | `timestamp`, `date`, `time` | seconds since 2001-01-01 via [`TemporalCodec`] |
//! | text | parsed as `f64`, then narrowed |
//! | NULL | always an error |
//!
//! Encoding always produces the tag for the value's own width.

use bytes::BytesMut;

use crate::constants::{FloatWidth, WireTag};
use crate::error::{Error, Result};
use crate::types::binary::{
    decode_char, decode_float4, decode_float8, decode_int2, decode_int4, decode_int8,
    put_float4, put_float8, to_wire_bytes,
};
use crate::types::temporal::{PgTemporalCodec, TemporalCodec};
use crate::value::WireValue;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Float types the codec can convert. Implemented for `f32` and `f64` only.
pub trait BinaryFloat:
    private::Sealed + Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// Bit width of the type
    const WIDTH: FloatWidth;

    /// Name used in error messages
    const TYPE_NAME: &'static str;

    /// Convert from `f32`, widening or narrowing as needed
    fn from_f32(value: f32) -> Self;

    /// Convert from `f64`, rounding to nearest when narrowing
    fn from_f64(value: f64) -> Self;

    /// Convert from a signed integer, rounding to nearest
    fn from_i64(value: i64) -> Self;

    /// Read from exactly `WIDTH.byte_len()` big-endian bytes
    fn from_be_slice(data: &[u8]) -> Result<Self>;

    /// Append big-endian bytes
    fn put_be(self, buf: &mut BytesMut);
}

impl BinaryFloat for f32 {
    const WIDTH: FloatWidth = FloatWidth::Bits32;
    const TYPE_NAME: &'static str = "f32";

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_i64(value: i64) -> Self {
        value as f32
    }

    fn from_be_slice(data: &[u8]) -> Result<Self> {
        decode_float4(data)
    }

    fn put_be(self, buf: &mut BytesMut) {
        put_float4(buf, self);
    }
}

impl BinaryFloat for f64 {
    const WIDTH: FloatWidth = FloatWidth::Bits64;
    const TYPE_NAME: &'static str = "f64";

    #[inline]
    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn from_be_slice(data: &[u8]) -> Result<Self> {
        decode_float8(data)
    }

    fn put_be(self, buf: &mut BytesMut) {
        put_float8(buf, self);
    }
}

/// Wire tags a host type is sent with
pub trait WireType {
    /// Tag for scalar values
    const WIRE_TAG: WireTag;

    /// Tag for arrays whose elements are this type
    const ARRAY_WIRE_TAG: WireTag;
}

impl<F: BinaryFloat> WireType for F {
    const WIRE_TAG: WireTag = F::WIDTH.scalar_tag();
    const ARRAY_WIRE_TAG: WireTag = F::WIDTH.array_tag();
}

/// Types that can be decoded from a [`WireValue`]
pub trait FromWireValue: Sized {
    /// Decode using [`PgTemporalCodec`] for temporal sources
    fn from_wire_value(value: &WireValue) -> Result<Self> {
        Self::from_wire_value_with(value, &PgTemporalCodec)
    }

    /// Decode using the given temporal codec for temporal sources
    fn from_wire_value_with(value: &WireValue, temporal: &dyn TemporalCodec) -> Result<Self>;
}

/// Types that can be encoded as a [`WireValue`]
pub trait ToWireValue {
    /// Encode this value
    fn to_wire_value(&self) -> WireValue;
}

impl<F: BinaryFloat> FromWireValue for F {
    fn from_wire_value_with(value: &WireValue, temporal: &dyn TemporalCodec) -> Result<Self> {
        decode_float(value, temporal)
    }
}

impl<F: BinaryFloat> ToWireValue for F {
    fn to_wire_value(&self) -> WireValue {
        encode_float(*self)
    }
}

/// Decode a wire value into a float of type `F`
pub fn decode_float<F: BinaryFloat>(value: &WireValue, temporal: &dyn TemporalCodec) -> Result<F> {
    match value {
        WireValue::Binary { tag, data } => decode_binary(*tag, data, temporal),
        WireValue::Text(text) => decode_text(text),
        WireValue::Null => Err(Error::UnexpectedNull {
            target: F::TYPE_NAME,
        }),
    }
}

/// Encode a float as a binary wire value tagged with its own width
pub fn encode_float<F: BinaryFloat>(value: F) -> WireValue {
    WireValue::Binary {
        tag: F::WIDTH.scalar_tag(),
        data: to_wire_bytes(value),
    }
}

fn decode_binary<F: BinaryFloat>(
    tag: WireTag,
    data: &[u8],
    temporal: &dyn TemporalCodec,
) -> Result<F> {
    let scalar = match tag {
        WireTag::Float4 => decode_float4(data).map(F::from_f32),
        WireTag::Float8 => decode_float8(data).map(F::from_f64),
        WireTag::Char => decode_char(data).map(|v| F::from_i64(v.into())),
        WireTag::Int2 => decode_int2(data).map(|v| F::from_i64(v.into())),
        WireTag::Int4 => decode_int4(data).map(|v| F::from_i64(v.into())),
        WireTag::Int8 => decode_int8(data).map(F::from_i64),
        WireTag::Timestamp | WireTag::Date | WireTag::Time => {
            tracing::trace!(float_type = F::TYPE_NAME, tag = %tag, "Decoding temporal value as seconds");
            let point = temporal.decode(tag, data)?;
            return Ok(F::from_f64(point.seconds_since_reference()));
        }
        _ => {
            return Err(Error::UnsupportedTag {
                target: F::TYPE_NAME,
                tag,
            })
        }
    };

    scalar.map_err(|err| match err {
        Error::InvalidLength { expected, actual } => Error::LengthMismatch {
            target: F::TYPE_NAME,
            tag,
            expected,
            actual,
        },
        other => other,
    })
}

fn decode_text<F: BinaryFloat>(text: &str) -> Result<F> {
    tracing::trace!(float_type = F::TYPE_NAME, len = text.len(), "Parsing text-format float");
    text.parse::<f64>()
        .map(F::from_f64)
        .map_err(|_| Error::MalformedText {
            target: F::TYPE_NAME,
            text: text.to_string(),
        })
}

//! Fixed-width scalar encoding and decoding
//!
//! Floats are IEEE 754 and integers are two's complement. Both are stored big-endian
//! and every decoder requires exactly the number of bytes its type occupies.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};
use crate::types::float::BinaryFloat;

fn fixed<const N: usize>(data: &[u8]) -> Result<[u8; N]> {
    data.try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        actual: data.len(),
    })
}

/// Decode a `float4` (4 bytes)
pub fn decode_float4(data: &[u8]) -> Result<f32> {
    fixed(data).map(f32::from_be_bytes)
}

/// Encode an f32 as `float4` (4 bytes)
pub fn encode_float4(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode a `float8` (8 bytes)
pub fn decode_float8(data: &[u8]) -> Result<f64> {
    fixed(data).map(f64::from_be_bytes)
}

/// Encode an f64 as `float8` (8 bytes)
pub fn encode_float8(value: f64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Decode a `"char"` (1 byte, signed)
pub fn decode_char(data: &[u8]) -> Result<i8> {
    fixed(data).map(i8::from_be_bytes)
}

/// Encode an i8 as `"char"`
pub fn encode_char(value: i8) -> [u8; 1] {
    value.to_be_bytes()
}

/// Decode an `int2` (2 bytes)
pub fn decode_int2(data: &[u8]) -> Result<i16> {
    fixed(data).map(i16::from_be_bytes)
}

/// Encode an i16 as `int2`
pub fn encode_int2(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Decode an `int4` (4 bytes)
pub fn decode_int4(data: &[u8]) -> Result<i32> {
    fixed(data).map(i32::from_be_bytes)
}

/// Encode an i32 as `int4`
pub fn encode_int4(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode an `int8` (8 bytes)
pub fn decode_int8(data: &[u8]) -> Result<i64> {
    fixed(data).map(i64::from_be_bytes)
}

/// Encode an i64 as `int8`
pub fn encode_int8(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Big-endian bytes for any supported float width
pub fn to_wire_bytes<F: BinaryFloat>(value: F) -> Bytes {
    let mut buf = BytesMut::with_capacity(F::WIDTH.byte_len());
    value.put_be(&mut buf);
    buf.freeze()
}

/// Read a float of width `F` from exactly `F::WIDTH.byte_len()` big-endian bytes
pub fn from_wire_bytes<F: BinaryFloat>(data: &[u8]) -> Result<F> {
    F::from_be_slice(data)
}

pub(crate) fn put_float4(buf: &mut BytesMut, value: f32) {
    buf.put_f32(value);
}

pub(crate) fn put_float8(buf: &mut BytesMut, value: f64) {
    buf.put_f64(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float4_layout() {
        // 1.0f32 = 0x3F800000
        assert_eq!(encode_float4(1.0), [0x3f, 0x80, 0x00, 0x00]);
        assert_eq!(decode_float4(&[0x3f, 0x80, 0x00, 0x00]).unwrap(), 1.0);
    }

    #[test]
    fn test_float8_layout() {
        // -2.5f64 = 0xC004000000000000
        let bytes = [0xc0, 0x04, 0, 0, 0, 0, 0, 0];
        assert_eq!(encode_float8(-2.5), bytes);
        assert_eq!(decode_float8(&bytes).unwrap(), -2.5);
    }

    #[test]
    fn test_float_roundtrip_is_exact() {
        let values = [0.5_f32, -0.5, 3.14, f32::MAX, f32::MIN, f32::MIN_POSITIVE, -0.0];
        for value in values {
            let decoded = decode_float4(&encode_float4(value)).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits(), "roundtrip failed for {}", value);
        }

        let values = [0.1_f64, -1e300, std::f64::consts::PI, f64::EPSILON, -0.0];
        for value in values {
            let decoded = decode_float8(&encode_float8(value)).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits(), "roundtrip failed for {}", value);
        }
    }

    #[test]
    fn test_float_special_values() {
        let decoded = decode_float4(&encode_float4(f32::NEG_INFINITY)).unwrap();
        assert!(decoded.is_infinite() && decoded.is_sign_negative());

        let nan = f64::from_bits(0x7ff0_0000_0000_0001);
        let decoded = decode_float8(&encode_float8(nan)).unwrap();
        assert_eq!(decoded.to_bits(), nan.to_bits());
    }

    #[test]
    fn test_integer_layouts() {
        assert_eq!(decode_char(&[0xff]).unwrap(), -1);
        assert_eq!(decode_int2(&[0x80, 0x00]).unwrap(), i16::MIN);
        assert_eq!(decode_int4(&[0x00, 0x00, 0x00, 0x2a]).unwrap(), 42);
        assert_eq!(decode_int8(&encode_int8(-7)).unwrap(), -7);
        assert_eq!(encode_int2(0x1234), [0x12, 0x34]);
        assert_eq!(encode_int4(-2), [0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(encode_char(5), [5]);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            decode_int4(&[0, 0, 1]),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(decode_float8(&[0; 4]).is_err());
        assert!(decode_float4(&[0; 8]).is_err());
        assert!(decode_char(&[]).is_err());
        assert!(decode_int2(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_generic_wire_bytes() {
        let bytes = to_wire_bytes(42.0_f64);
        assert_eq!(&bytes[..], &encode_float8(42.0)[..]);
        assert_eq!(from_wire_bytes::<f64>(&bytes).unwrap(), 42.0);

        let bytes = to_wire_bytes(1.5_f32);
        assert_eq!(bytes.len(), 4);
        assert_eq!(from_wire_bytes::<f32>(&bytes).unwrap(), 1.5);
        assert!(from_wire_bytes::<f32>(&encode_float8(1.5)).is_err());
    }
}

//! Float encoding and decoding
//!
//! This module provides the fixed-width scalar transcoder, the float conversion
//! dispatcher, and the temporal codec seam it consults.

pub(crate) mod binary;
mod float;
mod temporal;

pub use binary::{
    decode_char, decode_float4, decode_float8, decode_int2, decode_int4, decode_int8,
    encode_char, encode_float4, encode_float8, encode_int2, encode_int4, encode_int8,
    from_wire_bytes, to_wire_bytes,
};
pub use float::{decode_float, encode_float, BinaryFloat, FromWireValue, ToWireValue, WireType};
pub use temporal::{
    PgTemporalCodec, TemporalCodec, TemporalPoint, PG_EPOCH_UNIX_SECONDS,
    REFERENCE_EPOCH_UNIX_SECONDS,
};

#![warn(missing_docs)]

//! # pg-float-codec
//!
//! Conversions between Rust floats and PostgreSQL wire values.
//!
//! The transport layer hands the codec a [`WireValue`]: binary bytes tagged with their
//! source type, a text-format string, or NULL. The codec turns it into an `f32` or `f64`,
//! and turns floats back into binary `float4` / `float8` values.
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_float_codec::{FromWireValue, ToWireValue, WireTag, WireValue};
//!
//! # fn main() -> pg_float_codec::Result<()> {
//! // Binary round trip is bit-exact
//! let wire = 1.25_f64.to_wire_value();
//! assert_eq!(wire.tag(), Some(WireTag::Float8));
//! assert_eq!(f64::from_wire_value(&wire)?, 1.25);
//!
//! // Integers are widened
//! let wire = WireValue::binary(WireTag::Int4, vec![0, 0, 0, 42]);
//! assert_eq!(f32::from_wire_value(&wire)?, 42.0);
//!
//! // Text-format values are parsed
//! assert_eq!(f64::from_wire_value(&WireValue::text("3.14"))?, 3.14);
//! # Ok(())
//! # }
//! ```
//!
//! ## Source Types
//!
//! | Wire type | Decoded as |
//! |-----------|------------|
//! | `float4`, `float8` | the float, widened or narrowed |
//! | `char`, `int2`, `int4`, `int8` | the integer, converted with rounding |
//! | `timestamp`, `date`, `time` | seconds since 2001-01-01 00:00:00 UTC |
//! | text format | parsed as `f64`, then narrowed |
//! | NULL | error; wrap in `Option` above this crate |
//!
//! Every failure is an [`Error`] with a stable [`identifier`](Error::identifier).
//!
//! ## Temporal Sources
//!
//! Dates and times are decoded by a [`TemporalCodec`]. [`PgTemporalCodec`] handles the
//! PostgreSQL binary layouts and is used by default; supply another through
//! [`Config::with_temporal_codec`].

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use config::Config;
pub use constants::{FloatWidth, WireTag};
pub use error::{Error, Result};
pub use types::{
    BinaryFloat, FromWireValue, PgTemporalCodec, TemporalCodec, TemporalPoint, ToWireValue,
    WireType,
};
pub use value::{WireFormat, WireValue};

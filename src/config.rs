//! Codec configuration
//!
//! A [`Config`] carries the collaborators the float codec consults while decoding.
//! Today that is the temporal codec used for `timestamp`, `date` and `time` sources.
//!
//! # Examples
//!
//! ```rust
//! use pg_float_codec::{Config, WireValue};
//!
//! let config = Config::new();
//! let value = config.encode(2.5_f64);
//! assert_eq!(config.decode::<f64>(&value).unwrap(), 2.5);
//! assert!(config.decode::<f32>(&WireValue::Null).is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{decode_float, encode_float, BinaryFloat, PgTemporalCodec, TemporalCodec};
use crate::value::WireValue;

/// Float codec configuration
#[derive(Clone)]
pub struct Config {
    temporal: Arc<dyn TemporalCodec>,
}

impl Config {
    /// Create a configuration using [`PgTemporalCodec`]
    pub fn new() -> Self {
        Self {
            temporal: Arc::new(PgTemporalCodec),
        }
    }

    /// Use a different temporal codec
    pub fn with_temporal_codec<T>(mut self, codec: T) -> Self
    where
        T: TemporalCodec + 'static,
    {
        self.temporal = Arc::new(codec);
        self
    }

    /// Use a shared temporal codec
    pub fn with_shared_temporal_codec(mut self, codec: Arc<dyn TemporalCodec>) -> Self {
        self.temporal = codec;
        self
    }

    /// The configured temporal codec
    pub fn temporal_codec(&self) -> &dyn TemporalCodec {
        self.temporal.as_ref()
    }

    /// Decode a wire value into `F`
    pub fn decode<F: BinaryFloat>(&self, value: &WireValue) -> Result<F> {
        decode_float(value, self.temporal.as_ref())
    }

    /// Encode `value` as a binary wire value
    pub fn encode<F: BinaryFloat>(&self, value: F) -> WireValue {
        encode_float(value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}

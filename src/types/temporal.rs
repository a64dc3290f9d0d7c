//! Temporal values as seen by the float codec
//!
//! The float decoder does not parse dates itself. It asks a [`TemporalCodec`] for a
//! [`TemporalPoint`] and converts that point's offset from the reference epoch
//! (2001-01-01 00:00:00 UTC) into a number of seconds.
//!
//! [`PgTemporalCodec`] understands the PostgreSQL binary layouts:
//!
//! - `timestamp`: i64 microseconds since 2000-01-01 00:00:00
//! - `date`: i32 days since 2000-01-01
//! - `time`: i64 microseconds since midnight, placed on 2000-01-01

use chrono::{DateTime, NaiveDateTime};

use crate::constants::WireTag;
use crate::error::{Error, Result};
use crate::types::binary::{decode_int4, decode_int8};

/// Unix time of the reference epoch, 2001-01-01 00:00:00 UTC
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// Unix time of the PostgreSQL epoch, 2000-01-01 00:00:00 UTC
pub const PG_EPOCH_UNIX_SECONDS: i64 = 946_684_800;

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;
/// `24:00:00` is a valid `time`
const MAX_TIME_MICROS: i64 = SECONDS_PER_DAY * MICROS_PER_SECOND;

/// A point in time produced by a temporal codec (UTC wall time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemporalPoint(NaiveDateTime);

impl TemporalPoint {
    /// Wrap a UTC wall time
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// The underlying date and time
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Seconds since 2001-01-01 00:00:00 UTC, with fractional part
    pub fn seconds_since_reference(&self) -> f64 {
        let utc = self.0.and_utc();
        let whole = utc.timestamp() - REFERENCE_EPOCH_UNIX_SECONDS;
        whole as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9
    }
}

impl From<NaiveDateTime> for TemporalPoint {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

/// Decodes temporal payloads into points in time
pub trait TemporalCodec: Send + Sync {
    /// Decode a binary payload tagged `timestamp`, `date` or `time`
    fn decode(&self, tag: WireTag, data: &[u8]) -> Result<TemporalPoint>;
}

/// Temporal codec for the PostgreSQL binary formats
#[derive(Debug, Clone, Copy, Default)]
pub struct PgTemporalCodec;

impl PgTemporalCodec {
    fn from_pg_micros(tag: WireTag, micros: i64) -> Result<TemporalPoint> {
        let secs = PG_EPOCH_UNIX_SECONDS + micros.div_euclid(MICROS_PER_SECOND);
        let nanos = (micros.rem_euclid(MICROS_PER_SECOND) * 1000) as u32;
        DateTime::from_timestamp(secs, nanos)
            .map(|dt| TemporalPoint(dt.naive_utc()))
            .ok_or_else(|| Error::temporal(tag, format!("{} microseconds is out of range", micros)))
    }

    fn check_len(tag: WireTag, data: &[u8], expected: usize) -> Result<()> {
        if data.len() != expected {
            return Err(Error::temporal(
                tag,
                format!("requires {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(())
    }
}

impl TemporalCodec for PgTemporalCodec {
    fn decode(&self, tag: WireTag, data: &[u8]) -> Result<TemporalPoint> {
        match tag {
            WireTag::Timestamp => {
                Self::check_len(tag, data, 8)?;
                let micros = decode_int8(data)?;
                if micros == i64::MAX || micros == i64::MIN {
                    return Err(Error::temporal(tag, "infinite timestamps have no offset"));
                }
                Self::from_pg_micros(tag, micros)
            }
            WireTag::Date => {
                Self::check_len(tag, data, 4)?;
                let days = decode_int4(data)?;
                if days == i32::MAX || days == i32::MIN {
                    return Err(Error::temporal(tag, "infinite dates have no offset"));
                }
                let micros = i64::from(days)
                    .checked_mul(SECONDS_PER_DAY * MICROS_PER_SECOND)
                    .ok_or_else(|| Error::temporal(tag, format!("{} days is out of range", days)))?;
                Self::from_pg_micros(tag, micros)
            }
            WireTag::Time => {
                Self::check_len(tag, data, 8)?;
                let micros = decode_int8(data)?;
                if !(0..=MAX_TIME_MICROS).contains(&micros) {
                    return Err(Error::temporal(
                        tag,
                        format!("{} microseconds is not a time of day", micros),
                    ));
                }
                Self::from_pg_micros(tag, micros)
            }
            other => Err(Error::temporal(other, "not a temporal type")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::binary::{encode_int4, encode_int8};
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_micro_opt(h, min, s, micro)
            .unwrap()
    }

    #[test]
    fn test_reference_epoch_is_zero() {
        let point = TemporalPoint::new(datetime(2001, 1, 1, 0, 0, 0, 0));
        assert_eq!(point.seconds_since_reference(), 0.0);
    }

    #[test]
    fn test_fractional_offset() {
        let point = TemporalPoint::new(datetime(2001, 1, 1, 0, 0, 1, 500_000));
        assert_eq!(point.seconds_since_reference(), 1.5);

        let point = TemporalPoint::new(datetime(2000, 12, 31, 23, 59, 59, 250_000));
        assert_eq!(point.seconds_since_reference(), -0.75);
    }

    #[test]
    fn test_decode_date() {
        // 2000 is a leap year: 366 days before the reference epoch
        let point = PgTemporalCodec.decode(WireTag::Date, &encode_int4(0)).unwrap();
        assert_eq!(point.as_naive(), datetime(2000, 1, 1, 0, 0, 0, 0));
        assert_eq!(point.seconds_since_reference(), -31_622_400.0);

        let point = PgTemporalCodec.decode(WireTag::Date, &encode_int4(366)).unwrap();
        assert_eq!(point.seconds_since_reference(), 0.0);
    }

    #[test]
    fn test_decode_timestamp() {
        // 2024-03-15 14:30:45.123456
        let expected = datetime(2024, 3, 15, 14, 30, 45, 123_456);
        let micros = (expected.and_utc().timestamp() - PG_EPOCH_UNIX_SECONDS) * 1_000_000 + 123_456;
        let point = PgTemporalCodec
            .decode(WireTag::Timestamp, &encode_int8(micros))
            .unwrap();
        assert_eq!(point.as_naive(), expected);
    }

    #[test]
    fn test_decode_timestamp_before_epoch() {
        let point = PgTemporalCodec
            .decode(WireTag::Timestamp, &encode_int8(-1))
            .unwrap();
        assert_eq!(point.as_naive(), datetime(1999, 12, 31, 23, 59, 59, 999_999));
    }

    #[test]
    fn test_decode_time() {
        let micros = (3 * 3600 + 25) * 1_000_000;
        let point = PgTemporalCodec.decode(WireTag::Time, &encode_int8(micros)).unwrap();
        assert_eq!(point.as_naive(), datetime(2000, 1, 1, 3, 0, 25, 0));

        assert!(PgTemporalCodec.decode(WireTag::Time, &encode_int8(-1)).is_err());
    }

    #[test]
    fn test_infinite_values_rejected() {
        let err = PgTemporalCodec
            .decode(WireTag::Timestamp, &encode_int8(i64::MAX))
            .unwrap_err();
        assert_eq!(err.identifier(), "temporal");
        assert!(PgTemporalCodec.decode(WireTag::Date, &encode_int4(i32::MIN)).is_err());
    }

    #[test]
    fn test_wrong_length_and_tag() {
        let err = PgTemporalCodec.decode(WireTag::Date, &[0, 0]).unwrap_err();
        assert_eq!(err, Error::temporal(WireTag::Date, "requires 4 bytes, got 2"));
        assert!(PgTemporalCodec.decode(WireTag::Int4, &encode_int4(1)).is_err());
    }
}

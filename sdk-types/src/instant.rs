/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, independent of any wire encoding.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`. Used by restJson services.
    DateTime,
    /// Fractional seconds since the Unix epoch, e.g. `1576540098.52`. Used by awsJson services.
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp `{input}`: {reason}")]
pub struct ParseError {
    input: String,
    reason: &'static str,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let nanos = ((epoch_seconds - seconds) * NANOS_PER_SECOND as f64).round() as u32;
        Instant::from_secs_and_nanos(seconds as i64, nanos)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => {
                Instant::from_secs_and_nanos(duration.as_secs() as i64, duration.subsec_nanos())
            }
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos > 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|_| ParseError {
                    input: s.to_owned(),
                    reason: "not an RFC 3339 date-time",
                })?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => {
                let value: f64 = s.parse().map_err(|_| ParseError {
                    input: s.to_owned(),
                    reason: "not a number of epoch seconds",
                })?;
                if !value.is_finite() {
                    return Err(ParseError {
                        input: s.to_owned(),
                        reason: "epoch seconds must be finite",
                    });
                }
                Ok(Instant::from_f64(value))
            }
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) if self.has_nanos() => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                    // trailing zeros of the fraction only
                    let mut trimmed = rfc3339.trim_end_matches('Z').trim_end_matches('0').to_owned();
                    trimmed.push('Z');
                    trimmed
                }
                Some(date_time) => date_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                // outside of chrono's representable range
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// `#[serde(with = "...")]` support for optional members encoded as epoch seconds.
pub mod epoch_seconds {
    use super::Instant;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) if instant.has_nanos() => {
                serializer.serialize_f64(instant.epoch_fractional_seconds())
            }
            Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
    }
}

/// `#[serde(with = "...")]` support for optional members encoded as RFC 3339 date-times.
pub mod date_time {
    use super::{Format, Instant};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&instant.fmt(Format::DateTime)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => Instant::from_str(&raw, Format::DateTime)
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use serde::{Deserialize, Serialize};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");

        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn parse_formats() {
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_str("2019-12-16T15:48:18-08:00", Format::DateTime).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            Instant::from_str("1576540098.5", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
        Instant::from_str("yesterday", Format::DateTime).unwrap_err();
        Instant::from_str("NaN", Format::EpochSeconds).unwrap_err();
    }

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(default, with = "super::epoch_seconds", skip_serializing_if = "Option::is_none")]
        epoch: Option<Instant>,
        #[serde(default, with = "super::date_time", skip_serializing_if = "Option::is_none")]
        date: Option<Instant>,
    }

    #[test]
    fn serde_encodings() {
        let stamped = Stamped {
            epoch: Some(Instant::from_epoch_seconds(1576540098)),
            date: Some(Instant::from_epoch_seconds(1576540098)),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"epoch":1576540098,"date":"2019-12-16T23:48:18Z"}"#);
        assert_eq!(serde_json::from_str::<Stamped>(&json).unwrap(), stamped);

        let fractional: Stamped = serde_json::from_str(r#"{"epoch":1.5E9}"#).unwrap();
        assert_eq!(fractional.epoch, Some(Instant::from_epoch_seconds(1_500_000_000)));
        assert_eq!(fractional.date, None);
        assert_eq!(serde_json::to_string(&Stamped { epoch: None, date: None }).unwrap(), "{}");
    }
}

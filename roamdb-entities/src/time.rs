use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

/// A point in time (UTC), with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from_secs(secs: i64) -> Self {
        Self(OffsetDateTime::UNIX_EPOCH + Duration::seconds(secs))
    }

    pub fn into_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(millis))
    }

    pub fn into_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs)
    }
}

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct ParseTimestampError(#[from] time::error::Parse);

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(OffsetDateTime::parse(s, &Rfc3339)?))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

use std::fmt;

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

// ISO 8601 in UTC with millisecond precision, e.g. `2014-08-08T23:27:05.568Z`
const ISO_8601_MILLIS: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        Self((now.unix_timestamp_nanos() / 1_000_000) as i64)
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn as_milliseconds(self) -> i64 {
        self.0
    }

    fn to_utc(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }

    /// Formats the timestamp as ISO 8601 in UTC with milliseconds.
    ///
    /// Years outside of 0000..=9999 cannot be represented and
    /// result in an empty string.
    pub fn to_iso8601(self) -> String {
        self.to_utc()
            .and_then(|t| t.format(ISO_8601_MILLIS).ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.to_iso8601())
    }
}

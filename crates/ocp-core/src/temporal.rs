//! # Temporal Types — UTC-Only Timestamps and the Clock Seam
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to millisecond
//! precision, and the `Clock` trait through which the lifecycle engine
//! observes time.
//!
//! ## Invariant
//!
//! Timestamps are UTC with Z suffix. Non-UTC inputs are **rejected at
//! construction** by the strict parser — there is no silent conversion
//! that could introduce ambiguity between two renderings of the same
//! instant. Millisecond precision is retained internally because case
//! identifiers embed the creation instant in epoch milliseconds; the
//! rendered form truncates to seconds, matching the OCDS convention of
//! `YYYY-MM-DDTHH:MM:SSZ`.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to millisecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::from_epoch_millis()`] — from a Unix epoch in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-millisecond components.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix
    /// are accepted. Explicit offsets like `+00:00` or `+05:30` are
    /// rejected — even `+00:00`, which is semantically equivalent to `Z`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CoreError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// Lenient parser for ingesting external documents. The result is
    /// always UTC, matching the strict invariant. Prefer
    /// [`Timestamp::parse()`] for internally produced values.
    pub fn parse_lenient(s: &str) -> Result<Self, CoreError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CoreError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Create a timestamp from a Unix epoch timestamp in milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, CoreError> {
        let dt = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| CoreError::InvalidTimestamp(format!("invalid epoch millis: {millis}")))?;
        Ok(Self(dt))
    }

    /// The Unix epoch timestamp in milliseconds.
    ///
    /// Case identifiers embed this value, so it preserves the full
    /// millisecond precision of the creation instant.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix, seconds precision
    /// (e.g. `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

// ─── Clock Seam ──────────────────────────────────────────────────────

/// Source of the creation timestamp recorded on every persisted row.
///
/// The lifecycle engine never calls `Timestamp::now()` directly; it
/// receives a `Clock` at construction so tests can pin time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// The production clock, backed by the system UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_from_utc_truncates_to_millis() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos);
        assert_eq!(ts.as_datetime().nanosecond(), 123_000_000);
    }

    #[test]
    fn test_to_iso8601_format() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let dt = Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(format!("{ts}"), ts.to_iso8601());
    }

    #[test]
    fn test_parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_offset_rejected() {
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
        assert!(Timestamp::parse("2026-01-15T08:00:00-04:00").is_err());
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_epoch_millis_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.250Z").unwrap();
        let millis = ts.epoch_millis();
        let ts2 = Timestamp::from_epoch_millis(millis).unwrap();
        assert_eq!(ts, ts2);
        assert_eq!(millis % 1000, 250);
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let later = Timestamp::parse("2026-01-15T12:00:01Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_system_clock_is_utc_millis() {
        let ts = SystemClock.now();
        assert_eq!(ts.as_datetime().nanosecond() % 1_000_000, 0);
    }
}

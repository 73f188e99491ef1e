//! Calendar due date for offer requests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Timestamp, ValidationError};

const FIELD: &str = "due_date";

/// Calendar date by which offers are due.
///
/// The deadline instant is the start of the day in UTC, so a due date of
/// today has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses `YYYY-MM-DD`, or an RFC 3339 timestamp.
    ///
    /// A timestamp keeps only its UTC calendar date; the time of day is
    /// dropped. Since the deadline is the start of that date, a timestamp
    /// later today becomes a due date of today and fails
    /// [`ensure_after`](Self::ensure_after).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field(FIELD));
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Self(dt.with_timezone(&Utc).date_naive()))
            .map_err(|_| ValidationError::invalid_format(FIELD, format!("'{}' is not a date", raw)))
    }

    /// Creates a due date from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the instant at which the deadline starts.
    pub fn deadline(&self) -> Timestamp {
        Timestamp::from_datetime(self.0.and_time(NaiveTime::MIN).and_utc())
    }

    /// Fails unless the deadline lies strictly after `now`.
    pub fn ensure_after(&self, now: &Timestamp) -> Result<(), ValidationError> {
        if self.deadline().is_after(now) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                FIELD,
                "due date must be in the future",
            ))
        }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

//! Reservation start time parsing and display

use chrono::{DateTime, NaiveDateTime, Utc};

use super::ValidationError;

/// Long display form, e.g. "August 7, 2026, 6:30 pm"
const DISPLAY_FORMAT: &str = "%B %-d, %Y, %-I:%M %P";

/// Accepted naive input forms, treated as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Validated reservation start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StartAt(DateTime<Utc>);

impl StartAt {
    /// Parse a start time from user input.
    ///
    /// Accepts RFC 3339 (`2026-08-07T18:30:00Z`) or a naive
    /// `YYYY-MM-DD HH:MM[:SS]`, which is taken as UTC.
    ///
    /// # Example
    /// ```
    /// use tably_server::models::StartAt;
    ///
    /// assert!(StartAt::parse("2026-08-07T18:30:00Z").is_ok());
    /// assert!(StartAt::parse("2026-08-07 18:30").is_ok());
    /// assert!(StartAt::parse("not-a-date").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Ok(Self(naive.and_utc()));
            }
        }

        Err(ValidationError::InvalidStartAt {
            value: raw.to_owned(),
        })
    }

    /// Rebuild from a stored TIMESTAMPTZ value.
    pub(crate) fn from_stored(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The underlying instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Render for display: "Month Day, Year, h:mm am/pm".
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let at = StartAt::parse("2026-08-07T18:30:00Z").unwrap();
        assert_eq!(at.as_datetime().to_rfc3339(), "2026-08-07T18:30:00+00:00");
    }

    #[test]
    fn parses_naive_forms() {
        assert!(StartAt::parse("2026-08-07 18:30").is_ok());
        assert!(StartAt::parse("2026-08-07 18:30:00").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = StartAt::parse("not-a-date").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStartAt { .. }));
    }

    #[test]
    fn rejects_empty() {
        assert!(StartAt::parse("").is_err());
    }

    #[test]
    fn display_long_form() {
        let at = StartAt::parse("2026-08-07T18:30:00Z").unwrap();
        assert_eq!(at.display(), "August 7, 2026, 6:30 pm");

        let morning = StartAt::parse("2026-01-03 09:05").unwrap();
        assert_eq!(morning.display(), "January 3, 2026, 9:05 am");
    }
}

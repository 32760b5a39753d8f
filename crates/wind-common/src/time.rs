//! Time handling utilities for forecast term series.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A forecast valid time expressed as model run time plus lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidTime {
    /// Model run/reference time
    pub reference_time: DateTime<Utc>,
    /// Forecast hour offset from reference time
    pub forecast_hour: u32,
}

impl ValidTime {
    pub fn new(reference_time: DateTime<Utc>, forecast_hour: u32) -> Self {
        Self {
            reference_time,
            forecast_hour,
        }
    }

    /// Calculate the actual valid time (reference + forecast offset)
    pub fn valid_datetime(&self) -> DateTime<Utc> {
        self.reference_time + Duration::hours(self.forecast_hour as i64)
    }

    /// Expand a run time and a list of lead times into valid datetimes.
    pub fn expand(reference_time: DateTime<Utc>, forecast_hours: &[u32]) -> Vec<DateTime<Utc>> {
        forecast_hours
            .iter()
            .map(|&hour| Self::new(reference_time, hour).valid_datetime())
            .collect()
    }

    /// Parse from ISO 8601 string (returns valid_datetime interpretation)
    pub fn from_iso8601(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
        // Try full datetime with timezone
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Try without timezone (assume UTC)
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&ndt));
        }

        // Try date only
        if let Ok(ndt) =
            NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S")
        {
            return Ok(Utc.from_utc_datetime(&ndt));
        }

        Err(TimeParseError::InvalidFormat(s.to_string()))
    }
}

/// Closed time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Time step assumed for a series holding a single valid time.
pub const DEFAULT_STEP_HOURS: i64 = 1;

/// Valid time preceding `valid_times[index]`.
///
/// The first element has no predecessor, so the first step of the series is
/// extrapolated backwards (`first - (second - first)`); a single-element
/// series falls back to [`DEFAULT_STEP_HOURS`].
pub fn preceding_time(valid_times: &[DateTime<Utc>], index: usize) -> Option<DateTime<Utc>> {
    match index {
        _ if index >= valid_times.len() => None,
        0 => {
            let first = valid_times[0];
            let step = valid_times
                .get(1)
                .map(|second| *second - first)
                .unwrap_or_else(|| Duration::hours(DEFAULT_STEP_HOURS));
            Some(first - step)
        }
        _ => Some(valid_times[index - 1]),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 2, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_iso8601() {
        let dt = ValidTime::from_iso8601("2023-01-02T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_iso8601_without_zone() {
        let dt = ValidTime::from_iso8601("2023-01-02T06:00:00").unwrap();
        assert_eq!(dt, at(6));
    }

    #[test]
    fn test_parse_iso8601_invalid() {
        assert!(ValidTime::from_iso8601("yesterday").is_err());
    }

    #[test]
    fn test_expand_forecast_hours() {
        let times = ValidTime::expand(at(0), &[0, 3, 6]);
        assert_eq!(times, vec![at(0), at(3), at(6)]);
    }

    #[test]
    fn test_preceding_time_extrapolates_first_step() {
        let times = vec![at(3), at(6), at(9)];
        assert_eq!(preceding_time(&times, 0), Some(at(0)));
        assert_eq!(preceding_time(&times, 2), Some(at(6)));
        assert_eq!(preceding_time(&times, 3), None);
    }

    #[test]
    fn test_preceding_time_single_element() {
        assert_eq!(preceding_time(&[at(5)], 0), Some(at(4)));
    }
}

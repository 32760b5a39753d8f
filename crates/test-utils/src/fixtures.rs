//! Common test fixtures for wind direction tests.
//!
//! This module provides pre-defined values that represent common
//! scenarios in wind direction processing.

/// Centre angles of the 16 compass sectors.
pub mod sectors {
    pub const N: f64 = 0.0;
    pub const NNE: f64 = 22.5;
    pub const NE: f64 = 45.0;
    pub const E: f64 = 90.0;
    pub const SE: f64 = 135.0;
    pub const SSE: f64 = 157.5;
    pub const S: f64 = 180.0;
    pub const SW: f64 = 225.0;
    pub const W: f64 = 270.0;
    pub const NW: f64 = 315.0;
    pub const NNW: f64 = 337.5;

    /// Sector width in degrees
    pub const SECTOR_SIZE: f64 = 22.5;
}

/// Common time values for testing.
pub mod time {
    use chrono::{DateTime, TimeZone, Utc};

    /// First valid time of generated series (2023-01-02T00:00:00Z)
    pub const REFERENCE_TIME: &str = "2023-01-02T00:00:00Z";

    /// [`REFERENCE_TIME`] as a datetime.
    pub fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap()
    }

    /// `reference_time() + hours`, negative values allowed.
    pub fn hours_from_reference(hours: i64) -> DateTime<Utc> {
        reference_time() + chrono::Duration::hours(hours)
    }
}

/// Single-pixel term series covering typical situations.
pub mod scenarios {
    use super::sectors::*;

    /// Northerly wind backing to a southerly one after three hours.
    pub const NORTH_THEN_SOUTH: [f64; 8] = [N, N, N, S, S, S, S, S];

    /// Northerly wind slowly veering to south-east, one sector per hour.
    pub const VEERING: [f64; 7] = [N, NNE, NE, 67.5, E, 112.5, SE];

    /// Wind flipping direction every hour.
    pub const FLIPPING: [f64; 5] = [10.0, 190.0, 10.0, 190.0, 10.0];

    /// Three stable regimes of two hours each.
    pub const THREE_REGIMES: [f64; 6] = [N, N, S, S, N, N];
}

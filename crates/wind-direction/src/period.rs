//! Time spans described by a single wind direction.

use std::fmt;
use std::ops::Add;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::direction::WindDirection;
use crate::error::{Result, WindDirectionError};

/// A contiguous time span `[begin_time, end_time]` with one wind direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindDirectionPeriod {
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    direction: WindDirection,
}

impl WindDirectionPeriod {
    /// Create a period; `begin_time` must be strictly before `end_time`.
    pub fn new(
        begin_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        direction: WindDirection,
    ) -> Result<Self> {
        if begin_time >= end_time {
            return Err(WindDirectionError::InvalidPeriod {
                begin: begin_time.to_rfc3339(),
                end: end_time.to_rfc3339(),
            });
        }

        Ok(Self {
            begin_time,
            end_time,
            direction,
        })
    }

    pub fn begin_time(&self) -> DateTime<Utc> {
        self.begin_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn direction(&self) -> &WindDirection {
        &self.direction
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.begin_time
    }

    /// Absorb `other` if the union of both directions fits within `size_max`.
    ///
    /// On success the period covers both time spans and takes the union
    /// direction. Returns `false` and leaves `self` untouched otherwise.
    pub fn update(&mut self, other: &WindDirectionPeriod, size_max: f64) -> bool {
        let direction = &self.direction + &other.direction;
        if !direction.check_size(size_max) {
            return false;
        }

        self.begin_time = self.begin_time.min(other.begin_time);
        self.end_time = self.end_time.max(other.end_time);
        self.direction = direction;
        true
    }

    /// Same compass sector as `other`.
    pub fn has_same_direction_as(&self, other: &WindDirectionPeriod) -> bool {
        self.direction.same_sector_as(&other.direction)
    }

    /// Compass sector opposite to the one of `other`.
    pub fn has_opposite_direction_to(&self, other: &WindDirectionPeriod) -> bool {
        self.direction.is_opposite_to(&other.direction)
    }
}

impl Add for WindDirectionPeriod {
    type Output = WindDirectionPeriod;

    fn add(self, other: WindDirectionPeriod) -> WindDirectionPeriod {
        WindDirectionPeriod {
            begin_time: self.begin_time.min(other.begin_time),
            end_time: self.end_time.max(other.end_time),
            direction: self.direction + other.direction,
        }
    }
}

impl fmt::Display for WindDirectionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.begin_time.format("%Y-%m-%dT%H:%MZ"),
            self.end_time.format("%Y-%m-%dT%H:%MZ"),
            self.direction
        )
    }
}

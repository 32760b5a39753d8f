//! Time series of wind direction fields.

use chrono::{DateTime, Utc};

use crate::error::{Result, WindDirectionError};
use wind_common::{preceding_time, DirectionGrid};

/// Direction fields indexed by strictly increasing valid times.
#[derive(Debug, Clone)]
pub struct DirectionSeries {
    valid_times: Vec<DateTime<Utc>>,
    grids: Vec<DirectionGrid>,
}

impl DirectionSeries {
    pub fn new(valid_times: Vec<DateTime<Utc>>, grids: Vec<DirectionGrid>) -> Result<Self> {
        if valid_times.is_empty() {
            return Err(WindDirectionError::invalid_series("series has no valid time"));
        }
        if valid_times.len() != grids.len() {
            return Err(WindDirectionError::invalid_series(format!(
                "{} valid times but {} grids",
                valid_times.len(),
                grids.len()
            )));
        }
        check_increasing(&valid_times)?;

        Ok(Self { valid_times, grids })
    }

    pub fn valid_times(&self) -> &[DateTime<Utc>] {
        &self.valid_times
    }

    pub fn grids(&self) -> &[DirectionGrid] {
        &self.grids
    }

    pub fn len(&self) -> usize {
        self.valid_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid_times.is_empty()
    }

    /// Begin time of the term valid at `valid_times[index]`.
    pub fn preceding_time(&self, index: usize) -> Result<DateTime<Utc>> {
        preceding_time(&self.valid_times, index).ok_or_else(|| {
            WindDirectionError::invalid_series(format!("no valid time at index {}", index))
        })
    }

    /// Series indices of `kept_times`, which must be strictly increasing
    /// valid times of the series.
    pub fn kept_indices(&self, kept_times: &[DateTime<Utc>]) -> Result<Vec<usize>> {
        if kept_times.is_empty() {
            return Err(WindDirectionError::invalid_series("no kept valid time"));
        }
        check_increasing(kept_times)?;

        kept_times
            .iter()
            .map(|time| {
                self.valid_times
                    .binary_search(time)
                    .map_err(|_| WindDirectionError::UnknownKeptTime(time.to_rfc3339()))
            })
            .collect()
    }
}

/// Check that `times` is strictly increasing.
pub(crate) fn check_increasing(times: &[DateTime<Utc>]) -> Result<()> {
    match times.windows(2).find(|pair| pair[0] >= pair[1]) {
        Some(pair) => Err(WindDirectionError::invalid_series(format!(
            "valid times are not strictly increasing at {}",
            pair[1].to_rfc3339()
        ))),
        None => Ok(()),
    }
}

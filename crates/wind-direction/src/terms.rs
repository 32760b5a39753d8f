//! Term table consulted by the segmentation scan.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::direction::WindDirection;
use crate::error::{Result, WindDirectionError};
use crate::finder::WindDirectionPeriodFinder;
use crate::period::WindDirectionPeriod;
use crate::series::check_increasing;
use wind_common::{preceding_time, TimeRange};

/// One term: the span `(begin_time, end_time]` and its usable direction.
///
/// `direction` is `None` when extraction failed or the term was too wide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermPeriod {
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    direction: Option<WindDirection>,
}

impl TermPeriod {
    pub fn new(
        begin_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        direction: Option<WindDirection>,
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

    pub fn direction(&self) -> Option<&WindDirection> {
        self.direction.as_ref()
    }

    pub fn is_usable(&self) -> bool {
        self.direction.is_some()
    }

    /// The term as a one-term period, when it has a direction.
    pub fn period(&self) -> Option<WindDirectionPeriod> {
        let direction = self.direction.clone()?;
        WindDirectionPeriod::new(self.begin_time, self.end_time, direction).ok()
    }
}

/// The direction a term keeps, or `None` when it is wider than
/// [`WindDirectionPeriodFinder::TERM_DIRECTION_SIZE_MAX`].
pub fn retain_term_direction(direction: Option<WindDirection>) -> Option<WindDirection> {
    direction.filter(|d| d.check_size(WindDirectionPeriodFinder::TERM_DIRECTION_SIZE_MAX))
}

/// Ordered, non-empty list of terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TermTable {
    terms: Vec<TermPeriod>,
}

impl TermTable {
    /// Build a table; terms must be non-overlapping and in time order.
    pub fn new(terms: Vec<TermPeriod>) -> Result<Self> {
        if terms.is_empty() {
            return Err(WindDirectionError::invalid_series("term table is empty"));
        }
        if let Some(pair) = terms
            .windows(2)
            .find(|pair| pair[1].begin_time < pair[0].end_time)
        {
            return Err(WindDirectionError::invalid_series(format!(
                "term ending {} overlaps the previous term",
                pair[1].end_time.to_rfc3339()
            )));
        }

        Ok(Self { terms })
    }

    /// Table from pre-extracted directions, one per valid time.
    ///
    /// Each term begins at the preceding valid time. Directions wider than
    /// [`WindDirectionPeriodFinder::TERM_DIRECTION_SIZE_MAX`] become `None`.
    pub fn from_directions(
        valid_times: &[DateTime<Utc>],
        directions: Vec<Option<WindDirection>>,
    ) -> Result<Self> {
        if valid_times.len() != directions.len() {
            return Err(WindDirectionError::invalid_series(format!(
                "{} valid times but {} directions",
                valid_times.len(),
                directions.len()
            )));
        }
        check_increasing(valid_times)?;

        let terms = directions
            .into_iter()
            .enumerate()
            .map(|(idx, direction)| {
                let begin = preceding_time(valid_times, idx).ok_or_else(|| {
                    WindDirectionError::invalid_series(format!("no valid time at index {}", idx))
                })?;
                TermPeriod::new(begin, valid_times[idx], retain_term_direction(direction))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(terms)
    }

    pub fn terms(&self) -> &[TermPeriod] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Begin time of the first term.
    pub fn begin_time(&self) -> DateTime<Utc> {
        self.terms[0].begin_time
    }

    /// End time of the last term.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.terms[self.terms.len() - 1].end_time
    }

    /// Window the found periods have to cover.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.begin_time(), self.end_time())
    }

    pub fn usable_count(&self) -> usize {
        self.terms.iter().filter(|term| term.is_usable()).count()
    }

    /// At least one term carries a direction.
    pub fn has_usable_terms(&self) -> bool {
        self.terms.iter().any(TermPeriod::is_usable)
    }
}

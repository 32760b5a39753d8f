//! Segmentation of a term table into wind direction periods.
//!
//! The scan alternates between two states:
//!
//! ```text
//!   scanning ──probe ≥ PERIOD_HOURS_MIN within 135°──► extending
//!      ▲                                                  │
//!      └──── next term missing / merge wider than 135° ───┘
//! ```
//!
//! A period opens once consecutive terms covering `PERIOD_HOURS_MIN` fit in
//! 135°. An open period keeps absorbing the next term while the union still
//! fits in 135°.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::circular::DEGREES_SECTOR_SIZE;
use crate::config::{CoveragePolicy, FinderConfig};
use crate::direction::WindDirection;
use crate::error::Result;
use crate::extraction::SectorExtractor;
use crate::period::WindDirectionPeriod;
use crate::series::DirectionSeries;
use crate::summary::{TermSummary, WindSummary};
use crate::terms::{retain_term_direction, TermPeriod, TermTable};

/// Finds the wind direction periods of a term series.
///
/// The finder only holds its configuration: every call builds its own term
/// table and period list, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct WindDirectionPeriodFinder {
    config: FinderConfig,
}

/// Everything produced by one [`WindDirectionPeriodFinder::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinderOutput {
    pub terms: TermTable,
    pub summary: WindSummary,
    pub periods: Vec<WindDirectionPeriod>,
}

impl FinderOutput {
    /// How the direction evolves between the first and the last period.
    pub fn trend(&self) -> Option<DirectionTrend> {
        DirectionTrend::from_periods(&self.periods)
    }
}

/// Evolution of the wind direction across the found periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionTrend {
    /// One period, or first and last periods in the same sector.
    Steady,
    /// First and last periods blow from opposite sectors.
    Opposite,
    /// Any other change of direction.
    Turning,
}

impl DirectionTrend {
    pub fn from_periods(periods: &[WindDirectionPeriod]) -> Option<Self> {
        let first = periods.first()?;
        let last = periods.last()?;

        Some(if first.has_same_direction_as(last) {
            Self::Steady
        } else if first.has_opposite_direction_to(last) {
            Self::Opposite
        } else {
            Self::Turning
        })
    }
}

/// Cursor and open period of the segmentation scan.
#[derive(Debug, Default)]
struct ScanState {
    cursor: usize,
    open: Option<WindDirectionPeriod>,
}

/// Outcome of looking for a new period starting at a given term.
#[derive(Debug)]
enum Probe {
    /// A period long and narrow enough ends at term `end`.
    Opened {
        period: WindDirectionPeriod,
        end: usize,
    },
    /// No period can start at this term.
    Rejected,
    /// The series ended before the minimum duration was reached.
    Exhausted,
}

impl WindDirectionPeriodFinder {
    /// Widest arc a single term may span.
    pub const TERM_DIRECTION_SIZE_MAX: f64 = 4.0 * DEGREES_SECTOR_SIZE;

    /// Widest arc a period made of several terms may span.
    pub const MULTIPLE_TERMS_DIRECTION_SIZE_MAX: f64 = 6.0 * DEGREES_SECTOR_SIZE;

    /// Shortest period that can be opened, in hours.
    pub const PERIOD_HOURS_MIN: i64 = 2;

    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn period_duration_min() -> Duration {
        Duration::hours(Self::PERIOD_HOURS_MIN)
    }

    /// Extract and filter the terms of `series`.
    ///
    /// With `kept_times`, only those valid times become terms; each still
    /// begins at the valid time preceding it in the full series.
    pub fn build_terms(
        &self,
        series: &DirectionSeries,
        kept_times: Option<&[DateTime<Utc>]>,
    ) -> Result<(TermTable, WindSummary)> {
        let indices: Vec<usize> = match kept_times {
            Some(kept) => series.kept_indices(kept)?,
            None => (0..series.len()).collect(),
        };

        let extractor = SectorExtractor::new(self.config.percent_min);
        let grids = series.grids();
        let extracted: Vec<Option<WindDirection>> = if self.config.parallel_extraction {
            indices
                .par_iter()
                .map(|&idx| extractor.extract(&grids[idx]))
                .collect()
        } else {
            indices
                .iter()
                .map(|&idx| extractor.extract(&grids[idx]))
                .collect()
        };

        let mut summary = WindSummary::default();
        let mut terms = Vec::with_capacity(indices.len());

        for (&idx, direction) in indices.iter().zip(extracted) {
            let begin_time = series.preceding_time(idx)?;
            let valid_time = series.valid_times()[idx];

            let retained = retain_term_direction(direction.clone());

            if direction.is_some() && retained.is_none() {
                debug!(
                    valid_time = %valid_time,
                    "Term direction wider than {}°, term dropped",
                    Self::TERM_DIRECTION_SIZE_MAX
                );
            }

            summary.push(TermSummary::new(
                begin_time,
                valid_time,
                direction.as_ref(),
                retained.is_some(),
            ));
            terms.push(TermPeriod::new(begin_time, valid_time, retained)?);
        }

        let table = TermTable::new(terms)?;
        debug!(
            terms = table.len(),
            usable = table.usable_count(),
            "Built term table"
        );

        Ok((table, summary))
    }

    /// Build the terms of `series` and find its periods.
    pub fn run(
        &self,
        series: &DirectionSeries,
        kept_times: Option<&[DateTime<Utc>]>,
    ) -> Result<FinderOutput> {
        let (terms, summary) = self.build_terms(series, kept_times)?;
        let periods = self.find_periods(&terms);

        Ok(FinderOutput {
            terms,
            summary,
            periods,
        })
    }

    /// Wind direction periods of `table`.
    ///
    /// An empty list means no usable direction description exists for the
    /// window; it is a normal outcome, not an error.
    pub fn find_periods(&self, table: &TermTable) -> Vec<WindDirectionPeriod> {
        if !table.has_usable_terms() {
            debug!(terms = table.len(), "No usable term, no wind direction period");
            return Vec::new();
        }

        let found = self.segment(table.terms());
        let periods = self.post_process(table, found);

        info!(
            terms = table.len(),
            periods = periods.len(),
            policy = %self.config.coverage_policy,
            "Wind direction periods found"
        );

        periods
    }

    /// Greedy forward scan producing the raw periods.
    fn segment(&self, terms: &[TermPeriod]) -> Vec<WindDirectionPeriod> {
        let mut periods = Vec::new();
        if terms.is_empty() {
            return periods;
        }

        let last = terms.len() - 1;
        let mut state = ScanState::default();

        while state.cursor <= last {
            match state.open.take() {
                None => {
                    let remaining = terms[last].end_time() - terms[state.cursor].begin_time();
                    if remaining < Self::period_duration_min() {
                        break;
                    }

                    match Self::probe(terms, state.cursor) {
                        Probe::Opened { period, end } => {
                            debug!(period = %period, "Opened wind direction period");
                            state.cursor = end;
                            state.open = Some(period);
                        }
                        Probe::Rejected => state.cursor += 1,
                        Probe::Exhausted => break,
                    }
                }
                Some(mut period) => {
                    let next = state.cursor + 1;
                    if next > last {
                        periods.push(period);
                        break;
                    }

                    let extended = terms[next].period().map_or(false, |term| {
                        period.update(&term, Self::MULTIPLE_TERMS_DIRECTION_SIZE_MAX)
                    });
                    state.cursor = next;

                    if extended && next < last {
                        state.open = Some(period);
                        continue;
                    }

                    debug!(period = %period, "Closed wind direction period");
                    periods.push(period);
                    if extended {
                        // The period absorbed the last term.
                        break;
                    }
                }
            }
        }

        if let Some(period) = state.open {
            periods.push(period);
        }

        periods
    }

    /// Merge consecutive terms from `start` until they last long enough.
    fn probe(terms: &[TermPeriod], start: usize) -> Probe {
        let mut accumulated: Option<WindDirectionPeriod> = None;

        for (idx, term) in terms.iter().enumerate().skip(start) {
            let Some(term_period) = term.period() else {
                return Probe::Rejected;
            };

            let candidate = match accumulated.take() {
                Some(period) => period + term_period,
                None => term_period,
            };

            if candidate.duration() >= Self::period_duration_min() {
                return if candidate
                    .direction()
                    .check_size(Self::MULTIPLE_TERMS_DIRECTION_SIZE_MAX)
                {
                    Probe::Opened {
                        period: candidate,
                        end: idx,
                    }
                } else {
                    Probe::Rejected
                };
            }

            accumulated = Some(candidate);
        }

        Probe::Exhausted
    }

    /// Coverage check and period selection, see [`CoveragePolicy`].
    fn post_process(
        &self,
        table: &TermTable,
        periods: Vec<WindDirectionPeriod>,
    ) -> Vec<WindDirectionPeriod> {
        let covered = match (periods.first(), periods.last()) {
            (Some(first), Some(last)) => {
                first.begin_time() == table.begin_time() && last.end_time() == table.end_time()
            }
            _ => return periods,
        };

        let accepted = match self.config.coverage_policy {
            CoveragePolicy::FirstAndLast => covered || periods.len() == 1,
            CoveragePolicy::Strict | CoveragePolicy::KeepAll => covered,
        };

        if !accepted {
            debug!(
                found = periods.len(),
                begin = %table.begin_time(),
                end = %table.end_time(),
                "Periods do not cover the requested window, dropped"
            );
            return Vec::new();
        }

        match self.config.coverage_policy {
            CoveragePolicy::KeepAll => periods,
            CoveragePolicy::FirstAndLast | CoveragePolicy::Strict => keep_first_and_last(periods),
        }
    }
}

/// Drop every period between the first and the last one.
fn keep_first_and_last(mut periods: Vec<WindDirectionPeriod>) -> Vec<WindDirectionPeriod> {
    if periods.len() > 2 {
        let last = periods.pop();
        periods.truncate(1);
        periods.extend(last);
    }
    periods
}

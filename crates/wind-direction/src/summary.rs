//! Per-term bookkeeping table filled during term extraction.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::direction::WindDirection;

/// One row of the wind summary: what was extracted for a term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermSummary {
    pub begin_time: DateTime<Utc>,
    pub valid_time: DateTime<Utc>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub middle: Option<f64>,
    pub sympo_code: Option<u8>,
    /// The term passed the per-term size check and takes part in segmentation.
    pub retained: bool,
}

impl TermSummary {
    pub fn new(
        begin_time: DateTime<Utc>,
        valid_time: DateTime<Utc>,
        extracted: Option<&WindDirection>,
        retained: bool,
    ) -> Self {
        Self {
            begin_time,
            valid_time,
            lower_bound: extracted.map(WindDirection::lower_bound),
            upper_bound: extracted.map(WindDirection::upper_bound),
            middle: extracted.map(WindDirection::middle),
            sympo_code: extracted.map(WindDirection::sympo_code),
            retained: retained && extracted.is_some(),
        }
    }

    /// Extraction produced a direction for this term.
    pub fn is_extracted(&self) -> bool {
        self.sympo_code.is_some()
    }
}

/// Summary table with one row per term, in term order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WindSummary {
    rows: Vec<TermSummary>,
}

impl WindSummary {
    pub fn push(&mut self, row: TermSummary) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TermSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of the term valid at `valid_time`.
    pub fn get(&self, valid_time: &DateTime<Utc>) -> Option<&TermSummary> {
        self.rows.iter().find(|row| &row.valid_time == valid_time)
    }

    pub fn retained_count(&self) -> usize {
        self.rows.iter().filter(|row| row.retained).count()
    }
}

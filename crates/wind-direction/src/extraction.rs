//! Reduction of a direction field to its representative sectors.

use crate::circular::normalize_degrees;
use crate::direction::WindDirection;
use wind_common::DirectionGrid;

/// Picks the sectors that together cover `percent_min` of the valid pixels.
#[derive(Debug, Clone, Copy)]
pub struct SectorExtractor {
    percent_min: f64,
}

impl SectorExtractor {
    pub fn new(percent_min: f64) -> Self {
        Self { percent_min }
    }

    pub fn percent_min(&self) -> f64 {
        self.percent_min
    }

    /// Distinct sector values with their pixel count.
    ///
    /// Sorted by decreasing count; equal counts are ordered by increasing
    /// degree value so the selection is reproducible.
    pub fn sector_counts(grid: &DirectionGrid) -> Vec<(f64, usize)> {
        let mut values: Vec<f64> = grid
            .valid_values()
            .map(normalize_degrees)
            .collect();
        values.sort_by(f64::total_cmp);

        let mut counts: Vec<(f64, usize)> = Vec::new();
        for value in values {
            match counts.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => counts.push((value, 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.total_cmp(&b.0)));
        counts
    }

    /// Representative direction of one term, or `None` when every pixel is
    /// missing.
    pub fn extract(&self, grid: &DirectionGrid) -> Option<WindDirection> {
        let counts = Self::sector_counts(grid);
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return None;
        }

        let mut selected = Vec::new();
        let mut accumulated = 0usize;
        for (value, count) in counts {
            selected.push(value);
            accumulated += count;
            if accumulated as f64 * 100.0 >= self.percent_min * total as f64 {
                break;
            }
        }

        WindDirection::new(selected).ok()
    }
}

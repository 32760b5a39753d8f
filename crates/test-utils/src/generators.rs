//! Test data generators for valid-time series and direction grids.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use chrono::{DateTime, Duration, Utc};
use wind_common::DirectionGrid;

use crate::fixtures::time::reference_time;

/// Creates `periods` valid times starting at the reference time, `step_hours`
/// apart.
///
/// # Example
///
/// ```
/// use test_utils::generate_valid_times;
///
/// let times = generate_valid_times(3, 2);
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[1] - times[0], chrono::Duration::hours(2));
/// ```
pub fn generate_valid_times(periods: usize, step_hours: i64) -> Vec<DateTime<Utc>> {
    let start = reference_time();
    (0..periods)
        .map(|i| start + Duration::hours(i as i64 * step_hours))
        .collect()
}

/// Creates `periods` hourly valid times starting at the reference time.
pub fn hourly_valid_times(periods: usize) -> Vec<DateTime<Utc>> {
    generate_valid_times(periods, 1)
}

/// Valid times at the given hour offsets from the reference time.
pub fn valid_times_at(hours: &[i64]) -> Vec<DateTime<Utc>> {
    let start = reference_time();
    hours.iter().map(|h| start + Duration::hours(*h)).collect()
}

/// Creates a grid filled with a single sector value.
pub fn uniform_sector_grid(width: usize, height: usize, degrees: f64) -> DirectionGrid {
    DirectionGrid::new(width, height, vec![degrees; width * height])
        .expect("uniform grid has a consistent shape")
}

/// Creates a 2x2 grid from row-major values; `NaN` marks missing pixels.
pub fn grid_2x2(values: [[f64; 2]; 2]) -> DirectionGrid {
    let flat = values.iter().flatten().copied().collect();
    DirectionGrid::new(2, 2, flat).expect("2x2 grid has a consistent shape")
}

/// Creates a one-pixel grid; `NaN` marks a missing pixel.
pub fn single_pixel_grid(degrees: f64) -> DirectionGrid {
    uniform_sector_grid(1, 1, degrees)
}

/// One one-pixel grid per value.
pub fn single_pixel_series(values: &[f64]) -> Vec<DirectionGrid> {
    values.iter().copied().map(single_pixel_grid).collect()
}

/// Creates a grid of sector values scattered around `base`.
///
/// Each pixel takes `base` plus a deterministic offset of up to `spread`
/// sectors either way, snapped to 22.5° sectors.
pub fn scattered_sector_grid(
    width: usize,
    height: usize,
    base: f64,
    spread: u32,
    seed: u32,
) -> DirectionGrid {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            let offset = (hash % (2 * spread + 1)) as i64 - spread as i64;
            let degrees = (base + offset as f64 * 22.5).rem_euclid(360.0);
            data.push(degrees);
        }
    }
    DirectionGrid::new(width, height, data).expect("scattered grid has a consistent shape")
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_valid_times() {
        let times = generate_valid_times(4, 3);
        assert_eq!(times.len(), 4);
        assert_eq!(times[0], reference_time());
        assert_eq!(times[3] - times[0], Duration::hours(9));
    }

    #[test]
    fn test_valid_times_at() {
        let times = valid_times_at(&[0, 2, 3]);
        assert_eq!(times[1] - times[0], Duration::hours(2));
        assert_eq!(times[2] - times[1], Duration::hours(1));
    }

    #[test]
    fn test_grid_2x2_layout() {
        let grid = grid_2x2([[10.0, 22.0], [f64::NAN, 21.0]]);
        assert_eq!(grid.get(1, 0), Some(22.0));
        assert_eq!(grid.valid_count(), 3);
    }

    #[test]
    fn test_scattered_grid_stays_within_spread() {
        let grid = scattered_sector_grid(16, 16, 90.0, 2, 7);
        assert_eq!(grid.len(), 256);
        assert!(grid.valid_values().all(|v| (45.0..=135.0).contains(&v)));
    }

    #[test]
    fn test_scattered_grid_is_deterministic() {
        assert_eq!(
            scattered_sector_grid(8, 8, 0.0, 1, 42),
            scattered_sector_grid(8, 8, 0.0, 1, 42)
        );
    }
}

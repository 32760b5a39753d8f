//! Circular (mod 360) arithmetic on compass degrees.
//!
//! Naive `min`/`max` breaks as soon as a set of directions straddles north,
//! so every bound computed in this crate goes through [`enclosing_arc`].

/// Degrees in a full turn.
pub const FULL_CIRCLE: f64 = 360.0;

/// Width of one of the 16 compass sectors.
pub const DEGREES_SECTOR_SIZE: f64 = 22.5;

/// Number of compass sectors.
pub const SECTOR_COUNT: i64 = 16;

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= FULL_CIRCLE {
        0.0
    } else {
        normalized
    }
}

/// Shortest angular distance between two directions, in `[0, 180]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(FULL_CIRCLE - diff)
}

/// Minimal arc enclosing every angle of `degrees`.
///
/// Returns `(lower, upper)` with `upper` in `[0, 360)` and `lower <= upper`;
/// `lower` is negative when the arc crosses north. The arc is the circle minus
/// its largest gap between circularly consecutive angles. On a tie between the
/// wraparound gap and an inner gap the arc that does not cross north wins.
pub fn enclosing_arc(degrees: &[f64]) -> Option<(f64, f64)> {
    let mut sorted: Vec<f64> = degrees.iter().copied().map(normalize_degrees).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];

    let mut best_gap = first + FULL_CIRCLE - last;
    let mut arc = (first, last);

    for pair in sorted.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > best_gap {
            best_gap = gap;
            arc = (pair[1] - FULL_CIRCLE, pair[0]);
        }
    }

    Some(arc)
}

/// Angular size of the minimal enclosing arc.
pub fn circular_span(degrees: &[f64]) -> Option<f64> {
    enclosing_arc(degrees).map(|(lower, upper)| upper - lower)
}

/// Index (0..16) of the compass sector closest to `degrees`.
///
/// Halfway values round to the even sector, so 11.25° maps to N, not NNE.
pub fn sector_index(degrees: f64) -> u8 {
    let index = (normalize_degrees(degrees) / DEGREES_SECTOR_SIZE).round_ties_even() as i64;
    index.rem_euclid(SECTOR_COUNT) as u8
}

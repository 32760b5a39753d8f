//! Shared test utilities for the wind direction workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Valid-time series and direction grid generators
//! - Sector fixtures and reference times
//! - Test data path and temporary file helpers
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, hourly_valid_times, sectors};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::time::{hours_from_reference, reference_time, REFERENCE_TIME};
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of a direction's enclosing arc.
///
/// Works with anything exposing `lower_bound()` and `upper_bound()`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_bounds_approx_eq;
///
/// assert_bounds_approx_eq!(direction, (-30.0, 10.0), 1e-6);
/// ```
#[macro_export]
macro_rules! assert_bounds_approx_eq {
    ($direction:expr, ($lower:expr, $upper:expr), $epsilon:expr) => {{
        let direction = &$direction;
        $crate::assert_approx_eq!(direction.lower_bound(), $lower, $epsilon);
        $crate::assert_approx_eq!(direction.upper_bound(), $upper, $epsilon);
    }};
}

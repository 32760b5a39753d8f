//! Tests for wind directions, circular bounds and periods.

use chrono::Duration;
use test_utils::{assert_approx_eq, assert_bounds_approx_eq, hours_from_reference};
use wind_direction::{
    circular_distance, circular_span, enclosing_arc, Compass, WindDirection, WindDirectionError,
    WindDirectionPeriod,
};

fn wd(degrees: &[f64]) -> WindDirection {
    WindDirection::new(degrees.iter().copied()).unwrap()
}

fn period(begin: i64, end: i64, degrees: &[f64]) -> WindDirectionPeriod {
    WindDirectionPeriod::new(
        hours_from_reference(begin),
        hours_from_reference(end),
        wd(degrees),
    )
    .unwrap()
}

// ============================================================================
// Enclosing arc tests
// ============================================================================

#[test]
fn test_single_value_bounds() {
    let direction = wd(&[10.0]);
    assert_bounds_approx_eq!(direction, (10.0, 10.0), 1e-9);
    assert_eq!(direction.size(), 0.0);
    assert_eq!(direction.middle(), 10.0);
}

#[test]
fn test_bounds_without_wraparound() {
    let direction = wd(&[10.0, 20.0, 30.0]);
    assert_bounds_approx_eq!(direction, (10.0, 30.0), 1e-9);
    assert_approx_eq!(direction.middle(), 20.0, 1e-9);
}

#[test]
fn test_bounds_across_north() {
    let direction = wd(&[350.0, 10.0]);
    assert_bounds_approx_eq!(direction, (-10.0, 10.0), 1e-9);
    assert_approx_eq!(direction.size(), 20.0, 1e-9);
    assert_approx_eq!(direction.middle(), 0.0, 1e-9);
    assert_eq!(direction.sympo_code(), 0);
}

#[test]
fn test_bounds_across_north_unsorted_input() {
    let direction = wd(&[10.0, 330.0, 350.0, 0.0]);
    assert_bounds_approx_eq!(direction, (-30.0, 10.0), 1e-9);
    assert_approx_eq!(direction.middle(), 350.0, 1e-9);
}

#[test]
fn test_360_is_north() {
    let direction = wd(&[360.0, 10.0]);
    assert_eq!(direction.degrees(), &[0.0, 10.0]);
    assert_bounds_approx_eq!(direction, (0.0, 10.0), 1e-9);
}

#[test]
fn test_negative_degrees_are_normalized() {
    let direction = wd(&[-90.0]);
    assert_eq!(direction.degrees(), &[270.0]);
    assert_eq!(direction.compass(), Compass::W);
}

#[test]
fn test_half_circle_tie_prefers_non_wrapping_arc() {
    let direction = wd(&[0.0, 180.0]);
    assert_bounds_approx_eq!(direction, (0.0, 180.0), 1e-9);
    assert_approx_eq!(direction.middle(), 90.0, 1e-9);
}

#[test]
fn test_evenly_spread_values() {
    let direction = wd(&[0.0, 90.0, 180.0, 270.0]);
    assert_approx_eq!(direction.size(), 270.0, 1e-9);
}

#[test]
fn test_free_functions_agree_with_direction() {
    let values = [340.0, 20.0, 5.0];
    let direction = wd(&values);
    let (lower, upper) = enclosing_arc(&values).unwrap();
    assert_eq!((lower, upper), (direction.lower_bound(), direction.upper_bound()));
    assert_approx_eq!(circular_span(&values).unwrap(), 40.0, 1e-9);
    assert!(enclosing_arc(&[]).is_none());
}

#[test]
fn test_circular_distance() {
    assert_approx_eq!(circular_distance(350.0, 10.0), 20.0, 1e-9);
    assert_approx_eq!(circular_distance(0.0, 180.0), 180.0, 1e-9);
    assert_approx_eq!(circular_distance(90.0, 90.0), 0.0, 1e-9);
}

// ============================================================================
// Size, sympo code and comparison tests
// ============================================================================

#[test]
fn test_check_size_is_inclusive() {
    let direction = wd(&[0.0, 90.0]);
    assert!(direction.check_size(90.0));
    assert!(!direction.check_size(89.9));
}

#[test]
fn test_sympo_code_of_sectors() {
    assert_eq!(wd(&[0.0]).sympo_code(), 0);
    assert_eq!(wd(&[22.5]).sympo_code(), 1);
    assert_eq!(wd(&[90.0]).sympo_code(), 4);
    assert_eq!(wd(&[157.5]).sympo_code(), 7);
    assert_eq!(wd(&[337.5]).sympo_code(), 15);
    assert_eq!(wd(&[355.0]).sympo_code(), 0);
}

#[test]
fn test_sympo_code_uses_arc_middle() {
    // Middle of [10, 145] is 77.5, closest to ENE (67.5) rather than E (90).
    assert_eq!(wd(&[10.0, 145.0]).sympo_code(), 3);
}

#[test]
fn test_opposite_directions() {
    assert!(wd(&[0.0]).is_opposite_to(&wd(&[180.0])));
    assert!(wd(&[292.5]).is_opposite_to(&wd(&[112.5])));
    assert!(!wd(&[0.0]).is_opposite_to(&wd(&[157.5])));
    assert!(!wd(&[0.0]).is_opposite_to(&wd(&[0.0])));
}

#[test]
fn test_same_sector() {
    assert!(wd(&[0.0]).same_sector_as(&wd(&[350.0, 10.0])));
    assert!(!wd(&[0.0]).same_sector_as(&wd(&[22.5])));
}

#[test]
fn test_sum_is_member_union() {
    let sum = wd(&[10.0, 20.0]) + wd(&[20.0, 350.0]);
    assert_eq!(sum.degrees(), &[10.0, 20.0, 350.0]);
    assert_bounds_approx_eq!(sum, (-10.0, 20.0), 1e-9);

    let by_ref = &wd(&[10.0]) + &wd(&[30.0]);
    assert_eq!(by_ref, wd(&[30.0, 10.0]));
}

#[test]
fn test_equality_ignores_input_order_and_duplicates() {
    assert_eq!(wd(&[10.0, 20.0, 10.0]), wd(&[20.0, 10.0]));
    assert_ne!(wd(&[10.0]), wd(&[20.0]));
}

#[test]
fn test_invalid_directions() {
    assert!(matches!(
        WindDirection::new(Vec::new()),
        Err(WindDirectionError::InvalidInput(_))
    ));
    assert!(matches!(
        WindDirection::new([f64::INFINITY]),
        Err(WindDirectionError::NonFiniteDegree(_))
    ));
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_direction_json_roundtrip_as_degree_list() {
    let direction = wd(&[350.0, 10.0]);
    let json = serde_json::to_string(&direction).unwrap();
    assert_eq!(json, "[10.0,350.0]");

    let parsed: WindDirection = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, direction);
    assert_bounds_approx_eq!(parsed, (-10.0, 10.0), 1e-9);
}

#[test]
fn test_direction_deserialize_rejects_empty_list() {
    assert!(serde_json::from_str::<WindDirection>("[]").is_err());
}

// ============================================================================
// Period tests
// ============================================================================

#[test]
fn test_period_requires_begin_before_end() {
    let at = hours_from_reference(0);
    let err = WindDirectionPeriod::new(at, at, wd(&[0.0])).unwrap_err();
    assert!(matches!(err, WindDirectionError::InvalidPeriod { .. }));
}

#[test]
fn test_period_sum_spans_both_periods() {
    let sum = period(0, 1, &[10.0]) + period(3, 4, &[30.0]);
    assert_eq!(sum.begin_time(), hours_from_reference(0));
    assert_eq!(sum.end_time(), hours_from_reference(4));
    assert_eq!(sum.duration(), Duration::hours(4));
    assert_eq!(sum.direction(), &wd(&[10.0, 30.0]));
}

#[test]
fn test_period_update_within_budget() {
    let mut p = period(0, 2, &[0.0]);
    assert!(p.update(&period(2, 3, &[90.0]), 135.0));
    assert_eq!(p.end_time(), hours_from_reference(3));
    assert_bounds_approx_eq!(p.direction(), (0.0, 90.0), 1e-9);
}

#[test]
fn test_period_update_over_budget_leaves_period_untouched() {
    let mut p = period(0, 2, &[0.0]);
    let before = p.clone();
    assert!(!p.update(&period(2, 3, &[180.0]), 135.0));
    assert_eq!(p, before);
}

#[test]
fn test_period_direction_comparisons() {
    let north = period(0, 2, &[0.0]);
    let south = period(2, 4, &[180.0]);
    assert!(north.has_opposite_direction_to(&south));
    assert!(!north.has_same_direction_as(&south));
    assert!(north.has_same_direction_as(&period(4, 6, &[5.0])));
}

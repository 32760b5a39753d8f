//! JSON report printed by the CLI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::input::SeriesInput;
use wind_direction::{
    CoveragePolicy, DirectionTrend, WindDirectionPeriod, WindDirectionPeriodFinder, WindSummary,
};

/// One wind direction period, flattened for text generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub begin_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub degrees: Vec<f64>,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub middle: f64,
    pub sympo_code: u8,
    pub compass: String,
    pub label: String,
}

impl From<&WindDirectionPeriod> for PeriodReport {
    fn from(period: &WindDirectionPeriod) -> Self {
        let direction = period.direction();
        Self {
            begin_time: period.begin_time(),
            end_time: period.end_time(),
            degrees: direction.degrees().to_vec(),
            lower_bound: direction.lower_bound(),
            upper_bound: direction.upper_bound(),
            middle: direction.middle(),
            sympo_code: direction.sympo_code(),
            compass: direction.compass().to_string(),
            label: direction.describe(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub coverage_policy: CoveragePolicy,
    pub begin_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub terms: usize,
    pub usable_terms: usize,
    pub periods: Vec<PeriodReport>,
    pub trend: Option<DirectionTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<WindSummary>,
}

impl Report {
    /// Run the finder on `input` and assemble the report.
    pub fn build(finder: &WindDirectionPeriodFinder, input: SeriesInput) -> Result<Self> {
        let (terms, summary, periods) = match input {
            SeriesInput::Fields { series, kept_times } => {
                let output = finder.run(&series, kept_times.as_deref())?;
                (output.terms, Some(output.summary), output.periods)
            }
            SeriesInput::Directions(table) => {
                let periods = finder.find_periods(&table);
                (table, None, periods)
            }
        };

        let range = terms.time_range();
        info!(
            terms = terms.len(),
            periods = periods.len(),
            begin = %range.start,
            end = %range.end,
            "Built wind direction report"
        );

        Ok(Self {
            coverage_policy: finder.config().coverage_policy,
            begin_time: range.start,
            end_time: range.end,
            terms: terms.len(),
            usable_terms: terms.usable_count(),
            trend: DirectionTrend::from_periods(&periods),
            periods: periods.iter().map(PeriodReport::from).collect(),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{hours_from_reference, service_testdata_dir};
    use wind_direction::{FinderConfig, TermTable, WindDirection};

    #[test]
    fn test_sample_series_report() {
        let path = service_testdata_dir("wind-periods").join("veering_series.yaml");
        let input = SeriesInput::load(&path).unwrap();
        let report = Report::build(&WindDirectionPeriodFinder::default(), input).unwrap();

        assert_eq!(report.terms, 8);
        assert_eq!(report.usable_terms, 8);
        assert_eq!(report.begin_time, hours_from_reference(-1));
        assert_eq!(report.periods.len(), 2);
        assert_eq!(report.periods[0].compass, "N");
        assert_eq!(report.periods[0].label, "NNW to NNE");
        assert_eq!(report.periods[0].end_time, hours_from_reference(2));
        assert_eq!(report.periods[1].sympo_code, 8);
        assert_eq!(report.periods[1].label, "SSE to SSW");
        assert_eq!(report.trend, Some(DirectionTrend::Opposite));
        assert_eq!(report.summary.as_ref().map(WindSummary::len), Some(8));
    }

    #[test]
    fn test_directions_report_has_no_summary() {
        let times = vec![hours_from_reference(0), hours_from_reference(1)];
        let table = TermTable::from_directions(
            &times,
            vec![
                Some(WindDirection::new([270.0]).unwrap()),
                Some(WindDirection::new([292.5]).unwrap()),
            ],
        )
        .unwrap();

        let finder = WindDirectionPeriodFinder::new(FinderConfig {
            coverage_policy: CoveragePolicy::Strict,
            ..FinderConfig::default()
        });
        let report = Report::build(&finder, SeriesInput::Directions(table)).unwrap();

        assert!(report.summary.is_none());
        assert_eq!(report.periods.len(), 1);
        assert_eq!(report.periods[0].label, "W to WNW");
        assert_eq!(report.trend, Some(DirectionTrend::Steady));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["coverage_policy"], "strict");
        assert!(json.get("summary").is_none());
        assert_eq!(json["periods"][0]["lower_bound"], 270.0);
    }

    #[test]
    fn test_empty_report() {
        let times = vec![hours_from_reference(0), hours_from_reference(1)];
        let table = TermTable::from_directions(&times, vec![None, None]).unwrap();
        let report =
            Report::build(&WindDirectionPeriodFinder::default(), SeriesInput::Directions(table))
                .unwrap();

        assert!(report.periods.is_empty());
        assert_eq!(report.trend, None);
        assert_eq!(report.usable_terms, 0);
    }
}

//! Configuration for the wind direction period finder.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WindDirectionError};

/// Default share (in percent) of valid pixels the extracted sectors must cover.
pub const PERCENT_MIN: f64 = 100.0;

/// Configuration for [`WindDirectionPeriodFinder`](crate::WindDirectionPeriodFinder).
///
/// The angular budgets and the minimum period duration are fixed constants of
/// the finder; only the extraction threshold and the post-processing policy
/// can be tuned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Cumulative share of valid pixels (0-100] the representative sectors
    /// of a term must cover.
    pub percent_min: f64,

    /// How found periods are checked against the requested time window.
    pub coverage_policy: CoveragePolicy,

    /// Extract term directions in parallel before segmentation.
    pub parallel_extraction: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            percent_min: PERCENT_MIN,
            coverage_policy: CoveragePolicy::FirstAndLast,
            parallel_extraction: true,
        }
    }
}

impl FinderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `WIND_*` environment variables when set.
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var("WIND_PERCENT_MIN") {
            if let Ok(percent) = val.parse() {
                self.percent_min = percent;
            }
        }

        if let Ok(val) = std::env::var("WIND_COVERAGE_POLICY") {
            if let Some(policy) = CoveragePolicy::from_str(&val) {
                self.coverage_policy = policy;
            }
        }

        if let Ok(val) = std::env::var("WIND_PARALLEL_EXTRACTION") {
            self.parallel_extraction = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.percent_min > 0.0 && self.percent_min <= 100.0) {
            return Err(WindDirectionError::config(format!(
                "percent_min must be in (0, 100], got {}",
                self.percent_min
            )));
        }

        Ok(())
    }
}

/// Post-processing applied to the periods found by the segmentation scan.
///
/// Coverage holds when the first period starts at the first term's begin time
/// and the last period ends at the last term's end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    /// A single period is always kept. Several periods need coverage, and
    /// then only the first and the last are kept.
    #[default]
    FirstAndLast,
    /// Coverage is required even for a single period; keeps the first and
    /// the last period.
    Strict,
    /// Coverage is required; every period is kept.
    KeepAll,
}

impl CoveragePolicy {
    /// Parse from string (case-insensitive, `-` or `_` separated).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_and_last" => Some(Self::FirstAndLast),
            "strict" => Some(Self::Strict),
            "keep_all" => Some(Self::KeepAll),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstAndLast => "first_and_last",
            Self::Strict => "strict",
            Self::KeepAll => "keep_all",
        }
    }
}

impl std::fmt::Display for CoveragePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

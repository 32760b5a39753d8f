//! Finder configuration assembly for the CLI.
//!
//! Precedence, lowest first: defaults, YAML file, `WIND_*` environment
//! variables (including those loaded from `.env`), command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use wind_direction::{CoveragePolicy, FinderConfig};

/// Command-line values overriding the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub coverage_policy: Option<String>,
    pub percent_min: Option<f64>,
    pub sequential: bool,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut FinderConfig) -> Result<()> {
        if let Some(policy) = &self.coverage_policy {
            config.coverage_policy = match CoveragePolicy::from_str(policy) {
                Some(policy) => policy,
                None => bail!(
                    "Unknown coverage policy '{}', expected first_and_last, strict or keep_all",
                    policy
                ),
            };
        }
        if let Some(percent) = self.percent_min {
            config.percent_min = percent;
        }
        if self.sequential {
            config.parallel_extraction = false;
        }
        Ok(())
    }
}

/// Read a finder configuration from a YAML file. Missing keys keep their
/// default value.
pub fn load_config_file(path: &Path) -> Result<FinderConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Build and validate the finder configuration.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<FinderConfig> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None => FinderConfig::default(),
    };
    config.apply_env();
    overrides.apply(&mut config)?;
    config.validate().context("Invalid finder configuration")?;
    Ok(config)
}

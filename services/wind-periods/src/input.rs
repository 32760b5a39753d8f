//! Series input files.
//!
//! A series file lists the valid times of the terms, either explicitly or as
//! a reference time plus forecast hours, and then one of:
//!
//! - `fields`: one direction grid per valid time (`null` marks a missing
//!   pixel), with an optional `mask` shared by every grid
//! - `directions`: one pre-extracted direction per valid time, as a list of
//!   degrees or `null`
//!
//! ```yaml
//! reference_time: "2023-01-02T00:00:00Z"
//! forecast_hours: [0, 1, 2]
//! fields:
//!   - { width: 2, height: 1, values: [10.0, 20.0] }
//!   - { width: 2, height: 1, values: [10.0, null] }
//!   - { width: 2, height: 1, values: [190.0, 190.0] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use wind_common::{DirectionGrid, ValidTime};
use wind_direction::{DirectionSeries, TermTable, WindDirection};

/// One direction field as written in a series file.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldFile {
    pub width: usize,
    pub height: usize,
    pub values: Vec<Option<f64>>,
}

/// Raw content of a series file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesFile {
    #[serde(default)]
    pub valid_times: Option<Vec<String>>,
    #[serde(default)]
    pub reference_time: Option<String>,
    #[serde(default)]
    pub forecast_hours: Option<Vec<u32>>,
    #[serde(default)]
    pub fields: Option<Vec<FieldFile>>,
    #[serde(default)]
    pub mask: Option<Vec<bool>>,
    #[serde(default)]
    pub directions: Option<Vec<Option<Vec<f64>>>>,
    #[serde(default)]
    pub kept_times: Option<Vec<String>>,
}

/// A parsed and validated series input.
#[derive(Debug, Clone)]
pub enum SeriesInput {
    /// Direction fields, extracted by the finder.
    Fields {
        series: DirectionSeries,
        kept_times: Option<Vec<DateTime<Utc>>>,
    },
    /// Directions already extracted per term.
    Directions(TermTable),
}

impl SeriesInput {
    /// Load a series file; `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read series file {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let file: SeriesFile = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML series file {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON series file {}", path.display()))?
        };

        let input = Self::from_file(file)?;
        debug!(path = %path.display(), terms = input.len(), "Loaded series file");
        Ok(input)
    }

    pub fn from_file(file: SeriesFile) -> Result<Self> {
        let valid_times = resolve_valid_times(&file)?;

        match (file.fields, file.directions) {
            (Some(fields), None) => {
                let grids = fields
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| to_grid(field, file.mask.as_deref(), idx))
                    .collect::<Result<Vec<_>>>()?;
                let series = DirectionSeries::new(valid_times, grids)?;
                let kept_times = file
                    .kept_times
                    .as_deref()
                    .map(parse_times)
                    .transpose()
                    .context("Invalid kept_times")?;
                Ok(Self::Fields { series, kept_times })
            }
            (None, Some(directions)) => {
                if file.kept_times.is_some() {
                    bail!("kept_times only applies to fields, list the kept directions instead");
                }
                if file.mask.is_some() {
                    bail!("mask only applies to fields");
                }
                let directions = directions
                    .into_iter()
                    .map(|degrees| degrees.map(WindDirection::new).transpose())
                    .collect::<wind_direction::Result<Vec<_>>>()?;
                Ok(Self::Directions(TermTable::from_directions(
                    &valid_times,
                    directions,
                )?))
            }
            (Some(_), Some(_)) => bail!("A series file holds either fields or directions, not both"),
            (None, None) => bail!("A series file needs fields or directions"),
        }
    }

    /// Number of timesteps in the input.
    pub fn len(&self) -> usize {
        match self {
            Self::Fields { series, .. } => series.len(),
            Self::Directions(table) => table.len(),
        }
    }
}

fn resolve_valid_times(file: &SeriesFile) -> Result<Vec<DateTime<Utc>>> {
    match (&file.valid_times, &file.reference_time, &file.forecast_hours) {
        (Some(times), None, None) => parse_times(times).context("Invalid valid_times"),
        (None, Some(reference), Some(hours)) => {
            let reference = ValidTime::from_iso8601(reference).context("Invalid reference_time")?;
            Ok(ValidTime::expand(reference, hours))
        }
        _ => bail!("A series file needs either valid_times or reference_time with forecast_hours"),
    }
}

fn parse_times(times: &[String]) -> Result<Vec<DateTime<Utc>>> {
    times
        .iter()
        .map(|time| ValidTime::from_iso8601(time).map_err(anyhow::Error::from))
        .collect()
}

fn to_grid(field: &FieldFile, mask: Option<&[bool]>, idx: usize) -> Result<DirectionGrid> {
    let values = field
        .values
        .iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect();
    let grid = DirectionGrid::new(field.width, field.height, values)
        .with_context(|| format!("Invalid field at index {}", idx))?;

    match mask {
        Some(mask) => grid
            .with_mask(mask.to_vec())
            .with_context(|| format!("Mask does not fit field at index {}", idx)),
        None => Ok(grid),
    }
}

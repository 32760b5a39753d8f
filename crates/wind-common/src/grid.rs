//! Gridded wind direction fields.

use thiserror::Error;

/// Errors raised while assembling a direction grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid {width}x{height} expects {expected} values, got {actual}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("mask has {actual} cells but grid has {expected}")]
    MaskMismatch { expected: usize, actual: usize },
}

/// A 2-D field of per-pixel dominant wind direction sectors (degrees).
///
/// Values are stored row-major as `f64`. Missing pixels are `NaN`; pixels
/// outside the domain of interest are flagged `false` in the optional mask
/// and are treated as missing too.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
    mask: Option<Vec<bool>>,
}

impl DirectionGrid {
    /// Create a grid, checking that `values` matches `width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Result<Self, GridError> {
        let expected = width * height;
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                width,
                height,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
            mask: None,
        })
    }

    /// Grid from rows of optional values (`None` = missing pixel).
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                actual: values.len(),
            });
        }
        let values: Vec<f64> = rows
            .iter()
            .flat_map(|row| row.iter().map(|v| v.unwrap_or(f64::NAN)))
            .collect();
        Self::new(width, height, values)
    }

    /// Restrict the grid to a domain of interest.
    pub fn with_mask(mut self, mask: Vec<bool>) -> Result<Self, GridError> {
        if mask.len() != self.values.len() {
            return Err(GridError::MaskMismatch {
                expected: self.values.len(),
                actual: mask.len(),
            });
        }
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at column `i`, row `j`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.values.get(j * self.width + i).copied()
    }

    /// Iterate over pixels that are neither missing nor masked out.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(move |(idx, _)| self.mask.as_ref().map_or(true, |m| m[*idx]))
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
    }

    /// Number of valid pixels.
    pub fn valid_count(&self) -> usize {
        self.valid_values().count()
    }
}

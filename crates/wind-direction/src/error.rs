//! Error types for wind direction processing.

use thiserror::Error;
use wind_common::GridError;

/// Errors that can occur while building directions, periods or term tables.
#[derive(Error, Debug, PartialEq)]
pub enum WindDirectionError {
    /// A wind direction was built from no degree value at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A degree value is NaN or infinite.
    #[error("non-finite degree value: {0}")]
    NonFiniteDegree(f64),

    /// A period does not satisfy `begin < end`.
    #[error("invalid period: begin {begin} is not before end {end}")]
    InvalidPeriod { begin: String, end: String },

    /// The series is malformed (length mismatch, ordering, emptiness).
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// A kept valid time is not part of the series.
    #[error("kept time {0} is not a valid time of the series")]
    UnknownKeptTime(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Grid construction error.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl WindDirectionError {
    /// Create an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an InvalidSeries error.
    pub fn invalid_series(msg: impl Into<String>) -> Self {
        Self::InvalidSeries(msg.into())
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for wind direction operations.
pub type Result<T> = std::result::Result<T, WindDirectionError>;

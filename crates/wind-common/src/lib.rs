//! Common types shared across the wind direction workspace.

pub mod grid;
pub mod time;

pub use grid::{DirectionGrid, GridError};
pub use time::{preceding_time, TimeParseError, TimeRange, ValidTime};

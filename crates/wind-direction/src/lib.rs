//! Wind direction period finder.
//!
//! Turns a series of per-term wind direction fields into the few contiguous
//! periods a forecast text can describe with a single direction each.
//!
//! # Pipeline
//!
//! ```text
//! DirectionSeries (one DirectionGrid per valid time)
//!      │
//!      ├─► SectorExtractor::extract      sectors covering PERCENT_MIN of pixels
//!      │                                  (parallel over terms)
//!      ├─► per-term size check            ≤ 90°, else term is None
//!      │
//!      ▼
//! TermTable ──► segmentation scan ──► coverage check ──► Vec<WindDirectionPeriod>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use wind_direction::{FinderConfig, TermTable, WindDirection, WindDirectionPeriodFinder};
//!
//! let table = TermTable::from_directions(&valid_times, directions)?;
//! let finder = WindDirectionPeriodFinder::new(FinderConfig::default());
//! for period in finder.find_periods(&table) {
//!     println!("{}", period);
//! }
//! ```

pub mod circular;
pub mod config;
pub mod direction;
pub mod error;
pub mod extraction;
pub mod finder;
pub mod period;
pub mod series;
pub mod summary;
pub mod terms;

// Re-export commonly used types at crate root
pub use circular::{
    circular_distance, circular_span, enclosing_arc, normalize_degrees, DEGREES_SECTOR_SIZE,
};
pub use config::{CoveragePolicy, FinderConfig, PERCENT_MIN};
pub use direction::{Compass, WindDirection};
pub use error::{Result, WindDirectionError};
pub use extraction::SectorExtractor;
pub use finder::{DirectionTrend, FinderOutput, WindDirectionPeriodFinder};
pub use period::WindDirectionPeriod;
pub use series::DirectionSeries;
pub use summary::{TermSummary, WindSummary};
pub use terms::{retain_term_direction, TermPeriod, TermTable};
pub use wind_common::DirectionGrid;

//! stockchart: data-side core of a stock chart with a range selector.
//!
//! [`core`] answers boundary and extremum queries over time-sorted series,
//! and [`selector`] keeps an overview chart's range selection consistent with
//! the range the main chart displays. Rendering and gesture recognition stay
//! with the host toolkit.

pub mod core;
pub mod error;
pub mod selector;
pub mod telemetry;

pub use crate::core::{DataPoint, Range, SortedRangeQuery};
pub use error::{ChartError, ChartResult};
pub use selector::{RangeSelectorConfig, RangeSelectorController, RangeSelectorDelegate};

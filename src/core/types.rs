use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One sample of a time series, sorted by `x` (unix seconds) and valued by `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a sample from a quote timestamp and a decimal price.
    ///
    /// The timestamp keeps millisecond precision as fractional seconds.
    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        let y = price.to_f64().ok_or_else(|| {
            ChartError::InvalidData(format!("price {price} cannot be represented as f64"))
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        })
    }
}

/// Closed interval over the chart domain.
///
/// Invariants:
/// - both bounds are finite
/// - `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = ChartError;

    fn try_from(raw: RawRange) -> ChartResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Range {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from bounds already known to satisfy the invariants.
    pub(crate) fn from_ordered(min: f64, max: f64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn contains_range(self, other: Range) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::sorted_query::{
    check_sorted_by, index_of_biggest_smaller_than_by_key, index_of_smallest_bigger_than_by_key,
    max_in_range_by, min_in_range_by,
};
use crate::core::{DataPoint, Range};
use crate::error::ChartResult;

/// Lowest and highest sample of a window, ranked by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueExtent {
    pub low: DataPoint,
    pub high: DataPoint,
}

impl ValueExtent {
    #[must_use]
    pub fn value_range(self) -> (f64, f64) {
        (self.low.y, self.high.y)
    }
}

/// Orders samples by time.
#[must_use]
pub fn by_time(a: &DataPoint, b: &DataPoint) -> Ordering {
    OrderedFloat(a.x).cmp(&OrderedFloat(b.x))
}

/// Orders samples by value.
#[must_use]
pub fn by_value(a: &DataPoint, b: &DataPoint) -> Ordering {
    OrderedFloat(a.y).cmp(&OrderedFloat(b.y))
}

/// Fails with the first index whose time is earlier than its predecessor's.
///
/// Window queries only check order in debug builds; call this once on
/// untrusted series.
pub fn ensure_time_sorted(points: &[DataPoint]) -> ChartResult<()> {
    check_sorted_by(points, 0..points.len(), by_time)
}

/// Returns the inclusive index span of samples whose time lies inside `range`.
///
/// `points` must be sorted ascending by time. Returns `None` when no sample
/// falls inside the window.
pub fn visible_index_range(
    points: &[DataPoint],
    range: Range,
) -> ChartResult<Option<RangeInclusive<usize>>> {
    let full = 0..points.len();
    let time = |point: &DataPoint| OrderedFloat(point.x);

    let first = match index_of_biggest_smaller_than_by_key(
        points,
        &OrderedFloat(range.min()),
        full.clone(),
        time,
    )? {
        Some(index) => index + 1,
        None => 0,
    };
    let past_last =
        index_of_smallest_bigger_than_by_key(points, &OrderedFloat(range.max()), full, time)?
            .unwrap_or(points.len());

    if first >= past_last {
        return Ok(None);
    }
    Ok(Some(first..=past_last - 1))
}

/// Returns the samples whose time lies inside `range` without copying them.
pub fn points_in_time_window(points: &[DataPoint], range: Range) -> ChartResult<&[DataPoint]> {
    Ok(match visible_index_range(points, range)? {
        Some(indices) => &points[indices],
        None => &[],
    })
}

/// Returns the lowest and highest valued samples inside the time window.
///
/// Used to autoscale the value axis to the visible portion of a series.
pub fn visible_value_extent(
    points: &[DataPoint],
    range: Range,
) -> ChartResult<Option<ValueExtent>> {
    let Some(indices) = visible_index_range(points, range)? else {
        return Ok(None);
    };
    let (start, end) = indices.into_inner();
    let low = *min_in_range_by(points, start, end, by_value)?;
    let high = *max_in_range_by(points, start, end, by_value)?;
    Ok(Some(ValueExtent { low, high }))
}

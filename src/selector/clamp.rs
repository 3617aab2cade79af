//! Pure selection geometry.
//!
//! Every function here maps `(selection, bounds, minimum span, input)` to a new
//! selection, so the policies can be exercised without a controller.

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

use super::DragTarget;

/// Fails when `bounds` cannot hold a selection of `minimum_span`.
pub fn ensure_span_satisfiable(bounds: Range, minimum_span: f64) -> ChartResult<()> {
    if bounds.span() < minimum_span {
        return Err(ChartError::UnsatisfiableMinimumSpan {
            minimum_span,
            available: bounds.span(),
        });
    }
    Ok(())
}

/// Fits `previous` into `bounds`.
///
/// - without a previous selection the whole of `bounds` is selected
/// - a previous selection already inside `bounds` and at least `minimum_span`
///   wide is returned unchanged
/// - otherwise the selection keeps its width (widened to `minimum_span` when
///   narrower) and is translated inside `bounds`; when that width exceeds
///   `bounds` the selection shrinks to `bounds`
pub fn reconcile_selection(
    previous: Option<Range>,
    bounds: Range,
    minimum_span: f64,
) -> ChartResult<Range> {
    ensure_span_satisfiable(bounds, minimum_span)?;

    let Some(previous) = previous else {
        return Ok(bounds);
    };
    if bounds.contains_range(previous) && previous.span() >= minimum_span {
        return Ok(previous);
    }

    let width = previous.span().max(minimum_span);
    if width >= bounds.span() {
        return Ok(bounds);
    }
    Ok(place_within(previous.min(), width, bounds))
}

/// Applies a cumulative drag `offset` to the selection captured at drag start.
///
/// Handles stop `minimum_span` short of the opposite handle and at `bounds`;
/// dragging the selection body moves both handles and keeps the width.
#[must_use]
pub fn apply_drag(
    target: DragTarget,
    origin: Range,
    offset: f64,
    bounds: Range,
    minimum_span: f64,
) -> Range {
    match target {
        DragTarget::LowerHandle => {
            let mut min = (origin.min() + offset)
                .min(origin.max() - minimum_span)
                .max(bounds.min());
            while origin.max() - min < minimum_span && min > bounds.min() {
                min = min.next_down();
            }
            Range::from_ordered(min.min(origin.max()), origin.max())
        }
        DragTarget::UpperHandle => {
            let mut max = (origin.max() + offset)
                .max(origin.min() + minimum_span)
                .min(bounds.max());
            while max - origin.min() < minimum_span && max < bounds.max() {
                max = max.next_up();
            }
            Range::from_ordered(origin.min(), max.max(origin.min()))
        }
        DragTarget::Selection => place_within(origin.min() + offset, origin.span(), bounds),
    }
}

/// Places a selection of at least `width` inside `bounds`, which must be at
/// least `width` wide.
///
/// `min + width` can round below `width` apart, so the free bound is nudged
/// outward one ulp at a time until the span holds.
fn place_within(desired_min: f64, width: f64, bounds: Range) -> Range {
    let mut min = desired_min.min(bounds.max() - width).max(bounds.min());
    let mut max = (min + width).min(bounds.max());
    while max - min < width {
        if max < bounds.max() {
            max = max.next_up();
        } else if min > bounds.min() {
            min = min.next_down();
        } else {
            break;
        }
    }
    Range::from_ordered(min, max)
}

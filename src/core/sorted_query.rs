//! Boundary and extremum queries over sorted slices.
//!
//! Boundary searches take a half-open index window `start..end` and assume the
//! window is sorted ascending under the supplied comparator. In debug builds the
//! window order is verified before searching and a violation is reported as
//! [`ChartError::UnsortedInputViolation`]. Release builds skip the check; call
//! [`check_sorted_by`] explicitly when the input is untrusted.
//!
//! Extremum queries take an inclusive window `[start, end]` and scan every
//! element, since the value they rank by is independent of the sort order.
//!
//! Conventions:
//! - "not found" is `None`, never an index
//! - with duplicate keys, `index_of_smallest_bigger_than*` returns the leftmost
//!   element strictly greater than the key and `index_of_biggest_smaller_than*`
//!   the rightmost element strictly smaller than it
//! - extremum ties resolve to the first occurrence

use std::cmp::Ordering;
use std::ops::Range as IndexRange;

use crate::error::{ChartError, ChartResult};

/// Verifies that `items[range]` is sorted ascending under `compare`.
pub fn check_sorted_by<T, F>(
    items: &[T],
    range: IndexRange<usize>,
    mut compare: F,
) -> ChartResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let window = search_window(items, &range)?;
    match window
        .windows(2)
        .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
    {
        Some(offset) => Err(ChartError::UnsortedInputViolation {
            index: range.start + offset + 1,
        }),
        None => Ok(()),
    }
}

/// Returns the window boundary after every element `<= key`.
///
/// Equals `range.end` when no element in the window is greater than `key`.
pub fn upper_bound_by<T, F>(
    items: &[T],
    key: &T,
    range: IndexRange<usize>,
    mut compare: F,
) -> ChartResult<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let window = search_window(items, &range)?;
    verify_order(items, &range, &mut compare)?;
    let below_or_equal = window.partition_point(|item| compare(item, key) != Ordering::Greater);
    Ok(range.start + below_or_equal)
}

/// Returns the window boundary after every element `< key`.
///
/// Equals `range.end` when no element in the window is greater than or equal to `key`.
pub fn lower_bound_by<T, F>(
    items: &[T],
    key: &T,
    range: IndexRange<usize>,
    mut compare: F,
) -> ChartResult<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let window = search_window(items, &range)?;
    verify_order(items, &range, &mut compare)?;
    let below = window.partition_point(|item| compare(item, key) == Ordering::Less);
    Ok(range.start + below)
}

/// Index of the first element in `range` strictly greater than `key`.
pub fn index_of_smallest_bigger_than_by<T, F>(
    items: &[T],
    key: &T,
    range: IndexRange<usize>,
    compare: F,
) -> ChartResult<Option<usize>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let end = range.end;
    let boundary = upper_bound_by(items, key, range, compare)?;
    Ok((boundary < end).then_some(boundary))
}

/// Index of the last element in `range` strictly smaller than `key`.
pub fn index_of_biggest_smaller_than_by<T, F>(
    items: &[T],
    key: &T,
    range: IndexRange<usize>,
    compare: F,
) -> ChartResult<Option<usize>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let start = range.start;
    let boundary = lower_bound_by(items, key, range, compare)?;
    Ok((boundary > start).then(|| boundary - 1))
}

/// Key-extraction form of [`index_of_smallest_bigger_than_by`].
pub fn index_of_smallest_bigger_than_by_key<T, K, F>(
    items: &[T],
    key: &K,
    range: IndexRange<usize>,
    mut extract: F,
) -> ChartResult<Option<usize>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let window = search_window(items, &range)?;
    verify_order(items, &range, |a: &T, b: &T| extract(a).cmp(&extract(b)))?;
    let boundary = range.start + window.partition_point(|item| extract(item) <= *key);
    Ok((boundary < range.end).then_some(boundary))
}

/// Key-extraction form of [`index_of_biggest_smaller_than_by`].
pub fn index_of_biggest_smaller_than_by_key<T, K, F>(
    items: &[T],
    key: &K,
    range: IndexRange<usize>,
    mut extract: F,
) -> ChartResult<Option<usize>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let window = search_window(items, &range)?;
    verify_order(items, &range, |a: &T, b: &T| extract(a).cmp(&extract(b)))?;
    let boundary = range.start + window.partition_point(|item| extract(item) < *key);
    Ok((boundary > range.start).then(|| boundary - 1))
}

/// Element with the smallest value under `compare` in `items[start..=end]`.
pub fn min_in_range_by<T, F>(
    items: &[T],
    start: usize,
    end: usize,
    mut compare: F,
) -> ChartResult<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    extremum(items, start, end, |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

/// Element with the largest value under `compare` in `items[start..=end]`.
pub fn max_in_range_by<T, F>(
    items: &[T],
    start: usize,
    end: usize,
    mut compare: F,
) -> ChartResult<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    extremum(items, start, end, |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

/// Key-extraction form of [`min_in_range_by`].
pub fn min_in_range_by_key<T, K, F>(
    items: &[T],
    start: usize,
    end: usize,
    mut extract: F,
) -> ChartResult<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    min_in_range_by(items, start, end, |a, b| extract(a).cmp(&extract(b)))
}

/// Key-extraction form of [`max_in_range_by`].
pub fn max_in_range_by_key<T, K, F>(
    items: &[T],
    start: usize,
    end: usize,
    mut extract: F,
) -> ChartResult<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    max_in_range_by(items, start, end, |a, b| extract(a).cmp(&extract(b)))
}

/// Slice extension exposing the queries as methods.
///
/// The plain methods use `T`'s own `Ord`. For `min_in_range` and
/// `max_in_range` that is the order the slice is sorted by, so they land on the
/// window ends; rank by another field with the `_by_key` forms.
pub trait SortedRangeQuery<T> {
    fn index_of_smallest_bigger_than(
        &self,
        key: &T,
        range: IndexRange<usize>,
    ) -> ChartResult<Option<usize>>
    where
        T: Ord;

    fn index_of_biggest_smaller_than(
        &self,
        key: &T,
        range: IndexRange<usize>,
    ) -> ChartResult<Option<usize>>
    where
        T: Ord;

    fn min_in_range(&self, start: usize, end: usize) -> ChartResult<&T>
    where
        T: Ord;

    fn max_in_range(&self, start: usize, end: usize) -> ChartResult<&T>
    where
        T: Ord;

    fn min_in_range_by_key<K, F>(&self, start: usize, end: usize, extract: F) -> ChartResult<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K;

    fn max_in_range_by_key<K, F>(&self, start: usize, end: usize, extract: F) -> ChartResult<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

impl<T> SortedRangeQuery<T> for [T] {
    fn index_of_smallest_bigger_than(
        &self,
        key: &T,
        range: IndexRange<usize>,
    ) -> ChartResult<Option<usize>>
    where
        T: Ord,
    {
        index_of_smallest_bigger_than_by(self, key, range, T::cmp)
    }

    fn index_of_biggest_smaller_than(
        &self,
        key: &T,
        range: IndexRange<usize>,
    ) -> ChartResult<Option<usize>>
    where
        T: Ord,
    {
        index_of_biggest_smaller_than_by(self, key, range, T::cmp)
    }

    fn min_in_range(&self, start: usize, end: usize) -> ChartResult<&T>
    where
        T: Ord,
    {
        min_in_range_by(self, start, end, T::cmp)
    }

    fn max_in_range(&self, start: usize, end: usize) -> ChartResult<&T>
    where
        T: Ord,
    {
        max_in_range_by(self, start, end, T::cmp)
    }

    fn min_in_range_by_key<K, F>(&self, start: usize, end: usize, extract: F) -> ChartResult<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        min_in_range_by_key(self, start, end, extract)
    }

    fn max_in_range_by_key<K, F>(&self, start: usize, end: usize, extract: F) -> ChartResult<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        max_in_range_by_key(self, start, end, extract)
    }
}

fn search_window<'a, T>(items: &'a [T], range: &IndexRange<usize>) -> ChartResult<&'a [T]> {
    items.get(range.clone()).ok_or(ChartError::OutOfBoundsRange {
        start: range.start,
        end: range.end,
        len: items.len(),
    })
}

fn verify_order<T, F>(items: &[T], range: &IndexRange<usize>, compare: F) -> ChartResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if cfg!(debug_assertions) {
        check_sorted_by(items, range.clone(), compare)
    } else {
        Ok(())
    }
}

fn extremum<T, F>(items: &[T], start: usize, end: usize, mut replaces: F) -> ChartResult<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let out_of_bounds = ChartError::OutOfBoundsRange {
        start,
        end,
        len: items.len(),
    };
    if start > end {
        return Err(out_of_bounds);
    }
    items
        .get(start..=end)
        .and_then(|window| {
            window
                .iter()
                .reduce(|best, candidate| {
                    if replaces(candidate, best) {
                        candidate
                    } else {
                        best
                    }
                })
        })
        .ok_or(out_of_bounds)
}

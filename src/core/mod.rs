pub mod sorted_query;
pub mod types;
pub mod windowing;

pub use sorted_query::{
    SortedRangeQuery, check_sorted_by, index_of_biggest_smaller_than_by,
    index_of_biggest_smaller_than_by_key, index_of_smallest_bigger_than_by,
    index_of_smallest_bigger_than_by_key, lower_bound_by, max_in_range_by, max_in_range_by_key,
    min_in_range_by, min_in_range_by_key, upper_bound_by,
};
pub use types::{DataPoint, Range};
pub use windowing::{
    ValueExtent, by_time, by_value, ensure_time_sorted, points_in_time_window,
    visible_index_range, visible_value_extent,
};

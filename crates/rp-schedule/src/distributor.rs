//! Even distribution of an ordered sequence across a fixed number of days.
//!
//! # Algorithm
//!
//! Greedy and front-loaded.  A cursor walks the sequence; at each day `b`
//! (1-based, `D` days in total) the day takes
//!
//! ```text
//! take = ceil(remaining_items / remaining_days)
//!      = ceil((N - cursor) / (D - b + 1))
//! ```
//!
//! items starting at the cursor.  Recomputing the quotient at every step
//! (rather than once up front) means rounding never accumulates: the sizes
//! differ by at most one, larger days come first, and the last day always
//! absorbs exactly what is left.
//!
//! Worked example, 7 items over 3 days:
//!
//! ```text
//! day 1: ceil(7 / 3) = 3
//! day 2: ceil(4 / 2) = 2
//! day 3: ceil(2 / 1) = 2
//! ```
//!
//! Once the cursor reaches `N` the remaining days are empty and are not
//! stored.  With `N < D` that leaves days `N+1..=D` out of the schedule.

use tracing::debug;

use crate::{Schedule, ScheduleError, ScheduleResult};

/// Partition `sequence` into at most `duration` contiguous, ordered days.
///
/// Fails with [`ScheduleError::InvalidArgument`] when `duration` is 0.  An
/// empty `sequence` is not an error and yields an empty schedule.
pub fn distribute<T>(sequence: Vec<T>, duration: u32) -> ScheduleResult<Schedule<T>> {
    let total = sequence.len();
    let sizes = bucket_sizes(total, duration)?;

    let mut items = sequence.into_iter();
    let buckets: Vec<Vec<T>> = sizes
        .iter()
        .map(|&take| items.by_ref().take(take).collect())
        .collect();
    debug_assert!(items.next().is_none(), "distribution left items unassigned");

    debug!(items = total, duration, days_used = buckets.len(), "distributed sequence");
    Ok(Schedule::from_ordered_buckets(buckets))
}

/// The per-day sizes [`distribute`] would produce for `n` items over
/// `duration` days.  Only non-empty days are listed.
pub fn bucket_sizes(n: usize, duration: u32) -> ScheduleResult<Vec<usize>> {
    if duration == 0 {
        return Err(ScheduleError::InvalidArgument("duration must be at least 1 day".into()));
    }
    let days = duration as usize;

    let mut sizes = Vec::with_capacity(n.min(days));
    let mut cursor = 0usize;
    for day in 1..=days {
        if cursor >= n {
            break;
        }
        let remaining_items = n - cursor;
        let remaining_days = days - day + 1;
        let take = remaining_items.div_ceil(remaining_days);
        sizes.push(take);
        cursor += take;
    }
    Ok(sizes)
}

/// Validate a duration that arrived as a signed integer (form input, JSON).
///
/// Zero, negative, and values past `u32::MAX` are rejected with
/// [`ScheduleError::InvalidArgument`].
pub fn validate_duration(raw: i64) -> ScheduleResult<u32> {
    if raw <= 0 {
        return Err(ScheduleError::InvalidArgument(format!(
            "duration must be a positive number of days, got {raw}"
        )));
    }
    u32::try_from(raw)
        .map_err(|_| ScheduleError::InvalidArgument(format!("duration {raw} is too large")))
}

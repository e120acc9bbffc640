//! Day numbering.
//!
//! A reading plan's schedule is divided into days numbered from 1.  Day
//! numbers double as the persisted bucket keys: day `n` is stored under the
//! key `day_n`, so a schedule document reads
//!
//! ```text
//! { "day_1": [...], "day_2": [...], ... }
//! ```
//!
//! Day 0 does not exist.  Constructors that accept a raw integer reject it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

const KEY_PREFIX: &str = "day_";

// ── DayNumber ─────────────────────────────────────────────────────────────────

/// A 1-based day (bucket) index within a schedule.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayNumber(u32);

impl DayNumber {
    pub const FIRST: DayNumber = DayNumber(1);

    /// Wrap a raw day number.  Returns `None` for 0.
    #[inline]
    pub fn new(n: u32) -> Option<DayNumber> {
        (n > 0).then_some(DayNumber(n))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The following day.
    ///
    /// # Panics
    /// Panics in debug mode on overflow past `u32::MAX`.
    #[inline]
    pub fn next(self) -> DayNumber {
        DayNumber(self.0 + 1)
    }

    /// Zero-based position, for indexing into per-day `Vec`s.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Persisted bucket key, e.g. `day_3`.
    pub fn key(self) -> String {
        format!("{KEY_PREFIX}{}", self.0)
    }

    /// Parse a persisted bucket key produced by [`DayNumber::key`].
    pub fn parse_key(key: &str) -> CoreResult<DayNumber> {
        let digits = key
            .strip_prefix(KEY_PREFIX)
            .ok_or_else(|| CoreError::Parse(format!("day key {key:?} lacks the {KEY_PREFIX:?} prefix")))?;
        // `u32::from_str` accepts a leading '+', which `key()` never emits.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Parse(format!("day key {key:?} has no numeric suffix")));
        }
        // Only the canonical spelling is accepted so `day_1` and `day_01`
        // can never name the same bucket twice.
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(CoreError::Parse(format!("day key {key:?} has a leading zero")));
        }
        let n: u32 = digits
            .parse()
            .map_err(|_| CoreError::Parse(format!("day key {key:?} is out of range")))?;
        DayNumber::new(n).ok_or_else(|| CoreError::Parse(format!("day key {key:?}: days start at 1")))
    }
}

impl TryFrom<u32> for DayNumber {
    type Error = CoreError;

    fn try_from(n: u32) -> CoreResult<DayNumber> {
        DayNumber::new(n).ok_or_else(|| CoreError::Parse("day number 0 is invalid; days start at 1".into()))
    }
}

impl From<DayNumber> for u32 {
    #[inline]
    fn from(day: DayNumber) -> u32 {
        day.0
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

/// Iterate `DayNumber`s `1..=last`.  Stops cleanly at `u32::MAX`.
pub fn days_through(last: u32) -> impl DoubleEndedIterator<Item = DayNumber> {
    (1..=last).map(DayNumber)
}

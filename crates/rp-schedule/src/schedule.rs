//! `Schedule<T>` — an ordered, day-keyed partition of a sequence.
//!
//! # Invariants
//!
//! - Only non-empty days are stored.
//! - The stored days are exactly `1..=len()`.  The distributor front-loads
//!   items, so once a day comes up empty every later day is empty too.
//! - Concatenating the days in order reproduces the distributed sequence.
//!
//! A `Schedule` has no public mutators.  It is computed once when a plan is
//! created and persisted as-is.
//!
//! # Persisted form
//!
//! Serializes as a map keyed by [`DayNumber::key`]:
//!
//! ```json
//! { "day_1": [...], "day_2": [...] }
//! ```
//!
//! Deserialization enforces the invariants above, so a document that was
//! edited by hand into an impossible shape is rejected at load time.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use rp_core::{DayNumber, days_through};

use crate::{ScheduleError, ScheduleResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule<T> {
    days: BTreeMap<DayNumber, Vec<T>>,
}

impl<T> Schedule<T> {
    /// A schedule with no days.
    pub fn empty() -> Self {
        Self { days: BTreeMap::new() }
    }

    /// Build a schedule from explicit days, checking the invariants.
    ///
    /// Fails if any day is empty or the days are not exactly `1..=n`.
    pub fn from_days(days: BTreeMap<DayNumber, Vec<T>>) -> ScheduleResult<Self> {
        for (expected, (day, items)) in (1u32..).zip(&days) {
            if day.get() != expected {
                return Err(ScheduleError::InvalidArgument(format!(
                    "schedule days must be contiguous from day 1: expected day {expected}, found {day}"
                )));
            }
            if items.is_empty() {
                return Err(ScheduleError::InvalidArgument(format!("{day} is stored but empty")));
            }
        }
        Ok(Self { days })
    }

    /// Construction path for the distributor, which upholds the invariants
    /// by construction.
    pub(crate) fn from_ordered_buckets(buckets: Vec<Vec<T>>) -> Self {
        debug_assert!(buckets.len() <= u32::MAX as usize, "more buckets than days");
        let days = days_through(u32::MAX)
            .zip(buckets)
            .inspect(|(_, bucket)| debug_assert!(!bucket.is_empty(), "distributor produced an empty bucket"))
            .collect();
        Self { days }
    }

    /// Number of days with at least one item.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total items across all days.
    pub fn item_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Items assigned to `day`, or `None` if the day has no reading.
    pub fn day(&self, day: DayNumber) -> Option<&[T]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn contains_day(&self, day: DayNumber) -> bool {
        self.days.contains_key(&day)
    }

    /// The last day with a reading, or `None` for an empty schedule.
    pub fn last_day(&self) -> Option<DayNumber> {
        self.days.keys().next_back().copied()
    }

    /// `(day, items)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (DayNumber, &[T])> + '_ {
        self.days.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    /// Day numbers in order.
    pub fn days(&self) -> impl Iterator<Item = DayNumber> + '_ {
        self.days.keys().copied()
    }

    /// All items, flattened in day order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.days.values().flatten()
    }

    /// Per-day item counts in day order.
    pub fn sizes(&self) -> Vec<usize> {
        self.days.values().map(Vec::len).collect()
    }

    /// Consume the schedule and return the original sequence.
    pub fn into_sequence(self) -> Vec<T> {
        self.days.into_values().flatten().collect()
    }
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl<T: Serialize> Serialize for Schedule<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, items) in &self.days {
            map.serialize_entry(&day.key(), items)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Schedule<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScheduleVisitor(PhantomData))
    }
}

struct ScheduleVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ScheduleVisitor<T> {
    type Value = Schedule<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of day_N keys to item lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut days = BTreeMap::new();
        while let Some((key, items)) = access.next_entry::<String, Vec<T>>()? {
            let day = DayNumber::parse_key(&key).map_err(de::Error::custom)?;
            if days.insert(day, items).is_some() {
                return Err(de::Error::custom(format!("duplicate key {key:?}")));
            }
        }
        Schedule::from_days(days).map_err(de::Error::custom)
    }
}

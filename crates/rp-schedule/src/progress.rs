//! Per-reader progress through a plan.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use rp_core::DayNumber;

use crate::{ReadingPlan, ScheduleError, ScheduleResult};

/// Which of a plan's reading days have been completed.
///
/// Only days that carry a reading can be marked.  Rest days past the end of
/// the schedule count as neither complete nor outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProgress")]
pub struct PlanProgress {
    reading_days: u32,
    completed:    BTreeSet<DayNumber>,
}

/// Unchecked wire form; converted through [`PlanProgress::try_from`].
#[derive(Deserialize)]
struct RawProgress {
    reading_days: u32,
    completed:    BTreeSet<DayNumber>,
}

impl TryFrom<RawProgress> for PlanProgress {
    type Error = ScheduleError;

    /// Reject stored progress that marks days the plan does not have.
    fn try_from(raw: RawProgress) -> ScheduleResult<Self> {
        let progress = PlanProgress { reading_days: raw.reading_days, completed: BTreeSet::new() };
        if let Some(&day) = raw.completed.iter().next_back() {
            progress.check(day)?;
        }
        Ok(PlanProgress { completed: raw.completed, ..progress })
    }
}

impl PlanProgress {
    pub fn new(plan: &ReadingPlan) -> Self {
        Self {
            // Stored days are always 1..=len.
            reading_days: plan.schedule.len() as u32,
            completed:    BTreeSet::new(),
        }
    }

    /// Record `day` as read.  Marking a completed day again is a no-op.
    pub fn mark_complete(&mut self, day: DayNumber) -> ScheduleResult<()> {
        self.check(day)?;
        self.completed.insert(day);
        Ok(())
    }

    /// Clear a completion mark.  Returns whether the day had been marked.
    pub fn unmark(&mut self, day: DayNumber) -> ScheduleResult<bool> {
        self.check(day)?;
        Ok(self.completed.remove(&day))
    }

    pub fn is_complete(&self, day: DayNumber) -> bool {
        self.completed.contains(&day)
    }

    /// Completed days in order.
    pub fn completed_days(&self) -> impl Iterator<Item = DayNumber> + '_ {
        self.completed.iter().copied()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Share of reading days completed, 0.0–100.0.  A plan with no readings
    /// is trivially finished.
    pub fn percent_complete(&self) -> f64 {
        if self.reading_days == 0 {
            return 100.0;
        }
        self.completed.len() as f64 * 100.0 / self.reading_days as f64
    }

    /// The earliest reading day not yet completed.
    pub fn next_unread_day(&self) -> Option<DayNumber> {
        rp_core::days_through(self.reading_days).find(|d| !self.completed.contains(d))
    }

    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.reading_days as usize
    }

    fn check(&self, day: DayNumber) -> ScheduleResult<()> {
        if day.get() > self.reading_days {
            return Err(ScheduleError::UnknownDay { day });
        }
        Ok(())
    }
}

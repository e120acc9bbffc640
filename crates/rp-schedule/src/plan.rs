//! Plan creation: selection → chapter sequence → day-keyed schedule.
//!
//! ```text
//! PlanRequest ──validate──► BookCatalog::expand ──► distribute ──► ReadingPlan
//! ```
//!
//! The resulting [`ReadingPlan`] is what store backends persist.  It carries
//! the final distribution; nothing is recomputed when a plan is read back.

use serde::{Deserialize, Serialize};
use tracing::info;

use rp_core::{BookId, ChapterRef, DayNumber, PlannerConfig};

use crate::{BookCatalog, Schedule, ScheduleError, ScheduleResult, distribute, validate_duration};

// ── PlanRequest ───────────────────────────────────────────────────────────────

/// Raw plan-creation input, as submitted by a form or API client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub name: String,
    /// Books in the order the reader wants to read them.
    pub books: Vec<BookId>,
    /// Signed so out-of-range submissions reach validation instead of
    /// failing to parse.
    pub duration_days: i64,
}

// ── ReadingPlan ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPlan {
    pub name:          String,
    pub duration_days: u32,
    pub books:         Vec<BookId>,
    pub schedule:      Schedule<ChapterRef>,
}

impl ReadingPlan {
    /// Chapters to read on `day`.  Empty for days past the last reading
    /// (possible when the plan has more days than chapters).
    pub fn reading_for(&self, day: DayNumber) -> &[ChapterRef] {
        self.schedule.day(day).unwrap_or(&[])
    }

    pub fn chapter_count(&self) -> usize {
        self.schedule.item_count()
    }

    /// Check that the stored schedule fits the stored duration.
    ///
    /// Store backends call this after loading a document.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.duration_days == 0 {
            return Err(ScheduleError::InvalidArgument("stored plan has a zero duration".into()));
        }
        if let Some(last) = self.schedule.last_day() {
            if last.get() > self.duration_days {
                return Err(ScheduleError::InvalidArgument(format!(
                    "schedule reaches {last} but the plan lasts {} days",
                    self.duration_days
                )));
            }
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Validate `request` and distribute its chapters.
///
/// All validation happens before any distribution work, so a failed request
/// never produces a partial plan.
pub fn build_plan(
    catalog: &BookCatalog,
    request: &PlanRequest,
    config:  &PlannerConfig,
) -> ScheduleResult<ReadingPlan> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ScheduleError::InvalidArgument("plan name must not be empty".into()));
    }

    let duration_days = validate_duration(request.duration_days)?;
    if duration_days > config.max_duration_days {
        return Err(ScheduleError::InvalidArgument(format!(
            "duration {duration_days} exceeds the maximum of {} days",
            config.max_duration_days
        )));
    }

    let sequence = catalog.expand(&request.books)?;
    let chapters = sequence.len();
    let schedule = distribute(sequence, duration_days)?;

    info!(
        plan = name,
        books = request.books.len(),
        chapters,
        duration_days,
        reading_days = schedule.len(),
        "built reading plan"
    );

    Ok(ReadingPlan {
        name: name.to_owned(),
        duration_days,
        books: request.books.clone(),
        schedule,
    })
}

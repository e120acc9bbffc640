//! `rp-schedule` — chapter distribution, catalogs, plans, and progress.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`distributor`] | `distribute`, `bucket_sizes`, `validate_duration`        |
//! | [`schedule`]    | `Schedule<T>` (day-keyed, non-empty days only)           |
//! | [`catalog`]     | `Book`, `BookCatalog`, `load_catalog_csv`, `load_catalog_reader` |
//! | [`plan`]        | `PlanRequest`, `ReadingPlan`, `build_plan`               |
//! | [`progress`]    | `PlanProgress`                                           |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Distribution (summary)
//!
//! `N` items over `D` days.  At day `b`, with `cursor` items already placed:
//!
//! ```text
//! take = ceil((N - cursor) / (D - b + 1))
//! ```
//!
//! Day sizes differ by at most one, larger days come first, and order is
//! preserved.  Days left with nothing to read are omitted from the schedule.

pub mod catalog;
pub mod distributor;
pub mod error;
pub mod plan;
pub mod progress;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use catalog::{Book, BookCatalog, load_catalog_csv, load_catalog_reader};
pub use distributor::{bucket_sizes, distribute, validate_duration};
pub use error::{ScheduleError, ScheduleResult};
pub use plan::{PlanRequest, ReadingPlan, build_plan};
pub use progress::PlanProgress;
pub use schedule::Schedule;

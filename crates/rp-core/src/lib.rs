//! `rp-core` — foundational types for the reading-plan scheduler.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and few external ones (`thiserror`, `serde`, `toml`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BookId`, `PlanId`                                    |
//! | [`day`]         | `DayNumber`, `days_through`                           |
//! | [`chapter`]     | `ChapterRef`                                          |
//! | [`config`]      | `PlannerConfig`                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod chapter;
pub mod config;
pub mod day;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chapter::ChapterRef;
pub use config::{DEFAULT_MAX_DURATION_DAYS, PlannerConfig};
pub use day::{DayNumber, days_through};
pub use error::{CoreError, CoreResult};
pub use ids::{BookId, PlanId};

//! Error types for rp-store.

use rp_core::PlanId;
use rp_schedule::ScheduleError;
use thiserror::Error;

/// Errors that can occur when persisting or loading plans.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored document parsed but describes an impossible plan.
    #[error("stored plan {id} is corrupt: {reason}")]
    Corrupt { id: PlanId, reason: String },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

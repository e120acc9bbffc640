//! `rp-store` — persistence adapters for reading plans.
//!
//! Plan creation is pure; storing the result is this crate's job.  Three
//! backends implement [`PlanStore`]:
//!
//! | Backend          | Feature   | Storage                                   |
//! |------------------|-----------|-------------------------------------------|
//! | [`MemoryStore`]  | *(none)*  | In-process map of JSON documents          |
//! | [`JsonDirStore`] | *(none)*  | `plan_<id>.json` files in a directory     |
//! | `SqliteStore`    | `sqlite`  | `plans` table in an SQLite database       |
//!
//! Every backend stores the same JSON document, with the schedule keyed by
//! day (`{"day_1": [...], ...}`), and validates it again on load.
//!
//! [`write_schedule_csv`] exports a schedule for printing or spreadsheets.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_store::{JsonDirStore, PlanStore};
//!
//! let plan = rp_schedule::build_plan(&catalog, &request, &config)?;
//! let mut store = JsonDirStore::new(Path::new("./plans"))?;
//! let id = store.insert(&plan)?;
//! assert_eq!(store.get(id)?, Some(plan));
//! ```

pub mod error;
pub mod export;
pub mod json;
pub mod memory;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use error::{StoreError, StoreResult};
pub use export::{export_schedule_csv, write_schedule_csv};
pub use json::JsonDirStore;
pub use memory::MemoryStore;
pub use store::{PlanStore, PlanSummary};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

//! Planner configuration.
//!
//! Loaded from a TOML file by the application and passed to the plan builder
//! and store constructors.  Every field has a default, so an empty file (or
//! no file at all) is a valid configuration:
//!
//! ```toml
//! max_duration_days = 730
//! catalog_path      = "data/books.csv"
//! store_dir         = "plans"
//! log_filter        = "rp_schedule=debug,info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Ten years of daily reading.  Longer plans are almost always a typo.
pub const DEFAULT_MAX_DURATION_DAYS: u32 = 3_650;

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Upper bound on a plan's duration.  Requests above it are rejected
    /// before any chapters are distributed.
    pub max_duration_days: u32,

    /// Book catalog CSV (`book_id,name,chapters`).  `None` means the
    /// application supplies its own catalog.
    pub catalog_path: Option<PathBuf>,

    /// Directory used by the JSON document store.  `None` keeps plans in
    /// memory only.
    pub store_dir: Option<PathBuf>,

    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_duration_days: DEFAULT_MAX_DURATION_DAYS,
            catalog_path:      None,
            store_dir:         None,
            log_filter:        "info".to_owned(),
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: PlannerConfig =
            toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject settings no plan could satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_duration_days == 0 {
            return Err(CoreError::Config("max_duration_days must be at least 1".into()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter must not be empty".into()));
        }
        Ok(())
    }
}

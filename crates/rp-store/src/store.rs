//! The `PlanStore` trait implemented by all backends, and the shared JSON
//! document encoding.

use serde::{Deserialize, Serialize};
use tracing::warn;

use rp_core::PlanId;
use rp_schedule::ReadingPlan;

use crate::{StoreError, StoreResult};

/// Listing entry: enough to show a plan picker without loading schedules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id:            PlanId,
    pub name:          String,
    pub duration_days: u32,
}

/// Trait implemented by the memory, JSON-directory, and SQLite stores.
///
/// Plans are stored as their final distribution.  Backends never recompute a
/// schedule; `get` returns exactly what `insert` was given.
pub trait PlanStore {
    /// Persist `plan` and return its newly assigned ID.
    fn insert(&mut self, plan: &ReadingPlan) -> StoreResult<PlanId>;

    /// Load a plan.  `Ok(None)` if no plan has this ID.
    fn get(&self, id: PlanId) -> StoreResult<Option<ReadingPlan>>;

    /// Remove a plan.  Returns whether it existed.
    fn delete(&mut self, id: PlanId) -> StoreResult<bool>;

    /// All stored plans, ordered by ID.
    fn list(&self) -> StoreResult<Vec<PlanSummary>>;
}

// ── Document encoding ─────────────────────────────────────────────────────────

pub(crate) fn encode(plan: &ReadingPlan) -> StoreResult<String> {
    Ok(serde_json::to_string(plan)?)
}

/// Decode and re-validate a stored document.
///
/// Schedule invariants are enforced by `Schedule`'s deserializer; the plan
/// level check (schedule fits duration) happens here.
pub(crate) fn decode(id: PlanId, document: &str) -> StoreResult<ReadingPlan> {
    let plan: ReadingPlan = serde_json::from_str(document).map_err(|e| corrupt(id, e.to_string()))?;
    plan.validate().map_err(|e| corrupt(id, e.to_string()))?;
    Ok(plan)
}

fn corrupt(id: PlanId, reason: String) -> StoreError {
    warn!(%id, %reason, "stored plan failed validation");
    StoreError::Corrupt { id, reason }
}

//! In-process store.
//!
//! Keeps each plan as its serialized JSON document rather than as a live
//! `ReadingPlan`, so the memory backend exercises the same encode/decode
//! path as the persistent ones.

use std::collections::BTreeMap;

use tracing::info;

use rp_core::PlanId;
use rp_schedule::ReadingPlan;

use crate::store::{self, PlanStore, PlanSummary};
use crate::StoreResult;

#[derive(Default)]
pub struct MemoryStore {
    documents: BTreeMap<PlanId, (PlanSummary, String)>,
    next_id:   u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The raw stored document for `id`.
    pub fn document(&self, id: PlanId) -> Option<&str> {
        self.documents.get(&id).map(|(_, doc)| doc.as_str())
    }
}

impl PlanStore for MemoryStore {
    fn insert(&mut self, plan: &ReadingPlan) -> StoreResult<PlanId> {
        let document = store::encode(plan)?;
        self.next_id += 1;
        let id = PlanId(self.next_id);
        let summary = PlanSummary {
            id,
            name:          plan.name.clone(),
            duration_days: plan.duration_days,
        };
        self.documents.insert(id, (summary, document));
        info!(%id, plan = %plan.name, "stored plan in memory");
        Ok(id)
    }

    fn get(&self, id: PlanId) -> StoreResult<Option<ReadingPlan>> {
        self.documents
            .get(&id)
            .map(|(_, doc)| store::decode(id, doc))
            .transpose()
    }

    fn delete(&mut self, id: PlanId) -> StoreResult<bool> {
        Ok(self.documents.remove(&id).is_some())
    }

    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        Ok(self.documents.values().map(|(s, _)| s.clone()).collect())
    }
}

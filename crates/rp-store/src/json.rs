//! JSON document store: one file per plan.
//!
//! Layout of the configured directory:
//!
//! ```text
//! plans/
//!   plan_1.json
//!   plan_2.json
//! ```
//!
//! Each file holds the plan's JSON document.  An insert first claims its
//! `plan_<id>.json` with `create_new`, moving on to the next ID if another
//! writer got there first.  The document goes to a `.tmp` sibling and is
//! renamed over the claimed file, so a crash mid-write never leaves a
//! truncated document behind.  IDs continue from the highest existing file.
//!
//! `list` reads only the `name` and `duration_days` fields.  A damaged file
//! is logged and left out of the listing; `get` still reports it as corrupt.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use rp_core::PlanId;
use rp_schedule::ReadingPlan;

use crate::store::{self, PlanStore, PlanSummary};
use crate::StoreResult;

const FILE_PREFIX: &str = "plan_";
const FILE_SUFFIX: &str = ".json";

pub struct JsonDirStore {
    dir:     PathBuf,
    next_id: u64,
}

impl JsonDirStore {
    /// Open (or create) the store directory and scan it for existing plans.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;
        let last = stored_ids(dir)?.into_iter().max().map_or(0, |id| id.0);
        debug!(dir = %dir.display(), last_id = last, "opened JSON plan store");
        Ok(Self { dir: dir.to_path_buf(), next_id: last + 1 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: PlanId) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{}{FILE_SUFFIX}", id.0))
    }

    /// Create the next free `plan_<id>.json` exclusively.  Files written by
    /// other processes since `new` are skipped over, never replaced.
    fn claim_next(&mut self) -> StoreResult<(PlanId, PathBuf)> {
        loop {
            let id = PlanId(self.next_id);
            let path = self.path_for(id);
            self.next_id += 1;
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok((id, path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(%id, "plan id already taken on disk");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// The fields `list` needs; the schedule is never parsed.
#[derive(Deserialize)]
struct ListedPlan {
    name:          String,
    duration_days: u32,
}

impl PlanStore for JsonDirStore {
    fn insert(&mut self, plan: &ReadingPlan) -> StoreResult<PlanId> {
        let document = store::encode(plan)?;
        let (id, path) = self.claim_next()?;

        let tmp = path.with_extension("json.tmp");
        let written = fs::write(&tmp, document).and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            // Release the claim so the ID does not point at an empty file.
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }

        info!(%id, plan = %plan.name, path = %path.display(), "stored plan");
        Ok(id)
    }

    fn get(&self, id: PlanId) -> StoreResult<Option<ReadingPlan>> {
        match fs::read_to_string(self.path_for(id)) {
            Ok(doc) => store::decode(id, &doc).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, id: PlanId) -> StoreResult<bool> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        let mut ids = stored_ids(&self.dir)?;
        ids.sort_unstable();

        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            let doc = match fs::read_to_string(self.path_for(id)) {
                Ok(doc) => doc,
                // Removed between the scan and the read.
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            match serde_json::from_str::<ListedPlan>(&doc) {
                Ok(listed) => out.push(PlanSummary {
                    id,
                    name:          listed.name,
                    duration_days: listed.duration_days,
                }),
                Err(e) => warn!(%id, error = %e, "skipping unreadable plan file"),
            }
        }
        Ok(out)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// IDs of every `plan_<id>.json` file in `dir`.  Other files are ignored.
fn stored_ids(dir: &Path) -> StoreResult<Vec<PlanId>> {
    let mut ids = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else { continue };
        let id = name
            .strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
            .and_then(|digits| digits.parse::<u64>().ok());
        if let Some(id) = id {
            ids.push(PlanId(id));
        }
    }
    Ok(ids)
}

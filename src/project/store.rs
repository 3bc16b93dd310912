//! Project store seam.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::candidate::ProjectCandidate;
use super::record::ProjectRecord;
use crate::error::Result;

/// Source of project rows for one owner.
///
/// Persistence lives outside this crate; implement this over whatever
/// backend holds the rows.
pub trait ProjectStore {
    /// Returns all rows owned by `owner`, in any status.
    fn fetch_projects(&self, owner: &str) -> Result<Vec<ProjectRecord>>;
}

/// Store backed by a map from owner to rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: HashMap<String, Vec<ProjectRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, owner: impl Into<String>, record: ProjectRecord) {
        self.rows.entry(owner.into()).or_default().push(record);
    }

    pub fn with_record(mut self, owner: impl Into<String>, record: ProjectRecord) -> Self {
        self.insert(owner, record);
        self
    }
}

impl ProjectStore for InMemoryStore {
    fn fetch_projects(&self, owner: &str) -> Result<Vec<ProjectRecord>> {
        Ok(self.rows.get(owner).cloned().unwrap_or_default())
    }
}

/// Loads `owner`'s projects, drops finished ones, and validates the rest.
///
/// Fails on the first malformed row.
pub fn load_active_candidates<S: ProjectStore + ?Sized>(
    store: &S,
    owner: &str,
    now: DateTime<Utc>,
) -> Result<Vec<ProjectCandidate>> {
    let records = store.fetch_projects(owner)?;
    let total = records.len();

    let candidates = records
        .into_iter()
        .filter(|r| !r.is_done())
        .map(|r| r.into_candidate(now))
        .collect::<Result<Vec<_>>>()?;

    debug!(owner, total, active = candidates.len(), "loaded candidates");
    Ok(candidates)
}

use std::sync::{PoisonError, RwLock};

use crate::JobRecord;

/// Read interface the matching core depends on. The core never writes
/// through it; loading and refreshing postings belong to the owner of
/// the concrete catalog.
pub trait JobCatalog: Send + Sync {
    fn list_all(&self) -> Vec<JobRecord>;
    fn find_by_id(&self, id: &str) -> Option<JobRecord>;
}

/// In-memory catalog guarded by a reader/writer lock: searches and
/// lookups take shared access, the rare reload path takes exclusive
/// access.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    jobs: RwLock<Vec<JobRecord>>,
}

impl InMemoryCatalog {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }

    /// Swap the whole collection. Writers only replace the vec, so even
    /// a poisoned lock still holds consistent data.
    pub fn replace_all(&self, jobs: Vec<JobRecord>) {
        *self.jobs.write().unwrap_or_else(PoisonError::into_inner) = jobs;
    }

    pub fn len(&self) -> usize {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobCatalog for InMemoryCatalog {
    fn list_all(&self) -> Vec<JobRecord> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn find_by_id(&self, id: &str) -> Option<JobRecord> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }
}

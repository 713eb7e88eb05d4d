//! # Repository Seam
//!
//! The persistence interface the orchestrator writes through, keyed by
//! the (cpid, stage) pair. No secondary indexing is required.
//!
//! The engine performs one read of the predecessor followed later by one
//! write of the successor. No row lock is taken: two concurrent
//! transitions from the same predecessor may both pass validation, and
//! the later write wins. The ownership token is an authorization check,
//! not a concurrency-control mechanism; callers needing stronger
//! guarantees serialize their own writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use ocp_core::{Cpid, Stage};

use crate::process::TenderProcess;

/// Storage for tender process rows.
pub trait TenderRepository {
    /// Load the row at the given case/stage pair, if any.
    fn get(&self, cpid: &Cpid, stage: Stage) -> Option<TenderProcess>;

    /// Persist a row under its (cpid, stage) key, replacing any
    /// existing row at that key (last writer wins).
    fn save(&self, record: TenderProcess);
}

/// An in-memory repository backed by a hash map.
///
/// Cloning shares the underlying map, so tests can hold a handle to the
/// store a service writes through.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<Mutex<HashMap<(Cpid, Stage), TenderProcess>>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the repository holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(Cpid, Stage), TenderProcess>> {
        // A poisoned lock only means another test thread panicked while
        // holding it; the map itself is still coherent.
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TenderRepository for InMemoryRepository {
    fn get(&self, cpid: &Cpid, stage: Stage) -> Option<TenderProcess> {
        self.lock().get(&(cpid.clone(), stage)).cloned()
    }

    fn save(&self, record: TenderProcess) {
        self.lock()
            .insert((record.cpid.clone(), record.stage), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocp_core::{OwnerId, OwnershipToken, Timestamp};
    use ocp_model::testing::sample_tender;

    fn record(cpid: &str, stage: Stage) -> TenderProcess {
        TenderProcess {
            cpid: Cpid::new(cpid).unwrap(),
            stage,
            token: OwnershipToken::new("token-1"),
            owner: OwnerId::new("owner-1").unwrap(),
            created_at: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            tender: sample_tender(vec![], vec![], vec![]),
            planning: None,
        }
    }

    #[test]
    fn test_get_returns_saved_row() {
        let repo = InMemoryRepository::new();
        repo.save(record("case-1", Stage::Pn));

        let cpid = Cpid::new("case-1").unwrap();
        assert!(repo.get(&cpid, Stage::Pn).is_some());
        assert!(repo.get(&cpid, Stage::Cn).is_none());
    }

    #[test]
    fn test_stages_of_one_case_are_distinct_rows() {
        let repo = InMemoryRepository::new();
        repo.save(record("case-1", Stage::Pn));
        repo.save(record("case-1", Stage::Cn));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_save_is_last_writer_wins() {
        let repo = InMemoryRepository::new();
        let mut first = record("case-1", Stage::Pn);
        first.tender.title = "first".into();
        let mut second = record("case-1", Stage::Pn);
        second.tender.title = "second".into();

        repo.save(first);
        repo.save(second);

        let cpid = Cpid::new("case-1").unwrap();
        let stored = repo.get(&cpid, Stage::Pn).unwrap();
        assert_eq!(stored.tender.title, "second");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_clones_share_the_store() {
        let repo = InMemoryRepository::new();
        let handle = repo.clone();
        repo.save(record("case-1", Stage::Pn));
        assert_eq!(handle.len(), 1);
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::ReceiptId;

/// Storage abstraction so the service can be exercised in isolation or moved
/// onto a durable store.
pub trait PointsRepository: Send + Sync {
    fn insert(&self, id: ReceiptId, points: u64) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<u64>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store. Entries are written once and never change.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPointsRepository {
    records: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl InMemoryPointsRepository {
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, u64>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("points store lock poisoned".to_string()))
    }
}

impl PointsRepository for InMemoryPointsRepository {
    fn insert(&self, id: ReceiptId, points: u64) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, points);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<u64>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_fetch_returns_points() {
        let repository = InMemoryPointsRepository::default();
        let id = ReceiptId("abc".to_string());

        repository.insert(id.clone(), 28).expect("insert succeeds");

        assert_eq!(repository.fetch(&id).expect("fetch succeeds"), Some(28));
        assert_eq!(repository.len().expect("len readable"), 1);
    }

    #[test]
    fn entries_cannot_be_overwritten() {
        let repository = InMemoryPointsRepository::default();
        let id = ReceiptId("abc".to_string());
        repository.insert(id.clone(), 28).expect("insert succeeds");

        let result = repository.insert(id.clone(), 99);

        assert!(matches!(result, Err(RepositoryError::Conflict)));
        assert_eq!(repository.fetch(&id).expect("fetch succeeds"), Some(28));
    }

    #[test]
    fn unknown_ids_are_absent_rather_than_zero() {
        let repository = InMemoryPointsRepository::default();
        let fetched = repository
            .fetch(&ReceiptId("missing".to_string()))
            .expect("fetch succeeds");
        assert!(fetched.is_none());
        assert!(repository.is_empty().expect("len readable"));
    }

    #[test]
    fn clones_share_the_same_store() {
        let repository = InMemoryPointsRepository::default();
        let handle = repository.clone();
        handle
            .insert(ReceiptId("shared".to_string()), 7)
            .expect("insert succeeds");
        assert_eq!(
            repository
                .fetch(&ReceiptId("shared".to_string()))
                .expect("fetch succeeds"),
            Some(7)
        );
    }

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let repository = InMemoryPointsRepository::default();
        let id = ReceiptId("abc".to_string());
        repository.insert(id.clone(), 28).expect("insert succeeds");

        let records = repository.records.clone();
        let outcome = std::thread::spawn(move || {
            let _guard = records.lock().expect("lock acquired");
            panic!("writer crashed while holding the lock");
        })
        .join();
        assert!(outcome.is_err());

        assert!(matches!(
            repository.insert(ReceiptId("def".to_string()), 1),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.fetch(&id),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.len(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(repository.is_empty().is_err());
    }
}

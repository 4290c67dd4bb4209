//! In-memory adapter for LogRepository

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{LogRecord, LogRecordId, NewLogRecord};
use crate::domain::ports::LogRepository;
use crate::error::DomainError;

#[derive(Debug, Default)]
struct LogState {
    /// Oldest first
    records: VecDeque<LogRecord>,
    last_id: i64,
}

/// Bounded in-memory implementation of LogRepository.
///
/// Ids start at 1 and only grow; once `retain` records are held the oldest
/// is evicted on every insert.
#[derive(Debug)]
pub struct InMemoryLogRepository {
    state: RwLock<LogState>,
    retain: usize,
}

impl InMemoryLogRepository {
    pub fn new(retain: usize) -> Self {
        Self {
            state: RwLock::new(LogState::default()),
            retain: retain.max(1),
        }
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<LogRecord>, DomainError> {
        let state = self.state.read().await;
        Ok(state.records.iter().rev().take(limit).cloned().collect())
    }

    async fn create(&self, record: &NewLogRecord) -> Result<LogRecord, DomainError> {
        let mut state = self.state.write().await;

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("log record ids exhausted".to_string()))?;
        state.last_id = id;

        let stored = record.clone().into_record(LogRecordId(id));
        state.records.push_back(stored.clone());
        while state.records.len() > self.retain {
            state.records.pop_front();
        }

        tracing::debug!("Stored log record {} ({})", stored.id, record.kind);
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_new_record;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryLogRepository::new(10);

        let first = repo.create(&test_new_record()).await.unwrap();
        let second = repo.create(&test_new_record()).await.unwrap();

        assert_eq!(first.id, LogRecordId(1));
        assert_eq!(second.id, LogRecordId(2));
    }

    #[tokio::test]
    async fn fetch_recent_is_newest_first_and_limited() {
        let repo = InMemoryLogRepository::new(10);
        for _ in 0..5 {
            repo.create(&test_new_record()).await.unwrap();
        }

        let records = repo.fetch_recent(3).await.unwrap();

        let ids: Vec<i64> = records.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn fetch_recent_on_empty_log() {
        let repo = InMemoryLogRepository::new(10);
        assert!(repo.fetch_recent(100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn oldest_records_are_evicted() {
        let repo = InMemoryLogRepository::new(2);
        for _ in 0..4 {
            repo.create(&test_new_record()).await.unwrap();
        }

        let records = repo.fetch_recent(100).await.unwrap();

        let ids: Vec<i64> = records.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[tokio::test]
    async fn ids_keep_growing_after_eviction() {
        let repo = InMemoryLogRepository::new(1);
        repo.create(&test_new_record()).await.unwrap();
        let latest = repo.create(&test_new_record()).await.unwrap();

        assert_eq!(latest.id, LogRecordId(2));
    }
}

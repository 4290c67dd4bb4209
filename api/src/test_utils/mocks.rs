//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{LogRecord, NewLogRecord};
use crate::domain::ports::LogRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Log Repository
// ============================================================================

/// A log repository whose every call fails
pub struct FailingLogRepository;

#[async_trait]
impl LogRepository for FailingLogRepository {
    async fn fetch_recent(&self, _limit: usize) -> Result<Vec<LogRecord>, DomainError> {
        Err(DomainError::Internal("log store unavailable".to_string()))
    }

    async fn create(&self, _record: &NewLogRecord) -> Result<LogRecord, DomainError> {
        Err(DomainError::Internal("log store unavailable".to_string()))
    }
}

//! Repository port traits
//!
//! These traits define the interface for announcement storage.
//! Implementations are provided by adapters (e.g., the in-memory log).

use async_trait::async_trait;

use crate::domain::entities::{LogRecord, NewLogRecord};
use crate::error::DomainError;

/// Repository for stored warbot announcements
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Fetch the most recent `limit` records, newest (highest id) first
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<LogRecord>, DomainError>;

    /// Store a new announcement and return it with its assigned id
    async fn create(&self, record: &NewLogRecord) -> Result<LogRecord, DomainError>;
}

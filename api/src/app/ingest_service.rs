//! Ingest service
//!
//! Records announcements relayed by warbot. Lines from anyone else, and lines
//! that are not announcements, are ignored rather than rejected.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::announcement_parser::parse_announcement;
use crate::domain::entities::LogRecord;
use crate::domain::ports::LogRepository;
use crate::error::{AppError, ParseError};

/// What happened to an incoming chat line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    Recorded { record: LogRecord },
    /// Sender is not an announcer bot
    IgnoredSender,
    /// Line did not match any announcement format
    Unrecognized,
}

/// Service for recording warbot announcements
pub struct IngestService<LR>
where
    LR: LogRepository,
{
    logs: Arc<LR>,
    announcer_prefix: String,
}

impl<LR> IngestService<LR>
where
    LR: LogRepository,
{
    pub fn new(logs: Arc<LR>, announcer_prefix: String) -> Self {
        Self {
            logs,
            announcer_prefix,
        }
    }

    /// Handle a chat line from `nick`, stamping it with the current time
    pub async fn ingest(&self, nick: &str, line: &str) -> Result<IngestOutcome, AppError> {
        self.ingest_at(nick, line, Utc::now().timestamp()).await
    }

    /// Handle a chat line from `nick` seen at `now` (epoch seconds)
    pub async fn ingest_at(
        &self,
        nick: &str,
        line: &str,
        now: i64,
    ) -> Result<IngestOutcome, AppError> {
        if !nick.starts_with(&self.announcer_prefix) {
            tracing::debug!("Ignoring line from non-announcer {}", nick);
            return Ok(IngestOutcome::IgnoredSender);
        }

        let announcement = match parse_announcement(line) {
            Ok(a) => a,
            Err(ParseError::Unrecognized(_)) => {
                tracing::debug!("Ignoring unrecognized line from {}", nick);
                return Ok(IngestOutcome::Unrecognized);
            }
            Err(e) => return Err(e.into()),
        };

        let record = self
            .logs
            .create(&announcement.into_new_record(now))
            .await?;

        tracing::info!(
            "Recorded {} from {} in #{} on {}",
            record.id,
            record.user,
            record.channel,
            record.network
        );

        Ok(IngestOutcome::Recorded { record })
    }
}

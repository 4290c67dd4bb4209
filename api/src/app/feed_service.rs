//! Feed service
//!
//! Generates the announcement feed: the most recent records, rendered newest
//! first.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::ports::LogRepository;
use crate::error::AppError;
use crate::feed::{RecordRenderer, RenderedFeed};

/// Service for generating the announcement feed
pub struct FeedService<LR>
where
    LR: LogRepository,
{
    logs: Arc<LR>,
    renderer: RecordRenderer,
    limit: usize,
}

impl<LR> FeedService<LR>
where
    LR: LogRepository,
{
    pub fn new(logs: Arc<LR>, renderer: RecordRenderer, limit: usize) -> Self {
        Self {
            logs,
            renderer,
            limit,
        }
    }

    /// Generate the feed as seen right now
    pub async fn generate_feed(&self) -> Result<RenderedFeed, AppError> {
        self.generate_feed_at(Utc::now().timestamp()).await
    }

    /// Generate the feed as seen at `now` (epoch seconds)
    pub async fn generate_feed_at(&self, now: i64) -> Result<RenderedFeed, AppError> {
        let records = self.logs.fetch_recent(self.limit).await?;
        let feed = self.renderer.render_all(&records, now);

        tracing::debug!(
            "Rendered feed: {} entries, {} skipped",
            feed.entries.len(),
            feed.failures.len()
        );

        Ok(feed)
    }
}

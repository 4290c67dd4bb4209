//! Log record domain entity
//!
//! One stored warbot announcement, as written by the ingest side and read back
//! by the feed.

use serde::{Deserialize, Serialize};

use super::announcement::AnnouncementType;

/// Unique, monotonically increasing identifier for a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogRecordId(pub i64);

impl std::fmt::Display for LogRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored announcement.
///
/// `kind` is kept as the raw stored code; it is validated when the record is
/// rendered, not when it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: LogRecordId,
    #[serde(rename = "type")]
    pub kind: i32,
    /// Player count, meaningful for CW, PCW and ringer
    pub num: Option<i32>,
    /// Tag tokens for structured types, message text for messages
    pub info: Option<String>,
    pub user: String,
    pub channel: String,
    pub network: String,
    /// Epoch seconds when the announcement was recorded
    pub time: i64,
}

/// Data needed to store a new announcement
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogRecord {
    pub kind: AnnouncementType,
    pub num: Option<i32>,
    pub info: Option<String>,
    pub user: String,
    pub channel: String,
    pub network: String,
    pub time: i64,
}

impl NewLogRecord {
    /// Attach a storage id
    pub fn into_record(self, id: LogRecordId) -> LogRecord {
        LogRecord {
            id,
            kind: self.kind.code(),
            num: self.num,
            info: self.info,
            user: self.user,
            channel: self.channel,
            network: self.network,
            time: self.time,
        }
    }
}

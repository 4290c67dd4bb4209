//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{AnnouncementType, LogRecord, LogRecordId, NewLogRecord};

/// Epoch seconds used as the recording time of fixture records
pub const FIXTURE_TIME: i64 = 1_700_000_000;

/// Create a stored record with the given id and raw type code
pub fn test_record(id: i64, kind: i32) -> LogRecord {
    LogRecord {
        id: LogRecordId(id),
        kind,
        num: None,
        info: None,
        user: "clearskies".to_string(),
        channel: "skiesclear".to_string(),
        network: "Quakenet".to_string(),
        time: FIXTURE_TIME,
    }
}

/// Create a stored message record
pub fn test_message(id: i64, text: &str) -> LogRecord {
    LogRecord {
        info: Some(text.to_string()),
        ..test_record(id, AnnouncementType::Message.code())
    }
}

/// Create an unsaved clan war announcement
pub fn test_new_record() -> NewLogRecord {
    NewLogRecord {
        kind: AnnouncementType::Cw,
        num: Some(5),
        info: Some("ts high".to_string()),
        user: "clearskies".to_string(),
        channel: "skiesclear".to_string(),
        network: "Quakenet".to_string(),
        time: FIXTURE_TIME,
    }
}

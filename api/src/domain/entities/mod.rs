//! Domain entities
//!
//! Pure domain models representing stored announcements and their
//! classification.

pub mod announcement;
pub mod log_record;
pub mod skill;

pub use announcement::AnnouncementType;
pub use log_record::{LogRecord, LogRecordId, NewLogRecord};
pub use skill::SkillLevel;

//! Announcement type entity
//!
//! The five kinds of announcement warbot relays, keyed by the numeric code
//! stored with every log record.

use serde::Serialize;

use crate::error::DomainError;

/// Announcement type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    /// Clan war
    Cw,
    /// Practice clan war
    Pcw,
    /// Call for a substitute player
    Ringer,
    Recruit,
    /// Free-text message
    Message,
}

impl AnnouncementType {
    /// Numeric code as stored in the log
    pub fn code(self) -> i32 {
        match self {
            AnnouncementType::Cw => 1,
            AnnouncementType::Pcw => 2,
            AnnouncementType::Ringer => 3,
            AnnouncementType::Recruit => 4,
            AnnouncementType::Message => 5,
        }
    }

    /// Canonical display label
    pub fn label(self) -> &'static str {
        match self {
            AnnouncementType::Cw => "CW",
            AnnouncementType::Pcw => "PCW",
            AnnouncementType::Ringer => "Ringer",
            AnnouncementType::Recruit => "Recruit",
            AnnouncementType::Message => "Message",
        }
    }

    /// Tag shown ahead of the parsed annotation tags.
    ///
    /// Returns `None` for recruits, messages, and when no player count was recorded.
    pub fn implicit_tag(self, num: Option<i32>) -> Option<String> {
        let num = num?;
        match self {
            AnnouncementType::Cw | AnnouncementType::Pcw => Some(format!("{} vs {}", num, num)),
            AnnouncementType::Ringer => Some(format!("Need: {}", num)),
            AnnouncementType::Recruit | AnnouncementType::Message => None,
        }
    }
}

impl TryFrom<i32> for AnnouncementType {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AnnouncementType::Cw),
            2 => Ok(AnnouncementType::Pcw),
            3 => Ok(AnnouncementType::Ringer),
            4 => Ok(AnnouncementType::Recruit),
            5 => Ok(AnnouncementType::Message),
            other => Err(DomainError::InvalidType(other)),
        }
    }
}

impl std::fmt::Display for AnnouncementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

//! Announcement parser for warbot chat lines
//!
//! Parses relayed lines like
//! `[CW] #clan @ Quakenet - nick - Requested a 5 vs 5 (Additional info: ts high)`.
//!
//! Channel, network and nick match lazily so a message body may itself
//! contain `" - "`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::entities::{AnnouncementType, NewLogRecord};
use crate::error::ParseError;

static WAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(CW|PCW)\] #(.+?) @ (.+?) - (.+?) - Requested a ([0-9]+) vs [0-9]+(?: \(Additional info: (.+)\))?",
    )
    .expect("valid regex")
});

static REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(RINGER|RECRUIT)\] #(.+?) @ (.+?) - (.+?) - Requesting ([0-9]+)(?: \(Additional info: (.+)\))?",
    )
    .expect("valid regex")
});

static MSG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[MSG\] #(.+?) @ (.+?) - (.+?) - (.+)").expect("valid regex"));

/// A parsed warbot announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub kind: AnnouncementType,
    pub channel: String,
    pub network: String,
    pub user: String,
    /// Requested player count; absent for messages
    pub num: Option<i32>,
    pub info: Option<String>,
}

impl Announcement {
    /// Stamp the announcement with the time it was seen
    pub fn into_new_record(self, time: i64) -> NewLogRecord {
        NewLogRecord {
            kind: self.kind,
            num: self.num,
            info: self.info,
            user: self.user,
            channel: self.channel,
            network: self.network,
            time,
        }
    }
}

/// Parse a warbot announcement line
pub fn parse_announcement(line: &str) -> Result<Announcement, ParseError> {
    let line = line.trim_end();

    if let Some(caps) = WAR_RE.captures(line) {
        let kind = match &caps[1] {
            "CW" => AnnouncementType::Cw,
            _ => AnnouncementType::Pcw,
        };
        return structured(kind, &caps);
    }

    if let Some(caps) = REQUEST_RE.captures(line) {
        let kind = match &caps[1] {
            "RINGER" => AnnouncementType::Ringer,
            _ => AnnouncementType::Recruit,
        };
        return structured(kind, &caps);
    }

    if let Some(caps) = MSG_RE.captures(line) {
        return Ok(Announcement {
            kind: AnnouncementType::Message,
            channel: caps[1].to_string(),
            network: caps[2].to_string(),
            user: caps[3].to_string(),
            num: None,
            info: Some(caps[4].to_string()),
        });
    }

    Err(ParseError::Unrecognized(line.to_string()))
}

fn structured(kind: AnnouncementType, caps: &Captures<'_>) -> Result<Announcement, ParseError> {
    Ok(Announcement {
        kind,
        channel: caps[2].to_string(),
        network: caps[3].to_string(),
        user: caps[4].to_string(),
        num: Some(caps[5].parse()?),
        info: caps.get(6).map(|m| m.as_str().to_string()),
    })
}

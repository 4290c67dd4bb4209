//! Interpretation of a record's `info` annotation
//!
//! Messages are free text and get linkified; every other type carries tag
//! tokens and a skill rating.

use serde::Serialize;

use super::linkify::{linkify, LinkMode};
use super::tags::parse_info;
use crate::domain::entities::{AnnouncementType, SkillLevel};

/// Display body of a feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordBody {
    /// Linkified message text, already safe to embed as HTML
    Message { html: String },
    Tags { tags: Vec<String>, skill: SkillLevel },
}

/// Build the display body for one record.
///
/// For structured types the implicit count tag (e.g. `"4 vs 4"`) always leads
/// the parsed tags.
pub fn interpret_info(
    kind: AnnouncementType,
    num: Option<i32>,
    info: Option<&str>,
    link_mode: LinkMode,
) -> RecordBody {
    if kind == AnnouncementType::Message {
        return RecordBody::Message {
            html: linkify(info.unwrap_or_default(), link_mode),
        };
    }

    let parsed = parse_info(info);
    let tags = kind
        .implicit_tag(num)
        .into_iter()
        .chain(parsed.tags)
        .collect();

    RecordBody::Tags {
        tags,
        skill: parsed.skill,
    }
}

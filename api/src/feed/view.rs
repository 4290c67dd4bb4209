//! Feed view models
//!
//! Converts stored log records into display-ready entries. Rendering is pure:
//! the current time is passed in, and one bad record never sinks the batch.

use serde::Serialize;

use super::interpreter::{interpret_info, RecordBody};
use super::linkify::LinkMode;
use super::relative_time::format_since;
use crate::domain::entities::{AnnouncementType, LogRecord, LogRecordId};
use crate::error::DomainError;

/// Where the announcer can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub user: String,
    pub channel: String,
    pub network: String,
}

/// A display-ready feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub id: LogRecordId,
    pub type_label: &'static str,
    pub body: RecordBody,
    pub contact: Contact,
    pub relative_time: String,
}

/// A record that could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFailure {
    pub id: LogRecordId,
    pub error: String,
}

/// Result of rendering a batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedFeed {
    /// Entries in the same order as the input records
    pub entries: Vec<ViewModel>,
    pub failures: Vec<RenderFailure>,
}

/// Renders log records into view models
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordRenderer {
    link_mode: LinkMode,
}

impl RecordRenderer {
    pub fn new(link_mode: LinkMode) -> Self {
        Self { link_mode }
    }

    /// Render a single record as seen at `now` (epoch seconds)
    pub fn render(&self, record: &LogRecord, now: i64) -> Result<ViewModel, DomainError> {
        let kind = AnnouncementType::try_from(record.kind)?;

        Ok(ViewModel {
            id: record.id,
            type_label: kind.label(),
            body: interpret_info(kind, record.num, record.info.as_deref(), self.link_mode),
            contact: Contact {
                user: record.user.clone(),
                channel: record.channel.clone(),
                network: record.network.clone(),
            },
            relative_time: format_since(record.time, now),
        })
    }

    /// Render every record in order, collecting failures instead of aborting
    pub fn render_all(&self, records: &[LogRecord], now: i64) -> RenderedFeed {
        records
            .iter()
            .fold(RenderedFeed::default(), |mut feed, record| {
                match self.render(record, now) {
                    Ok(view) => feed.entries.push(view),
                    Err(e) => {
                        tracing::warn!("Skipping log record {}: {}", record.id, e);
                        feed.failures.push(RenderFailure {
                            id: record.id,
                            error: e.to_string(),
                        });
                    }
                }
                feed
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SkillLevel;
    use crate::test_utils::{test_message, test_record};

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn renders_war_end_to_end() {
        let mut record = test_record(1, 1);
        record.num = Some(4);
        record.info = Some("high ctf".to_string());
        record.time = NOW - 120;

        let view = RecordRenderer::default().render(&record, NOW).unwrap();

        assert_eq!(view.type_label, "CW");
        assert_eq!(
            view.body,
            RecordBody::Tags {
                tags: vec!["4 vs 4".to_string(), "Capture the Flag".to_string()],
                skill: SkillLevel::High,
            }
        );
        assert_eq!(view.relative_time, "2 minutes ago");
    }

    #[test]
    fn copies_contact_verbatim() {
        let mut record = test_record(1, 4);
        record.user = "<clearskies>".to_string();
        record.channel = "skiesclear".to_string();
        record.network = "Quakenet".to_string();

        let view = RecordRenderer::default().render(&record, NOW).unwrap();

        assert_eq!(
            view.contact,
            Contact {
                user: "<clearskies>".to_string(),
                channel: "skiesclear".to_string(),
                network: "Quakenet".to_string(),
            }
        );
    }

    #[test]
    fn invalid_type_fails_record() {
        let record = test_record(1, 9);
        let result = RecordRenderer::default().render(&record, NOW);
        assert_eq!(result, Err(DomainError::InvalidType(9)));
    }

    #[test]
    fn render_all_preserves_order() {
        let records = vec![test_record(30, 2), test_record(20, 5), test_record(10, 3)];

        let feed = RecordRenderer::default().render_all(&records, NOW);

        let ids: Vec<i64> = feed.entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![30, 20, 10]);
        assert!(feed.failures.is_empty());
    }

    #[test]
    fn render_all_skips_bad_record_and_continues() {
        let records = vec![test_record(3, 1), test_record(2, 0), test_record(1, 4)];

        let feed = RecordRenderer::default().render_all(&records, NOW);

        let ids: Vec<i64> = feed.entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(
            feed.failures,
            vec![RenderFailure {
                id: LogRecordId(2),
                error: "Invalid announcement type: 0".to_string(),
            }]
        );
    }

    #[test]
    fn render_all_empty_input() {
        let feed = RecordRenderer::default().render_all(&[], NOW);
        assert_eq!(feed, RenderedFeed::default());
    }

    #[test]
    fn renderer_link_mode_applies_to_messages() {
        let record = test_message(1, "a http://ex.com/a b http://ex.org/b");

        let legacy = RecordRenderer::new(LinkMode::ReplaceAllWithFirst)
            .render(&record, NOW)
            .unwrap();
        let each = RecordRenderer::new(LinkMode::EachOwnTarget)
            .render(&record, NOW)
            .unwrap();

        assert_ne!(legacy.body, each.body);
        let RecordBody::Message { html } = each.body else {
            panic!("expected message body");
        };
        assert!(html.contains("href=\"http://ex.org/b\""));
    }

    #[test]
    fn view_model_serializes_for_json_clients() {
        let mut record = test_record(5, 3);
        record.num = Some(2);
        record.time = NOW - 2 * 86_400;

        let view = RecordRenderer::default().render(&record, NOW).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["type_label"], "Ringer");
        assert_eq!(json["body"]["kind"], "tags");
        assert_eq!(json["body"]["tags"][0], "Need: 2");
        assert_eq!(json["relative_time"], "2 days ago");
    }
}

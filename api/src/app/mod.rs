//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between the feed core, ports, and the chat relay.

pub mod announcement_parser;
pub mod feed_service;
pub mod ingest_service;

pub use feed_service::FeedService;
pub use ingest_service::{IngestOutcome, IngestService};

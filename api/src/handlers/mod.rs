//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod announcements;
pub mod feed;

pub use announcements::post_announcement;
pub use feed::get_feed;

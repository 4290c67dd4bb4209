//! Announcement handlers
//!
//! Endpoint the chat relay posts warbot lines to.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::app::IngestOutcome;
use crate::error::AppError;
use crate::AppState;

/// Request body for POST /announcements
#[derive(Debug, Deserialize)]
pub struct AnnouncementRequest {
    /// Nick of the chat user who sent the line
    pub nick: String,
    /// The raw chat line
    pub message: String,
}

/// POST /announcements
///
/// Records a relayed chat line.
/// - 201 with the stored record when the line is an announcement from warbot
/// - 202 with `ignored_sender` or `unrecognized` otherwise
pub async fn post_announcement(
    State(state): State<AppState>,
    Json(body): Json<AnnouncementRequest>,
) -> Result<impl IntoResponse, AppError> {
    if body.nick.trim().is_empty() {
        return Err(AppError::BadRequest("nick must not be empty".to_string()));
    }

    let outcome = state
        .ingest_service
        .ingest(&body.nick, &body.message)
        .await?;

    let status = match outcome {
        IngestOutcome::Recorded { .. } => StatusCode::CREATED,
        IngestOutcome::IgnoredSender | IngestOutcome::Unrecognized => StatusCode::ACCEPTED,
    };

    Ok((status, Json(outcome)))
}

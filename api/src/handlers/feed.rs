//! Feed handlers
//!
//! Endpoint for the announcement listing.
//! Supports content negotiation: Accept: application/json for JSON, otherwise HTML.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::feed::render_page;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET / and GET /feed
///
/// Returns the most recent announcements.
/// - Accept: application/json → JSON entries plus skipped records
/// - Otherwise → Auto-refreshing HTML page
pub async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let feed = state.feed_service.generate_feed().await?;

    if wants_json(&headers) {
        Ok(Json(feed).into_response())
    } else {
        Ok(Html(render_page(&feed, &state.page)).into_response())
    }
}

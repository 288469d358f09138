//! Fallback for paths no page serves

use axum::{extract::State, http::StatusCode, http::Uri, response::Response};

use crate::pages::AppState;
use crate::render::{self, Page};

/// Any unmatched path
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No page for {}", uri.path());

    let messages = state.messages();
    let content = format!(
        "{}{}",
        render::alert(messages.page_not_found),
        render::link("/", messages.back_to_home)
    );
    render::page_with_status(
        StatusCode::NOT_FOUND,
        &Page::new(state.locale, messages.page_not_found),
        &content,
    )
}

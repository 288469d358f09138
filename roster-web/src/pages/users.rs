//! User Pages
//!
//! List and detail pages. Both stream their chrome first and render the
//! fetched data once the users API has answered.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::pages::AppState;
use crate::render::{self, Page};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Response {
    tracing::debug!("Rendering user list");

    let messages = state.messages();
    let source = state.users.clone();
    let page = Page::new(state.locale, messages.user_list_heading);

    render::suspense(&page, "", async move {
        let fetched = source.list_users().await;
        render::users::user_list(&fetched, messages)
    })
}

/// GET /users/{id}
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    tracing::debug!("Rendering user {}", id);

    let messages = state.messages();
    let source = state.users.clone();
    let page = Page::new(state.locale, messages.user_detail_heading);
    let back = render::link("/users", messages.back_to_list);

    render::suspense(&page, &back, async move {
        let fetched = source.get_user(&id).await;
        render::users::user_detail(&fetched, messages)
    })
}

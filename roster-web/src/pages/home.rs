//! Home page

use axum::{extract::State, response::Html};

use crate::pages::AppState;
use crate::render::{Page, link};

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let messages = state.messages();
    Page::new(state.locale, messages.home_heading)
        .render(&link("/users", messages.user_list_link))
}

//! Pages Module
//!
//! HTTP surface of the front-end.
//! Each submodule serves the pages for a specific area.

pub mod error;
pub mod health;
pub mod home;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_client::UserSource;
use roster_core::i18n::{Locale, Messages};
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every page
#[derive(Clone)]
pub struct AppState {
    /// Where user data comes from
    pub users: Arc<dyn UserSource>,

    /// Language of the rendered pages
    pub locale: Locale,
}

impl AppState {
    pub fn new(users: Arc<dyn UserSource>, locale: Locale) -> Self {
        Self { users, locale }
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }
}

/// Create the main router with all pages
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(home::home))
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
        .fallback(error::not_found)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

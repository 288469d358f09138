//! In-memory user sources for page tests

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::Request,
    response::Response,
};
use roster_client::UserSource;
use roster_core::Fetched;
use roster_core::domain::user::User;
use roster_core::i18n::Locale;
use tokio::sync::Notify;
use tower::ServiceExt;

use crate::config::{Config, parse_api_url};
use crate::pages::AppState;

pub fn alice() -> User {
    User {
        id: "1".into(),
        name: "Alice".into(),
        email: "a@x.com".into(),
    }
}

/// Answers from a fixed list, or fails every request
pub struct StubSource {
    users: Fetched<Vec<User>>,
}

impl StubSource {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Fetched::success(users),
        }
    }

    pub fn empty() -> Self {
        Self::with_users(vec![])
    }

    pub fn failing(message: &str) -> Self {
        Self {
            users: Fetched::error(message),
        }
    }

    pub fn into_state(self, locale: Locale) -> AppState {
        AppState::new(Arc::new(self), locale)
    }
}

#[async_trait]
impl UserSource for StubSource {
    async fn list_users(&self) -> Fetched<Vec<User>> {
        self.users.clone()
    }

    async fn get_user(&self, id: &str) -> Fetched<User> {
        match &self.users {
            Fetched::Success { data } => data
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .map(Fetched::success)
                .unwrap_or_else(|| Fetched::not_found("ユーザーが存在しません。")),
            Fetched::NotFound { message } => Fetched::not_found(message.as_str()),
            Fetched::Error { message } => Fetched::error(message.as_str()),
        }
    }
}

/// Holds every answer until released
pub struct GatedSource {
    gate: Notify,
    users: Fetched<Vec<User>>,
}

impl GatedSource {
    pub fn new(users: Fetched<Vec<User>>) -> Self {
        Self {
            gate: Notify::new(),
            users,
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl UserSource for GatedSource {
    async fn list_users(&self) -> Fetched<Vec<User>> {
        self.gate.notified().await;
        self.users.clone()
    }

    async fn get_user(&self, _id: &str) -> Fetched<User> {
        self.gate.notified().await;
        Fetched::error("unused")
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Serve `upstream` on a free local port and point a real API client at it
pub async fn api_client_state(upstream: Router, locale: Locale) -> AppState {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, upstream).await;
    });

    let config = Config::new(parse_api_url(&format!("http://{addr}")).unwrap()).with_locale(locale);
    AppState::new(Arc::new(config.api_client().unwrap()), locale)
}

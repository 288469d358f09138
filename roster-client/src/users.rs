//! User-related API endpoints

use async_trait::async_trait;
use roster_core::Fetched;
use roster_core::domain::user::User;

use crate::ApiClient;
use crate::locator::ResourceLocator;

/// Anything a page can read users from
///
/// The web front-end depends on this seam rather than on the HTTP client,
/// so pages can be rendered against any source.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// All users, in the order the API returns them
    async fn list_users(&self) -> Fetched<Vec<User>>;

    /// A single user by id
    async fn get_user(&self, id: &str) -> Fetched<User>;
}

impl ApiClient {
    // =============================================================================
    // Users
    // =============================================================================

    /// List all users
    ///
    /// `GET {base}/users`
    pub async fn fetch_users(&self) -> Fetched<Vec<User>> {
        self.fetch_resource(&ResourceLocator::users()).await
    }

    /// Get a user by ID
    ///
    /// `GET {base}/users/{id}`; a 404 resolves to [`Fetched::NotFound`].
    pub async fn fetch_user(&self, id: &str) -> Fetched<User> {
        self.fetch_resource(&ResourceLocator::user(id)).await
    }
}

#[async_trait]
impl UserSource for ApiClient {
    async fn list_users(&self) -> Fetched<Vec<User>> {
        self.fetch_users().await
    }

    async fn get_user(&self, id: &str) -> Fetched<User> {
        self.fetch_user(id).await
    }
}

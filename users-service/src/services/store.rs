use crate::models::{User, UserPayload};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Access to the `users` collection. Each method is a single database call;
/// nothing here spans two calls, so callers composing them get no isolation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, in the backend's natural order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Store a new user and return it with its assigned id.
    /// Fails with [`AppError::AlreadyExists`] if the username is taken.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// Overwrite all four fields; `None` when no user has this id.
    async fn replace_fields(
        &self,
        id: &ObjectId,
        payload: UserPayload,
    ) -> Result<Option<User>, AppError>;

    /// Remove a user, returning it; `None` when no user has this id.
    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

use crate::models::{User, UserPayload};
use crate::services::store::UserStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local user store, selected with `DATABASE_BACKEND=memory`.
///
/// Keeps insertion order and enforces username uniqueness under the write lock,
/// matching the unique index the MongoDB backend creates.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn username_taken(users: &[User], username: Option<&str>, except: Option<&ObjectId>) -> bool {
    let Some(username) = username else {
        return false;
    };
    users
        .iter()
        .filter(|u| except.is_none() || u.id.as_ref() != except)
        .any(|u| u.username.as_deref() == Some(username))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if username_taken(&users, user.username.as_deref(), None) {
            return Err(AppError::AlreadyExists);
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn replace_fields(
        &self,
        id: &ObjectId,
        payload: UserPayload,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        let Some(index) = users.iter().position(|u| u.id.as_ref() == Some(id)) else {
            return Ok(None);
        };
        if username_taken(&users, payload.username.as_deref(), Some(id)) {
            return Err(AppError::AlreadyExists);
        }

        let user = &mut users[index];
        user.apply(payload);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        Ok(users
            .iter()
            .position(|u| u.id.as_ref() == Some(id))
            .map(|index| users.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

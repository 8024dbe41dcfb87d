use crate::models::{User, UserPayload};
use crate::services::store::UserStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Unique index on string usernames, closing the check-then-insert race
    /// in the create handler.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for users-service");

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .name("username_unique".to_string())
                    .unique(true)
                    .partial_filter_expression(doc! { "username": { "$type": "string" } })
                    .build(),
            )
            .build();

        self.users()
            .create_index(username_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create username index on users collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created unique index on users.username");

        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::AlreadyExists
    } else {
        AppError::from(err)
    }
}

#[async_trait]
impl UserStore for MongoDb {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users().find_one(doc! { "_id": *id }, None).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users()
            .find_one(doc! { "username": username }, None)
            .await?)
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .users()
            .insert_one(&user, None)
            .await
            .map_err(map_write_error)?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn replace_fields(
        &self,
        id: &ObjectId,
        payload: UserPayload,
    ) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.users()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": payload.to_set_document() },
                options,
            )
            .await
            .map_err(map_write_error)
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self
            .users()
            .find_one_and_delete(doc! { "_id": *id }, None)
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

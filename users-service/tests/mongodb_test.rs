//! Runs against a live MongoDB (`MONGODB_URI`, default `mongodb://localhost:27017`).
//! `cargo test -- --ignored` to include.

mod common;

use common::{alice, assert_same_fields, test_config, TestApp};
use reqwest::StatusCode;
use serde_json::Value;
use users_service::config::DatabaseBackend;
use users_service::services::MongoDb;
use uuid::Uuid;

fn mongodb_uri() -> String {
    std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

async fn drop_database(name: &str) {
    let db = MongoDb::connect(&mongodb_uri(), name)
        .await
        .expect("Failed to connect to MongoDB");
    let _ = db.database().drop(None).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn crud_round_trip_against_mongodb() {
    let db_name = format!("users_test_{}", Uuid::new_v4().simple());
    let app = TestApp::spawn_with(test_config(
        DatabaseBackend::MongoDb,
        Some(mongodb_uri()),
        &db_name,
    ))
    .await;

    let created: Value = app.create_user(&alice()).await.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let fetched: Value = app.get_user(&id).await.json().await.unwrap();
    assert_same_fields(&fetched, &alice());

    assert_eq!(
        app.create_user(&alice()).await.status(),
        StatusCode::BAD_REQUEST
    );

    assert_eq!(app.delete_user(&id).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get_user(&id).await.status(), StatusCode::NOT_FOUND);

    drop_database(&db_name).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn unique_index_rejects_concurrent_duplicates() {
    let db_name = format!("users_test_{}", Uuid::new_v4().simple());
    let app = TestApp::spawn_with(test_config(
        DatabaseBackend::MongoDb,
        Some(mongodb_uri()),
        &db_name,
    ))
    .await;

    let payload = alice();
    let (first, second) = tokio::join!(app.create_user(&payload), app.create_user(&payload));
    let mut statuses = vec![first.status(), second.status()];
    statuses.sort();

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    assert_eq!(app.list_users().await.len(), 1);

    drop_database(&db_name).await;
}

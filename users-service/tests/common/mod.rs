#![allow(dead_code)]

use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use users_service::config::{DatabaseBackend, DatabaseConfig, UsersConfig};
use users_service::services::UserStore;
use users_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn UserStore>,
    pub client: reqwest::Client,
}

pub fn test_config(backend: DatabaseBackend, uri: Option<String>, name: &str) -> UsersConfig {
    UsersConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        database: DatabaseConfig {
            backend,
            uri,
            name: name.to_string(),
        },
    }
}

impl TestApp {
    /// Spawn the server on a random port with the in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(DatabaseBackend::Memory, None, "users_test")).await
    }

    pub async fn spawn_with(config: UsersConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_user(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/users"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/api/users/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_users(&self) -> Vec<Value> {
        self.client
            .get(self.url("/api/users"))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON")
    }

    pub async fn update_user(&self, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/api/users/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_user(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/api/users/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn alice() -> Value {
    json!({
        "username": "alice",
        "email": "a@x.com",
        "score": 10,
        "interests": ["chess"]
    })
}

/// Compare the four data fields; `score` is compared numerically.
pub fn assert_same_fields(actual: &Value, expected: &Value) {
    assert_eq!(actual["username"], expected["username"]);
    assert_eq!(actual["email"], expected["email"]);
    assert_eq!(actual["score"].as_f64(), expected["score"].as_f64());
    assert_eq!(actual["interests"], expected["interests"]);
}

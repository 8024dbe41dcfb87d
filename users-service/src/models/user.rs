//! The user document and its HTTP request/response shapes.
//!
//! Storage is schema-less beyond these four fields, so every field is optional:
//! a missing field is stored absent and rendered back as `null`.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Stored as a BSON double: integers come back as floats (`10` -> `10.0`)
    /// and lose precision above 2^53.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl User {
    /// Overwrite all four data fields, absent values included.
    pub fn apply(&mut self, payload: UserPayload) {
        self.username = payload.username;
        self.email = payload.email;
        self.score = payload.score;
        self.interests = payload.interests;
    }
}

/// Body of `POST /api/users` and `PUT /api/users/:id`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub score: Option<f64>,
    pub interests: Option<Vec<String>>,
}

impl UserPayload {
    pub fn into_user(self) -> User {
        let mut user = User::default();
        user.apply(self);
        user
    }

    /// `$set` body for a full replacement; absent fields are written as null.
    pub fn to_set_document(&self) -> Document {
        doc! {
            "username": self.username.clone(),
            "email": self.email.clone(),
            "score": self.score,
            "interests": self.interests.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub score: Option<f64>,
    pub interests: Option<Vec<String>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            score: user.score,
            interests: user.interests,
        }
    }
}

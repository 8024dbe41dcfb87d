use crate::models::{UserPayload, UserResponse};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub const USER_NOT_FOUND: &str = "User not found";

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        tracing::warn!(id = %id, "Malformed user id");
        AppError::from(e)
    })
}

fn parse_body(body: Result<Json<UserPayload>, JsonRejection>) -> Result<UserPayload, AppError> {
    body.map(|Json(payload)| payload)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.store.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;

    let user = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let payload = parse_body(body)?;

    if let Some(username) = payload.username.as_deref() {
        if state.store.find_by_username(username).await?.is_some() {
            tracing::info!(username = %username, "Rejected duplicate username");
            return Err(AppError::AlreadyExists);
        }
    }

    let user = state.store.insert(payload.into_user()).await?;

    tracing::info!(
        user_id = %user.id.map(|id| id.to_hex()).unwrap_or_default(),
        "User created"
    );

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Full replacement of the four fields. An unknown id is not an error:
/// the response body is `null`.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let id = parse_id(&id)?;
    let payload = parse_body(body)?;

    let updated = state.store.replace_fields(&id, payload).await?;
    if updated.is_none() {
        tracing::debug!(user_id = %id, "Update matched no user");
    }

    Ok(Json(updated.map(UserResponse::from)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    state
        .store
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}

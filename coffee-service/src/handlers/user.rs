use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson;
use service_core::error::AppError;
use validator::Validate;

use crate::{
    dtos::{CreateUserRequest, DeleteAck, InsertAck, UpdateAck, UpdateLastLoginRequest, UserResponse},
    models::User,
    startup::AppState,
};

use super::parse_object_id;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.repository.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<InsertAck>), AppError> {
    payload.validate()?;
    tracing::info!(email = %payload.email, "Creating user record");
    let result = state.repository.insert_user(User::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(InsertAck::from(result))))
}

/// Sets only `lastLoggedAt` on the record matching the submitted email.
/// An unknown email is reported as a zero-count acknowledgment, not an
/// error.
pub async fn update_last_login(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLastLoginRequest>,
) -> Result<Json<UpdateAck>, AppError> {
    payload.validate()?;
    tracing::info!(email = %payload.email, "Updating last login");
    let result = state
        .repository
        .update_last_login(
            &payload.email,
            bson::DateTime::from_chrono(payload.last_logged_at),
        )
        .await?;
    Ok(Json(UpdateAck::from(result)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let id = parse_object_id(&id)?;
    tracing::info!(user_id = %id, "Deleting user record");
    let result = state.repository.delete_user(id).await?;
    Ok(Json(DeleteAck::from(result)))
}

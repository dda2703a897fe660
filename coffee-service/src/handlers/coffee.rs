use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{CoffeeResponse, CreateCoffeeRequest, DeleteAck, InsertAck, ReplaceCoffeeRequest, UpdateAck},
    models::Coffee,
    startup::AppState,
};

use super::parse_object_id;

pub async fn list_coffee(
    State(state): State<AppState>,
) -> Result<Json<Vec<CoffeeResponse>>, AppError> {
    let coffees = state.repository.list_coffee().await?;
    Ok(Json(coffees.into_iter().map(CoffeeResponse::from).collect()))
}

/// Responds 200 with a null body when no record matches; callers treat an
/// empty result as an ordinary outcome.
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<CoffeeResponse>>, AppError> {
    let id = parse_object_id(&id)?;
    let coffee = state.repository.find_coffee(id).await?;
    Ok(Json(coffee.map(CoffeeResponse::from)))
}

pub async fn create_coffee(
    State(state): State<AppState>,
    Json(payload): Json<CreateCoffeeRequest>,
) -> Result<(StatusCode, Json<InsertAck>), AppError> {
    tracing::info!(name = %payload.name, "Creating coffee record");
    let result = state.repository.insert_coffee(Coffee::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(InsertAck::from(result))))
}

/// Full replacement of the seven content fields, upserting when the id is
/// absent. Omitted fields are wiped to null; this is deliberately not a
/// merge.
pub async fn replace_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReplaceCoffeeRequest>,
) -> Result<Json<UpdateAck>, AppError> {
    let id = parse_object_id(&id)?;
    tracing::info!(coffee_id = %id, "Replacing coffee record");
    let result = state.repository.replace_coffee_fields(id, &payload).await?;
    Ok(Json(UpdateAck::from(result)))
}

pub async fn delete_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let id = parse_object_id(&id)?;
    tracing::info!(coffee_id = %id, "Deleting coffee record");
    let result = state.repository.delete_coffee(id).await?;
    Ok(Json(DeleteAck::from(result)))
}

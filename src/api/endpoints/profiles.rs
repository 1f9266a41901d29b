//! Household profile CRUD.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ProfileInput, UserProfile};

#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

fn input(body: Result<Json<ProfileInput>, JsonRejection>) -> Result<ProfileInput, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// `GET /api/profiles`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<ProfilesResponse>, ApiError> {
    let profiles = ctx.read_profiles()?.list();
    Ok(Json(ProfilesResponse { profiles }))
}

/// `POST /api/profiles`
pub async fn create(
    State(ctx): State<ApiContext>,
    body: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let input = input(body)?;
    let profile = ctx.write_profiles()?.create(input)?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// `GET /api/profiles/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(ctx.read_profiles()?.get(&id)?))
}

/// `PUT /api/profiles/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    body: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let input = input(body)?;
    Ok(Json(ctx.write_profiles()?.update(&id, input)?))
}

/// `DELETE /api/profiles/:id`
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    ctx.write_profiles()?.delete(&id)?;
    Ok(Json(DeletedResponse { deleted: id }))
}

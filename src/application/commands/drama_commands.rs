// src/application/commands/drama_commands.rs

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{
    dto::*,
    error_handling::{CommandResult, ErrorResponse},
    state::AppState,
};
use crate::services::AddDramaRequest;

/// GET /api/dramas[?status=] -- newest first
pub async fn list_dramas(
    State(state): State<AppState>,
    Query(query): Query<ListDramasQuery>,
) -> CommandResult<Json<Vec<DramaDto>>> {
    let dramas = match query.status.as_deref() {
        Some(raw) => state.drama_service.list_by_status(parse_status(raw)?)?,
        None => state.drama_service.list_dramas()?,
    };

    Ok(Json(dramas.iter().map(DramaDto::from).collect()))
}

/// GET /api/dramas/{id}
pub async fn get_drama(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
) -> CommandResult<Json<DramaDto>> {
    let id = parse_drama_id(&drama_id)?;

    state
        .drama_service
        .get_drama(id)?
        .map(|drama| Json(DramaDto::from(drama)))
        .ok_or_else(|| ErrorResponse::not_found("Drama"))
}

/// POST /api/dramas
pub async fn add_drama(
    State(state): State<AppState>,
    Json(dto): Json<AddDramaDto>,
) -> CommandResult<(StatusCode, Json<CreatedDto>)> {
    let request = AddDramaRequest::try_from(dto)?;

    let id = state
        .drama_service
        .add_drama(request)
        .await
        .map_err(ErrorResponse::could_not_add)?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id: id.to_string() })))
}

/// PUT /api/dramas/{id}/progress
pub async fn update_progress(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
    Json(dto): Json<UpdateProgressDto>,
) -> CommandResult<Json<ProgressResultDto>> {
    let id = parse_drama_id(&drama_id)?;

    let update = state
        .drama_service
        .update_progress(id, dto.watched_episodes)
        .await?;

    Ok(Json(update.into()))
}

/// PUT /api/dramas/{id}/rating
pub async fn update_rating(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
    Json(dto): Json<UpdateRatingDto>,
) -> CommandResult<StatusCode> {
    let id = parse_drama_id(&drama_id)?;
    let viewer = parse_viewer(&dto.viewer)?;

    state
        .drama_service
        .update_rating(id, viewer, dto.rating)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/dramas/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
    Json(dto): Json<UpdateStatusDto>,
) -> CommandResult<StatusCode> {
    let id = parse_drama_id(&drama_id)?;
    let status = parse_status(&dto.status)?;
    let chosen_by = dto.chosen_by.as_deref().map(parse_viewer).transpose()?;

    state
        .drama_service
        .update_status(id, status, chosen_by)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/dramas/{id}
pub async fn delete_drama(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
) -> CommandResult<StatusCode> {
    let id = parse_drama_id(&drama_id)?;
    state.drama_service.delete_drama(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// src/application/commands/statistics_commands.rs

use axum::extract::State;
use axum::Json;

use crate::application::{
    dto::*,
    error_handling::CommandResult,
    state::AppState,
};

/// GET /api/statistics
pub async fn get_statistics(
    State(state): State<AppState>,
) -> CommandResult<Json<DramaStatisticsDto>> {
    let stats = state.statistics_service.calculate_statistics()?;

    Ok(Json(DramaStatisticsDto::from(stats)))
}

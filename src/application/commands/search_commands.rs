// src/application/commands/search_commands.rs
//
// Read-only passthrough to the metadata provider.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::application::{
    dto::{LanguageQuery, SearchQuery},
    error_handling::CommandResult,
    state::AppState,
};
use crate::integrations::{SearchPage, ShowDetails};

/// GET /api/search?query=&language=
pub async fn search_shows(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> CommandResult<Json<SearchPage>> {
    let language = state.language(query.language);
    let page = state.metadata.search(&query.query, &language).await?;
    Ok(Json(page))
}

/// GET /api/shows/{external_id}?language=
pub async fn get_show_details(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> CommandResult<Json<ShowDetails>> {
    let language = state.language(query.language);
    let details = state.metadata.get_details(&external_id, &language).await?;
    Ok(Json(details))
}

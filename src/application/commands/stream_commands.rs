// src/application/commands/stream_commands.rs
//
// Server-Sent Event feeds. Every event carries a full state, never a diff.

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::{Stream, StreamExt};

use crate::application::{
    dto::*,
    error_handling::CommandResult,
    state::AppState,
};

/// GET /api/dramas/stream -- one `snapshot` event per change
pub async fn stream_dramas(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = state.feed_service.stream().map(|snapshot| {
        let dramas: Vec<DramaDto> = snapshot.iter().map(DramaDto::from).collect();
        Event::default().event("snapshot").json_data(dramas)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// GET /api/dramas/{id}/stream -- `drama` events, `null` once deleted
pub async fn stream_drama(
    State(state): State<AppState>,
    Path(drama_id): Path<String>,
) -> CommandResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let id = parse_drama_id(&drama_id)?;

    let stream = state.feed_service.watch_drama(id).map(|drama| {
        Event::default()
            .event("drama")
            .json_data(drama.map(DramaDto::from))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

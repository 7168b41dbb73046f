use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tokio_stream::StreamExt;
use tower::ServiceExt;

use dramalog::application::{build_cors_layer, build_router, AppState};
use dramalog::db::{create_connection_pool, initialize_database};
use dramalog::integrations::{MetadataProvider, SearchPage, ShowDetails, ShowSummary};
use dramalog::{AppError, AppResult};

/// Provider double: every show has `episodes` episodes, or every call fails.
pub struct StubProvider {
    pub episodes: u32,
    pub fail: bool,
}

#[async_trait]
impl MetadataProvider for StubProvider {
    async fn search(&self, query: &str, _language: &str) -> AppResult<SearchPage> {
        if self.fail {
            return Err(AppError::MetadataUnavailable("stub".to_string()));
        }
        if query.trim().is_empty() {
            return Ok(SearchPage::empty());
        }
        Ok(SearchPage {
            page: 1,
            results: vec![ShowSummary {
                external_id: "100".to_string(),
                name: query.to_string(),
                original_name: None,
                poster_path: Some("/100.jpg".to_string()),
                first_air_date: None,
                vote_average: 8.0,
                overview: None,
                origin_country: vec!["KR".to_string()],
            }],
            total_pages: 1,
            total_results: 1,
        })
    }

    async fn get_details(&self, external_id: &str, _language: &str) -> AppResult<ShowDetails> {
        if self.fail {
            return Err(AppError::MetadataUnavailable("stub".to_string()));
        }
        Ok(ShowDetails {
            external_id: external_id.to_string(),
            name: format!("Show {}", external_id),
            poster_path: None,
            number_of_episodes: self.episodes,
            number_of_seasons: 1,
            genres: Vec::new(),
            overview: None,
            status: None,
            tagline: None,
            first_air_date: None,
            vote_average: 0.0,
            cast: Vec::new(),
        })
    }
}

/// Build the full router over a fresh on-disk database.
/// The TempDir must outlive the router.
pub fn build_test_app(provider: StubProvider) -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_connection_pool(&dir.path().join("dramalog.db")).unwrap();
    initialize_database(&pool.get().unwrap()).unwrap();

    let state = AppState::initialize(Arc::new(pool), Arc::new(provider), "pt-BR".to_string())
        .unwrap();
    let cors = build_cors_layer(&["http://localhost:3001".to_string()]).unwrap();

    (dir, build_router(state, cors))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the first Server-Sent Event from a streaming response and return its
/// event name and decoded data.
pub async fn first_sse_event(response: Response) -> (String, Value) {
    let mut frames = response.into_body().into_data_stream();
    let mut buffer = String::new();

    let read = async {
        while !buffer.contains("\n\n") {
            let chunk = frames.next().await.unwrap().unwrap();
            buffer.push_str(std::str::from_utf8(&chunk).unwrap());
        }
    };
    tokio::time::timeout(std::time::Duration::from_secs(5), read)
        .await
        .unwrap();

    let block = buffer.split("\n\n").next().unwrap();
    let mut event = String::new();
    let mut data = String::new();
    for line in block.lines() {
        if let Some(name) = line.strip_prefix("event:") {
            event = name.trim().to_string();
        } else if let Some(payload) = line.strip_prefix("data:") {
            data.push_str(payload.trim_start());
        }
    }

    (event, serde_json::from_str(&data).unwrap())
}

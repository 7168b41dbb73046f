//! Integration tests for the drama HTTP surface.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{body_json, build_test_app, first_sse_event, send, StubProvider};

fn provider(episodes: u32) -> StubProvider {
    StubProvider {
        episodes,
        fail: false,
    }
}

async fn add(app: &axum::Router, body: serde_json::Value) -> String {
    let response = send(app, Method::POST, "/api/dramas", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok() {
    let (_dir, app) = build_test_app(provider(16));
    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_then_finish_by_progress() {
    let (_dir, app) = build_test_app(provider(16));
    let id = add(
        &app,
        json!({"externalId": "100", "title": "Goblin", "posterPath": "/g.jpg",
               "status": "watching", "chosenBy": "Dan"}),
    )
    .await;

    let json = body_json(send(&app, Method::GET, &format!("/api/dramas/{}", id), None).await).await;
    assert_eq!(json["totalEpisodes"], 16);
    assert_eq!(json["watchedEpisodes"], 0);
    assert_eq!(json["chosenBy"], "Dan");

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/progress", id),
        Some(json!({"watchedEpisodes": 16})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["autoCompleted"], true);
    assert_eq!(json["status"], "completed");

    let list = body_json(send(&app, Method::GET, "/api/dramas?status=completed", None).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn watchlist_entry_with_unknown_length() {
    let (_dir, app) = build_test_app(provider(0));
    let id = add(
        &app,
        json!({"externalId": "200", "title": "Upcoming", "status": "watchlist"}),
    )
    .await;

    send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/progress", id),
        Some(json!({"watchedEpisodes": 5})),
    )
    .await;

    let json = body_json(send(&app, Method::GET, &format!("/api/dramas/{}", id), None).await).await;
    assert_eq!(json["watchedEpisodes"], 5);
    assert_eq!(json["status"], "watchlist");
    assert!(json["chosenBy"].is_null());
    assert!(json["progressPercent"].is_null());
}

#[tokio::test]
async fn status_and_rating_updates() {
    let (_dir, app) = build_test_app(provider(16));
    let id = add(
        &app,
        json!({"externalId": "300", "title": "Vincenzo", "status": "watching", "chosenBy": "carol"}),
    )
    .await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/rating", id),
        Some(json!({"viewer": "dan", "rating": 2})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/rating", id),
        Some(json!({"viewer": "carol", "rating": 4})),
    )
    .await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/status", id),
        Some(json!({"status": "completed"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(send(&app, Method::GET, &format!("/api/dramas/{}", id), None).await).await;
    assert_eq!(json["ratings"]["dan"], 2.0);
    assert_eq!(json["ratings"]["carol"], 4.0);
    assert_eq!(json["watchedEpisodes"], 16);
    assert_eq!(json["averageRating"], 3.0);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, app) = build_test_app(provider(10));
    let id = add(&app, json!({"externalId": "1", "title": "Mouse", "status": "watchlist"})).await;

    let uri = format!("/api/dramas/{}", id);
    assert_eq!(send(&app, Method::DELETE, &uri, None).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(&app, Method::DELETE, &uri, None).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(&app, Method::GET, &uri, None).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn provider_failure_is_a_single_notice() {
    let (_dir, app) = build_test_app(StubProvider {
        episodes: 0,
        fail: true,
    });

    let response = send(
        &app,
        Method::POST,
        "/api/dramas",
        Some(json!({"externalId": "1", "title": "Goblin", "status": "watchlist"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().starts_with("Could not add drama"));

    let list = body_json(send(&app, Method::GET, "/api/dramas", None).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn caller_errors_are_rejected() {
    let (_dir, app) = build_test_app(provider(16));

    let response = send(
        &app,
        Method::POST,
        "/api/dramas",
        Some(json!({"externalId": "1", "title": "Goblin", "status": "watching"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(
        &app,
        Method::POST,
        "/api/dramas",
        Some(json!({"externalId": "1", "title": "Goblin", "status": "paused"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let id = add(&app, json!({"externalId": "1", "title": "Goblin", "status": "watchlist"})).await;
    let response = send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/rating", id),
        Some(json!({"viewer": "dan", "rating": 9})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error_type"], "domain_error");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let (_dir, app) = build_test_app(provider(16));

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/progress", uuid::Uuid::new_v4()),
        Some(json!({"watchedEpisodes": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::GET, "/api/dramas/not-a-uuid", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_rejects_path_like_external_id() {
    let (_dir, app) = build_test_app(provider(12));
    let response = send(
        &app,
        Method::POST,
        "/api/dramas",
        Some(json!({"externalId": "1/season/1", "title": "Goblin", "status": "watchlist"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(send(&app, Method::GET, "/api/dramas", None).await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Live streams
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feed_stream_opens_with_newest_first_snapshot() {
    let (_dir, app) = build_test_app(provider(10));
    add(&app, json!({"externalId": "1", "title": "Older", "status": "watchlist"})).await;
    let newest = add(&app, json!({"externalId": "2", "title": "Newer", "status": "watchlist"})).await;

    let response = send(&app, Method::GET, "/api/dramas/stream", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/event-stream"
    );

    let (event, data) = first_sse_event(response).await;
    assert_eq!(event, "snapshot");
    let titles: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);

    let response = send(&app, Method::GET, &format!("/api/dramas/{}/stream", newest), None).await;
    let (event, data) = first_sse_event(response).await;
    assert_eq!(event, "drama");
    assert_eq!(data["id"], newest.as_str());
}

// ---------------------------------------------------------------------------
// Provider passthrough and statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_and_details_passthrough() {
    let (_dir, app) = build_test_app(provider(12));

    let json = body_json(send(&app, Method::GET, "/api/search?query=Goblin", None).await).await;
    assert_eq!(json["totalResults"], 1);
    assert_eq!(json["results"][0]["externalId"], "100");

    let json = body_json(send(&app, Method::GET, "/api/search?query=", None).await).await;
    assert_eq!(json["totalResults"], 0);

    let json = body_json(send(&app, Method::GET, "/api/shows/42?language=en-US", None).await).await;
    assert_eq!(json["numberOfEpisodes"], 12);
}

#[tokio::test]
async fn statistics_reflect_the_log() {
    let (_dir, app) = build_test_app(provider(10));
    let id = add(
        &app,
        json!({"externalId": "1", "title": "Start-Up", "status": "watching", "chosenBy": "Dan"}),
    )
    .await;
    add(&app, json!({"externalId": "2", "title": "Hospital Playlist", "status": "watchlist"})).await;
    send(
        &app,
        Method::PUT,
        &format!("/api/dramas/{}/progress", id),
        Some(json!({"watchedEpisodes": 4})),
    )
    .await;

    let json = body_json(send(&app, Method::GET, "/api/statistics", None).await).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["watching"], 1);
    assert_eq!(json["episodesWatched"], 4);
    assert_eq!(json["watchingPercent"], 50.0);
}

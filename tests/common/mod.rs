#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn track_json(id: &str, name: &str, artist: &str, preview_url: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{ "id": format!("{id}-artist"), "name": artist }],
        "album": {
            "name": "A Night at the Opera",
            "images": [
                { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
            ],
            "release_date": "1975-11-21"
        },
        "preview_url": preview_url,
        "popularity": 83,
        "duration_ms": 354320,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
        "uri": format!("spotify:track:{id}")
    })
}

pub fn features_json(id: &str) -> Value {
    json!({
        "id": id,
        "danceability": 0.8,
        "energy": 0.6,
        "speechiness": 0.1,
        "acousticness": 0.2,
        "instrumentalness": 0.0,
        "liveness": 0.3,
        "valence": 0.5,
        "tempo": 120.0,
        "loudness": -9.9,
        "key": 10,
        "mode": 0,
        "time_signature": 4
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
}

/// Fake Web API answering searches by exact `q` parameter and audio features
/// by track id. Unknown queries return no candidates, unknown ids 404.
pub fn spotify_api(
    searches: HashMap<String, Vec<Value>>,
    features: HashMap<String, Value>,
) -> Router {
    spotify_api_for_market("US", searches, features)
}

/// Like [`spotify_api`], but searches must be scoped to `market`. Searches
/// without `type=track`, `limit=10` and that market are answered with 400.
pub fn spotify_api_for_market(
    market: &str,
    searches: HashMap<String, Vec<Value>>,
    features: HashMap<String, Value>,
) -> Router {
    let market = market.to_string();
    let searches = Arc::new(searches);
    let features = Arc::new(features);

    Router::new()
        .route(
            "/search",
            get(
                move |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| {
                    let searches = Arc::clone(&searches);
                    let market = market.clone();
                    async move {
                        if !authorized(&headers) {
                            return unauthorized();
                        }
                        let scoped = params.get("type").map(String::as_str) == Some("track")
                            && params.get("limit").map(String::as_str) == Some("10")
                            && params.get("market") == Some(&market);
                        if !scoped {
                            return (
                                StatusCode::BAD_REQUEST,
                                Json(json!({ "error": { "status": 400, "message": "Bad search parameters" } })),
                            );
                        }
                        let items = params
                            .get("q")
                            .and_then(|q| searches.get(q))
                            .cloned()
                            .unwrap_or_default();
                        let total = items.len();
                        (
                            StatusCode::OK,
                            Json(json!({ "tracks": { "items": items, "total": total } })),
                        )
                    }
                },
            ),
        )
        .route(
            "/audio-features/{id}",
            get(move |headers: HeaderMap, Path(id): Path<String>| {
                let features = Arc::clone(&features);
                async move {
                    if !authorized(&headers) {
                        return unauthorized();
                    }
                    match features.get(&id) {
                        Some(f) => (StatusCode::OK, Json(f.clone())),
                        None => (
                            StatusCode::NOT_FOUND,
                            Json(json!({ "error": { "status": 404, "message": "Not found" } })),
                        ),
                    }
                }
            }),
        )
}

/// Fake API where every route fails with `status`.
pub fn failing_api(status: StatusCode) -> Router {
    Router::new()
        .route("/search", get(move || async move { (status, Json(json!({}))) }))
        .route(
            "/audio-features/{id}",
            get(move || async move { (status, Json(json!({}))) }),
        )
}

/// Fake token endpoint handing out `token` and counting requests.
pub fn token_endpoint(token: &str, expires_in: u64, hits: Arc<AtomicUsize>) -> Router {
    let token = token.to_string();
    Router::new().route(
        "/api/token",
        post(move |headers: HeaderMap| {
            let hits = Arc::clone(&hits);
            let token = token.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                let basic = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.starts_with("Basic "))
                    .unwrap_or(false);
                if !basic {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "error": "invalid_client" })),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": token,
                        "token_type": "Bearer",
                        "expires_in": expires_in
                    })),
                )
            }
        }),
    )
}

/// Fake token endpoint where every request fails with `status`.
pub fn failing_token_endpoint(status: StatusCode) -> Router {
    Router::new().route(
        "/api/token",
        post(move || async move { (status, Json(json!({ "error": "server_error" }))) }),
    )
}

/// Fake token endpoint that rejects every client.
pub fn rejecting_token_endpoint() -> Router {
    Router::new().route(
        "/api/token",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid_client" })),
            )
        }),
    )
}

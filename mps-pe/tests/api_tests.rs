//! Integration tests for mps-pe API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Build info endpoint
//! - Embedded UI serving
//! - Playlist generation: clamping, per-index cycles, reason tags,
//!   summary composition, echo semantics, determinism
//! - Framework-level rejection of malformed bodies

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mps_common::config::{ListenConfig, DEFAULT_BIND, DEFAULT_PORT};
use mps_pe::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Create app with default listen config
fn setup_app() -> axum::Router {
    let listen = ListenConfig {
        bind: DEFAULT_BIND.to_string(),
        port: DEFAULT_PORT,
    };
    build_router(AppState::new(listen))
}

/// Test helper: Create GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create POST request with a JSON body
fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: POST a generation request and return the parsed 200 response
async fn generate(body: Value) -> Value {
    let app = setup_app();
    let response = app
        .oneshot(post_json("/api/generate-playlist", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await
}

// =============================================================================
// Health and Build Info Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "mps-pe");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app();
    let response = app.oneshot(get_request("/api/buildinfo")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
    assert!(body["build_profile"].is_string());
}

// =============================================================================
// Embedded UI
// =============================================================================

#[tokio::test]
async fn test_index_served() {
    let app = setup_app();
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Mood Playlist Studio"));
}

#[tokio::test]
async fn test_app_js_served_with_content_type() {
    let app = setup_app();
    let response = app.oneshot(get_request("/static/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
}

// =============================================================================
// Playlist Generation: Count Clamping
// =============================================================================

#[tokio::test]
async fn test_empty_body_defaults_to_25_tracks() {
    let body = generate(json!({})).await;
    assert_eq!(body["playlist"].as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn test_track_count_clamping_table() {
    for (requested, expected) in [(10, 25), (25, 25), (33, 33), (50, 50), (75, 50)] {
        let body = generate(json!({ "controls": { "trackCount": requested } })).await;
        assert_eq!(
            body["playlist"].as_array().unwrap().len(),
            expected,
            "requested {}",
            requested
        );
    }
}

// =============================================================================
// Playlist Generation: Per-Index Rules
// =============================================================================

#[tokio::test]
async fn test_provider_cycle() {
    let body = generate(json!({})).await;
    let playlist = body["playlist"].as_array().unwrap();

    let expected = ["spotify", "apple", "deezer"];
    for (idx, track) in playlist.iter().enumerate() {
        assert_eq!(track["provider"], expected[idx % 3], "track {}", idx);
    }
    assert_eq!(playlist[0]["id"], "spotify-1");
    assert_eq!(playlist[1]["id"], "apple-2");
    assert_eq!(playlist[2]["id"], "deezer-3");
}

#[tokio::test]
async fn test_preview_url_present_iff_even_index() {
    let body = generate(json!({})).await;
    let playlist = body["playlist"].as_array().unwrap();

    for (idx, track) in playlist.iter().enumerate() {
        let track = track.as_object().unwrap();
        if idx % 2 == 0 {
            assert_eq!(
                track["previewUrl"],
                format!("https://p.scdn.co/mp3-preview/mock-{}", idx),
                "track {}",
                idx
            );
        } else {
            // Odd tracks omit the field entirely
            assert!(!track.contains_key("previewUrl"), "track {}", idx);
        }
    }
}

#[tokio::test]
async fn test_tempo_ramp() {
    let body = generate(json!({ "controls": { "trackCount": 50 } })).await;
    let playlist = body["playlist"].as_array().unwrap();

    for (idx, track) in playlist.iter().enumerate() {
        assert_eq!(track["tempo"], 90 + (idx as u64 % 8) * 5, "track {}", idx);
    }
}

#[tokio::test]
async fn test_title_word_cycles() {
    let body = generate(json!({})).await;
    let playlist = body["playlist"].as_array().unwrap();

    assert_eq!(playlist[0]["title"], "Sparkling Echo");
    assert_eq!(playlist[1]["title"], "Velvet Pulse");
    assert_eq!(playlist[5]["title"], "Magnetic Glow");
    assert_eq!(playlist[6]["title"], "Sparkling Echo");
}

#[tokio::test]
async fn test_reason_tags_from_input_controls() {
    let body = generate(json!({
        "tone": "dark",
        "vibes": ["hype", "calm"],
        "controls": { "energy": 0.6, "tempo": 0.5 }
    }))
    .await;
    let playlist = body["playlist"].as_array().unwrap();

    let expected = json!(["hype vibe", "darker mood", "energy 6/10", "tempo 5/10"]);
    for track in playlist {
        assert_eq!(track["reasonTags"], expected);
    }
}

// =============================================================================
// Playlist Generation: Summary and Echo
// =============================================================================

#[tokio::test]
async fn test_summary_with_mood_tone_and_vibes() {
    let body = generate(json!({
        "mood": "Sunrise",
        "tone": "dark",
        "vibes": ["hype", "calm"]
    }))
    .await;
    assert_eq!(
        body["summary"],
        "Sunrise playlist built with hype, calm in a dark mood"
    );
}

#[tokio::test]
async fn test_summary_defaults() {
    let body = generate(json!({ "mood": "", "vibes": [] })).await;
    assert_eq!(
        body["summary"],
        "Custom playlist built with your picks in a light mood"
    );
}

#[tokio::test]
async fn test_request_fields_echoed_unchanged() {
    let body = generate(json!({
        "mood": "Night drive",
        "tone": "dark",
        "vibes": ["moody"],
        "controls": { "energy": 0.3, "acoustics": 0.8, "trackCount": 75 }
    }))
    .await;

    assert_eq!(body["mood"], "Night drive");
    assert_eq!(body["tone"], "dark");
    assert_eq!(body["vibes"], json!(["moody"]));
    // Controls echo the raw input, including the unclamped count
    assert_eq!(
        body["controls"],
        json!({ "energy": 0.3, "acoustics": 0.8, "trackCount": 75 })
    );
    assert_eq!(body["playlist"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_tone_defaults_to_light_when_absent() {
    let body = generate(json!({ "mood": "Sunrise" })).await;
    assert_eq!(body["tone"], "light");
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .ends_with("in a light mood"));
}

#[tokio::test]
async fn test_identical_requests_yield_identical_bytes() {
    let request = json!({
        "mood": "Focus",
        "vibes": ["focus"],
        "controls": { "energy": 0.7, "tempo": 0.4, "acoustics": 0.2, "trackCount": 42 }
    });

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let app = setup_app();
        let response = app
            .oneshot(post_json("/api/generate-playlist", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(
            axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap(),
        );
    }
    assert_eq!(bodies[0], bodies[1]);
}

// =============================================================================
// Framework-Level Rejections
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = setup_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-playlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_mistyped_field_is_rejected() {
    let app = setup_app();
    let response = app
        .oneshot(post_json("/api/generate-playlist", &json!({ "vibes": 5 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

//! Playlist generation endpoint

use axum::{extract::State, Json};
use mps_common::api::{GeneratePlaylistRequest, PlaylistResponse};
use tracing::info;

use crate::synthesis;
use crate::AppState;

/// POST /api/generate-playlist
///
/// Fabricates a playlist from the submitted mood preferences. Total over any
/// request shape: missing fields default and out-of-range counts clamp, so
/// the handler itself cannot fail. Malformed JSON is rejected by the `Json`
/// extractor before reaching this function.
pub async fn generate_playlist(
    State(_state): State<AppState>,
    Json(request): Json<GeneratePlaylistRequest>,
) -> Json<PlaylistResponse> {
    info!(
        "Generating playlist: mood={:?} vibes={} requested_count={:?}",
        request.mood,
        request.vibes.len(),
        request.controls.track_count
    );

    Json(synthesis::synthesize(request))
}

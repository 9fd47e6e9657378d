//! Shared API request/response types
//!
//! Wire format is camelCase JSON (`trackCount`, `reasonTags`, `previewUrl`),
//! matching the published client. Every field of the generation request is
//! optional; the Playlist Engine fills defaults rather than rejecting.

use serde::{Deserialize, Serialize};

/// Streaming provider a fabricated track is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Spotify,
    Apple,
    Deezer,
}

impl Provider {
    /// Lowercase wire name, also used as the track id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Spotify => "spotify",
            Provider::Apple => "apple",
            Provider::Deezer => "deezer",
        }
    }
}

/// Requested mood darkness
///
/// Absent in a request means `Light`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Light,
    Dark,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Light => "light",
            Tone::Dark => "dark",
        }
    }
}

/// Slider controls parameterizing playlist synthesis
///
/// `energy`, `tempo` and `acoustics` are normalized to `[0, 1]`;
/// `track_count` is clamped into `[25, 50]` where consumed. Absent fields
/// stay absent when the controls are echoed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acoustics: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<i64>,
}

/// Request body for POST /api/generate-playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlaylistRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub controls: Controls,
}

/// One fabricated track
///
/// Generated fresh per request; carries no identity beyond the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub provider: Provider,
    pub energy: f64,
    /// BPM
    pub tempo: u32,
    pub reason_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Response body for POST /api/generate-playlist
///
/// Echoes the request fields back unchanged alongside the playlist and a
/// one-line summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub playlist: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub tone: Tone,
    pub vibes: Vec<String>,
    pub controls: Controls,
    pub summary: String,
}

//! Playlist synthesis
//!
//! Pure transform from submitted mood preferences to a fabricated playlist.
//! No randomness, no I/O, no clock reads: identical input yields identical
//! output, which the client relies on when regenerating a set.

use mps_common::api::{GeneratePlaylistRequest, PlaylistResponse, Provider, Tone, Track};

/// Fixed provider rotation; the provider name doubles as the track id prefix
const PROVIDERS: [Provider; 3] = [Provider::Spotify, Provider::Apple, Provider::Deezer];

const ADJECTIVES: [&str; 6] = ["Sparkling", "Velvet", "Solar", "Midnight", "Breezy", "Magnetic"];
const NOUNS: [&str; 6] = ["Echo", "Pulse", "Dream", "Groove", "Wave", "Glow"];

/// Smallest playlist the engine will fabricate (also the default)
pub const MIN_TRACK_COUNT: i64 = 25;
/// Largest playlist the engine will fabricate
pub const MAX_TRACK_COUNT: i64 = 50;

/// Slider position assumed when the client omits a control
const DEFAULT_LEVEL: f64 = 0.5;

/// Clamp a requested track count into `[MIN_TRACK_COUNT, MAX_TRACK_COUNT]`
///
/// Zero and negative counts are treated as absent and fall back to the
/// minimum.
pub fn clamp_track_count(requested: Option<i64>) -> usize {
    let count = match requested {
        Some(n) if n > 0 => n,
        _ => MIN_TRACK_COUNT,
    };
    count.clamp(MIN_TRACK_COUNT, MAX_TRACK_COUNT) as usize
}

/// Fabricate a full playlist response from a generation request
///
/// Echoes `mood`, `tone`, `vibes` and `controls` back unchanged alongside
/// the playlist and summary line.
pub fn synthesize(request: GeneratePlaylistRequest) -> PlaylistResponse {
    let tone = request.tone.unwrap_or_default();
    let count = clamp_track_count(request.controls.track_count);

    let dominant_vibe = request
        .vibes
        .first()
        .map(String::as_str)
        .filter(|v| !v.is_empty());

    let playlist = build_tracks(
        count,
        request.controls.energy,
        request.controls.tempo,
        dominant_vibe,
        tone,
    );
    let summary = summary(request.mood.as_deref(), tone, &request.vibes);

    PlaylistResponse {
        playlist,
        mood: request.mood,
        tone,
        vibes: request.vibes,
        controls: request.controls,
        summary,
    }
}

/// Per-index generation rule
///
/// Provider, title words and preview presence cycle independently by index;
/// per-track energy jitters upward from the input slider in 0.05 steps and
/// clamps to `[0, 1]`. Reason tags are derived from the input controls, not
/// the per-track values, so they are identical across the set.
fn build_tracks(
    count: usize,
    energy: Option<f64>,
    tempo: Option<f64>,
    dominant_vibe: Option<&str>,
    tone: Tone,
) -> Vec<Track> {
    let input_energy = energy.unwrap_or(DEFAULT_LEVEL);
    let input_tempo = tempo.unwrap_or(DEFAULT_LEVEL);

    let reason_tags = vec![
        format!("{} vibe", dominant_vibe.unwrap_or("balanced")),
        match tone {
            Tone::Dark => "darker mood",
            Tone::Light => "lighter mood",
        }
        .to_string(),
        format!("energy {}/10", input_energy * 10.0),
        format!("tempo {}/10", input_tempo * 10.0),
    ];

    (0..count)
        .map(|idx| {
            let provider = PROVIDERS[idx % PROVIDERS.len()];
            Track {
                id: format!("{}-{}", provider.as_str(), idx + 1),
                title: format!(
                    "{} {}",
                    ADJECTIVES[idx % ADJECTIVES.len()],
                    NOUNS[idx % NOUNS.len()]
                ),
                artist: format!("Artist {}", idx + 1),
                provider,
                energy: (input_energy + (idx % 5) as f64 * 0.05).clamp(0.0, 1.0),
                tempo: 90 + (idx % 8) as u32 * 5,
                reason_tags: reason_tags.clone(),
                preview_url: (idx % 2 == 0)
                    .then(|| format!("https://p.scdn.co/mp3-preview/mock-{}", idx)),
            }
        })
        .collect()
}

/// One-line description echoed with every response
fn summary(mood: Option<&str>, tone: Tone, vibes: &[String]) -> String {
    let mood = match mood {
        Some(m) if !m.is_empty() => m,
        _ => "Custom",
    };
    let joined = vibes.join(", ");
    let vibes_label = if joined.is_empty() { "your picks" } else { &joined };
    format!(
        "{} playlist built with {} in a {} mood",
        mood,
        vibes_label,
        tone.as_str()
    )
}

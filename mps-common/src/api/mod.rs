//! Shared HTTP API types

pub mod types;

pub use types::{Controls, GeneratePlaylistRequest, PlaylistResponse, Provider, Tone, Track};

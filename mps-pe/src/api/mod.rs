//! HTTP API handlers for mps-pe

pub mod buildinfo;
pub mod health;
pub mod playlist;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use playlist::generate_playlist;
pub use ui::{serve_app_js, serve_index};

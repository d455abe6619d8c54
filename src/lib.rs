//! Library exports for the binary and integration tests.
/// Application directory discovery.
pub mod app_dirs;
/// Persistent settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Tracing subscriber setup and log file rotation.
pub mod logging;
/// Form catalog, request building and the prediction endpoint client.
pub mod prediction;

mod http_client;

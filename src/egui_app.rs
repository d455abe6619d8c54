//! egui front end: controller, UI state and renderer.

/// Message handling and background prediction jobs.
pub mod controller;
/// Plain data rendered by the UI.
pub mod state;
/// eframe application and widgets.
pub mod ui;

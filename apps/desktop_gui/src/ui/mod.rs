//! UI layer: egui app shell, the display-surface abstraction, selector options and result view models.

pub mod app;
pub mod selector;
pub mod surface;
pub mod view_model;

pub use app::PressDeskApp;

//! GUI panels and application state.

pub mod app;
pub mod attendance_panel;
pub mod auth_screen;
pub mod components;
pub mod dashboard;
pub mod roster_panel;
pub mod toast;

pub use app::App;

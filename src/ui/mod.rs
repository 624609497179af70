//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod edit_panel;
pub mod open_panel;

pub use app::App;

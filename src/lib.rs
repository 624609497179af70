pub mod api;
pub mod config;
pub mod departments;
pub mod error;
pub mod form;
pub mod models;
pub mod session;
pub mod submit;
pub mod ui;
pub mod validate;

pub use error::{AppError, Result};

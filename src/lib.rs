pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod ui;

pub use error::{AppError, Result};

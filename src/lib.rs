pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod prompt;
pub mod services;

pub use app::{App, UrlOutcome};
pub use config::Config;
pub use error::{AppError, Result};

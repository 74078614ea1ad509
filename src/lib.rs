// trendy: GitHub trending repositories and developers, scraped and cached.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod state;
pub mod ui;

pub use config::TrendingConfig;
pub use error::{Result, TrendyError};
pub use github::{Developer, DeveloperQuery, Repository, RepositoryQuery, TrendingClient};

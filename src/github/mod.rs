// GitHub trending module.
// Provides the client, URL builders, page schema, and extractors for the trending pages.

pub mod client;
pub mod endpoints;
pub mod extract;
pub mod normalize;
pub mod schema;
pub mod types;

pub use client::TrendingClient;
pub use endpoints::{DEFAULT_SINCE, DeveloperQuery, RepositoryQuery};
pub use extract::{extract_developers, extract_repositories};
pub use schema::PageSchema;
pub use types::*;

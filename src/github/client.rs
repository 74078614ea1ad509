// Trending page HTTP client.
// Builds request URLs, consults the list caches, and fetches and extracts on a miss.

use std::time::Duration;

use reqwest::{
    Client, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, info};

use crate::cache::ListCache;
use crate::config::TrendingConfig;
use crate::error::{Result, TrendyError};

use super::endpoints::{DeveloperQuery, RepositoryQuery};
use super::extract::{extract_developers, extract_repositories};
use super::schema::PageSchema;
use super::types::{Developer, Repository};

/// Client for the GitHub trending pages with per-URL result caching.
///
/// Fetch methods take `&self`, so one client can be shared behind an `Arc`.
/// Two callers missing the cache for the same URL at the same time will both
/// fetch; the later store wins.
#[derive(Debug)]
pub struct TrendingClient {
    client: Client,
    base_url: String,
    /// `base_url` parsed once; scraped links are joined against it.
    base: Url,
    schema: PageSchema,
    repositories: ListCache<Repository>,
    developers: ListCache<Developer>,
}

impl TrendingClient {
    pub fn new(config: TrendingConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| TrendyError::Config(format!("user agent: {}", e)))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TrendyError::Http)?;

        let base = Url::parse(&config.base_url)
            .map_err(|e| TrendyError::Config(format!("base url {:?}: {}", config.base_url, e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            base,
            schema: PageSchema::new()?,
            repositories: ListCache::new(config.freshness),
            developers: ListCache::new(config.freshness),
        })
    }

    /// Create a client from `TRENDY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(TrendingConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL (and cache key) for a repositories query.
    pub fn repositories_url(&self, query: &RepositoryQuery) -> String {
        query.url(&self.base_url)
    }

    /// Request URL (and cache key) for a developers query.
    pub fn developers_url(&self, query: &DeveloperQuery) -> String {
        query.url(&self.base_url)
    }

    /// Trending repositories for `query`, served from cache when fresh.
    pub async fn fetch_repositories(&self, query: &RepositoryQuery) -> Result<Vec<Repository>> {
        let url = self.repositories_url(query);

        let cached = self.repositories.lookup(&url);
        if !cached.is_empty() {
            debug!(%url, count = cached.len(), "repositories cache hit");
            return Ok(cached);
        }
        debug!(%url, "repositories cache miss");

        let html = self.get_text(&url).await?;
        let list = extract_repositories(&html, &self.schema, &self.base);
        info!(%url, count = list.len(), "fetched trending repositories");

        self.repositories.store(&url, list.clone());
        Ok(list)
    }

    /// Trending developers for `query`, served from cache when fresh.
    pub async fn fetch_developers(&self, query: &DeveloperQuery) -> Result<Vec<Developer>> {
        let url = self.developers_url(query);

        let cached = self.developers.lookup(&url);
        if !cached.is_empty() {
            debug!(%url, count = cached.len(), "developers cache hit");
            return Ok(cached);
        }
        debug!(%url, "developers cache miss");

        let html = self.get_text(&url).await?;
        let list = extract_developers(&html, &self.schema, &self.base);
        info!(%url, count = list.len(), "fetched trending developers");

        self.developers.store(&url, list.clone());
        Ok(list)
    }

    /// Age of the cached repositories list for `query`, if any.
    pub fn repositories_age(&self, query: &RepositoryQuery) -> Option<Duration> {
        self.repositories.age_of(&self.repositories_url(query))
    }

    /// Age of the cached developers list for `query`, if any.
    pub fn developers_age(&self, query: &DeveloperQuery) -> Option<Duration> {
        self.developers.age_of(&self.developers_url(query))
    }

    /// Forget the cached repositories list for `query`.
    pub fn invalidate_repositories(&self, query: &RepositoryQuery) {
        self.repositories.invalidate(&self.repositories_url(query));
    }

    /// Forget the cached developers list for `query`.
    pub fn invalidate_developers(&self, query: &DeveloperQuery) {
        self.developers.invalidate(&self.developers_url(query));
    }

    /// Forget every cached list.
    pub fn clear_cache(&self) {
        self.repositories.clear();
        self.developers.clear();
    }

    /// GET `url` and decode the body as text.
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await.map_err(TrendyError::Http)?;
        let response = check_response(response)?;
        Ok(response.text().await?)
    }
}

/// Reject non-2xx responses.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TrendyError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}

// Trending page URL builders.
// Turns filter options into the request URL that also keys the cache.

use urlencoding::encode;

/// Default trending window.
pub const DEFAULT_SINCE: &str = "daily";

/// Filters for the trending repositories page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryQuery {
    /// Programming language slug; empty means all languages.
    pub language: String,
    /// Trending window (`daily`, `weekly`, `monthly`). Not validated.
    pub since: String,
    /// Spoken language code, e.g. `zh`; empty means unfiltered.
    pub spoken_language: String,
}

impl Default for RepositoryQuery {
    fn default() -> Self {
        Self {
            language: String::new(),
            since: DEFAULT_SINCE.to_string(),
            spoken_language: String::new(),
        }
    }
}

impl RepositoryQuery {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = since.into();
        self
    }

    pub fn spoken_language(mut self, code: impl Into<String>) -> Self {
        self.spoken_language = code.into();
        self
    }

    /// Request URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/trending/{}?since={}&spoken_language_code={}",
            base_url,
            encode(&self.language),
            encode(&self.since),
            encode(&self.spoken_language)
        )
    }
}

/// Filters for the trending developers page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperQuery {
    /// Programming language slug; empty means all languages.
    pub language: String,
    /// Trending window (`daily`, `weekly`, `monthly`). Not validated.
    pub since: String,
}

impl Default for DeveloperQuery {
    fn default() -> Self {
        Self {
            language: String::new(),
            since: DEFAULT_SINCE.to_string(),
        }
    }
}

impl DeveloperQuery {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = since.into();
        self
    }

    /// Request URL under `base_url`. The language is a path segment here.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/trending/developers/{}?since={}",
            base_url,
            encode(&self.language),
            encode(&self.since)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com";

    #[test]
    fn test_repository_defaults() {
        assert_eq!(
            RepositoryQuery::default().url(BASE),
            "https://github.com/trending/?since=daily&spoken_language_code="
        );
    }

    #[test]
    fn test_repository_filters_are_encoded() {
        let url = RepositoryQuery::default()
            .language("c++")
            .since("weekly")
            .spoken_language("zh")
            .url(BASE);
        assert_eq!(
            url,
            "https://github.com/trending/c%2B%2B?since=weekly&spoken_language_code=zh"
        );

        let url = RepositoryQuery::default().language("f#").url(BASE);
        assert!(url.starts_with("https://github.com/trending/f%23?"));

        let url = RepositoryQuery::default().language("visual basic").url(BASE);
        assert!(url.starts_with("https://github.com/trending/visual%20basic?"));
    }

    #[test]
    fn test_unknown_since_passes_through() {
        let url = RepositoryQuery::default().since("yearly").url(BASE);
        assert!(url.contains("since=yearly&"));
    }

    #[test]
    fn test_developer_urls() {
        assert_eq!(
            DeveloperQuery::default().url(BASE),
            "https://github.com/trending/developers/?since=daily"
        );
        assert_eq!(
            DeveloperQuery::default()
                .language("rust")
                .since("monthly")
                .url(BASE),
            "https://github.com/trending/developers/rust?since=monthly"
        );
    }

    #[test]
    fn test_distinct_filters_give_distinct_keys() {
        let daily = RepositoryQuery::default().url(BASE);
        let weekly = RepositoryQuery::default().since("weekly").url(BASE);
        assert_ne!(daily, weekly);
    }
}

// Trending filter state.
// Language, time window, and spoken language shared by both tabs.

use crate::github::{DEFAULT_SINCE, DeveloperQuery, RepositoryQuery};

/// Windows the `s` key cycles through.
pub const SINCE_CYCLE: [&str; 3] = ["daily", "weekly", "monthly"];

/// Filters applied to both trending listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub language: String,
    pub since: String,
    /// Only used by the repositories listing.
    pub spoken_language: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            language: String::new(),
            since: DEFAULT_SINCE.to_string(),
            spoken_language: String::new(),
        }
    }
}

impl Filters {
    /// Advance `since` to the next window. Unknown values restart the cycle.
    pub fn cycle_since(&mut self) {
        let next = SINCE_CYCLE
            .iter()
            .position(|s| *s == self.since)
            .map(|i| SINCE_CYCLE[(i + 1) % SINCE_CYCLE.len()])
            .unwrap_or(SINCE_CYCLE[0]);
        self.since = next.to_string();
    }

    pub fn repository_query(&self) -> RepositoryQuery {
        RepositoryQuery::default()
            .language(self.language.clone())
            .since(self.since.clone())
            .spoken_language(self.spoken_language.clone())
    }

    pub fn developer_query(&self) -> DeveloperQuery {
        DeveloperQuery::default()
            .language(self.language.clone())
            .since(self.since.clone())
    }

    /// Short label for the status bar.
    pub fn summary(&self) -> String {
        let language = if self.language.is_empty() {
            "all languages"
        } else {
            self.language.as_str()
        };
        if self.spoken_language.is_empty() {
            format!("{} · {}", language, self.since)
        } else {
            format!("{} · {} · spoken: {}", language, self.since, self.spoken_language)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_since() {
        let mut filters = Filters::default();
        filters.cycle_since();
        assert_eq!(filters.since, "weekly");
        filters.cycle_since();
        assert_eq!(filters.since, "monthly");
        filters.cycle_since();
        assert_eq!(filters.since, "daily");

        filters.since = "yearly".to_string();
        filters.cycle_since();
        assert_eq!(filters.since, "daily");
    }

    #[test]
    fn test_queries_carry_filters() {
        let filters = Filters {
            language: "rust".to_string(),
            since: "weekly".to_string(),
            spoken_language: "en".to_string(),
        };

        let repo = filters.repository_query();
        assert_eq!(repo.language, "rust");
        assert_eq!(repo.spoken_language, "en");

        let dev = filters.developer_query();
        assert_eq!(dev.since, "weekly");
    }

    #[test]
    fn test_summary() {
        assert_eq!(Filters::default().summary(), "all languages · daily");
    }
}

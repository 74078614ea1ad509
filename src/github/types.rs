// Trending page record types.
// Defines the structs extracted from repository and developer listings.

use serde::{Deserialize, Serialize};

/// A contributor highlighted under "Built by" on a trending repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One entry on the trending repositories page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub author: String,
    pub name: String,
    pub avatar: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_color: Option<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub current_period_stars: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_by: Option<Vec<Contributor>>,
}

impl Repository {
    /// `author/name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.author, self.name)
    }
}

/// Repository summary shown next to a trending developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperRepo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

/// One entry on the trending developers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub username: String,
    pub name: String,
    /// Hovercard type, usually `user` or `organization`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<DeveloperRepo>,
}

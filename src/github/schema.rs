// Page schema for the trending listings.
// Every selector and label the extractors rely on lives here.

use scraper::Selector;

use crate::error::{Result, TrendyError};

/// Repeated row container on both listings.
pub const ROW: &str = ".Box article.Box-row";

pub const REPO_TITLE: &str = ".h3";
pub const REPO_TITLE_LINK: &str = ".h3 a";
pub const REPO_DESCRIPTION: &str = "p.my-1";
pub const REPO_LANGUAGE: &str = "[itemprop=programmingLanguage]";
pub const REPO_LANGUAGE_COLOR: &str = ".repo-language-color";
pub const REPO_STAR_ICON: &str = ".mr-3 svg[aria-label='star']";
pub const REPO_FORK_ICON: &str = "svg[aria-label='fork']";
pub const REPO_PERIOD_STARS: &str = ".float-sm-right";
pub const BUILT_BY_USER: &str = "[data-hovercard-type=\"user\"]";

pub const DEV_PROFILE_LINK: &str = ".h3 a";
pub const DEV_REPO_BLOCK: &str = ".mt-2 > article";
pub const DEV_REPO_DESCRIPTION: &str = ".f6.mt-1";

pub const SPAN: &str = "span";
pub const IMG: &str = "img";
pub const LINK: &str = "a";

/// Span label that wraps a repository's highlighted contributors.
pub const BUILT_BY_LABEL: &str = "Built by";
/// Span label inside a developer's sponsor button.
pub const SPONSOR_LABEL: &str = "Sponsor";

/// Inline style property carrying the language swatch color.
pub const LANGUAGE_COLOR_PROPERTY: &str = "background-color";
/// Attribute naming the account kind behind an avatar.
pub const HOVERCARD_TYPE_ATTR: &str = "data-hovercard-type";

/// Compiled selectors for both listings.
#[derive(Debug, Clone)]
pub struct PageSchema {
    pub row: Selector,
    pub repo_title: Selector,
    pub repo_title_link: Selector,
    pub repo_description: Selector,
    pub repo_language: Selector,
    pub repo_language_color: Selector,
    pub repo_star_icon: Selector,
    pub repo_fork_icon: Selector,
    pub repo_period_stars: Selector,
    pub built_by_user: Selector,
    pub dev_profile_link: Selector,
    pub dev_repo_block: Selector,
    pub dev_repo_description: Selector,
    pub span: Selector,
    pub img: Selector,
    pub link: Selector,
}

impl PageSchema {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row: parse(ROW)?,
            repo_title: parse(REPO_TITLE)?,
            repo_title_link: parse(REPO_TITLE_LINK)?,
            repo_description: parse(REPO_DESCRIPTION)?,
            repo_language: parse(REPO_LANGUAGE)?,
            repo_language_color: parse(REPO_LANGUAGE_COLOR)?,
            repo_star_icon: parse(REPO_STAR_ICON)?,
            repo_fork_icon: parse(REPO_FORK_ICON)?,
            repo_period_stars: parse(REPO_PERIOD_STARS)?,
            built_by_user: parse(BUILT_BY_USER)?,
            dev_profile_link: parse(DEV_PROFILE_LINK)?,
            dev_repo_block: parse(DEV_REPO_BLOCK)?,
            dev_repo_description: parse(DEV_REPO_DESCRIPTION)?,
            span: parse(SPAN)?,
            img: parse(IMG)?,
            link: parse(LINK)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| TrendyError::Selector(format!("{}: {}", selector, e)))
}

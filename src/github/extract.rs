// Trending page extractors.
// Walks the listing rows and maps each one to a record, field by field.

use reqwest::Url;
use scraper::{ElementRef, Html};
use tracing::warn;

use super::normalize::{absolutize, parse_count, remove_avatar_size, style_property};
use super::schema::{
    BUILT_BY_LABEL, HOVERCARD_TYPE_ATTR, LANGUAGE_COLOR_PROPERTY, PageSchema, SPONSOR_LABEL,
};
use super::types::{Contributor, Developer, DeveloperRepo, Repository};

/// Extract every repository row from a trending repositories page, in page order.
///
/// Rows without a usable `author / name` title are skipped; every other field
/// falls back to absent or zero on its own. Links are resolved against `base`.
pub fn extract_repositories(html: &str, schema: &PageSchema, base: &Url) -> Vec<Repository> {
    let document = Html::parse_document(html);

    document
        .select(&schema.row)
        .enumerate()
        .filter_map(|(position, row)| {
            let repo = repository_from_row(row, schema, base);
            if repo.is_none() {
                warn!(position, "skipping repository row without a title link");
            }
            repo
        })
        .collect()
}

/// Extract every developer row from a trending developers page, in page order.
pub fn extract_developers(html: &str, schema: &PageSchema, base: &Url) -> Vec<Developer> {
    let document = Html::parse_document(html);

    document
        .select(&schema.row)
        .enumerate()
        .filter_map(|(position, row)| {
            let dev = developer_from_row(row, schema, base);
            if dev.is_none() {
                warn!(position, "skipping developer row without a profile link");
            }
            dev
        })
        .collect()
}

fn repository_from_row(
    row: ElementRef<'_>,
    schema: &PageSchema,
    base: &Url,
) -> Option<Repository> {
    let title = row.select(&schema.repo_title).next().map(text)?;
    let (author, name) = split_title(&title)?;
    let url = row
        .select(&schema.repo_title_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| absolutize(base, href))?;
    let avatar = absolutize(base, &format!("/{}.png", author))?;

    let description = row
        .select(&schema.repo_description)
        .next()
        .map(text)
        .unwrap_or_default();

    // An empty marker still reports a language, as "".
    let language = row.select(&schema.repo_language).next().map(text);

    let language_color = row
        .select(&schema.repo_language_color)
        .next()
        .and_then(|node| node.value().attr("style"))
        .and_then(|style| style_property(style, LANGUAGE_COLOR_PROPERTY));

    let stars = row
        .select(&schema.repo_star_icon)
        .next()
        .and_then(parent_element)
        .map(|counter| parse_count(&text(counter)))
        .unwrap_or(0);

    let forks = row
        .select(&schema.repo_fork_icon)
        .next()
        .and_then(parent_element)
        .map(|counter| parse_count(&text(counter)))
        .unwrap_or(0);

    let current_period_stars = row
        .select(&schema.repo_period_stars)
        .next()
        .map(|badge| parse_count(&text(badge)))
        .unwrap_or(0);

    let built_by = row
        .select(&schema.span)
        .find(|span| contains_text(*span, BUILT_BY_LABEL))
        .map(|span| contributors(span, schema, base));

    Some(Repository {
        avatar,
        url,
        author,
        name,
        description,
        language,
        language_color,
        stars,
        forks,
        current_period_stars,
        built_by,
    })
}

fn contributors(span: ElementRef<'_>, schema: &PageSchema, base: &Url) -> Vec<Contributor> {
    span.select(&schema.built_by_user)
        .filter_map(|user| {
            let href = absolutize(base, user.value().attr("href")?)?;
            let img = user
                .children()
                .filter_map(ElementRef::wrap)
                .find(|child| child.value().name() == "img");

            // alt is "@handle"
            let username = img
                .and_then(|img| img.value().attr("alt"))
                .map(|alt| {
                    let mut chars = alt.chars();
                    chars.next();
                    chars.as_str().to_string()
                })
                .filter(|name| !name.is_empty());

            let avatar = img
                .and_then(|img| img.value().attr("src"))
                .map(remove_avatar_size);

            Some(Contributor {
                username,
                href,
                avatar,
            })
        })
        .collect()
}

fn developer_from_row(
    row: ElementRef<'_>,
    schema: &PageSchema,
    base: &Url,
) -> Option<Developer> {
    let link = row.select(&schema.dev_profile_link).next()?;
    let href = link.value().attr("href")?;
    let username = href.strip_prefix('/').unwrap_or(href).to_string();
    if username.is_empty() {
        return None;
    }
    let url = absolutize(base, href)?;

    let avatar_img = row.select(&schema.img).next();

    let account_type = avatar_img
        .and_then(parent_element)
        .and_then(|parent| parent.value().attr(HOVERCARD_TYPE_ATTR))
        .map(str::to_string);

    let avatar = avatar_img
        .and_then(|img| img.value().attr("src"))
        .map(remove_avatar_size);

    let sponsor_url = row
        .select(&schema.span)
        .find(|span| contains_text(*span, SPONSOR_LABEL))
        .and_then(parent_element)
        .and_then(|parent| parent.value().attr("href"))
        .and_then(|href| absolutize(base, href));

    let repo = row
        .select(&schema.dev_repo_block)
        .next()
        .and_then(|block| developer_repo(block, schema, base));

    Some(Developer {
        username,
        name: text(link),
        account_type,
        url,
        sponsor_url,
        avatar,
        repo,
    })
}

fn developer_repo(
    block: ElementRef<'_>,
    schema: &PageSchema,
    base: &Url,
) -> Option<DeveloperRepo> {
    let link = block.select(&schema.link).next()?;
    let url = absolutize(base, link.value().attr("href")?)?;

    let description = block
        .select(&schema.dev_repo_description)
        .next()
        .map(visible_text)
        .unwrap_or_default();

    Some(DeveloperRepo {
        name: visible_text(link),
        description,
        url,
    })
}

/// Split `"author / name"` into its first two trimmed parts. Extra parts are ignored.
fn split_title(title: &str) -> Option<(String, String)> {
    let mut parts = title.split('/').map(str::trim);
    let author = parts.next().filter(|s| !s.is_empty())?;
    let name = parts.next().filter(|s| !s.is_empty())?;
    Some((author.to_string(), name.to_string()))
}

fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

fn contains_text(el: ElementRef<'_>, needle: &str) -> bool {
    el.text().collect::<String>().contains(needle)
}

/// All descendant text, trimmed.
fn text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Descendant text with icon markup (`<svg>` subtrees) left out, trimmed.
fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_visible_text(el, &mut out);
    out.trim().to_string()
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if child_el.value().name() != "svg" {
                push_visible_text(child_el, out);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{DEVELOPERS_PAGE, REPOSITORIES_PAGE};
    use super::*;

    fn base() -> Url {
        Url::parse("https://github.com").unwrap()
    }

    fn repositories() -> Vec<Repository> {
        extract_repositories(REPOSITORIES_PAGE, &PageSchema::new().unwrap(), &base())
    }

    fn developers() -> Vec<Developer> {
        extract_developers(DEVELOPERS_PAGE, &PageSchema::new().unwrap(), &base())
    }

    #[test]
    fn test_full_repository_row() {
        let repos = repositories();
        let repo = &repos[0];

        assert_eq!(repo.author, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.avatar, "https://github.com/rust-lang.png");
        assert_eq!(repo.url, "https://github.com/rust-lang/rust");
        assert_eq!(
            repo.description,
            "Empowering everyone to build reliable and efficient software."
        );
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.language_color.as_deref(), Some("#dea584"));
        assert_eq!(repo.stars, 98_765);
        assert_eq!(repo.forks, 12_345);
        assert_eq!(repo.current_period_stars, 1056);

        let built_by = repo.built_by.as_ref().unwrap();
        assert_eq!(built_by.len(), 2);
        assert_eq!(built_by[0].username.as_deref(), Some("alice"));
        assert_eq!(built_by[0].href, "https://github.com/alice");
        assert_eq!(
            built_by[0].avatar.as_deref(),
            Some("https://avatars.githubusercontent.com/u/1")
        );
        assert_eq!(built_by[1].username.as_deref(), Some("bob"));
    }

    #[test]
    fn test_sparse_repository_row() {
        let repos = repositories();
        let repo = &repos[1];

        assert_eq!(repo.author, "foo");
        assert_eq!(repo.name, "bar");
        assert_eq!(repo.stars, 1200);
        assert_eq!(repo.forks, 0);
        assert_eq!(repo.current_period_stars, 0);
        assert_eq!(repo.description, "");
        assert!(repo.language.is_none());
        assert!(repo.language_color.is_none());
        assert!(repo.built_by.is_none());

        let json = serde_json::to_value(repo).unwrap();
        assert!(json.get("builtBy").is_none());
        assert!(json.get("language").is_none());
    }

    #[test]
    fn test_malformed_row_does_not_stop_extraction() {
        let repos = repositories();
        let names: Vec<String> = repos.iter().map(Repository::full_name).collect();
        assert_eq!(names, vec!["rust-lang/rust", "foo/bar", "octo/widgets"]);
        assert_eq!(repos[2].current_period_stars, 56);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = serde_json::to_string(&repositories()).unwrap();
        let second = serde_json::to_string(&repositories()).unwrap();
        assert_eq!(first, second);

        assert_eq!(developers(), developers());
    }

    #[test]
    fn test_empty_page() {
        let schema = PageSchema::new().unwrap();
        assert!(extract_repositories("<html></html>", &schema, &base()).is_empty());
        assert!(extract_developers("", &schema, &base()).is_empty());
    }

    #[test]
    fn test_full_developer_row() {
        let devs = developers();
        let dev = &devs[0];

        assert_eq!(dev.username, "octocat");
        assert_eq!(dev.name, "The Octocat");
        assert_eq!(dev.account_type.as_deref(), Some("user"));
        assert_eq!(dev.url, "https://github.com/octocat");
        assert_eq!(
            dev.sponsor_url.as_deref(),
            Some("https://github.com/sponsors/octocat")
        );
        assert_eq!(
            dev.avatar.as_deref(),
            Some("https://avatars.githubusercontent.com/u/583231")
        );

        let repo = dev.repo.as_ref().unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description, "My first repository on GitHub!");
        assert_eq!(repo.url, "https://github.com/octocat/Hello-World");
    }

    #[test]
    fn test_sparse_developer_row() {
        let devs = developers();
        assert_eq!(devs.len(), 2);

        let dev = &devs[1];
        assert_eq!(dev.username, "acme");
        assert_eq!(dev.name, "ACME Corp");
        assert_eq!(dev.account_type.as_deref(), Some("organization"));
        assert!(dev.sponsor_url.is_none());
        assert!(dev.repo.is_none());

        let json = serde_json::to_value(dev).unwrap();
        assert!(json.get("sponsorUrl").is_none());
        assert!(json.get("repo").is_none());
    }

    #[test]
    fn test_sponsor_url_uses_base_origin() {
        let page = r#"<div class="Box"><article class="Box-row">
            <h1 class="h3"><a href="/x">X</a></h1>
            <a href="/sponsors/x"><span>Sponsor</span></a>
        </article></div>"#;
        let base = Url::parse("http://127.0.0.1:4010").unwrap();

        let devs = extract_developers(page, &PageSchema::new().unwrap(), &base);
        assert_eq!(
            devs[0].sponsor_url.as_deref(),
            Some("http://127.0.0.1:4010/sponsors/x")
        );
        assert!(devs[0].avatar.is_none());
        assert!(devs[0].account_type.is_none());
    }

    #[test]
    fn test_split_title() {
        assert_eq!(
            split_title(" foo /\n  bar "),
            Some(("foo".to_string(), "bar".to_string()))
        );
        assert_eq!(split_title("foo"), None);
        assert_eq!(
            split_title("a / b / c"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(split_title(" / bar"), None);
    }

    #[test]
    fn test_extra_title_parts_keep_the_row() {
        let page = r#"<div class="Box"><article class="Box-row">
            <h2 class="h3"><a href="/a/b">a / b / c</a></h2>
            <span itemprop="programmingLanguage">  </span>
        </article></div>"#;

        let repos = extract_repositories(page, &PageSchema::new().unwrap(), &base());
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name(), "a/b");
        assert_eq!(repos[0].url, "https://github.com/a/b");
        assert_eq!(repos[0].language.as_deref(), Some(""));

        let json = serde_json::to_value(&repos[0]).unwrap();
        assert_eq!(json["language"], "");
    }

    #[test]
    fn test_protocol_relative_links_resolve_to_their_host() {
        let page = r#"<div class="Box"><article class="Box-row">
            <h1 class="h3"><a href="/x">X</a></h1>
            <a href="//sponsors.example.com/x"><span>Sponsor</span></a>
        </article></div>"#;

        let devs = extract_developers(page, &PageSchema::new().unwrap(), &base());
        assert_eq!(devs[0].url, "https://github.com/x");
        assert_eq!(
            devs[0].sponsor_url.as_deref(),
            Some("https://sponsors.example.com/x")
        );
    }
}

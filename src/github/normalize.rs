// Field normalizers shared by the extractors.
// Integer parsing, avatar size stripping, inline style lookup, and link absolutization.

use reqwest::Url;

/// Strip the `?s=<size>` suffix GitHub appends to avatar URLs.
pub fn remove_avatar_size(src: &str) -> String {
    match src.find("?s=") {
        Some(idx) => src[..idx].to_string(),
        None => src.to_string(),
    }
}

/// Parse a counter like `"1,234"` or `"56 stars today"`.
///
/// Thousands separators are dropped, then the leading run of digits is read.
/// Anything else (missing text, no digits, overflow) is 0.
pub fn parse_count(text: &str) -> u64 {
    let token = text.split_whitespace().next().unwrap_or("");
    let digits: String = token
        .chars()
        .filter(|c| *c != ',')
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Resolve `href` against `base` the way a browser would.
///
/// `None` when the href cannot be joined; callers leave the field out.
pub fn absolutize(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

/// Read one property out of an inline `style` attribute.
pub fn style_property(style: &str, property: &str) -> Option<String> {
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        if name.trim().eq_ignore_ascii_case(property) {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        } else {
            None
        }
    })
}

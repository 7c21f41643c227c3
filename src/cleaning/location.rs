// src/cleaning/location.rs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Scrape artifact: birthplaces arrive as "in Akron, Ohio", sometimes
    // with the separating space mojibake-damaged ("inÂ New York",
    // "inÀ Paris") or with nothing after the prefix at all. Case-sensitive
    // on purpose so "Indianapolis" keeps its head.
    static ref BORN_PREFIX_RE: Regex = Regex::new(r"^in(?:[\sÂÀ]+|$)").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Tidies a scraped birthplace into "City, Region" form.
///
/// Strips the leading "in " artifact, collapses damaged whitespace and
/// re-spaces the comma separators. Values that do not look like a
/// city-comma-region pair pass through otherwise unchanged; only a value
/// that is empty after cleaning becomes `None`.
pub fn normalize_location(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = BORN_PREFIX_RE.replace(trimmed, "");
    let collapsed = WHITESPACE_RE.replace_all(stripped.trim(), " ");

    if collapsed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = collapsed
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    Some(parts.join(", "))
}

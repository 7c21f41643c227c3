// src/cleaning/date.rs

use chrono::NaiveDate;
use log::debug;

// Accepted source layouts, tried in order. chrono's %b also accepts the
// full month name, but %B is listed first so the common scraped form is
// hit without fallthrough.
const DATE_FORMATS: [&str; 4] = [
    "%B %d, %Y", // December 30, 1984
    "%b %d, %Y", // Dec 30, 1984
    "%m/%d/%Y",  // 12/30/1984
    "%Y-%m-%d",  // 1984-12-30 (already canonical)
];

/// Rewrites a scraped date into ISO `YYYY-MM-DD`.
///
/// Returns `None` when no known layout parses the input or when the input
/// names an impossible calendar day; the caller records a null instead of
/// aborting the run.
pub fn normalize_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    debug!("Unparseable date value: '{}'", raw);
    None
}

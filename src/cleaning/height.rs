// src/cleaning/height.rs

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

const CM_PER_INCH: f64 = 2.54;

lazy_static! {
    // 205cm, 205 cm
    static ref CM_RE: Regex = Regex::new(r"^(\d+(?:\.\d+)?)\s*cm$").unwrap();
    // 81 in, 81 inches, 81"
    static ref INCHES_RE: Regex = Regex::new(r#"^(\d+(?:\.\d+)?)\s*(?:inches|inch|in|")$"#).unwrap();
    // 6'9", 6-9, 6 9, 69
    static ref FEET_INCHES_RE: Regex = Regex::new(r#"^(\d+)\s*['-]?\s*(\d{1,2})\s*"?$"#).unwrap();
    // 7, 7'
    static ref FEET_ONLY_RE: Regex = Regex::new(r"^(\d+)\s*'?$").unwrap();
}

// Month abbreviations a spreadsheet substitutes into feet-inches values,
// paired with the digit they stand for
const MONTH_TOKENS: [(&str, &str); 12] = [
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("may", "5"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Rewrites a scraped height into canonical feet-inches form (e.g. "6-9").
///
/// Accepts feet-inches in several punctuation styles, bare feet, inch and
/// centimetre measurements, and values mangled by spreadsheet
/// date-autocorrection ("6-Jun" meaning 6-6). Returns `None` for anything
/// else; the caller records a null instead of aborting the run.
pub fn normalize_height(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let repaired = repair_spreadsheet_months(trimmed);

    if let Some(caps) = CM_RE.captures(&repaired) {
        let cm: f64 = caps[1].parse().ok()?;
        return inches_to_canonical(cm / CM_PER_INCH);
    }

    if let Some(caps) = INCHES_RE.captures(&repaired) {
        let inches: f64 = caps[1].parse().ok()?;
        return inches_to_canonical(inches);
    }

    if let Some(caps) = FEET_INCHES_RE.captures(&repaired) {
        let feet: u32 = caps[1].parse().ok()?;
        let inches: u32 = caps[2].parse().ok()?;
        // 20-5 read out of a bare "205" is not a height
        if feet <= 8 && inches < 12 {
            return Some(format!("{}-{}", feet, inches));
        }
    }

    if let Some(caps) = FEET_ONLY_RE.captures(&repaired) {
        let feet: u32 = caps[1].parse().ok()?;
        if (1..=8).contains(&feet) {
            return Some(format!("{}-0", feet));
        }
    }

    debug!("Unparseable height value: '{}'", raw);
    None
}

/// Undoes spreadsheet date-autocorrection of feet-inches values.
///
/// "6-Jun" was 6-6 before a spreadsheet decided it was June 6th, and
/// "Jul-1" was 7-1. Month names adjacent to a hyphen are put back as the
/// digit they stand for; the result is also lower-cased for the unit
/// patterns downstream.
fn repair_spreadsheet_months(raw: &str) -> String {
    let mut repaired = raw.to_lowercase();
    for (token, digit) in MONTH_TOKENS {
        repaired = repaired
            .replace(&format!("-{}", token), &format!("-{}", digit))
            .replace(&format!("{}-", token), &format!("{}-", digit));
    }
    repaired
}

/// Converts a raw inch count to "feet-inches", rounding to the nearest inch
fn inches_to_canonical(total_inches: f64) -> Option<String> {
    if !total_inches.is_finite() || total_inches <= 0.0 {
        return None;
    }
    let rounded = total_inches.round() as u32;
    if rounded == 0 {
        return None;
    }
    Some(format!("{}-{}", rounded / 12, rounded % 12))
}

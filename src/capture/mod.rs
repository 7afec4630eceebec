//! Capture adapters: turn already-decoded OCR or QR text into candidate
//! identifiers.
//!
//! These are pure pattern matches over free text. OCR output is noisy, so
//! part-number candidates carry false positives by design; downstream
//! catalog resolution filters them out via not-found.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bare part-number token: 4-6 digits with an optional mold-variant letter.
static PART_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{4,6}[a-z]?\b").expect("invalid part token pattern"));

/// Part number following a labeling prefix ("Part: 3001", "No. 3622").
static LABELED_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:part|id|num|no)[:\s]+(\d{4,6}[a-z]?)").expect("invalid labeled pattern")
});

/// Set-number patterns tried in priority order: path style, key-value style,
/// bare `NNNNN-N`.
static SET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"/sets/(\d+-\d+)").expect("invalid path pattern"),
        Regex::new(r"(?i)set[_-]?num[=:](\d+-\d+)").expect("invalid key-value pattern"),
        Regex::new(r"(\d{4,5}-\d+)").expect("invalid bare pattern"),
    ]
});

/// Extract candidate part numbers from OCR text.
///
/// Candidates are lowercased, de-duplicated preserving first-seen order, and
/// at least 4 characters long. Zero candidates is a valid outcome.
pub fn extract_part_numbers(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    let bare = PART_TOKEN.find_iter(text).map(|m| m.as_str());
    let labeled = LABELED_PART
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str());

    for token in bare.chain(labeled) {
        if token.len() < 4 {
            continue;
        }
        let candidate = token.to_lowercase();
        if !found.contains(&candidate) {
            found.push(candidate);
        }
    }

    found
}

/// Extract a set number from decoded QR text, first match wins.
pub fn extract_set_number(data: &str) -> Option<String> {
    for pattern in SET_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(data) {
            return Some(captures[1].to_string());
        }
    }
    None
}

//! Display text helpers: citation stripping and card splitting

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Matches `[cite: 3]`, `[cite: 3, 7]` and the empty `[cite:]`.
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[cite:\s*\d*(,\s*\d*)*\]").expect("Citation regex is valid")
});

/// Remove every citation marker and trim the surrounding whitespace.
///
/// ```
/// use restsec_core::text::clean;
/// assert_eq!(clean("Stateless [cite: 4, 9] "), "Stateless");
/// ```
pub fn clean(text: &str) -> String {
    CITATION_PATTERN.replace_all(text, "").trim().to_string()
}

/// Apply [`clean`] to every string inside a JSON document, in place.
pub fn clean_json(value: &mut Value) {
    match value {
        Value::String(s) => *s = clean(s),
        Value::Array(items) => items.iter_mut().for_each(clean_json),
        Value::Object(map) => map.values_mut().for_each(clean_json),
        _ => {}
    }
}

/// Split a `"Heading: description"` entry on its first colon.
///
/// Entries without a colon become a heading with an empty description.
pub fn split_heading(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((head, rest)) => (head.trim(), rest.trim()),
        None => (text.trim(), ""),
    }
}

/// Two-digit, one-based badge label for list position `index`.
pub fn badge_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_all_marker_shapes() {
        assert_eq!(clean("JWT [cite: 12] is compact"), "JWT  is compact");
        assert_eq!(clean("a[cite: 1, 2,3]b"), "ab");
        assert_eq!(clean("[cite:] leading"), "leading");
        assert_eq!(clean("trailing [cite: 5]"), "trailing");
    }

    #[test]
    fn test_clean_leaves_plain_text() {
        assert_eq!(clean("  Authorization  "), "Authorization");
        assert_eq!(clean("[not a cite]"), "[not a cite]");
    }

    #[test]
    fn test_clean_json_walks_nested_values() {
        let mut doc = serde_json::json!({
            "title": "Hero [cite: 1]",
            "items": [{"desc": " one [cite: 2]"}, 3, null]
        });
        clean_json(&mut doc);
        assert_eq!(doc["title"], "Hero");
        assert_eq!(doc["items"][0]["desc"], "one");
        assert_eq!(doc["items"][1], 3);
    }

    #[test]
    fn test_split_heading_uses_first_colon() {
        assert_eq!(
            split_heading("Chống DOS: API: quá tải"),
            ("Chống DOS", "API: quá tải")
        );
        assert_eq!(split_heading("No colon"), ("No colon", ""));
    }

    #[test]
    fn test_badge_number_is_zero_padded() {
        assert_eq!(badge_number(0), "01");
        assert_eq!(badge_number(9), "10");
    }
}

//! Verdict canonicalization.

use phf::phf_ordered_map;

use crate::types::UNKNOWN;

/// Upper-cased keyword → canonical verdict. Iteration order is lookup order.
pub static VERDICTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "EXCELLENT" => "Excellent",
    "GREAT" => "Great",
    "GOOD" => "Good",
    "AVERAGE" => "Average",
    "FAIR" => "Fair",
    "POOR" => "Poor",
    "BAD" => "Poor",
};

/// Trim, drop one trailing period, then map through [`VERDICTS`] by
/// containment. Unmatched values come back trimmed with only their first
/// letter capitalised, so `"meh"` and `"Meh."` both land on `"Meh"`.
pub fn canonicalize_verdict(verdict: &str) -> String {
    let trimmed = verdict.trim();
    if trimmed.is_empty() {
        return UNKNOWN.to_string();
    }

    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let upper = trimmed.to_uppercase();

    VERDICTS
        .entries()
        .find(|(key, _)| upper.contains(*key))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| capitalize_first(trimmed))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Upscaling technology canonicalization.

use phf::phf_set;

use crate::types::DEFAULT_UPSCALING;

/// Technologies recognised by substring, in lookup order.
pub const TECHNOLOGIES: [&str; 3] = ["DLSS", "FSR", "XESS"];

/// Answers that mean "no upscaling" only when they are the whole cell.
static NO_UPSCALING_EXACT: phf::Set<&'static str> = phf_set! {
    "IDK",
    "I GOT NO IDEA",
    "NOT APPLICABLE",
};

pub fn canonicalize_upscaling(value: &str) -> String {
    if value.trim().is_empty() {
        return DEFAULT_UPSCALING.to_string();
    }

    let upper = value.to_uppercase();

    if let Some(tech) = TECHNOLOGIES.iter().find(|tech| upper.contains(*tech)) {
        return tech.to_string();
    }

    if upper.contains("NONE") || NO_UPSCALING_EXACT.contains(upper.as_str()) {
        return DEFAULT_UPSCALING.to_string();
    }

    value.to_string()
}

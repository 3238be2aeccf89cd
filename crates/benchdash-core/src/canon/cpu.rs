//! CPU name canonicalization: strips vendor and marketing noise from Ryzen
//! and Intel Core names, leaves everything else trimmed but untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UNKNOWN;

static RYZEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Ryzen\s+([0-9]+)\s+([0-9]{4}X?3?D?)").unwrap());
static INTEL_CORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Core\s+i([0-9]+)[-\s]([0-9]{4,5}K?F?)").unwrap());

/// `"AMD Ryzen 7 7800X3D 8-Core"` → `"Ryzen 7 7800X3D"`,
/// `"Intel Core i9-13900K"` → `"Core i9-13900K"`.
pub fn canonicalize_cpu(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return UNKNOWN.to_string();
    }

    if name.contains("Ryzen") {
        if let Some(caps) = RYZEN.captures(name) {
            return format!("Ryzen {} {}", &caps[1], &caps[2]);
        }
    }

    if name.contains("Core") {
        if let Some(caps) = INTEL_CORE.captures(name) {
            return format!("Core i{}-{}", &caps[1], &caps[2]);
        }
    }

    name.to_string()
}

//! GPU name canonicalization.
//!
//! Two ordered tables, evaluated top to bottom, first match wins:
//!
//! 1. [`MODEL_RULES`]: specific models matched by substring conjunctions on
//!    the upper-cased name. More specific variants (Ti Super, XTX) sit above
//!    their plainer siblings.
//! 2. [`FAMILY_RULES`]: brand fallbacks that extract a model number or
//!    settle for a generic family name.
//!
//! Anything left over is returned verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UNKNOWN;

/// A specific model: every needle must occur in the upper-cased name.
#[derive(Debug, Clone, Copy)]
pub struct ModelRule {
    pub needles: &'static [&'static str],
    pub name: &'static str,
}

impl ModelRule {
    fn matches(&self, upper: &str) -> bool {
        self.needles.iter().all(|needle| upper.contains(needle))
    }
}

const fn rule(needles: &'static [&'static str], name: &'static str) -> ModelRule {
    ModelRule { needles, name }
}

#[rustfmt::skip]
pub const MODEL_RULES: &[ModelRule] = &[
    // NVIDIA RTX 50
    rule(&["5090"], "RTX 5090"),
    rule(&["5080"], "RTX 5080"),
    rule(&["5070", "TI"], "RTX 5070 Ti"),
    rule(&["5070"], "RTX 5070"),
    rule(&["5060"], "RTX 5060"),
    // NVIDIA RTX 40
    rule(&["4090"], "RTX 4090"),
    rule(&["4080", "SUPER"], "RTX 4080 Super"),
    rule(&["4080"], "RTX 4080"),
    rule(&["4070", "TI", "SUPER"], "RTX 4070 Ti Super"),
    rule(&["4070", "TI"], "RTX 4070 Ti"),
    rule(&["4070", "SUPER"], "RTX 4070 Super"),
    rule(&["4070"], "RTX 4070"),
    rule(&["4060", "TI"], "RTX 4060 Ti"),
    rule(&["4060"], "RTX 4060"),
    // NVIDIA RTX 30
    rule(&["3090", "TI"], "RTX 3090 Ti"),
    rule(&["3090"], "RTX 3090"),
    rule(&["3080", "TI"], "RTX 3080 Ti"),
    rule(&["3080"], "RTX 3080"),
    rule(&["3070", "TI"], "RTX 3070 Ti"),
    rule(&["3070"], "RTX 3070"),
    rule(&["3060", "TI"], "RTX 3060 Ti"),
    rule(&["3060"], "RTX 3060"),
    // AMD RX 9000
    rule(&["9070", "XT"], "RX 9070 XT"),
    rule(&["9070"], "RX 9070"),
    // AMD RX 7000
    rule(&["7900", "XTX"], "RX 7900 XTX"),
    rule(&["7900", "XT"], "RX 7900 XT"),
    rule(&["7800", "XT"], "RX 7800 XT"),
    rule(&["7700", "XT"], "RX 7700 XT"),
    rule(&["7600"], "RX 7600"),
    // AMD RX 6000
    rule(&["6950", "XT"], "RX 6950 XT"),
    rule(&["6900", "XT"], "RX 6900 XT"),
    rule(&["6800", "XT"], "RX 6800 XT"),
    rule(&["6800"], "RX 6800"),
    rule(&["6700", "XT"], "RX 6700 XT"),
    rule(&["6700"], "RX 6700"),
    rule(&["6600", "XT"], "RX 6600 XT"),
    rule(&["6600"], "RX 6600"),
    rule(&["6500", "XT"], "RX 6500 XT"),
    rule(&["6500"], "RX 6500"),
    // Intel Arc
    rule(&["ARC", "B580"], "Arc B580"),
    rule(&["ARC", "A770"], "Arc A770"),
    rule(&["ARC", "A750"], "Arc A750"),
    rule(&["ARC", "A580"], "Arc A580"),
    rule(&["ARC", "A380"], "Arc A380"),
    rule(&["ARC", "A310"], "Arc A310"),
];

/// A family fallback. Receives the upper-cased name.
pub type FamilyRule = fn(&str) -> Option<String>;

pub const FAMILY_RULES: &[FamilyRule] = &[
    nvidia_family,
    amd_family,
    rtx_astral,
    laptop,
    rtx_ti,
    rtx_super,
];

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]{4})\b").unwrap());
static RX_MODEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"RX\s*([0-9]{4})").unwrap());
static RTX_MODEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"RTX\s*([0-9]{4})").unwrap());

fn capture(re: &Regex, upper: &str) -> Option<String> {
    re.captures(upper).map(|caps| caps[1].to_string())
}

fn nvidia_family(upper: &str) -> Option<String> {
    if !(upper.contains("GEFORCE") || upper.contains("NVIDIA")) {
        return None;
    }

    if let Some(model) = capture(&FOUR_DIGITS, upper) {
        let prefix = match model.as_bytes()[0] {
            b'2'..=b'5' => Some("RTX"),
            b'1' => Some("GTX"),
            _ => None,
        };
        if let Some(prefix) = prefix {
            return Some(format!("{prefix} {model}"));
        }
    }

    let generic = if upper.contains("RTX") {
        "RTX GPU"
    } else if upper.contains("GTX") {
        "GTX GPU"
    } else {
        "NVIDIA GPU"
    };
    Some(generic.to_string())
}

fn amd_family(upper: &str) -> Option<String> {
    if !(upper.contains("RADEON") || upper.contains("AMD")) {
        return None;
    }
    Some(match capture(&RX_MODEL, upper) {
        Some(model) => format!("RX {model}"),
        None => "AMD GPU".to_string(),
    })
}

fn rtx_astral(upper: &str) -> Option<String> {
    upper.contains("RTX ASTRAL").then(|| "RTX Astral".to_string())
}

fn laptop(upper: &str) -> Option<String> {
    if !(upper.contains("MOBILE") || upper.contains("LAPTOP")) {
        return None;
    }

    if let Some(model) = capture(&FOUR_DIGITS, upper) {
        for family in ["RTX", "GTX", "RX"] {
            if upper.contains(family) {
                return Some(format!("{family} {model} Laptop"));
            }
        }
    }
    Some("Laptop GPU".to_string())
}

fn rtx_ti(upper: &str) -> Option<String> {
    if !(upper.contains("RTX") && upper.contains("TI")) {
        return None;
    }
    capture(&RTX_MODEL, upper).map(|model| format!("RTX {model} Ti"))
}

fn rtx_super(upper: &str) -> Option<String> {
    if !(upper.contains("RTX") && upper.contains("SUPER")) {
        return None;
    }
    capture(&RTX_MODEL, upper).map(|model| format!("RTX {model} Super"))
}

/// Map a free-text GPU name onto the fixed vocabulary.
///
/// Blank input becomes `"Unknown"`; unmatched input is returned unchanged.
/// The mapping is idempotent.
pub fn canonicalize_gpu(name: &str) -> String {
    if name.trim().is_empty() {
        return UNKNOWN.to_string();
    }

    let upper = name.to_uppercase();

    if let Some(rule) = MODEL_RULES.iter().find(|rule| rule.matches(&upper)) {
        return rule.name.to_string();
    }

    FAMILY_RULES
        .iter()
        .find_map(|family| family(&upper))
        .unwrap_or_else(|| name.to_string())
}

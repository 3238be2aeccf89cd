//! Header row discovery.
//!
//! The source spreadsheet puts an instruction row at line 0 and lets the
//! header drift a few lines down. The locator scans a small window for a line
//! mentioning every mandatory column and otherwise falls back to a fixed
//! index. A bad guess is not fatal here; the record builder reports missing
//! columns.

use crate::config::HeaderConfig;

/// Substrings that must all occur in a header line.
pub const HEADER_MARKERS: [&str; 3] = ["CPU Model", "GPU", "Resolution"];

/// Where the header was found and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    pub index: usize,
    /// `true` when no line matched and the fallback index was used.
    pub fallback: bool,
}

/// Index of the header row using the default window (lines `1..15`) and
/// fallback (`7`).
pub fn locate_header<S: AsRef<str>>(lines: &[S]) -> usize {
    locate_header_with(lines, &HeaderConfig::default()).index
}

/// Scan `lines[1..min(scan_limit, len)]` for the first line containing every
/// [`HEADER_MARKERS`] substring.
pub fn locate_header_with<S: AsRef<str>>(lines: &[S], cfg: &HeaderConfig) -> HeaderLocation {
    let end = cfg.scan_limit.min(lines.len());

    let found = (1..end).find(|&i| {
        let line = lines[i].as_ref();
        HEADER_MARKERS.iter().all(|marker| line.contains(marker))
    });

    match found {
        Some(index) => HeaderLocation { index, fallback: false },
        None => {
            tracing::warn!(
                fallback = cfg.fallback_index,
                scanned = end.saturating_sub(1),
                "could not find header row, using fallback index"
            );
            HeaderLocation {
                index: cfg.fallback_index,
                fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_with_header_at(at: usize, total: usize) -> Vec<String> {
        (0..total)
            .map(|i| {
                if i == at {
                    "CPU Model,GPU,Screen Resolution,Average FPS Score".to_string()
                } else {
                    format!("filler {i},,,")
                }
            })
            .collect()
    }

    #[test]
    fn finds_header_at_five() {
        assert_eq!(locate_header(&lines_with_header_at(5, 20)), 5);
    }

    #[test]
    fn falls_back_to_seven() {
        let lines: Vec<String> = (0..20).map(|i| format!("row {i}")).collect();
        let loc = locate_header_with(&lines, &HeaderConfig::default());
        assert_eq!(loc, HeaderLocation { index: 7, fallback: true });
    }

    #[test]
    fn line_zero_is_never_the_header() {
        assert_eq!(locate_header(&lines_with_header_at(0, 20)), 7);
    }

    #[test]
    fn header_past_window_is_ignored() {
        assert_eq!(locate_header(&lines_with_header_at(15, 20)), 7);
        assert_eq!(locate_header(&lines_with_header_at(14, 20)), 14);
    }

    #[test]
    fn all_markers_required() {
        let lines = ["intro", "GPU,CPU Model,FPS", "GPU,CPU Model,Resolution"];
        assert_eq!(locate_header(&lines), 2);
    }

    #[test]
    fn short_input_falls_back() {
        assert_eq!(locate_header(&["only line"]), 7);
        let empty: [&str; 0] = [];
        assert_eq!(locate_header(&empty), 7);
    }
}

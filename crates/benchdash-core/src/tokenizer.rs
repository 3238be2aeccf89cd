//! Quote-aware CSV line splitter.
//!
//! Every `"` toggles the quoted state and is dropped from the output. Doubled
//! quotes are two toggles, not an escaped quote, so `"a ""b"" c"` comes out
//! as `a b c`. Malformed quoting never fails; it only mis-splits.

/// Split one line into raw fields.
///
/// The trailing field after the last unquoted `,` is always emitted, so the
/// result is never empty: `tokenize("")` is `[""]`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

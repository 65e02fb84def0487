//! Shared text helpers.

/// Single-line preview of a tool output or answer for progress lines.
///
/// Newlines become ` | ` and the result is cut to at most `max_chars`
/// characters, with `...` appended when anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.trim().lines().collect::<Vec<_>>().join(" | ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

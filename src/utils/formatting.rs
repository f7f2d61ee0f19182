//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring color sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` terminal columns (wide CJK characters count twice).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Hours with two decimals, `-` for zero (grid cells).
pub fn hours_cell(h: f64) -> String {
    if h == 0.0 {
        "-".to_string()
    } else {
        format!("{:.2}", h)
    }
}

/// Hours with one decimal and an `h` suffix.
pub fn hours_label(h: f64) -> String {
    format!("{:.1}h", h)
}

/// Hours expressed in man-months.
pub fn man_months(hours: f64, man_month_hours: f64) -> String {
    format!("{:.2}", hours / man_month_hours)
}

/// Optional progress percentage, `-` when never set.
pub fn progress_label(p: Option<i64>) -> String {
    p.map(|v| format!("{v}%")).unwrap_or_else(|| "-".into())
}

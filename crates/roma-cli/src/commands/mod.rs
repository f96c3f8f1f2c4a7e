pub mod config_ops;
pub mod text_ops;

use unicode_width::UnicodeWidthStr;

/// Left-align `s` to `width` terminal columns. Kana are two columns wide.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Widest entry of `items`, in terminal columns.
pub(crate) fn column_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

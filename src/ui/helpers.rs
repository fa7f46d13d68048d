//! Shared rendering utilities and helpers.
//!
//! Text measurement here works on grapheme clusters. A clap glyph with a
//! skin-tone modifier is one cluster, two columns wide, and is never split
//! across lines or cut in half when truncating.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

fn cells(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Terminal columns taken by one grapheme cluster.
///
/// Only the base character counts; modifiers and joiners that follow it draw
/// inside the same cell.
fn cell_width(cell: &str) -> usize {
    cell.chars()
        .next()
        .and_then(UnicodeWidthChar::width)
        .unwrap_or(0)
}

/// Terminal columns taken by `text`.
///
/// ```
/// use clapper::ui::helpers::display_width;
///
/// assert_eq!(display_width("ab"), 2);
/// assert_eq!(display_width("a👏🏽b"), 4);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    cells(text).into_iter().map(cell_width).sum()
}

/// Wraps `text` into lines no wider than `width` columns.
///
/// Embedded newlines start a new line. Wrapping is by grapheme, not by word; the
/// output is clapified text with no spaces to break on anyway. A zero width
/// yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for cell in cells(raw_line) {
            let w = cell_width(cell);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push_str(cell);
            used += w;
        }
        lines.push(line);
    }
    lines
}

/// Keeps the tail of `text` that fits in `width` columns.
///
/// Used by the input box so the cursor end of a long input stays visible.
#[must_use]
pub fn truncate_start(text: &str, width: usize) -> String {
    let all = cells(text);
    let mut used = 0;
    let mut first = all.len();

    for (i, cell) in all.iter().enumerate().rev() {
        let w = cell_width(cell);
        if used + w > width {
            break;
        }
        used += w;
        first = i;
    }

    all[first..].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_keep_modifiers_attached() {
        assert_eq!(cells("a👏🏿b"), vec!["a", "👏🏿", "b"]);
        assert_eq!(cells(""), Vec::<&str>::new());
    }

    #[test]
    fn test_leading_modifier_stands_alone() {
        assert_eq!(cells("\u{1F3FB}x"), vec!["\u{1F3FB}", "x"]);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello👏world"), 12);
        assert_eq!(display_width("👏🏻👏🏼"), 4);
    }

    #[test]
    fn test_wrap_text_splits_on_width() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("", 4), vec![""]);
        assert!(wrap_text("abc", 0).is_empty());
    }

    #[test]
    fn test_wrap_text_never_splits_glyph() {
        assert_eq!(wrap_text("abc👏🏽d", 4), vec!["abc", "👏🏽d"]);
    }

    #[test]
    fn test_wrap_text_respects_newlines() {
        assert_eq!(wrap_text("ab\ncd", 10), vec!["ab", "cd"]);
    }

    #[test]
    fn test_wrap_text_oversized_cell_gets_own_line() {
        assert_eq!(wrap_text("👏👏", 1), vec!["👏", "👏"]);
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start("hello", 10), "hello");
        assert_eq!(truncate_start("hello", 3), "llo");
        assert_eq!(truncate_start("ab👏🏾", 3), "b👏🏾");
        assert_eq!(truncate_start("ab👏🏾", 1), "");
        assert_eq!(truncate_start("abc", 0), "");
    }
}

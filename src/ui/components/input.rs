//! Input box component renderer.
//!
//! Draws a three-line framed box holding the text being clapified. The border
//! switches color while the box has focus and a block cursor trails the text.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Horizontal margin for the input box (spaces on left and right).
pub(super) const INPUT_BOX_MARGIN: usize = 2;

/// Label printed before the input text.
pub(super) const INPUT_LABEL: &str = " Text: ";

/// Renders the input box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Text: hello world█│ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Returns the next available row (`row + 3`).
pub fn render_input_box(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if input.is_focused {
        &theme.colors.input_border_focused
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if input.is_focused { "█" } else { "" };
    let used = INPUT_LABEL.len() + display_width(&input.text) + cursor.chars().count();
    let padding = inner_width.saturating_sub(used);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{INPUT_LABEL}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}{cursor}", input.text);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

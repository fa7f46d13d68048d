//! Output panel component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OutputInfo;

/// Left indent of output lines.
pub(super) const OUTPUT_INDENT: usize = 1;

/// Renders the "OUTPUT" label and the wrapped output lines starting at `row`.
///
/// Shows the placeholder in dim text when there is nothing to display and a
/// trailing `…` marker when lines were clipped. Returns the next available row.
pub fn render_output(row: usize, output: &OutputInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" OUTPUT");
    print!("{}", Theme::reset());

    let mut current_row = row + 1;

    if let Some(placeholder) = &output.placeholder {
        position_cursor(current_row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}{placeholder}", " ".repeat(OUTPUT_INDENT));
        print!("{}", Theme::reset());
        return current_row + 1;
    }

    let last = output.lines.len().saturating_sub(1);
    for (i, line) in output.lines.iter().enumerate() {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.output_fg));
        print!("{}{line}", " ".repeat(OUTPUT_INDENT));
        if output.is_clipped && i == last {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("…");
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

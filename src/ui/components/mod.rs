//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`input`]: Framed input box
//! - [`variants`]: Variant picker with caps indicator
//! - [`output`]: Wrapped output panel
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! row 1          [blank]
//! row 2          [Header]
//! row 3          [Border]
//! rows 4-6       [Input Box]
//! row 7          [VARIANT label ........ CAPS indicator]
//! rows 8..       [one row per variant]
//!                [Border]
//!                [OUTPUT label]
//!                [output lines, as many as fit]
//! row rows-2     [Border]
//! row rows-1     [Footer]
//! ```

mod footer;
mod header;
mod input;
mod output;
mod variants;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use input::{render_input_box, INPUT_BOX_MARGIN, INPUT_LABEL};
use output::{render_output, OUTPUT_INDENT};
use variants::{render_variant_label, render_variant_rows};

/// Rows used by everything except the variant rows and output lines.
///
/// Blank, header, border, input box (3), variant label, border, output label,
/// bottom border, footer, and the unused last row.
const FIXED_CHROME_ROWS: usize = 12;

/// Number of output lines that fit in a pane of `rows` rows.
#[must_use]
pub fn output_rows(rows: usize, variant_count: usize) -> usize {
    rows.saturating_sub(FIXED_CHROME_ROWS + variant_count)
}

/// Columns available to output text, leaving room for the indent and the
/// clipping marker.
#[must_use]
pub const fn output_width(cols: usize) -> usize {
    cols.saturating_sub(OUTPUT_INDENT + 1)
}

/// Columns available to input text inside the box, leaving room for the cursor.
#[must_use]
pub const fn input_text_width(cols: usize) -> usize {
    cols.saturating_sub(INPUT_BOX_MARGIN * 2 + 2 + INPUT_LABEL.len() + 1)
}

/// Renders a horizontal border line at `row`. Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin layout.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_box(current_row, &vm.input, theme, cols);
    current_row = render_variant_label(current_row, vm.caps, vm.variants_focused, theme, cols);
    current_row = render_variant_rows(current_row, &vm.variants, vm.variants_focused, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_output(current_row, &vm.output, theme);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

//! Variant picker component renderer.
//!
//! Renders a section label with the caps indicator on its right, followed by
//! one row per clap variant. The active variant is drawn with the selection
//! colors; the marker column shows where keyboard focus sits.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CapsInfo, VariantItem};

/// Renders the "VARIANT" label row with the caps indicator right-aligned.
///
/// Returns the next available row.
pub fn render_variant_label(row: usize, caps: CapsInfo, focused: bool, theme: &Theme, cols: usize) -> usize {
    let label = if focused { " VARIANT ▸" } else { " VARIANT" };
    let (caps_text, caps_color) = if caps.enabled {
        ("CAPS: ON ", &theme.colors.caps_on_fg)
    } else {
        ("CAPS: off ", &theme.colors.text_dim)
    };
    let gap = cols.saturating_sub(label.chars().count() + caps_text.len());

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(caps_color));
    print!("{caps_text}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all variant rows starting at `row`. Returns the next available row.
pub fn render_variant_rows(row: usize, items: &[VariantItem], focused: bool, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_variant_row(current_row, item, focused, theme, cols);
    }
    current_row
}

/// Renders one variant as `  ▶ 3  👏🏼 Medium-Light` padded to the pane width.
fn render_variant_row(row: usize, item: &VariantItem, focused: bool, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_selected && focused { "▶" } else { " " };
    let line = format!("  {marker} {}  {}", item.shortcut, item.label);
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&line))));

    print!("{}", Theme::reset());
    row + 1
}

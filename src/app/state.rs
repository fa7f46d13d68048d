//! Application state and view model computation.
//!
//! [`AppState`] wraps the domain's [`TransformState`] with the pieces only the
//! plugin pane cares about: keyboard focus and the active theme. View models are
//! computed on demand from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use clapper::app::AppState;
//! use clapper::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.transform.set_input_text(Some("no more meetings"));
//! let viewmodel = state.compute_viewmodel(30, 80);
//! assert_eq!(viewmodel.output.lines, vec!["no👏more👏meetings"]);
//! ```

use super::modes::Focus;
use crate::domain::{TransformState, CATALOG};
use crate::ui::components::{input_text_width, output_rows, output_width};
use crate::ui::helpers::{truncate_start, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CapsInfo, FooterInfo, HeaderInfo, InputBoxInfo, OutputInfo, UIViewModel, VariantItem,
};

/// Placeholder shown while the output is empty.
const EMPTY_OUTPUT_PLACEHOLDER: &str = "Type something to clap it up";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Input properties and the derived output.
    pub transform: TransformState,

    /// Control receiving plain keystrokes.
    pub focus: Focus,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state over the built-in catalog with empty input, the first
    /// variant, caps off and focus on the input box.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            transform: TransformState::new(&CATALOG),
            focus: Focus::Input,
            theme,
        }
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let variants_focused = self.focus == Focus::Variants;

        UIViewModel {
            header: self.compute_header(),
            input: InputBoxInfo {
                text: truncate_start(self.transform.input_text(), input_text_width(cols)),
                is_focused: !variants_focused,
            },
            variants: self.compute_variant_items(),
            variants_focused,
            caps: CapsInfo {
                enabled: self.transform.all_caps(),
            },
            output: self.compute_output(rows, cols),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Clapper {} ", self.transform.selected_variant().glyph),
        }
    }

    fn compute_variant_items(&self) -> Vec<VariantItem> {
        let selected = self.transform.selected_index();
        self.transform
            .catalog()
            .iter()
            .enumerate()
            .map(|(idx, variant)| VariantItem {
                shortcut: idx + 1,
                label: variant.display_text(),
                is_selected: idx == selected,
            })
            .collect()
    }

    /// Wraps the output to the panel width and keeps as many lines as fit.
    fn compute_output(&self, rows: usize, cols: usize) -> OutputInfo {
        let output = self.transform.output_text();
        if output.is_empty() {
            return OutputInfo {
                lines: vec![],
                is_clipped: false,
                placeholder: Some(EMPTY_OUTPUT_PLACEHOLDER.to_string()),
            };
        }

        let max_lines = output_rows(rows, self.transform.catalog().len());
        let mut lines = wrap_text(output, output_width(cols));
        let is_clipped = lines.len() > max_lines;
        lines.truncate(max_lines);

        OutputInfo {
            lines,
            is_clipped,
            placeholder: None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Input => {
                "Tab: variants  Ctrl+a: caps  Ctrl+n/p: variant  Ctrl+u: clear  Enter: insert  Esc: close"
            }
            Focus::Variants => {
                "j/k: move  1-6: pick  c: caps  Tab: edit text  Enter: insert  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

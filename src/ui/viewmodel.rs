//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Input box contents and focus.
    pub input: InputBoxInfo,

    /// One entry per catalog variant, in catalog order.
    pub variants: Vec<VariantItem>,

    /// Whether the variant list has keyboard focus.
    pub variants_focused: bool,

    /// Capitalization toggle state.
    pub caps: CapsInfo,

    /// Output panel contents, already wrapped to the pane width.
    pub output: OutputInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Input box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Visible tail of the input text.
    pub text: String,

    /// Whether keystrokes currently edit the input.
    pub is_focused: bool,
}

/// One row of the variant picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantItem {
    /// 1-based shortcut number shown next to the label.
    pub shortcut: usize,

    /// Picker label (glyph and name).
    pub label: String,

    /// Whether this is the active variant.
    pub is_selected: bool,
}

/// Capitalization indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapsInfo {
    pub enabled: bool,
}

/// Output panel display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// Wrapped output lines that fit the panel.
    pub lines: Vec<String>,

    /// Whether lines were dropped because the panel is too short.
    pub is_clipped: bool,

    /// Placeholder shown instead of lines when the output is empty.
    pub placeholder: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

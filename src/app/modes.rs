//! Keyboard focus state for the plugin pane.
//!
//! The pane has two focusable controls. Focus decides how plain keystrokes are
//! interpreted: in [`Focus::Input`] they edit the text, in [`Focus::Variants`]
//! they drive the picker (`j`/`k`, digits, `c`, `q`).

/// Which control receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the input text.
    #[default]
    Input,

    /// Keys move the variant selection and toggle caps.
    Variants,
}

impl Focus {
    /// The focus reached by pressing `Tab`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Input => Self::Variants,
            Self::Variants => Self::Input,
        }
    }
}

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order against the Zellij API; nothing in the
//! library performs the side effect itself.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Types the clapified text into the pane that had focus before the plugin,
    /// then hides the plugin.
    InsertOutput {
        /// Text to insert.
        text: String,
    },
}

//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The plugin shim maps a Zellij key event to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations go through [`TransformState`](crate::domain::TransformState)
//!    setters, which recompute the output on the spot
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use clapper::app::{handle_event, AppState, Event};
//! use clapper::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! for c in "ok boomer".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::InsertOutput)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), clapper::ClapperError>(())
//! ```

use super::modes::Focus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the input text.
    Char(char),
    /// Removes the last character of the input text.
    Backspace,
    /// Empties the input text.
    ClearInput,
    /// Appends pasted text to the input.
    Paste(String),

    /// Selects the next variant, stopping at the last one.
    NextVariant,
    /// Selects the previous variant, stopping at the first one.
    PreviousVariant,
    /// Selects the variant at a zero-based catalog index.
    SelectVariant(usize),

    /// Flips the capitalization flag.
    ToggleCaps,

    /// Moves keyboard focus to the other control.
    CycleFocus,

    /// Inserts the current output into the focused pane.
    InsertOutput,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// [`Event::SelectVariant`] with an index outside the catalog returns
/// [`ClapperError::VariantOutOfRange`](crate::ClapperError::VariantOutOfRange);
/// the state is left as it was.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.transform.push_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let changed = state.transform.pop_char().is_some();
            Ok((changed, vec![]))
        }
        Event::ClearInput => {
            state.transform.clear_input();
            Ok((true, vec![]))
        }
        Event::Paste(text) => {
            state.transform.push_str(text);
            Ok((!text.is_empty(), vec![]))
        }
        Event::NextVariant => {
            state.transform.select_next();
            Ok((true, vec![]))
        }
        Event::PreviousVariant => {
            state.transform.select_previous();
            Ok((true, vec![]))
        }
        Event::SelectVariant(index) => {
            state.transform.select_variant(*index)?;
            tracing::debug!(
                variant = state.transform.selected_variant().name,
                "variant selected"
            );
            Ok((true, vec![]))
        }
        Event::ToggleCaps => {
            state.transform.toggle_all_caps();
            tracing::debug!(all_caps = state.transform.all_caps(), "caps toggled");
            Ok((true, vec![]))
        }
        Event::CycleFocus => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::InsertOutput => {
            let text = state.transform.output_text();
            if text.is_empty() {
                tracing::debug!("nothing to insert");
                return Ok((false, vec![]));
            }

            tracing::debug!(output_len = text.len(), "inserting output");
            Ok((
                false,
                vec![Action::InsertOutput {
                    text: text.to_string(),
                }],
            ))
        }
        Event::CloseFocus => {
            state.focus = Focus::Input;
            Ok((false, vec![Action::CloseFocus]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClapperError;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn test_typing_updates_output() {
        let mut s = state();
        type_text(&mut s, "hello world");
        assert_eq!(s.transform.output_text(), "hello👏world");
    }

    #[test]
    fn test_backspace_on_empty_skips_render() {
        let mut s = state();
        let (render, actions) = handle_event(&mut s, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        type_text(&mut s, "ab");
        let (render, _) = handle_event(&mut s, &Event::Backspace).unwrap();
        assert!(render);
        assert_eq!(s.transform.input_text(), "a");
    }

    #[test]
    fn test_clear_and_paste() {
        let mut s = state();
        handle_event(&mut s, &Event::Paste("hi there".to_string())).unwrap();
        assert_eq!(s.transform.output_text(), "hi👏there");

        handle_event(&mut s, &Event::ClearInput).unwrap();
        assert_eq!(s.transform.output_text(), "");

        let (render, _) = handle_event(&mut s, &Event::Paste(String::new())).unwrap();
        assert!(!render);
    }

    #[test]
    fn test_variant_navigation_and_caps() {
        let mut s = state();
        type_text(&mut s, "hi there");
        for _ in 0..5 {
            handle_event(&mut s, &Event::NextVariant).unwrap();
        }
        handle_event(&mut s, &Event::ToggleCaps).unwrap();
        assert_eq!(s.transform.output_text(), "HI👏🏿THERE");

        handle_event(&mut s, &Event::PreviousVariant).unwrap();
        assert_eq!(s.transform.output_text(), "HI👏🏾THERE");
    }

    #[test]
    fn test_select_variant_out_of_range_propagates() {
        let mut s = state();
        handle_event(&mut s, &Event::SelectVariant(3)).unwrap();

        let err = handle_event(&mut s, &Event::SelectVariant(6)).unwrap_err();
        assert!(matches!(err, ClapperError::VariantOutOfRange { index: 6, len: 6 }));
        assert_eq!(s.transform.selected_index(), 3);
    }

    #[test]
    fn test_cycle_focus() {
        let mut s = state();
        handle_event(&mut s, &Event::CycleFocus).unwrap();
        assert_eq!(s.focus, Focus::Variants);
        handle_event(&mut s, &Event::CycleFocus).unwrap();
        assert_eq!(s.focus, Focus::Input);
    }

    #[test]
    fn test_insert_output_emits_action() {
        let mut s = state();
        let (_, actions) = handle_event(&mut s, &Event::InsertOutput).unwrap();
        assert!(actions.is_empty());

        type_text(&mut s, " do it ");
        let (render, actions) = handle_event(&mut s, &Event::InsertOutput).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::InsertOutput {
                text: "do👏it".to_string()
            }]
        );
    }

    #[test]
    fn test_close_resets_focus() {
        let mut s = state();
        s.focus = Focus::Variants;
        let (render, actions) = handle_event(&mut s, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
        assert_eq!(s.focus, Focus::Input);
    }
}

//! Observed transform state with a derived output.
//!
//! [`TransformState`] owns the three user-editable properties and the output
//! derived from them. Every setter reports the property it touched to
//! [`TransformState::property_changed`], which recomputes the output when the
//! property is one of the observed inputs. Recomputation is a direct synchronous
//! call; there is no queue and no batching.
//!
//! # Example
//!
//! ```
//! use clapper::domain::{TransformState, CATALOG};
//!
//! let mut state = TransformState::new(&CATALOG);
//! state.set_input_text(Some("stop it"));
//! state.select_variant(1)?;
//! state.set_all_caps(true);
//! assert_eq!(state.output_text(), "STOP👏🏻IT");
//! # Ok::<(), clapper::ClapperError>(())
//! ```

use super::error::Result;
use super::transform::transform;
use super::variant::{lookup, ClapVariant};

/// Properties exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// The text being clapified.
    InputText,
    /// Index of the active variant.
    SelectedIndex,
    /// Whether the output is upper-cased.
    AllCapital,
    /// The derived, read-only result.
    OutputText,
}

impl Property {
    /// Whether a change to this property requires recomputing the output.
    #[must_use]
    pub const fn is_observed(self) -> bool {
        matches!(
            self,
            Self::InputText | Self::SelectedIndex | Self::AllCapital
        )
    }
}

/// The input triple plus its derived output.
///
/// The selected index is validated on every write, so the stored index is
/// always inside the catalog and recomputation cannot fail.
#[derive(Debug, Clone)]
pub struct TransformState {
    catalog: &'static [ClapVariant],
    input_text: String,
    selected_index: usize,
    all_caps: bool,
    output_text: String,
}

impl TransformState {
    /// Creates an empty state over `catalog` with the first variant selected.
    #[must_use]
    pub const fn new(catalog: &'static [ClapVariant]) -> Self {
        Self {
            catalog,
            input_text: String::new(),
            selected_index: 0,
            all_caps: false,
            output_text: String::new(),
        }
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub const fn all_caps(&self) -> bool {
        self.all_caps
    }

    #[must_use]
    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static [ClapVariant] {
        self.catalog
    }

    /// The currently selected variant.
    #[must_use]
    pub fn selected_variant(&self) -> &'static ClapVariant {
        &self.catalog[self.selected_index]
    }

    /// Replaces the input text. `None` is treated as the empty string.
    pub fn set_input_text(&mut self, text: Option<&str>) {
        self.input_text = text.unwrap_or_default().to_string();
        self.property_changed(Property::InputText);
    }

    /// Appends one character to the input.
    pub fn push_char(&mut self, c: char) {
        self.input_text.push(c);
        self.property_changed(Property::InputText);
    }

    /// Appends a string to the input.
    pub fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.input_text.push_str(s);
        self.property_changed(Property::InputText);
    }

    /// Removes the last character of the input, if any.
    pub fn pop_char(&mut self) -> Option<char> {
        let popped = self.input_text.pop();
        if popped.is_some() {
            self.property_changed(Property::InputText);
        }
        popped
    }

    /// Empties the input.
    pub fn clear_input(&mut self) {
        self.set_input_text(None);
    }

    /// Selects the variant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ClapperError::VariantOutOfRange`](super::ClapperError::VariantOutOfRange)
    /// and leaves the state untouched if `index` is not a catalog position.
    pub fn select_variant(&mut self, index: usize) -> Result<()> {
        lookup(self.catalog, index)?;
        self.selected_index = index;
        self.property_changed(Property::SelectedIndex);
        Ok(())
    }

    /// Moves the selection one entry down, stopping at the last variant.
    pub fn select_next(&mut self) {
        let last = self.catalog.len().saturating_sub(1);
        if self.selected_index < last {
            self.selected_index += 1;
            self.property_changed(Property::SelectedIndex);
        }
    }

    /// Moves the selection one entry up, stopping at the first variant.
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.property_changed(Property::SelectedIndex);
        }
    }

    pub fn set_all_caps(&mut self, all_caps: bool) {
        self.all_caps = all_caps;
        self.property_changed(Property::AllCapital);
    }

    pub fn toggle_all_caps(&mut self) {
        self.set_all_caps(!self.all_caps);
    }

    /// Change hook invoked by every setter.
    ///
    /// Recomputes [`Property::OutputText`] when `property` is observed and does
    /// nothing otherwise.
    pub fn property_changed(&mut self, property: Property) {
        if !property.is_observed() {
            return;
        }

        match transform(
            &self.input_text,
            self.selected_index,
            self.all_caps,
            self.catalog,
        ) {
            Ok(output) => {
                tracing::trace!(
                    property = ?property,
                    output_len = output.len(),
                    "output recomputed"
                );
                self.output_text = output;
            }
            Err(e) => {
                // Only reachable with an empty catalog.
                tracing::warn!(error = %e, "failed to recompute output");
                self.output_text.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClapperError, CATALOG};

    fn state() -> TransformState {
        TransformState::new(&CATALOG)
    }

    #[test]
    fn test_new_state_is_empty() {
        let s = state();
        assert_eq!(s.input_text(), "");
        assert_eq!(s.selected_index(), 0);
        assert!(!s.all_caps());
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn test_input_change_recomputes_output() {
        let mut s = state();
        s.set_input_text(Some("hello world"));
        assert_eq!(s.output_text(), "hello👏world");
    }

    #[test]
    fn test_none_input_is_empty_string() {
        let mut s = state();
        s.set_input_text(Some("x y"));
        s.set_input_text(None);
        assert_eq!(s.input_text(), "");
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn test_selection_change_recomputes_output() {
        let mut s = state();
        s.set_input_text(Some("a b"));
        s.select_variant(4).unwrap();
        assert_eq!(s.output_text(), "a👏🏾b");
        assert_eq!(s.selected_variant().name, "Medium-Dark");
    }

    #[test]
    fn test_caps_change_recomputes_output() {
        let mut s = state();
        s.set_input_text(Some("hi there"));
        s.select_variant(5).unwrap();
        s.set_all_caps(true);
        assert_eq!(s.output_text(), "HI👏🏿THERE");
        s.toggle_all_caps();
        assert_eq!(s.output_text(), "hi👏🏿there");
    }

    #[test]
    fn test_rejected_selection_leaves_state_untouched() {
        let mut s = state();
        s.set_input_text(Some("a b"));
        s.select_variant(2).unwrap();
        let before = s.output_text().to_string();

        let err = s.select_variant(6).unwrap_err();
        assert!(matches!(err, ClapperError::VariantOutOfRange { index: 6, .. }));
        assert_eq!(s.selected_index(), 2);
        assert_eq!(s.output_text(), before);
    }

    #[test]
    fn test_next_and_previous_clamp_to_catalog() {
        let mut s = state();
        s.select_previous();
        assert_eq!(s.selected_index(), 0);

        for _ in 0..10 {
            s.select_next();
        }
        assert_eq!(s.selected_index(), CATALOG.len() - 1);

        s.select_previous();
        assert_eq!(s.selected_index(), CATALOG.len() - 2);
    }

    #[test]
    fn test_editing_helpers() {
        let mut s = state();
        s.push_str("ab");
        s.push_char(' ');
        s.push_char('c');
        assert_eq!(s.output_text(), "ab👏c");

        assert_eq!(s.pop_char(), Some('c'));
        assert_eq!(s.output_text(), "ab");

        s.clear_input();
        assert_eq!(s.pop_char(), None);
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn test_output_property_is_not_observed() {
        assert!(Property::InputText.is_observed());
        assert!(Property::SelectedIndex.is_observed());
        assert!(Property::AllCapital.is_observed());
        assert!(!Property::OutputText.is_observed());
    }
}

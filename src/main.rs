//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Clapper library and
//! the Zellij plugin system. It implements `ZellijPlugin`, maps key events to
//! library events and runs the resulting actions through the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to events, delegate to the library layer
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (any focus):
//! - `Tab`: Move focus between the text box and the variant list
//! - `Ctrl+n`/`Ctrl+p`: Next/previous variant
//! - `Ctrl+a`: Toggle ALL CAPS
//! - `Ctrl+u`: Clear the text box
//! - `Enter`: Type the output into the pane below and hide
//! - `Esc`: Hide the plugin
//!
//! In the text box:
//! - Printable characters and `Backspace` edit the text
//!
//! In the variant list:
//! - `j`/`Down`, `k`/`Up`: Next/previous variant
//! - `1`–`6`: Pick a variant directly
//! - `c`: Toggle ALL CAPS
//! - `q`: Hide the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use clapper::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: clapper::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: clapper::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`, `ChangeApplicationState`: hide the plugin pane
    /// - `WriteToStdin`: type the clapped text into the focused pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        clapper::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            variant_index = config.variant_index,
            all_caps = config.all_caps,
            "parsed configuration"
        );
        self.app = clapper::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::WriteToStdin,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - output cannot be inserted");
                    }
                }
                return false;
            }
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update", event = ?our_event);
        let _guard = span.entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for a in &actions {
                    Self::execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        clapper::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::NextVariant),
                BareKey::Char('p') => Some(Event::PreviousVariant),
                BareKey::Char('a') => Some(Event::ToggleCaps),
                BareKey::Char('u') => Some(Event::ClearInput),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab => Event::CycleFocus,
            BareKey::Enter => Event::InsertOutput,
            BareKey::Esc => Event::CloseFocus,
            _ => match self.app.focus {
                Focus::Input => Self::map_input_key(key.bare_key)?,
                Focus::Variants => Self::map_variants_key(key.bare_key)?,
            },
        })
    }

    const fn map_input_key(key: BareKey) -> Option<Event> {
        match key {
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) => Some(Event::Char(c)),
            _ => None,
        }
    }

    fn map_variants_key(key: BareKey) -> Option<Event> {
        match key {
            BareKey::Down | BareKey::Char('j') => Some(Event::NextVariant),
            BareKey::Up | BareKey::Char('k') => Some(Event::PreviousVariant),
            BareKey::Char('c') => Some(Event::ToggleCaps),
            BareKey::Char('q') => Some(Event::CloseFocus),
            BareKey::Char(d @ '1'..='9') => d
                .to_digit(10)
                .and_then(|n| usize::try_from(n).ok())
                .map(|n| Event::SelectVariant(n - 1)),
            _ => None,
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::InsertOutput { text } => {
                // Hiding first hands focus back to the pane the text is meant for.
                hide_self();
                write_chars(text);
            }
        }
    }
}

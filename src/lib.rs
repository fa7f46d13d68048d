//! Clapper: a Zellij plugin👏that👏claps👏your👏text.
//!
//! Clapper opens a floating pane where you type a sentence, pick one of six
//! clap emoji skin tones and optionally switch on ALL CAPS. Every space in the
//! trimmed input is replaced with the chosen clap, and the result can be typed
//! straight into the pane you came from.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events, actions
//! │  - Key events → state mutations                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)    │
//! │ - Rendering           │   │ - Clap variant catalog    │
//! │ - Theming             │   │ - transform()             │
//! │ - Components          │   │ - Observed TransformState │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry tracing to a rotating file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/clapper.wasm" {
//!         variant "Medium-Dark"
//!         all_caps "true"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use clapper::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     variant_index: 5,
//!     all_caps: true,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! for c in "hi there".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.transform.output_text(), "HI👏🏿THERE");
//! # Ok::<(), clapper::ClapperError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use domain::{transform, ClapVariant, ClapperError, Result, TransformState, CATALOG};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Variant selected when the plugin opens. Always a valid catalog index.
    pub variant_index: usize,

    /// Whether ALL CAPS is on when the plugin opens.
    pub all_caps: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values that fail to parse fall back to their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `variant`: catalog index (`"0"`–`"5"`) or variant name, case-insensitive
    /// - `all_caps`: `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`
    /// - `theme`, `theme_file`, `trace_level`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use clapper::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("variant".to_string(), "dark".to_string());
    /// map.insert("all_caps".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.variant_index, 5);
    /// assert!(config.all_caps);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let variant_index = config
            .get("variant")
            .and_then(|raw| {
                parse_variant(raw)
                    .map_err(|e| tracing::debug!(error = %e, "ignoring variant setting"))
                    .ok()
            })
            .unwrap_or(0);

        let all_caps = config
            .get("all_caps")
            .and_then(|raw| {
                parse_flag(raw)
                    .map_err(|e| tracing::debug!(error = %e, "ignoring all_caps setting"))
                    .ok()
            })
            .unwrap_or(false);

        Self {
            variant_index,
            all_caps,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Resolves a `variant` setting to a catalog index.
fn parse_variant(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    if let Ok(index) = raw.parse::<usize>() {
        return domain::variant::variant(index).map(|_| index);
    }

    domain::variant::find_by_name(raw)
        .ok_or_else(|| ClapperError::Config(format!("unknown variant {raw:?}")))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(ClapperError::Config(format!("expected a boolean, got {other:?}"))),
    }
}

/// Loads the theme named by the configuration, falling back to the default.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Creates the initial `AppState` from configuration.
///
/// Loads the theme and applies the configured variant and caps flag. Does not
/// initialize tracing; the plugin shim does that before calling this.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing clapper plugin");

    let mut state = AppState::new(resolve_theme(config));

    if let Err(e) = state.transform.select_variant(config.variant_index) {
        tracing::warn!(error = %e, "configured variant rejected, keeping default");
    }
    state.transform.set_all_caps(config.all_caps);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_variant_by_index_and_name() {
        assert_eq!(Config::from_zellij(&map(&[("variant", "3")])).variant_index, 3);
        assert_eq!(
            Config::from_zellij(&map(&[("variant", "Medium-Light")])).variant_index,
            2
        );
    }

    #[test]
    fn test_bad_variant_falls_back_to_normal() {
        assert_eq!(Config::from_zellij(&map(&[("variant", "6")])).variant_index, 0);
        assert_eq!(Config::from_zellij(&map(&[("variant", "teal")])).variant_index, 0);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("ON").unwrap());
        assert!(!parse_flag(" 0 ").unwrap());
        assert!(matches!(parse_flag("maybe"), Err(ClapperError::Config(_))));
        assert!(!Config::from_zellij(&map(&[("all_caps", "maybe")])).all_caps);
    }

    #[test]
    fn test_passthrough_strings() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-frappe"),
            ("theme_file", "~/t.toml"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.theme_file.as_deref(), Some("~/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_initialize_applies_variant_and_caps() {
        let config = Config {
            variant_index: 4,
            all_caps: true,
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        let mut state = initialize(&config);
        assert_eq!(state.transform.selected_index(), 4);
        assert!(state.transform.all_caps());
        assert_eq!(state.theme.name, "catppuccin-latte");

        state.transform.set_input_text(Some("so loud"));
        assert_eq!(state.transform.output_text(), "SO👏🏾LOUD");
    }

    #[test]
    fn test_initialize_survives_invalid_variant_index() {
        let config = Config {
            variant_index: 42,
            ..Default::default()
        };
        assert_eq!(initialize(&config).transform.selected_index(), 0);
    }

    #[test]
    fn test_theme_resolution_fallbacks() {
        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_theme(&unknown).name, "catppuccin-mocha");

        let missing_file = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/no/such/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_theme(&missing_file).name, "catppuccin-mocha");
    }

    #[test]
    fn test_theme_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::from_name("catppuccin-frappe").unwrap();
        theme.name = "from-file".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_theme(&config).name, "from-file");
    }
}

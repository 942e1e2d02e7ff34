//! Emotion Quiz: a Zellij plugin that asks "How many emotions do you know?"
//!
//! The user types emotion words one at a time. Each completed word is checked
//! against a fixed vocabulary: new valid words are collected, repeats and
//! unknown words raise a short-lived feedback message. When the user gives up,
//! the plugin shows what share of the vocabulary they named.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, plugin.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Event handling                                   │
//! │  - Feedback expiry actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐       ┌───────────────────────────┐
//! │ UI Layer (ui/)        │       │ Domain Layer (domain/)    │
//! │ - Rendering           │       │ - Vocabulary              │
//! │ - Theming             │       │ - Token normalization     │
//! │ - Components          │       │ - Score, errors           │
//! └───────────────────────┘       └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry file export (observability/)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this library depends on `zellij-tile`; the shim maps Zellij
//! events onto [`Event`] and executes the returned [`Action`]s.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/emotion-quiz.wasm" {
//!         theme "catppuccin-latte"
//!         vocabulary_file "~/.config/emotion-quiz/words.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::{handle_event, initialize, Config, Event, SessionPhase};
//!
//! let mut state = initialize(&Config::default());
//! for c in "happy ".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::RequestResults)?;
//!
//! assert_eq!(state.session.phase(), SessionPhase::ShowingResults);
//! assert_eq!(state.session.entered(), ["happy"]);
//! # Ok::<(), emotion_quiz::QuizError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SessionPhase};
pub use domain::{QuizError, Result, VocabularySet};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration parsed from the KDL block of the plugin pane.
///
/// ```kdl
/// plugin location="file:/path/to/emotion-quiz.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "~/.config/emotion-quiz/theme.toml"
///     vocabulary_file "~/.config/emotion-quiz/words.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe` or `catppuccin-macchiato`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Path to a TOML word list (`words = ["calm", ...]`) replacing the
    /// built-in vocabulary.
    pub vocabulary_file: Option<String>,
}

impl Config {
    /// Reads the known keys from Zellij's configuration map.
    ///
    /// Blank values count as unset; unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use emotion_quiz::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    /// map.insert("vocabulary_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// assert!(config.vocabulary_file.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            vocabulary_file: get("vocabulary_file"),
        }
    }

    /// Resolves the configured theme: file, then built-in name, then default.
    ///
    /// # Errors
    ///
    /// Fails if the theme file cannot be loaded or the name is not a
    /// built-in theme.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(expand_tilde(path));
        }

        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| QuizError::Config(format!("unknown theme `{name}`"))),
            None => Ok(Theme::default()),
        }
    }

    /// Resolves the vocabulary: the configured word list, or the built-in one.
    ///
    /// # Errors
    ///
    /// Fails if the word list cannot be read, parsed, or is empty.
    pub fn load_vocabulary(&self) -> Result<VocabularySet> {
        self.vocabulary_file
            .as_ref()
            .map_or_else(|| Ok(VocabularySet::builtin()), |path| VocabularySet::from_toml_file(expand_tilde(path)))
    }
}

/// Builds the initial application state.
///
/// A theme or word list that fails to load is logged and replaced by the
/// built-in default; loading the plugin never fails.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing emotion quiz");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let vocabulary = config.load_vocabulary().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load word list, using built-in vocabulary");
        VocabularySet::builtin()
    });
    tracing::debug!(theme = %theme.name, words = vocabulary.size(), "quiz ready");

    AppState::new(vocabulary, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn parses_known_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
            ("vocabulary_file", " ~/words.toml "),
            ("unrelated", "x"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.vocabulary_file.as_deref(), Some("~/words.toml"));
    }

    #[test]
    fn unknown_theme_name_is_a_config_error() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.load_theme(), Err(QuizError::Config(_))));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "from-file".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "from-file");
    }

    #[test]
    fn custom_word_list_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"words = [\"Calm\", \"calm\", \"tense\"]\n").unwrap();

        let config = Config {
            vocabulary_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.vocabulary.words(), ["calm", "tense"]);
    }

    #[test]
    fn unusable_word_list_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"words = [\"  \"]\n").unwrap();

        let config = Config {
            vocabulary_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert!(matches!(config.load_vocabulary(), Err(QuizError::EmptyVocabulary)));
        assert_eq!(initialize(&config).vocabulary.size(), VocabularySet::builtin().size());
    }
}

//! Session phase state machine.
//!
//! A quiz session starts in [`SessionPhase::Entering`] and moves to
//! [`SessionPhase::ShowingResults`] when the user gives up naming words. The
//! transition is one-way; there is no path back to entering words.
//!
//! ```text
//! Entering ──request_results()──▶ ShowingResults
//! ```
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::app::modes::SessionPhase;
//!
//! let phase = SessionPhase::default();
//! assert!(phase.accepts_input());
//! assert!(!SessionPhase::ShowingResults.accepts_input());
//! ```

/// Current phase of a quiz session.
///
/// Determines which keybindings are active and whether the input box or the
/// results panel is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// The user is typing words.
    ///
    /// Keystrokes edit the pending input; separators and Enter commit words.
    #[default]
    Entering,

    /// The user asked for the score. Terminal.
    ///
    /// Word input is ignored; only closing the plugin remains.
    ShowingResults,
}

impl SessionPhase {
    /// Whether keystrokes should still reach the pending input.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Entering)
    }
}

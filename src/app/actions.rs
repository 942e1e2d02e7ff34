//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](super::AppState) directly but never
//! talks to Zellij. Anything that needs the host (timers, closing the pane) is
//! returned as an [`Action`] and executed by the plugin shim in `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleFeedbackExpiry {
//!     generation: 1,
//!     after: Duration::from_millis(3000),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the plugin pane, ending the quiz session.
    CloseFocus,

    /// Asks the runtime to report back once a feedback message should expire.
    ///
    /// The runtime answers with
    /// [`Event::FeedbackExpired`](super::Event::FeedbackExpired) carrying the
    /// same generation. If newer feedback was raised in the meantime the
    /// expiry is ignored.
    ScheduleFeedbackExpiry {
        /// Generation of the feedback message to expire.
        generation: u64,
        /// Delay before the expiry fires.
        after: Duration,
    },
}

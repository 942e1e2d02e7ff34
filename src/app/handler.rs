//! Event handling and state transition logic.
//!
//! This module translates the narrow set of input events the quiz understands
//! into [`EntrySession`](super::session::EntrySession) operations, and returns
//! whether the UI should re-render plus any [`Action`]s for the runtime.
//!
//! # Architecture
//!
//! 1. The plugin shim maps a Zellij event to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event and mutates `AppState`
//! 3. Duplicate or unknown words schedule a feedback expiry
//! 4. The shim executes the actions and re-renders when asked to
//!
//! # Event Types
//!
//! - **Input**: `TextChanged`, `Char`, `Backspace`, `Submit`
//! - **Phase**: `RequestResults`
//! - **Timers**: `FeedbackExpired`
//! - **Lifecycle**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (should_render, actions) = handle_event(&mut state, &Event::TextChanged("happy ".into()))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.session.entered(), ["happy"]);
//! # Ok::<(), emotion_quiz::QuizError>(())
//! ```

use super::session::{Outcome, FEEDBACK_DURATION_MS};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Input and lifecycle events understood by the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The whole input text changed (typing, paste, or a host text widget).
    TextChanged(String),
    /// A single character was typed at the end of the input.
    Char(char),
    /// The last character of the input was deleted.
    Backspace,
    /// Explicit submit of the whole input (Enter).
    Submit,
    /// "I don't know any more emotions": end entry and show the score.
    RequestResults,
    /// A scheduled feedback expiry fired.
    FeedbackExpired {
        /// Generation the expiry was scheduled for.
        generation: u64,
    },
    /// The user closed the plugin.
    CloseFocus,
}

/// Processes an event at the current wall-clock time.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and side effects for
/// the runtime to execute in order.
///
/// # Errors
///
/// Propagates failures from state transitions. Word classification never
/// fails; duplicate and unknown words are reported through feedback.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    handle_event_at(state, event, Utc::now())
}

/// Processes an event as if it happened at `now`.
///
/// # Errors
///
/// See [`handle_event`].
pub fn handle_event_at(
    state: &mut AppState,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::TextChanged(raw) => {
            if !state.session.accepts_input() {
                return Ok((false, vec![]));
            }
            let outcome = state.session.text_changed(raw, &state.vocabulary, now);
            Ok((true, feedback_actions(state, outcome)))
        }
        Event::Char(c) => {
            if !state.session.accepts_input() {
                return Ok((false, vec![]));
            }
            let outcome = state.session.push_char(*c, &state.vocabulary, now);
            tracing::trace!(pending = %state.session.pending_input(), char = %c, "input updated");
            Ok((true, feedback_actions(state, outcome)))
        }
        Event::Backspace => {
            if !state.session.accepts_input() || state.session.pending_input().is_empty() {
                return Ok((false, vec![]));
            }
            let outcome = state.session.backspace(&state.vocabulary, now);
            Ok((true, feedback_actions(state, outcome)))
        }
        Event::Submit => {
            if !state.session.accepts_input() {
                return Ok((false, vec![]));
            }
            match state.session.submit_pending(&state.vocabulary, now) {
                Some(outcome) => Ok((true, feedback_actions(state, Some(outcome)))),
                None => {
                    tracing::debug!("submit with empty input ignored");
                    Ok((false, vec![]))
                }
            }
        }
        Event::RequestResults => {
            if state.session.is_closed() {
                return Ok((false, vec![]));
            }
            let changed = state.session.request_results();
            if changed {
                let score = state.session.score(&state.vocabulary);
                tracing::debug!(
                    entered = score.entered,
                    total = score.total,
                    percentage = score.percentage,
                    "quiz finished"
                );
            }
            Ok((changed, vec![]))
        }
        Event::FeedbackExpired { generation } => {
            let cleared = state.session.expire_feedback(*generation);
            if !cleared {
                tracing::trace!(generation = generation, "stale feedback expiry ignored");
            }
            Ok((cleared, vec![]))
        }
        Event::CloseFocus => {
            tracing::debug!(entered = state.session.entered().len(), "closing quiz session");
            state.session.close();
            Ok((false, vec![Action::CloseFocus]))
        }
    }
}

/// Schedules an expiry when the outcome raised feedback.
fn feedback_actions(state: &AppState, outcome: Option<Outcome>) -> Vec<Action> {
    match outcome {
        Some(Outcome::Duplicate | Outcome::Unknown) => state
            .session
            .feedback()
            .map(|feedback| Action::ScheduleFeedbackExpiry {
                generation: feedback.generation,
                after: Duration::from_millis(FEEDBACK_DURATION_MS.unsigned_abs()),
            })
            .into_iter()
            .collect(),
        Some(Outcome::Accepted) | None => vec![],
    }
}

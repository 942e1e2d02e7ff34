//! Per-session word entry state.
//!
//! [`EntrySession`] owns everything that changes while a user plays: the
//! accepted words, the uncommitted input buffer, the transient feedback
//! message, and the [`SessionPhase`]. It validates completed words against a
//! [`VocabularySet`] and classifies each one as an [`Outcome`].
//!
//! # Feedback Lifetime
//!
//! Duplicate and unknown words raise a [`Feedback`] message stamped with the
//! time it was raised and a generation number. The message is visible for
//! [`FEEDBACK_DURATION_MS`] after it was raised. Every new message bumps the
//! generation, so a deferred expiry scheduled for an older message finds a
//! different generation and does nothing. Closing the session bumps it once
//! more, which turns every outstanding expiry into a no-op.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use emotion_quiz::app::session::{EntrySession, Outcome};
//! use emotion_quiz::VocabularySet;
//!
//! let vocabulary = VocabularySet::new(["happy", "sad", "joy"])?;
//! let mut session = EntrySession::new();
//! let now = Utc::now();
//!
//! assert_eq!(session.text_changed("happy ", &vocabulary, now), Some(Outcome::Accepted));
//! assert_eq!(session.text_changed("Happy,", &vocabulary, now), Some(Outcome::Duplicate));
//! assert_eq!(session.entered(), ["happy"]);
//! # Ok::<(), emotion_quiz::QuizError>(())
//! ```

use super::modes::SessionPhase;
use crate::domain::normalizer::{self, TextChange};
use crate::domain::{ScoreSummary, VocabularySet};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// How long a feedback message stays visible, in milliseconds.
pub const FEEDBACK_DURATION_MS: i64 = 3000;

/// Feedback shown when a word was already accepted this session.
pub const DUPLICATE_MESSAGE: &str = "You've already entered this emotion!";

/// Classification of a completed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new vocabulary word; added to the entered set.
    Accepted,
    /// Already entered this session; nothing changes but the feedback.
    Duplicate,
    /// Not in the vocabulary; nothing changes but the feedback.
    Unknown,
}

/// A transient message reporting a duplicate or unknown word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Message text.
    pub text: String,
    /// When the message was raised.
    pub raised_at: DateTime<Utc>,
    /// Generation tag matched against deferred expiries.
    pub generation: u64,
}

impl Feedback {
    /// Instant from which the message is no longer shown.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.raised_at + Duration::milliseconds(FEEDBACK_DURATION_MS)
    }

    /// Whether the message is still within its display window at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

/// Mutable state of one quiz session.
#[derive(Debug, Clone, Default)]
pub struct EntrySession {
    /// Accepted words in insertion order.
    entered: Vec<String>,
    /// Lookup index over `entered`.
    entered_index: HashSet<String>,
    /// Raw text typed since the last committed word.
    pending: String,
    /// Most recent feedback message, if not yet cleared.
    feedback: Option<Feedback>,
    /// Last generation handed out.
    generation: u64,
    phase: SessionPhase,
    closed: bool,
}

impl EntrySession {
    /// Starts an empty session in the entering phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Uncommitted input text.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    /// Accepted words in the order they were entered.
    #[must_use]
    pub fn entered(&self) -> &[String] {
        &self.entered
    }

    /// Current feedback, regardless of whether its display window has passed.
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Feedback text if it should be on screen at `now`.
    #[must_use]
    pub fn visible_feedback(&self, now: DateTime<Utc>) -> Option<&str> {
        self.feedback
            .as_ref()
            .filter(|feedback| feedback.is_visible_at(now))
            .map(|feedback| feedback.text.as_str())
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether keystrokes should still change the session.
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.closed && self.phase.accepts_input()
    }

    /// Replaces the input text and commits a word if it now ends in a separator.
    ///
    /// Returns the outcome of the committed word, or `None` if no word was
    /// completed. A separator with nothing before it clears the buffer without
    /// producing an outcome. Ignored once the session stops accepting input.
    pub fn text_changed(
        &mut self,
        raw: &str,
        vocabulary: &VocabularySet,
        now: DateTime<Utc>,
    ) -> Option<Outcome> {
        if !self.accepts_input() {
            return None;
        }

        match normalizer::on_text_change(raw) {
            TextChange::Pending => {
                raw.clone_into(&mut self.pending);
                None
            }
            TextChange::Boundary(None) => {
                tracing::trace!("separator without a word, clearing input");
                self.pending.clear();
                None
            }
            TextChange::Boundary(Some(token)) => Some(self.submit(&token, vocabulary, now)),
        }
    }

    /// Appends one typed character to the input.
    pub fn push_char(
        &mut self,
        c: char,
        vocabulary: &VocabularySet,
        now: DateTime<Utc>,
    ) -> Option<Outcome> {
        let mut raw = self.pending.clone();
        raw.push(c);
        self.text_changed(&raw, vocabulary, now)
    }

    /// Removes the last character of the input.
    ///
    /// The shortened text goes through the same boundary check as any other
    /// change, so deleting back onto a separator commits the word before it.
    pub fn backspace(&mut self, vocabulary: &VocabularySet, now: DateTime<Utc>) -> Option<Outcome> {
        let mut raw = self.pending.clone();
        raw.pop()?;
        self.text_changed(&raw, vocabulary, now)
    }

    /// Commits the whole input buffer (Enter).
    ///
    /// A blank buffer produces no outcome and no feedback.
    pub fn submit_pending(&mut self, vocabulary: &VocabularySet, now: DateTime<Utc>) -> Option<Outcome> {
        if !self.accepts_input() {
            return None;
        }

        let Some(token) = normalizer::on_submit(&self.pending) else {
            self.pending.clear();
            return None;
        };

        Some(self.submit(&token, vocabulary, now))
    }

    /// Classifies a completed word and updates the session.
    ///
    /// The token is normalized again, so callers may pass raw text. The input
    /// buffer is cleared whatever the outcome.
    pub fn submit(&mut self, token: &str, vocabulary: &VocabularySet, now: DateTime<Utc>) -> Outcome {
        let token = normalizer::normalize(token);
        self.pending.clear();

        let outcome = if self.entered_index.contains(&token) {
            self.raise_feedback(DUPLICATE_MESSAGE.to_string(), now);
            Outcome::Duplicate
        } else if vocabulary.is_member(&token) {
            self.entered_index.insert(token.clone());
            self.entered.push(token.clone());
            self.feedback = None;
            Outcome::Accepted
        } else {
            let message = format!("{} is not an emotion", normalizer::capitalize(&token));
            self.raise_feedback(message, now);
            Outcome::Unknown
        };

        tracing::debug!(
            token = %token,
            outcome = ?outcome,
            entered_count = self.entered.len(),
            "word submitted"
        );

        outcome
    }

    /// Ends word entry and switches to the results phase.
    ///
    /// Uncommitted input is discarded without validation and any feedback is
    /// dropped. Returns `false` if the session was already showing results.
    pub fn request_results(&mut self) -> bool {
        if self.phase == SessionPhase::ShowingResults {
            return false;
        }

        tracing::debug!(
            discarded_input_len = self.pending.len(),
            entered_count = self.entered.len(),
            "showing results"
        );

        self.phase = SessionPhase::ShowingResults;
        self.pending.clear();
        self.clear_feedback();
        true
    }

    /// Clears the feedback raised under `generation`.
    ///
    /// Returns `true` if a message was removed. Expiries for superseded
    /// messages, for messages already cleared, or arriving after
    /// [`close`](Self::close) do nothing.
    pub fn expire_feedback(&mut self, generation: u64) -> bool {
        if self.closed {
            return false;
        }

        match &self.feedback {
            Some(feedback) if feedback.generation == generation => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    /// Tears the session down.
    ///
    /// After this call no event changes the session; outstanding feedback
    /// expiries become no-ops.
    pub fn close(&mut self) {
        self.closed = true;
        self.clear_feedback();
    }

    /// Score of the words entered so far.
    #[must_use]
    pub fn score(&self, vocabulary: &VocabularySet) -> ScoreSummary {
        ScoreSummary::new(self.entered.len(), vocabulary.size())
    }

    fn raise_feedback(&mut self, text: String, now: DateTime<Utc>) {
        self.generation += 1;
        self.feedback = Some(Feedback {
            text,
            raised_at: now,
            generation: self.generation,
        });
    }

    fn clear_feedback(&mut self) {
        self.generation += 1;
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> VocabularySet {
        VocabularySet::new(["happy", "sad", "joy"]).unwrap()
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn resubmitting_an_accepted_word_is_a_duplicate() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        assert_eq!(session.submit("happy", &vocabulary, at(0)), Outcome::Accepted);
        assert_eq!(session.submit("happy", &vocabulary, at(1)), Outcome::Duplicate);
        assert_eq!(session.entered(), ["happy"]);
        assert_eq!(session.visible_feedback(at(2)), Some(DUPLICATE_MESSAGE));
    }

    #[test]
    fn unknown_words_leave_the_set_untouched() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        assert_eq!(session.submit("banana", &vocabulary, at(0)), Outcome::Unknown);
        assert!(session.entered().is_empty());
        assert_eq!(session.visible_feedback(at(0)), Some("Banana is not an emotion"));
    }

    #[test]
    fn equivalent_spellings_commit_the_same_word() {
        let vocabulary = vocabulary();

        for (raw, via_enter) in [("Happy ", false), ("happy,", false), (" HAPPY", true)] {
            let mut session = EntrySession::new();
            let outcome = if via_enter {
                session.text_changed(raw, &vocabulary, at(0));
                session.submit_pending(&vocabulary, at(0))
            } else {
                session.text_changed(raw, &vocabulary, at(0))
            };
            assert_eq!(outcome, Some(Outcome::Accepted), "input {raw:?}");
            assert_eq!(session.entered(), ["happy"]);
            assert_eq!(session.pending_input(), "");
        }
    }

    #[test]
    fn typing_keeps_partial_words_pending() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        for c in "jo".chars() {
            assert_eq!(session.push_char(c, &vocabulary, at(0)), None);
        }
        assert_eq!(session.pending_input(), "jo");

        assert_eq!(session.push_char('y', &vocabulary, at(0)), None);
        assert_eq!(session.push_char(',', &vocabulary, at(0)), Some(Outcome::Accepted));
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn backspace_edits_pending_input() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.text_changed("sadd", &vocabulary, at(0));
        assert_eq!(session.backspace(&vocabulary, at(0)), None);
        assert_eq!(session.pending_input(), "sad");

        let mut empty = EntrySession::new();
        assert_eq!(empty.backspace(&vocabulary, at(0)), None);
        assert_eq!(empty.pending_input(), "");
    }

    #[test]
    fn enter_on_empty_buffer_does_nothing() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        assert_eq!(session.submit_pending(&vocabulary, at(0)), None);
        assert_eq!(session.pending_input(), "");
        assert!(session.feedback().is_none());
    }

    #[test]
    fn lone_separator_clears_the_buffer_silently() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        assert_eq!(session.text_changed(" ", &vocabulary, at(0)), None);
        assert_eq!(session.pending_input(), "");
        assert!(session.feedback().is_none());
    }

    #[test]
    fn feedback_disappears_after_its_display_window() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.submit("banana", &vocabulary, at(1_000));
        assert!(session.visible_feedback(at(3_999)).is_some());
        assert!(session.visible_feedback(at(1_000 + FEEDBACK_DURATION_MS)).is_none());
    }

    #[test]
    fn accepted_word_clears_feedback() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.submit("banana", &vocabulary, at(0));
        session.submit("joy", &vocabulary, at(10));
        assert!(session.feedback().is_none());
    }

    #[test]
    fn stale_expiry_does_not_clear_newer_feedback() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.submit("banana", &vocabulary, at(0));
        let first = session.feedback().unwrap().generation;
        session.submit("apple", &vocabulary, at(100));
        let second = session.feedback().unwrap().generation;

        assert!(!session.expire_feedback(first));
        assert_eq!(session.visible_feedback(at(200)), Some("Apple is not an emotion"));
        assert!(session.expire_feedback(second));
        assert!(session.feedback().is_none());
    }

    #[test]
    fn results_discard_pending_input_and_stop_entry() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.text_changed("happy ", &vocabulary, at(0));
        session.text_changed("sa", &vocabulary, at(0));
        assert!(session.request_results());
        assert!(!session.request_results());

        assert_eq!(session.phase(), SessionPhase::ShowingResults);
        assert_eq!(session.pending_input(), "");
        assert_eq!(session.entered(), ["happy"]);
        assert_eq!(session.text_changed("sad ", &vocabulary, at(0)), None);
        assert_eq!(session.submit_pending(&vocabulary, at(0)), None);
        assert_eq!(session.entered(), ["happy"]);
    }

    #[test]
    fn closed_session_ignores_late_expiry_and_input() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();

        session.submit("banana", &vocabulary, at(0));
        let generation = session.feedback().unwrap().generation;
        session.close();

        assert!(session.is_closed());
        assert!(!session.expire_feedback(generation));
        assert_eq!(session.text_changed("joy ", &vocabulary, at(0)), None);
        assert!(session.entered().is_empty());
    }

    #[test]
    fn score_grows_with_distinct_words() {
        let vocabulary = vocabulary();
        let mut session = EntrySession::new();
        let mut last = session.score(&vocabulary).percentage;

        for word in ["happy", "happy", "banana", "sad", "joy"] {
            session.submit(word, &vocabulary, at(0));
            let current = session.score(&vocabulary).percentage;
            assert!(current >= last);
            last = current;
        }
        assert_eq!(last, 100.0);
    }
}

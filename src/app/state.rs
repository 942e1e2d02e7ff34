//! Application state and view model computation.
//!
//! [`AppState`] bundles the quiz session with the two things that stay fixed
//! for the plugin's lifetime: the vocabulary it validates against and the
//! theme it renders with. It is the single value the plugin shim owns.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel): the input box and
//! feedback while words are being entered, the score panel once results are
//! shown. Accepted words are laid out as wrapped chips; when they no longer
//! fit, the oldest rows scroll out of view.
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::app::AppState;
//!
//! let state = AppState::default();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.results.is_none());
//! ```

use super::modes::SessionPhase;
use super::session::EntrySession;
use crate::domain::VocabularySet;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EnteredListInfo, FeedbackInfo, FooterInfo, HeaderInfo, InputBarInfo, ResultsInfo, UIViewModel,
};
use chrono::{DateTime, Utc};

/// Title shown above both phases.
const TITLE: &str = "How many emotions do you know?";

/// Placeholder shown in an empty input box.
const INPUT_PLACEHOLDER: &str = "Type an emotion and press Enter or Space...";

/// Rows used by everything except the chip list while entering words:
/// blank, header, border, input box (3), feedback, list title, border, footer,
/// and the last terminal row, which is left empty.
const ENTRY_CHROME_ROWS: usize = 11;

/// Left and right margin around the chip list.
const CHIP_MARGIN: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Words, input buffer, feedback, and phase of the running quiz.
    pub session: EntrySession,

    /// Reference vocabulary; fixed once the plugin has loaded.
    pub vocabulary: VocabularySet,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh session over `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: VocabularySet, theme: Theme) -> Self {
        Self {
            session: EntrySession::new(),
            vocabulary,
            theme,
        }
    }

    /// Computes the view model for the current wall-clock time.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, Utc::now())
    }

    /// Computes the view model as seen at `now`.
    ///
    /// Feedback whose display window has passed is left out even if its
    /// expiry timer has not fired yet.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: DateTime<Utc>) -> UIViewModel {
        let header = HeaderInfo {
            title: format!(" {TITLE} "),
        };
        let footer = self.compute_footer();

        match self.session.phase() {
            SessionPhase::Entering => UIViewModel {
                header,
                footer,
                input_bar: Some(self.compute_input_bar()),
                feedback: self
                    .session
                    .visible_feedback(now)
                    .map(|message| FeedbackInfo {
                        message: message.to_string(),
                    }),
                entered: Some(self.compute_entered_list(rows, cols)),
                results: None,
            },
            SessionPhase::ShowingResults => UIViewModel {
                header,
                footer,
                input_bar: None,
                feedback: None,
                entered: None,
                results: Some(self.compute_results()),
            },
        }
    }

    fn compute_input_bar(&self) -> InputBarInfo {
        let pending = self.session.pending_input();
        if pending.is_empty() {
            InputBarInfo {
                text: INPUT_PLACEHOLDER.to_string(),
                is_placeholder: true,
            }
        } else {
            InputBarInfo {
                text: pending.to_string(),
                is_placeholder: false,
            }
        }
    }

    /// Lays out accepted words as chip rows, keeping the newest rows visible.
    fn compute_entered_list(&self, rows: usize, cols: usize) -> EnteredListInfo {
        let entered = self.session.entered();
        let width = cols.saturating_sub(CHIP_MARGIN * 2);
        let available_rows = rows.saturating_sub(ENTRY_CHROME_ROWS);

        let mut chip_rows = wrap_chips(entered, width);
        let overflow = chip_rows.len().saturating_sub(available_rows);
        let hidden_count = chip_rows.drain(..overflow).map(|row| row.len()).sum();

        EnteredListInfo {
            title: format!("Emotions you've named ({}):", entered.len()),
            chip_rows,
            hidden_count,
        }
    }

    fn compute_results(&self) -> ResultsInfo {
        let score = self.session.score(&self.vocabulary);
        ResultsInfo {
            heading: "Your Results".to_string(),
            percentage: score.to_string(),
            summary: format!(
                "You named {} out of {} emotions!",
                score.entered, score.total
            ),
            call_to_action:
                "Want to learn more about understanding and managing your emotions?".to_string(),
            button_label: "Sign Up to Learn More".to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.session.phase() {
            SessionPhase::Entering => {
                "Space/,/Enter: submit  Backspace: delete  Tab: I don't know any more emotions  Esc: close"
            }
            SessionPhase::ShowingResults => "q/Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(VocabularySet::builtin(), Theme::default())
    }
}

/// Greedily packs words into rows of padded chips no wider than `width`.
///
/// Each chip is the word with one space of padding on each side; chips are
/// separated by one space. A chip wider than `width` gets a row of its own.
fn wrap_chips(words: &[String], width: usize) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = vec![];
    let mut current: Vec<String> = vec![];
    let mut used = 0;

    for word in words {
        let chip_width = word.chars().count() + 2;
        let needed = if current.is_empty() { chip_width } else { used + 1 + chip_width };

        if !current.is_empty() && needed > width {
            rows.push(std::mem::take(&mut current));
            used = chip_width;
        } else {
            used = needed;
        }
        current.push(word.clone());
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn state_with(entered: &[&str]) -> AppState {
        let mut state = AppState::default();
        for word in entered {
            state.session.submit(word, &state.vocabulary, Utc::now());
        }
        state
    }

    #[test]
    fn chips_wrap_at_width() {
        // " happy " (7) + gap + " sad " (5) = 13
        let rows = wrap_chips(&words(&["happy", "sad", "joy"]), 13);
        assert_eq!(rows, vec![words(&["happy", "sad"]), words(&["joy"])]);
    }

    #[test]
    fn oversized_chip_gets_its_own_row() {
        let rows = wrap_chips(&words(&["out of control", "sad"]), 8);
        assert_eq!(rows, vec![words(&["out of control"]), words(&["sad"])]);
        assert!(wrap_chips(&[], 8).is_empty());
    }

    #[test]
    fn entering_view_shows_input_and_list() {
        let state = state_with(&["happy", "sad"]);
        let vm = state.compute_viewmodel(24, 80);

        let input = vm.input_bar.unwrap();
        assert!(input.is_placeholder);
        assert_eq!(input.text, INPUT_PLACEHOLDER);

        let entered = vm.entered.unwrap();
        assert_eq!(entered.title, "Emotions you've named (2):");
        assert_eq!(entered.chip_rows, vec![words(&["happy", "sad"])]);
        assert_eq!(entered.hidden_count, 0);
        assert!(vm.results.is_none());
    }

    #[test]
    fn oldest_chip_rows_scroll_out_of_view() {
        let state = state_with(&["happy", "sad", "joy"]);
        // 12 columns leave 8 for chips: one chip per row.
        let vm = state.compute_viewmodel(ENTRY_CHROME_ROWS + 1, 12);

        let entered = vm.entered.unwrap();
        assert_eq!(entered.chip_rows, vec![words(&["joy"])]);
        assert_eq!(entered.hidden_count, 2);
    }

    #[test]
    fn expired_feedback_is_not_rendered() {
        let mut state = AppState::default();
        let raised = Utc::now();
        state.session.submit("banana", &state.vocabulary, raised);

        let fresh = state.compute_viewmodel_at(24, 80, raised);
        assert_eq!(fresh.feedback.unwrap().message, "Banana is not an emotion");

        let later = raised + chrono::Duration::milliseconds(3000);
        assert!(state.compute_viewmodel_at(24, 80, later).feedback.is_none());
    }

    #[test]
    fn results_view_reports_the_score() {
        let mut state = state_with(&["happy"]);
        state.session.request_results();
        let vm = state.compute_viewmodel(24, 80);

        let results = vm.results.unwrap();
        let total = state.vocabulary.size();
        assert_eq!(results.summary, format!("You named 1 out of {total} emotions!"));
        assert_eq!(results.percentage, state.session.score(&state.vocabulary).to_string());
        assert!(vm.input_bar.is_none());
        assert!(vm.entered.is_none());
        assert_eq!(vm.footer.keybindings, "q/Esc: close");
    }
}

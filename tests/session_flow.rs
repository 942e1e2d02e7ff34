//! End-to-end quiz sessions driven through `handle_event`.

use chrono::{DateTime, Duration, Utc};
use emotion_quiz::app::{handle_event_at, Outcome};
use emotion_quiz::{handle_event, Action, AppState, Event, SessionPhase, Theme, VocabularySet};

fn small_quiz() -> AppState {
    let vocabulary = VocabularySet::new(["happy", "sad", "joy"]).unwrap();
    AppState::new(vocabulary, Theme::default())
}

fn type_text(state: &mut AppState, text: &str, now: DateTime<Utc>) -> Vec<Action> {
    text.chars()
        .flat_map(|c| handle_event_at(state, &Event::Char(c), now).unwrap().1)
        .collect()
}

#[test]
fn full_session_scores_one_of_three() {
    let mut state = small_quiz();
    let start = Utc::now();

    assert!(type_text(&mut state, "happy ", start).is_empty());
    assert_eq!(state.session.entered(), ["happy"]);

    let actions = type_text(&mut state, "Happy,", start);
    assert_eq!(actions.len(), 1);
    assert_eq!(
        state.session.visible_feedback(start),
        Some("You've already entered this emotion!")
    );

    type_text(&mut state, "banana", start);
    handle_event_at(&mut state, &Event::Submit, start).unwrap();
    assert_eq!(state.session.visible_feedback(start), Some("Banana is not an emotion"));
    assert_eq!(state.session.entered(), ["happy"]);

    let (render, actions) = handle_event(&mut state, &Event::RequestResults).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.session.phase(), SessionPhase::ShowingResults);

    let score = state.session.score(&state.vocabulary);
    assert_eq!((score.entered, score.total), (1, 3));
    assert_eq!(score.percentage, 33.3);

    let results = state.compute_viewmodel(24, 80).results.unwrap();
    assert_eq!(results.percentage, "33.3%");
    assert_eq!(results.summary, "You named 1 out of 3 emotions!");
}

#[test]
fn equivalent_spellings_count_once() {
    let mut state = small_quiz();
    let now = Utc::now();

    type_text(&mut state, "Happy ", now);
    type_text(&mut state, "happy,", now);
    type_text(&mut state, " HAPPY", now);
    handle_event_at(&mut state, &Event::Submit, now).unwrap();

    assert_eq!(state.session.entered(), ["happy"]);
    assert_eq!(
        state.session.submit("happy", &state.vocabulary, now),
        Outcome::Duplicate
    );
}

#[test]
fn enter_on_empty_buffer_does_nothing() {
    let mut state = small_quiz();

    let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

    assert!(!render);
    assert!(actions.is_empty());
    assert!(state.session.pending_input().is_empty());
    assert!(state.session.feedback().is_none());
}

#[test]
fn feedback_disappears_after_three_seconds() {
    let mut state = small_quiz();
    let raised = Utc::now();

    let actions = type_text(&mut state, "banana ", raised);
    let Some(Action::ScheduleFeedbackExpiry { generation, after }) = actions.first().cloned() else {
        panic!("expected a feedback expiry, got {actions:?}");
    };
    assert_eq!(after, std::time::Duration::from_secs(3));

    assert!(state.session.visible_feedback(raised + Duration::milliseconds(2999)).is_some());
    assert!(state.session.visible_feedback(raised + Duration::milliseconds(3000)).is_none());

    let (render, _) = handle_event(&mut state, &Event::FeedbackExpired { generation }).unwrap();
    assert!(render);
    assert!(state.session.feedback().is_none());
}

#[test]
fn newer_feedback_outlives_an_older_expiry() {
    let mut state = small_quiz();
    let now = Utc::now();

    let first = type_text(&mut state, "banana ", now);
    type_text(&mut state, "apple ", now);

    let Some(Action::ScheduleFeedbackExpiry { generation, .. }) = first.first().cloned() else {
        panic!("expected a feedback expiry");
    };
    let (render, _) = handle_event(&mut state, &Event::FeedbackExpired { generation }).unwrap();

    assert!(!render);
    assert_eq!(state.session.visible_feedback(now), Some("Apple is not an emotion"));
}

#[test]
fn pasted_multi_word_entries_are_accepted() {
    let mut state = AppState::default();
    let now = Utc::now();

    // Multi-word entries only arrive whole, e.g. pasted text.
    for text in ["out of control,", "Let Down ", "M,"] {
        handle_event_at(&mut state, &Event::TextChanged(text.to_string()), now).unwrap();
    }
    handle_event(&mut state, &Event::RequestResults).unwrap();

    let score = state.session.score(&state.vocabulary);
    assert_eq!(score.total, 158);
    assert_eq!(score.entered, 3);
    assert_eq!(score.percentage, 1.9);
}

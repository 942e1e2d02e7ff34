//! Zellij plugin wrapper.
//!
//! Thin integration layer between the library and the Zellij runtime: maps
//! keystrokes and timer ticks to library events, runs them through
//! [`handle_event`], and executes the returned actions.
//!
//! # Keybindings
//!
//! While entering words:
//! - Printable characters: type (space and comma also complete the word)
//! - `Enter`: submit the word
//! - `Backspace`: delete the last character
//! - `Tab` / `Ctrl+d`: "I don't know any more emotions", show the score
//! - `Esc`: close
//!
//! On the results screen:
//! - `q` / `Esc`: close
//!
//! # Timers
//!
//! Zellij timers carry no payload, only the elapsed seconds. Every scheduled
//! feedback expiry has the same delay, so they fire in scheduling order: the
//! generation of each pending expiry is queued and popped when a `Timer`
//! event arrives.

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use emotion_quiz::{handle_event, Action, AppState, Config, Event, SessionPhase};

/// Plugin state: the library's `AppState` plus pending timer bookkeeping.
pub struct QuizPlugin {
    app: AppState,

    /// Generations of scheduled feedback expiries, oldest first.
    pending_expiries: VecDeque<u64>,
}

impl Default for QuizPlugin {
    fn default() -> Self {
        Self {
            app: emotion_quiz::initialize(&Config::default()),
            pending_expiries: VecDeque::new(),
        }
    }
}

impl ZellijPlugin for QuizPlugin {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        emotion_quiz::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = emotion_quiz::initialize(&config);

        subscribe(&[EventType::Key, EventType::Timer]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let _guard = tracing::debug_span!("plugin_update", event_type = %Self::event_name(&event)).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => match self.pending_expiries.pop_front() {
                Some(generation) => {
                    tracing::trace!(elapsed, generation, "feedback timer fired");
                    Event::FeedbackExpired { generation }
                }
                None => return false,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
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
        emotion_quiz::ui::render(&self.app, rows, cols);
    }
}

impl QuizPlugin {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a keystroke to a library event for the current phase.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.session.phase() {
            SessionPhase::Entering => {
                if key.has_modifiers(&[KeyModifier::Ctrl]) {
                    return (key.bare_key == BareKey::Char('d')).then_some(Event::RequestResults);
                }
                match key.bare_key {
                    BareKey::Enter => Some(Event::Submit),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Tab => Some(Event::RequestResults),
                    BareKey::Esc => Some(Event::CloseFocus),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                }
            }
            SessionPhase::ShowingResults => match key.bare_key {
                BareKey::Char('q') | BareKey::Esc => Some(Event::CloseFocus),
                _ => None,
            },
        }
    }

    /// Translates a library action into Zellij API calls.
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::ScheduleFeedbackExpiry { generation, after } => {
                tracing::debug!(generation, after_ms = after.as_millis(), "scheduling feedback expiry");
                self.pending_expiries.push_back(*generation);
                set_timeout(after.as_secs_f64());
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin");
                self.pending_expiries.clear();
                close_self();
            }
        }
    }
}

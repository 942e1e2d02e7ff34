//! Application layer coordinating session state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the pure domain
//! types. It owns the quiz session and turns input events into session
//! operations.
//!
//! # Architecture
//!
//! ```text
//! Keystroke → Event → handle_event → EntrySession → (render?, Actions)
//!                          ↑                               ↓
//!                          └──── FeedbackExpired ◀── timer ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Session phase state machine
//! - [`session`]: Word validation, deduplication, and feedback lifetime
//! - [`state`]: Application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('j'))?;
//! assert!(should_render && actions.is_empty());
//! # Ok::<(), emotion_quiz::QuizError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, handle_event_at, Event};
pub use modes::SessionPhase;
pub use session::{EntrySession, Feedback, Outcome};
pub use state::AppState;

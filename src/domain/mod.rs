//! Domain layer for the emotion quiz.
//!
//! Pure, host-independent building blocks with no knowledge of Zellij or of
//! the session lifecycle:
//!
//! - [`error`]: Error types and result alias
//! - [`vocabulary`]: The immutable reference word list
//! - [`normalizer`]: Token normalization and boundary detection
//! - [`score`]: Percentage calculation
//!
//! # Examples
//!
//! ```
//! use emotion_quiz::domain::{normalizer, score, VocabularySet};
//!
//! let vocabulary = VocabularySet::new(["happy", "sad"])?;
//! let token = normalizer::normalize(" Happy ");
//! assert!(vocabulary.is_member(&token));
//! assert_eq!(score::percentage(1, vocabulary.size()), 50.0);
//! # Ok::<(), emotion_quiz::QuizError>(())
//! ```

pub mod error;
pub mod normalizer;
pub mod score;
pub mod vocabulary;

pub use error::{QuizError, Result};
pub use normalizer::TextChange;
pub use score::ScoreSummary;
pub use vocabulary::VocabularySet;

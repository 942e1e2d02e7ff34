//! Error types for the emotion quiz.
//!
//! This module defines the centralized error type [`QuizError`] and a type alias
//! [`Result`] used throughout the crate. User-input classification (duplicate or
//! unknown words) is not an error; it is reported through
//! [`Outcome`](crate::app::session::Outcome) and the feedback channel. The
//! variants here cover the plugin's own failures: unreadable configuration
//! files, malformed themes, and unusable word lists.

use thiserror::Error;

/// The main error type for quiz plugin operations.
///
/// # Examples
///
/// ```
/// use emotion_quiz::QuizError;
///
/// fn load_words() -> Result<(), QuizError> {
///     Err(QuizError::Vocabulary("missing `words` key".to_string()))
/// }
///
/// assert!(load_words().is_err());
/// ```
#[derive(Debug, Error)]
pub enum QuizError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A custom word list could not be read or parsed.
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// A word list normalized down to zero words.
    ///
    /// Scoring divides by the vocabulary size, so an empty list is rejected
    /// at construction time.
    #[error("Vocabulary must contain at least one word")]
    EmptyVocabulary,

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for quiz operations.
pub type Result<T> = std::result::Result<T, QuizError>;

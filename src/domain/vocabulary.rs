//! The reference vocabulary of recognized emotion words.
//!
//! A [`VocabularySet`] is built once at plugin load and never mutated. Every
//! entry is normalized with the same rules applied to user input (see
//! [`normalizer::normalize`]), so membership tests are case- and
//! whitespace-insensitive. Duplicate entries collapse to their first
//! occurrence; the distinct count is the denominator for scoring.
//!
//! # Custom Word Lists
//!
//! A TOML file with a single `words` array replaces the built-in list:
//!
//! ```toml
//! words = ["calm", "curious", "elated"]
//! ```

use super::error::{QuizError, Result};
use super::normalizer;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Built-in emotion words, in source order.
///
/// The list carries a lone `"M"`, which normalizes to `"m"` and is kept as a
/// regular entry.
pub const BUILTIN_EMOTIONS: &[&str] = &[
    "abandoned", "acceptance", "accepted", "admiration", "affectionate", "aggressive",
    "aggressiveness", "amazed", "amazement", "anger", "angry", "annoyance", "annoyed",
    "anxious", "apathetic", "appalled", "apprehension", "anticipation", "aroused",
    "ashamed", "astonished", "awe", "awful", "bad", "betrayed", "bitter", "bored",
    "boredom", "brave", "busy", "caring", "cheeky", "confident", "confused", "contempt",
    "content", "courageous", "creative", "critical", "curious", "depressed", "despair",
    "detestable", "devastated", "disappointed", "disapproving", "disapproval",
    "disillusioned", "dismissive", "dismayed", "disgust", "disgusted", "distant",
    "distraction", "eager", "ecstasy", "embarrassed", "empty", "energetic", "excluded",
    "excited", "exposed", "fear", "fearful", "fragile", "free", "frightened", "frustrated",
    "furious", "guilty", "grateful", "grief", "happy", "helpless", "hesitant", "hopeful",
    "horrified", "hostile", "hurt", "humiliated", "indifferent", "indignant", "infuriated",
    "insecure", "inquisitive", "inspired", "insignificant", "interest", "interested",
    "intimate", "isolated", "jealous", "joy", "joyful", "judgmental", "let down",
    "loathing", "lonely", "love", "loved", "loving", "M", "mad", "nauseated", "nervous",
    "numb", "optimism", "optimistic", "out of control", "overwhelmed", "peaceful",
    "pensiveness", "persecuted", "perplexed", "playful", "powerless", "powerful",
    "pressured", "proud", "provoked", "rage", "remorse", "remorseful", "resentful",
    "respected", "revolted", "ridiculed", "rushed", "sad", "sadness", "scared",
    "sensitive", "serenity", "skeptical", "shocked", "sleepy", "stressed", "submission",
    "successful", "surprise", "surprised", "thankful", "terror", "threatened", "tired",
    "trust", "trusting", "unfocused", "unwanted", "valued", "victimized", "vigilance",
    "violated", "vulnerable", "weak", "withdrawn", "worried", "worthless",
];

/// On-disk shape of a custom word list.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    words: Vec<String>,
}

/// Immutable, normalized set of known words with stable enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySet {
    /// Distinct normalized words in first-occurrence order.
    words: Vec<String>,
    /// Lookup index over `words`.
    index: HashSet<String>,
}

impl VocabularySet {
    /// Builds a vocabulary from raw entries.
    ///
    /// Each entry is lowercased and trimmed; empty entries are skipped and
    /// repeated entries keep their first position.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::EmptyVocabulary`] if no word survives
    /// normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use emotion_quiz::VocabularySet;
    ///
    /// let vocabulary = VocabularySet::new(["Happy", "sad", "happy"])?;
    /// assert_eq!(vocabulary.size(), 2);
    /// assert_eq!(vocabulary.words(), ["happy", "sad"]);
    /// # Ok::<(), emotion_quiz::QuizError>(())
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = HashSet::new();

        for entry in entries {
            let word = normalizer::normalize(entry.as_ref());
            if word.is_empty() {
                continue;
            }
            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }

        Ok(Self { words, index })
    }

    /// Returns the built-in emotion vocabulary.
    #[must_use]
    pub fn builtin() -> Self {
        let mut words = Vec::with_capacity(BUILTIN_EMOTIONS.len());
        let mut index = HashSet::with_capacity(BUILTIN_EMOTIONS.len());
        for entry in BUILTIN_EMOTIONS {
            let word = normalizer::normalize(entry);
            if index.insert(word.clone()) {
                words.push(word);
            }
        }
        Self { words, index }
    }

    /// Loads a custom word list from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Vocabulary`] if the file cannot be read or parsed,
    /// and [`QuizError::EmptyVocabulary`] if it lists no usable words.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| QuizError::Vocabulary(format!("Failed to read word list: {e}")))?;

        let file: VocabularyFile = toml::from_str(&contents)
            .map_err(|e| QuizError::Vocabulary(format!("Failed to parse word list TOML: {e}")))?;

        Self::new(file.words)
    }

    /// Tests whether `token` is a known word after normalization.
    #[must_use]
    pub fn is_member(&self, token: &str) -> bool {
        self.index.contains(&normalizer::normalize(token))
    }

    /// Number of distinct words; always at least one.
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Distinct words in first-occurrence order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for VocabularySet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_list_is_normalized_and_complete() {
        let vocabulary = VocabularySet::builtin();
        assert_eq!(vocabulary.size(), BUILTIN_EMOTIONS.len());
        assert!(vocabulary.words().iter().all(|w| w == &w.to_lowercase()));
        assert!(vocabulary.is_member("m"));
        assert!(vocabulary.is_member("out of control"));
    }

    #[test]
    fn membership_ignores_case_and_surrounding_whitespace() {
        let vocabulary = VocabularySet::builtin();
        assert!(vocabulary.is_member("happy"));
        assert!(vocabulary.is_member("  HaPpY "));
        assert!(!vocabulary.is_member("banana"));
        assert!(!vocabulary.is_member(""));
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let vocabulary = VocabularySet::new(["Joy", "sad", "JOY", " sad "]).unwrap();
        assert_eq!(vocabulary.words(), ["joy", "sad"]);
        assert_eq!(vocabulary.size(), 2);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = VocabularySet::new(["", "   "]).unwrap_err();
        assert!(matches!(err, QuizError::EmptyVocabulary));
    }

    #[test]
    fn loads_word_list_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"words = ["Calm", "elated", "calm"]"#).unwrap();

        let vocabulary = VocabularySet::from_toml_file(file.path()).unwrap();
        assert_eq!(vocabulary.words(), ["calm", "elated"]);
    }

    #[test]
    fn malformed_word_list_reports_vocabulary_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "emotions = 3").unwrap();

        let err = VocabularySet::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, QuizError::Vocabulary(_)));
    }
}

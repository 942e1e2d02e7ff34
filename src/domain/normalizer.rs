//! Token normalization and word-boundary detection.
//!
//! Raw input arrives either as the full text of the input field after a
//! change, or as an explicit submit (Enter). A word is complete when the text
//! ends in one of [`TOKEN_SEPARATORS`], or when the user submits. Completed
//! words are normalized (trimmed, lowercased) before anything compares them.

/// Characters that end the word being typed.
pub const TOKEN_SEPARATORS: [char; 2] = [' ', ','];

/// Result of inspecting the input text after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextChange {
    /// No separator at the end; the text stays in the buffer.
    Pending,

    /// A separator ended the word.
    ///
    /// Holds the normalized token, or `None` when nothing but whitespace or
    /// separators preceded it.
    Boundary(Option<String>),
}

/// Canonical form of a token: surrounding whitespace removed, lowercased.
///
/// # Examples
///
/// ```
/// use emotion_quiz::domain::normalizer::normalize;
///
/// assert_eq!(normalize("  Happy "), "happy");
/// assert_eq!(normalize("OUT OF CONTROL"), "out of control");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Inspects the full input text after a change.
///
/// # Examples
///
/// ```
/// use emotion_quiz::domain::normalizer::{on_text_change, TextChange};
///
/// assert_eq!(on_text_change("Hap"), TextChange::Pending);
/// assert_eq!(on_text_change("Happy,"), TextChange::Boundary(Some("happy".into())));
/// assert_eq!(on_text_change(" "), TextChange::Boundary(None));
/// ```
#[must_use]
pub fn on_text_change(raw: &str) -> TextChange {
    let Some(candidate) = raw.strip_suffix(&TOKEN_SEPARATORS[..]) else {
        return TextChange::Pending;
    };

    TextChange::Boundary(non_empty(normalize(candidate)))
}

/// Extracts the token for an explicit submit; `None` when the buffer is blank.
#[must_use]
pub fn on_submit(buffer: &str) -> Option<String> {
    non_empty(normalize(buffer))
}

/// Formats a token for display: first character uppercased, the rest lowercased.
///
/// # Examples
///
/// ```
/// use emotion_quiz::domain::normalizer::capitalize;
///
/// assert_eq!(capitalize("banana"), "Banana");
/// assert_eq!(capitalize("éLAN"), "Élan");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
    })
}

fn non_empty(token: String) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_end_a_word() {
        assert_eq!(on_text_change("Happy "), TextChange::Boundary(Some("happy".into())));
        assert_eq!(on_text_change("happy,"), TextChange::Boundary(Some("happy".into())));
        assert_eq!(on_text_change(" HAPPY,"), TextChange::Boundary(Some("happy".into())));
    }

    #[test]
    fn only_the_trailing_separator_is_stripped() {
        assert_eq!(on_text_change("sad,,"), TextChange::Boundary(Some("sad,".into())));
        assert_eq!(on_text_change("let down "), TextChange::Boundary(Some("let down".into())));
    }

    #[test]
    fn text_without_trailing_separator_is_pending() {
        assert_eq!(on_text_change(""), TextChange::Pending);
        assert_eq!(on_text_change("hap"), TextChange::Pending);
        assert_eq!(on_text_change("let do"), TextChange::Pending);
    }

    #[test]
    fn blank_candidates_produce_empty_boundaries() {
        assert_eq!(on_text_change(","), TextChange::Boundary(None));
        assert_eq!(on_text_change("   "), TextChange::Boundary(None));
    }

    #[test]
    fn submit_normalizes_the_whole_buffer() {
        assert_eq!(on_submit(" HAPPY"), Some("happy".to_string()));
        assert_eq!(on_submit("Out of Control"), Some("out of control".to_string()));
        assert_eq!(on_submit(""), None);
        assert_eq!(on_submit("  \t"), None);
    }
}

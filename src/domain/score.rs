//! Score calculation.

use std::fmt;

/// Percentage of the vocabulary named, rounded to one decimal place.
///
/// Rounds half away from zero. A zero `total` yields `0.0`; a constructed
/// [`VocabularySet`](super::VocabularySet) is never empty, so the quiz itself
/// never hits that case.
///
/// # Examples
///
/// ```
/// use emotion_quiz::domain::score::percentage;
///
/// assert_eq!(percentage(1, 3), 33.3);
/// assert_eq!(percentage(2, 3), 66.7);
/// assert_eq!(percentage(0, 158), 0.0);
/// assert_eq!(percentage(158, 158), 100.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(entered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = entered as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Final tally shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Distinct valid words the user named.
    pub entered: usize,
    /// Distinct words in the vocabulary.
    pub total: usize,
    /// `entered / total` as a percentage with one decimal.
    pub percentage: f64,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(entered: usize, total: usize) -> Self {
        Self {
            entered,
            total,
            percentage: percentage(entered, total),
        }
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_the_scale() {
        assert_eq!(percentage(0, 3), 0.0);
        assert_eq!(percentage(3, 3), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn never_decreases_as_words_are_added() {
        let total = 158;
        let scores: Vec<f64> = (0..=total).map(|n| percentage(n, total)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn summary_displays_one_decimal() {
        let summary = ScoreSummary::new(1, 3);
        assert_eq!(summary.to_string(), "33.3%");
        assert_eq!(ScoreSummary::new(0, 5).to_string(), "0.0%");
        assert_eq!(ScoreSummary::new(5, 5).to_string(), "100.0%");
    }
}

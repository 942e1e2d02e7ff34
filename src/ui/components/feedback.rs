//! Feedback alert component renderer.

use crate::ui::helpers::{char_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FeedbackInfo;

/// Renders the alert line at `row` and returns the next free row.
///
/// The row is always consumed so the list below does not jump when a message
/// appears or expires; with no feedback it is left blank.
pub fn render_feedback(row: usize, feedback: Option<&FeedbackInfo>, theme: &Theme, cols: usize) -> usize {
    let Some(feedback) = feedback else {
        return row + 1;
    };

    let text = truncate_to_width(&format!(" ! {} ", feedback.message), cols.saturating_sub(2));

    position_cursor(row, 3);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.alert_fg));
    if let Some(bg) = &theme.colors.alert_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(char_width(&text) + 2)));

    row + 1
}

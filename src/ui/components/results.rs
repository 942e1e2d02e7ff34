//! Results panel component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsInfo;

/// Renders the score panel starting at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///                 Your Results
///
///                    33.3%
///
///        You named 1 out of 158 emotions!
///
///  Want to learn more about understanding ...
///
///           [ Sign Up to Learn More ]
/// ```
///
/// Every line is centered. The sign-up button is decorative; the quiz keeps
/// no account state.
pub fn render_results(row: usize, results: &ResultsInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_centered(row, &results.heading, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.score_fg));
    print_centered(row + 2, &results.percentage, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print_centered(row + 4, &results.summary, cols);
    print_centered(row + 6, &results.call_to_action, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.button_fg));
    print!("{}", Theme::bg(&theme.colors.button_bg));
    print_centered(row + 8, &format!("[ {} ]", results.button_label), cols);
    print!("{}", Theme::reset());

    row + 9
}

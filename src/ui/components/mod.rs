//! Composable UI component renderers.
//!
//! Each component paints one part of the screen and returns the next free
//! row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Quiz title
//! - [`footer`]: Keybinding hints
//! - [`input`]: Bordered input box with the word being typed
//! - [`feedback`]: Alert line for duplicate and unknown words
//! - [`chips`]: Words named so far
//! - [`results`]: Score panel
//!
//! # Layout Modes
//!
//! - [`render_entry_mode`]: Header + Input + Feedback + Chips + Footer
//! - [`render_results_mode`]: Header + Results + Footer

mod chips;
mod feedback;
mod footer;
mod header;
mod input;
mod results;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultsInfo, UIViewModel};

use chips::render_entered_list;
use feedback::render_feedback;
use footer::render_footer;
use header::render_header;
use input::render_input_bar;
use results::render_results;

/// Rows between the top border and the results panel.
const RESULTS_TOP_PADDING: usize = 2;

/// Renders a horizontal border line at `row` (1-indexed) and returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the bottom border and footer on the last two used rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the word entry layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Input Box - 3 lines]
/// [Feedback]
/// [List Title]
/// [Chip Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// The view model has already dropped chip rows that would not fit.
pub fn render_entry_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(input) = &vm.input_bar {
        current_row = render_input_bar(current_row, input, theme, cols);
    }
    current_row = render_feedback(current_row, vm.feedback.as_ref(), theme, cols);
    if let Some(entered) = &vm.entered {
        let _current_row = render_entered_list(current_row, entered, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the results layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Padding]
/// [Results Panel]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_results_mode(vm: &UIViewModel, results: &ResultsInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_results(current_row + RESULTS_TOP_PADDING, results, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

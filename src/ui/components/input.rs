//! Input box component renderer.
//!
//! This module renders the bordered box holding the word currently being
//! typed, or a dimmed placeholder when the box is empty.

use crate::ui::helpers::{char_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

/// Label printed before the typed text.
const INPUT_LABEL: &str = " Emotion: ";

/// Renders the input box starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Emotion: anxio▏      │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// Long input keeps its tail visible so the cursor end is never cut off.
pub fn render_input_bar(row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let text_width = inner_width.saturating_sub(char_width(INPUT_LABEL) + 1);
    let (text, cursor) = if input.is_placeholder {
        (truncate_to_width(&input.text, text_width), "")
    } else {
        (visible_tail(&input.text, text_width), "▏")
    };
    let used = char_width(INPUT_LABEL) + char_width(&text) + char_width(cursor);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{INPUT_LABEL}");
    if input.is_placeholder {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}{cursor}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `width` characters of `text`.
fn visible_tail(text: &str, width: usize) -> String {
    let skip = char_width(text).saturating_sub(width);
    text.chars().skip(skip).collect()
}

//! Entered-words list component renderer.
//!
//! Renders the list heading and the words named so far as rows of colored
//! chips. Row layout is decided by the view model; this module only paints.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EnteredListInfo;

/// Column where the list starts.
const LIST_COLUMN: usize = 3;

/// Renders the heading and chip rows starting at `row`.
///
/// # Returns
///
/// The next available row position.
///
/// # Layout
///
/// ```text
/// Emotions you've named (4):  (+1 more)
///  happy   sad   out of control
///  joy
/// ```
pub fn render_entered_list(row: usize, list: &EnteredListInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_list_title(row, list, theme);

    let max_chip = cols.saturating_sub(LIST_COLUMN * 2);
    for chips in &list.chip_rows {
        position_cursor(current_row, LIST_COLUMN);
        for (i, word) in chips.iter().enumerate() {
            if i > 0 {
                print!(" ");
            }
            print!("{}", Theme::fg(&theme.colors.chip_fg));
            print!("{}", Theme::bg(&theme.colors.chip_bg));
            print!(" {} ", truncate_to_width(word, max_chip));
            print!("{}", Theme::reset());
        }
        current_row += 1;
    }

    current_row
}

fn render_list_title(row: usize, list: &EnteredListInfo, theme: &Theme) -> usize {
    position_cursor(row, LIST_COLUMN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", list.title);
    print!("{}", Theme::reset());

    if list.hidden_count > 0 {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  (+{} more)", list.hidden_count);
        print!("{}", Theme::reset());
    }

    row + 1
}

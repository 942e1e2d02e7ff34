//! Footer component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints at `row` and returns the next free row.
///
/// Hints longer than the pane are truncated rather than wrapped so the footer
/// always occupies exactly one line.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row, &footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}

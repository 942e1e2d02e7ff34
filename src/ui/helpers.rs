//! Shared rendering utilities.
//!
//! Cursor positioning plus the width arithmetic every component needs. Widths
//! are counted in characters, not bytes, so accented words pad correctly.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in characters.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` down to at most `width` characters, ending in `...` if cut.
///
/// # Example
///
/// ```rust
/// use emotion_quiz::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("overwhelmed", 8), "overw...");
/// assert_eq!(truncate_to_width("sad", 8), "sad");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if char_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Left and right padding that centers `text_width` within `cols`.
///
/// Left padding is the smaller half when the remainder is odd.
#[must_use]
pub const fn centered_padding(text_width: usize, cols: usize) -> (usize, usize) {
    let free = cols.saturating_sub(text_width);
    let left = free / 2;
    (left, free - left)
}

/// Prints `text` centered on `row`, padded to the full width.
///
/// Styling escapes must be printed by the caller before and reset after.
pub fn print_centered(row: usize, text: &str, cols: usize) {
    let text = truncate_to_width(text, cols);
    let (left, right) = centered_padding(char_width(&text), cols);

    position_cursor(row, 1);
    print!("{}{text}{}", " ".repeat(left), " ".repeat(right));
}

//! Status line renderer: page indicator on the left, category on the right.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the page indicator and category summary on one row.
///
/// # Returns
///
/// The next free row (`row + 1`).
pub fn render_status_line(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let left = format!(" {}", status.page);
    let right = format!("{} ", status.category);
    let gap = cols.saturating_sub(display_len(&left) + display_len(&right));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{left}");
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{right}");
    print!("{}", Theme::reset());
    row + 1
}

//! Empty state component renderer.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
///
/// # Parameters
///
/// * `row` - First of the two rows
/// * `empty` - Message and subtitle
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The row after the subtitle.
///
/// # Example
///
/// ```rust
/// use artscope::ui::components::empty::render_empty_state;
/// use artscope::ui::{EmptyState, Theme};
///
/// let empty = EmptyState {
///     message: "No artworks found".to_string(),
///     subtitle: "Try another search".to_string(),
/// };
/// assert_eq!(render_empty_state(10, &empty, &Theme::default(), 80), 12);
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = display_len(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = display_len(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}

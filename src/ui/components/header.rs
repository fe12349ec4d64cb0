//! Header component renderer.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold title bar.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `header` - Title text
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next free row (`row + 1`).
///
/// # Example
///
/// ```rust
/// use artscope::ui::components::header::render_header;
/// use artscope::ui::{HeaderInfo, Theme};
///
/// let header = HeaderInfo { title: "Artscope".to_string() };
/// assert_eq!(render_header(2, &header, &Theme::default(), 80), 3);
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_len(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}

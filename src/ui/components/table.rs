//! Artwork table renderer with TITLE, ARTIST and DATE columns.

use crate::ui::helpers::{self, display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the TITLE column, including its trailing gap.
const TITLE_COLUMN: usize = 44;

/// Fixed width of the DATE column.
const DATE_COLUMN: usize = 16;

/// Renders the bold TITLE, ARTIST and DATE column headers.
///
/// # Returns
///
/// The next free row (`row + 1`).
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let artist_column = cols.saturating_sub(TITLE_COLUMN + DATE_COLUMN);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<TITLE_COLUMN$}{:<artist_column$}{:<DATE_COLUMN$}", "TITLE", "ARTIST", "DATE");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one line per artwork, starting at `row`.
///
/// # Parameters
///
/// * `row` - First table row
/// * `items` - Rows already windowed to the available height
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The row after the last artwork.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one artwork row padded to the full width so the selection
/// background covers the whole line.
///
/// Styling precedence: selection colors, then search highlights on the
/// title, then the normal text color. The artist and date columns are dimmed
/// on unselected rows.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let artist_column = cols.saturating_sub(TITLE_COLUMN + DATE_COLUMN);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(TITLE_COLUMN.saturating_sub(display_len(&item.title))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.artist);
    print!("{}", " ".repeat(artist_column.saturating_sub(display_len(&item.artist))));
    print!("{}", item.date);

    let line_len = TITLE_COLUMN + artist_column.max(display_len(&item.artist)) + display_len(&item.date);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

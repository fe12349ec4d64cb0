//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`status`]: Page indicator and active category
//! - [`search`]: Search input box
//! - [`table`]: Artwork list (TITLE, ARTIST, DATE)
//! - [`picker`]: Category picker overlay
//! - [`detail`]: Artwork detail and comment form
//! - [`empty`]: Message shown when nothing can be listed
//! - [`footer`]: Keybinding hints
//!
//! # Layouts
//!
//! - [`render_list_mode`]: Header, optional search bar, status line, table, footer
//! - [`render_detail_mode`]: Header, detail body, footer

mod detail;
pub mod empty;
mod footer;
pub mod header;
mod picker;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use picker::render_picker;
use search::render_search_bar;
use status::render_status_line;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Bottom border and footer, anchored to the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the list screen.
///
/// # Parameters
///
/// * `vm` - View model for the list screen
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Layout
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, when shown]
/// [Status line]
/// [Table headers]
/// [Table rows, or the empty state]
/// [Border]
/// [Footer]
/// ```
///
/// The category picker, when open, is drawn over the table area.
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_status_line(current_row, &vm.status_line, theme, cols);

    let table_top = current_row;
    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    if let Some(picker) = &vm.picker {
        let max_rows = rows.saturating_sub(table_top + 2);
        render_picker(table_top, picker, theme, cols, max_rows);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail screen: header, attribute rows and comment form,
/// then the footer anchored to the bottom.
///
/// # Parameters
///
/// * `vm` - View model supplying header and footer
/// * `detail` - The open artwork and form state
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_detail_mode(vm: &UIViewModel, detail: &DetailInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_detail(current_row + 1, detail, theme, cols, rows.saturating_sub(2));

    render_bottom(vm, theme, cols, rows);
}

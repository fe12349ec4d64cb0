//! Category picker overlay, drawn as a bordered box over the table area.

use crate::ui::helpers::{self, display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerInfo;

const PICKER_MARGIN: usize = 8;

/// Renders the picker starting at `row` with at most `max_rows` lines,
/// keeping the cursor in view.
///
/// # Parameters
///
/// * `row` - Top border row
/// * `picker` - Typed text, narrowed options and cursor
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `max_rows` - Height available, borders included
///
/// # Layout
///
/// ```text
/// ┌────────────────────────┐
/// │ Category: imp█         │
/// │  Impressionism         │  (selected row uses selection colors)
/// │  Modern Art            │
/// └────────────────────────┘
/// ```
pub fn render_picker(row: usize, picker: &PickerInfo, theme: &Theme, cols: usize, max_rows: usize) {
    let inner_width = cols.saturating_sub(PICKER_MARGIN * 2 + 2);
    let list_rows = max_rows.saturating_sub(4).max(1);
    let first = picker.cursor.saturating_sub(list_rows.saturating_sub(1));

    let border = |r: usize, left: &str, right: &str| {
        position_cursor(r, 1);
        print!("{}", " ".repeat(PICKER_MARGIN));
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("{left}{}{right}", "─".repeat(inner_width));
        print!("{}", Theme::reset());
    };

    border(row, "┌", "┐");

    let prompt = truncate(&format!(" Category: {}█", picker.query), inner_width);
    open_line(row + 1, theme);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prompt}");
    close_line(inner_width.saturating_sub(display_len(&prompt)), theme);

    let mut current = row + 2;
    if picker.options.is_empty() {
        let none = truncate(" No matching categories", inner_width);
        open_line(current, theme);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{none}");
        close_line(inner_width.saturating_sub(display_len(&none)), theme);
        current += 1;
    }

    for (idx, option) in picker.options.iter().enumerate().skip(first).take(list_rows) {
        let selected = idx == picker.cursor;
        let label = truncate(&option.label, inner_width.saturating_sub(2));

        open_line(current, theme);
        if selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("  ");
        helpers::render_highlighted_text(&label, &option.highlight_ranges, theme, selected);
        print!("{}", " ".repeat(inner_width.saturating_sub(display_len(&label) + 2)));
        close_line(0, theme);
        current += 1;
    }

    border(current, "└", "┘");
}

fn open_line(row: usize, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PICKER_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
}

fn close_line(padding: usize, theme: &Theme) {
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());
}

//! Detail screen renderer: artwork attributes followed by the comment form.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, FormFieldInfo};

/// Width of the label column.
const LABEL_WIDTH: usize = 13;

/// Renders the detail body from `row`, stopping before `last_row`.
///
/// Attribute rows come first, then the comment form fields with their
/// validation messages, then the submission notice.
///
/// # Parameters
///
/// * `row` - First body row
/// * `detail` - Title, attribute rows and form state
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `last_row` - First row the body must not draw on
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize, last_row: usize) {
    let mut current = row;

    position_cursor(current, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {}", truncate(&detail.title, cols.saturating_sub(2)));
    print!("{}", Theme::reset());
    current += 2;

    if detail.loading {
        return;
    }

    for (label, value) in &detail.fields {
        if current >= last_row {
            return;
        }
        position_cursor(current, 1);
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!(" {label:<LABEL_WIDTH$}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        print!("{}", Theme::reset());
        current += 1;
    }
    current += 1;

    if current < last_row {
        position_cursor(current, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!(" Leave a comment");
        print!("{}", Theme::reset());
        current += 1;
    }

    for field in &detail.form {
        if current >= last_row {
            return;
        }
        current = render_form_field(current, field, theme);
    }

    if let Some(notice) = &detail.notice {
        if current < last_row {
            position_cursor(current + 1, 1);
            print!("{}", Theme::fg(&theme.colors.accent_fg));
            print!(" {}", truncate(notice, cols.saturating_sub(2)));
            print!("{}", Theme::reset());
        }
    }
}

fn render_form_field(row: usize, field: &FormFieldInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    let (marker, label_color) = if field.is_focused {
        ("›", &theme.colors.accent_fg)
    } else {
        (" ", &theme.colors.text_dim)
    };
    let cursor = if field.is_focused { "█" } else { "" };

    print!("{}", Theme::fg(label_color));
    print!("{marker}{:<LABEL_WIDTH$}", field.label);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}{cursor}", field.value);

    if let Some(error) = field.error {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{error}");
    }
    print!("{}", Theme::reset());
    row + 1
}

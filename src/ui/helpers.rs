//! Shared rendering utilities.
//!
//! Everything here works on character indices, not byte indices, so titles
//! with accented or non-Latin characters are cut and highlighted correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending with `...` when cut.
///
/// # Example
///
/// ```rust
/// use artscope::ui::helpers::truncate;
///
/// assert_eq!(truncate("Water Lilies", 8), "Water...");
/// assert_eq!(truncate("Nighthawks", 20), "Nighthawks");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Number of characters `text` occupies on screen.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` with the given character ranges in the match highlight
/// colors.
///
/// Ranges are `(start, end)` with exclusive end and are clamped to the text,
/// so highlights computed before truncation stay safe. On a selected row the
/// highlights are skipped in favour of the selection colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal: String = chars[current_pos..start].iter().collect();
        print!("{normal}");

        if end > start {
            let highlighted: String = chars[start..end].iter().collect();
            print!(
                "{}{}{highlighted}{}{}",
                Theme::fg(&theme.colors.match_highlight_fg),
                Theme::bg(&theme.colors.match_highlight_bg),
                Theme::reset(),
                Theme::fg(&theme.colors.text_normal),
            );
        }
        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Été à Paris", 6), "Été...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn display_len_ignores_byte_width() {
        assert_eq!(display_len("Hokusai 北斎"), 10);
    }
}

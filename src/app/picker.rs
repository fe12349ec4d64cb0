//! Category picker narrowed by fuzzy matching.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// One visible picker entry with the character positions that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Picker input and cursor. The options come from the current category set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPicker {
    pub query: String,
    pub cursor: usize,
}

impl CategoryPicker {
    pub fn reset(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    /// Categories matching the typed text, best match first.
    ///
    /// An empty query keeps every category in its sorted order.
    #[must_use]
    pub fn options(&self, categories: &[String]) -> Vec<PickerOption> {
        if self.query.is_empty() {
            return categories
                .iter()
                .map(|label| PickerOption {
                    label: label.clone(),
                    highlight_ranges: vec![],
                })
                .collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, PickerOption)> = categories
            .iter()
            .filter_map(|label| {
                matcher.fuzzy_indices(label, &self.query).map(|(score, indices)| {
                    (
                        score,
                        PickerOption {
                            label: label.clone(),
                            highlight_ranges: coalesce(&indices),
                        },
                    )
                })
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.label.cmp(&b.1.label)));
        scored.into_iter().map(|(_, option)| option).collect()
    }

    pub fn move_down(&mut self, option_count: usize) {
        if option_count > 0 {
            self.cursor = (self.cursor + 1) % option_count;
        }
    }

    pub fn move_up(&mut self, option_count: usize) {
        if option_count > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(option_count - 1);
        }
    }

    /// Moves the cursor onto the same label after the category set changes.
    ///
    /// A label that disappeared leaves the cursor clamped to the new options.
    pub fn follow(&mut self, previous: &[String], next: &[String]) {
        let highlighted = self.chosen(previous);
        let options = self.options(next);
        self.cursor = highlighted
            .and_then(|label| options.iter().position(|option| option.label == label))
            .unwrap_or_else(|| self.cursor.min(options.len().saturating_sub(1)));
    }

    /// Category under the cursor, if any option is visible.
    #[must_use]
    pub fn chosen(&self, categories: &[String]) -> Option<String> {
        self.options(categories)
            .into_iter()
            .nth(self.cursor)
            .map(|option| option.label)
    }
}

/// Merges consecutive match indices into `(start, end)` ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

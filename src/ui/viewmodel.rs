//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only: titles are already
//! truncated, highlight ranges already resolved to character indices.

use crate::app::picker::PickerOption;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title of the current screen).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints for the active input mode).
    pub footer: FooterInfo,

    /// Search box, shown while typing a query or browsing search results.
    pub search_bar: Option<SearchBarInfo>,

    /// Page indicator and active category.
    pub status_line: StatusLine,

    /// Rows of the artwork table currently in view.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Replaces the table when nothing can be listed.
    pub empty_state: Option<EmptyState>,

    /// Category picker overlay.
    pub picker: Option<PickerInfo>,

    /// Detail screen. When present, list elements are not rendered.
    pub detail: Option<DetailInfo>,
}

/// One row of the artwork table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,
    pub artist: String,
    pub date: String,
    pub is_selected: bool,

    /// Character ranges of `title` matching the active search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Pagination and category summary shown above the table.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// "Page 2 of 3", or "No pages" when the result set is empty.
    pub page: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// True while the query is being typed and has not been submitted.
    pub editing: bool,
}

#[derive(Debug, Clone)]
pub struct PickerInfo {
    pub query: String,
    pub options: Vec<PickerOption>,
    pub cursor: usize,
}

/// Detail screen content for a single artwork.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,

    /// Labelled attribute lines (artist, date, dimensions...).
    pub fields: Vec<(&'static str, String)>,

    /// Comment form fields in display order.
    pub form: Vec<FormFieldInfo>,

    /// Confirmation of the last accepted comment.
    pub notice: Option<String>,

    /// The artwork has not arrived yet.
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    pub is_focused: bool,
}

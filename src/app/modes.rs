//! State machine enums for browsing, loading, and input handling.
//!
//! # State Machine
//!
//! The list screen is always in one of two browse modes:
//! - **Browsing**: the unfiltered listing, paged
//! - **Searching**: results for a non-empty query, paged
//!
//! Every fetch into the list moves [`LoadStatus`] back to `Loading`; it ends
//! in `Succeeded` or `Failed`.
//!
//! [`InputMode`] decides what keys mean: navigation, typing a query, picking
//! a category, or filling in the comment form on the detail screen.

/// Whether the list shows the plain listing or search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseMode {
    #[default]
    Browsing,
    Searching,
}

impl BrowseMode {
    /// Mode implied by a query: empty means browsing.
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Self::Browsing
        } else {
            Self::Searching
        }
    }
}

/// Progress of the most recent list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet (waiting for web access).
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and what the footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands.
    #[default]
    Normal,

    /// Typing into the search bar. Enter submits, Esc cancels.
    SearchTyping,

    /// Narrowing and choosing a category.
    CategoryPicker,

    /// Typing into the focused comment field on the detail screen.
    Comment,
}

/// Where filtering and paging happen.
///
/// `Server` pages through the remote collection and filters each fetched
/// page by category. `Snapshot` loads one large page once and filters and
/// pages it locally, so category filtering covers the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingStrategy {
    #[default]
    Server,
    Snapshot,
}

impl PagingStrategy {
    /// Parses the `paging` configuration value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "server" => Some(Self::Server),
            "snapshot" => Some(Self::Snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_mode_follows_query() {
        assert_eq!(BrowseMode::for_query(""), BrowseMode::Browsing);
        assert_eq!(BrowseMode::for_query("monet"), BrowseMode::Searching);
    }

    #[test]
    fn paging_strategy_parses_case_insensitively() {
        assert_eq!(PagingStrategy::parse("Snapshot"), Some(PagingStrategy::Snapshot));
        assert_eq!(PagingStrategy::parse(" server "), Some(PagingStrategy::Server));
        assert_eq!(PagingStrategy::parse("local"), None);
    }
}

//! Detail screen state and the list context it returns to.

use super::modes::BrowseMode;
use crate::domain::{AcceptedComment, Artwork, CommentForm};

/// Navigation context captured when a detail screen is opened.
///
/// Going back restores it exactly: same mode, query, category, and page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListContext {
    pub mode: BrowseMode,
    pub query: String,
    pub category: String,
    pub page: usize,
}

/// State of an open detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub id: u64,
    /// `None` while the record is loading.
    pub artwork: Option<Artwork>,
    pub return_to: ListContext,
    pub form: CommentForm,
    /// Comments accepted on this screen, newest last.
    pub accepted: Vec<AcceptedComment>,
}

impl DetailState {
    #[must_use]
    pub fn new(id: u64, return_to: ListContext) -> Self {
        Self {
            id,
            artwork: None,
            return_to,
            form: CommentForm::default(),
            accepted: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.artwork.is_none()
    }

    /// Validates and submits the comment form.
    ///
    /// Returns `true` when the comment was accepted.
    pub fn submit_comment(&mut self) -> bool {
        let Some(comment) = self.form.submit(self.id) else {
            return false;
        };

        tracing::debug!(
            artwork_id = comment.artwork_id,
            name = %comment.name,
            email = %comment.email,
            comment_len = comment.comment.len(),
            "comment accepted"
        );
        self.accepted.push(comment);
        true
    }
}

//! Client-side comment form shown on the artwork detail screen.
//!
//! The form validates its four fields locally. Accepted comments are not sent
//! anywhere; the coordinator logs them and resets the form.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Fields of the comment form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommentField {
    Name,
    Email,
    Phone,
    Comment,
}

impl CommentField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Comment];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Comment => "Comment",
        }
    }

    /// Next field in focus order, wrapping after `Comment`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Comment,
            Self::Comment => Self::Name,
        }
    }
}

/// A comment that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedComment {
    pub artwork_id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Editable comment form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    values: BTreeMap<CommentField, String>,
    errors: BTreeMap<CommentField, &'static str>,
    focus: Option<CommentField>,
}

fn is_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

impl CommentForm {
    #[must_use]
    pub fn value(&self, field: CommentField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, field: CommentField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub const fn focus(&self) -> Option<CommentField> {
        self.focus
    }

    /// Starts editing at the first field, or moves to the next one.
    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(CommentField::Name, CommentField::next));
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Appends a character to the focused field. No-op without focus.
    pub fn push(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.values.entry(field).or_default().push(c);
            self.errors.remove(&field);
        }
    }

    /// Removes the last character of the focused field.
    pub fn pop(&mut self) {
        if let Some(field) = self.focus {
            if let Some(value) = self.values.get_mut(&field) {
                value.pop();
            }
        }
    }

    /// Sets a field directly.
    pub fn set(&mut self, field: CommentField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    /// Checks every field and records the first failing rule per field.
    ///
    /// Returns `true` when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for field in CommentField::ALL {
            if let Some(message) = check_field(field, self.value(field)) {
                self.errors.insert(field, message);
            }
        }
        self.errors.is_empty()
    }

    /// Validates and, on success, returns the accepted comment and clears the form.
    pub fn submit(&mut self, artwork_id: u64) -> Option<AcceptedComment> {
        if !self.validate() {
            tracing::debug!(error_count = self.errors.len(), "comment rejected");
            return None;
        }

        let accepted = AcceptedComment {
            artwork_id,
            name: self.value(CommentField::Name).trim().to_string(),
            email: self.value(CommentField::Email).trim().to_string(),
            phone: self.value(CommentField::Phone).trim().to_string(),
            comment: self.value(CommentField::Comment).to_string(),
            submitted_at: chrono::Utc::now(),
        };
        *self = Self::default();
        Some(accepted)
    }
}

/// Blank means missing; format checks see the value exactly as typed.
fn check_field(field: CommentField, raw: &str) -> Option<&'static str> {
    let blank = raw.trim().is_empty();
    match field {
        CommentField::Name if blank => Some("Name is required"),
        CommentField::Email if blank => Some("Email is required"),
        CommentField::Email if !is_email(raw) => Some("Enter a valid email"),
        CommentField::Phone if blank => Some("Phone is required"),
        CommentField::Phone if !raw.chars().all(|c| c.is_ascii_digit()) => {
            Some("Please enter number only")
        }
        CommentField::Comment if blank => Some("Comment is required"),
        _ => None,
    }
}

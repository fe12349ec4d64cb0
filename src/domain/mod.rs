//! Domain layer for the artscope plugin.
//!
//! Core types independent of the Zellij host: the artwork record, result pages,
//! the comment form, and the crate error type.
//!
//! # Organization
//!
//! - [`artwork`]: Artwork record and result sets
//! - [`comment`]: Client-side comment form and validation
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use artscope::domain::{Artwork, ResultSet};
//!
//! let page = ResultSet::new(vec![Artwork::new(1, "The Bedroom")], 120);
//! assert_eq!(page.total(), 120);
//! ```

pub mod artwork;
pub mod comment;
pub mod error;

pub use artwork::{Artwork, ResultSet};
pub use comment::{AcceptedComment, CommentField, CommentForm};
pub use error::{ArtscopeError, Result};

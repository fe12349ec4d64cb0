//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: Display-ready types computed from application state
//! - [`renderer`]: Chooses the list or detail layout
//! - [`components`]: Individual screen parts
//! - [`helpers`]: Cursor, truncation, and highlight utilities
//! - [`theme`]: Color schemes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, HeaderInfo, PickerInfo,
    SearchBarInfo, StatusLine, UIViewModel,
};

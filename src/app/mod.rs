//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key press / fetch result → Event → handle_event → state changes → Actions
//!                                          ↑                           ↓
//!                                          └──── FetchSettled ◄── web request
//! ```
//!
//! - [`actions`]: Side effects requested from the plugin shim
//! - [`handler`]: Event processing and request correlation
//! - [`modes`]: Browse, load, input, and paging mode types
//! - [`detail`]: Detail screen state and the list context it returns to
//! - [`picker`]: Fuzzy-narrowed category picker
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod modes;
pub mod picker;
pub mod state;

pub use actions::Action;
pub use detail::{DetailState, ListContext};
pub use handler::{handle_event, Event};
pub use modes::{BrowseMode, InputMode, LoadStatus, PagingStrategy};
pub use picker::CategoryPicker;
pub use state::{AppState, CatalogSettings};

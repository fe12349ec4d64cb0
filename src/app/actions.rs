//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns a `Vec<Action>`
//! and the plugin runtime executes them in order.

use crate::catalog::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET through the host. The response comes back as
    /// [`Event::FetchSettled`](crate::app::Event::FetchSettled) carrying the
    /// same tag.
    Fetch(FetchRequest),
}

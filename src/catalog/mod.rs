//! Remote collection client.
//!
//! The plugin cannot block on I/O, so the client is split in two halves: the
//! coordinator builds [`FetchRequest`]s from [`Endpoints`], the runtime hands
//! them to the host, and the tagged responses come back as events to be
//! decoded by [`wire`].

pub mod endpoints;
pub mod requests;
pub mod resolution;
pub mod wire;

pub use endpoints::{Endpoints, DEFAULT_API_BASE};
pub use requests::{FetchKind, FetchRequest, FetchResponse, FetchTag, SequenceGuard, Slot};
pub use resolution::{Progress, SearchResolution};
pub use wire::{decode_artwork, decode_result_set, decode_search_page, SearchPage, SearchReference};

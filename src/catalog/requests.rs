//! Tagged requests and the stale-response guard.
//!
//! The host performs HTTP calls asynchronously and hands the response back
//! with the string map that was attached when the call was issued. Every
//! request carries a [`FetchTag`] in that map: which logical slot it belongs
//! to, the slot's sequence number at issue time, what was asked for, and the
//! trace context of the span that issued it.
//!
//! A [`SequenceGuard`] keeps the latest sequence number per slot. A response
//! is applied only if its number is still the latest for its slot, so when the
//! user pages quickly the earlier responses are dropped no matter the order in
//! which they arrive.

use crate::observability::TraceContext;
use std::collections::BTreeMap;

/// Logical destination of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    /// Listing pages and the snapshot.
    List,
    /// Search pages and the per-hit detail resolution.
    Search,
    /// The detail view.
    Detail,
}

impl Slot {
    const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Detail => "detail",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "list" => Some(Self::List),
            "search" => Some(Self::Search),
            "detail" => Some(Self::Detail),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::List => 0,
            Self::Search => 1,
            Self::Detail => 2,
        }
    }
}

/// What a request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// One server page of the listing.
    ListPage { page: usize },
    /// The single large listing page filtered locally.
    Snapshot,
    /// One server page of search hits.
    SearchPage { page: usize },
    /// Resolution of the hit at `index` on the current search page.
    SearchItem { index: usize, id: u64 },
    /// The artwork shown in the detail view.
    Artwork { id: u64 },
}

impl FetchKind {
    /// Slot a request of this kind is guarded under.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::ListPage { .. } | Self::Snapshot => Slot::List,
            Self::SearchPage { .. } | Self::SearchItem { .. } => Slot::Search,
            Self::Artwork { .. } => Slot::Detail,
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::ListPage { .. } => "list_page",
            Self::Snapshot => "snapshot",
            Self::SearchPage { .. } => "search_page",
            Self::SearchItem { .. } => "search_item",
            Self::Artwork { .. } => "artwork",
        }
    }
}

/// Identity of an issued request, round-tripped through the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTag {
    pub seq: u64,
    pub kind: FetchKind,
    pub trace: Option<TraceContext>,
}

const KEY_SLOT: &str = "artscope.slot";
const KEY_SEQ: &str = "artscope.seq";
const KEY_KIND: &str = "artscope.kind";
const KEY_PAGE: &str = "artscope.page";
const KEY_INDEX: &str = "artscope.index";
const KEY_ID: &str = "artscope.id";
const KEY_TRACE_ID: &str = "artscope.trace_id";
const KEY_SPAN_ID: &str = "artscope.span_id";

impl FetchTag {
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.kind.slot()
    }

    /// Encodes the tag as the host's request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KEY_SLOT.to_string(), self.slot().as_str().to_string());
        context.insert(KEY_SEQ.to_string(), self.seq.to_string());
        context.insert(KEY_KIND.to_string(), self.kind.name().to_string());

        match &self.kind {
            FetchKind::ListPage { page } | FetchKind::SearchPage { page } => {
                context.insert(KEY_PAGE.to_string(), page.to_string());
            }
            FetchKind::SearchItem { index, id } => {
                context.insert(KEY_INDEX.to_string(), index.to_string());
                context.insert(KEY_ID.to_string(), id.to_string());
            }
            FetchKind::Artwork { id } => {
                context.insert(KEY_ID.to_string(), id.to_string());
            }
            FetchKind::Snapshot => {}
        }

        if let Some(trace) = &self.trace {
            context.insert(KEY_TRACE_ID.to_string(), trace.trace_id.clone());
            context.insert(KEY_SPAN_ID.to_string(), trace.parent_span_id.clone());
        }

        context
    }

    /// Decodes a tag from a response context. Returns `None` for responses
    /// this plugin did not issue.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let number = |key: &str| context.get(key).and_then(|v| v.parse::<u64>().ok());
        let size = |key: &str| context.get(key).and_then(|v| v.parse::<usize>().ok());

        let slot = Slot::parse(context.get(KEY_SLOT)?)?;
        let seq = number(KEY_SEQ)?;

        let kind = match context.get(KEY_KIND)?.as_str() {
            "list_page" => FetchKind::ListPage { page: size(KEY_PAGE)? },
            "snapshot" => FetchKind::Snapshot,
            "search_page" => FetchKind::SearchPage { page: size(KEY_PAGE)? },
            "search_item" => FetchKind::SearchItem {
                index: size(KEY_INDEX)?,
                id: number(KEY_ID)?,
            },
            "artwork" => FetchKind::Artwork { id: number(KEY_ID)? },
            _ => return None,
        };

        if kind.slot() != slot {
            return None;
        }

        let trace = match (context.get(KEY_TRACE_ID), context.get(KEY_SPAN_ID)) {
            (Some(trace_id), Some(span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: span_id.clone(),
            }),
            _ => None,
        };

        Some(Self { seq, kind, trace })
    }
}

/// An HTTP GET the runtime should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub tag: FetchTag,
}

/// What the host returned for a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub tag: FetchTag,
    pub status: u16,
    pub body: Vec<u8>,
}

/// Latest issued sequence number per [`Slot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceGuard {
    latest: [u64; 3],
}

impl SequenceGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next sequence number for `slot`, superseding everything
    /// issued under it before.
    pub fn issue(&mut self, slot: Slot) -> u64 {
        let latest = &mut self.latest[slot.index()];
        *latest += 1;
        *latest
    }

    /// Invalidates every in-flight request of `slot` without issuing a new one.
    pub fn supersede(&mut self, slot: Slot) {
        self.latest[slot.index()] += 1;
    }

    /// Whether `seq` is still the latest for `slot`.
    #[must_use]
    pub const fn is_current(&self, slot: Slot, seq: u64) -> bool {
        self.latest[slot.index()] == seq
    }

    #[must_use]
    pub const fn latest(&self, slot: Slot) -> u64 {
        self.latest[slot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrips_through_context() {
        let tags = [
            FetchTag { seq: 3, kind: FetchKind::ListPage { page: 2 }, trace: None },
            FetchTag { seq: 1, kind: FetchKind::Snapshot, trace: None },
            FetchTag { seq: 9, kind: FetchKind::SearchPage { page: 4 }, trace: None },
            FetchTag {
                seq: 9,
                kind: FetchKind::SearchItem { index: 7, id: 27992 },
                trace: Some(TraceContext {
                    trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                    parent_span_id: "b7ad6b7169203331".to_string(),
                }),
            },
            FetchTag { seq: 2, kind: FetchKind::Artwork { id: 5 }, trace: None },
        ];

        for tag in tags {
            let context = tag.to_context();
            assert_eq!(FetchTag::from_context(&context), Some(tag));
        }
    }

    #[test]
    fn foreign_context_is_rejected() {
        assert_eq!(FetchTag::from_context(&BTreeMap::new()), None);

        let mut context = FetchTag { seq: 1, kind: FetchKind::Artwork { id: 5 }, trace: None }.to_context();
        context.insert(KEY_SLOT.to_string(), "list".to_string());
        assert_eq!(FetchTag::from_context(&context), None);
    }

    #[test]
    fn guard_tracks_latest_per_slot() {
        let mut guard = SequenceGuard::new();
        let first = guard.issue(Slot::List);
        let second = guard.issue(Slot::List);
        let detail = guard.issue(Slot::Detail);

        assert!(!guard.is_current(Slot::List, first));
        assert!(guard.is_current(Slot::List, second));
        assert!(guard.is_current(Slot::Detail, detail));

        guard.supersede(Slot::List);
        assert!(!guard.is_current(Slot::List, second));
        assert!(guard.is_current(Slot::Detail, detail));
    }
}

//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes. Key-level events
//! (typing, picking, paging keys) resolve into the coordinator events
//! [`Event::SubmitSearch`], [`Event::SelectCategory`], [`Event::ChangePage`]
//! and [`Event::OpenDetail`]; host responses arrive as
//! [`Event::FetchSettled`]. Every call returns whether the UI should re-render
//! and the side effects to run.
//!
//! # Example
//!
//! ```rust
//! use artscope::app::{handle_event, AppState, CatalogSettings, Event};
//! use artscope::ui::Theme;
//!
//! let mut state = AppState::new(CatalogSettings::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), artscope::ArtscopeError>(())
//! ```

use super::modes::{BrowseMode, InputMode, LoadStatus, PagingStrategy};
use crate::app::{Action, AppState};
use crate::catalog::{decode_artwork, decode_result_set, decode_search_page, FetchKind, FetchResponse, Progress, Slot};
use crate::domain::error::Result;
use crate::gallery::{clamp_page, next_page, previous_page};

/// Events from user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (list or category picker).
    KeyDown,
    /// Moves the cursor up (list or category picker).
    KeyUp,
    NextPage,
    PreviousPage,
    /// Hides the plugin pane.
    CloseFocus,
    /// Enter: submit the query, choose the category, submit the comment, or
    /// open the selected artwork, depending on the input mode.
    Confirm,
    /// Esc: leave the current input mode, go back from detail, or clear an
    /// active search.
    Escape,
    Char(char),
    Backspace,
    /// Starts typing a new query.
    SearchMode,
    /// Opens the category picker.
    CategoryMode,
    /// Clears the category filter.
    ClearCategory,
    /// Tab on the detail screen: focus the next comment field.
    NextField,
    /// Re-fetches the list for the current parameters.
    Reload,

    /// Applies a query. Empty text returns to browsing. Resets to page 1.
    SubmitSearch(String),
    /// Applies a category filter. Empty text clears it. Resets to page 1.
    SelectCategory(String),
    /// Moves to a page, clamped into range. Keeps query and category.
    ChangePage(usize),
    /// Opens the detail screen for an artwork.
    OpenDetail(u64),
    /// Leaves the detail screen, restoring the list context.
    Back,

    /// A response from the host for a request issued by this plugin.
    FetchSettled(FetchResponse),

    /// Outcome of the web access permission request.
    PermissionsResult { granted: bool },
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for fallible transitions.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::KeyDown => {
            match (state.input_mode, state.detail.is_some()) {
                (InputMode::CategoryPicker, _) => {
                    let count = state.picker.options(&state.categories).len();
                    state.picker.move_down(count);
                }
                (_, false) => state.move_selection_down(),
                (_, true) => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            match (state.input_mode, state.detail.is_some()) {
                (InputMode::CategoryPicker, _) => {
                    let count = state.picker.options(&state.categories).len();
                    state.picker.move_up(count);
                }
                (_, false) => state.move_selection_up(),
                (_, true) => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::NextPage => match next_page(state.page, state.page_total) {
            Some(page) if state.detail.is_none() => handle_event(state, &Event::ChangePage(page)),
            _ => Ok((false, vec![])),
        },
        Event::PreviousPage => match previous_page(state.page) {
            Some(page) if state.detail.is_none() => handle_event(state, &Event::ChangePage(page)),
            _ => Ok((false, vec![])),
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Confirm => match state.input_mode {
            InputMode::SearchTyping => {
                let query = std::mem::take(&mut state.search_draft);
                handle_event(state, &Event::SubmitSearch(query))
            }
            InputMode::CategoryPicker => match state.picker.chosen(&state.categories) {
                Some(category) => handle_event(state, &Event::SelectCategory(category)),
                None => {
                    tracing::debug!(query = %state.picker.query, "no category matches");
                    Ok((false, vec![]))
                }
            },
            InputMode::Comment => {
                if let Some(detail) = state.detail.as_mut() {
                    if detail.submit_comment() {
                        state.input_mode = InputMode::Normal;
                    }
                }
                Ok((true, vec![]))
            }
            InputMode::Normal if state.detail.is_none() => match state.selected_artwork().map(|art| art.id) {
                Some(id) => handle_event(state, &Event::OpenDetail(id)),
                None => Ok((false, vec![])),
            },
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::SearchTyping => {
                state.search_draft.clear();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::CategoryPicker => {
                state.picker.reset();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Comment => {
                if let Some(detail) = state.detail.as_mut() {
                    detail.form.blur();
                }
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal if state.detail.is_some() => handle_event(state, &Event::Back),
            InputMode::Normal if state.mode == BrowseMode::Searching => {
                handle_event(state, &Event::SubmitSearch(String::new()))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Char(c) => {
            match state.input_mode {
                InputMode::SearchTyping => state.search_draft.push(*c),
                InputMode::CategoryPicker => state.picker.push(*c),
                InputMode::Comment => {
                    if let Some(detail) = state.detail.as_mut() {
                        detail.form.push(*c);
                    }
                }
                InputMode::Normal => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            match state.input_mode {
                InputMode::SearchTyping => {
                    state.search_draft.pop();
                }
                InputMode::CategoryPicker => state.picker.pop(),
                InputMode::Comment => {
                    if let Some(detail) = state.detail.as_mut() {
                        detail.form.pop();
                    }
                }
                InputMode::Normal => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            state.search_draft.clone_from(&state.query);
            state.input_mode = InputMode::SearchTyping;
            Ok((true, vec![]))
        }
        Event::CategoryMode => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            state.picker.reset();
            state.input_mode = InputMode::CategoryPicker;
            Ok((true, vec![]))
        }
        Event::ClearCategory => {
            if state.detail.is_some() || state.category.is_empty() {
                return Ok((false, vec![]));
            }
            handle_event(state, &Event::SelectCategory(String::new()))
        }
        Event::NextField => {
            let Some(detail) = state.detail.as_mut().filter(|d| !d.is_loading()) else {
                return Ok((false, vec![]));
            };
            detail.form.focus_next();
            state.input_mode = InputMode::Comment;
            Ok((true, vec![]))
        }
        Event::Reload => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::Fetch(state.request_results())]))
        }
        Event::SubmitSearch(text) => {
            let query = text.trim().to_string();
            tracing::debug!(query = %query, "search submitted");

            state.input_mode = InputMode::Normal;
            state.search_draft.clear();
            state.mode = BrowseMode::for_query(&query);
            state.query = query;
            state.page = 1;
            state.selected_index = 0;

            Ok((true, refresh_results(state, true)))
        }
        Event::SelectCategory(category) => {
            tracing::debug!(category = %category, "category selected");

            state.input_mode = InputMode::Normal;
            state.picker.reset();
            let page_changed = state.page != 1;
            state.category.clone_from(category);
            state.page = 1;
            state.selected_index = 0;

            Ok((true, refresh_results(state, page_changed)))
        }
        Event::ChangePage(requested) => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            let target = if state.page_total == 0 {
                (*requested).max(1)
            } else {
                clamp_page(*requested, state.page_total)
            };
            if target == state.page && state.status == LoadStatus::Succeeded {
                tracing::debug!(page = target, "already on page");
                return Ok((false, vec![]));
            }

            tracing::debug!(from = state.page, to = target, "changing page");
            state.page = target;
            state.selected_index = 0;
            Ok((true, refresh_results(state, true)))
        }
        Event::OpenDetail(id) => {
            let request = state.open_detail(*id);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::Back => {
            if state.detail.is_none() {
                return Ok((false, vec![]));
            }
            let changed = state.close_detail();
            Ok((true, refresh_results(state, changed)))
        }
        Event::FetchSettled(response) => handle_fetch_settled(state, response),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("web access denied, the collection cannot be loaded");
                return Ok((false, vec![]));
            }
            if state.status != LoadStatus::Idle {
                return Ok((false, vec![]));
            }
            tracing::debug!("web access granted, loading first page");
            Ok((true, vec![Action::Fetch(state.request_results())]))
        }
    }
}

/// Brings the list in line with its parameters after they changed.
///
/// `source_changed` says whether the server-side source (page or query)
/// moved. Snapshot paging never re-fetches a loaded snapshot.
fn refresh_results(state: &mut AppState, source_changed: bool) -> Vec<Action> {
    let source_changed = source_changed && state.settings.paging == PagingStrategy::Server;

    match state.status {
        LoadStatus::Succeeded if !source_changed => {
            state.rebuild_view();
            vec![]
        }
        LoadStatus::Loading if !source_changed => vec![],
        _ => vec![Action::Fetch(state.request_results())],
    }
}

fn handle_fetch_settled(state: &mut AppState, response: &FetchResponse) -> Result<(bool, Vec<Action>)> {
    let tag = &response.tag;
    let span = tracing::debug_span!(
        "fetch_settled",
        kind = ?tag.kind,
        seq = tag.seq,
        status = response.status,
        body_len = response.body.len()
    );
    if let Some(trace) = &tag.trace {
        trace.link_to(&span);
    }
    let _guard = span.entered();

    if !state.guard.is_current(tag.slot(), tag.seq) {
        tracing::debug!(latest = state.guard.latest(tag.slot()), "discarding stale response");
        return Ok((false, vec![]));
    }

    match &tag.kind {
        FetchKind::ListPage { .. } | FetchKind::Snapshot => {
            match decode_result_set(response.status, &response.body) {
                Ok(results) => state.apply_results(results),
                Err(e) => state.fail_results(&e),
            }
            Ok((true, vec![]))
        }
        FetchKind::SearchPage { page } => match decode_search_page(response.status, &response.body) {
            Ok(search) => {
                let requests = state.begin_search_resolution(tag.seq, *page, search);
                Ok((true, requests.into_iter().map(Action::Fetch).collect()))
            }
            Err(e) => {
                state.fail_results(&e);
                Ok((true, vec![]))
            }
        },
        FetchKind::SearchItem { index, id } => {
            let Some(pending) = state.pending_search.as_mut().filter(|p| p.seq() == tag.seq) else {
                tracing::debug!("no search resolution waiting for this item");
                return Ok((false, vec![]));
            };

            match decode_artwork(*id, response.status, &response.body) {
                Ok(artwork) => match pending.fill(*index, artwork) {
                    Progress::Pending { remaining } => {
                        tracing::debug!(remaining, "search item resolved");
                        Ok((false, vec![]))
                    }
                    Progress::Complete(results) => {
                        state.pending_search = None;
                        state.apply_results(results);
                        Ok((true, vec![]))
                    }
                },
                Err(e) => {
                    // One failed item fails the page; later items become stale.
                    state.guard.supersede(Slot::Search);
                    state.fail_results(&e);
                    Ok((true, vec![]))
                }
            }
        }
        FetchKind::Artwork { id } => {
            let Some(detail) = state.detail.as_mut().filter(|d| d.id == *id) else {
                return Ok((false, vec![]));
            };

            match decode_artwork(*id, response.status, &response.body) {
                Ok(artwork) => {
                    detail.artwork = Some(artwork);
                    Ok((true, vec![]))
                }
                Err(e) => {
                    tracing::debug!(error = %e, artwork_id = id, "detail unavailable, returning to list");
                    let changed = state.close_detail();
                    Ok((true, refresh_results(state, changed)))
                }
            }
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::NextPage => "NextPage",
        Event::PreviousPage => "PreviousPage",
        Event::CloseFocus => "CloseFocus",
        Event::Confirm => "Confirm",
        Event::Escape => "Escape",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SearchMode => "SearchMode",
        Event::CategoryMode => "CategoryMode",
        Event::ClearCategory => "ClearCategory",
        Event::NextField => "NextField",
        Event::Reload => "Reload",
        Event::SubmitSearch(_) => "SubmitSearch",
        Event::SelectCategory(_) => "SelectCategory",
        Event::ChangePage(_) => "ChangePage",
        Event::OpenDetail(_) => "OpenDetail",
        Event::Back => "Back",
        Event::FetchSettled(_) => "FetchSettled",
        Event::PermissionsResult { .. } => "PermissionsResult",
    }
}

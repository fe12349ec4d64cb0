//! End-to-end flows through `handle_event`, with host responses simulated by
//! settling the issued requests by hand.

use artscope::app::modes::{BrowseMode, InputMode, LoadStatus, PagingStrategy};
use artscope::app::CatalogSettings;
use artscope::catalog::{FetchKind, FetchRequest, FetchResponse, FetchTag};
use artscope::{handle_event, Action, AppState, Event, Theme};
use serde_json::{json, Value};

fn new_state(paging: PagingStrategy) -> AppState {
    AppState::new(
        CatalogSettings {
            paging,
            ..CatalogSettings::default()
        },
        Theme::default(),
    )
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<FetchRequest>) {
    let (render, actions) = handle_event(state, &event).unwrap();
    let requests = actions
        .into_iter()
        .filter_map(|action| match action {
            Action::Fetch(request) => Some(request),
            Action::CloseFocus => None,
        })
        .collect();
    (render, requests)
}

/// Delivers a response the way the host would, through the request context.
fn settle(state: &mut AppState, request: &FetchRequest, status: u16, body: &Value) -> Vec<FetchRequest> {
    let tag = FetchTag::from_context(&request.tag.to_context()).unwrap();
    let response = FetchResponse {
        tag,
        status,
        body: body.to_string().into_bytes(),
    };
    send(state, Event::FetchSettled(response)).1
}

fn artwork_json(id: u64) -> Value {
    let category = if id % 2 == 0 { "Even" } else { "Odd" };
    json!({
        "id": id,
        "title": format!("Work {id}"),
        "image_id": format!("img-{id}"),
        "artist_display": "Unknown artist",
        "date_display": "1890",
        "main_reference_number": format!("1900.{id}"),
        "dimensions": "10 x 10 cm",
        "category_titles": [category],
    })
}

fn list_body(ids: std::ops::RangeInclusive<u64>, total: usize) -> Value {
    json!({
        "pagination": { "total": total },
        "data": ids.map(artwork_json).collect::<Vec<_>>(),
    })
}

fn search_body(ids: &[u64], total: usize) -> Value {
    json!({
        "pagination": { "total": total },
        "data": ids
            .iter()
            .map(|id| json!({
                "id": id,
                "title": format!("Work {id}"),
                "api_link": format!("https://api.artic.edu/api/v1/artworks/{id}"),
            }))
            .collect::<Vec<_>>(),
    })
}

fn detail_body(id: u64) -> Value {
    json!({ "data": artwork_json(id) })
}

fn visible_ids(state: &AppState) -> Vec<u64> {
    state.visible.iter().map(|art| art.id).collect()
}

/// Grants web access and settles the first listing page (25 artworks total).
fn loaded_state() -> AppState {
    let mut state = new_state(PagingStrategy::Server);
    let (_, requests) = send(&mut state, Event::PermissionsResult { granted: true });
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 1 });
    settle(&mut state, &requests[0], 200, &list_body(1..=10, 25));
    state
}

#[test]
fn nothing_loads_before_web_access() {
    let mut state = new_state(PagingStrategy::Server);
    let (render, requests) = send(&mut state, Event::PermissionsResult { granted: false });
    assert!(!render);
    assert!(requests.is_empty());
    assert_eq!(state.status, LoadStatus::Idle);

    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.empty_state.unwrap().message, "Waiting for web access");
}

#[test]
fn first_page_lists_ten_of_twenty_five() {
    let state = loaded_state();
    assert_eq!(state.status, LoadStatus::Succeeded);
    assert_eq!(visible_ids(&state), (1..=10).collect::<Vec<_>>());
    assert_eq!(state.page_total, 3);
    assert_eq!(state.categories, vec!["Even", "Odd"]);

    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.status_line.page, "Page 1 of 3");
    assert_eq!(vm.display_items[0].title, "Work 1");
    assert!(vm.display_items[0].is_selected);
}

#[test]
fn second_page_keeps_page_count() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::NextPage);
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 2 });
    assert!(requests[0].url.contains("page=2&limit=10"));

    settle(&mut state, &requests[0], 200, &list_body(11..=20, 25));
    assert_eq!(state.page, 2);
    assert_eq!(state.visible.len(), 10);
    assert_eq!(state.page_total, 3);
}

#[test]
fn paging_stays_in_range() {
    let mut state = loaded_state();
    let (render, requests) = send(&mut state, Event::PreviousPage);
    assert!(!render);
    assert!(requests.is_empty());

    let (_, requests) = send(&mut state, Event::ChangePage(99));
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 3 });
    settle(&mut state, &requests[0], 200, &list_body(21..=25, 25));
    assert_eq!(state.visible.len(), 5);

    let (render, requests) = send(&mut state, Event::NextPage);
    assert!(!render);
    assert!(requests.is_empty());
}

#[test]
fn new_search_resets_to_first_page() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::ChangePage(2));
    settle(&mut state, &requests[0], 200, &list_body(11..=20, 25));

    send(&mut state, Event::SearchMode);
    for c in "water lilies".chars() {
        send(&mut state, Event::Char(c));
    }
    let (_, requests) = send(&mut state, Event::Confirm);

    assert_eq!(state.page, 1);
    assert_eq!(state.mode, BrowseMode::Searching);
    assert_eq!(state.query, "water lilies");
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(requests[0].tag.kind, FetchKind::SearchPage { page: 1 });
    assert!(requests[0].url.contains("q=water%20lilies&page=1"));
}

#[test]
fn new_category_resets_to_first_page() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::ChangePage(2));
    settle(&mut state, &requests[0], 200, &list_body(11..=20, 25));

    let (_, requests) = send(&mut state, Event::SelectCategory("Odd".to_string()));
    assert_eq!(state.page, 1);
    assert_eq!(state.category, "Odd");
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 1 });

    settle(&mut state, &requests[0], 200, &list_body(1..=10, 25));
    assert_eq!(visible_ids(&state), vec![1, 3, 5, 7, 9]);
}

#[test]
fn category_on_first_page_filters_without_refetch() {
    let mut state = loaded_state();

    send(&mut state, Event::CategoryMode);
    send(&mut state, Event::Char('e'));
    send(&mut state, Event::Char('v'));
    let (render, requests) = send(&mut state, Event::Confirm);

    assert!(render);
    assert!(requests.is_empty());
    assert_eq!(state.category, "Even");
    assert_eq!(visible_ids(&state), vec![2, 4, 6, 8, 10]);

    let (_, requests) = send(&mut state, Event::ClearCategory);
    assert!(requests.is_empty());
    assert_eq!(state.visible.len(), 10);
}

#[test]
fn single_hit_search_resolves_to_one_artwork() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::SubmitSearch("Nighthawks".to_string()));
    let items = settle(&mut state, &requests[0], 200, &search_body(&[111_628], 1));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].tag.kind, FetchKind::SearchItem { index: 0, id: 111_628 });
    assert!(items[0].url.starts_with("https://api.artic.edu/api/v1/artworks/111628?fields="));
    assert_eq!(state.status, LoadStatus::Loading);

    settle(&mut state, &items[0], 200, &detail_body(111_628));
    assert_eq!(state.status, LoadStatus::Succeeded);
    assert_eq!(visible_ids(&state), vec![111_628]);
    assert_eq!(state.page_total, 1);
}

#[test]
fn search_hits_keep_reference_order() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::SubmitSearch("work".to_string()));
    let items = settle(&mut state, &requests[0], 200, &search_body(&[7, 3, 5], 3));

    settle(&mut state, &items[2], 200, &detail_body(5));
    settle(&mut state, &items[0], 200, &detail_body(7));
    assert_eq!(state.status, LoadStatus::Loading);
    settle(&mut state, &items[1], 200, &detail_body(3));

    assert_eq!(visible_ids(&state), vec![7, 3, 5]);
}

#[test]
fn empty_search_shows_no_results() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::SubmitSearch("zzzz".to_string()));
    let items = settle(&mut state, &requests[0], 200, &search_body(&[], 0));

    assert!(items.is_empty());
    assert_eq!(state.status, LoadStatus::Succeeded);
    assert_eq!(state.page_total, 0);
    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.empty_state.unwrap().message, "No artworks found");
    assert_eq!(vm.status_line.page, "No pages");
}

#[test]
fn failed_search_item_fails_the_page_and_drops_the_rest() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::SubmitSearch("work".to_string()));
    let items = settle(&mut state, &requests[0], 200, &search_body(&[1, 2, 3], 3));

    settle(&mut state, &items[0], 200, &detail_body(1));
    let failing = FetchResponse {
        tag: items[1].tag.clone(),
        status: 502,
        body: b"Bad Gateway".to_vec(),
    };
    send(&mut state, Event::FetchSettled(failing));
    assert_eq!(state.status, LoadStatus::Failed);
    assert!(state.visible.is_empty());

    let (render, _) = handle_event(
        &mut state,
        &Event::FetchSettled(FetchResponse {
            tag: items[2].tag.clone(),
            status: 200,
            body: detail_body(3).to_string().into_bytes(),
        }),
    )
    .unwrap();
    assert!(!render);
    assert_eq!(state.status, LoadStatus::Failed);
    assert!(state.visible.is_empty());
}

#[test]
fn out_of_order_pages_show_the_latest_request() {
    let mut state = loaded_state();
    let (_, page_two) = send(&mut state, Event::ChangePage(2));
    let (_, page_three) = send(&mut state, Event::ChangePage(3));

    settle(&mut state, &page_three[0], 200, &list_body(21..=25, 25));
    settle(&mut state, &page_two[0], 200, &list_body(11..=20, 25));

    assert_eq!(state.page, 3);
    assert_eq!(visible_ids(&state), vec![21, 22, 23, 24, 25]);
}

#[test]
fn late_listing_never_overwrites_search_results() {
    let mut state = loaded_state();
    let (_, listing) = send(&mut state, Event::ChangePage(2));
    let (_, search) = send(&mut state, Event::SubmitSearch("work".to_string()));

    let items = settle(&mut state, &search[0], 200, &search_body(&[4], 1));
    settle(&mut state, &items[0], 200, &detail_body(4));
    settle(&mut state, &listing[0], 200, &list_body(11..=20, 25));

    assert_eq!(visible_ids(&state), vec![4]);
}

#[test]
fn list_failure_shows_no_results() {
    let mut state = new_state(PagingStrategy::Server);
    let (_, requests) = send(&mut state, Event::PermissionsResult { granted: true });
    settle(&mut state, &requests[0], 200, &json!({ "data": [] }));

    assert_eq!(state.status, LoadStatus::Failed);
    assert_eq!(state.page_total, 0);
    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.empty_state.unwrap().message, "No artworks found");

    let (_, requests) = send(&mut state, Event::Reload);
    settle(&mut state, &requests[0], 200, &list_body(1..=10, 25));
    assert_eq!(state.status, LoadStatus::Succeeded);
}

#[test]
fn failed_page_can_be_retried_by_paging() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::ChangePage(3));
    settle(&mut state, &requests[0], 503, &json!("Service Unavailable"));

    assert_eq!(state.status, LoadStatus::Failed);
    assert_eq!(state.page, 3);
    assert_eq!(state.page_total, 3);

    let (_, requests) = send(&mut state, Event::PreviousPage);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 2 });
    settle(&mut state, &requests[0], 200, &list_body(11..=20, 25));
    assert_eq!(state.status, LoadStatus::Succeeded);
    assert_eq!(visible_ids(&state), (11..=20).collect::<Vec<_>>());
}

#[test]
fn first_listing_failure_still_pages_forward_on_request() {
    let mut state = new_state(PagingStrategy::Server);
    let (_, requests) = send(&mut state, Event::PermissionsResult { granted: true });
    settle(&mut state, &requests[0], 500, &json!("Internal Server Error"));
    assert_eq!(state.page_total, 0);

    let (_, requests) = send(&mut state, Event::ChangePage(2));
    assert_eq!(requests[0].tag.kind, FetchKind::ListPage { page: 2 });
}

#[test]
fn missing_artwork_returns_to_the_list() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::OpenDetail(999_999));
    assert_eq!(requests[0].tag.kind, FetchKind::Artwork { id: 999_999 });
    assert!(state.detail.is_some());

    let not_found = json!({ "status": 404, "error": "Not found", "detail": "Artwork not found" });
    let follow_up = settle(&mut state, &requests[0], 404, &not_found);

    assert!(follow_up.is_empty());
    assert!(state.detail.is_none());
    assert_eq!(state.page, 1);
    assert_eq!(state.visible.len(), 10);
}

#[test]
fn back_restores_the_list_context() {
    let mut state = loaded_state();
    send(&mut state, Event::SelectCategory("Odd".to_string()));
    let (_, requests) = send(&mut state, Event::ChangePage(2));
    settle(&mut state, &requests[0], 200, &list_body(11..=20, 25));
    assert_eq!(visible_ids(&state), vec![11, 13, 15, 17, 19]);

    send(&mut state, Event::KeyDown);
    let (_, requests) = send(&mut state, Event::Confirm);
    assert_eq!(requests[0].tag.kind, FetchKind::Artwork { id: 13 });
    settle(&mut state, &requests[0], 200, &detail_body(13));

    let vm = state.compute_viewmodel(30, 120);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.title, "Work 13");
    assert!(detail
        .fields
        .iter()
        .any(|(label, value)| *label == "Image" && value.contains("img-13/full/843,/0/default.jpg")));

    let (render, requests) = send(&mut state, Event::Escape);
    assert!(render);
    assert!(requests.is_empty());
    assert!(state.detail.is_none());
    assert_eq!(state.category, "Odd");
    assert_eq!(state.page, 2);
    assert_eq!(state.mode, BrowseMode::Browsing);
    assert_eq!(visible_ids(&state), vec![11, 13, 15, 17, 19]);
}

#[test]
fn late_detail_after_back_is_ignored() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::OpenDetail(3));
    send(&mut state, Event::Back);

    let follow_up = settle(&mut state, &requests[0], 200, &detail_body(3));
    assert!(follow_up.is_empty());
    assert!(state.detail.is_none());
}

#[test]
fn snapshot_search_without_matches_is_empty() {
    let mut state = new_state(PagingStrategy::Snapshot);
    let (_, requests) = send(&mut state, Event::PermissionsResult { granted: true });
    assert_eq!(requests[0].tag.kind, FetchKind::Snapshot);
    assert!(requests[0].url.contains("page=1&limit=100"));
    settle(&mut state, &requests[0], 200, &list_body(1..=30, 120));
    assert_eq!(state.page_total, 3);

    let (_, requests) = send(&mut state, Event::SubmitSearch("no such title".to_string()));
    assert!(requests.is_empty());
    assert!(state.visible.is_empty());
    assert_eq!(state.page_total, 0);

    let (_, requests) = send(&mut state, Event::SubmitSearch("work 2".to_string()));
    assert!(requests.is_empty());
    assert_eq!(state.page_total, 2);
    let mut expected = vec![2];
    expected.extend(20..=28);
    assert_eq!(visible_ids(&state), expected);
}

#[test]
fn snapshot_category_covers_the_whole_snapshot() {
    let mut state = new_state(PagingStrategy::Snapshot);
    let (_, requests) = send(&mut state, Event::PermissionsResult { granted: true });
    settle(&mut state, &requests[0], 200, &list_body(1..=30, 120));

    send(&mut state, Event::SelectCategory("Even".to_string()));
    assert_eq!(state.page_total, 2);
    let (_, requests) = send(&mut state, Event::NextPage);
    assert!(requests.is_empty());
    assert_eq!(visible_ids(&state), vec![22, 24, 26, 28, 30]);
}

#[test]
fn comment_form_validates_then_accepts() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::OpenDetail(4));
    settle(&mut state, &requests[0], 200, &detail_body(4));

    let type_text = |state: &mut AppState, text: &str| {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    };

    send(&mut state, Event::NextField);
    assert_eq!(state.input_mode, InputMode::Comment);
    type_text(&mut state, "Ada");
    send(&mut state, Event::NextField);
    type_text(&mut state, "ada@example");
    send(&mut state, Event::NextField);
    type_text(&mut state, "12a");
    send(&mut state, Event::NextField);
    type_text(&mut state, "Lovely brushwork");

    send(&mut state, Event::Confirm);
    assert_eq!(state.input_mode, InputMode::Comment);
    let vm = state.compute_viewmodel(30, 120);
    let errors: Vec<_> = vm.detail.unwrap().form.iter().filter_map(|f| f.error).collect();
    assert_eq!(errors, vec!["Enter a valid email", "Please enter number only"]);

    send(&mut state, Event::NextField);
    send(&mut state, Event::NextField);
    type_text(&mut state, ".com");
    send(&mut state, Event::NextField);
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Confirm);

    assert_eq!(state.input_mode, InputMode::Normal);
    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.accepted.len(), 1);
    assert_eq!(detail.accepted[0].email, "ada@example.com");
    assert_eq!(detail.accepted[0].phone, "12");

    let notice = state.compute_viewmodel(30, 120).detail.unwrap().notice.unwrap();
    assert!(notice.starts_with("Thanks Ada"));
}

#[test]
fn keys_in_detail_do_not_touch_the_list() {
    let mut state = loaded_state();
    let (_, requests) = send(&mut state, Event::OpenDetail(2));
    settle(&mut state, &requests[0], 200, &detail_body(2));

    let (_, requests) = send(&mut state, Event::NextPage);
    assert!(requests.is_empty());
    let (render, _) = send(&mut state, Event::SearchMode);
    assert!(!render);
    assert_eq!(state.page, 1);
    assert_eq!(state.input_mode, InputMode::Normal);
}

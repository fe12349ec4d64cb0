//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the screens show: the list
//! view parameters (mode, query, category, page), the working collection as
//! last fetched, the derived category set, the open detail screen, and the
//! bookkeeping for in-flight requests. It is owned by the plugin shim and
//! mutated only through [`handle_event`](crate::app::handle_event).
//!
//! # Working collection
//!
//! What the working collection is depends on the [`PagingStrategy`]:
//!
//! - `Server`: the page most recently fetched (listing or resolved search
//!   hits). The remote total drives the page count and the category filter
//!   applies to the fetched page.
//! - `Snapshot`: one large listing page fetched once. Title and category
//!   filters run over the whole snapshot and the filtered length drives the
//!   page count.

use super::detail::{DetailState, ListContext};
use super::modes::{BrowseMode, InputMode, LoadStatus, PagingStrategy};
use super::picker::CategoryPicker;
use crate::catalog::{
    Endpoints, FetchKind, FetchRequest, FetchTag, SearchPage, SearchResolution, SequenceGuard, Slot,
};
use crate::domain::{ArtscopeError, Artwork, CommentField, ResultSet};
use crate::gallery::{apply_filters, derive_categories, match_range, page_count, page_slice, PAGE_SIZE};
use crate::observability::TraceContext;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, HeaderInfo, PickerInfo,
    SearchBarInfo, StatusLine, UIViewModel,
};

/// Default IIIF image service root.
pub const DEFAULT_IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// Default and maximum size of the snapshot page.
pub const MAX_SNAPSHOT_SIZE: usize = 100;

/// Where the collection lives and how it is paged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub endpoints: Endpoints,
    pub iiif_base: String,
    pub paging: PagingStrategy,
    pub snapshot_size: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            iiif_base: DEFAULT_IIIF_BASE.to_string(),
            paging: PagingStrategy::default(),
            snapshot_size: MAX_SNAPSHOT_SIZE,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: CatalogSettings,

    /// Color scheme for rendering.
    pub theme: Theme,

    pub input_mode: InputMode,

    pub mode: BrowseMode,

    /// Active query. Empty while browsing.
    pub query: String,

    /// Selected category label. Empty means no category filter.
    pub category: String,

    /// One-based page of the list view.
    pub page: usize,

    pub status: LoadStatus,

    /// Working collection as last fetched.
    pub results: ResultSet,

    /// Artworks on the current page after filtering.
    pub visible: Vec<Artwork>,

    /// Page count for the current view.
    pub page_total: usize,

    /// Categories derived from the working collection, sorted.
    pub categories: Vec<String>,

    /// Zero-based selection within `visible`.
    pub selected_index: usize,

    /// Query being typed; only submitted on Enter.
    pub search_draft: String,

    pub picker: CategoryPicker,

    /// Open detail screen, if any.
    pub detail: Option<DetailState>,

    pub guard: SequenceGuard,

    /// Barrier for the search page currently being resolved.
    pub pending_search: Option<SearchResolution>,
}

impl AppState {
    /// Creates an idle state on page 1 with nothing fetched.
    ///
    /// # Parameters
    ///
    /// * `settings` - API endpoints, image root and paging strategy
    /// * `theme` - Color scheme for UI rendering
    ///
    /// # Example
    ///
    /// ```rust
    /// use artscope::app::{AppState, CatalogSettings, LoadStatus};
    /// use artscope::Theme;
    ///
    /// let state = AppState::new(CatalogSettings::default(), Theme::default());
    /// assert_eq!(state.page, 1);
    /// assert_eq!(state.status, LoadStatus::Idle);
    /// ```
    #[must_use]
    pub fn new(settings: CatalogSettings, theme: Theme) -> Self {
        Self {
            settings,
            theme,
            input_mode: InputMode::Normal,
            mode: BrowseMode::Browsing,
            query: String::new(),
            category: String::new(),
            page: 1,
            status: LoadStatus::Idle,
            results: ResultSet::default(),
            visible: vec![],
            page_total: 0,
            categories: vec![],
            selected_index: 0,
            search_draft: String::new(),
            picker: CategoryPicker::default(),
            detail: None,
            guard: SequenceGuard::new(),
            pending_search: None,
        }
    }

    /// Snapshot of the list parameters, carried into a detail screen.
    #[must_use]
    pub fn list_context(&self) -> ListContext {
        ListContext {
            mode: self.mode,
            query: self.query.clone(),
            category: self.category.clone(),
            page: self.page,
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.visible.get(self.selected_index)
    }

    /// Recomputes `visible` and `page_total` from the working collection.
    pub fn rebuild_view(&mut self) {
        let _span = tracing::debug_span!(
            "rebuild_view",
            paging = ?self.settings.paging,
            page = self.page,
            working = self.results.len()
        )
        .entered();

        match self.settings.paging {
            PagingStrategy::Server => {
                self.visible = apply_filters(self.results.artworks(), "", &self.category);
                self.page_total = page_count(self.results.total(), PAGE_SIZE);
            }
            PagingStrategy::Snapshot => {
                let filtered = apply_filters(self.results.artworks(), &self.query, &self.category);
                self.page_total = page_count(filtered.len(), PAGE_SIZE);
                self.visible = page_slice(&filtered, self.page, PAGE_SIZE).to_vec();
            }
        }

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }
    }

    /// Installs a freshly fetched working collection.
    ///
    /// Re-derives the category set, marks the list `Succeeded` and rebuilds
    /// the visible page. An open category picker keeps its cursor on the
    /// same label.
    pub fn apply_results(&mut self, results: ResultSet) {
        tracing::debug!(
            count = results.len(),
            total = results.total(),
            "working collection replaced"
        );
        let categories = derive_categories(results.artworks());
        if self.input_mode == InputMode::CategoryPicker {
            self.picker.follow(&self.categories, &categories);
        }
        self.categories = categories;
        self.results = results;
        self.status = LoadStatus::Succeeded;
        self.rebuild_view();
    }

    /// Records a failed list fetch. The list shows the generic empty state.
    ///
    /// `page_total` keeps its last known value so paging can retry.
    pub fn fail_results(&mut self, error: &ArtscopeError) {
        tracing::debug!(error = %error, "list fetch failed");
        self.status = LoadStatus::Failed;
        self.pending_search = None;
        self.results = ResultSet::default();
        if self.input_mode == InputMode::CategoryPicker {
            self.picker.follow(&self.categories, &[]);
        }
        self.categories.clear();
        self.visible.clear();
        self.selected_index = 0;
    }

    /// Builds the request for the current list parameters and marks the list
    /// as loading.
    ///
    /// Issuing under one of the list slots supersedes the other, so a late
    /// listing page can never overwrite search results or the reverse.
    ///
    /// # Returns
    ///
    /// A request tagged with a fresh sequence number:
    ///
    /// | Paging | Mode | Kind |
    /// |---|---|---|
    /// | `Snapshot` | any | `Snapshot` |
    /// | `Server` | `Browsing` | `ListPage { page }` |
    /// | `Server` | `Searching` | `SearchPage { page }` |
    pub fn request_results(&mut self) -> FetchRequest {
        let endpoints = &self.settings.endpoints;
        let (kind, url) = match (self.settings.paging, self.mode) {
            (PagingStrategy::Snapshot, _) => (
                FetchKind::Snapshot,
                endpoints.list_page(1, self.settings.snapshot_size),
            ),
            (PagingStrategy::Server, BrowseMode::Browsing) => (
                FetchKind::ListPage { page: self.page },
                endpoints.list_page(self.page, PAGE_SIZE),
            ),
            (PagingStrategy::Server, BrowseMode::Searching) => (
                FetchKind::SearchPage { page: self.page },
                endpoints.search_page(&self.query, self.page, PAGE_SIZE),
            ),
        };

        let slot = kind.slot();
        let seq = self.guard.issue(slot);
        self.guard
            .supersede(if slot == Slot::List { Slot::Search } else { Slot::List });
        self.pending_search = None;
        self.status = LoadStatus::Loading;

        tracing::debug!(seq, kind = ?kind, url = %url, "issuing list request");

        FetchRequest {
            url,
            tag: FetchTag {
                seq,
                kind,
                trace: TraceContext::from_current(),
            },
        }
    }

    /// Starts resolving a search page into full artworks.
    ///
    /// A page without hits completes immediately with the reported total.
    ///
    /// # Parameters
    ///
    /// * `seq` - Sequence number of the search page request
    /// * `page` - Page the hits belong to
    /// * `search` - Decoded hits and total
    ///
    /// # Returns
    ///
    /// One `SearchItem` request per hit, in reference order.
    pub fn begin_search_resolution(&mut self, seq: u64, page: usize, search: SearchPage) -> Vec<FetchRequest> {
        if search.references.is_empty() {
            self.apply_results(ResultSet::new(vec![], search.total));
            return vec![];
        }

        tracing::debug!(
            seq,
            page,
            hits = search.references.len(),
            total = search.total,
            "resolving search hits"
        );

        self.pending_search = Some(SearchResolution::new(
            seq,
            search.total,
            search.references.len(),
        ));

        let trace = TraceContext::from_current();
        search
            .references
            .iter()
            .enumerate()
            .map(|(index, reference)| FetchRequest {
                url: self.settings.endpoints.resolve_link(&reference.api_link),
                tag: FetchTag {
                    seq,
                    kind: FetchKind::SearchItem { index, id: reference.id },
                    trace: trace.clone(),
                },
            })
            .collect()
    }

    /// Opens the detail screen for `id`, remembering the list context.
    pub fn open_detail(&mut self, id: u64) -> FetchRequest {
        self.detail = Some(DetailState::new(id, self.list_context()));
        self.input_mode = InputMode::Normal;

        let seq = self.guard.issue(Slot::Detail);
        let url = self.settings.endpoints.artwork(id);
        tracing::debug!(seq, artwork_id = id, url = %url, "issuing detail request");

        FetchRequest {
            url,
            tag: FetchTag {
                seq,
                kind: FetchKind::Artwork { id },
                trace: TraceContext::from_current(),
            },
        }
    }

    /// Leaves the detail screen and restores its list context.
    ///
    /// Returns `true` when the restored context differs from what the list
    /// was last loaded for.
    pub fn close_detail(&mut self) -> bool {
        let Some(detail) = self.detail.take() else {
            return false;
        };
        self.guard.supersede(Slot::Detail);
        self.input_mode = InputMode::Normal;

        let changed = detail.return_to != self.list_context();
        let ListContext { mode, query, category, page } = detail.return_to;
        self.mode = mode;
        self.query = query;
        self.category = category;
        self.page = page;

        tracing::debug!(artwork_id = detail.id, changed, "returned to list");
        changed
    }

    /// Computes a renderable view model for the current screen.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] for the detail screen when one is open, otherwise for
    /// the list with its empty state, picker and windowed rows.
    ///
    /// # Windowing
    ///
    /// Rows that do not fit are scrolled so the selection sits near the
    /// middle, pulled back at the end of the page to fill the table.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use artscope::{initialize, Config};
    /// # let state = initialize(&Config::default());
    /// let viewmodel = state.compute_viewmodel(24, 80);
    /// assert!(viewmodel.display_items.is_empty());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            status_line: self.compute_status_line(),
            display_items: vec![],
            selected_index: 0,
            empty_state: None,
            picker: None,
            detail: None,
        };

        if let Some(detail) = &self.detail {
            vm.detail = Some(self.compute_detail(detail, cols));
            return vm;
        }

        if self.input_mode == InputMode::CategoryPicker {
            vm.picker = Some(PickerInfo {
                query: self.picker.query.clone(),
                options: self.picker.options(&self.categories),
                cursor: self.picker.cursor,
            });
        }

        if let Some(empty) = self.compute_empty_state() {
            vm.empty_state = Some(empty);
            return vm;
        }

        let available_rows = self.calculate_available_rows(rows);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());
        if visible_end - visible_start < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        vm.display_items = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, art)| self.compute_display_item(art, visible_start + offset, cols))
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);
        vm
    }

    fn compute_display_item(&self, art: &Artwork, absolute_idx: usize, cols: usize) -> DisplayItem {
        const TITLE_WIDTH: usize = 44;
        const DATE_WIDTH: usize = 16;

        let title = truncate(&art.title, TITLE_WIDTH - 2);
        let artist_width = cols.saturating_sub(TITLE_WIDTH + DATE_WIDTH + 2);
        let artist = truncate(art.artist_display.lines().next().unwrap_or_default(), artist_width);

        let highlight_ranges = match_range(&title, &self.query).into_iter().collect();

        DisplayItem {
            title,
            artist,
            date: truncate(&art.date_display, DATE_WIDTH),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.status {
            LoadStatus::Idle => Some(EmptyState {
                message: "Waiting for web access".to_string(),
                subtitle: "Grant the permission request to load the collection".to_string(),
            }),
            LoadStatus::Loading => Some(EmptyState {
                message: "Loading artworks...".to_string(),
                subtitle: self.pending_search.as_ref().map_or_else(
                    || "Fetching from the collection".to_string(),
                    |pending| format!("Resolving {} search results", pending.remaining()),
                ),
            }),
            LoadStatus::Failed => Some(no_results()),
            LoadStatus::Succeeded if self.visible.is_empty() => Some(no_results()),
            LoadStatus::Succeeded => None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.detail, self.mode) {
            (Some(detail), _) => format!(" Artwork #{} ", detail.id),
            (None, BrowseMode::Browsing) => " Art Collection ".to_string(),
            (None, BrowseMode::Searching) => format!(" Search: \"{}\" ", self.query),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.detail.is_some()) {
            (InputMode::SearchTyping, _) => "Enter: search  Esc: cancel  Type to edit the query",
            (InputMode::CategoryPicker, _) => {
                "Enter: choose  Esc: close  Up/Down or Ctrl+n/p: move  Type to narrow"
            }
            (InputMode::Comment, _) => "Tab: next field  Enter: submit  Esc: stop editing",
            (InputMode::Normal, true) => "Tab: write a comment  b/Esc: back  q: quit",
            (InputMode::Normal, false) => {
                "j/k: move  Enter: open  /: search  c: category  x: clear  n/p: page  r: reload  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.detail.is_some() {
            return None;
        }
        if self.input_mode == InputMode::SearchTyping {
            Some(SearchBarInfo {
                query: self.search_draft.clone(),
                editing: true,
            })
        } else if self.mode == BrowseMode::Searching {
            Some(SearchBarInfo {
                query: self.query.clone(),
                editing: false,
            })
        } else {
            None
        }
    }

    fn compute_status_line(&self) -> StatusLine {
        let page = if self.page_total == 0 {
            "No pages".to_string()
        } else {
            format!("Page {} of {}", self.page, self.page_total)
        };
        let category = if self.category.is_empty() {
            "Category: All".to_string()
        } else {
            format!("Category: {}", self.category)
        };
        StatusLine { page, category }
    }

    fn compute_detail(&self, detail: &DetailState, cols: usize) -> DetailInfo {
        let value_width = cols.saturating_sub(16);

        let Some(art) = &detail.artwork else {
            return DetailInfo {
                title: "Loading artwork...".to_string(),
                fields: vec![],
                form: vec![],
                notice: None,
                loading: true,
            };
        };

        let image = art
            .image_url(&self.settings.iiif_base)
            .unwrap_or_else(|| "No image available".to_string());

        let fields = vec![
            ("Artist", art.artist_display.replace('\n', ", ")),
            ("Date", art.date_display.clone()),
            ("Reference", art.main_reference_number.clone()),
            ("Dimensions", art.dimensions.replace('\n', "; ")),
            ("Categories", art.category_titles.join(", ")),
            ("Image", image),
        ]
        .into_iter()
        .map(|(label, value)| (label, truncate(&value, value_width)))
        .collect();

        let form = CommentField::ALL
            .into_iter()
            .map(|field| FormFieldInfo {
                label: field.label(),
                value: truncate(detail.form.value(field), value_width),
                error: detail.form.error(field),
                is_focused: self.input_mode == InputMode::Comment && detail.form.focus() == Some(field),
            })
            .collect();

        let notice = detail.accepted.last().map(|comment| {
            format!(
                "Thanks {}, your comment was accepted at {}",
                comment.name,
                comment.submitted_at.format("%H:%M:%S")
            )
        });

        DetailInfo {
            title: art.title.clone(),
            fields,
            form,
            notice,
            loading: false,
        }
    }

    /// Rows left for the table after header, borders, status line, column
    /// headers, footer, and the search bar when shown.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = if self.compute_search_bar().is_some() { 10 } else { 7 };
        total_rows.saturating_sub(chrome).max(1)
    }
}

fn no_results() -> EmptyState {
    EmptyState {
        message: "No artworks found".to_string(),
        subtitle: "Try another search or category, or press r to reload".to_string(),
    }
}

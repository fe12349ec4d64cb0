//! Request URLs for the collection API.
//!
//! Three endpoints are used: the paged artwork listing, the paged full-text
//! search, and the single-artwork detail. Every request narrows the payload
//! with a `fields` parameter so only what the UI shows crosses the wire.

/// Default API root of the Art Institute of Chicago.
pub const DEFAULT_API_BASE: &str = "https://api.artic.edu/api/v1";

/// Fields requested for full artwork records.
pub const ARTWORK_FIELDS: &str =
    "id,title,image_id,artist_display,date_display,main_reference_number,dimensions,category_titles";

/// Fields requested for search hits, which are resolved separately.
pub const SEARCH_FIELDS: &str = "id,api_link";

/// URL builder bound to one API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { api_base }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// One page of the unfiltered listing.
    ///
    /// ```
    /// use artscope::catalog::Endpoints;
    ///
    /// let url = Endpoints::default().list_page(2, 10);
    /// assert!(url.starts_with("https://api.artic.edu/api/v1/artworks?page=2&limit=10&fields="));
    /// ```
    #[must_use]
    pub fn list_page(&self, page: usize, limit: usize) -> String {
        format!(
            "{}/artworks?page={page}&limit={limit}&fields={ARTWORK_FIELDS}",
            self.api_base
        )
    }

    /// One page of full-text search hits for `query`.
    #[must_use]
    pub fn search_page(&self, query: &str, page: usize, limit: usize) -> String {
        format!(
            "{}/artworks/search?q={}&page={page}&limit={limit}&fields={SEARCH_FIELDS}",
            self.api_base,
            urlencoding::encode(query)
        )
    }

    /// The detail record of one artwork.
    #[must_use]
    pub fn artwork(&self, id: u64) -> String {
        format!("{}/artworks/{id}?fields={ARTWORK_FIELDS}", self.api_base)
    }

    /// Turns a search hit's `api_link` into a detail request.
    ///
    /// Links that already carry a query string are left alone apart from the
    /// appended field list.
    #[must_use]
    pub fn resolve_link(&self, api_link: &str) -> String {
        let separator = if api_link.contains('?') { '&' } else { '?' };
        format!("{api_link}{separator}fields={ARTWORK_FIELDS}")
    }
}

//! Artwork domain model and result sets.
//!
//! An [`Artwork`] is one catalog record as returned by the collection API. A
//! [`ResultSet`] is one fetched page of artworks together with the total number
//! of matches the remote reports, which may be larger than the page.

use serde::{Deserialize, Deserializer, Serialize};

/// Target width, in pixels, requested from the IIIF image service.
pub const IMAGE_WIDTH: u32 = 843;

/// One record of the art collection.
///
/// Immutable once fetched. Text fields that the API reports as `null` or omits
/// decode to empty strings so the rest of the crate never deals with `Option`
/// for display text. `image_id` stays optional because an absent image means
/// "no URL", not an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_display: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub main_reference_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dimensions: String,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub category_titles: Vec<String>,
}

impl Artwork {
    /// Creates an artwork with only an id and a title set.
    ///
    /// Mostly useful for building fixtures; real records come from the wire decoder.
    ///
    /// ```
    /// use artscope::domain::Artwork;
    ///
    /// let art = Artwork::new(27992, "A Sunday on La Grande Jatte");
    /// assert!(art.category_titles.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_id: None,
            artist_display: String::new(),
            date_display: String::new(),
            main_reference_number: String::new(),
            dimensions: String::new(),
            category_titles: Vec::new(),
        }
    }

    /// Returns a copy of this artwork tagged with the given categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_titles = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `category` is one of this artwork's labels.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.category_titles.iter().any(|c| c == category)
    }

    /// Builds the display image URL under the given IIIF base.
    ///
    /// Returns `None` when the record has no image reference.
    ///
    /// ```
    /// use artscope::domain::Artwork;
    ///
    /// let mut art = Artwork::new(1, "Nighthawks");
    /// art.image_id = Some("831a05de".to_string());
    /// assert_eq!(
    ///     art.image_url("https://www.artic.edu/iiif/2").as_deref(),
    ///     Some("https://www.artic.edu/iiif/2/831a05de/full/843,/0/default.jpg")
    /// );
    /// ```
    #[must_use]
    pub fn image_url(&self, iiif_base: &str) -> Option<String> {
        self.image_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| {
                format!(
                    "{}/{id}/full/{IMAGE_WIDTH},/0/default.jpg",
                    iiif_base.trim_end_matches('/')
                )
            })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An ordered page of artworks plus the total known to the remote source.
///
/// Invariant: `total >= artworks.len()`. [`ResultSet::new`] enforces it by
/// raising `total` when the remote under-reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    artworks: Vec<Artwork>,
    total: usize,
}

impl ResultSet {
    #[must_use]
    pub fn new(artworks: Vec<Artwork>, total: usize) -> Self {
        let total = total.max(artworks.len());
        Self { artworks, total }
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

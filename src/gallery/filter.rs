//! Title and category filtering over an artwork collection.
//!
//! Filtering is a pure function of the working collection, the query text, and
//! the selected category. Both predicates are ANDed and an empty value disables
//! its predicate. The category set offered to the user is derived from the same
//! working collection and must be recomputed whenever that collection changes.

use crate::domain::Artwork;
use std::collections::BTreeSet;

/// Returns the artworks whose title contains `query` (case-insensitive) and
/// whose labels include `category` (exact), preserving input order.
///
/// # Example
///
/// ```
/// use artscope::domain::Artwork;
/// use artscope::gallery::apply_filters;
///
/// let works = vec![
///     Artwork::new(1, "Water Lilies").with_categories(["Impressionism"]),
///     Artwork::new(2, "The Old Guitarist").with_categories(["Modern"]),
/// ];
/// let hits = apply_filters(&works, "lil", "");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1);
/// ```
#[must_use]
pub fn apply_filters(collection: &[Artwork], query: &str, category: &str) -> Vec<Artwork> {
    let _span = tracing::debug_span!(
        "apply_filters",
        total = collection.len(),
        query_len = query.len(),
        category = %category
    )
    .entered();

    let needle = query.to_lowercase();

    let filtered: Vec<Artwork> = collection
        .iter()
        .filter(|art| needle.is_empty() || art.title.to_lowercase().contains(&needle))
        .filter(|art| category.is_empty() || art.has_category(category))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filters applied");
    filtered
}

/// Distinct union of every artwork's category labels, sorted for display.
#[must_use]
pub fn derive_categories(collection: &[Artwork]) -> Vec<String> {
    collection
        .iter()
        .flat_map(|art| art.category_titles.iter())
        .filter(|label| !label.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `query` in `title`, used for match highlighting.
///
/// Indices are in characters, not bytes. Returns `None` for an empty query or
/// no match.
#[must_use]
pub fn match_range(title: &str, query: &str) -> Option<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let hay: Vec<char> = title.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }

    hay.windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<Artwork> {
        vec![
            Artwork::new(1, "Water Lilies").with_categories(["Impressionism", "Essentials"]),
            Artwork::new(2, "The Old Guitarist").with_categories(["Modern", "Essentials"]),
            Artwork::new(3, "Nighthawks").with_categories(["Modern"]),
            Artwork::new(4, "Stacks of Wheat (End of Summer)").with_categories(["Impressionism"]),
            Artwork::new(5, "Untitled"),
        ]
    }

    #[test]
    fn empty_filters_keep_everything_in_order() {
        let all = apply_filters(&collection(), "", "");
        let ids: Vec<u64> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn title_filter_is_sound_and_complete() {
        let works = collection();
        for query in ["the", "OF", "hawk", "zzz", "t"] {
            let hits = apply_filters(&works, query, "");
            let needle = query.to_lowercase();
            for art in &hits {
                assert!(art.title.to_lowercase().contains(&needle));
            }
            for art in works.iter().filter(|a| !hits.contains(a)) {
                assert!(!art.title.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn category_filter_is_exact_membership() {
        let hits = apply_filters(&collection(), "", "Modern");
        let ids: Vec<u64> = hits.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(apply_filters(&collection(), "", "modern").is_empty());
    }

    #[test]
    fn filters_are_anded() {
        let hits = apply_filters(&collection(), "the", "Essentials");
        let ids: Vec<u64> = hits.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn derived_categories_are_distinct_and_present() {
        let works = collection();
        let categories = derive_categories(&works);
        assert_eq!(categories, vec!["Essentials", "Impressionism", "Modern"]);

        let unique: BTreeSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        for label in &categories {
            assert!(works.iter().any(|a| a.has_category(label)));
        }
    }

    #[test]
    fn derived_categories_of_empty_collection() {
        assert!(derive_categories(&[]).is_empty());
    }

    #[test]
    fn match_range_finds_first_occurrence() {
        assert_eq!(match_range("Water Lilies", "lil"), Some((6, 9)));
        assert_eq!(match_range("Water Lilies", "WATER"), Some((0, 5)));
        assert_eq!(match_range("Water Lilies", ""), None);
        assert_eq!(match_range("Water", "Waterfall"), None);
        assert_eq!(match_range("Café Terrace", "é t"), Some((3, 6)));
    }
}

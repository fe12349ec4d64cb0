//! One-based page arithmetic over ordered result sequences.

/// Fixed number of artworks per page.
pub const PAGE_SIZE: usize = 10;

/// Items of `items` on the one-based `page`, in original order.
///
/// Returns an empty slice when the page starts past the end. A `page` of 0 is
/// treated as 1 so callers can never index before the start.
///
/// ```
/// use artscope::gallery::page_slice;
///
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
/// assert!(page_slice(&items, 4, 10).is_empty());
/// ```
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` results: `ceil(total / page_size)`.
///
/// Zero results, or a zero page size, give zero pages.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamps a requested page into `1..=max(count, 1)`.
#[must_use]
pub fn clamp_page(target: usize, count: usize) -> usize {
    target.clamp(1, count.max(1))
}

/// Page after `current`, or `None` if `current` is the last one.
#[must_use]
pub const fn next_page(current: usize, count: usize) -> Option<usize> {
    if current < count {
        Some(current + 1)
    } else {
        None
    }
}

/// Page before `current`, or `None` if `current` is the first one.
#[must_use]
pub const fn previous_page(current: usize) -> Option<usize> {
    if current > 1 {
        Some(current - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_matches_formula_for_every_page() {
        for total in [0_usize, 1, 9, 10, 11, 25, 100] {
            let items: Vec<usize> = (0..total).collect();
            for size in [1_usize, 3, 10] {
                for page in 1..=(total / size + 3) {
                    let slice = page_slice(&items, page, size);
                    let expected = size.min(total.saturating_sub((page - 1) * size));
                    assert_eq!(slice.len(), expected, "total={total} size={size} page={page}");
                    let offset = (page - 1) * size;
                    for (i, item) in slice.iter().enumerate() {
                        assert_eq!(*item, offset + i);
                    }
                }
            }
        }
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let items = [1, 2, 3];
        assert_eq!(page_slice(&items, 0, 2), &[1, 2]);
    }

    #[test]
    fn page_count_is_ceiling() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(10, PAGE_SIZE), 1);
        assert_eq!(page_count(11, PAGE_SIZE), 2);
        assert_eq!(page_count(25, PAGE_SIZE), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn transitions_stay_in_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
        assert_eq!(next_page(2, 3), Some(3));
        assert_eq!(next_page(3, 3), None);
        assert_eq!(previous_page(1), None);
        assert_eq!(previous_page(2), Some(1));
    }
}

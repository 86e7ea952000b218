//! Page slicing over materialized activity.

/// Slices a newest-first sequence into 1-based pages.
///
/// Page `n` covers `[(n-1)*per_page, n*per_page)`. A `page` of `None`
/// or `0` returns the whole sequence unsliced; a page past the end
/// returns an empty vector, never an error.
#[must_use]
pub fn page_slice<T: Clone>(items: &[T], page: Option<usize>, per_page: usize) -> Vec<T> {
    let page = match page {
        None | Some(0) => return items.to_vec(),
        Some(p) => p,
    };
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::page_slice;

    #[test]
    fn first_page_takes_the_newest() {
        let items = [4, 3, 2, 1];
        assert_eq!(page_slice(&items, Some(1), 2), vec![4, 3]);
    }

    #[test]
    fn middle_and_last_pages() {
        let items = [4, 3, 2, 1];
        assert_eq!(page_slice(&items, Some(2), 2), vec![2, 1]);
        assert_eq!(page_slice(&items, Some(2), 3), vec![1]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = [4, 3, 2, 1];
        assert!(page_slice(&items, Some(3), 2).is_empty());
        assert!(page_slice(&items, Some(100), 2).is_empty());
    }

    #[test]
    fn absent_or_zero_page_returns_everything() {
        let items = [4, 3, 2, 1];
        assert_eq!(page_slice(&items, None, 2), vec![4, 3, 2, 1]);
        assert_eq!(page_slice(&items, Some(0), 2), vec![4, 3, 2, 1]);
    }

    #[test]
    fn empty_input_is_total() {
        let items: [i32; 0] = [];
        assert!(page_slice(&items, Some(1), 5).is_empty());
        assert!(page_slice(&items, None, 5).is_empty());
    }
}

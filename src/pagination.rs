use std::collections::HashMap;

use crate::names::QUESTIONS_PER_PAGE;

/// Reads the `page` query parameter. Anything that is not a positive integer
/// falls back to the first page.
pub fn extract_page(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Returns the `[start, start + QUESTIONS_PER_PAGE)` slice of `items` for a
/// 1-based `page`, clamped to the collection. Pages past the end are empty.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    paginate_by(page, QUESTIONS_PER_PAGE, items)
}

fn paginate_by<T>(page: usize, page_size: usize, items: &[T]) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str) -> HashMap<String, String> {
        HashMap::from([("page".to_string(), page.to_string())])
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(extract_page(&HashMap::new()), 1);
        assert_eq!(extract_page(&params("abc")), 1);
        assert_eq!(extract_page(&params("0")), 1);
        assert_eq!(extract_page(&params("-3")), 1);
        assert_eq!(extract_page(&params("4")), 4);
    }

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(1, &items), &items[0..10]);
        assert_eq!(paginate(3, &items), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=10).collect();
        assert!(paginate(2, &items).is_empty());
        assert!(paginate(999, &items).is_empty());
        assert!(paginate(usize::MAX, &items).is_empty());
    }

    #[test]
    fn pages_concatenate_back_to_the_collection() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            let items: Vec<usize> = (0..len).collect();
            let mut rebuilt = Vec::new();
            let mut page = 1;
            loop {
                let slice = paginate(page, &items);
                assert!(slice.len() <= QUESTIONS_PER_PAGE);
                if slice.is_empty() {
                    break;
                }
                rebuilt.extend_from_slice(slice);
                page += 1;
            }
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn custom_page_size() {
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(paginate_by(2, 2, &items), &["c", "d"]);
        assert_eq!(paginate_by(3, 2, &items), &["e"]);
    }
}

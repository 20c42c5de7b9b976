//! Universal list-view helpers (search, sort, pagination).

use std::cmp::Ordering;

/// Trait for row types the search box can filter.
pub trait Searchable {
    /// Returns true when the row matches the search text.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types the column headers can sort.
pub trait Sortable {
    /// Compares two rows by the named field.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Filter a list by search text. Empty text keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort a list by the named field. The sort is stable, so fields that
/// compare as equal keep their incoming order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Number of pages a list of `len` items occupies at `page_size`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The slice of `items` shown on the 0-indexed `page`.
///
/// A page past the end of the list yields an empty slice. The page index is
/// never clamped here: filtering while on a late page legitimately renders
/// an empty page.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(
    current_field: Option<&str>,
    field: &str,
    ascending: bool,
) -> &'static str {
    if current_field == Some(field) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Banana", price: 3.0 },
            Row { name: "apple", price: 2.0 },
            Row { name: "Cherry", price: 1.0 },
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let filtered = filter_list(rows(), "AN");
        assert_eq!(
            filtered.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["Banana"]
        );
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn sorting_twice_reverses() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let ascending: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(ascending, vec!["apple", "Banana", "Cherry"]);

        sort_list(&mut items, "name", false);
        let descending: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(descending, vec!["Cherry", "Banana", "apple"]);
    }

    #[test]
    fn unknown_field_is_a_stable_no_op() {
        let mut items = rows();
        sort_list(&mut items, "nonexistent", true);
        assert_eq!(items, rows());
    }

    #[test]
    fn pages_concatenate_to_the_full_list() {
        let items: Vec<Row> = (0..23)
            .map(|i| Row { name: "x", price: i as f64 })
            .collect();
        let pages = total_pages(items.len(), 10);
        assert_eq!(pages, 3);

        let mut collected = Vec::new();
        for page in 0..pages {
            collected.extend(page_slice(&items, page, 10));
        }
        assert_eq!(collected, items);
        assert_eq!(page_slice(&items, 2, 10).len(), 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = rows();
        assert!(page_slice(&items, 5, 10).is_empty());
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn sort_indicator_tracks_active_column() {
        assert_eq!(get_sort_indicator(Some("name"), "name", true), " ▲");
        assert_eq!(get_sort_indicator(Some("name"), "name", false), " ▼");
        assert_eq!(get_sort_indicator(Some("name"), "price", true), " ⇅");
        assert_eq!(get_sort_indicator(None, "price", true), " ⇅");
    }
}

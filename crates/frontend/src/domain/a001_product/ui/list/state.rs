use crate::shared::list_utils::{filter_list, page_slice, sort_list, Searchable, Sortable};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rows per page. Fixed; the pager has no page-size selector.
pub const PAGE_SIZE: usize = 10;

/// Quiet period before a per-row commission edit is committed.
pub const COMMISSION_DEBOUNCE_MS: i32 = 500;

/// Client-local view state of the product grid.
#[derive(Clone, Debug)]
pub struct ProductListState {
    // Filters
    pub search: String,
    /// `None` = "All".
    pub category: Option<String>,

    // Sorting
    pub sort_field: Option<String>,
    pub sort_ascending: bool,

    // Client-side pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort_field: None,
            sort_ascending: true,
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl ProductListState {
    /// Header click: the column becomes the sort key and the direction flips.
    ///
    /// The flip happens on every click, including when switching columns:
    /// leaving column A ascending lands on column B descending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort_field = Some(field.to_string());
        self.sort_ascending = !self.sort_ascending;
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            // Unknown or optional fields have no defined order.
            _ => Ordering::Equal,
        }
    }
}

/// Filtered and sorted products, before pagination.
///
/// Category filter and name search first, then the sort. Unsorted state
/// preserves load order.
pub fn filtered_sorted_products(products: &[Product], state: &ProductListState) -> Vec<Product> {
    let by_category: Vec<Product> = products
        .iter()
        .filter(|product| {
            state
                .category
                .as_deref()
                .map_or(true, |category| product.category == category)
        })
        .cloned()
        .collect();

    let mut result = filter_list(by_category, &state.search);

    if let Some(field) = &state.sort_field {
        sort_list(&mut result, field, state.sort_ascending);
    }

    result
}

/// The rows shown on the current page: filter -> sort -> slice, recomputed
/// on every render.
pub fn visible_products(products: &[Product], state: &ProductListState) -> Vec<Product> {
    page_slice(
        &filtered_sorted_products(products, state),
        state.page,
        state.page_size,
    )
}

/// Select-all toggle, page-scoped: clears the whole selection when its size
/// equals the current page's row count, otherwise replaces it with exactly
/// the page's ids.
pub fn toggle_select_all(selected: &HashSet<String>, page_ids: &[String]) -> HashSet<String> {
    if selected.len() == page_ids.len() {
        HashSet::new()
    } else {
        page_ids.iter().cloned().collect()
    }
}

/// Why a bulk apply cannot be submitted, if anything. `None` means the
/// request may go out.
pub fn bulk_apply_blocker(selected_count: usize, percent_value: &str) -> Option<&'static str> {
    if selected_count < 2 {
        return Some("Select at least two products to apply commission.");
    }
    if percent_value.trim().is_empty() {
        return Some("You must add a percent.");
    }
    None
}

/// Patch one product's commission in place after a committed single update.
pub fn patch_commission(products: &mut [Product], product_id: &str, percent: u8) {
    if let Some(product) = products.iter_mut().find(|p| p.id == product_id) {
        product.commission_percent = Some(percent);
    }
}

/// Distinct categories in load order, for the filter dropdown.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            commission_percent: None,
        }
    }

    fn products() -> Vec<Product> {
        vec![
            product("1", "Aeropress", "Coffee", 35.0),
            product("2", "Grinder", "Coffee", 120.0),
            product("3", "Blender", "Kitchen", 80.0),
            product("4", "apron", "Kitchen", 15.0),
            product("5", "Kettle", "Kitchen", 40.0),
        ]
    }

    #[test]
    fn filter_combines_category_and_search() {
        let state = ProductListState {
            category: Some("Kitchen".to_string()),
            search: "le".to_string(),
            ..Default::default()
        };
        let filtered = filtered_sorted_products(&products(), &state);
        let names: Vec<_> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Blender", "Kettle"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let state = ProductListState {
            search: "APRON".to_string(),
            ..Default::default()
        };
        let filtered = filtered_sorted_products(&products(), &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "4");
    }

    #[test]
    fn toggle_sort_flips_even_when_switching_columns() {
        let mut state = ProductListState::default();
        assert!(state.sort_ascending);

        state.toggle_sort("name");
        assert_eq!(state.sort_field.as_deref(), Some("name"));
        assert!(!state.sort_ascending);

        // Switching to another column keeps flipping instead of resetting.
        state.toggle_sort("price");
        assert_eq!(state.sort_field.as_deref(), Some("price"));
        assert!(state.sort_ascending);
    }

    #[test]
    fn sorting_same_column_twice_reverses() {
        let mut state = ProductListState::default();
        state.toggle_sort("price");
        let descending: Vec<_> = filtered_sorted_products(&products(), &state)
            .iter()
            .map(|p| p.id.clone())
            .collect();

        state.toggle_sort("price");
        let ascending: Vec<_> = filtered_sorted_products(&products(), &state)
            .iter()
            .map(|p| p.id.clone())
            .collect();

        let mut reversed = descending.clone();
        reversed.reverse();
        assert_eq!(ascending, reversed);
        assert_eq!(ascending, vec!["4", "1", "5", "3", "2"]);
    }

    #[test]
    fn pages_concatenate_without_loss() {
        let many: Vec<Product> = (0..23)
            .map(|i| product(&i.to_string(), &format!("Item {}", i), "Misc", i as f64))
            .collect();
        let mut state = ProductListState::default();

        let mut collected = Vec::new();
        for page in 0..3 {
            state.page = page;
            collected.extend(visible_products(&many, &state));
        }
        assert_eq!(collected, filtered_sorted_products(&many, &state));
        state.page = 2;
        assert_eq!(visible_products(&many, &state).len(), 3);
    }

    #[test]
    fn filtering_on_a_late_page_can_leave_it_empty() {
        let many: Vec<Product> = (0..25)
            .map(|i| product(&i.to_string(), &format!("Item {}", i), "Misc", i as f64))
            .collect();
        let mut state = ProductListState {
            page: 2,
            ..Default::default()
        };
        assert!(!visible_products(&many, &state).is_empty());

        // The page index is not reset when the filter shrinks the list.
        state.search = "Item 1".to_string();
        assert!(visible_products(&many, &state).is_empty());
    }

    #[test]
    fn select_all_toggle_is_symmetric_and_size_keyed() {
        let page_ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];

        let selected = HashSet::new();
        let next = toggle_select_all(&selected, &page_ids);
        assert_eq!(next.len(), 3);
        assert!(next.contains("2"));

        // Same size as the page clears, whatever the ids are.
        let off_page: HashSet<String> = ["7", "8", "9"].iter().map(|s| s.to_string()).collect();
        assert!(toggle_select_all(&off_page, &page_ids).is_empty());

        // Partial selection replaces with the page's ids.
        let partial: HashSet<String> = ["1"].iter().map(|s| s.to_string()).collect();
        let next = toggle_select_all(&partial, &page_ids);
        assert_eq!(next, page_ids.iter().cloned().collect());
    }

    #[test]
    fn bulk_apply_preconditions() {
        assert!(bulk_apply_blocker(0, "15").is_some());
        assert!(bulk_apply_blocker(1, "15").is_some());
        assert!(bulk_apply_blocker(2, "").is_some());
        assert!(bulk_apply_blocker(2, "   ").is_some());
        assert_eq!(bulk_apply_blocker(2, "15"), None);
    }

    #[test]
    fn patch_commission_targets_one_product() {
        let mut list = products();
        patch_commission(&mut list, "3", 15);
        assert_eq!(list[2].commission_percent, Some(15));
        assert!(list.iter().filter(|p| p.commission_percent.is_some()).count() == 1);

        // Unknown id is a no-op.
        patch_commission(&mut list, "nope", 50);
        assert!(list.iter().filter(|p| p.commission_percent.is_some()).count() == 1);
    }

    #[test]
    fn category_options_are_distinct_in_load_order() {
        assert_eq!(category_options(&products()), vec!["Coffee", "Kitchen"]);
    }
}

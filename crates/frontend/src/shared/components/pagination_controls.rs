use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - Previous/Next pager for client-side
/// paginated tables.
///
/// Pages are 0-indexed internally and displayed 1-based. Deliberately no
/// direct page-jump and no page-size selector. The current page is never
/// clamped: shrinking the list while on a late page leaves that page in
/// place (and possibly empty).
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("Page {} of {}", page + 1, total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    let total = total_pages.get();
                    if page + 1 < total {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || {
                    let page = current_page.get();
                    let total = total_pages.get();
                    page + 1 >= total
                }
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}

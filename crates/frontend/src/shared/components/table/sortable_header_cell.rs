use crate::shared::list_utils::get_sort_indicator;
use leptos::prelude::*;

/// Sortable table header cell.
///
/// Shows the sort indicator (▲▼) for the active column and forwards clicks
/// to the owning page's sort handler. Direction semantics live with the
/// caller; this cell only reports which column was clicked.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Currently active sort field, if any
    #[prop(into)]
    current_sort_field: Signal<Option<String>>,

    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();

    view! {
        <th
            class="cursor-pointer user-select-none"
            title="Sort"
            on:click=move |_| on_sort.run(sort_field_for_click.clone())
        >
            {label}
            {move || {
                get_sort_indicator(
                    current_sort_field.get().as_deref(),
                    &sort_field_for_indicator,
                    sort_ascending.get(),
                )
            }}
        </th>
    }
}

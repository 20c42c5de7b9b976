use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::JsCast;

/// Header checkbox implementing the page-scoped select-all toggle.
///
/// Checked when the selection size equals the row count of the current page.
/// A click in that state clears the whole selection; any other click replaces
/// the selection with exactly the visible page's ids. The indeterminate state
/// is display-only.
#[component]
pub fn SelectAllCheckbox(
    /// Ids of the rows on the current page
    #[prop(into)]
    page_ids: Signal<Vec<String>>,

    /// Currently selected ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback when toggled (true = the click wants everything selected)
    on_change: Callback<bool>,
) -> impl IntoView {
    // The toggle is keyed off size equality, not set equality.
    let all_selected = Signal::derive(move || {
        let ids = page_ids.get();
        !ids.is_empty() && selected.get().len() == ids.len()
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // Indeterminate can only be set through the DOM element.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let indeterminate = !selected.get().is_empty() && !all_selected.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <th class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all on this page"
                prop:checked=move || all_selected.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </th>
    }
}

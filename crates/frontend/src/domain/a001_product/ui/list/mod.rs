pub mod commission_input;
pub mod state;

use crate::domain::a001_product::api;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::{SelectAllCheckbox, SortableHeaderCell};
use crate::shared::components::PaginationControls;
use crate::shared::list_utils::total_pages;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use commission_input::CommissionInput;
use contracts::domain::a001_product::{parse_commission_percent, BulkCommissionUpdateRequest};
use leptos::prelude::*;
use state::{
    bulk_apply_blocker, category_options, create_state, filtered_sorted_products,
    patch_commission, toggle_select_all, visible_products,
};
use std::collections::HashSet;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCommissionGrid() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let (products, set_products) = signal(Vec::new());
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(HashSet::<String>::new());
    let bulk_percent = RwSignal::new(String::new());
    let state = create_state();

    // Initial load replaces local state wholesale; a failed load leaves the
    // grid empty.
    {
        let config = config.clone();
        Effect::new(move |_| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_products(&config).await {
                    Ok(list) => {
                        set_products.set(list);
                        set_selected.set(HashSet::new());
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Error fetching products: {}", e);
                        set_error.set(Some(format!("Failed to load products: {}", e)));
                    }
                }
            });
        });
    }

    // Filter -> sort -> page, recomputed on every render.
    let visible_rows = move || visible_products(&products.get(), &state.get());

    let page_ids = Signal::derive(move || {
        visible_rows()
            .iter()
            .map(|product| product.id.clone())
            .collect::<Vec<String>>()
    });

    let pages = Signal::derive(move || {
        let st = state.get();
        total_pages(
            filtered_sorted_products(&products.get(), &st).len(),
            st.page_size,
        )
    });

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    // The toggle rule is size-keyed and page-scoped; the checkbox's own
    // checked flag is advisory only.
    let on_select_all = Callback::new(move |_check_all: bool| {
        set_selected.update(|sel| {
            let next = toggle_select_all(sel, &page_ids.get_untracked());
            *sel = next;
        });
    });

    // Debounced per-row commit lands here with the last value typed.
    let on_commission_commit = {
        let config = config.clone();
        Callback::new(move |(product_id, percent): (String, u8)| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_commission(&config, &product_id, percent).await {
                    Ok(()) => {
                        set_products.update(|list| patch_commission(list, &product_id, percent));
                        set_error.set(None);
                        alert("Commission updated successfully");
                    }
                    Err(e) => {
                        log::error!("Error updating commission for product {}: {}", product_id, e);
                        set_error.set(Some(format!("Failed to update commission: {}", e)));
                    }
                }
            });
        })
    };

    let apply_to_selected = {
        let config = config.clone();
        move || {
            let ids: Vec<String> = selected.get_untracked().into_iter().collect();
            let raw_percent = bulk_percent.get_untracked();

            // Client-side preconditions block the request entirely.
            if let Some(message) = bulk_apply_blocker(ids.len(), &raw_percent) {
                alert(message);
                return;
            }
            let percent = match parse_commission_percent(&raw_percent) {
                Ok(p) => p,
                Err(message) => {
                    alert(&message);
                    return;
                }
            };

            let request = BulkCommissionUpdateRequest {
                product_ids: ids,
                commission_percent: percent,
            };
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::bulk_update_commission(&config, &request).await {
                    Ok(updated) => {
                        set_products.set(updated);
                        set_selected.set(HashSet::new());
                        set_error.set(None);
                        alert("Commission updated successfully");
                    }
                    Err(e) => {
                        log::error!("Error updating commission: {}", e);
                        set_error.set(Some(format!("Failed to apply commission: {}", e)));
                    }
                }
            });
        }
    };

    let bulk_disabled = move || {
        selected.get().len() < 2 || bulk_percent.get().trim().is_empty()
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="content">
                <div class="header">
                    <h2>"Commission Plan"</h2>
                    <div class="header-actions">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Search by product name"
                            prop:value=move || state.get().search
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.search = value);
                            }
                        />
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    s.category = if value == "All" { None } else { Some(value) };
                                });
                            }
                        >
                            <option value="All">"All"</option>
                            {move || category_options(&products.get()).into_iter().map(|category| {
                                view! {
                                    <option value={category.clone()}>{category.clone()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="table-container">
                    <table>
                        <thead>
                            <tr>
                                <SelectAllCheckbox
                                    page_ids=page_ids
                                    selected=selected
                                    on_change=on_select_all
                                />
                                <SortableHeaderCell
                                    label="Product Name"
                                    sort_field="name"
                                    current_sort_field=Signal::derive(move || state.get().sort_field)
                                    sort_ascending=Signal::derive(move || state.get().sort_ascending)
                                    on_sort=on_sort
                                />
                                <SortableHeaderCell
                                    label="Category"
                                    sort_field="category"
                                    current_sort_field=Signal::derive(move || state.get().sort_field)
                                    sort_ascending=Signal::derive(move || state.get().sort_ascending)
                                    on_sort=on_sort
                                />
                                <SortableHeaderCell
                                    label="Price"
                                    sort_field="price"
                                    current_sort_field=Signal::derive(move || state.get().sort_field)
                                    sort_ascending=Signal::derive(move || state.get().sort_ascending)
                                    on_sort=on_sort
                                />
                                <th>"Commission Percent"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible_rows().into_iter().map(|product| {
                                    let id = product.id.clone();
                                    let checkbox_id = id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    class="table__checkbox"
                                                    prop:checked={
                                                        let selected_ids = selected.get();
                                                        selected_ids.contains(&id)
                                                    }
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        toggle_select(checkbox_id.clone(), checked);
                                                    }
                                                />
                                            </td>
                                            <td>{product.name.clone()}</td>
                                            <td>{product.category.clone()}</td>
                                            <td>{format!("${}", product.price)}</td>
                                            <td>
                                                <CommissionInput
                                                    product_id=product.id.clone()
                                                    initial_percent=product.commission_percent
                                                    on_commit=on_commission_commit
                                                />
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="table-footer">
                    <div class="bulk-actions">
                        <input
                            type="number"
                            class="form-control"
                            placeholder="Commission %"
                            min="0"
                            max="100"
                            prop:value=move || bulk_percent.get()
                            prop:disabled=move || selected.get().is_empty()
                            on:input=move |ev| {
                                bulk_percent.set(event_target_value(&ev));
                            }
                        />
                        <button
                            class="btn btn-primary"
                            disabled=bulk_disabled
                            on:click=move |_| apply_to_selected()
                        >
                            "Apply to selected products"
                        </button>
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=pages
                        on_page_change=Callback::new(move |page: usize| {
                            state.update(|s| s.page = page);
                        })
                    />
                </div>
            </div>
        </PageFrame>
    }
}

use super::state::COMMISSION_DEBOUNCE_MS;
use crate::shared::debounce::Debouncer;
use contracts::domain::a001_product::parse_commission_percent;
use leptos::prelude::*;

/// Per-row commission editor.
///
/// Owns its text state, seeded from the product's current percent (empty when
/// unset), and commits the last typed value once the debounce window closes.
/// Input that fails validation commits nothing; the field keeps whatever the
/// user typed until the row re-renders.
#[component]
pub fn CommissionInput(
    /// Product whose commission this field edits
    product_id: String,

    /// Current committed percent, if any
    initial_percent: Option<u8>,

    /// Runs with (product id, parsed percent) after the quiet period
    on_commit: Callback<(String, u8)>,
) -> impl IntoView {
    let value = RwSignal::new(
        initial_percent
            .map(|p| p.to_string())
            .unwrap_or_default(),
    );
    let debouncer = Debouncer::new();

    view! {
        <span class="commission-input">
            <input
                type="number"
                class="commission-input__field"
                min="0"
                max="100"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    value.set(raw.clone());
                    let id = product_id.clone();
                    debouncer.schedule(COMMISSION_DEBOUNCE_MS, move || {
                        if let Ok(percent) = parse_commission_percent(&raw) {
                            on_commit.run((id, percent));
                        }
                    });
                }
            />
            <span class="commission-input__suffix">"%"</span>
        </span>
    }
}

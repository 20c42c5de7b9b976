use crate::shared::date_utils::{month_bounds, parse_input_date};
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker component - paired date inputs for selecting a period,
/// with quick buttons for the previous and current month.
#[component]
pub fn DateRangePicker(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback when the range changes (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label shown above the inputs
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let apply_month = move |year: i32, month: u32| {
        if let Some((start, end)) = month_bounds(year, month) {
            on_change.run((
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ));
        }
    };

    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        apply_month(now.year(), now.month());
    };

    // Steps back from the currently selected "from" date, not from today.
    let on_previous_month = move |_| {
        let anchor = parse_input_date(&date_from.get_untracked())
            .unwrap_or_else(|| Utc::now().date_naive());
        let (year, month) = if anchor.month() == 1 {
            (anchor.year() - 1, 12)
        } else {
            (anchor.year(), anchor.month() - 1)
        };
        apply_month(year, month);
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="form__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="form__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_current_month
                    >
                        "0M"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}

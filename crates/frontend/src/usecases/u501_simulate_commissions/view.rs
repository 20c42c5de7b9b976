use super::api;
use super::rows::simulation_rows;
use crate::domain::a002_staff_member::api as staff_api;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::DateRangePicker;
use crate::shared::date_utils::parse_input_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use chrono::{NaiveTime, Utc};
use contracts::domain::a002_staff_member::StaffMember;
use contracts::usecases::u501_simulate_commissions::{
    SimulateCommissionsRequest, SimulationBreakdown,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
pub fn CommissionSimulationPanel() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let (staff_members, set_staff_members) = signal(Vec::<StaffMember>::new());
    let (selected_staff, set_selected_staff) = signal(String::new());
    let (breakdown, set_breakdown) = signal(SimulationBreakdown::default());
    let (error_msg, set_error_msg) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let today = Utc::now().date_naive();
    let (date_from, set_date_from) = signal(today.format("%Y-%m-%d").to_string());
    let (date_to, set_date_to) = signal(today.format("%Y-%m-%d").to_string());

    // Load staff members once on mount. The selector stays disabled until
    // this resolves.
    {
        let config = config.clone();
        Effect::new(move || {
            let config = config.clone();
            spawn_local(async move {
                match staff_api::fetch_staff_members(&config).await {
                    Ok(members) => {
                        if let Some(first) = members.first() {
                            set_selected_staff.set(first.id.clone());
                        }
                        set_staff_members.set(members);
                    }
                    Err(e) => {
                        log::error!("Error fetching staff members: {}", e);
                        set_error_msg.set(format!("Failed to load staff members: {}", e));
                    }
                }
            });
        });
    }

    // Explicit trigger only; inputs never auto-simulate.
    let on_simulate = {
        let config = config.clone();
        move |_| {
            let staff_id = selected_staff.get_untracked();
            if staff_id.is_empty() {
                alert("Select a staff member to simulate.");
                return;
            }
            let start = match parse_input_date(&date_from.get_untracked()) {
                Some(date) => date,
                None => {
                    alert("Select a valid start date.");
                    return;
                }
            };
            let end = match parse_input_date(&date_to.get_untracked()) {
                Some(date) => date,
                None => {
                    alert("Select a valid end date.");
                    return;
                }
            };

            // Both bounds travel as full date-times (midnight UTC).
            let request = SimulateCommissionsRequest {
                start_date: start.and_time(NaiveTime::MIN).and_utc(),
                end_date: end.and_time(NaiveTime::MIN).and_utc(),
                staff_member_id: staff_id,
            };

            set_is_loading.set(true);
            let config = config.clone();
            spawn_local(async move {
                match api::simulate_commissions(&config, &request).await {
                    Ok(result) => {
                        set_breakdown.set(result);
                        set_error_msg.set(String::new());
                        set_is_loading.set(false);
                    }
                    Err(e) => {
                        log::error!("Error simulating commissions: {}", e);
                        set_error_msg.set(format!("Failed to simulate commissions: {}", e));
                        set_is_loading.set(false);
                    }
                }
            });
        }
    };

    // One row per day, ascending offset, relative to the selected start date.
    let result_rows = move || {
        let start = parse_input_date(&date_from.get()).unwrap_or_else(|| Utc::now().date_naive());
        simulation_rows(start, &breakdown.get())
    };

    let simulate_disabled =
        Signal::derive(move || is_loading.get() || staff_members.get().is_empty());

    view! {
        <PageFrame page_id="u501_simulate_commissions--usecase" category=PAGE_CAT_USECASE>
            <div class="card">
                <div class="card__body">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h2 class="section-title">"Commission Simulation"</h2>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_simulate
                            disabled=simulate_disabled
                        >
                            {move || if is_loading.get() { "Simulating..." } else { "Simulate" }}
                        </Button>
                    </Flex>

                    <div class="form-section-group">
                        <div class="form__group">
                            <label class="form__label">"Period:"</label>
                            <DateRangePicker
                                date_from=date_from
                                date_to=date_to
                                on_change=Callback::new(move |(from, to): (String, String)| {
                                    set_date_from.set(from);
                                    set_date_to.set(to);
                                })
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Staff Member:"</label>
                            <select
                                class="form__select"
                                prop:value=move || selected_staff.get()
                                prop:disabled=move || staff_members.get().is_empty()
                                on:change=move |ev| {
                                    set_selected_staff.set(event_target_value(&ev));
                                }
                            >
                                {move || staff_members.get().into_iter().map(|member| {
                                    let StaffMember { id, name } = member;
                                    view! {
                                        <option value={id}>{name}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    {move || {
                        let err = error_msg.get();
                        if !err.is_empty() {
                            view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{err}</span>
                                </div>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}

                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>"Day"</th>
                                    <th>"Commission"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    result_rows().into_iter().map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.day}</td>
                                                <td>{row.commission}</td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                        {move || {
                            if breakdown.get().is_empty() && !is_loading.get() {
                                view! {
                                    <div class="empty-state">"No simulation results yet"</div>
                                }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

use crate::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the API endpoint configuration to the whole app via context,
    // so the data-access layer never reaches for an ambient global.
    provide_context(ApiConfig::from_window());

    view! {
        <AppRoutes />
    }
}

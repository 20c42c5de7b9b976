use leptos::prelude::*;
use leptos_router::components::A;

/// Application header with top-level navigation.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-header__title">"Commission Plan Simulator"</h1>
            <nav class="app-header__nav">
                <A href="/">"Commission plan"</A>
                <A href="/simulation">"Simulation"</A>
            </nav>
        </header>
    }
}

use crate::domain::a001_product::ui::list::ProductCommissionGrid;
use crate::layout::Header;
use crate::usecases::u501_simulate_commissions::view::CommissionSimulationPanel;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="main-content">
                <Routes fallback=|| view! { <ProductCommissionGrid /> }>
                    <Route path=path!("/") view=ProductCommissionGrid />
                    <Route path=path!("/simulation") view=CommissionSimulationPanel />
                </Routes>
            </main>
        </Router>
    }
}

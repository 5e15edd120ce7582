use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="status">"404 - Página no encontrada"</p> }>
                <Route path=path!("/") view=DashboardPage />
            </Routes>
        </Router>
    }
}

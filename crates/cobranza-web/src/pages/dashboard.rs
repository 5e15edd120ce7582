use collection_stats::{CollectionStats, FetchError, GENERIC_ERROR_MESSAGE, LoadState};
use leptos::prelude::*;
use shared::CONFIG;

use crate::api::fetch_collection_stats;
use crate::components::{EfficiencyChart, InsightsPanel, TrendsChart};

fn loading_view() -> AnyView {
    view! { <div class="status">"Cargando datos..."</div> }.into_any()
}

/// Fetches once on mount, then renders loading, error or the dashboard
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(fetch_collection_stats);

    view! {
        <Suspense fallback=loading_view>
            {move || {
                // Dereference SendWrapper to access the fetch result
                let state: LoadState<CollectionStats, FetchError> = stats.get().map(|result| (*result).clone()).into();
                match state {
                    LoadState::Loading => loading_view(),
                    LoadState::Failed(_) => view! {
                        <div class="status status-error">{GENERIC_ERROR_MESSAGE}</div>
                    }.into_any(),
                    LoadState::Ready(stats) => view! { <DashboardContent stats=stats /> }.into_any(),
                }
            }}
        </Suspense>
    }
}

#[component]
fn DashboardContent(stats: CollectionStats) -> impl IntoView {
    view! {
        <main class="dashboard">
            <h1 class="dashboard-title">{CONFIG.title}</h1>
            <div class="dashboard-grid">
                <div class="span-8">
                    <EfficiencyChart stats=stats.clone() />
                </div>
                <div class="span-4">
                    <InsightsPanel stats=stats.clone() />
                </div>
                <div class="span-12">
                    <TrendsChart stats=stats />
                </div>
            </div>
        </main>
    }
}

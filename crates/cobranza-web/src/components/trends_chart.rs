use collection_stats::{CollectionStats, Metric, build_monthly_series, format_currency};
use leptos::prelude::*;
use shared::CONFIG;

use super::Section;
use super::charts::{BarChart, ChartSeries};

const ALL_YEARS: &str = "all";

/// Axis ticks drop whole-peso cents
fn currency_tick(value: f64) -> String {
    let formatted = format_currency(value);
    match formatted.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Monthly amount collected per year as grouped bars, filterable by year
#[component]
pub fn TrendsChart(stats: CollectionStats) -> impl IntoView {
    let series = build_monthly_series(&stats, CONFIG.years, Metric::Collected);
    let (selected, set_selected) = signal(ALL_YEARS.to_string());

    let selector = view! {
        <label class="select">
            <span class="select-label">"Año"</span>
            <select
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(event_target_value(&ev))
            >
                <option value=ALL_YEARS>"Todos"</option>
                {CONFIG.years.iter().map(|year| view! { <option value=*year>{*year}</option> }).collect_view()}
            </select>
        </label>
    }
    .into_any();

    let chart = move || {
        let selected = selected.get();
        let labels: Vec<&'static str> = series.iter().map(|row| row.label).collect();
        let bars: Vec<ChartSeries> = CONFIG
            .years
            .iter()
            .enumerate()
            .filter(|(_, year)| selected == ALL_YEARS || selected == **year)
            .map(|(i, year)| ChartSeries {
                name: format!("Cobrado {}", year),
                color: CONFIG.series_color(i),
                values: series.iter().map(|row| row.value(year)).collect(),
            })
            .collect();

        view! { <BarChart labels=labels series=bars y_format=currency_tick value_format=format_currency /> }
    };

    view! {
        <Section id="trends" title="Tendencias de Cobranza Mensual" controls=selector>
            {chart}
        </Section>
    }
}

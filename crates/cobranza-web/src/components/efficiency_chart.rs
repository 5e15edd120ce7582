use collection_stats::{CollectionStats, Metric, TimeWindow, build_monthly_series, format_percent, window_slice};
use leptos::prelude::*;
use shared::CONFIG;

use super::Section;
use super::charts::{ChartSeries, LineChart};

fn percent_tick(value: f64) -> String {
    format_percent(value, 0)
}

fn percent_value(value: f64) -> String {
    format_percent(value, 2)
}

/// Monthly efficiency per year as lines, with a trailing-months toggle
#[component]
pub fn EfficiencyChart(stats: CollectionStats) -> impl IntoView {
    let series = build_monthly_series(&stats, CONFIG.years, Metric::Efficiency);
    let (window, set_window) = signal(TimeWindow::All);

    let options: Vec<TimeWindow> = CONFIG
        .window_months
        .iter()
        .filter_map(|&months| TimeWindow::last(months).ok())
        .chain([TimeWindow::All])
        .collect();

    let toggles = view! {
        <div class="toggle-group">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="toggle"
                            class:active=move || window.get() == option
                            on:click=move |_| set_window.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any();

    let chart = move || {
        let rows = window_slice(&series, window.get());
        let labels: Vec<&'static str> = rows.iter().map(|row| row.label).collect();
        let lines: Vec<ChartSeries> = CONFIG
            .years
            .iter()
            .enumerate()
            .map(|(i, year)| ChartSeries {
                name: year.to_string(),
                color: CONFIG.series_color(i),
                values: rows.iter().map(|row| row.value(year)).collect(),
            })
            .collect();

        view! { <LineChart labels=labels series=lines y_format=percent_tick value_format=percent_value /> }
    };

    view! {
        <Section id="efficiency" title="Eficiencia de Cobranza por Año" controls=toggles>
            {chart}
        </Section>
    }
}

use collection_stats::{CollectionStats, Insight, InsightTag, derive_insights_with_target, format_percent, yearly_summary};
use leptos::prelude::*;
use shared::CONFIG;

use super::Section;

/// Icon and color class for an insight category
fn tag_style(tag: InsightTag) -> (&'static str, &'static str) {
    match tag {
        InsightTag::Improvement => ("▲", "insight-success"),
        InsightTag::Decline => ("▼", "insight-error"),
        InsightTag::Growth => ("✓", "insight-success"),
        InsightTag::Reduction | InsightTag::Warning => ("⚠", "insight-warning"),
    }
}

fn insight_item(insight: Insight) -> impl IntoView {
    let (icon, class) = tag_style(insight.tag());
    view! {
        <li class=format!("insight {}", class) data-tag=insight.tag().as_str()>
            <span class="insight-icon">{icon}</span>
            <span class="insight-text">{insight.message()}</span>
        </li>
    }
}

/// Yearly average efficiency, derived insights and fixed recommendations
#[component]
pub fn InsightsPanel(stats: CollectionStats) -> impl IntoView {
    let summary = yearly_summary(&stats, CONFIG.years);
    let insights = derive_insights_with_target(
        &stats,
        CONFIG.comparison.from,
        CONFIG.comparison.to,
        CONFIG.efficiency_target,
    );

    view! {
        <Section id="insights" title="Insights de Rendimiento">
            <div class="insights-subtitle">"Eficiencia Promedio Anual"</div>
            <div class="yearly-efficiency">
                {summary
                    .into_iter()
                    .map(|year| {
                        view! {
                            <span>{year.year} ": " {format_percent(year.average_efficiency, 2)}</span>
                        }
                    })
                    .collect_view()}
            </div>

            <hr class="divider" />

            <ul class="insights">{insights.into_iter().map(insight_item).collect_view()}</ul>

            <div class="insights-subtitle">"Recomendaciones"</div>
            <ul class="recommendations">
                {CONFIG
                    .recommendations
                    .iter()
                    .map(|text| {
                        view! {
                            <li>
                                <span class="recommendation-icon">"✓"</span>
                                {*text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Section>
    }
}

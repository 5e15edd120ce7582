//! Report generation (console tables and CSV export)

use anyhow::{Context, Result};
use collection_stats::{
    CollectionStats, Insight, InsightTag, Metric, MonthlyRow, TimeWindow, YearSummary, build_monthly_series,
    derive_insights_with_target, format_currency, format_percent, window_slice, yearly_summary,
};
use csv::Writer;
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// One line of the yearly summary table
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Año")]
    pub year: String,
    #[tabled(rename = "Meses")]
    pub months: usize,
    #[tabled(rename = "Eficiencia prom.")]
    pub efficiency: String,
    #[tabled(rename = "Cobrado")]
    pub collected: String,
    #[tabled(rename = "Por cobrar")]
    pub due: String,
    #[tabled(rename = "Recuperación")]
    pub recovery: String,
}

impl From<&YearSummary> for SummaryRow {
    fn from(summary: &YearSummary) -> Self {
        Self {
            year: summary.year.clone(),
            months: summary.months_reported,
            efficiency: format_percent(summary.average_efficiency, 2),
            collected: format_currency(summary.total_collected),
            due: format_currency(summary.total_due),
            recovery: summary
                .recovery_ratio()
                .map(|ratio| format_percent(ratio, 1))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn summary_rows(stats: &CollectionStats, years: &[&str]) -> Vec<SummaryRow> {
    yearly_summary(stats, years).iter().map(SummaryRow::from).collect()
}

/// Print the yearly summary table
pub fn print_summary(stats: &CollectionStats, years: &[&str]) {
    let rows = summary_rows(stats, years);
    println!("\nResumen anual de cobranza");
    println!("{}\n", Table::new(rows).with(Style::markdown()));
}

fn insight_marker(tag: InsightTag) -> &'static str {
    match tag {
        InsightTag::Improvement => "[+]",
        InsightTag::Growth => "[ok]",
        InsightTag::Decline => "[-]",
        InsightTag::Reduction | InsightTag::Warning => "[!]",
    }
}

/// Insight lines, one per insight, prefixed with a marker for its category
pub fn insight_lines(insights: &[Insight]) -> Vec<String> {
    insights
        .iter()
        .map(|insight| format!("{} {}", insight_marker(insight.tag()), insight))
        .collect()
}

/// Print insights comparing `to` against `from`, followed by the recommendations
pub fn print_insights(stats: &CollectionStats, from: &str, to: &str, target: f64, recommendations: &[&str]) {
    let insights = derive_insights_with_target(stats, from, to, target);

    println!("\nInsights de rendimiento ({} vs {})", to, from);
    println!("{}", "-".repeat(60));
    for line in insight_lines(&insights) {
        println!("  {}", line);
    }

    println!("\nRecomendaciones");
    println!("{}", "-".repeat(60));
    for recommendation in recommendations {
        println!("  - {}", recommendation);
    }
    println!();
}

fn format_cell(metric: Metric, value: Option<f64>) -> String {
    match (metric, value) {
        (_, None) => "-".to_string(),
        (Metric::Efficiency, Some(v)) => format_percent(v, 2),
        (Metric::Collected | Metric::Due, Some(v)) => format_currency(v),
    }
}

/// Monthly series as a markdown table, one column per year.
/// Months without a record show `-` rather than a zero.
pub fn series_table(rows: &[MonthlyRow], years: &[&str], metric: Metric) -> String {
    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Mes".to_string()).chain(years.iter().map(|y| y.to_string())));

    for row in rows {
        builder.push_record(
            std::iter::once(row.label.to_string())
                .chain(row.cells().iter().map(|(_, value)| format_cell(metric, *value))),
        );
    }

    builder.build().with(Style::markdown()).to_string()
}

/// Print the monthly series of `metric`, trimmed to `window`
pub fn print_series(stats: &CollectionStats, years: &[&str], metric: Metric, window: TimeWindow) {
    let series = build_monthly_series(stats, years, metric);
    let rows = window_slice(&series, window);

    println!("\n{} mensual ({})", metric.label(), window.label());
    println!("{}\n", series_table(rows, years, metric));
}

/// Write the 12-month series of `metric` to CSV; returns the number of data rows.
/// Missing cells are left empty so they stay distinguishable from real zeros.
pub fn export_series_csv(path: &Path, stats: &CollectionStats, years: &[&str], metric: Metric) -> Result<usize> {
    let series = build_monthly_series(stats, years, metric);
    let mut wtr = Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;

    // Header
    wtr.write_record(std::iter::once("Month").chain(years.iter().copied()))?;

    for row in &series {
        let mut record = vec![row.month.to_string()];
        record.extend(row.cells().iter().map(|(_, value)| match value {
            Some(value) => format!("{:.2}", value),
            None => String::new(),
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(series.len())
}

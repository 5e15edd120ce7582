//! Per-year reductions

use crate::model::{CollectionStats, Metric};

/// Mean of `metric` over the year's records, or 0 for an absent or empty year.
/// Records missing the metric count as 0 but still count toward the denominator.
pub fn yearly_average(stats: &CollectionStats, year: &str, metric: Metric) -> f64 {
    let records = stats.records(year);
    if records.is_empty() {
        return 0.0;
    }
    yearly_total(stats, year, metric) / records.len() as f64
}

/// Sum of `metric` over the year's records, or 0 for an absent year
pub fn yearly_total(stats: &CollectionStats, year: &str, metric: Metric) -> f64 {
    stats
        .records(year)
        .iter()
        .map(|r| metric.of(r).unwrap_or(0.0))
        .sum()
}

/// Headline numbers for one year
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: String,
    /// Distinct calendar months with a record
    pub months_reported: usize,
    pub average_efficiency: f64,
    pub total_collected: f64,
    pub total_due: f64,
}

impl YearSummary {
    /// Collected as a percentage of due; `None` when nothing was due
    pub fn recovery_ratio(&self) -> Option<f64> {
        (self.total_due > 0.0).then(|| self.total_collected / self.total_due * 100.0)
    }
}

pub fn yearly_summary(stats: &CollectionStats, years: &[&str]) -> Vec<YearSummary> {
    years
        .iter()
        .map(|&year| {
            let mut months: Vec<u32> = stats
                .records(year)
                .iter()
                .filter_map(|r| r.month)
                .filter(|m| (1..=12).contains(m))
                .collect();
            months.sort_unstable();
            months.dedup();

            YearSummary {
                year: year.to_string(),
                months_reported: months.len(),
                average_efficiency: yearly_average(stats, year, Metric::Efficiency),
                total_collected: yearly_total(stats, year, Metric::Collected),
                total_due: yearly_total(stats, year, Metric::Due),
            }
        })
        .collect()
}

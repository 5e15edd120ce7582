//! Month-indexed series for charting

use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::StatsError;
use crate::model::{CollectionStats, Metric};

pub const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// One calendar month across the requested years
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    /// 1-based calendar month
    pub month: u32,
    pub label: &'static str,
    cells: Vec<(String, Option<f64>)>,
}

impl MonthlyRow {
    /// Raw cell: `None` when the year or month has no record
    pub fn get(&self, year: &str) -> Option<f64> {
        self.cells.iter().find(|(y, _)| y == year).and_then(|(_, v)| *v)
    }

    /// Cell with missing data filled as zero, for charting
    pub fn value(&self, year: &str) -> f64 {
        self.get(year).unwrap_or(0.0)
    }

    /// `(year, value)` pairs in the order the years were requested
    pub fn cells(&self) -> &[(String, Option<f64>)] {
        &self.cells
    }
}

/// Build the 12-row, calendar-ordered series of `metric` for `years`.
///
/// When a year lists the same month more than once the first record wins.
pub fn build_monthly_series(stats: &CollectionStats, years: &[&str], metric: Metric) -> Vec<MonthlyRow> {
    MONTH_LABELS
        .into_iter()
        .zip(1u32..)
        .map(|(label, month)| {
            let cells = years
                .iter()
                .map(|year| {
                    let value = stats
                        .records(year)
                        .iter()
                        .find(|r| r.month == Some(month))
                        .and_then(|r| metric.of(r));
                    (year.to_string(), value)
                })
                .collect();

            MonthlyRow { month, label, cells }
        })
        .collect()
}

/// Trailing range of months to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    All,
    Last(NonZeroUsize),
}

impl TimeWindow {
    pub fn last(months: usize) -> Result<Self, StatsError> {
        NonZeroUsize::new(months)
            .map(TimeWindow::Last)
            .ok_or_else(|| StatsError::InvalidWindow(months.to_string()))
    }

    /// Toggle label: "3M", "6M", "Todo"
    pub fn label(self) -> String {
        match self {
            TimeWindow::All => "Todo".to_string(),
            TimeWindow::Last(n) => format!("{}M", n),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("todo") {
            return Ok(TimeWindow::All);
        }

        let digits = s.strip_suffix(|c: char| c == 'm' || c == 'M').unwrap_or(s);
        let months: usize = digits.parse().map_err(|_| StatsError::InvalidWindow(s.to_string()))?;
        TimeWindow::last(months).map_err(|_| StatsError::InvalidWindow(s.to_string()))
    }
}

/// Last `n` rows of `series` (all of them when `n` exceeds its length)
pub fn window_slice<T>(series: &[T], window: TimeWindow) -> &[T] {
    match window {
        TimeWindow::All => series,
        TimeWindow::Last(n) => &series[series.len().saturating_sub(n.get())..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MonthlyRecord;

    fn stats() -> CollectionStats {
        CollectionStats::new()
            .with_year(
                "2023",
                vec![
                    MonthlyRecord::new(12, 90.0, 900.0),
                    MonthlyRecord::new(1, 60.0, 1000.0),
                    MonthlyRecord::new(6, 70.0, 500.0),
                ],
            )
            .with_year("2024", vec![MonthlyRecord::new(1, 75.0, 1500.0)])
    }

    #[test]
    fn test_series_has_twelve_rows_in_calendar_order() {
        let series = build_monthly_series(&stats(), &["2023", "2024"], Metric::Efficiency);

        assert_eq!(series.len(), 12);
        assert_eq!(series.iter().map(|r| r.month).collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
        assert_eq!(series[0].label, "Ene");
        assert_eq!(series[11].label, "Dic");
    }

    #[test]
    fn test_series_picks_metric_per_month() {
        let series = build_monthly_series(&stats(), &["2023", "2024"], Metric::Collected);

        assert_eq!(series[0].get("2023"), Some(1000.0));
        assert_eq!(series[0].get("2024"), Some(1500.0));
        assert_eq!(series[5].get("2023"), Some(500.0));
        assert_eq!(series[11].get("2023"), Some(900.0));
    }

    #[test]
    fn test_missing_month_is_none_and_charts_as_zero() {
        let series = build_monthly_series(&stats(), &["2023"], Metric::Efficiency);

        assert_eq!(series[1].get("2023"), None);
        assert_eq!(series[1].value("2023"), 0.0);
    }

    #[test]
    fn test_absent_year_fills_every_month_with_zero() {
        let series = build_monthly_series(&stats(), &["2023", "2025"], Metric::Efficiency);

        assert!(series.iter().all(|row| row.get("2025").is_none()));
        assert!(series.iter().all(|row| row.value("2025") == 0.0));
    }

    #[test]
    fn test_duplicate_month_first_record_wins() {
        let stats = CollectionStats::new().with_year(
            "2024",
            vec![MonthlyRecord::new(2, 40.0, 100.0), MonthlyRecord::new(2, 99.0, 999.0)],
        );
        let series = build_monthly_series(&stats, &["2024"], Metric::Efficiency);

        assert_eq!(series[1].get("2024"), Some(40.0));
    }

    #[test]
    fn test_record_without_month_never_matches() {
        let orphan = MonthlyRecord {
            month: None,
            ..MonthlyRecord::new(1, 50.0, 10.0)
        };
        let stats = CollectionStats::new().with_year("2024", vec![orphan]);
        let series = build_monthly_series(&stats, &["2024"], Metric::Collected);

        assert!(series.iter().all(|row| row.get("2024").is_none()));
    }

    #[test]
    fn test_cells_follow_requested_year_order() {
        let series = build_monthly_series(&stats(), &["2024", "2023"], Metric::Efficiency);
        let years: Vec<&str> = series[0].cells().iter().map(|(y, _)| y.as_str()).collect();
        assert_eq!(years, vec!["2024", "2023"]);
    }

    #[test]
    fn test_window_all_is_identity() {
        let series = build_monthly_series(&stats(), &["2023"], Metric::Efficiency);
        assert_eq!(window_slice(&series, TimeWindow::All), series.as_slice());
    }

    #[test]
    fn test_window_returns_trailing_rows() {
        let series = build_monthly_series(&stats(), &["2023"], Metric::Efficiency);

        for n in 1..=20 {
            let window = window_slice(&series, TimeWindow::last(n).unwrap());
            assert_eq!(window.len(), n.min(12));
            assert_eq!(window.last().map(|r| r.month), Some(12));
        }

        let last3 = window_slice(&series, TimeWindow::last(3).unwrap());
        assert_eq!(last3.iter().map(|r| r.label).collect::<Vec<_>>(), vec!["Oct", "Nov", "Dic"]);
    }

    #[test]
    fn test_zero_window_is_rejected() {
        assert_eq!(TimeWindow::last(0), Err(StatsError::InvalidWindow("0".to_string())));
    }

    #[test]
    fn test_window_parsing_and_labels() {
        assert_eq!("all".parse::<TimeWindow>(), Ok(TimeWindow::All));
        assert_eq!("Todo".parse::<TimeWindow>(), Ok(TimeWindow::All));
        assert_eq!("6".parse::<TimeWindow>(), TimeWindow::last(6));
        assert_eq!("3M".parse::<TimeWindow>(), TimeWindow::last(3));
        assert!("0".parse::<TimeWindow>().is_err());
        assert!("-2".parse::<TimeWindow>().is_err());
        assert!("soon".parse::<TimeWindow>().is_err());

        assert_eq!(TimeWindow::All.label(), "Todo");
        assert_eq!(TimeWindow::last(3).unwrap().label(), "3M");
    }
}

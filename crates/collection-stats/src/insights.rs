//! Year-over-year performance insights

use std::fmt;

use crate::model::{CollectionStats, Metric};
use crate::yearly::{yearly_average, yearly_total};

/// Efficiency (percent) below which the newer year gets a warning
pub const EFFICIENCY_TARGET: f64 = 70.0;

/// Visual category of an insight; the UI maps it to an icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightTag {
    Improvement,
    Decline,
    Growth,
    Reduction,
    Warning,
}

impl InsightTag {
    pub fn as_str(self) -> &'static str {
        match self {
            InsightTag::Improvement => "improvement",
            InsightTag::Decline => "decline",
            InsightTag::Growth => "growth",
            InsightTag::Reduction => "reduction",
            InsightTag::Warning => "warning",
        }
    }
}

impl fmt::Display for InsightTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observation comparing a baseline year with a more recent one.
/// All deltas and rates are non-negative percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Insight {
    Improvement { delta: f64 },
    Decline { delta: f64 },
    Growth { rate: f64 },
    Reduction { rate: f64 },
    BelowTarget { efficiency: f64, target: f64 },
}

impl Insight {
    pub fn tag(&self) -> InsightTag {
        match self {
            Insight::Improvement { .. } => InsightTag::Improvement,
            Insight::Decline { .. } => InsightTag::Decline,
            Insight::Growth { .. } => InsightTag::Growth,
            Insight::Reduction { .. } => InsightTag::Reduction,
            Insight::BelowTarget { .. } => InsightTag::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Insight::Improvement { delta } => {
                format!("Mejora en la eficiencia de cobranza del {:.2}% respecto al año anterior", delta)
            }
            Insight::Decline { delta } => {
                format!("Disminución en la eficiencia de cobranza del {:.2}% respecto al año anterior", delta)
            }
            Insight::Growth { rate } => format!("Incremento del {:.2}% en el monto total cobrado", rate),
            Insight::Reduction { rate } => format!("Reducción del {:.2}% en el monto total cobrado", rate),
            Insight::BelowTarget { target, .. } => {
                format!("La eficiencia de cobranza está por debajo del objetivo del {}%", target)
            }
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Percentage change from `from` to `to`; `None` when `from` is zero
pub fn growth_rate(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from * 100.0).filter(|rate| rate.is_finite())
}

/// Compare `year_to` against the baseline `year_from` with the default 70% target
pub fn derive_insights(stats: &CollectionStats, year_from: &str, year_to: &str) -> Vec<Insight> {
    derive_insights_with_target(stats, year_from, year_to, EFFICIENCY_TARGET)
}

/// Efficiency change, collected-amount change, then a warning when the newer
/// year's efficiency is strictly below `target`.
///
/// A zero baseline total has no defined growth rate and is reported as a 0% reduction.
pub fn derive_insights_with_target(
    stats: &CollectionStats,
    year_from: &str,
    year_to: &str,
    target: f64,
) -> Vec<Insight> {
    let eff_from = yearly_average(stats, year_from, Metric::Efficiency);
    let eff_to = yearly_average(stats, year_to, Metric::Efficiency);
    let total_from = yearly_total(stats, year_from, Metric::Collected);
    let total_to = yearly_total(stats, year_to, Metric::Collected);

    let mut insights = Vec::with_capacity(3);

    if eff_to > eff_from {
        insights.push(Insight::Improvement {
            delta: eff_to - eff_from,
        });
    } else {
        insights.push(Insight::Decline {
            delta: eff_from - eff_to,
        });
    }

    let rate = growth_rate(total_from, total_to).unwrap_or(0.0);
    if rate > 0.0 {
        insights.push(Insight::Growth { rate });
    } else {
        insights.push(Insight::Reduction { rate: rate.abs() });
    }

    if eff_to < target {
        insights.push(Insight::BelowTarget {
            efficiency: eff_to,
            target,
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MonthlyRecord;

    fn two_years(eff_2024: f64, total_2024: f64) -> CollectionStats {
        CollectionStats::new()
            .with_year("2023", vec![MonthlyRecord::new(1, 60.0, 1000.0)])
            .with_year("2024", vec![MonthlyRecord::new(1, eff_2024, total_2024)])
    }

    fn tags(insights: &[Insight]) -> Vec<InsightTag> {
        insights.iter().map(Insight::tag).collect()
    }

    #[test]
    fn test_improvement_and_growth_without_warning() {
        let insights = derive_insights(&two_years(75.0, 1500.0), "2023", "2024");

        assert_eq!(insights, vec![Insight::Improvement { delta: 15.0 }, Insight::Growth { rate: 50.0 }]);
        assert_eq!(
            insights[0].message(),
            "Mejora en la eficiencia de cobranza del 15.00% respecto al año anterior"
        );
        assert_eq!(insights[1].message(), "Incremento del 50.00% en el monto total cobrado");
    }

    #[test]
    fn test_decline_with_warning() {
        let stats = CollectionStats::new()
            .with_year("2023", vec![MonthlyRecord::new(1, 72.0, 1000.0)])
            .with_year("2024", vec![MonthlyRecord::new(1, 65.0, 1500.0)]);
        let insights = derive_insights(&stats, "2023", "2024");

        assert_eq!(
            tags(&insights),
            vec![InsightTag::Decline, InsightTag::Growth, InsightTag::Warning]
        );
        assert_eq!(insights[0], Insight::Decline { delta: 7.0 });
        assert_eq!(
            insights[2].message(),
            "La eficiencia de cobranza está por debajo del objetivo del 70%"
        );
    }

    #[test]
    fn test_below_target_even_when_improving() {
        let insights = derive_insights(&two_years(65.0, 1500.0), "2023", "2024");

        assert_eq!(tags(&insights), vec![InsightTag::Improvement, InsightTag::Growth, InsightTag::Warning]);
        assert_eq!(
            insights[2],
            Insight::BelowTarget {
                efficiency: 65.0,
                target: 70.0
            }
        );
    }

    #[test]
    fn test_exactly_target_does_not_warn() {
        let insights = derive_insights(&two_years(70.0, 1500.0), "2023", "2024");
        assert_eq!(insights.len(), 2);
    }

    #[test]
    fn test_equal_efficiency_is_zero_decline() {
        let insights = derive_insights(&two_years(60.0, 1000.0), "2023", "2024");

        assert_eq!(insights[0], Insight::Decline { delta: 0.0 });
        assert_eq!(insights[1], Insight::Reduction { rate: 0.0 });
    }

    #[test]
    fn test_reduction_reports_absolute_rate() {
        let insights = derive_insights(&two_years(75.0, 750.0), "2023", "2024");

        assert_eq!(insights[1], Insight::Reduction { rate: 25.0 });
        assert_eq!(insights[1].message(), "Reducción del 25.00% en el monto total cobrado");
    }

    #[test]
    fn test_zero_baseline_total_is_zero_reduction() {
        let stats = CollectionStats::new()
            .with_year("2023", vec![MonthlyRecord::new(1, 80.0, 0.0)])
            .with_year("2024", vec![MonthlyRecord::new(1, 85.0, 1500.0)]);
        let insights = derive_insights(&stats, "2023", "2024");

        assert_eq!(insights[1], Insight::Reduction { rate: 0.0 });
        assert!(insights.iter().all(|i| !i.message().contains("inf") && !i.message().contains("NaN")));
    }

    #[test]
    fn test_missing_years_compare_as_zero() {
        let insights = derive_insights(&CollectionStats::new(), "2024", "2025");

        assert_eq!(tags(&insights), vec![InsightTag::Decline, InsightTag::Reduction, InsightTag::Warning]);
    }

    #[test]
    fn test_custom_target() {
        let insights = derive_insights_with_target(&two_years(75.0, 1500.0), "2023", "2024", 80.0);
        assert_eq!(insights.last().map(Insight::tag), Some(InsightTag::Warning));
        assert!(insights[2].message().ends_with("objetivo del 80%"));
    }

    #[test]
    fn test_always_two_or_three_insights() {
        for eff in [0.0, 50.0, 69.99, 70.0, 70.01, 100.0] {
            for total in [0.0, 500.0, 1000.0, 2000.0] {
                let insights = derive_insights(&two_years(eff, total), "2023", "2024");
                let expected = if eff < EFFICIENCY_TARGET { 3 } else { 2 };
                assert_eq!(insights.len(), expected, "eff={} total={}", eff, total);
            }
        }
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(growth_rate(1000.0, 1500.0), Some(50.0));
        assert_eq!(growth_rate(1000.0, 500.0), Some(-50.0));
        assert_eq!(growth_rate(0.0, 1500.0), None);
        assert_eq!(growth_rate(0.0, 0.0), None);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(InsightTag::Warning.to_string(), "warning");
        assert_eq!(InsightTag::Reduction.as_str(), "reduction");
    }
}

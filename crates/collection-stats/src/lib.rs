//! Collection statistics: payload model, monthly aggregation and
//! year-over-year performance insights.
//!
//! Everything here is pure. Fetching lives in the web app and the report CLI.

mod error;
mod format;
mod insights;
mod load_state;
mod model;
mod series;
mod yearly;

pub use error::{FetchError, GENERIC_ERROR_MESSAGE, StatsError};
pub use format::{format_currency, format_percent};
pub use insights::{EFFICIENCY_TARGET, Insight, InsightTag, derive_insights, derive_insights_with_target, growth_rate};
pub use load_state::LoadState;
pub use model::{CollectionStats, Metric, MonthlyRecord, STATS_PATH};
pub use series::{MONTH_LABELS, MonthlyRow, TimeWindow, build_monthly_series, window_slice};
pub use yearly::{YearSummary, yearly_average, yearly_summary, yearly_total};

//! Collection statistics payload as served by `GET /collection-stats/`
//!
//! The backend groups collection rows by the month of the bank collection
//! date, so `month` is null for rows without one. Decimal columns come out
//! either as JSON numbers or as decimal strings depending on the encoder.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{FetchError, StatsError};

/// One month of aggregated collection results for a year
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonthlyRecord {
    #[serde(default)]
    pub month: Option<u32>,

    /// Average collection efficiency, in percent
    #[serde(rename = "promedio_eficiencia", default, deserialize_with = "lenient_amount")]
    pub average_efficiency: Option<f64>,

    /// Amount collected (MXN)
    #[serde(rename = "total_cobrado", default, deserialize_with = "lenient_amount")]
    pub total_collected: Option<f64>,

    /// Amount that was due for collection (MXN)
    #[serde(rename = "total_por_cobrar", default, deserialize_with = "lenient_amount")]
    pub total_due: Option<f64>,
}

impl MonthlyRecord {
    pub fn new(month: u32, average_efficiency: f64, total_collected: f64) -> Self {
        Self {
            month: Some(month),
            average_efficiency: Some(average_efficiency),
            total_collected: Some(total_collected),
            total_due: None,
        }
    }

    pub fn with_due(mut self, total_due: f64) -> Self {
        self.total_due = Some(total_due);
        self
    }
}

/// Accept numbers, decimal strings and null; anything unparseable is absent
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Full payload: year key ("2022", "2023", ...) to that year's monthly records
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CollectionStats {
    years: BTreeMap<String, Vec<MonthlyRecord>>,
}

/// Path of the statistics endpoint, relative to the API base URL
pub const STATS_PATH: &str = "collection-stats/";

impl CollectionStats {
    /// Full endpoint URL for an API base, with or without a trailing slash
    pub fn endpoint(base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), STATS_PATH)
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a response body
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn insert(&mut self, year: impl Into<String>, records: Vec<MonthlyRecord>) {
        self.years.insert(year.into(), records);
    }

    pub fn with_year(mut self, year: impl Into<String>, records: Vec<MonthlyRecord>) -> Self {
        self.insert(year, records);
        self
    }

    /// Records for `year`; an absent year has an empty history
    pub fn records(&self, year: &str) -> &[MonthlyRecord] {
        self.years.get(year).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_year(&self, year: &str) -> bool {
        self.years.contains_key(year)
    }

    /// Year keys in ascending order
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    /// The two most recent years present, oldest first
    pub fn latest_pair(&self) -> Option<(&str, &str)> {
        let mut recent = self.years.keys().rev().map(String::as_str);
        let to = recent.next()?;
        let from = recent.next()?;
        Some((from, to))
    }

    pub fn is_empty(&self) -> bool {
        self.years.values().all(Vec::is_empty)
    }
}

/// Which monthly value to read from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Efficiency,
    Collected,
    Due,
}

impl Metric {
    pub fn of(self, record: &MonthlyRecord) -> Option<f64> {
        match self {
            Metric::Efficiency => record.average_efficiency,
            Metric::Collected => record.total_collected,
            Metric::Due => record.total_due,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Efficiency => "Eficiencia",
            Metric::Collected => "Cobrado",
            Metric::Due => "Por cobrar",
        }
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "efficiency" | "eficiencia" => Ok(Metric::Efficiency),
            "collected" | "cobrado" => Ok(Metric::Collected),
            "due" | "por-cobrar" => Ok(Metric::Due),
            _ => Err(StatsError::UnknownMetric(s.to_string())),
        }
    }
}

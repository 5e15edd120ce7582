//! Configuration for the collection report tool

use anyhow::{Context, Result};
use collection_stats::CollectionStats;
use serde::Deserialize;
use shared::CONFIG;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

// =============================================================================
// File-based Configuration (cobranza.toml)
// =============================================================================

/// Configuration loaded from cobranza.toml; every key is optional
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// API section
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the collections API (without `/collection-stats/`)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Dashboard section
#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfig {
    /// Years shown in summary and series tables
    pub years: Option<Vec<String>>,
    /// Baseline year for insights
    pub compare_from: Option<String>,
    /// Year compared against the baseline
    pub compare_to: Option<String>,
    /// Efficiency (percent) below which insights warn
    pub efficiency_target: Option<f64>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Failed to parse cobranza.toml. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Incorrect data types (timeout_secs and efficiency_target are numbers, years is a list of strings)\n\n\
             See cobranza.toml.example for the expected format."
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Resolved settings after applying file, environment and flag overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub years: Vec<String>,
    pub compare_from: String,
    pub compare_to: String,
    pub efficiency_target: f64,
}

impl Config {
    /// API URL precedence: `--api-url`, then `API_URL`, then the file, then the built-in default.
    /// A blank value at any level is skipped.
    pub fn resolve(file: &FileConfig, env_api_url: Option<String>, flag_api_url: Option<String>) -> Self {
        let dashboard = &file.dashboard;

        Self {
            api_url: non_blank(flag_api_url)
                .or_else(|| non_blank(env_api_url))
                .or_else(|| non_blank(file.api.base_url.clone()))
                .unwrap_or_else(|| CONFIG.api_url.to_string()),

            timeout: file
                .api
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_millis(CONFIG.fetch_timeout_ms.into())),

            years: dashboard
                .years
                .clone()
                .unwrap_or_else(|| CONFIG.years.iter().map(|y| y.to_string()).collect()),

            compare_from: dashboard
                .compare_from
                .clone()
                .unwrap_or_else(|| CONFIG.comparison.from.to_string()),
            compare_to: dashboard
                .compare_to
                .clone()
                .unwrap_or_else(|| CONFIG.comparison.to.to_string()),

            efficiency_target: dashboard.efficiency_target.unwrap_or(CONFIG.efficiency_target),
        }
    }

    pub fn year_refs(&self) -> Vec<&str> {
        self.years.iter().map(String::as_str).collect()
    }

    /// Years to compare for insights.
    ///
    /// Explicit `from`/`to` always win. Without them the configured pair is
    /// used, unless the payload lacks either year and has two others to offer.
    pub fn comparison_for(&self, stats: &CollectionStats, from: Option<String>, to: Option<String>) -> (String, String) {
        if from.is_some() || to.is_some() {
            return (
                from.unwrap_or_else(|| self.compare_from.clone()),
                to.unwrap_or_else(|| self.compare_to.clone()),
            );
        }

        if !(stats.contains_year(&self.compare_from) && stats.contains_year(&self.compare_to)) {
            if let Some((latest_from, latest_to)) = stats.latest_pair() {
                warn!(
                    configured_from = %self.compare_from,
                    configured_to = %self.compare_to,
                    "configured comparison years missing from payload, comparing {} to {}",
                    latest_from,
                    latest_to
                );
                return (latest_from.to_string(), latest_to.to_string());
            }
        }

        (self.compare_from.clone(), self.compare_to.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_stats::MonthlyRecord;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::resolve(&FileConfig::default(), None, None);

        assert_eq!(config.api_url, CONFIG.api_url);
        assert_eq!(config.timeout, Duration::from_millis(15_000));
        assert_eq!(config.year_refs(), CONFIG.years.to_vec());
        assert_eq!(config.compare_from, "2023");
        assert_eq!(config.compare_to, "2024");
        assert_eq!(config.efficiency_target, 70.0);
    }

    #[test]
    fn test_file_values() {
        let file = FileConfig::parse(
            r#"
            [api]
            base_url = "https://cobranza.example.mx/api"
            timeout_secs = 5

            [dashboard]
            years = ["2024", "2025"]
            compare_from = "2024"
            compare_to = "2025"
            efficiency_target = 80.0
            "#,
        )
        .unwrap();
        let config = Config::resolve(&file, None, None);

        assert_eq!(config.api_url, "https://cobranza.example.mx/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.years, vec!["2024", "2025"]);
        assert_eq!((config.compare_from.as_str(), config.compare_to.as_str()), ("2024", "2025"));
        assert_eq!(config.efficiency_target, 80.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = FileConfig::parse("[dashboard]\nefficiency_target = 65.5\n").unwrap();
        let config = Config::resolve(&file, None, None);

        assert_eq!(config.efficiency_target, 65.5);
        assert_eq!(config.api_url, CONFIG.api_url);
        assert_eq!(config.compare_to, "2024");
    }

    #[test]
    fn test_api_url_precedence() {
        let file = FileConfig::parse("[api]\nbase_url = \"http://file\"\n").unwrap();

        assert_eq!(Config::resolve(&file, None, None).api_url, "http://file");
        assert_eq!(Config::resolve(&file, Some("http://env".into()), None).api_url, "http://env");
        assert_eq!(
            Config::resolve(&file, Some("http://env".into()), Some("http://flag".into())).api_url,
            "http://flag"
        );
        assert_eq!(Config::resolve(&file, Some("  ".into()), None).api_url, "http://file");
    }

    #[test]
    fn test_blank_flag_falls_through_to_env() {
        let file = FileConfig::parse("[api]\nbase_url = \"http://file\"\n").unwrap();

        assert_eq!(
            Config::resolve(&file, Some("http://env".into()), Some("".into())).api_url,
            "http://env"
        );
        assert_eq!(Config::resolve(&file, None, Some(" ".into())).api_url, "http://file");
    }

    #[test]
    fn test_blank_file_url_uses_default() {
        let file = FileConfig::parse("[api]\nbase_url = \"\"\n").unwrap();

        assert_eq!(Config::resolve(&file, None, None).api_url, CONFIG.api_url);
        assert_eq!(Config::resolve(&file, Some("".into()), Some("".into())).api_url, CONFIG.api_url);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(FileConfig::parse("[api]\ntimeout_secs = \"soon\"\n").is_err());
        assert!(FileConfig::parse("[dashboard\n").is_err());
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = FileConfig::load(Path::new("/nonexistent/cobranza.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cobranza.toml"));
    }

    fn stats(years: &[&str]) -> CollectionStats {
        years.iter().fold(CollectionStats::new(), |stats, year| {
            stats.with_year(*year, vec![MonthlyRecord::new(1, 80.0, 100.0)])
        })
    }

    #[test]
    fn test_comparison_uses_configured_pair_when_present() {
        let config = Config::resolve(&FileConfig::default(), None, None);
        let pair = config.comparison_for(&stats(&["2022", "2023", "2024", "2025"]), None, None);
        assert_eq!(pair, ("2023".to_string(), "2024".to_string()));
    }

    #[test]
    fn test_comparison_falls_back_to_latest_pair() {
        let config = Config::resolve(&FileConfig::default(), None, None);
        let pair = config.comparison_for(&stats(&["2025", "2026"]), None, None);
        assert_eq!(pair, ("2025".to_string(), "2026".to_string()));
    }

    #[test]
    fn test_comparison_explicit_years_win() {
        let config = Config::resolve(&FileConfig::default(), None, None);
        let payload = stats(&["2022", "2023"]);

        assert_eq!(
            config.comparison_for(&payload, Some("2022".into()), Some("2025".into())),
            ("2022".to_string(), "2025".to_string())
        );
        assert_eq!(
            config.comparison_for(&payload, None, Some("2025".into())),
            ("2023".to_string(), "2025".to_string())
        );
    }

    #[test]
    fn test_comparison_keeps_configured_pair_without_alternative() {
        let config = Config::resolve(&FileConfig::default(), None, None);
        let pair = config.comparison_for(&stats(&["2024"]), None, None);
        assert_eq!(pair, ("2023".to_string(), "2024".to_string()));
    }
}

/// Static dashboard configuration
pub struct Config {
    pub title: &'static str,

    /// Base URL of the collections API, baked in at build time from `API_URL`
    pub api_url: &'static str,
    pub fetch_timeout_ms: u32,

    /// Years shown in the charts and the yearly efficiency header
    pub years: &'static [&'static str],
    pub comparison: Comparison,
    pub efficiency_target: f64,

    /// Trailing-month windows offered next to "all" on the efficiency chart
    pub window_months: &'static [usize],
    pub series_colors: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Pair of years the insights panel compares (`from` is the baseline)
pub struct Comparison {
    pub from: &'static str,
    pub to: &'static str,
}

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

pub static CONFIG: Config = Config {
    title: "Dashboard de Cobranza",

    api_url: match option_env!("API_URL") {
        Some(url) => url,
        None => DEFAULT_API_URL,
    },
    fetch_timeout_ms: 15_000,

    years: &["2022", "2023", "2024", "2025"],
    comparison: Comparison {
        from: "2023",
        to: "2024",
    },
    efficiency_target: 70.0,

    window_months: &[3, 6],
    series_colors: &["#8884d8", "#82ca9d", "#ffc658", "#ff7300"],

    recommendations: &[
        "Implementar seguimiento temprano de casos en riesgo",
        "Optimizar canales de comunicación con deudores",
        "Revisar y ajustar estrategias de cobranza según rendimiento",
    ],
};

impl Config {
    /// Color for the `index`-th series, cycling through the palette
    pub fn series_color(&self, index: usize) -> &'static str {
        self.series_colors[index % self.series_colors.len()]
    }
}

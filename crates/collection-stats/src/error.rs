use thiserror::Error;

/// Message shown to users for any failed load, whatever the cause
pub const GENERIC_ERROR_MESSAGE: &str = "Error al cargar los datos";

/// Failure while retrieving the collection statistics payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("no response after {0} ms")]
    Timeout(u32),
}

/// Invalid input to one of the aggregation helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("invalid time window '{0}': expected 'all' or a positive number of months")]
    InvalidWindow(String),

    #[error("unknown metric '{0}': expected efficiency, collected or due")]
    UnknownMetric(String),
}

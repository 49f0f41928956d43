use thiserror::Error;

/// Errors that can occur while loading or exporting reference data.
///
/// The forecasting engine itself is total: unmatched species, missing
/// predictor equations, and unrecognized equation forms all resolve to
/// documented fallbacks rather than errors. Only IO and configuration
/// loading can fail.
#[derive(Error, Debug)]
pub enum CarbonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

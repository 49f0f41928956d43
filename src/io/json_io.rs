use std::path::Path;

use crate::error::CarbonError;
use crate::models::ForecastResult;

/// Write a forecast result (series plus current-carbon estimate) to JSON.
pub fn write_forecast_json(
    result: &ForecastResult,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), CarbonError> {
    let content = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

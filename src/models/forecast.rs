use serde::{Deserialize, Serialize};

/// One simulated year of tree growth.
///
/// Emitted in strictly increasing `year_offset` order, starting at 0 for the
/// current state of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualGrowthPoint {
    /// Years from now (0 = current state)
    pub year_offset: u32,
    /// Inferred tree age at this year
    pub age: f64,
    /// Diameter at breast height in cm
    pub dbh: f64,
    /// Total height in m
    pub height: f64,
    /// Accumulated carbon storage in kg CO2e
    pub carbon_storage: f64,
    /// Carbon added this specific year in kg CO2e.
    /// Always 0 at year 0: year 0 reports the current state, so the first
    /// real delta is year 1 against the year-0 baseline.
    pub annual_sequestration: f64,
}

/// Result of a full growth forecast for one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One point per year, `horizon + 1` entries, year offsets dense from 0
    pub series: Vec<AnnualGrowthPoint>,
    /// Point estimate of current carbon storage in kg CO2e, computed from
    /// the measured diameter before any accumulation bookkeeping
    pub current_carbon: f64,
}

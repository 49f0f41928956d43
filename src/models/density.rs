use serde::{Deserialize, Serialize};

/// One row of the biomass density reference table.
///
/// Density enters the carbon formula as a multiplicative constant; one row
/// per species is expected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiomassDensity {
    /// Species code
    pub species_code: String,
    /// Scientific name
    pub scientific_name: String,
    /// Common name (e.g. "Red maple")
    pub common_name: String,
    /// Wood density in kg/m^3
    pub density: f64,
}

mod carbon;
mod catalog;
mod equation;
mod resolver;
mod simulator;

pub use carbon::{
    estimate_co2e, BIOMASS_EXPANSION_FACTOR, CARBON_FRACTION, CO2_PER_UNIT_CARBON,
    STEM_FORM_FACTOR,
};
pub use catalog::{build_catalog, build_catalog_with_config, signature_from_string, FALLBACK_IMAGE};
pub use equation::{evaluate, MIN_LOG_INPUT};
pub use resolver::{names_match, resolve, ResolvedSpecies};
pub use simulator::{forecast, forecast_with_config};

use crate::config::EngineConfig;
use crate::models::{BiomassDensity, ForecastResult, GrowthCoefficient, SpeciesInfo};

/// Unified API over one pair of reference tables.
///
/// Borrows the tables for its lifetime; every call is an independent,
/// side-effect-free computation, so a `Forecaster` can be shared freely
/// between threads.
pub struct Forecaster<'a> {
    densities: &'a [BiomassDensity],
    coefficients: &'a [GrowthCoefficient],
    config: EngineConfig,
}

impl<'a> Forecaster<'a> {
    /// Create a forecaster with default engine settings.
    pub fn new(densities: &'a [BiomassDensity], coefficients: &'a [GrowthCoefficient]) -> Self {
        Self::with_config(densities, coefficients, EngineConfig::default())
    }

    /// Create a forecaster with explicit engine settings.
    pub fn with_config(
        densities: &'a [BiomassDensity],
        coefficients: &'a [GrowthCoefficient],
        config: EngineConfig,
    ) -> Self {
        Self {
            densities,
            coefficients,
            config,
        }
    }

    /// Resolve a species name against the reference tables.
    pub fn resolve(&self, species_name: &str) -> ResolvedSpecies {
        resolve(species_name, self.densities, self.coefficients, &self.config)
    }

    /// Forecast growth and carbon storage for one tree.
    pub fn forecast(
        &self,
        species_name: &str,
        initial_dbh: f64,
        horizon_years: u32,
    ) -> ForecastResult {
        forecast_with_config(
            species_name,
            initial_dbh,
            horizon_years,
            self.densities,
            self.coefficients,
            &self.config,
        )
    }

    /// Build the deduplicated species catalog from the reference tables.
    pub fn catalog(&self) -> Vec<SpeciesInfo> {
        build_catalog_with_config(self.densities, self.coefficients, &self.config)
    }
}

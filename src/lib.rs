pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use config::EngineConfig;
pub use engine::{build_catalog, estimate_co2e, evaluate, forecast, resolve, Forecaster, ResolvedSpecies};
pub use error::CarbonError;
pub use models::{
    AnnualGrowthPoint, BiomassDensity, EquationForm, ForecastResult, GrowthCoefficient,
    SpeciesInfo,
};

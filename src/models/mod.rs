mod coefficient;
mod density;
mod forecast;
mod species;

pub use coefficient::{EquationForm, GrowthCoefficient};
pub use density::BiomassDensity;
pub use forecast::{AnnualGrowthPoint, ForecastResult};
pub use species::SpeciesInfo;

mod csv_io;
mod json_io;

pub use csv_io::{
    read_biomass_densities, read_biomass_densities_from_bytes, read_growth_coefficients,
    read_growth_coefficients_from_bytes, write_forecast_csv,
};
pub use json_io::write_forecast_json;

//! Point-in-time carbon estimate from tree dimensions and wood density.

/// Dimensionless taper correction applied to the cylinder volume.
pub const STEM_FORM_FACTOR: f64 = 0.45;

/// Expansion applied to stem biomass to account for roots and branches.
pub const BIOMASS_EXPANSION_FACTOR: f64 = 1.2;

/// Carbon fraction of dry biomass.
pub const CARBON_FRACTION: f64 = 0.5;

/// Mass ratio of CO2 to elemental carbon (44/12, rounded).
pub const CO2_PER_UNIT_CARBON: f64 = 3.6667;

/// Estimate the carbon-dioxide-equivalent mass (kg) stored by a tree of the
/// given diameter (cm), height (m), and wood density (kg/m^3).
///
/// Pure and total. The chain is: cylinder volume corrected by the stem form
/// factor, stem biomass from density, whole-tree biomass via the expansion
/// factor, carbon fraction, then the CO2/C mass ratio.
pub fn estimate_co2e(dbh_cm: f64, height_m: f64, density_kg_m3: f64) -> f64 {
    let dbh_m = dbh_cm / 100.0;
    let volume = std::f64::consts::PI * (dbh_m / 2.0).powi(2) * height_m * STEM_FORM_FACTOR;
    let biomass = volume * density_kg_m3 * BIOMASS_EXPANSION_FACTOR;
    let carbon = biomass * CARBON_FRACTION;
    carbon * CO2_PER_UNIT_CARBON
}

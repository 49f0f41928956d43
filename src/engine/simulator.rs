use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::carbon::estimate_co2e;
use crate::engine::equation::evaluate;
use crate::engine::resolver::resolve;
use crate::models::{AnnualGrowthPoint, BiomassDensity, ForecastResult, GrowthCoefficient};

/// Heuristic age per cm of DBH when no age equation exists for the species.
/// Sits between fast-growing (~0.8) and slow-growing (~1.5) rates.
const FALLBACK_AGE_PER_CM_DBH: f64 = 1.2;

/// A standing tree is at least one year old.
const MIN_INFERRED_AGE: f64 = 1.0;

/// Heuristic annual diameter growth in cm/year at age zero.
const FALLBACK_GROWTH_BASE: f64 = 1.5;

/// Heuristic growth-rate decline in cm/year per year of age.
const FALLBACK_GROWTH_DECLINE: f64 = 0.01;

/// Floor for the heuristic growth rate in cm/year.
const FALLBACK_GROWTH_FLOOR: f64 = 0.2;

/// Heuristic height (m) from diameter (cm) when no height equation exists.
fn fallback_height(dbh_cm: f64) -> f64 {
    2.0 + 0.5 * dbh_cm.powf(0.7)
}

/// Heuristic diameter growth rate (cm/year), slowing with age.
fn fallback_growth_rate(age: f64) -> f64 {
    (FALLBACK_GROWTH_BASE - age * FALLBACK_GROWTH_DECLINE).max(FALLBACK_GROWTH_FLOOR)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Forecast growth and carbon storage for one tree with default settings.
///
/// See [`forecast_with_config`] for the simulation contract.
pub fn forecast(
    species_name: &str,
    initial_dbh: f64,
    horizon_years: u32,
    densities: &[BiomassDensity],
    coefficients: &[GrowthCoefficient],
) -> ForecastResult {
    forecast_with_config(
        species_name,
        initial_dbh,
        horizon_years,
        densities,
        coefficients,
        &EngineConfig::default(),
    )
}

/// Forecast growth and carbon storage for one tree.
///
/// Never fails: every decision point (unmatched species, missing predictor
/// equation, unrecognized equation form) resolves to a documented fallback.
/// The simulation runs in two phases:
///
/// 1. Age inference: the species' age-from-DBH equation if present,
///    otherwise a DBH-proportional heuristic; floored at one year.
/// 2. Forward loop over year offsets 0..=horizon. Year 0 reports the
///    measured diameter exactly (never re-derived from the predictor, so the
///    series is anchored at the observation); later years predict diameter
///    from age and height from diameter, falling back to heuristics when a
///    predictor is missing.
///
/// The annual sequestration of each year is the increase in total carbon
/// over the previous year, clamped at zero. Year 0 compares the baseline to
/// itself and therefore always reports exactly 0; the first real delta is
/// year 1 against the year-0 baseline.
pub fn forecast_with_config(
    species_name: &str,
    initial_dbh: f64,
    horizon_years: u32,
    densities: &[BiomassDensity],
    coefficients: &[GrowthCoefficient],
    config: &EngineConfig,
) -> ForecastResult {
    let resolved = resolve(species_name, densities, coefficients, config);

    let age_eq = resolved.coefficients.iter().find(|c| c.predicts_age_from_dbh());
    let dbh_eq = resolved.coefficients.iter().find(|c| c.predicts_dbh_from_age());
    let height_eq = resolved
        .coefficients
        .iter()
        .find(|c| c.predicts_height_from_dbh());

    let current_age = match age_eq {
        Some(eq) => evaluate(&eq.equation_form, initial_dbh, eq),
        None => {
            debug!(species = species_name, "no age equation, using DBH heuristic");
            initial_dbh * FALLBACK_AGE_PER_CM_DBH
        }
    }
    .max(MIN_INFERRED_AGE);

    // Year-0 point estimate, reported as the tree's current carbon and used
    // as the baseline for the first annual delta.
    let initial_height = match height_eq {
        Some(eq) => evaluate(&eq.equation_form, initial_dbh, eq),
        None => fallback_height(initial_dbh),
    };
    let current_carbon = estimate_co2e(initial_dbh, initial_height, resolved.density);

    let capacity = horizon_years as usize + 1;
    let (series, _) = (0..=horizon_years).fold(
        (Vec::with_capacity(capacity), current_carbon),
        |(mut series, previous_carbon), year| {
            let sim_age = current_age + year as f64;

            let sim_dbh = if year == 0 {
                initial_dbh
            } else if let Some(eq) = dbh_eq {
                evaluate(&eq.equation_form, sim_age, eq)
            } else {
                initial_dbh + fallback_growth_rate(sim_age) * year as f64
            };

            let sim_height = match height_eq {
                Some(eq) => evaluate(&eq.equation_form, sim_dbh, eq),
                None => fallback_height(sim_dbh),
            };

            let total_carbon = estimate_co2e(sim_dbh, sim_height, resolved.density);
            let annual = (total_carbon - previous_carbon).max(0.0);

            series.push(AnnualGrowthPoint {
                year_offset: year,
                age: sim_age,
                dbh: round2(sim_dbh),
                height: round2(sim_height),
                carbon_storage: round2(total_carbon),
                annual_sequestration: round2(annual),
            });

            // Year 0 compares the baseline to itself; only later years carry
            // their own total forward.
            let carried = if year == 0 { previous_carbon } else { total_carbon };
            (series, carried)
        },
    );

    ForecastResult {
        series,
        current_carbon,
    }
}

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{BiomassDensity, GrowthCoefficient};

/// Outcome of resolving a free-text species name against the reference tables.
#[derive(Debug, Clone)]
pub struct ResolvedSpecies {
    /// Coefficient records for the matched species, or for the proxy species
    /// when nothing matched
    pub coefficients: Vec<GrowthCoefficient>,
    /// Wood density in kg/m^3, from the density table or the default
    pub density: f64,
    /// True when the proxy species' coefficients were substituted
    pub used_proxy: bool,
}

/// Tolerant name predicate: case-insensitive bidirectional substring
/// containment. Accepts both "Red maple" style free text and exact
/// scientific names; short names can produce false positives, which is an
/// accepted trade-off of the matching policy.
pub fn names_match(record_name: &str, query: &str) -> bool {
    let record = record_name.to_lowercase();
    let query = query.to_lowercase();
    record.contains(&query) || query.contains(&record)
}

/// Resolve a species name to its coefficient subset and wood density.
///
/// Coefficients match on scientific name; density matches on common or
/// scientific name, keeping the first match in table order. When no
/// coefficient record matches, the full coefficient set of the configured
/// proxy species (exact scientific name) stands in and `used_proxy` is set.
pub fn resolve(
    species_name: &str,
    densities: &[BiomassDensity],
    coefficients: &[GrowthCoefficient],
    config: &EngineConfig,
) -> ResolvedSpecies {
    let matched: Vec<GrowthCoefficient> = coefficients
        .iter()
        .filter(|g| names_match(&g.scientific_name, species_name))
        .cloned()
        .collect();

    let density = densities
        .iter()
        .find(|d| {
            names_match(&d.common_name, species_name)
                || names_match(&d.scientific_name, species_name)
        })
        .map(|d| d.density)
        .unwrap_or_else(|| {
            debug!(species = species_name, default = config.default_density, "no density record, using default");
            config.default_density
        });

    if matched.is_empty() {
        debug!(species = species_name, proxy = %config.proxy_species, "no coefficients, substituting proxy species");
        let proxy: Vec<GrowthCoefficient> = coefficients
            .iter()
            .filter(|g| g.scientific_name == config.proxy_species)
            .cloned()
            .collect();
        ResolvedSpecies {
            coefficients: proxy,
            density,
            used_proxy: true,
        }
    } else {
        ResolvedSpecies {
            coefficients: matched,
            density,
            used_proxy: false,
        }
    }
}

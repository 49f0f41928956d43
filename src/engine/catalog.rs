use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::models::{BiomassDensity, GrowthCoefficient, SpeciesInfo};

/// Image shown when an assigned species image fails to load at render time.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?auto=format&fit=crop&w=800&q=80";

/// Stable 32-bit string hash (shift-and-subtract, wrapping), reduced to
/// 0..1000. Deterministic across runs and platforms, so every species keeps
/// the same assigned image.
pub fn signature_from_string(value: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in value.chars() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(ch as i32);
    }
    hash.unsigned_abs() % 1000
}

fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn image_for(key: &str, common_name: &str, overrides: &BTreeMap<String, String>) -> String {
    if let Some(url) = overrides.get(key) {
        return url.clone();
    }
    let seed = format!("{key}-{}", slugify(common_name));
    format!(
        "https://picsum.photos/seed/{}/480/320",
        signature_from_string(&seed)
    )
}

/// Build a deduplicated species catalog from the two reference tables,
/// sorted by scientific name, using the default curated image overrides.
pub fn build_catalog(
    densities: &[BiomassDensity],
    coefficients: &[GrowthCoefficient],
) -> Vec<SpeciesInfo> {
    build_catalog_with_config(densities, coefficients, &EngineConfig::default())
}

/// Build the species catalog with explicit engine configuration.
///
/// Entries are keyed by lower-cased trimmed scientific name. The first-seen
/// common name for a key is retained; a later record supplies a common name
/// only when the existing entry lacks a distinct one. Each entry gets a
/// deterministic image from the hash of its name pair unless a curated
/// override exists.
pub fn build_catalog_with_config(
    densities: &[BiomassDensity],
    coefficients: &[GrowthCoefficient],
    config: &EngineConfig,
) -> Vec<SpeciesInfo> {
    let mut catalog: BTreeMap<String, SpeciesInfo> = BTreeMap::new();

    let mut add_species = |scientific_name: &str, common_name: Option<&str>| {
        let scientific_name = scientific_name.trim();
        if scientific_name.is_empty() {
            return;
        }

        let key = scientific_name.to_lowercase();
        if let Some(existing) = catalog.get_mut(&key) {
            // Only fill in a missing common name; never replace one
            if existing.common_name == existing.scientific_name {
                if let Some(common) = common_name {
                    if !common.trim().is_empty() {
                        existing.common_name = common.trim().to_string();
                    }
                }
            }
            return;
        }

        let common = common_name
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(scientific_name);

        catalog.insert(
            key.clone(),
            SpeciesInfo {
                scientific_name: scientific_name.to_string(),
                common_name: common.to_string(),
                image_url: image_for(&key, common, &config.image_overrides),
            },
        );
    };

    for d in densities {
        add_species(&d.scientific_name, Some(&d.common_name));
    }
    for g in coefficients {
        add_species(&g.scientific_name, None);
    }

    let mut entries: Vec<SpeciesInfo> = catalog.into_values().collect();
    entries.sort_by(|a, b| a.scientific_name.cmp(&b.scientific_name));
    entries
}

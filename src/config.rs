use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CarbonError;

/// Scientific name of the stand-in species used when no growth coefficients
/// match the query.
pub const DEFAULT_PROXY_SPECIES: &str = "Acer rubrum";

/// Wood density in kg/m^3 used when no density record matches the query.
pub const DEFAULT_WOOD_DENSITY: f64 = 550.0;

/// Tunable engine settings.
///
/// The defaults reproduce the documented fallback policy; a TOML file can
/// override the proxy species, the default density, and the curated species
/// image overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Species whose coefficient set stands in for unmatched queries
    pub proxy_species: String,
    /// Density fallback in kg/m^3
    pub default_density: f64,
    /// Curated image URLs keyed by lower-cased scientific name; these take
    /// precedence over the deterministic hash assignment
    pub image_overrides: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut image_overrides = BTreeMap::new();
        image_overrides.insert(
            "acer palmatum".to_string(),
            "https://upload.wikimedia.org/wikipedia/commons/6/6d/Acer_palmatum0.jpg".to_string(),
        );
        Self {
            proxy_species: DEFAULT_PROXY_SPECIES.to_string(),
            default_density: DEFAULT_WOOD_DENSITY,
            image_overrides,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CarbonError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_proxy_and_density() {
        let config = EngineConfig::default();
        assert_eq!(config.proxy_species, "Acer rubrum");
        assert!((config.default_density - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_has_curated_override() {
        let config = EngineConfig::default();
        assert!(config.image_overrides.contains_key("acer palmatum"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str("proxy_species = \"Quercus alba\"").unwrap();
        assert_eq!(config.proxy_species, "Quercus alba");
        assert!((config.default_density - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_toml() {
        let config: EngineConfig = toml::from_str(
            r#"
            proxy_species = "Pinus taeda"
            default_density = 480.0

            [image_overrides]
            "pinus taeda" = "https://example.com/pine.jpg"
            "#,
        )
        .unwrap();
        assert_eq!(config.proxy_species, "Pinus taeda");
        assert!((config.default_density - 480.0).abs() < 1e-9);
        assert_eq!(
            config.image_overrides.get("pinus taeda").map(String::as_str),
            Some("https://example.com/pine.jpg")
        );
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.proxy_species, config.proxy_species);
        assert_eq!(back.image_overrides, config.image_overrides);
    }
}

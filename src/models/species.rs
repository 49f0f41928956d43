use serde::{Deserialize, Serialize};

/// A deduplicated species catalog entry, for search and autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// Scientific name, as first seen in the source tables
    pub scientific_name: String,
    /// Common name; falls back to the scientific name when none is known
    pub common_name: String,
    /// Illustrative image URL, deterministically assigned
    pub image_url: String,
}

impl SpeciesInfo {
    /// Human-facing label: "Common name (Scientific name)", collapsing to the
    /// scientific name alone when no distinct common name exists.
    pub fn label(&self) -> String {
        if !self.common_name.is_empty() && self.common_name != self.scientific_name {
            format!("{} ({})", self.common_name, self.scientific_name)
        } else {
            self.scientific_name.clone()
        }
    }
}

impl std::fmt::Display for SpeciesInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

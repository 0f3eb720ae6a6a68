// ABOUTME: Diet modes and the per-request dietary configuration handed to the pipeline
// ABOUTME: Unknown diet names are preserved verbatim and carry no banned terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Named dietary policy
///
/// Stored and displayed as a plain string. Values other than `none`,
/// `vegetarian` and `vegan` (including the empty string) are kept as
/// `Other` so they round-trip through the preferences file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietMode {
    /// No diet restrictions
    #[default]
    None,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Any other configured value
    Other(String),
}

impl DietMode {
    /// Parse a configured diet name; matching is exact
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Configured name of this diet
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Other(name) => name,
        }
    }
}

impl Display for DietMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DietMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DietMode> for String {
    fn from(value: DietMode) -> Self {
        value.as_str().to_owned()
    }
}

/// Dietary configuration for one request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DietaryConfiguration {
    /// Active diet mode
    #[serde(default)]
    pub diet_mode: DietMode,
    /// User-specified terms to avoid, in configuration order
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl DietaryConfiguration {
    /// Create a configuration
    #[must_use]
    pub fn new(diet_mode: DietMode, exclusions: Vec<String>) -> Self {
        Self {
            diet_mode,
            exclusions,
        }
    }

    /// Exclusions lowercased for matching, order preserved
    #[must_use]
    pub fn normalized_exclusions(&self) -> Vec<String> {
        self.exclusions.iter().map(|e| e.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_mode_round_trips_unknown_values() {
        for raw in ["none", "vegetarian", "vegan", "", "pescatarian", "Vegan"] {
            assert_eq!(DietMode::parse(raw).as_str(), raw);
        }
        assert_eq!(DietMode::parse("Vegan"), DietMode::Other("Vegan".into()));
    }

    #[test]
    fn test_configuration_deserializes_from_preferences_shape() {
        let config: DietaryConfiguration =
            serde_json::from_str(r#"{"diet_mode": "vegan", "exclusions": ["Onion"]}"#).unwrap();

        assert_eq!(config.diet_mode, DietMode::Vegan);
        assert_eq!(config.normalized_exclusions(), vec!["onion"]);
    }

    #[test]
    fn test_missing_fields_default_to_no_restrictions() {
        let config: DietaryConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DietaryConfiguration::default());
        assert_eq!(config.diet_mode.to_string(), "none");
    }
}

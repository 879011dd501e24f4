//! Search settings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use timetable_scoring::{ComponentKind, ComponentWeightOverrides};

use crate::ConfigError;

/// Settings shared by construction and neighborhood sampling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Draws a random move sampler makes before reporting an empty
    /// neighborhood.
    #[serde(default = "default_max_sampling_attempts")]
    pub max_sampling_attempts: u64,

    /// Soft weight overrides keyed by component name.
    #[serde(default)]
    pub weights: BTreeMap<String, i64>,

    #[serde(default)]
    pub greedy: GreedyConfig,
}

fn default_max_sampling_attempts() -> u64 {
    100_000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_sampling_attempts: default_max_sampling_attempts(),
            weights: BTreeMap::new(),
            greedy: GreedyConfig::default(),
        }
    }
}

/// Greedy construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GreedyConfig {
    /// Start by keeping professors off their unavailable day. The constructor
    /// may still relax this when no professor fits.
    #[serde(default = "yes")]
    pub respect_unavailability: bool,
}

fn yes() -> bool {
    true
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            respect_unavailability: true,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: u64) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Overrides the weight of a soft component.
    pub fn with_weight(mut self, kind: ComponentKind, weight: i64) -> Self {
        self.weights.insert(kind.name().to_string(), weight);
        self
    }

    pub fn with_respect_unavailability(mut self, respect: bool) -> Self {
        self.greedy.respect_unavailability = respect;
        self
    }

    /// Checks sampling bounds and weight overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sampling_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max_sampling_attempts must be positive".to_string(),
            ));
        }
        self.weight_overrides().map(|_| ())
    }

    /// Parses the weight table into scoring overrides.
    ///
    /// # Errors
    ///
    /// Unknown component names, the hard completeness component, and negative
    /// weights are rejected.
    pub fn weight_overrides(&self) -> Result<ComponentWeightOverrides, ConfigError> {
        let mut overrides = ComponentWeightOverrides::new();
        for (name, &weight) in &self.weights {
            let kind: ComponentKind = name
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;
            if kind.is_hard() {
                return Err(ConfigError::Invalid(format!(
                    "{} has a fixed weight",
                    kind
                )));
            }
            if weight < 0 {
                return Err(ConfigError::Invalid(format!(
                    "weight of {} must be non-negative",
                    kind
                )));
            }
            overrides.put(kind, weight);
        }
        Ok(overrides)
    }
}

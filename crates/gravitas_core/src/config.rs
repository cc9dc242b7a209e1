use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_THRESHOLD_MASS, DEFAULT_TIME_STEP};

/// Which initial universe to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// `body_count` bodies with random state
    #[default]
    Random,
    /// A heavy central star with one orbiting planet
    StarPlanet,
    /// `body_count` resting bodies of identical mass and radius
    StaticIdentical,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Random seed for deterministic universe generation
    pub seed: u64,
    pub scenario: ScenarioKind,
    /// Number of bodies for the generated scenarios (ignored by `StarPlanet`)
    pub body_count: usize,
    /// Iteration limit for the run
    pub iterations: u64,
    /// Gravity integration step
    pub time_step: f64,
    /// Mass above which bodies become stars
    pub threshold_mass: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioKind::Random,
            body_count: 10,
            iterations: DEFAULT_ITERATIONS,
            time_step: DEFAULT_TIME_STEP,
            threshold_mass: DEFAULT_THRESHOLD_MASS,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file, falling back to defaults if the
    /// file is missing, unreadable or malformed
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to read config file {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SimConfig = toml::from_str("scenario = \"star_planet\"\niterations = 5\n").unwrap();
        assert_eq!(ScenarioKind::StarPlanet, config.scenario);
        assert_eq!(5, config.iterations);
        assert_eq!(42, config.seed);
        assert_eq!(DEFAULT_THRESHOLD_MASS, config.threshold_mass);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SimConfig::load_or_default("/nonexistent/gravitas.toml");
        assert_eq!(SimConfig::default(), config);
    }

    #[test]
    fn test_unreadable_path_uses_defaults() {
        // A directory exists but cannot be read as a file
        let config = SimConfig::load_or_default(std::env::temp_dir());
        assert_eq!(SimConfig::default(), config);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("gravitas-config-{}.toml", std::process::id()));
        let config = SimConfig {
            seed: 7,
            scenario: ScenarioKind::StaticIdentical,
            body_count: 3,
            ..SimConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(config, SimConfig::load_or_default(&path));
        std::fs::remove_file(&path).unwrap();
    }
}

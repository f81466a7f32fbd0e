//! Session tuning, loadable from a RON file. Every field has a default, so a
//! config file only needs to name what it changes.

use crate::errors::{ConfigError, ConfigResult};
use crate::world::{Direction, GridPos};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u8,
    pub wild_count: usize,
    pub start_position: GridPos,
    pub start_facing: Direction,
    pub ambient_encounter_chance: f64,
    pub capture_threshold: f64,
    pub capture_scale: f64,
    pub escape_chance: f64,
    pub level_up_hp_gain: u16,
    pub delays: StepDelays,
    pub seed: Option<u64>,
}

/// Pacing of deferred battle steps, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDelays {
    pub enemy_attack: u64,
    pub defeat_announce: u64,
    pub level_up_return: u64,
    pub faint_announce: u64,
    pub recovery: u64,
    pub capture_return: u64,
    pub capture_menu: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            wild_count: 5,
            start_position: GridPos::new(5, 5),
            start_facing: Direction::Down,
            ambient_encounter_chance: 0.1,
            capture_threshold: 0.7,
            capture_scale: 0.8,
            escape_chance: 0.5,
            level_up_hp_gain: 2,
            delays: StepDelays::default(),
            seed: None,
        }
    }
}

impl Default for StepDelays {
    fn default() -> Self {
        Self {
            enemy_attack: 1000,
            defeat_announce: 1000,
            level_up_return: 1500,
            faint_announce: 1000,
            recovery: 1500,
            capture_return: 1500,
            capture_menu: 1000,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(source: &str) -> ConfigResult<Self> {
        let config: GameConfig =
            ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_ron_str(&source)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".to_string()));
        }

        let probabilities = [
            ("ambient_encounter_chance", self.ambient_encounter_chance),
            ("capture_threshold", self.capture_threshold),
            ("capture_scale", self.capture_scale),
            ("escape_chance", self.escape_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        let config = GameConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_config_overrides_only_named_fields() {
        let config =
            GameConfig::from_ron_str("(wild_count: 8, delays: (enemy_attack: 10), seed: Some(3))")
                .unwrap();

        assert_eq!(config.wild_count, 8);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.delays.enemy_attack, 10);
        assert_eq!(config.delays.recovery, 1500);
        assert_eq!(config.grid_size, 10);
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        let result = GameConfig::from_ron_str("(escape_chance: 1.5)");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_grid_is_rejected() {
        let result = GameConfig::from_ron_str("(grid_size: 0)");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_config_reports_parse_error() {
        let result = GameConfig::from_ron_str("(grid_size: \"ten\")");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let result = GameConfig::load(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}

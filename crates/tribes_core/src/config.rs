//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Every section falls back to its `Default`, so a file only needs to
//! name the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [board]
//! rows = 40
//! cols = 90
//! clusters = 3
//! fill = 0.3
//! delay_ms = 200
//! seed = 42
//!
//! [logging]
//! level = "info"
//!
//! [session]
//! data_dir = "./data"
//! save_on_exit = false
//! ```

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use tribes_data::Tribe;

/// Parameters of a single board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of initial clusters; cluster `i` is painted with `Tribe::LIVING[i]`.
    pub clusters: usize,
    /// Probability that a coordinate is sampled into the initial population.
    pub fill: f64,
    /// Display time of one generation.
    pub delay_ms: u64,
    /// Seed for the board's RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Upper bound on k-means refinement rounds.
    pub max_iterations: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 90,
            clusters: 3,
            fill: 0.3,
            delay_ms: 200,
            seed: None,
            max_iterations: 300,
        }
    }
}

impl BoardConfig {
    /// Rejects parameters that would leave tribe assignment or the grid undefined.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::invalid_config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.clusters == 0 {
            return Err(EngineError::invalid_config(
                "at least one cluster is required",
            ));
        }
        if self.clusters > Tribe::LIVING.len() {
            return Err(EngineError::invalid_config(format!(
                "{} clusters requested but only {} tribes exist",
                self.clusters,
                Tribe::LIVING.len()
            )));
        }
        if !self.fill.is_finite() || !(0.0..=1.0).contains(&self.fill) {
            return Err(EngineError::invalid_config(format!(
                "fill must lie in [0, 1], got {}",
                self.fill
            )));
        }
        if self.max_iterations == 0 {
            return Err(EngineError::invalid_config(
                "max_iterations must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` level filter, e.g. `info` or `tribes_core=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub data_dir: String,
    pub save_on_exit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            save_on_exit: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = BoardConfig {
            rows: 0,
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
        let config = BoardConfig {
            cols: 0,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_more_clusters_than_tribes() {
        let config = BoardConfig {
            clusters: 4,
            ..BoardConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("4 clusters"));
    }

    #[test]
    fn test_fill_bounds_inclusive() {
        for fill in [0.0, 1.0, 0.5] {
            let config = BoardConfig {
                fill,
                ..BoardConfig::default()
            };
            assert!(config.validate().is_ok(), "fill {fill} should be accepted");
        }
        for fill in [-0.1, 1.5, f64::NAN] {
            let config = BoardConfig {
                fill,
                ..BoardConfig::default()
            };
            assert!(config.validate().is_err(), "fill {fill} should be rejected");
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[board]\nrows = 12\nseed = 7\n").unwrap();
        assert_eq!(config.board.rows, 12);
        assert_eq!(config.board.seed, Some(7));
        assert_eq!(config.board.cols, 90);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.board.seed = Some(99);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}

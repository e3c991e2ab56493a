//! Configuration management for skill compass

use crate::catalog::SkillCatalog;
use crate::error::{Result, SkillCompassError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: SkillCatalog,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub diversity_weight: f64,
    pub alignment_weight: f64,
    pub experience_weight: f64,
    pub trending_weight: f64,
    pub high_value_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: SkillCatalog::default(),
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            diversity_weight: 0.15,
            alignment_weight: 0.30,
            experience_weight: 0.20,
            trending_weight: 0.20,
            high_value_weight: 0.15,
        }
    }
}

impl ScoringConfig {
    pub fn weight_sum(&self) -> f64 {
        self.diversity_weight
            + self.alignment_weight
            + self.experience_weight
            + self.trending_weight
            + self.high_value_weight
    }

    /// Weights must describe a convex combination of the five factors.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            self.diversity_weight,
            self.alignment_weight,
            self.experience_weight,
            self.trending_weight,
            self.high_value_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SkillCompassError::InvalidInput(
                "Scoring weights must be non-negative finite numbers".to_string(),
            ));
        }
        if (self.weight_sum() - 1.0).abs() > 1e-6 {
            return Err(SkillCompassError::InvalidInput(format!(
                "Scoring weights must sum to 1.0, got {}",
                self.weight_sum()
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillCompassError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillCompassError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.scoring.validate()?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-compass")
            .join("config.toml")
    }
}

//! Market demand dataset: external reference data consumed read-only
//!
//! The market catalog provider is an external collaborator; the core treats
//! its records as a finite in-memory list for one scoring pass. A JSON file
//! can be supplied on the command line, and a bundled snapshot keeps the
//! tool usable without one.

use crate::error::{Result, SkillCompassError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// External reference record describing demand, salary and growth for one
/// skill name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDatum {
    pub skill_name: String,
    /// Demand score in [0, 100].
    pub demand_score: f64,
    pub avg_salary: f64,
    /// Growth rate in percent; values above 30 are legitimate.
    pub growth_rate: f64,
    pub job_count: u32,
}

impl MarketDatum {
    /// Validate a record at the boundary before the core consumes it.
    pub fn validate(&self) -> Result<()> {
        if self.skill_name.trim().is_empty() {
            return Err(SkillCompassError::InvalidInput(
                "Market record has an empty skill name".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.demand_score) || !self.demand_score.is_finite() {
            return Err(SkillCompassError::InvalidInput(format!(
                "Market record '{}' has demand score {} outside [0, 100]",
                self.skill_name, self.demand_score
            )));
        }
        if self.avg_salary < 0.0 || !self.avg_salary.is_finite() {
            return Err(SkillCompassError::InvalidInput(format!(
                "Market record '{}' has negative average salary",
                self.skill_name
            )));
        }
        if !self.growth_rate.is_finite() {
            return Err(SkillCompassError::InvalidInput(format!(
                "Market record '{}' has a non-finite growth rate",
                self.skill_name
            )));
        }
        Ok(())
    }
}

/// The full set of market records for one scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCatalog {
    records: Vec<MarketDatum>,
}

impl MarketCatalog {
    /// Build a catalog from records, validating each one.
    pub fn new(records: Vec<MarketDatum>) -> Result<Self> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// Load a catalog from a JSON file containing an array of records.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<MarketDatum> = serde_json::from_str(&content)
            .map_err(|e| SkillCompassError::MarketData(format!(
                "Failed to parse market data from {}: {}",
                path.display(),
                e
            )))?;
        log::info!("Loaded {} market records from {}", records.len(), path.display());
        Self::new(records)
    }

    pub fn records(&self) -> &[MarketDatum] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MarketCatalog {
    /// Bundled market snapshot used when no data file is supplied.
    fn default() -> Self {
        let records = [
            ("Machine Learning", 95.0, 145_000.0, 32.0, 18_500),
            ("Kubernetes", 90.0, 138_000.0, 28.0, 14_200),
            ("React", 90.0, 125_000.0, 18.0, 32_000),
            ("AWS", 92.0, 135_000.0, 22.0, 28_400),
            ("Python", 93.0, 128_000.0, 20.0, 41_000),
            ("TypeScript", 88.0, 126_000.0, 24.0, 26_700),
            ("Rust", 82.0, 142_000.0, 35.0, 6_800),
            ("Go", 84.0, 136_000.0, 26.0, 9_500),
            ("Docker", 87.0, 124_000.0, 16.0, 19_800),
            ("Cloud Computing", 89.0, 132_000.0, 21.0, 22_300),
            ("JavaScript", 91.0, 115_000.0, 8.0, 48_000),
            ("Node.js", 85.0, 120_000.0, 12.0, 24_500),
            ("SQL", 86.0, 105_000.0, 6.0, 38_900),
            ("GraphQL", 78.0, 122_000.0, 19.0, 8_700),
            ("Terraform", 80.0, 130_000.0, 25.0, 7_900),
            ("CI/CD", 83.0, 121_000.0, 17.0, 12_600),
            ("PostgreSQL", 81.0, 114_000.0, 10.0, 15_300),
            ("System Design", 79.0, 148_000.0, 14.0, 9_200),
            ("DevOps", 85.0, 129_000.0, 18.0, 16_100),
            ("Data Analysis", 84.0, 112_000.0, 15.0, 20_400),
            ("Java", 82.0, 118_000.0, 4.0, 31_200),
            ("Leadership", 76.0, 140_000.0, 9.0, 11_800),
            ("Communication", 74.0, 98_000.0, 7.0, 25_600),
            ("Project Management", 77.0, 108_000.0, 8.0, 17_900),
        ];

        Self {
            records: records
                .iter()
                .map(|(name, demand, salary, growth, jobs)| MarketDatum {
                    skill_name: name.to_string(),
                    demand_score: *demand,
                    avg_salary: *salary,
                    growth_rate: *growth,
                    job_count: *jobs,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = MarketCatalog::default();
        assert!(!catalog.is_empty());
        for record in catalog.records() {
            assert!(record.validate().is_ok());
        }
    }

    #[test]
    fn test_out_of_range_demand_rejected() {
        let datum = MarketDatum {
            skill_name: "React".to_string(),
            demand_score: 120.0,
            avg_salary: 100_000.0,
            growth_rate: 5.0,
            job_count: 100,
        };
        assert!(datum.validate().is_err());
        assert!(MarketCatalog::new(vec![datum]).is_err());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let datum = MarketDatum {
            skill_name: "React".to_string(),
            demand_score: 80.0,
            avg_salary: -1.0,
            growth_rate: 5.0,
            job_count: 100,
        };
        assert!(datum.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.json");
        let json = r#"[
            {"skill_name": "React", "demand_score": 90, "avg_salary": 125000, "growth_rate": 18, "job_count": 32000}
        ]"#;
        std::fs::write(&path, json).unwrap();

        let catalog = MarketCatalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].skill_name, "React");
    }
}

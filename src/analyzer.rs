//! End-to-end analysis: profile text in, readiness report out

use crate::config::Config;
use crate::error::Result;
use crate::extract::estimate::{estimate_proficiency, estimate_years};
use crate::extract::ProfileParser;
use crate::market::MarketCatalog;
use crate::output::report::{ReadinessReport, ReportMetadata};
use crate::scoring::{Recommender, ScoringEngine, UserSkill};
use chrono::Utc;
use std::time::Instant;

/// Coordinates the extraction, estimation, scoring and recommendation
/// stages. Holds no per-request state; each call computes a fresh report.
pub struct Analyzer {
    parser: ProfileParser,
    engine: ScoringEngine,
    recommender: Recommender,
    catalog_size: usize,
}

impl Analyzer {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parser: ProfileParser::new(&config.catalog)?,
            engine: ScoringEngine::new(config.scoring.clone())?,
            recommender: Recommender::new(),
            catalog_size: config.catalog.len(),
        })
    }

    /// Run the full pipeline over a raw profile dump.
    pub fn analyze(&self, profile_text: &str, market: &MarketCatalog) -> Result<ReadinessReport> {
        let start = Instant::now();

        let profile = self.parser.parse(profile_text);
        log::info!(
            "Parsed profile for '{}': {} skills extracted",
            profile.name,
            profile.skills.len()
        );

        // Derive user skills: estimated years feed the proficiency estimate.
        // Skills derived from text are never marked verified.
        let user_skills: Vec<UserSkill> = profile
            .skills
            .iter()
            .map(|skill| {
                let years = estimate_years(profile_text, &skill.name);
                UserSkill {
                    skill_name: skill.name.clone(),
                    proficiency_level: estimate_proficiency(skill, years),
                    years_experience: years,
                    verified: false,
                }
            })
            .collect();

        let prediction = self.engine.score(&user_skills, market)?;
        let skill_gaps = self.recommender.identify_gaps(&user_skills, market)?;
        let career_paths = self.recommender.generate_paths(&user_skills, market)?;

        log::info!(
            "Analysis for '{}': success={} demand={} readiness={}",
            profile.name,
            prediction.success_score,
            prediction.market_demand_score,
            prediction.career_readiness_score
        );

        Ok(ReadinessReport {
            profile_name: profile.name,
            extracted_skills: profile.skills,
            experience_summary: profile.experience,
            education_summary: profile.education,
            user_skills,
            prediction,
            skill_gaps,
            career_paths,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms: start.elapsed().as_millis() as u64,
                market_records: market.len(),
                catalog_size: self.catalog_size,
            },
        })
    }
}

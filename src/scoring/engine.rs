//! Weighted multi-factor scoring model
//!
//! Five factors are computed independently, each clamped to [0, 100], then
//! aggregated into success, market-demand and career-readiness scores. The
//! model is deterministic weighted heuristics, not a learned predictor.
//! Zero-length collections are special-cased before every division, so no
//! input can produce NaN or infinity.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::market::{MarketCatalog, MarketDatum};
use crate::scoring::{validate_user_skills, UserSkill};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const TRENDING_GROWTH_THRESHOLD: f64 = 15.0;
const HIGH_VALUE_SALARY_THRESHOLD: f64 = 120_000.0;

/// Fallback factor values when the user has skills but none qualify.
const NO_MATCH_ALIGNMENT: f64 = 30.0;
const NO_MATCH_TRENDING: f64 = 30.0;
const NO_MATCH_HIGH_VALUE: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub success_score: u8,
    pub market_demand_score: u8,
    pub career_readiness_score: u8,
    pub factors: ScoreFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactors {
    pub skill_diversity: u8,
    pub market_alignment: u8,
    pub experience_level: u8,
    pub trending_skills: u8,
    pub high_value_skills: u8,
}

/// Computes prediction scores for a skill set against a market catalog.
pub struct ScoringEngine {
    weights: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(weights: ScoringConfig) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Score a user's skills against the market catalog. Pure function over
    /// immutable inputs; computes a fresh result per call.
    pub fn score(&self, user_skills: &[UserSkill], market: &MarketCatalog) -> Result<PredictionResult> {
        validate_user_skills(user_skills)?;

        let market_map: HashMap<String, &MarketDatum> = market
            .records()
            .iter()
            .map(|m| (m.skill_name.to_lowercase(), m))
            .collect();

        let skill_diversity = Self::skill_diversity(user_skills);
        let market_alignment = Self::market_alignment(user_skills, &market_map);
        let experience_level = Self::experience_level(user_skills);
        let trending_skills = Self::trending_skills(user_skills, &market_map);
        let high_value_skills = Self::high_value_skills(user_skills, &market_map);

        let success = (skill_diversity * self.weights.diversity_weight
            + market_alignment * self.weights.alignment_weight
            + experience_level * self.weights.experience_weight
            + trending_skills * self.weights.trending_weight
            + high_value_skills * self.weights.high_value_weight)
            .round();

        let market_demand = ((market_alignment + trending_skills) / 2.0).round();

        // Readiness blends the already-rounded success score with the raw
        // experience factor.
        let career_readiness = (success * 0.6 + experience_level * 0.4).round();

        log::debug!(
            "Factors: diversity={:.1} alignment={:.1} experience={:.1} trending={:.1} high_value={:.1}",
            skill_diversity, market_alignment, experience_level, trending_skills, high_value_skills
        );

        Ok(PredictionResult {
            success_score: clamp_score(success),
            market_demand_score: clamp_score(market_demand),
            career_readiness_score: clamp_score(career_readiness),
            factors: ScoreFactors {
                skill_diversity: skill_diversity.round() as u8,
                market_alignment: market_alignment.round() as u8,
                experience_level: experience_level.round() as u8,
                trending_skills: trending_skills.round() as u8,
                high_value_skills: high_value_skills.round() as u8,
            },
        })
    }

    /// Tiered score by distinct-skill count plus a proficiency bonus.
    fn skill_diversity(user_skills: &[UserSkill]) -> f64 {
        if user_skills.is_empty() {
            return 0.0;
        }

        let unique: HashSet<String> = user_skills
            .iter()
            .map(|s| s.skill_name.to_lowercase())
            .collect();

        let tier = match unique.len() {
            n if n >= 15 => 100.0,
            n if n >= 10 => 85.0,
            n if n >= 7 => 70.0,
            n if n >= 5 => 55.0,
            n if n >= 3 => 40.0,
            _ => 25.0,
        };

        let bonus = (average_proficiency(user_skills) - 3.0) * 5.0;
        (tier + bonus).clamp(0.0, 100.0)
    }

    /// Mean demand/proficiency blend over matched skills plus a coverage
    /// bonus for the matched fraction.
    fn market_alignment(user_skills: &[UserSkill], market_map: &HashMap<String, &MarketDatum>) -> f64 {
        if user_skills.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut matched = 0usize;
        for skill in user_skills {
            if let Some(datum) = market_map.get(&skill.skill_name.to_lowercase()) {
                let demand_weight = datum.demand_score / 100.0;
                let proficiency_weight = f64::from(skill.proficiency_level) / 5.0;
                total += demand_weight * 70.0 + proficiency_weight * 30.0;
                matched += 1;
            }
        }

        if matched == 0 {
            return NO_MATCH_ALIGNMENT;
        }

        let average = total / matched as f64;
        let coverage_bonus = (matched as f64 / user_skills.len() as f64) * 15.0;
        (average + coverage_bonus).clamp(0.0, 100.0)
    }

    /// Tiered score by average years of experience plus a proficiency bonus.
    fn experience_level(user_skills: &[UserSkill]) -> f64 {
        if user_skills.is_empty() {
            return 0.0;
        }

        let total_years: f64 = user_skills.iter().map(|s| s.years_experience).sum();
        let avg_years = total_years / user_skills.len() as f64;

        let tier = match avg_years {
            y if y >= 8.0 => 100.0,
            y if y >= 5.0 => 85.0,
            y if y >= 3.0 => 70.0,
            y if y >= 2.0 => 55.0,
            y if y >= 1.0 => 40.0,
            _ => 25.0,
        };

        let bonus = (average_proficiency(user_skills) - 3.0) * 8.0;
        (tier + bonus).clamp(0.0, 100.0)
    }

    /// Growth/proficiency blend over skills whose market growth rate meets
    /// the trending threshold, plus a capped coverage bonus.
    fn trending_skills(user_skills: &[UserSkill], market_map: &HashMap<String, &MarketDatum>) -> f64 {
        if user_skills.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut trending = 0usize;
        for skill in user_skills {
            if let Some(datum) = market_map.get(&skill.skill_name.to_lowercase()) {
                if datum.growth_rate >= TRENDING_GROWTH_THRESHOLD {
                    let growth_weight = (datum.growth_rate / 30.0).min(1.0);
                    let proficiency_weight = f64::from(skill.proficiency_level) / 5.0;
                    total += growth_weight * 60.0 + proficiency_weight * 40.0;
                    trending += 1;
                }
            }
        }

        if trending == 0 {
            return NO_MATCH_TRENDING;
        }

        let average = total / trending as f64;
        let coverage_bonus = ((trending as f64 / 5.0) * 20.0).min(20.0);
        (average + coverage_bonus).clamp(0.0, 100.0)
    }

    /// Salary/proficiency blend over skills whose market salary meets the
    /// high-value threshold, plus a capped coverage bonus.
    fn high_value_skills(user_skills: &[UserSkill], market_map: &HashMap<String, &MarketDatum>) -> f64 {
        if user_skills.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut high_value = 0usize;
        for skill in user_skills {
            if let Some(datum) = market_map.get(&skill.skill_name.to_lowercase()) {
                if datum.avg_salary >= HIGH_VALUE_SALARY_THRESHOLD {
                    let salary_weight = (datum.avg_salary / 150_000.0).min(1.0);
                    let proficiency_weight = f64::from(skill.proficiency_level) / 5.0;
                    total += salary_weight * 60.0 + proficiency_weight * 40.0;
                    high_value += 1;
                }
            }
        }

        if high_value == 0 {
            return NO_MATCH_HIGH_VALUE;
        }

        let average = total / high_value as f64;
        let coverage_bonus = ((high_value as f64 / 5.0) * 25.0).min(25.0);
        (average + coverage_bonus).clamp(0.0, 100.0)
    }
}

fn average_proficiency(user_skills: &[UserSkill]) -> f64 {
    let total: f64 = user_skills
        .iter()
        .map(|s| f64::from(s.proficiency_level))
        .sum();
    total / user_skills.len() as f64
}

fn clamp_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

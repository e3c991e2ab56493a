//! Multi-factor scoring and career recommendations

pub mod engine;
pub mod recommender;

pub use engine::{PredictionResult, ScoreFactors, ScoringEngine};
pub use recommender::{CareerPath, RankedCareerPath, Recommender};

use crate::error::{Result, SkillCompassError};
use serde::{Deserialize, Serialize};

/// A skill owned by a profile, with estimated proficiency and experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSkill {
    pub skill_name: String,
    /// Proficiency level in [1, 5].
    pub proficiency_level: u8,
    pub years_experience: f64,
    pub verified: bool,
}

impl UserSkill {
    /// Boundary validation: the core is total over the documented domain,
    /// caller misuse is the one failure class that propagates.
    pub fn validate(&self) -> Result<()> {
        if self.skill_name.trim().is_empty() {
            return Err(SkillCompassError::InvalidInput(
                "User skill has an empty name".to_string(),
            ));
        }
        if !(1..=5).contains(&self.proficiency_level) {
            return Err(SkillCompassError::InvalidInput(format!(
                "Skill '{}' has proficiency level {} outside [1, 5]",
                self.skill_name, self.proficiency_level
            )));
        }
        if self.years_experience < 0.0 || !self.years_experience.is_finite() {
            return Err(SkillCompassError::InvalidInput(format!(
                "Skill '{}' has invalid years of experience",
                self.skill_name
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_user_skills(skills: &[UserSkill]) -> Result<()> {
    for skill in skills {
        skill.validate()?;
    }
    Ok(())
}

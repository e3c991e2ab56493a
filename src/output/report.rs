//! Career readiness report structures

use crate::extract::ExtractedSkill;
use crate::scoring::{PredictionResult, RankedCareerPath, UserSkill};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full analysis result for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub profile_name: String,
    pub extracted_skills: Vec<ExtractedSkill>,
    pub experience_summary: String,
    pub education_summary: String,
    pub user_skills: Vec<UserSkill>,
    pub prediction: PredictionResult,
    pub skill_gaps: Vec<String>,
    pub career_paths: Vec<RankedCareerPath>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub market_records: usize,
    pub catalog_size: usize,
}

impl ReadinessReport {
    /// Short one-line verdict for the console summary.
    pub fn verdict(&self) -> &'static str {
        match self.prediction.success_score {
            80..=100 => "Excellent market position",
            60..=79 => "Strong foundation with room to grow",
            40..=59 => "Moderate readiness; targeted upskilling advised",
            20..=39 => "Early stage; focus on high-demand fundamentals",
            _ => "Not enough recognized skills to assess",
        }
    }
}

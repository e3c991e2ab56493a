//! Structured profile parsing: name and section splitting over a raw dump

use crate::catalog::SkillCatalog;
use crate::error::{Result, SkillCompassError};
use crate::extract::extractor::{ExtractedSkill, SkillExtractor};
use regex::Regex;
use serde::{Deserialize, Serialize};

const EXPERIENCE_SECTION_LIMIT: usize = 500;
const EDUCATION_SECTION_LIMIT: usize = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub skills: Vec<ExtractedSkill>,
    pub experience: String,
    pub education: String,
}

/// Specializes the skill extractor for structured profile dumps.
pub struct ProfileParser {
    extractor: SkillExtractor,
    name_pattern: Regex,
    experience_pattern: Regex,
    education_pattern: Regex,
}

impl ProfileParser {
    pub fn new(catalog: &SkillCatalog) -> Result<Self> {
        let extractor = SkillExtractor::new(catalog)?;

        let name_pattern = Regex::new(r"^([A-Z][a-z]+\s[A-Z][a-z]+)")
            .map_err(|e| SkillCompassError::Processing(format!("Failed to compile name pattern: {}", e)))?;
        // Section body runs until the next known header or end of text.
        let experience_pattern = Regex::new(r"(?is)Experience[:\s]+(.*?)(?:Education|Skills|$)")
            .map_err(|e| SkillCompassError::Processing(format!("Failed to compile section pattern: {}", e)))?;
        let education_pattern = Regex::new(r"(?is)Education[:\s]+(.*?)(?:Experience|Skills|$)")
            .map_err(|e| SkillCompassError::Processing(format!("Failed to compile section pattern: {}", e)))?;

        Ok(Self {
            extractor,
            name_pattern,
            experience_pattern,
            education_pattern,
        })
    }

    /// Parse a profile dump. Missing name or sections never fail; they fall
    /// back to `"User"` and empty strings.
    pub fn parse(&self, text: &str) -> ParsedProfile {
        let name = self
            .name_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "User".to_string());

        let skills = self.extractor.extract(text);

        let experience = self.capture_section(&self.experience_pattern, text, EXPERIENCE_SECTION_LIMIT);
        let education = self.capture_section(&self.education_pattern, text, EDUCATION_SECTION_LIMIT);

        ParsedProfile {
            name,
            skills,
            experience,
            education,
        }
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    fn capture_section(&self, pattern: &Regex, text: &str, limit: usize) -> String {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().chars().take(limit).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ProfileParser {
        ProfileParser::new(&SkillCatalog::default()).unwrap()
    }

    const PROFILE: &str = "Jane Smith\nSenior Software Engineer\n\n\
        Experience: 5 years building React and TypeScript applications at Acme.\n\
        Led a team of four engineers.\n\n\
        Education: BSc Computer Science, State University\n\n\
        Skills: React, TypeScript, Leadership";

    #[test]
    fn test_name_extraction() {
        let profile = parser().parse(PROFILE);
        assert_eq!(profile.name, "Jane Smith");
    }

    #[test]
    fn test_name_defaults_to_user() {
        let profile = parser().parse("no capitalized header here");
        assert_eq!(profile.name, "User");
    }

    #[test]
    fn test_sections_extracted() {
        let profile = parser().parse(PROFILE);
        assert!(profile.experience.contains("5 years building React"));
        assert!(profile.education.contains("BSc Computer Science"));
        // Section bodies stop at the next known header
        assert!(!profile.experience.contains("BSc"));
        assert!(!profile.education.contains("Leadership"));
    }

    #[test]
    fn test_missing_sections_yield_empty_strings() {
        let profile = parser().parse("Jane Smith\nJust some text with Python");
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_skills_delegate_to_extractor() {
        let profile = parser().parse(PROFILE);
        assert!(profile.skills.iter().any(|s| s.name == "React"));
        assert!(profile.skills.iter().any(|s| s.name == "TypeScript"));
        assert!(profile.skills.iter().any(|s| s.name == "Leadership"));
    }

    #[test]
    fn test_experience_section_truncated() {
        let long_body = "x".repeat(2_000);
        let text = format!("Jane Smith\nExperience: {}", long_body);
        let profile = parser().parse(&text);
        assert_eq!(profile.experience.chars().count(), 500);
    }
}

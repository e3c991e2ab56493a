//! Skill catalog: the reference list of recognized skill names
//!
//! The catalog is an injected, immutable configuration value rather than a
//! hard-coded global, so alternative catalogs can be swapped in for testing
//! or domain-specific deployments. Iteration order is technical entries
//! first, then soft-skill entries; this ordering is load-bearing because it
//! decides which skill is recorded first when extraction confidences tie.

use crate::error::{Result, SkillCompassError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
}

/// Static reference list of recognized skills with category tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl SkillCatalog {
    /// Iterate all entries in the documented stable order:
    /// technical list first, then soft skills.
    pub fn entries(&self) -> impl Iterator<Item = (&str, SkillCategory)> {
        self.technical_skills
            .iter()
            .map(|s| (s.as_str(), SkillCategory::Technical))
            .chain(
                self.soft_skills
                    .iter()
                    .map(|s| (s.as_str(), SkillCategory::Soft)),
            )
    }

    pub fn len(&self) -> usize {
        self.technical_skills.len() + self.soft_skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technical_skills.is_empty() && self.soft_skills.is_empty()
    }

    /// Validate the catalog at the configuration boundary.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(SkillCompassError::InvalidInput(
                "Skill catalog must contain at least one entry".to_string(),
            ));
        }
        for (name, _) in self.entries() {
            if name.trim().is_empty() {
                return Err(SkillCompassError::InvalidInput(
                    "Skill catalog contains a blank entry".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            technical_skills: [
                "JavaScript", "Python", "React", "TypeScript", "Node.js",
                "Machine Learning", "AWS", "Docker", "SQL", "Git", "REST API",
                "GraphQL", "Vue.js", "Angular", "MongoDB", "PostgreSQL",
                "Kubernetes", "TensorFlow", "Data Analysis", "Cloud Computing",
                "Agile", "DevOps", "CI/CD", "Java", "C++", "Go", "Rust",
                "Swift", "Kotlin", "Flutter", "Django", "Flask", "Express",
                "Redis", "ElasticSearch", "Apache Kafka", "Spark", "Hadoop",
                "Tableau", "Power BI", "Figma", "Sketch", "Adobe XD", "UI/UX",
                "Product Management", "Scrum", "JIRA", "GitHub", "GitLab",
                "Bitbucket", "HTML", "CSS", "SASS", "Webpack", "Babel",
                "Jest", "Cypress", "Selenium", "Jenkins", "Terraform",
                "Ansible", "Linux", "Bash", "PowerShell", "Azure", "GCP",
                "Firebase", "Supabase", "Next.js", "Nuxt.js", "Svelte",
                "Tailwind CSS", "Bootstrap", "Material-UI", "Microservices",
                "Serverless", "WebSockets", "OAuth", "JWT", "API Design",
                "System Design", "Algorithms", "Data Structures",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            soft_skills: [
                "Leadership", "Communication", "Problem Solving", "Teamwork",
                "Critical Thinking", "Creativity", "Time Management",
                "Adaptability", "Emotional Intelligence", "Conflict Resolution",
                "Decision Making", "Negotiation", "Public Speaking",
                "Mentoring", "Project Management", "Strategic Planning",
                "Analytical Thinking",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

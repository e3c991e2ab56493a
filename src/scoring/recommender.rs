//! Skill gap identification and career path ranking

use crate::error::Result;
use crate::market::{MarketCatalog, MarketDatum};
use crate::scoring::{validate_user_skills, UserSkill};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const GAP_DEMAND_THRESHOLD: f64 = 75.0;
const GAP_CANDIDATE_POOL: usize = 20;
const MAX_GAPS: usize = 10;
const MAX_PATHS: usize = 5;

/// Demand assumed for a required skill absent from the market catalog.
const DEFAULT_REQUIRED_SKILL_DEMAND: f64 = 50.0;

/// A static target-role template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub timeline: String,
    pub salary_range: String,
    pub base_score: f64,
}

/// A career path enriched with per-request match and demand figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCareerPath {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub timeline: String,
    pub salary_range: String,
    pub demand_score: u8,
    /// Ordering key only; not part of the surfaced report.
    #[serde(skip)]
    pub match_rate: f64,
}

/// Diffs user skills against the market and ranks career paths.
pub struct Recommender {
    paths: Vec<CareerPath>,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            paths: default_career_paths(),
        }
    }

    pub fn with_paths(paths: Vec<CareerPath>) -> Self {
        Self { paths }
    }

    /// High-demand market skills the user is missing, best first, capped
    /// at ten.
    pub fn identify_gaps(&self, user_skills: &[UserSkill], market: &MarketCatalog) -> Result<Vec<String>> {
        validate_user_skills(user_skills)?;

        let user_names: HashSet<String> = user_skills
            .iter()
            .map(|s| s.skill_name.to_lowercase())
            .collect();

        let mut candidates: Vec<&MarketDatum> = market
            .records()
            .iter()
            .filter(|m| m.demand_score >= GAP_DEMAND_THRESHOLD)
            .collect();
        candidates.sort_by(|a, b| gap_rank(b).total_cmp(&gap_rank(a)));
        candidates.truncate(GAP_CANDIDATE_POOL);

        Ok(candidates
            .iter()
            .filter(|m| !user_names.contains(&m.skill_name.to_lowercase()))
            .map(|m| m.skill_name.clone())
            .take(MAX_GAPS)
            .collect())
    }

    /// Rank the path catalog by required-skill match rate, tie-broken by
    /// computed demand, capped at five.
    pub fn generate_paths(&self, user_skills: &[UserSkill], market: &MarketCatalog) -> Result<Vec<RankedCareerPath>> {
        validate_user_skills(user_skills)?;

        let user_names: HashSet<String> = user_skills
            .iter()
            .map(|s| s.skill_name.to_lowercase())
            .collect();
        let market_map: HashMap<String, &MarketDatum> = market
            .records()
            .iter()
            .map(|m| (m.skill_name.to_lowercase(), m))
            .collect();

        let mut ranked: Vec<RankedCareerPath> = self
            .paths
            .iter()
            .map(|path| {
                let required = path.required_skills.len();
                let matched = path
                    .required_skills
                    .iter()
                    .filter(|s| user_names.contains(&s.to_lowercase()))
                    .count();
                // Empty required lists are guarded rather than divided
                let (match_rate, avg_demand) = if required == 0 {
                    (0.0, DEFAULT_REQUIRED_SKILL_DEMAND)
                } else {
                    let demand_total: f64 = path
                        .required_skills
                        .iter()
                        .map(|s| {
                            market_map
                                .get(&s.to_lowercase())
                                .map(|m| m.demand_score)
                                .unwrap_or(DEFAULT_REQUIRED_SKILL_DEMAND)
                        })
                        .sum();
                    (matched as f64 / required as f64, demand_total / required as f64)
                };

                let demand_score = (path.base_score * 0.6 + avg_demand * 0.4)
                    .round()
                    .clamp(0.0, 100.0) as u8;

                RankedCareerPath {
                    title: path.title.clone(),
                    description: path.description.clone(),
                    required_skills: path.required_skills.clone(),
                    timeline: path.timeline.clone(),
                    salary_range: path.salary_range.clone(),
                    demand_score,
                    match_rate,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.match_rate
                .total_cmp(&a.match_rate)
                .then(b.demand_score.cmp(&a.demand_score))
        });
        ranked.truncate(MAX_PATHS);
        Ok(ranked)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

fn gap_rank(datum: &MarketDatum) -> f64 {
    datum.demand_score * 0.4 + datum.growth_rate * 0.3 + (datum.avg_salary / 2_000.0) * 0.3
}

fn default_career_paths() -> Vec<CareerPath> {
    vec![
        CareerPath {
            title: "Senior Full-Stack Developer".to_string(),
            description: "Lead development of web applications with modern technologies".to_string(),
            required_skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "TypeScript".to_string(),
                "SQL".to_string(),
                "REST API".to_string(),
            ],
            timeline: "6-12 months".to_string(),
            salary_range: "$120,000 - $160,000".to_string(),
            base_score: 85.0,
        },
        CareerPath {
            title: "Machine Learning Engineer".to_string(),
            description: "Build and deploy ML models for production systems".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "TensorFlow".to_string(),
                "Data Analysis".to_string(),
                "SQL".to_string(),
            ],
            timeline: "12-18 months".to_string(),
            salary_range: "$140,000 - $180,000".to_string(),
            base_score: 92.0,
        },
        CareerPath {
            title: "DevOps Engineer".to_string(),
            description: "Manage infrastructure and automate deployment pipelines".to_string(),
            required_skills: vec![
                "AWS".to_string(),
                "Docker".to_string(),
                "Kubernetes".to_string(),
                "CI/CD".to_string(),
                "Python".to_string(),
                "Linux".to_string(),
            ],
            timeline: "8-14 months".to_string(),
            salary_range: "$125,000 - $165,000".to_string(),
            base_score: 88.0,
        },
        CareerPath {
            title: "Cloud Solutions Architect".to_string(),
            description: "Design scalable cloud architecture for enterprise systems".to_string(),
            required_skills: vec![
                "AWS".to_string(),
                "Cloud Computing".to_string(),
                "Kubernetes".to_string(),
                "Microservices".to_string(),
                "System Design".to_string(),
            ],
            timeline: "12-24 months".to_string(),
            salary_range: "$150,000 - $200,000".to_string(),
            base_score: 90.0,
        },
        CareerPath {
            title: "Frontend Architect".to_string(),
            description: "Lead frontend architecture and mentor development teams".to_string(),
            required_skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "JavaScript".to_string(),
                "CSS".to_string(),
                "Performance Optimization".to_string(),
            ],
            timeline: "6-10 months".to_string(),
            salary_range: "$130,000 - $170,000".to_string(),
            base_score: 82.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketDatum;

    fn user_skill(name: &str) -> UserSkill {
        UserSkill {
            skill_name: name.to_string(),
            proficiency_level: 4,
            years_experience: 3.0,
            verified: false,
        }
    }

    fn datum(name: &str, demand: f64, salary: f64, growth: f64) -> MarketDatum {
        MarketDatum {
            skill_name: name.to_string(),
            demand_score: demand,
            avg_salary: salary,
            growth_rate: growth,
            job_count: 1_000,
        }
    }

    #[test]
    fn test_gaps_exclude_owned_skills() {
        let recommender = Recommender::new();
        let market = MarketCatalog::default();
        let skills = vec![user_skill("python"), user_skill("AWS")];

        let gaps = recommender.identify_gaps(&skills, &market).unwrap();
        assert!(gaps.len() <= 10);
        for gap in &gaps {
            let lower = gap.to_lowercase();
            assert_ne!(lower, "python");
            assert_ne!(lower, "aws");
        }
    }

    #[test]
    fn test_gaps_respect_demand_threshold() {
        let recommender = Recommender::new();
        let market = MarketCatalog::new(vec![
            datum("Niche", 60.0, 200_000.0, 40.0),
            datum("Hot", 80.0, 100_000.0, 10.0),
        ])
        .unwrap();

        let gaps = recommender.identify_gaps(&[], &market).unwrap();
        assert_eq!(gaps, vec!["Hot".to_string()]);
    }

    #[test]
    fn test_gaps_ranked_by_composite_score() {
        let recommender = Recommender::new();
        // Same demand; salary and growth decide the order
        let market = MarketCatalog::new(vec![
            datum("Low", 80.0, 80_000.0, 5.0),
            datum("High", 80.0, 160_000.0, 30.0),
        ])
        .unwrap();

        let gaps = recommender.identify_gaps(&[], &market).unwrap();
        assert_eq!(gaps, vec!["High".to_string(), "Low".to_string()]);
    }

    #[test]
    fn test_gaps_capped_at_ten() {
        let recommender = Recommender::new();
        let records: Vec<MarketDatum> = (0..30)
            .map(|i| datum(&format!("Skill{}", i), 90.0, 100_000.0, 10.0))
            .collect();
        let market = MarketCatalog::new(records).unwrap();

        let gaps = recommender.identify_gaps(&[], &market).unwrap();
        assert_eq!(gaps.len(), 10);
    }

    #[test]
    fn test_paths_sorted_by_match_rate() {
        let recommender = Recommender::new();
        let market = MarketCatalog::default();
        // Strong frontend profile
        let skills = vec![
            user_skill("React"),
            user_skill("TypeScript"),
            user_skill("JavaScript"),
            user_skill("CSS"),
        ];

        let paths = recommender.generate_paths(&skills, &market).unwrap();
        assert!(paths.len() <= 5);
        assert_eq!(paths[0].title, "Frontend Architect");
        for pair in paths.windows(2) {
            assert!(pair[0].match_rate >= pair[1].match_rate);
        }
    }

    #[test]
    fn test_paths_tie_break_on_demand_score() {
        let recommender = Recommender::new();
        let market = MarketCatalog::default();

        // No skills: every match rate is 0, demand decides the order
        let paths = recommender.generate_paths(&[], &market).unwrap();
        for pair in paths.windows(2) {
            assert!(pair[0].demand_score >= pair[1].demand_score);
        }
    }

    #[test]
    fn test_absent_market_skill_defaults_to_demand_50() {
        let recommender = Recommender::with_paths(vec![CareerPath {
            title: "Ghost Role".to_string(),
            description: "Requires skills no market record covers".to_string(),
            required_skills: vec!["Unknown One".to_string(), "Unknown Two".to_string()],
            timeline: "n/a".to_string(),
            salary_range: "n/a".to_string(),
            base_score: 80.0,
        }]);
        let market = MarketCatalog::new(vec![]).unwrap();

        let paths = recommender.generate_paths(&[], &market).unwrap();
        // round(80*0.6 + 50*0.4) = 68
        assert_eq!(paths[0].demand_score, 68);
    }

    #[test]
    fn test_path_cap_enforced_with_larger_catalog() {
        let mut catalog = default_career_paths();
        catalog.extend(default_career_paths());
        let recommender = Recommender::with_paths(catalog);

        let paths = recommender
            .generate_paths(&[], &MarketCatalog::default())
            .unwrap();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn test_empty_required_skills_guarded() {
        let recommender = Recommender::with_paths(vec![CareerPath {
            title: "Generalist".to_string(),
            description: "No requirements".to_string(),
            required_skills: vec![],
            timeline: "n/a".to_string(),
            salary_range: "n/a".to_string(),
            base_score: 70.0,
        }]);

        let paths = recommender
            .generate_paths(&[user_skill("React")], &MarketCatalog::default())
            .unwrap();
        assert_eq!(paths[0].match_rate, 0.0);
        // round(70*0.6 + 50*0.4) = 62
        assert_eq!(paths[0].demand_score, 62);
    }
}

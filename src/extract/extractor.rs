//! Lexical skill extraction over free text
//!
//! Two passes run over the (lower-cased) input. The primary pass matches
//! every catalog entry as a whole word and scores confidence by occurrence
//! count. The experience pass looks for "<N> years ... <something>" phrases
//! and credits catalog names contained anywhere in the trailing window;
//! that containment check deliberately has no word-boundary protection, so
//! it can over-match. Known precision/recall tradeoff, kept as is.

use crate::catalog::{SkillCatalog, SkillCategory};
use crate::error::{Result, SkillCompassError};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One skill recognized in a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: SkillCategory,
    /// Heuristic certainty in [0, 1]; not a calibrated probability.
    pub confidence: f64,
}

struct CatalogEntry {
    name: String,
    lower: String,
    category: SkillCategory,
    word_pattern: Regex,
}

/// Extracts catalog skills from raw text.
pub struct SkillExtractor {
    entries: Vec<CatalogEntry>,
    experience_pattern: Regex,
    window_matcher: AhoCorasick,
}

impl SkillExtractor {
    pub fn new(catalog: &SkillCatalog) -> Result<Self> {
        catalog.validate()?;

        let mut entries = Vec::with_capacity(catalog.len());
        for (name, category) in catalog.entries() {
            let lower = name.to_lowercase();
            let word_pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&lower)))
                .map_err(|e| SkillCompassError::Processing(format!(
                    "Failed to compile pattern for skill '{}': {}",
                    name, e
                )))?;
            entries.push(CatalogEntry {
                name: name.to_string(),
                lower,
                category,
                word_pattern,
            });
        }

        // "<N> years/yrs [of] [experience] [in/with/using] <free text>"
        let experience_pattern = Regex::new(
            r"(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience\s*)?(?:in|with|using)?\s*([a-z0-9+#.\s]+)",
        )
        .map_err(|e| SkillCompassError::Processing(format!(
            "Failed to compile experience pattern: {}",
            e
        )))?;

        let patterns: Vec<&str> = entries.iter().map(|e| e.lower.as_str()).collect();
        let window_matcher = AhoCorasick::new(&patterns)
            .map_err(|e| SkillCompassError::Processing(format!(
                "Failed to build window matcher: {}",
                e
            )))?;

        Ok(Self {
            entries,
            experience_pattern,
            window_matcher,
        })
    }

    /// Extract all recognized skills, sorted by confidence descending.
    /// Ties keep first-recorded order (catalog order within each pass).
    pub fn extract(&self, text: &str) -> Vec<ExtractedSkill> {
        let lowered = text.to_lowercase();
        let mut found: HashSet<&str> = HashSet::new();
        let mut skills: Vec<ExtractedSkill> = Vec::new();

        for entry in &self.entries {
            let occurrences = entry.word_pattern.find_iter(&lowered).count();
            if occurrences > 0 && !found.contains(entry.lower.as_str()) {
                found.insert(&entry.lower);
                skills.push(ExtractedSkill {
                    name: entry.name.clone(),
                    category: entry.category,
                    confidence: (0.7 + 0.1 * occurrences as f64).min(1.0),
                });
            }
        }

        for caps in self.experience_pattern.captures_iter(&lowered) {
            let years: f64 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0);
            let window = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if window.is_empty() {
                continue;
            }

            let mut hits = vec![false; self.entries.len()];
            for mat in self.window_matcher.find_overlapping_iter(window) {
                hits[mat.pattern().as_usize()] = true;
            }

            for (idx, entry) in self.entries.iter().enumerate() {
                if hits[idx] && !found.contains(entry.lower.as_str()) {
                    found.insert(&entry.lower);
                    skills.push(ExtractedSkill {
                        name: entry.name.clone(),
                        category: entry.category,
                        confidence: (0.8 + 0.05 * years).min(1.0),
                    });
                }
            }
        }

        // Stable sort keeps insertion order for equal confidences.
        skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        skills
    }

    pub fn catalog_size(&self) -> usize {
        self.entries.len()
    }
}

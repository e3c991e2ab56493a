//! Proficiency and years-of-experience estimation heuristics

use crate::extract::extractor::ExtractedSkill;
use regex::Regex;

/// Heuristic default when no experience mention can be tied to a skill.
const DEFAULT_YEARS: f64 = 2.0;
/// Context window (chars) scanned around a skill mention for year phrases.
const CONTEXT_WINDOW: usize = 100;

/// Estimate a proficiency level in [1, 5] from extraction confidence and
/// years of experience. Adjustments are additive, bounded as applied, and
/// rounded at the end.
pub fn estimate_proficiency(skill: &ExtractedSkill, years_experience: f64) -> u8 {
    let mut level = 3.0_f64;

    if skill.confidence > 0.9 {
        level = (level + 1.0).min(5.0);
    }
    if skill.confidence < 0.75 {
        level = (level - 1.0).max(1.0);
    }

    if years_experience >= 5.0 {
        level = (level + 1.0).min(5.0);
    } else if years_experience >= 3.0 {
        level = (level + 0.5).min(5.0);
    } else if years_experience < 1.0 {
        level = (level - 1.0).max(1.0);
    }

    level.round().clamp(1.0, 5.0) as u8
}

/// Estimate years of experience for a skill mentioned in free text.
///
/// Tries a direct "<N> years ... skill" / "skill ... <N> years" pairing
/// first, then scans a context window around the skill's first occurrence
/// for year mentions, taking the maximum. Falls back to a default of 2
/// (also when the skill does not appear at all).
pub fn estimate_years(text: &str, skill_name: &str) -> f64 {
    let skill_lower = skill_name.to_lowercase();
    let text_lower = text.to_lowercase();
    let escaped = regex::escape(&skill_lower);

    if let Ok(direct) = Regex::new(&format!(
        r"(\d+)\s*(?:years?|yrs?).*?{}|{}.*?(\d+)\s*(?:years?|yrs?)",
        escaped, escaped
    )) {
        if let Some(caps) = direct.captures(&text_lower) {
            let matched = caps.get(1).or_else(|| caps.get(2));
            if let Some(years) = matched.and_then(|m| m.as_str().parse::<f64>().ok()) {
                return years;
            }
        }
    }

    let skill_index = match text_lower.find(&skill_lower) {
        Some(index) => index,
        None => return DEFAULT_YEARS,
    };

    let mut start = skill_index.saturating_sub(CONTEXT_WINDOW);
    while !text_lower.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (skill_index + CONTEXT_WINDOW).min(text_lower.len());
    while !text_lower.is_char_boundary(end) {
        end += 1;
    }
    let window = &text_lower[start..end];

    let year_mentions = Regex::new(r"(\d+)\s*(?:years?|yrs?)").expect("Invalid years regex");
    year_mentions
        .captures_iter(window)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
        .fold(None, |max: Option<f64>, years| {
            Some(max.map_or(years, |m| m.max(years)))
        })
        .unwrap_or(DEFAULT_YEARS)
}

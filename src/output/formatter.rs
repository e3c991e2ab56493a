//! Output formatters: console, JSON and Markdown renditions of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ReadinessReport;
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for rendering readiness reports.
pub trait OutputFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Pick a formatter for the requested output format.
pub fn formatter_for(format: OutputFormat, detailed: bool, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter { use_colors, detailed }),
        OutputFormat::Json => Box::new(JsonFormatter { pretty: true }),
        OutputFormat::Markdown => Box::new(MarkdownFormatter { detailed }),
    }
}

/// Console formatter with colors and a compact layout.
pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

/// JSON formatter for downstream tooling.
pub struct JsonFormatter {
    pub pretty: bool,
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter {
    pub detailed: bool,
}

impl ConsoleFormatter {
    fn paint(&self, text: &str, score: u8) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match score {
            70..=100 => text.green().bold().to_string(),
            40..=69 => text.yellow().bold().to_string(),
            _ => text.red().bold().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let mut out = String::new();
        let p = &report.prediction;

        let _ = writeln!(out, "{}", self.heading(&format!("Career readiness report - {}", report.profile_name)));
        let _ = writeln!(out);
        let _ = writeln!(out, "  Success score:    {}", self.paint(&format!("{:>3}/100", p.success_score), p.success_score));
        let _ = writeln!(out, "  Market demand:    {}", self.paint(&format!("{:>3}/100", p.market_demand_score), p.market_demand_score));
        let _ = writeln!(out, "  Career readiness: {}", self.paint(&format!("{:>3}/100", p.career_readiness_score), p.career_readiness_score));
        let _ = writeln!(out, "  Verdict: {}", report.verdict());

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading("Factor breakdown"));
        let factors = [
            ("Skill diversity", p.factors.skill_diversity),
            ("Market alignment", p.factors.market_alignment),
            ("Experience level", p.factors.experience_level),
            ("Trending skills", p.factors.trending_skills),
            ("High-value skills", p.factors.high_value_skills),
        ];
        for (label, value) in factors {
            let _ = writeln!(out, "  {:<18} {}", label, self.paint(&format!("{:>3}", value), value));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading(&format!("Skills ({} recognized)", report.user_skills.len())));
        let shown = if self.detailed { report.user_skills.len() } else { 10 };
        for skill in report.user_skills.iter().take(shown) {
            let _ = writeln!(
                out,
                "  • {} (level {}/5, ~{:.0}y)",
                skill.skill_name, skill.proficiency_level, skill.years_experience
            );
        }
        if report.user_skills.len() > shown {
            let _ = writeln!(out, "  … and {} more", report.user_skills.len() - shown);
        }

        if !report.skill_gaps.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.heading("Skill gaps worth closing"));
            for (i, gap) in report.skill_gaps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, gap);
            }
        }

        if !report.career_paths.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.heading("Recommended career paths"));
            for path in &report.career_paths {
                let _ = writeln!(
                    out,
                    "  • {} - demand {}/100, {}, {}",
                    path.title, path.demand_score, path.timeline, path.salary_range
                );
                if self.detailed {
                    let _ = writeln!(out, "    {}", path.description);
                    let _ = writeln!(out, "    Requires: {}", path.required_skills.join(", "));
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Generated {} in {}ms ({} market records, {} catalog skills)",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.processing_time_ms,
            report.metadata.market_records,
            report.metadata.catalog_size
        );

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let mut out = String::new();
        let p = &report.prediction;

        let _ = writeln!(out, "# Career readiness report - {}", report.profile_name);
        let _ = writeln!(out);
        let _ = writeln!(out, "| Score | Value |");
        let _ = writeln!(out, "|---|---|");
        let _ = writeln!(out, "| Success | {}/100 |", p.success_score);
        let _ = writeln!(out, "| Market demand | {}/100 |", p.market_demand_score);
        let _ = writeln!(out, "| Career readiness | {}/100 |", p.career_readiness_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "**Verdict:** {}", report.verdict());
        let _ = writeln!(out);

        let _ = writeln!(out, "## Factors");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Factor | Score |");
        let _ = writeln!(out, "|---|---|");
        let _ = writeln!(out, "| Skill diversity | {} |", p.factors.skill_diversity);
        let _ = writeln!(out, "| Market alignment | {} |", p.factors.market_alignment);
        let _ = writeln!(out, "| Experience level | {} |", p.factors.experience_level);
        let _ = writeln!(out, "| Trending skills | {} |", p.factors.trending_skills);
        let _ = writeln!(out, "| High-value skills | {} |", p.factors.high_value_skills);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Skills");
        let _ = writeln!(out);
        for skill in &report.user_skills {
            let _ = writeln!(
                out,
                "- {} (level {}/5, ~{:.0} years)",
                skill.skill_name, skill.proficiency_level, skill.years_experience
            );
        }
        let _ = writeln!(out);

        if !report.skill_gaps.is_empty() {
            let _ = writeln!(out, "## Skill gaps");
            let _ = writeln!(out);
            for gap in &report.skill_gaps {
                let _ = writeln!(out, "- {}", gap);
            }
            let _ = writeln!(out);
        }

        if !report.career_paths.is_empty() {
            let _ = writeln!(out, "## Recommended paths");
            let _ = writeln!(out);
            for path in &report.career_paths {
                let _ = writeln!(out, "### {}", path.title);
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", path.description);
                let _ = writeln!(out);
                let _ = writeln!(out, "- Demand: {}/100", path.demand_score);
                let _ = writeln!(out, "- Timeline: {}", path.timeline);
                let _ = writeln!(out, "- Salary range: {}", path.salary_range);
                let _ = writeln!(out, "- Required skills: {}", path.required_skills.join(", "));
                let _ = writeln!(out);
            }
        }

        let _ = writeln!(
            out,
            "_Generated {} in {}ms_",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.processing_time_ms
        );

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::config::Config;
    use crate::market::MarketCatalog;

    fn sample_report() -> ReadinessReport {
        let analyzer = Analyzer::new(&Config::default()).unwrap();
        analyzer
            .analyze(
                "Jane Smith\nExperience: 5 years with React and Python",
                &MarketCatalog::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_console_format_without_colors() {
        let formatter = ConsoleFormatter {
            use_colors: false,
            detailed: false,
        };
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Jane Smith"));
        assert!(output.contains("Success score"));
        assert!(!output.contains('\u{1b}')); // no ANSI escapes
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter { pretty: true };
        let output = formatter.format_report(&sample_report()).unwrap();
        let parsed: ReadinessReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.profile_name, "Jane Smith");
    }

    #[test]
    fn test_markdown_format_has_sections() {
        let formatter = MarkdownFormatter { detailed: true };
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("# Career readiness report"));
        assert!(output.contains("## Factors"));
        assert!(output.contains("## Skills"));
    }

    #[test]
    fn test_formatter_factory_matches_format() {
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
            let formatter = formatter_for(format, false, false);
            assert_eq!(formatter.supports_format(), format);
        }
    }
}

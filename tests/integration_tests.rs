//! Integration tests for the skill compass pipeline

use skill_compass::analyzer::Analyzer;
use skill_compass::config::Config;
use skill_compass::input::InputManager;
use skill_compass::market::MarketCatalog;
use skill_compass::output::{formatter_for, OutputFormatter};
use skill_compass::config::OutputFormat;
use std::path::Path;

fn load_fixture(name: &str) -> String {
    let mut manager = InputManager::new();
    manager
        .extract_text(&Path::new("tests/fixtures").join(name))
        .expect("fixture should load")
}

fn fixture_market() -> MarketCatalog {
    MarketCatalog::load_from_file(Path::new("tests/fixtures/market_data.json"))
        .expect("market fixture should load")
}

#[test]
fn test_text_extraction_from_txt() {
    let text = load_fixture("sample_profile.txt");
    assert!(text.contains("John Doe"));
    assert!(text.contains("React"));
    assert!(text.contains("Kubernetes"));
}

#[test]
fn test_text_extraction_from_markdown() {
    let text = load_fixture("sample_profile.md");
    assert!(text.contains("John Doe"));
    assert!(text.contains("React"));
    // No markdown formatting survives
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[test]
fn test_end_to_end_analysis() {
    let text = load_fixture("sample_profile.txt");
    let market = fixture_market();
    let analyzer = Analyzer::new(&Config::default()).unwrap();

    let report = analyzer.analyze(&text, &market).unwrap();

    assert_eq!(report.profile_name, "John Doe");
    assert!(report.user_skills.iter().any(|s| s.skill_name == "React"));
    assert!(report.user_skills.iter().any(|s| s.skill_name == "Kubernetes"));

    // Every surfaced score sits in [0, 100]
    let p = &report.prediction;
    for value in [
        p.success_score,
        p.market_demand_score,
        p.career_readiness_score,
        p.factors.skill_diversity,
        p.factors.market_alignment,
        p.factors.experience_level,
        p.factors.trending_skills,
        p.factors.high_value_skills,
    ] {
        assert!(value <= 100);
    }

    // A profile this strong should score well above the floor
    assert!(p.success_score >= 50);

    // Gaps never include owned skills
    for gap in &report.skill_gaps {
        assert!(!report
            .user_skills
            .iter()
            .any(|s| s.skill_name.eq_ignore_ascii_case(gap)));
    }

    // Paths are capped and ordered by match rate
    assert!(report.career_paths.len() <= 5);
    for pair in report.career_paths.windows(2) {
        assert!(pair[0].match_rate >= pair[1].match_rate);
    }
}

#[test]
fn test_markdown_and_txt_profiles_agree_on_skills() {
    let analyzer = Analyzer::new(&Config::default()).unwrap();
    let market = fixture_market();

    let txt_report = analyzer.analyze(&load_fixture("sample_profile.txt"), &market).unwrap();
    let md_report = analyzer.analyze(&load_fixture("sample_profile.md"), &market).unwrap();

    let txt_names: Vec<&str> = txt_report.user_skills.iter().map(|s| s.skill_name.as_str()).collect();
    for name in ["React", "TypeScript", "Docker", "Kubernetes", "AWS"] {
        assert!(txt_names.contains(&name));
        assert!(md_report.user_skills.iter().any(|s| s.skill_name == name));
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let text = load_fixture("sample_profile.txt");
    let market = fixture_market();
    let analyzer = Analyzer::new(&Config::default()).unwrap();

    let first = analyzer.analyze(&text, &market).unwrap();
    let second = analyzer.analyze(&text, &market).unwrap();

    assert_eq!(first.prediction, second.prediction);
    assert_eq!(first.skill_gaps, second.skill_gaps);
    assert_eq!(first.user_skills, second.user_skills);
}

#[test]
fn test_report_renders_in_all_formats() {
    let text = load_fixture("sample_profile.txt");
    let analyzer = Analyzer::new(&Config::default()).unwrap();
    let report = analyzer.analyze(&text, &fixture_market()).unwrap();

    for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
        let formatter = formatter_for(format, true, false);
        let rendered = formatter.format_report(&report).unwrap();
        assert!(rendered.contains("John Doe"));
    }
}

#[test]
fn test_unknown_profile_text_still_produces_report() {
    let analyzer = Analyzer::new(&Config::default()).unwrap();
    let report = analyzer
        .analyze("completely unrelated prose about gardening", &fixture_market())
        .unwrap();

    assert_eq!(report.profile_name, "User");
    assert!(report.user_skills.is_empty());
    assert_eq!(report.prediction.success_score, 0);
    // Recommendations still rank on demand alone
    assert!(!report.career_paths.is_empty());
    assert!(!report.skill_gaps.is_empty());
}

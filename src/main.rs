//! Skill compass: career readiness analysis from resume and profile text

mod analyzer;
mod catalog;
mod cli;
mod config;
mod error;
mod extract;
mod input;
mod market;
mod output;
mod scoring;

use analyzer::Analyzer;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillCompassError};
use input::InputManager;
use log::{error, info};
use market::MarketCatalog;
use output::formatter_for;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            profile,
            market,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&profile, &["txt", "md", "markdown"])
                .map_err(|e| SkillCompassError::InvalidInput(format!("Profile file: {}", e)))?;
            if let Some(market_path) = &market {
                cli::validate_file_extension(market_path, &["json"])
                    .map_err(|e| SkillCompassError::InvalidInput(format!("Market file: {}", e)))?;
            }

            let output_format = cli::parse_output_format(&output).map_err(SkillCompassError::InvalidInput)?;

            info!("Starting readiness analysis for {}", profile.display());

            let mut input_manager = InputManager::new();
            let profile_text = input_manager.extract_text(&profile)?;

            let market_catalog = match &market {
                Some(path) => MarketCatalog::load_from_file(path)?,
                None => {
                    info!("No market file supplied, using the bundled snapshot");
                    MarketCatalog::default()
                }
            };

            let analyzer = Analyzer::new(&config)?;
            let report = analyzer.analyze(&profile_text, &market_catalog)?;

            let use_colors = config.output.color_output && save.is_none();
            let formatter = formatter_for(output_format, detailed || config.output.detailed, use_colors);
            let rendered = formatter.format_report(&report)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("Report saved to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Extract { profile } => {
            cli::validate_file_extension(&profile, &["txt", "md", "markdown"])
                .map_err(|e| SkillCompassError::InvalidInput(format!("Profile file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let profile_text = input_manager.extract_text(&profile)?;

            let extractor = extract::SkillExtractor::new(&config.catalog)?;
            let skills = extractor.extract(&profile_text);

            if skills.is_empty() {
                println!("No recognized skills found.");
            } else {
                println!("Extracted {} skills:", skills.len());
                for skill in &skills {
                    println!(
                        "  {:<24} {:<10} confidence {:.2}",
                        skill.name,
                        format!("{:?}", skill.category).to_lowercase(),
                        skill.confidence
                    );
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!(
                    "Catalog: {} technical skills, {} soft skills",
                    config.catalog.technical_skills.len(),
                    config.catalog.soft_skills.len()
                );
                println!("\nScoring weights:");
                println!("  Skill diversity:   {:.2}", config.scoring.diversity_weight);
                println!("  Market alignment:  {:.2}", config.scoring.alignment_weight);
                println!("  Experience level:  {:.2}", config.scoring.experience_weight);
                println!("  Trending skills:   {:.2}", config.scoring.trending_weight);
                println!("  High-value skills: {:.2}", config.scoring.high_value_weight);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

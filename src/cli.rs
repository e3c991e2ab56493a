//! CLI interface for skill compass

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-compass")]
#[command(about = "Career readiness analysis from resume and profile text")]
#[command(long_about = "Extract skills from free-text profiles, score them against market demand, and get skill gaps and ranked career paths")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a profile and produce a readiness report
    Analyze {
        /// Path to profile file (TXT, MD)
        #[arg(short, long)]
        profile: PathBuf,

        /// Path to a market data JSON file (bundled snapshot if omitted)
        #[arg(short, long)]
        market: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file instead of printing
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract skills from a profile without scoring
    Extract {
        /// Path to profile file (TXT, MD)
        #[arg(short, long)]
        profile: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("a.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("a.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("a.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("noext"), &["txt"]).is_err());
    }
}

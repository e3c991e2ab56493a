//! Skill compass library: skill extraction, scoring and career recommendations

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod market;
pub mod output;
pub mod scoring;

pub use analyzer::Analyzer;
pub use config::Config;
pub use error::{Result, SkillCompassError};

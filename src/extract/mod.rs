//! Skill extraction pipeline: free text in, scored skills out

pub mod estimate;
pub mod extractor;
pub mod profile;

pub use extractor::{ExtractedSkill, SkillExtractor};
pub use profile::{ParsedProfile, ProfileParser};

//! Profile text ingestion

pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
pub use text_extractor::TextExtractor;

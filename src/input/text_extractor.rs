//! Text extraction from supported profile file formats

use crate::error::{Result, SkillCompassError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;

/// Extracts plain text from profile files (.txt, .md).
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("txt") => {
                let content = std::fs::read_to_string(path)?;
                Ok(content)
            }
            Some("md") | Some("markdown") => {
                let content = std::fs::read_to_string(path)?;
                Ok(self.markdown_to_text(&content))
            }
            Some(other) => Err(SkillCompassError::UnsupportedFormat(format!(
                ".{} (supported: .txt, .md)",
                other
            ))),
            None => Err(SkillCompassError::UnsupportedFormat(
                "file has no extension (supported: .txt, .md)".to_string(),
            )),
        }
    }

    /// Strip Markdown formatting, keeping the readable text with line
    /// structure preserved well enough for section splitting.
    fn markdown_to_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut text = String::new();

        for event in parser {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => text.push('\n'),
                _ => {}
            }
        }

        text.trim().to_string()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

//! Input manager with a per-path extraction cache

use crate::error::Result;
use crate::input::text_extractor::TextExtractor;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    extractor: TextExtractor,
    cache: HashMap<PathBuf, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            extractor: TextExtractor::new(),
            cache: HashMap::new(),
        }
    }

    /// Extract text from a file, reusing the cached result for repeated
    /// paths within one run.
    pub fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(cached) = self.cache.get(path) {
            log::debug!("Using cached text for {}", path.display());
            return Ok(cached.clone());
        }

        let text = self.extractor.extract(path)?;
        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

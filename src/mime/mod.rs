mod table;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::Path;

/// Media type returned when no extension mapping exists
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extension -> media-type lookup with a guaranteed fallback
///
/// The table is built once at construction and never mutated during
/// generation, so there is no hidden first-call initialization.
pub struct MimeResolver {
    /// Extension (without dot, lowercase) -> media type
    map: HashMap<String, String>,
    /// Returned for unknown or missing extensions
    fallback: String,
}

impl MimeResolver {
    /// Create a resolver seeded with the default web-asset table
    pub fn new() -> Self {
        let map = table::DEFAULT_TYPES
            .iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();

        Self {
            map,
            fallback: FALLBACK_MIME.to_string(),
        }
    }

    /// Register or override a mapping for a file extension
    ///
    /// # Arguments
    /// * `extension` - File extension without dot (e.g., "html", "css")
    /// * `mime` - Media type string to return for that extension
    pub fn register(&mut self, extension: impl Into<String>, mime: impl Into<String>) {
        self.map.insert(extension.into().to_lowercase(), mime.into());
    }

    /// Resolve the media type for a virtual path
    ///
    /// Extension matching is case-insensitive. Returns the fallback for
    /// unknown extensions or paths without one; never fails.
    pub fn resolve(&self, path: &str) -> &str {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        self.map
            .get(&ext)
            .map(|mime| mime.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Get the number of known extensions (excluding the fallback)
    pub fn known_count(&self) -> usize {
        self.map.len()
    }
}

impl Default for MimeResolver {
    fn default() -> Self {
        Self::new()
    }
}

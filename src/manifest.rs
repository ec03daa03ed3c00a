use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::resource::ResourceTable;

/// Top-level metadata describing one generation run
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub source_folder: String,
    pub output: String,
    pub stats: ManifestStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestStats {
    pub file_count: u32,
    pub total_size_bytes: u64,
    pub header_size_bytes: u64,
}

impl Manifest {
    /// Build a manifest for a generated resource table
    pub fn new(
        table: &ResourceTable,
        source_folder: &str,
        output: &str,
        header_size_bytes: u64,
    ) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("flashpack v{}", env!("CARGO_PKG_VERSION")),
            source_folder: source_folder.to_string(),
            output: output.to_string(),
            stats: ManifestStats {
                file_count: table.len() as u32,
                total_size_bytes: table.total_bytes(),
                header_size_bytes,
            },
        }
    }

    /// Write the manifest as pretty-printed JSON
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{path_identifier, VirtualFile};
    use tempfile::tempdir;

    fn sample_table() -> ResourceTable {
        ResourceTable::from_entries(vec![
            VirtualFile {
                path: "/index.html".to_string(),
                mime: "text/html".to_string(),
                bytes: vec![0x3c, 0x21, 0x3e],
                identifier: path_identifier("/index.html"),
            },
            VirtualFile {
                path: "/sub/a.txt".to_string(),
                mime: "text/plain".to_string(),
                bytes: Vec::new(),
                identifier: path_identifier("/sub/a.txt"),
            },
        ])
    }

    #[test]
    fn test_manifest_stats_reflect_table() {
        let manifest = Manifest::new(&sample_table(), "public", "PROGMEM_Files.h", 1024);

        assert_eq!(manifest.stats.file_count, 2);
        assert_eq!(manifest.stats.total_size_bytes, 3);
        assert_eq!(manifest.stats.header_size_bytes, 1024);
        assert_eq!(manifest.source_folder, "public");
        assert_eq!(manifest.output, "PROGMEM_Files.h");
    }

    #[test]
    fn test_manifest_json_round_trip() {
        let manifest = Manifest::new(&sample_table(), "public", "out.h", 42);
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.json");

        manifest.write_to_file(&path).unwrap();

        let parsed: Manifest =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.stats.file_count, manifest.stats.file_count);
        assert_eq!(parsed.stats.total_size_bytes, manifest.stats.total_size_bytes);
        assert_eq!(parsed.created_at, manifest.created_at);
        assert_eq!(parsed.generator, manifest.generator);
    }
}

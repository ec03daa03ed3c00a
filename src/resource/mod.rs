mod ident;


pub use ident::{path_identifier, symbol, Role};

use crate::mime::MimeResolver;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One embeddable resource: path, media type, raw bytes, identifier
#[derive(Debug, Clone)]
pub struct VirtualFile {
    /// Virtual path rooted at "/" (unique within a table)
    pub path: String,
    /// Resolved media type, or the octet-stream fallback
    pub mime: String,
    /// Exact file contents
    pub bytes: Vec<u8>,
    /// Lowercase hex digest of `path`, names the generated constants
    pub identifier: String,
}

impl VirtualFile {
    /// Symbol name of one of this file's generated constants
    pub fn symbol(&self, role: Role) -> String {
        ident::symbol(&self.identifier, role)
    }
}

/// Ordered set of embeddable resources
///
/// Order is traversal order, not sorted. Built fresh on every run; no
/// mutation after construction.
#[derive(Debug, Default)]
pub struct ResourceTable {
    entries: Vec<VirtualFile>,
}

impl ResourceTable {
    /// Build a table from already-assembled entries, keeping their order
    pub fn from_entries(entries: Vec<VirtualFile>) -> Self {
        Self { entries }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entries' byte lengths
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|file| file.bytes.len() as u64).sum()
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.entries.iter()
    }

    /// Look up an entry by virtual path
    ///
    /// Case-sensitive exact match, linear scan in table order, first
    /// match wins.
    pub fn find(&self, name: &str) -> Option<&VirtualFile> {
        self.entries.iter().find(|file| file.path == name)
    }
}

/// Read every scanned file's bytes and assemble the resource table
///
/// `paths` are virtual paths rooted at "/"; each maps to the disk path
/// `root` joined with the path minus its leading slash. A read failure
/// aborts the build.
pub fn collect(root: &Path, paths: &[String], resolver: &MimeResolver) -> Result<ResourceTable> {
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let disk_path = root.join(path.trim_start_matches('/'));
        let bytes = fs::read(&disk_path)
            .with_context(|| format!("Failed to read {}", disk_path.display()))?;

        entries.push(VirtualFile {
            path: path.clone(),
            mime: resolver.resolve(path).to_string(),
            bytes,
            identifier: ident::path_identifier(path),
        });
    }

    Ok(ResourceTable::from_entries(entries))
}

// Public API exports
pub mod codegen;
pub mod manifest;
pub mod mime;
pub mod resource;
pub mod scanner;

// Re-export main types for convenience
pub use codegen::{hex_byte_literals, render_header, write_header};
pub use manifest::{Manifest, ManifestStats};
pub use mime::{MimeResolver, FALLBACK_MIME};
pub use resource::{collect, path_identifier, symbol, ResourceTable, Role, VirtualFile};
pub use scanner::{scan_tree, ScanError};

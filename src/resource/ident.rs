use sha2::{Digest, Sha256};

/// Role of one of the three constants generated per file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The path string constant
    Name,
    /// The media-type string constant
    Mime,
    /// The byte-array constant
    Data,
}

impl Role {
    /// Suffix appended to the symbol name
    pub fn suffix(self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::Mime => "mime",
            Role::Data => "data",
        }
    }
}

/// Derive the identifier naming a virtual path's generated constants
///
/// Lowercase hex of the first 16 bytes (128 bits) of SHA-256 over the
/// path's UTF-8 bytes. Fixed length (32 chars), deterministic; distinct
/// paths collide only with negligible probability.
pub fn path_identifier(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    hex::encode(&digest[..16])
}

/// Build the C symbol name for one of a file's generated constants
pub fn symbol(identifier: &str, role: Role) -> String {
    format!("progmem_file_{}_{}", identifier, role.suffix())
}

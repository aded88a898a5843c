//! Huellas de contenido para fórmulas guardadas.
pub mod canonical_json;
pub use canonical_json::to_canonical_json;

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Digest SHA-256 (hex) del JSON canónico de `value`.
pub fn hash_value(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(to_canonical_json(value).as_bytes());
    format!("{:x}", hasher.finalize())
}

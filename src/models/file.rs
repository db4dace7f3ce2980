//! Fax document attachment model.

use serde::{Deserialize, Serialize};

/// One document attached to a fax.
///
/// `file_contents` is the base64 text exactly as delivered by the service;
/// the client does not decode it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaxFile {
    /// Payload length in bytes, as reported by the service.
    #[serde(default)]
    pub content_length: u64,

    /// MIME content type (e.g. "application/pdf").
    #[serde(default)]
    pub content_type: Option<String>,

    /// Base64-encoded document payload.
    #[serde(default)]
    pub file_contents: String,
}

//! Media attachment types.

use serde::{Deserialize, Serialize};

/// A binary attachment carried as base64 with its MIME type.
///
/// Used for reference images, PDF briefs, overlay templates, and generated
/// images. Payloads stay base64-encoded end to end because that is the wire
/// representation of the external API's inline data parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaData {
    /// Base64-encoded payload
    pub data: String,
    /// MIME type, e.g. "image/png" or "application/pdf"
    pub mime_type: String,
}

impl MediaData {
    /// Create a new attachment from a base64 payload and MIME type.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// How a template image is applied over a generated post image.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TemplateKind {
    /// Template is stretched to cover the whole base image
    #[strum(serialize = "full-bleed")]
    Full,
    /// Template is scaled down and placed as a bottom-centered watermark
    #[strum(serialize = "logo")]
    Logo,
}

/// A user-supplied overlay template: the image plus how to apply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    /// The template image
    pub media: MediaData,
    /// Overlay kind
    pub kind: TemplateKind,
}

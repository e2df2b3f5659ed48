//! Generative Language API data transfer objects.
//!
//! Field names follow the REST wire format (camelCase) via serde renames;
//! only the fields this gateway consumes are modeled.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One part of a content payload: text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline data part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 payload with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// A block of parts forming one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts
    pub parts: Vec<Part>,
}

/// Generation tuning knobs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// MIME type the response must use ("application/json" for structured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Response schema in the API's schema dialect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<JsonValue>,
    /// Requested response modalities (e.g. ["IMAGE", "TEXT"] for mutation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// System instruction block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// User content
    pub contents: Vec<Content>,
    /// Tuning knobs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates; the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's text parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First inline-data part of the first candidate, if any.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.inline_data.as_ref()))
    }
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content
    pub content: Content,
}

/// Imagen `predict` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ImagenRequest {
    /// Prompt instances (one per requested image)
    pub instances: Vec<ImagenInstance>,
    /// Generation parameters
    pub parameters: ImagenParameters,
}

/// One Imagen prompt instance.
#[derive(Debug, Clone, Serialize)]
pub struct ImagenInstance {
    /// Image prompt
    pub prompt: String,
}

/// Imagen generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenParameters {
    /// Number of images to generate
    pub sample_count: u32,
    /// Aspect ratio, e.g. "1:1" or "9:16"
    pub aspect_ratio: String,
    /// Output MIME type
    pub output_mime_type: String,
}

/// Imagen `predict` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagenResponse {
    /// Generated images
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: String,
    /// MIME type of the image
    #[serde(default = "default_png")]
    pub mime_type: String,
}

fn default_png() -> String {
    "image/png".to_string()
}

/// Veo `predictLongRunning` request body.
#[derive(Debug, Clone, Serialize)]
pub struct VeoRequest {
    /// Prompt instances
    pub instances: Vec<VeoInstance>,
    /// Generation parameters
    pub parameters: VeoParameters,
}

/// One Veo prompt instance: motion prompt plus the seed image.
#[derive(Debug, Clone, Serialize)]
pub struct VeoInstance {
    /// Motion prompt
    pub prompt: String,
    /// Seed image
    pub image: VeoImage,
}

/// Seed image payload for Veo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoImage {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: String,
    /// MIME type of the image
    pub mime_type: String,
}

/// Veo generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoParameters {
    /// Number of videos to generate
    pub sample_count: u32,
}

/// Long-running operation handle returned by `predictLongRunning`.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationHandle {
    /// Operation resource name, polled until done
    pub name: String,
}

/// Long-running operation status returned by the operations endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationStatus {
    /// Whether the operation reached a terminal state
    #[serde(default)]
    pub done: bool,
    /// Terminal payload, present when done
    #[serde(default)]
    pub response: Option<VeoOperationResponse>,
}

/// Terminal payload of a Veo operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoOperationResponse {
    /// Generated video wrapper
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Generated video samples.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated samples; the first one is used
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

/// One generated video sample.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSample {
    /// Video resource
    pub video: VideoResource,
}

/// Video resource with its download URI.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoResource {
    /// Download URI
    pub uri: String,
}

impl OperationStatus {
    /// Download URI of the first generated sample, if present.
    pub fn video_uri(&self) -> Option<String> {
        self.response
            .as_ref()
            .and_then(|r| r.generate_video_response.as_ref())
            .and_then(|r| r.generated_samples.first())
            .map(|s| s.video.uri.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                parts: vec![Part::text("system")],
            }),
            contents: vec![Content {
                parts: vec![Part::inline("image/png", "aGk="), Part::text("prompt")],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(serde_json::json!({"type": "OBJECT"})),
                response_modalities: None,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert!(json["generationConfig"].get("responseMimeType").is_some());
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_some());
    }

    #[test]
    fn response_text_joins_text_parts() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [
                {"text": "hello "}, {"text": "world"}
            ]}}]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text(), "hello world");
    }

    #[test]
    fn operation_status_extracts_video_uri() {
        let body = serde_json::json!({
            "done": true,
            "response": {"generateVideoResponse": {"generatedSamples": [
                {"video": {"uri": "https://video.example/v.mp4"}}
            ]}}
        });
        let status: OperationStatus = serde_json::from_value(body).unwrap();
        assert!(status.done);
        assert_eq!(
            status.video_uri().as_deref(),
            Some("https://video.example/v.mp4")
        );
    }

    #[test]
    fn running_operation_has_no_uri() {
        let status: OperationStatus = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(!status.done);
        assert_eq!(status.video_uri(), None);
    }
}

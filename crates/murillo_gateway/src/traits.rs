//! Trait definitions for the external generation capability.

use async_trait::async_trait;
use murillo_core::{AspectRatio, MediaData};
use murillo_error::MurilloResult;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Handle for an in-flight video generation job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJob {
    /// Provider-side operation name used for polling
    pub operation_name: String,
}

/// Result of a single poll of a video job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJobStatus {
    /// Whether the job has reached a terminal state
    pub done: bool,
    /// Download URI of the generated video, present only on success
    pub video_uri: Option<String>,
}

/// The external generation capability, one method per operation.
///
/// Each method is a single external call with no internal retry. Transport
/// failures surface as `GatewayError` with the underlying message attached
/// verbatim; structured responses that cannot be parsed surface as
/// `SchemaViolation`. Implementations must be safe to share across
/// concurrent pipeline runs.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate JSON conforming to the given response schema.
    ///
    /// `parts` carries optional inline attachments (reference image, PDF)
    /// that precede the prompt text.
    async fn generate_structured(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &JsonValue,
        parts: &[MediaData],
        temperature: Option<f32>,
    ) -> MurilloResult<JsonValue>;

    /// Generate plain text with no response schema.
    ///
    /// Used for the visual-prompt derivation step, which wants free prose
    /// rather than a structured payload.
    async fn generate_text(
        &self,
        system_instruction: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> MurilloResult<String>;

    /// Generate one image from a prompt at the given aspect ratio.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> MurilloResult<MediaData>;

    /// Mutate an existing image according to an instruction.
    ///
    /// Fails with `NoImageProduced` when the model completes but returns no
    /// inline image part.
    async fn mutate_image(&self, image: &MediaData, instruction: &str) -> MurilloResult<MediaData>;

    /// Start an image-to-video generation job.
    async fn start_video_job(&self, image: &MediaData, prompt: &str) -> MurilloResult<VideoJob>;

    /// Poll a video job once. Drive to completion with
    /// [`await_video_completion`](crate::await_video_completion).
    async fn poll_video_job(&self, job: &VideoJob) -> MurilloResult<VideoJobStatus>;
}

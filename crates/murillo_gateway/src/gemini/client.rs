//! Gemini REST gateway client.

use async_trait::async_trait;
use murillo_core::{AspectRatio, MediaData};
use murillo_error::{GatewayError, GatewayErrorKind, MurilloResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

use super::config::GatewayConfig;
use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImagenInstance,
    ImagenParameters, ImagenRequest, ImagenResponse, OperationHandle, OperationStatus, Part,
    VeoImage, VeoInstance, VeoParameters, VeoRequest,
};
use crate::{ModelGateway, VideoJob, VideoJobStatus};

/// REST client for the Generative Language API.
///
/// One shared reqwest client, no internal retry, no rate limiting: pacing
/// and retry policy belong to the calling layer.
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: Client,
    config: GatewayConfig,
}

impl GeminiGateway {
    /// Create a gateway from an explicit configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a gateway configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> MurilloResult<Self> {
        Ok(Self::new(GatewayConfig::from_env()?))
    }

    fn model_url(&self, model: &str, verb: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.base_url(),
            model,
            verb,
            self.config.api_key()
        )
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> MurilloResult<Resp>
    where
        Req: serde::Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::Transport(e.to_string())))?;

        Self::decode_response(response).await
    }

    async fn decode_response<Resp: DeserializeOwned>(
        response: reqwest::Response,
    ) -> MurilloResult<Resp> {
        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::new(GatewayErrorKind::HttpError {
                status_code,
                message,
            })
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::Transport(e.to_string())).into())
    }

    fn build_contents(parts: &[MediaData], prompt: &str) -> Vec<Content> {
        let mut wire_parts: Vec<Part> = parts
            .iter()
            .map(|p| Part::inline(p.mime_type.clone(), p.data.clone()))
            .collect();
        wire_parts.push(Part::text(prompt));
        vec![Content { parts: wire_parts }]
    }

    fn system(instruction: &str) -> Option<Content> {
        if instruction.is_empty() {
            None
        } else {
            Some(Content {
                parts: vec![Part::text(instruction)],
            })
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    #[instrument(skip_all, fields(model = %self.config.text_model()))]
    async fn generate_structured(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &JsonValue,
        parts: &[MediaData],
        temperature: Option<f32>,
    ) -> MurilloResult<JsonValue> {
        let request = GenerateContentRequest {
            system_instruction: Self::system(system_instruction),
            contents: Self::build_contents(parts, prompt),
            generation_config: Some(GenerationConfig {
                temperature,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
                response_modalities: None,
            }),
        };

        let url = self.model_url(self.config.text_model(), "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, &request).await?;

        let text = response.text();
        debug!(response_length = text.len(), "Structured response received");

        serde_json::from_str(text.trim())
            .map_err(|e| GatewayError::new(GatewayErrorKind::SchemaViolation(e.to_string())).into())
    }

    #[instrument(skip_all, fields(model = %self.config.text_model()))]
    async fn generate_text(
        &self,
        system_instruction: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> MurilloResult<String> {
        let request = GenerateContentRequest {
            system_instruction: Self::system(system_instruction),
            contents: Self::build_contents(&[], prompt),
            generation_config: Some(GenerationConfig {
                temperature,
                ..Default::default()
            }),
        };

        let url = self.model_url(self.config.text_model(), "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, &request).await?;
        Ok(response.text().trim().to_string())
    }

    #[instrument(skip_all, fields(model = %self.config.image_model(), aspect = %aspect_ratio))]
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> MurilloResult<MediaData> {
        let request = ImagenRequest {
            instances: vec![ImagenInstance {
                prompt: prompt.to_string(),
            }],
            parameters: ImagenParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.to_string(),
                output_mime_type: "image/png".to_string(),
            },
        };

        let url = self.model_url(self.config.image_model(), "predict");
        let response: ImagenResponse = self.post_json(&url, &request).await?;

        let prediction = response
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::NoImageProduced))?;

        Ok(MediaData::new(
            prediction.bytes_base64_encoded,
            prediction.mime_type,
        ))
    }

    #[instrument(skip_all, fields(model = %self.config.image_edit_model()))]
    async fn mutate_image(&self, image: &MediaData, instruction: &str) -> MurilloResult<MediaData> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                parts: vec![
                    Part::inline(image.mime_type.clone(), image.data.clone()),
                    Part::text(instruction),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
                ..Default::default()
            }),
        };

        let url = self.model_url(self.config.image_edit_model(), "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, &request).await?;

        let inline = response
            .inline_data()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::NoImageProduced))?;

        Ok(MediaData::new(inline.data.clone(), inline.mime_type.clone()))
    }

    #[instrument(skip_all, fields(model = %self.config.video_model()))]
    async fn start_video_job(&self, image: &MediaData, prompt: &str) -> MurilloResult<VideoJob> {
        let request = VeoRequest {
            instances: vec![VeoInstance {
                prompt: prompt.to_string(),
                image: VeoImage {
                    bytes_base64_encoded: image.data.clone(),
                    mime_type: image.mime_type.clone(),
                },
            }],
            parameters: VeoParameters { sample_count: 1 },
        };

        let url = self.model_url(self.config.video_model(), "predictLongRunning");
        let handle: OperationHandle = self.post_json(&url, &request).await?;

        debug!(operation = %handle.name, "Video job started");
        Ok(VideoJob {
            operation_name: handle.name,
        })
    }

    #[instrument(skip(self), fields(operation = %job.operation_name))]
    async fn poll_video_job(&self, job: &VideoJob) -> MurilloResult<VideoJobStatus> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url(),
            job.operation_name,
            self.config.api_key()
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::Transport(e.to_string())))?;

        let status: OperationStatus = Self::decode_response(response).await?;
        Ok(VideoJobStatus {
            done: status.done,
            video_uri: status.video_uri(),
        })
    }
}

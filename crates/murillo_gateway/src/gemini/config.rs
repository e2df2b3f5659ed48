//! Gateway configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use murillo_error::{GatewayError, GatewayErrorKind, MurilloResult};

/// Configuration for the Gemini gateway.
///
/// Model identifiers default to the ones the pipeline was tuned against;
/// override them through the builder when newer models roll out.
///
/// # Examples
///
/// ```
/// use murillo_gateway::GatewayConfig;
///
/// let config = GatewayConfig::builder()
///     .api_key("test-key".to_string())
///     .build()
///     .unwrap();
/// assert_eq!(config.text_model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct GatewayConfig {
    /// API key for the Generative Language API
    api_key: String,
    /// Base URL, overridable for tests
    #[builder(default = "String::from(\"https://generativelanguage.googleapis.com/v1beta\")")]
    base_url: String,
    /// Model for structured and plain text generation
    #[builder(default = "String::from(\"gemini-2.5-flash\")")]
    text_model: String,
    /// Model for image generation
    #[builder(default = "String::from(\"imagen-4.0-generate-001\")")]
    image_model: String,
    /// Model for image mutation
    #[builder(default = "String::from(\"gemini-2.5-flash-image-preview\")")]
    image_edit_model: String,
    /// Model for image-to-video generation
    #[builder(default = "String::from(\"veo-2.0-generate-001\")")]
    video_model: String,
}

impl GatewayConfig {
    /// Creates a new builder for `GatewayConfig`.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Build a configuration with the API key taken from `GEMINI_API_KEY`.
    pub fn from_env() -> MurilloResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GatewayError::new(GatewayErrorKind::MissingApiKey))?;
        Self::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| GatewayError::new(GatewayErrorKind::Transport(e.to_string())).into())
    }
}

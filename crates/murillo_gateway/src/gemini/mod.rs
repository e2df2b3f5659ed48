//! Google Gemini REST implementation of the model gateway.
//!
//! Covers four endpoint families of the Generative Language API:
//! `generateContent` for structured and plain text, the Imagen `predict`
//! endpoint for image generation, the image-preview model's
//! `generateContent` with image response modalities for mutation, and the
//! Veo `predictLongRunning` operation pair for video.

mod client;
mod config;
mod dto;

pub use client::GeminiGateway;
pub use config::{GatewayConfig, GatewayConfigBuilder};

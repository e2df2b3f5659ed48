//! Overlaying a user template onto a generated post image.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage, imageops};
use murillo_core::{GeneratedPost, MediaData, TemplateData, TemplateKind};
use murillo_error::{CompositeError, CompositeErrorKind, MurilloResult};
use std::io::Cursor;
use tracing::instrument;

/// Logo width as a fraction of the base image width.
const LOGO_WIDTH_RATIO: f32 = 0.1;
/// Gap between the logo's bottom edge and the base image's bottom edge, as
/// a fraction of the base image height.
const LOGO_BOTTOM_RATIO: f32 = 0.03;

/// Merges a template image onto the generated image of a post.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCompositor;

impl TemplateCompositor {
    /// Apply the template to the post's generated image.
    ///
    /// A post without a generated image passes through unchanged: there is
    /// nothing to composite onto, and that is not an error. The merged
    /// result replaces the generated image, re-encoded as PNG.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when either image is not valid base64 or
    /// not a decodable image, and with an encode error when the merged
    /// result cannot be written back.
    #[instrument(skip_all, fields(kind = %template.kind))]
    pub fn composite_template(
        &self,
        post: &GeneratedPost,
        template: &TemplateData,
    ) -> MurilloResult<GeneratedPost> {
        let Some(base_media) = &post.generated_image else {
            return Ok(post.clone());
        };

        let base = decode_image(base_media)?.to_rgba8();
        let overlay = decode_image(&template.media)?;

        let merged = match template.kind {
            TemplateKind::Full => composite_full(base, &overlay),
            TemplateKind::Logo => composite_logo(base, &overlay),
        };

        Ok(post.with_image(encode_png(&merged)?))
    }
}

fn decode_image(media: &MediaData) -> MurilloResult<DynamicImage> {
    let bytes = BASE64
        .decode(&media.data)
        .map_err(|e| CompositeError::new(CompositeErrorKind::Decode(e.to_string())))?;
    image::load_from_memory(&bytes)
        .map_err(|e| CompositeError::new(CompositeErrorKind::Decode(e.to_string())).into())
}

/// Stretch the template to the base dimensions and blend it on top.
fn composite_full(mut base: RgbaImage, overlay: &DynamicImage) -> RgbaImage {
    let stretched = overlay
        .resize_exact(base.width(), base.height(), FilterType::Lanczos3)
        .to_rgba8();
    imageops::overlay(&mut base, &stretched, 0, 0);
    base
}

/// Scale the template to a watermark and place it bottom-centered.
fn composite_logo(mut base: RgbaImage, overlay: &DynamicImage) -> RgbaImage {
    let logo_width = ((base.width() as f32 * LOGO_WIDTH_RATIO).round() as u32).max(1);
    let logo_height = ((logo_width as f32 * overlay.height() as f32 / overlay.width() as f32)
        .round() as u32)
        .max(1);
    let logo = overlay
        .resize_exact(logo_width, logo_height, FilterType::Lanczos3)
        .to_rgba8();

    let x = (base.width().saturating_sub(logo_width)) / 2;
    let bottom_gap = (base.height() as f32 * LOGO_BOTTOM_RATIO).round() as u32;
    let y = base
        .height()
        .saturating_sub(logo_height)
        .saturating_sub(bottom_gap);

    imageops::overlay(&mut base, &logo, i64::from(x), i64::from(y));
    base
}

fn encode_png(merged: &RgbaImage) -> MurilloResult<MediaData> {
    let mut bytes = Vec::new();
    merged
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| CompositeError::new(CompositeErrorKind::Encode(e.to_string())))?;
    Ok(MediaData::new(BASE64.encode(bytes), "image/png"))
}

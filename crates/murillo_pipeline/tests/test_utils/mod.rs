//! Shared fixtures for pipeline integration tests.

pub mod mock_gateway;

use murillo_core::{MediaData, PostFormat, PostInput, SocialNetwork};
use serde_json::{Value as JsonValue, json};

/// A minimal brief with defaults for everything but the targeting.
pub fn sample_input(network: SocialNetwork, format: PostFormat) -> PostInput {
    PostInput::builder()
        .idea("Announce the new sustainable coffee line".to_string())
        .social_network(network)
        .post_format(format)
        .build()
        .unwrap()
}

/// A well-formed copy generation response.
pub fn draft_json(main_copy: &str) -> JsonValue {
    json!({
        "title": "Fresh roast",
        "mainCopy": main_copy,
        "variants": ["Variant one", "Variant two"],
        "hashtags": "#coffee #sustainable",
        "cta": "Visit our store",
        "tip": "Post in the morning"
    })
}

/// A well-formed analysis response with the given category scores.
pub fn analysis_json(engagement: u8, clarity: u8, hashtags: u8, visual: u8) -> JsonValue {
    json!({
        "engagement": { "score": engagement, "feedback": "Add a question" },
        "clarity": { "score": clarity, "feedback": "Clear message" },
        "hashtags": { "score": hashtags, "feedback": "Add niche tags" },
        "visual": { "score": visual, "feedback": "Strong alignment" }
    })
}

/// A small stand-in media payload.
pub fn media(data: &str) -> MediaData {
    MediaData::new(data, "image/png")
}

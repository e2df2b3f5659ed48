//! Prompt and response-schema composition.
//!
//! Everything here is pure: methods read the brief and the catalog tables
//! and return strings or schema values, with no I/O and no failure path.
//! The model never sees free-form improvisation; every instruction the
//! pipeline sends is assembled in this module.

use murillo_core::{GeneratedPost, PostAnalysis, PostFormat, PostInput, SocialNetwork, Tone};
use serde_json::{Value as JsonValue, json};
use std::fmt::Write;

/// Builds system instructions, task prompts, and response schemas for every
/// pipeline stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    /// System instruction for the copy generation stage.
    ///
    /// Tone is the dominant directive. A brand-voice profile, when present,
    /// is secondary guidance and must never override the requested tone.
    pub fn system_instruction(&self, input: &PostInput) -> String {
        match &input.user_profile {
            Some(profile) => format!(
                "You are an expert social media content strategist and copywriter.\n\n\
                 MASTER DIRECTIVE (HIGHEST PRIORITY): COMMUNICATION TONE.\n\
                 The tone requested in the task is your primary directive. Every sentence \
                 you write must follow it strictly.\n\n\
                 SECONDARY GUIDANCE: BRAND VOICE PROFILE.\n\
                 Use the following profile to inform vocabulary, themes, and audience, \
                 but it must NEVER override the requested tone:\n\
                 <profile>\n{profile}\n</profile>"
            ),
            None => "You are an expert social media content strategist and copywriter. \
                     Your primary directive is to adhere strictly to the requested \
                     communication tone."
                .to_string(),
        }
    }

    /// Task prompt for the copy generation stage.
    pub fn task_prompt(&self, input: &PostInput) -> String {
        let network = input.social_network;
        let format = input.effective_format();
        let mut prompt = String::new();

        let _ = writeln!(
            prompt,
            "Create a {} for {} based on this idea: \"{}\".",
            Self::format_phrase(format),
            network,
            input.idea
        );

        if network.requires_title() {
            let _ = writeln!(
                prompt,
                "Also write a short, catchy title for the post (maximum 10 words)."
            );
        }

        let _ = writeln!(
            prompt,
            "The main copy must be {} long.",
            network.character_band(input.copy_length)
        );

        let tones = Self::effective_tones(input);
        let _ = writeln!(prompt, "Communication tone (mandatory):");
        for tone in &tones {
            let _ = writeln!(prompt, "- {}: {}", tone, Self::tone_guidance(*tone));
        }

        let _ = writeln!(prompt, "Write all post text in {}.", input.language);

        if input.include_cta {
            let _ = writeln!(prompt, "Include a clear, compelling call to action.");
        } else {
            let _ = writeln!(
                prompt,
                "Do NOT include a call to action; leave the cta field as an empty string."
            );
        }

        if input.include_hashtags {
            let _ = writeln!(
                prompt,
                "Include relevant hashtags as a single space-separated lowercase string."
            );
        } else {
            let _ = writeln!(
                prompt,
                "Do NOT include hashtags; leave the hashtags field as an empty string."
            );
        }

        let _ = writeln!(
            prompt,
            "Provide exactly two alternative versions of the main copy in the variants field."
        );

        if input.pdf.is_some() {
            let _ = writeln!(
                prompt,
                "A PDF document is attached. Treat it as the primary source of factual \
                 information for the post."
            );
        }
        if input.image.is_some() {
            let _ = writeln!(
                prompt,
                "A reference image is attached. Use it as context for what the post is about."
            );
        }

        prompt
    }

    /// Response schema for the copy generation stage.
    ///
    /// `title` is required only for networks whose posts carry one.
    pub fn post_schema(&self, network: SocialNetwork) -> JsonValue {
        let mut required = vec!["mainCopy", "variants", "hashtags", "cta"];
        if network.requires_title() {
            required.insert(0, "title");
        }
        json!({
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "Short, catchy post title, maximum 10 words"
                },
                "mainCopy": {
                    "type": "STRING",
                    "description": "The main post copy, within the requested character band"
                },
                "variants": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Exactly two alternative versions of the main copy"
                },
                "hashtags": {
                    "type": "STRING",
                    "description": "Space-separated lowercase hashtags, or empty string"
                },
                "cta": {
                    "type": "STRING",
                    "description": "Recommended call to action, or empty string"
                },
                "tip": {
                    "type": "STRING",
                    "description": "Optional extra tip or creative suggestion for the author"
                }
            },
            "required": required
        })
    }

    /// System instruction for the visual-prompt derivation stage.
    pub fn visual_system_instruction(&self) -> &'static str {
        "You are an expert art director. Your job is to translate social media copy \
         into a purely visual scene description for an image generation model.\n\
         Rules:\n\
         1. Write in English, regardless of the language of the copy.\n\
         2. Describe a single concrete scene: subject, setting, lighting, mood.\n\
         3. The description must be between 25 and 50 words.\n\
         4. NEVER use words that could make the model render text, such as \
         'sign', 'poster', 'label', 'logo', 'letter', 'word', 'quote', or 'banner'.\n\
         5. Respond with the scene description only, no preamble."
    }

    /// Task prompt for the visual-prompt derivation stage.
    ///
    /// Works from the generated main copy, never from the raw idea, so the
    /// image reflects what the post actually says.
    pub fn visual_prompt(&self, main_copy: &str) -> String {
        format!(
            "Translate the essence of this social media copy into a visual scene \
             description:\n\n{main_copy}"
        )
    }

    /// Final prompt sent to the image model, wrapping the derived concept.
    pub fn image_prompt(&self, visual_concept: &str) -> String {
        format!(
            "A professional, high-quality, photorealistic image depicting: {visual_concept}. \
             The style is clean and modern, with vibrant yet elegant colors, suitable for \
             a social media post.\n\n\
             ABSOLUTE CRITICAL RULE (TOP PRIORITY):\n\
             ZERO TEXT. The image must be 100% visual. No letters, no numbers, no words, \
             no logos, no writing of any kind, in any language. Verify that the final \
             image contains no text whatsoever. This is a non-negotiable instruction."
        )
    }

    /// System instruction for the ideation stage of monthly generation.
    pub fn ideas_system_instruction(&self) -> &'static str {
        "You are a senior content strategist. Analyze the monthly plan provided by \
         the user and produce a list of concrete, creative, distinct post ideas that \
         cover its strategic axes and topics. Each idea must be a self-contained, \
         actionable one-sentence brief for a single post."
    }

    /// Response schema for the ideation stage.
    pub fn ideas_schema(&self) -> JsonValue {
        json!({
            "type": "OBJECT",
            "properties": {
                "ideas": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "idea": {
                                "type": "STRING",
                                "description": "One self-contained post idea"
                            }
                        },
                        "required": ["idea"]
                    }
                }
            },
            "required": ["ideas"]
        })
    }

    /// System instruction for the analysis stage, carrying the per-network
    /// evaluation rubric.
    pub fn analysis_system_instruction(&self, input: &PostInput) -> String {
        let rubric = match input.social_network {
            SocialNetwork::Instagram => {
                "For Instagram, weigh authenticity, visual storytelling, and, for reels, \
                 the strength of the opening hook."
            }
            SocialNetwork::TikTok => {
                "For TikTok, weigh the hook in the first two seconds, virality potential, \
                 and alignment with current platform dynamics."
            }
            SocialNetwork::LinkedIn => {
                "For LinkedIn, weigh professional authority, value delivered to the \
                 reader, and the structure and scannability of the text."
            }
        };
        format!(
            "You are a demanding social media quality strategist. Evaluate the post \
             against four categories: engagement (emotional hooks, questions, \
             interaction prompts), clarity (message clarity, audience value, CTA \
             legibility), hashtags (relevance and reach potential), and visual \
             (alignment of the visual concept with the copy).\n{rubric}\n\
             Score each category from 0 to 100 and give concise, actionable feedback \
             for each, written in {}.",
            input.language
        )
    }

    /// Task prompt for the analysis stage.
    pub fn analysis_prompt(&self, post: &GeneratedPost, network: SocialNetwork) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "Analyze the following post created for {} in {} format.",
            network,
            Self::format_phrase(post.post_format)
        );
        let _ = writeln!(prompt, "--- POST CONTENT ---");
        if let Some(title) = &post.title {
            let _ = writeln!(prompt, "Title: {title}");
        }
        let _ = writeln!(prompt, "Copy: {}", post.main_copy);
        let _ = writeln!(prompt, "Hashtags: {}", post.hashtags);
        let _ = writeln!(prompt, "CTA: {}", post.cta);
        let _ = writeln!(prompt, "Visual concept: {}", post.initial_image_prompt);
        prompt
    }

    /// Response schema for the analysis stage.
    pub fn analysis_schema(&self) -> JsonValue {
        let category = json!({
            "type": "OBJECT",
            "properties": {
                "score": {
                    "type": "INTEGER",
                    "description": "0 to 100, where 100 is best"
                },
                "feedback": {
                    "type": "STRING",
                    "description": "Concise, actionable feedback explaining the score"
                }
            },
            "required": ["score", "feedback"]
        });
        json!({
            "type": "OBJECT",
            "properties": {
                "engagement": category,
                "clarity": category,
                "hashtags": category,
                "visual": category
            },
            "required": ["engagement", "clarity", "hashtags", "visual"]
        })
    }

    /// System instruction for the optimization stage.
    pub fn optimize_system_instruction(&self, input: &PostInput) -> String {
        format!(
            "You are an elite social media copywriter. Rewrite the main copy and the \
             hashtags of the post to address the analysis feedback, focusing first on \
             the lowest-scoring categories. Keep the original intent, tone, and \
             approximate length. Change nothing else. Respond in {}.",
            input.language
        )
    }

    /// Task prompt for the optimization stage.
    pub fn optimize_prompt(&self, post: &GeneratedPost, analysis: &PostAnalysis) -> String {
        let weakest: Vec<&str> = analysis
            .weakest_categories()
            .into_iter()
            .take(2)
            .map(|(name, _)| name)
            .collect();
        let analysis_json = serde_json::to_string_pretty(analysis).unwrap_or_default();
        format!(
            "--- CURRENT POST ---\nCopy: {}\nHashtags: {}\n\n\
             --- ANALYSIS ---\n{}\n\n\
             Focus first on improving: {}.",
            post.main_copy,
            post.hashtags,
            analysis_json,
            weakest.join(", ")
        )
    }

    /// Response schema for the optimization stage: rewritten copy and
    /// hashtags only.
    pub fn optimize_schema(&self) -> JsonValue {
        json!({
            "type": "OBJECT",
            "properties": {
                "mainCopy": {
                    "type": "STRING",
                    "description": "The rewritten main copy"
                },
                "hashtags": {
                    "type": "STRING",
                    "description": "The rewritten space-separated lowercase hashtags"
                }
            },
            "required": ["mainCopy", "hashtags"]
        })
    }

    /// Instruction for image refinement, with the negative instruction
    /// appended as an explicit avoid clause when present.
    pub fn refine_prompt(&self, instruction: &str, negative: Option<&str>) -> String {
        match negative {
            Some(negative) if !negative.trim().is_empty() => format!(
                "{instruction}\n\n--- IMPORTANT ---\nAVOID THE FOLLOWING ELEMENTS: {negative}"
            ),
            _ => instruction.to_string(),
        }
    }

    fn format_phrase(format: PostFormat) -> &'static str {
        match format {
            PostFormat::Feed => "feed post",
            PostFormat::Story => "story (vertical, ephemeral, designed for quick impact)",
            PostFormat::ShortVideo => {
                "short vertical video concept (cover image plus on-screen copy)"
            }
        }
    }

    fn effective_tones(input: &PostInput) -> Vec<Tone> {
        if input.tones.is_empty() {
            vec![Tone::Neutral]
        } else {
            input.tones.clone()
        }
    }

    fn tone_guidance(tone: Tone) -> &'static str {
        match tone {
            Tone::Formal => {
                "professional and structured language, no colloquialisms, no emojis"
            }
            Tone::Institutional => {
                "corporate voice that reflects company culture, values, and mission"
            }
            Tone::Commercial => {
                "persuasion-first, benefit-driven language with a sense of urgency"
            }
            Tone::Friendly => "warm, conversational, approachable, emoji-friendly",
            Tone::Inspirational => {
                "built around one memorable, motivating phrase that invites action"
            }
            Tone::Humorous => "entertaining, with wordplay and light irony, never offensive",
            Tone::Neutral => "direct and informative, no emotional load",
        }
    }
}

//! The single-post generation pipeline and its post-hoc operations.

use murillo_core::{GeneratedPost, MediaData, PostAnalysis, PostInput, SocialNetwork};
use murillo_error::{MurilloResult, PipelineError, PipelineStage};
use murillo_gateway::{
    Clock, ModelGateway, TokioClock, await_video_completion, decode_structured,
};
use tracing::{info, instrument};

use crate::PromptComposer;
use crate::response::{OptimizedCopy, PostDraft};

/// Sampling temperature for copy generation.
pub const TEXT_TEMPERATURE: f32 = 0.7;
/// Sampling temperature for visual-prompt derivation; lower, because the
/// scene description should stay close to the copy.
pub const VISUAL_TEMPERATURE: f32 = 0.4;

/// Drives one brief through the four-stage generation protocol and exposes
/// the post-hoc operations (analyze, optimize, refine, video).
///
/// Every operation is copy-on-write over [`GeneratedPost`]; a stage failure
/// aborts the run and no partial post escapes [`PostPipeline::generate`].
///
/// The clock parameter exists so pacing and poll loops run instantly under
/// test; production code uses the default [`TokioClock`].
#[derive(Debug, Clone)]
pub struct PostPipeline<G, C = TokioClock> {
    pub(crate) gateway: G,
    pub(crate) clock: C,
    pub(crate) composer: PromptComposer,
}

impl<G: ModelGateway> PostPipeline<G> {
    /// Create a pipeline over a gateway with the production clock.
    pub fn new(gateway: G) -> Self {
        Self::with_clock(gateway, TokioClock)
    }
}

impl<G: ModelGateway, C: Clock> PostPipeline<G, C> {
    /// Create a pipeline with an explicit clock.
    pub fn with_clock(gateway: G, clock: C) -> Self {
        Self {
            gateway,
            clock,
            composer: PromptComposer,
        }
    }

    /// Run the full generation protocol: copy, visual prompt, image,
    /// analysis.
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the run with a `Stage` error naming the
    /// stage and carrying the underlying message verbatim.
    #[instrument(skip(self, input), fields(network = %input.social_network))]
    pub async fn generate(&self, input: &PostInput) -> MurilloResult<GeneratedPost> {
        let format = input.effective_format();

        let draft = self.generate_copy(input).await?;
        info!(copy_length = draft.main_copy.len(), "Copy generated");

        let visual_concept = self
            .gateway
            .generate_text(
                self.composer.visual_system_instruction(),
                &self.composer.visual_prompt(&draft.main_copy),
                Some(VISUAL_TEMPERATURE),
            )
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::VisualPrompt, e))?;

        let image_prompt = self.composer.image_prompt(visual_concept.trim());
        let image = self
            .gateway
            .generate_image(&image_prompt, format.aspect_ratio())
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::ImageGeneration, e))?;

        let post = GeneratedPost {
            title: draft.title,
            main_copy: draft.main_copy,
            variants: draft.variants,
            hashtags: draft.hashtags,
            cta: draft.cta,
            tip: draft.tip,
            generated_image: Some(image),
            initial_image_prompt: image_prompt,
            generated_video_url: None,
            analysis: None,
            post_format: format,
        };

        let analysis = self.analyze(&post, input).await?;
        Ok(post.with_analysis(analysis))
    }

    async fn generate_copy(&self, input: &PostInput) -> MurilloResult<PostDraft> {
        let parts: Vec<MediaData> = input
            .image
            .iter()
            .chain(input.pdf.iter())
            .cloned()
            .collect();

        let value = self
            .gateway
            .generate_structured(
                &self.composer.system_instruction(input),
                &self.composer.task_prompt(input),
                &self.composer.post_schema(input.social_network),
                &parts,
                Some(TEXT_TEMPERATURE),
            )
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::TextGeneration, e))?;

        decode_structured(value)
            .map_err(|e| PipelineError::stage(PipelineStage::TextGeneration, e).into())
    }

    /// Score an existing post against the network's rubric.
    #[instrument(skip(self, post, input))]
    pub async fn analyze(
        &self,
        post: &GeneratedPost,
        input: &PostInput,
    ) -> MurilloResult<PostAnalysis> {
        let value = self
            .gateway
            .generate_structured(
                &self.composer.analysis_system_instruction(input),
                &self.composer.analysis_prompt(post, input.social_network),
                &self.composer.analysis_schema(),
                &[],
                None,
            )
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::Analysis, e))?;

        decode_structured(value)
            .map_err(|e| PipelineError::stage(PipelineStage::Analysis, e).into())
    }

    /// Rewrite the main copy and hashtags to address the analysis feedback,
    /// then re-score so the returned post carries a consistent analysis.
    ///
    /// Title, variants, cta, tip, and all media fields are carried
    /// unchanged.
    #[instrument(skip_all)]
    pub async fn optimize(
        &self,
        post: &GeneratedPost,
        analysis: &PostAnalysis,
        input: &PostInput,
    ) -> MurilloResult<GeneratedPost> {
        let value = self
            .gateway
            .generate_structured(
                &self.composer.optimize_system_instruction(input),
                &self.composer.optimize_prompt(post, analysis),
                &self.composer.optimize_schema(),
                &[],
                None,
            )
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::Optimization, e))?;
        let rewrite: OptimizedCopy = decode_structured(value)
            .map_err(|e| PipelineError::stage(PipelineStage::Optimization, e))?;

        let interim = GeneratedPost {
            main_copy: rewrite.main_copy.clone(),
            hashtags: rewrite.hashtags.clone(),
            ..post.clone()
        };
        let fresh = self.analyze(&interim, input).await?;

        Ok(post.with_optimized_copy(rewrite.main_copy, rewrite.hashtags, fresh))
    }

    /// Mutate an image according to an instruction, optionally steering the
    /// model away from unwanted elements.
    #[instrument(skip(self, image))]
    pub async fn refine_image(
        &self,
        image: &MediaData,
        instruction: &str,
        negative: Option<&str>,
    ) -> MurilloResult<MediaData> {
        let prompt = self.composer.refine_prompt(instruction, negative);
        self.gateway
            .mutate_image(image, &prompt)
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::ImageRefinement, e).into())
    }

    /// Animate a generated image into a short video, polling to completion.
    ///
    /// Returns the provider download URI.
    #[instrument(skip(self, image))]
    pub async fn generate_video(
        &self,
        image: &MediaData,
        motion_prompt: &str,
    ) -> MurilloResult<String> {
        let job = self
            .gateway
            .start_video_job(image, motion_prompt)
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::VideoGeneration, e))?;

        await_video_completion(&self.gateway, &self.clock, &job)
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::VideoGeneration, e).into())
    }

    /// Regenerate the same brief for every network not yet covered.
    ///
    /// Runs one independent pipeline per remaining network concurrently;
    /// each run derives its own image so format and aspect stay native to
    /// the target network. Per-network failures are returned alongside the
    /// successes rather than aborting the batch.
    #[instrument(skip(self, input), fields(done = done.len()))]
    pub async fn replicate_across_networks(
        &self,
        input: &PostInput,
        done: &[SocialNetwork],
    ) -> Vec<(SocialNetwork, MurilloResult<GeneratedPost>)> {
        use strum::IntoEnumIterator;

        let runs = SocialNetwork::iter()
            .filter(|network| !done.contains(network))
            .map(|network| async move {
                let mut run = input.clone();
                run.social_network = network;
                run.post_format = network.default_format();
                (network, self.generate(&run).await)
            });

        futures::future::join_all(runs).await
    }
}

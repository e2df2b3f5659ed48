//! Monthly batch orchestration: one ideation call fanned into sequential
//! per-idea pipeline runs.

use murillo_core::{GeneratedPost, PostInput, Progress};
use murillo_error::{MurilloResult, PipelineError, PipelineErrorKind, PipelineStage};
use murillo_gateway::{Clock, ModelGateway, decode_structured};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::PostPipeline;
use crate::response::IdeaList;

/// Fixed pause between consecutive per-idea pipeline runs. Deliberate
/// provider throttling; do not remove or parallelize.
pub const INTER_POST_DELAY: Duration = Duration::from_secs(1);

/// Percentage reported once ideation has finished.
const IDEATION_PERCENT: u8 = 15;
/// Percentage span covered by the per-idea runs before the final event.
const GENERATION_SPAN: usize = 80;

/// One idea that failed to generate during a monthly batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaFailure {
    /// The idea text that was attempted
    pub idea: String,
    /// The failure message, passed through verbatim
    pub message: String,
}

/// Outcome of a monthly batch: every success and every failure, in
/// ideation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Successfully generated posts
    pub posts: Vec<GeneratedPost>,
    /// Ideas that failed, with their error messages
    pub failures: Vec<IdeaFailure>,
}

impl<G: ModelGateway, C: Clock> PostPipeline<G, C> {
    /// Expand a strategic monthly brief into a batch of posts.
    ///
    /// Ideation runs once; each resulting idea then gets a full sequential
    /// pipeline run with a fixed [`INTER_POST_DELAY`] pause before it.
    /// A failing idea is logged, recorded in the report, and skipped; the
    /// batch keeps going.
    ///
    /// `on_progress` observes one event after ideation and one after each
    /// idea, the last of which always reports 100 percent.
    ///
    /// # Errors
    ///
    /// Fatal only when ideation itself fails, produces no ideas, or every
    /// single idea fails to generate.
    #[instrument(skip_all)]
    pub async fn generate_monthly(
        &self,
        input: &PostInput,
        mut on_progress: impl FnMut(&Progress) + Send,
    ) -> MurilloResult<MonthlyReport> {
        let ideas = self.ideate(input).await?;
        if ideas.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::NoIdeasProduced).into());
        }

        let total = ideas.len();
        info!(total, "Ideation complete, starting sequential generation");
        on_progress(&Progress {
            current_step: 0,
            total_steps: total,
            message: format!("{total} post ideas generated, creating posts"),
            percentage: IDEATION_PERCENT,
        });

        let mut posts = Vec::new();
        let mut failures = Vec::new();

        for (index, idea) in ideas.iter().enumerate() {
            self.clock.sleep(INTER_POST_DELAY).await;

            let run_input = input.with_idea(idea.as_str());
            match self.generate(&run_input).await {
                Ok(post) => posts.push(post),
                Err(error) => {
                    warn!(idea = %idea, error = %error, "Post generation failed, skipping idea");
                    failures.push(IdeaFailure {
                        idea: idea.as_str().to_string(),
                        message: error.to_string(),
                    });
                }
            }

            let step = index + 1;
            on_progress(&Progress {
                current_step: step,
                total_steps: total,
                message: format!("Post {step} of {total} processed"),
                percentage: batch_percentage(step, total),
            });
        }

        if posts.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::AllIdeasFailed {
                attempted: total,
            })
            .into());
        }

        info!(
            succeeded = posts.len(),
            failed = failures.len(),
            "Monthly batch complete"
        );
        Ok(MonthlyReport { posts, failures })
    }

    async fn ideate(&self, input: &PostInput) -> MurilloResult<Vec<murillo_core::Idea>> {
        let value = self
            .gateway
            .generate_structured(
                self.composer.ideas_system_instruction(),
                &input.idea,
                &self.composer.ideas_schema(),
                &[],
                None,
            )
            .await
            .map_err(|e| PipelineError::stage(PipelineStage::Ideation, e))?;

        let list: IdeaList = decode_structured(value)
            .map_err(|e| PipelineError::stage(PipelineStage::Ideation, e))?;
        Ok(list.ideas.into_iter().map(|seed| seed.into_idea()).collect())
    }
}

/// Percentage for the event after the `step`-th idea (1-based).
///
/// Interpolates across [`GENERATION_SPAN`] above [`IDEATION_PERCENT`] and
/// pins the final event to 100 so a finished batch never reads as partial.
fn batch_percentage(step: usize, total: usize) -> u8 {
    if step == total {
        100
    } else {
        (IDEATION_PERCENT as usize + step * GENERATION_SPAN / total) as u8
    }
}

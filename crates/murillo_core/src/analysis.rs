//! Quality analysis types.

use serde::{Deserialize, Serialize};

/// A single scored category with actionable feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCategory {
    /// 0 to 100, where 100 is best
    pub score: u8,
    /// Concise, constructive feedback explaining the score
    pub feedback: String,
}

/// Four-category quality analysis of a generated post.
///
/// Produced by the analysis stage and by the post-hoc analyze operation;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAnalysis {
    /// Emotional hooks, questions, and interaction prompts
    pub engagement: ScoreCategory,
    /// Message clarity, audience value, CTA legibility
    pub clarity: ScoreCategory,
    /// Hashtag relevance and reach potential
    pub hashtags: ScoreCategory,
    /// Alignment of the visual concept with the copy
    pub visual: ScoreCategory,
}

impl PostAnalysis {
    /// Category names ordered from weakest to strongest score.
    ///
    /// Optimization uses this to tell the model which areas to target first.
    pub fn weakest_categories(&self) -> Vec<(&'static str, u8)> {
        let mut scored = vec![
            ("engagement", self.engagement.score),
            ("clarity", self.clarity.score),
            ("hashtags", self.hashtags.score),
            ("visual", self.visual.score),
        ];
        scored.sort_by_key(|(_, score)| *score);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(score: u8) -> ScoreCategory {
        ScoreCategory {
            score,
            feedback: String::new(),
        }
    }

    #[test]
    fn weakest_categories_sorts_ascending() {
        let analysis = PostAnalysis {
            engagement: category(80),
            clarity: category(40),
            hashtags: category(95),
            visual: category(60),
        };
        let order: Vec<&str> = analysis
            .weakest_categories()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(order, vec!["clarity", "visual", "engagement", "hashtags"]);
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Entry of the category listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
}

/// A category as delivered by the provider, before truncation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl RawClue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    /// Trimmed clue, or `None` when either side is missing or blank.
    pub fn into_clue(self) -> Option<Clue> {
        let question = self.question?;
        let answer = self.answer?;
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Clue::new(question, answer))
    }
}

/// Source of categories and clues. Transport, caching and rate limiting are the implementor's
/// business.
#[allow(async_fn_in_trait)]
pub trait CategoryProvider {
    /// Lists up to `count` categories to sample a round from.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> Result<RawCategory>;
}

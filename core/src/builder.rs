use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Fetches sampled categories and assembles them into a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardBuilder {
    config: GameConfig,
}

impl BoardBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Fetches every category concurrently. The board keeps the order of `ids` no matter which
    /// fetch finishes first, and the first failure aborts the whole build.
    pub async fn build<P: CategoryProvider>(
        &self,
        provider: &P,
        ids: &[CategoryId],
    ) -> Result<Board> {
        if ids.len() != self.config.categories {
            log::warn!(
                "asked to build {} categories, configured for {}",
                ids.len(),
                self.config.categories
            );
            return Err(GameError::InvalidBoardShape);
        }

        let fetches = ids.iter().map(|&id| async move {
            let raw = provider.category(id).await?;
            log::trace!("fetched category {}: {} raw clues", id, raw.clues.len());
            self.assemble(id, raw)
        });
        let categories = try_join_all(fetches).await?;

        Board::new(categories)
    }

    fn assemble(&self, id: CategoryId, raw: RawCategory) -> Result<Category> {
        let required = self.config.clues_per_category;
        let clues: Vec<Clue> = raw
            .clues
            .into_iter()
            .filter_map(RawClue::into_clue)
            .take(required)
            .collect();

        if clues.len() < required {
            return Err(GameError::ShortCategory {
                id,
                required,
                available: clues.len(),
            });
        }

        Ok(Category::new(raw.title.trim(), clues))
    }
}

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use builder::*;
pub use clue::*;
pub use error::*;
pub use provider::*;
pub use sampler::*;
pub use session::*;
pub use types::*;

mod board;
mod builder;
mod clue;
mod error;
mod provider;
mod sampler;
mod session;
#[cfg(test)]
mod testing;
mod types;

/// Shape of a round: how many categories, how many clues each, and how large a pool to sample from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
    pub pool_size: usize,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
    pub const DEFAULT_POOL_SIZE: usize = 100;

    pub const fn new_unchecked(
        categories: usize,
        clues_per_category: usize,
        pool_size: usize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            pool_size,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize, pool_size: usize) -> Result<Self> {
        if categories == 0 || clues_per_category == 0 || pool_size < categories {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(
            categories,
            clues_per_category,
            pool_size,
        ))
    }

    pub const fn total_cells(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_POOL_SIZE,
        )
    }
}

/// Runs the whole setup of one round: list the pool, sample from it, then fetch and assemble every
/// sampled category.
pub async fn deal_board<P, S>(provider: &P, config: &GameConfig, sampler: S) -> Result<Board>
where
    P: CategoryProvider,
    S: CategorySampler,
{
    let pool = provider.list_categories(config.pool_size).await?;
    log::debug!("category pool has {} entries", pool.len());

    let pool_ids: Vec<CategoryId> = pool.iter().map(|summary| summary.id).collect();
    let ids = sampler.sample(&pool_ids, config.categories)?;
    log::debug!("sampled categories: {:?}", ids);

    BoardBuilder::new(*config).build(provider, &ids).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProvider;
    use futures_executor::block_on;

    #[test]
    fn default_config_is_six_by_five_from_a_hundred() {
        let config = GameConfig::default();
        assert_eq!(config.categories, 6);
        assert_eq!(config.clues_per_category, 5);
        assert_eq!(config.pool_size, 100);
        assert_eq!(config.total_cells(), 30);
    }

    #[test]
    fn config_rejects_degenerate_shapes() {
        assert_eq!(GameConfig::new(0, 5, 100), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(6, 0, 100), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(6, 5, 5), Err(GameError::InvalidConfig));
        assert!(GameConfig::new(6, 5, 6).is_ok());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::new(4, 3, 20).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn deal_board_samples_from_listed_pool() {
        let provider = StubProvider::with_pool(8, 7);
        let config = GameConfig::new(6, 5, 8).unwrap();

        let board = block_on(deal_board(&provider, &config, ShuffleSampler::new(7))).unwrap();

        assert_eq!(board.size(), (5, 6));
        let mut titles: Vec<&str> = board.titles().collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn deal_board_fails_when_pool_is_short() {
        let provider = StubProvider::with_pool(4, 5);
        let config = GameConfig::default();

        let err = block_on(deal_board(&provider, &config, IndexSampler::new(1))).unwrap_err();

        assert_eq!(
            err,
            GameError::PoolTooSmall {
                required: 6,
                available: 4
            }
        );
    }
}

use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Need {required} categories but the pool only has {available}")]
    PoolTooSmall { required: usize, available: usize },
    #[error("Could not load the category list: {reason}")]
    PoolFetch { reason: String },
    #[error("Could not load category {id}: {reason}")]
    CategoryFetch { id: CategoryId, reason: String },
    #[error("Category {id} has {available} usable clues, {required} are required")]
    ShortCategory {
        id: CategoryId,
        required: usize,
        available: usize,
    },
    #[error("Board shape does not match the configured size")]
    InvalidBoardShape,
    #[error("Invalid game configuration")]
    InvalidConfig,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No board has been dealt yet")]
    NoBoard,
    #[error("Round was superseded by a newer one")]
    StaleRound,
}

pub type Result<T> = core::result::Result<T, GameError>;

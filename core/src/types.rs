use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a category at the data provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Grid coordinates `(row, column)`: the row picks the clue, the column picks the category.
pub type CellPos = (usize, usize);

/// Text shown on a cell whose clue is still hidden.
pub const PLACEHOLDER: &str = "?";

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// One round's grid. Columns are categories, rows are clue slots, and every column has the same
/// number of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    clues_per_category: usize,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let clues_per_category = categories.first().map_or(0, |c| c.clues.len());
        if categories
            .iter()
            .any(|category| category.clues.len() != clues_per_category)
        {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self {
            categories,
            clues_per_category,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    /// `(rows, columns)` of the grid.
    pub fn size(&self) -> (usize, usize) {
        (self.clues_per_category, self.categories.len())
    }

    pub fn validate_pos(&self, pos: CellPos) -> Result<CellPos> {
        let (rows, columns) = self.size();
        if pos.0 < rows && pos.1 < columns {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, pos: CellPos) -> Result<&Clue> {
        let (row, column) = self.validate_pos(pos)?;
        Ok(&self.categories[column].clues[row])
    }

    /// Clues of one grid row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Clue> {
        self.categories
            .iter()
            .filter_map(move |category| category.clues.get(row))
    }

    pub fn reveal(&mut self, pos: CellPos) -> Result<RevealOutcome<'_>> {
        let (row, column) = self.validate_pos(pos)?;
        Ok(self.categories[column].clues[row].reveal())
    }

    pub fn answered_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .filter(|clue| clue.disclosure().is_final())
            .count()
    }

    /// Whether every clue on the board is showing its answer.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.clues_per_category * self.categories.len()
    }
}

/// Unchecked lookup by `(row, column)`.
///
/// # Panics
///
/// Panics when `pos` lies outside the grid. Use [`Board::clue_at`] for a checked lookup.
impl Index<CellPos> for Board {
    type Output = Clue;

    fn index(&self, (row, column): CellPos) -> &Self::Output {
        &self.categories[column].clues[row]
    }
}

//! A seat's board: one pile of assets per category.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{catalog, CardId, Category};
use crate::effects::AssetCoord;

use super::pile::Pile;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: [Pile; 3],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `category` holds at least `set_size` assets.
    #[must_use]
    pub fn is_complete(&self, category: Category, set_size: usize) -> bool {
        self[category].len() >= set_size
    }

    /// Whether every category is complete.
    #[must_use]
    pub fn all_complete(&self, set_size: usize) -> bool {
        Category::ALL.iter().all(|&c| self.is_complete(c, set_size))
    }

    /// The asset at a coordinate, if there is one.
    #[must_use]
    pub fn get(&self, coord: AssetCoord) -> Option<CardId> {
        self[coord.category].get(coord.index)
    }

    /// Remove and return the asset at a coordinate.
    pub fn take(&mut self, coord: AssetCoord) -> Option<CardId> {
        self[coord.category].take(coord.index)
    }

    /// Whether any greenwashing asset sits in `category`.
    #[must_use]
    pub fn has_greenwashing(&self, category: Category) -> bool {
        self[category]
            .iter()
            .any(|card| catalog::get(card).is_some_and(|def| def.is_greenwashing()))
    }

    /// Total assets across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.categories.iter().map(Pile::len).sum()
    }

    /// Iterate over (category, pile) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Pile)> {
        Category::ALL.iter().map(move |&c| (c, &self[c]))
    }
}

impl Index<Category> for Board {
    type Output = Pile;

    fn index(&self, category: Category) -> &Self::Output {
        &self.categories[category.index()]
    }
}

impl IndexMut<Category> for Board {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.categories[category.index()]
    }
}

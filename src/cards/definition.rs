//! Card definitions - static card data.
//!
//! A `CardDefinition` never changes after the catalog is built. Zones hold
//! `CardId`s, so a card moves between hand, board and piles by identity
//! and the definition is looked up when its data is needed.

use serde::{Deserialize, Serialize};

use crate::effects::ActionEffect;

/// Substring in a card name that marks it as greenwashing.
pub const GREENWASHING_TAG: &str = "Greenwashing";

/// Unique identifier for a card in the catalog (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A board category. Every seat has one ordered sequence of assets per
/// category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Environment,
    Social,
    Governance,
}

impl Category {
    /// All board categories in board order.
    pub const ALL: [Category; 3] = [Category::Environment, Category::Social, Category::Governance];

    /// Position of this category on a board.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Environment => 0,
            Category::Social => 1,
            Category::Governance => 2,
        }
    }

    /// Single-letter code used on the printed cards (E, S, G).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Category::Environment => 'E',
            Category::Social => 'S',
            Category::Governance => 'G',
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Environment => "Environment",
            Category::Social => "Social",
            Category::Governance => "Governance",
        };
        f.write_str(name)
    }
}

/// The category printed on an asset card. Wild assets pick a board
/// category when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Environment,
    Social,
    Governance,
    Wild,
}

impl AssetCategory {
    /// The board category this asset defaults to, `None` for Wild.
    #[must_use]
    pub const fn board_category(self) -> Option<Category> {
        match self {
            AssetCategory::Environment => Some(Category::Environment),
            AssetCategory::Social => Some(Category::Social),
            AssetCategory::Governance => Some(Category::Governance),
            AssetCategory::Wild => None,
        }
    }
}

/// Card kind without its payload. Used in rejection reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Asset,
    Action,
    Capital,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Kind-specific card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardKind {
    Asset {
        category: AssetCategory,
        value: u32,
        /// Named asset set the card belongs to.
        set: &'static str,
    },
    Action {
        effect: ActionEffect,
    },
    Capital {
        value: u32,
    },
}

/// Static card definition.
///
/// ```
/// use impact_engine::cards::{catalog, CardId, CardType};
///
/// let bond = catalog::get(CardId::new(25)).unwrap();
/// assert_eq!(bond.name, "Green Bond");
/// assert_eq!(bond.card_type(), CardType::Capital);
/// assert_eq!(bond.capital_value(), Some(10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: &'static str,
    pub kind: CardKind,
    /// Flavor text printed on the card.
    pub lesson: Option<&'static str>,
}

impl CardDefinition {
    pub(crate) const fn asset(
        id: u32,
        name: &'static str,
        category: AssetCategory,
        value: u32,
        set: &'static str,
        lesson: &'static str,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name,
            kind: CardKind::Asset { category, value, set },
            lesson: Some(lesson),
        }
    }

    pub(crate) const fn action(
        id: u32,
        name: &'static str,
        effect: ActionEffect,
        lesson: &'static str,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name,
            kind: CardKind::Action { effect },
            lesson: Some(lesson),
        }
    }

    pub(crate) const fn capital(id: u32, name: &'static str, value: u32) -> Self {
        Self {
            id: CardId::new(id),
            name,
            kind: CardKind::Capital { value },
            lesson: None,
        }
    }

    #[must_use]
    pub const fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Asset { .. } => CardType::Asset,
            CardKind::Action { .. } => CardType::Action,
            CardKind::Capital { .. } => CardType::Capital,
        }
    }

    /// Printed category, for asset cards.
    #[must_use]
    pub const fn asset_category(&self) -> Option<AssetCategory> {
        match self.kind {
            CardKind::Asset { category, .. } => Some(category),
            _ => None,
        }
    }

    /// Effect, for action cards.
    #[must_use]
    pub const fn effect(&self) -> Option<ActionEffect> {
        match self.kind {
            CardKind::Action { effect } => Some(effect),
            _ => None,
        }
    }

    /// Bank value, for capital cards.
    #[must_use]
    pub const fn capital_value(&self) -> Option<u32> {
        match self.kind {
            CardKind::Capital { value } => Some(value),
            _ => None,
        }
    }

    /// Whether the card carries the greenwashing tag in its name.
    #[must_use]
    pub fn is_greenwashing(&self) -> bool {
        self.name.contains(GREENWASHING_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_indices_follow_board_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(Category::Governance.code(), 'G');
        assert_eq!(Category::Social.to_string(), "Social");
    }

    #[test]
    fn test_wild_has_no_board_category() {
        assert_eq!(AssetCategory::Wild.board_category(), None);
        assert_eq!(
            AssetCategory::Environment.board_category(),
            Some(Category::Environment)
        );
    }

    #[test]
    fn test_accessors_by_kind() {
        let asset = CardDefinition::asset(1, "Solar Array", AssetCategory::Environment, 2, "RenewableEnergy", "x");
        assert_eq!(asset.card_type(), CardType::Asset);
        assert_eq!(asset.asset_category(), Some(AssetCategory::Environment));
        assert_eq!(asset.effect(), None);
        assert_eq!(asset.capital_value(), None);
        assert!(!asset.is_greenwashing());

        let fake = CardDefinition::asset(10, "Greenwashing Asset", AssetCategory::Wild, 0, "ANY", "x");
        assert!(fake.is_greenwashing());
    }
}

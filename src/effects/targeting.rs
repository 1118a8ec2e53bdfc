//! Target selection for action cards.
//!
//! A played action names up to one opposing seat, a board category, and
//! asset coordinates on either board. Which of these an effect uses is
//! decided when the action is bound to an [`Attack`](super::Attack).

use serde::{Deserialize, Serialize};

use crate::cards::Category;
use crate::core::PlayerId;

/// Position of an asset on a board: category and index within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCoord {
    pub category: Category,
    pub index: usize,
}

impl AssetCoord {
    #[must_use]
    pub const fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }
}

/// Targets supplied with a `PlayAction` move.
///
/// ## Example
///
/// ```
/// use impact_engine::cards::Category;
/// use impact_engine::core::PlayerId;
/// use impact_engine::effects::{ActionTargets, AssetCoord};
///
/// // Stakeholder Revolt: trade my Governance[0] for their Environment[1].
/// let targets = ActionTargets::player(PlayerId::new(1))
///     .with_their_asset(AssetCoord::new(Category::Environment, 1))
///     .with_your_asset(AssetCoord::new(Category::Governance, 0));
///
/// assert_eq!(targets.player, Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionTargets {
    /// Seat the action is aimed at.
    pub player: Option<PlayerId>,
    /// Category named by a set-level effect (Hostile Takeover).
    pub category: Option<Category>,
    /// One of the target's assets.
    pub their_asset: Option<AssetCoord>,
    /// One of the actor's own assets.
    pub your_asset: Option<AssetCoord>,
}

impl ActionTargets {
    /// No targets.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Aim at a seat.
    #[must_use]
    pub fn player(player: PlayerId) -> Self {
        Self {
            player: Some(player),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_their_asset(mut self, coord: AssetCoord) -> Self {
        self.their_asset = Some(coord);
        self
    }

    #[must_use]
    pub fn with_your_asset(mut self, coord: AssetCoord) -> Self {
        self.your_asset = Some(coord);
        self
    }

    /// Category for set-level effects, falling back to the category of
    /// the named asset.
    #[must_use]
    pub fn set_category(&self) -> Option<Category> {
        self.category.or(self.their_asset.map(|coord| coord.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let targets = ActionTargets::none();
        assert_eq!(targets.player, None);
        assert_eq!(targets.set_category(), None);
    }

    #[test]
    fn test_set_category_prefers_explicit() {
        let targets = ActionTargets::player(PlayerId::new(1))
            .with_their_asset(AssetCoord::new(Category::Social, 0))
            .with_category(Category::Governance);
        assert_eq!(targets.set_category(), Some(Category::Governance));

        let fallback = ActionTargets::player(PlayerId::new(1))
            .with_their_asset(AssetCoord::new(Category::Social, 0));
        assert_eq!(fallback.set_category(), Some(Category::Social));
    }
}

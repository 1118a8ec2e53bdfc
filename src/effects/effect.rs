//! Effect definitions.
//!
//! `ActionEffect` is what an action card says it does. `Attack` is a
//! blockable effect bound to the coordinates chosen when it was played;
//! each variant carries exactly the parameters its resolution needs.

use serde::{Deserialize, Serialize};

use crate::cards::Category;

use super::targeting::AssetCoord;

/// The effect printed on an action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionEffect {
    /// Target owes `amount` more in fines.
    ImposeFine { amount: u32 },
    /// Take a complete category from the target.
    StealCompleteSet,
    /// Discard every greenwashing asset on the target's board.
    DestroyTaggedAssets,
    /// Every other seat pays up to `amount` from its bank.
    CollectFromAll { amount: u32 },
    /// Exchange one asset with the target.
    SwapAsset,
    /// Discard one of the target's assets.
    DiscardOpponentAsset,
    /// Response card: blocks any attack.
    BlockAny,
    /// Response card: blocks attacks on the Environment category.
    BlockEnvironment,
    /// Draw `count` extra cards.
    DrawExtra { count: usize },
    /// Every hand moves to the next seat.
    PassHandsLeft,
}

impl ActionEffect {
    /// Whether playing this effect against a seat queues an attack the
    /// target may answer.
    #[must_use]
    pub const fn is_blockable(self) -> bool {
        matches!(
            self,
            ActionEffect::ImposeFine { .. }
                | ActionEffect::StealCompleteSet
                | ActionEffect::DestroyTaggedAssets
                | ActionEffect::SwapAsset
                | ActionEffect::DiscardOpponentAsset
        )
    }

    /// Whether this is a response card usable to block.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, ActionEffect::BlockAny | ActionEffect::BlockEnvironment)
    }
}

/// A blockable effect with its targets bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attack {
    ImposeFine { amount: u32 },
    StealCompleteSet { category: Category },
    DestroyTaggedAssets,
    SwapAsset { theirs: AssetCoord, yours: AssetCoord },
    DiscardOpponentAsset { asset: AssetCoord },
}

impl Attack {
    /// The printed effect this attack came from.
    #[must_use]
    pub const fn effect(&self) -> ActionEffect {
        match *self {
            Attack::ImposeFine { amount } => ActionEffect::ImposeFine { amount },
            Attack::StealCompleteSet { .. } => ActionEffect::StealCompleteSet,
            Attack::DestroyTaggedAssets => ActionEffect::DestroyTaggedAssets,
            Attack::SwapAsset { .. } => ActionEffect::SwapAsset,
            Attack::DiscardOpponentAsset { .. } => ActionEffect::DiscardOpponentAsset,
        }
    }

    /// The category of the defender's board this attack is aimed at, if
    /// it names one.
    #[must_use]
    pub const fn target_category(&self) -> Option<Category> {
        match *self {
            Attack::StealCompleteSet { category } => Some(category),
            Attack::SwapAsset { theirs, .. } => Some(theirs.category),
            Attack::DiscardOpponentAsset { asset } => Some(asset.category),
            Attack::ImposeFine { .. } | Attack::DestroyTaggedAssets => None,
        }
    }
}

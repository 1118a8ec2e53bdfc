//! Moves a seat can submit, and what accepting one produced.
//!
//! A `Move` carries hand and queue indices exactly as the client saw
//! them. Validation resolves those indices against the current state; a
//! stale index is rejected rather than reinterpreted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Category};
use crate::effects::{ActionEffect, ActionTargets};

use super::player::PlayerId;

/// A move request from a seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put an asset from hand onto the board. Wild assets need `category`.
    PlayAsset {
        card_index: usize,
        category: Option<Category>,
    },

    /// Convert a capital card into bank value.
    PlayCapital { card_index: usize },

    /// Play an action card, queueing it as an attack if it is blockable.
    PlayAction {
        card_index: usize,
        targets: ActionTargets,
    },

    /// Answer a pending attack with a block card from hand.
    BlockAttack {
        attack_index: usize,
        block_card_index: usize,
    },

    /// Let a pending attack take effect.
    DeclineBlock { attack_index: usize },

    /// Remove settled attacks from the queue.
    ProcessAllAttacks,

    EndTurn,

    /// Pay off fines from the bank.
    PayFine { amount: u32 },

    /// Discard a card from hand, e.g. to get under the hand limit.
    DiscardCard { card_index: usize },
}

impl Move {
    /// Whether the move spends one of the turn's plays.
    #[must_use]
    pub const fn uses_budget(&self) -> bool {
        matches!(
            self,
            Move::PlayAsset { .. } | Move::PlayCapital { .. } | Move::PlayAction { .. }
        )
    }

    /// Whether the move answers or clears attacks, and so stays legal
    /// while attacks are pending.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(
            self,
            Move::BlockAttack { .. } | Move::DeclineBlock { .. } | Move::ProcessAllAttacks
        )
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::PlayAsset { .. } => "play_asset",
            Move::PlayCapital { .. } => "play_capital",
            Move::PlayAction { .. } => "play_action",
            Move::BlockAttack { .. } => "block_attack",
            Move::DeclineBlock { .. } => "decline_block",
            Move::ProcessAllAttacks => "process_all_attacks",
            Move::EndTurn => "end_turn",
            Move::PayFine { .. } => "pay_fine",
            Move::DiscardCard { .. } => "discard_card",
        }
    }
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    AssetPlayed { card: CardId, category: Category },
    CapitalBanked { card: CardId, value: u32 },
    /// A non-blockable action took effect immediately.
    ActionResolved { card: CardId, effect: ActionEffect },
    AttackQueued { attack_index: usize },
    /// `partial` is set when the attack still hit the unprotected categories.
    AttackBlocked { attack_index: usize, partial: bool },
    AttackDeclined { attack_index: usize },
    AttacksCompacted { removed: usize },
    /// The turn passed; `drawn` is what the next seat drew.
    TurnEnded {
        next: PlayerId,
        drawn: SmallVec<[CardId; 5]>,
    },
    FinePaid { amount: u32 },
    CardDiscarded { card: CardId },
}

/// An accepted move with metadata for history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seat: PlayerId,

    pub mv: Move,

    /// Turn number when the move was accepted.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(seat: PlayerId, mv: Move, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            mv,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budgeted_moves() {
        assert!(Move::PlayCapital { card_index: 0 }.uses_budget());
        assert!(Move::PlayAsset { card_index: 0, category: None }.uses_budget());
        assert!(Move::PlayAction { card_index: 0, targets: ActionTargets::none() }.uses_budget());
        assert!(!Move::EndTurn.uses_budget());
        assert!(!Move::PayFine { amount: 1 }.uses_budget());
        assert!(!Move::DiscardCard { card_index: 0 }.uses_budget());
        assert!(!Move::DeclineBlock { attack_index: 0 }.uses_budget());
    }

    #[test]
    fn test_response_moves() {
        assert!(Move::DeclineBlock { attack_index: 0 }.is_response());
        assert!(Move::BlockAttack { attack_index: 0, block_card_index: 1 }.is_response());
        assert!(Move::ProcessAllAttacks.is_response());
        assert!(!Move::EndTurn.is_response());
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::PlayAction {
            card_index: 2,
            targets: ActionTargets::player(PlayerId::new(1)).with_category(Category::Social),
        };
        let json = serde_json::to_string(&mv).unwrap();
        let restored: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, restored);
    }

    #[test]
    fn test_record() {
        let record = MoveRecord::new(PlayerId::new(0), Move::EndTurn, 3, 2);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 2);
        assert_eq!(record.mv.name(), "end_turn");
    }
}

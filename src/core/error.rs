//! Error types.
//!
//! An illegal move never faults a match: it is answered with a
//! [`MoveRejected`] and the state is left exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardId, CardType};
use crate::core::config::HandLimit;
use crate::core::player::PlayerId;
use crate::core::state::TurnPhase;
use crate::effects::ActionEffect;
use crate::zones::Zone;

/// Why a move was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveRejected {
    #[error("the match is over, {winner} won")]
    MatchOver { winner: PlayerId },

    #[error("{seat} is not at this table")]
    UnknownSeat { seat: PlayerId },

    #[error("it is {current}'s turn")]
    NotYourTurn { current: PlayerId },

    #[error("move not allowed during the {phase:?} phase")]
    WrongPhase { phase: TurnPhase },

    #[error("all {limit} moves for this turn are used")]
    OutOfMoves { limit: u8 },

    #[error("no card at hand index {index}")]
    NoSuchCard { index: usize },

    #[error("expected a {expected} card, found a {actual} card")]
    WrongCardKind { expected: CardType, actual: CardType },

    #[error("wild asset needs a target category")]
    WildNeedsCategory,

    #[error("{effect:?} needs a target seat")]
    MissingTarget { effect: ActionEffect },

    #[error("{seat} cannot be targeted")]
    InvalidTarget { seat: PlayerId },

    #[error("{effect:?} needs a board category")]
    MissingCategory { effect: ActionEffect },

    #[error("no asset at the given coordinate")]
    InvalidAssetCoordinate,

    #[error("target category is not a complete set")]
    NoCompleteSet,

    #[error("{count} attack(s) against {seat} must be answered first")]
    AttacksPending { seat: PlayerId, count: usize },

    #[error("no pending attack at index {index}")]
    NoSuchAttack { index: usize },

    #[error("attack {index} is already settled")]
    AttackSettled { index: usize },

    #[error("attack {next} must be answered before attack {index}")]
    AttackOutOfOrder { index: usize, next: usize },

    #[error("only {defender} can answer attack {index}")]
    NotTheDefender { index: usize, defender: PlayerId },

    #[error("card {card} cannot block")]
    NotABlockCard { card: CardId },

    #[error("{effect:?} does not cover this attack")]
    BlockNotApplicable { effect: ActionEffect },

    #[error("payment of {amount} needs bank {bank} and fines {fines} to cover it")]
    InsufficientFunds { amount: u32, bank: u32, fines: u32 },

    #[error("amount must be positive")]
    InvalidAmount,

    #[error("hand of {size} is over the limit of {limit} ({policy:?})")]
    HandOverLimit { size: usize, limit: usize, policy: HandLimit },
}

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),
}

/// Card bookkeeping failure found by an audit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("{card} is not in any zone")]
    Missing { card: CardId },

    #[error("{card} is in both the {first} and the {second}")]
    Duplicated { card: CardId, first: Zone, second: Zone },

    #[error("{card} is not in the catalog")]
    UnknownCard { card: CardId },

    #[error("{card} is not in the {zone}")]
    NotInZone { card: CardId, zone: Zone },

    #[error("cannot place a card in the {zone}")]
    UnplaceableZone { zone: Zone },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MoveRejected::OutOfMoves { limit: 3 };
        assert_eq!(err.to_string(), "all 3 moves for this turn are used");

        let err = MoveRejected::NotYourTurn { current: PlayerId::new(1) };
        assert_eq!(err.to_string(), "it is Seat 1's turn");
    }

    #[test]
    fn test_rejection_serializes_tagged() {
        let err = MoveRejected::NoSuchCard { index: 4 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"NoSuchCard\""));

        let restored: MoveRejected = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, err);
    }
}

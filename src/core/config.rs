//! Match configuration.
//!
//! `MatchConfig` carries the numeric rules of the game and the two policy
//! switches the session layer may choose between. The defaults are the
//! printed rules; most callers never change them.

use serde::{Deserialize, Serialize};

/// How the hand-size limit is treated at turn end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandLimit {
    /// The limit is a presentation convention; `EndTurn` always succeeds.
    #[default]
    Advisory,
    /// `EndTurn` is rejected while the hand is over the limit.
    Enforced,
}

/// Whether other moves are held back while attacks are unresolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackGuard {
    /// While the current seat has unsettled attacks aimed at it, only
    /// block, decline and compaction are accepted.
    #[default]
    Strict,
    /// No guard; the client is trusted to answer attacks first.
    Relaxed,
}

/// Rules configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats at the table.
    pub seat_count: usize,

    /// Cards drawn at turn start when the hand is empty.
    pub opening_draw: usize,

    /// Cards drawn at turn start otherwise.
    pub refill_draw: usize,

    /// Plays (asset, capital, action) allowed per turn.
    pub moves_per_turn: u8,

    /// Hand size allowed at the end of a turn.
    pub hand_limit: usize,

    /// Assets needed in a category for it to count as complete.
    pub complete_set_size: usize,

    pub hand_limit_policy: HandLimit,

    pub attack_guard: AttackGuard,

    /// Drop settled attacks as soon as their defender has none pending,
    /// instead of waiting for an explicit `ProcessAllAttacks`.
    pub auto_compact: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seat_count: 2,
            opening_draw: 5,
            refill_draw: 2,
            moves_per_turn: 3,
            hand_limit: 7,
            complete_set_size: 3,
            hand_limit_policy: HandLimit::Advisory,
            attack_guard: AttackGuard::Strict,
            auto_compact: false,
        }
    }
}

impl MatchConfig {
    /// Cards to draw at the start of a turn for a hand of `hand_size`.
    #[must_use]
    pub fn turn_draw(&self, hand_size: usize) -> usize {
        if hand_size == 0 {
            self.opening_draw
        } else {
            self.refill_draw
        }
    }
}

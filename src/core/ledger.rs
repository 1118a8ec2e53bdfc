//! Per-seat record of a match.

use serde::{Deserialize, Serialize};

use crate::zones::{Board, Pile};

/// Everything one seat owns: hand, board, money and the turn budget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLedger {
    /// Accumulated capital.
    pub bank: u32,

    /// Outstanding fines.
    pub fines: u32,

    pub board: Board,

    pub hand: Pile,

    /// Capital cards already converted into `bank`.
    pub banked: Pile,

    /// Plays made during the current turn.
    pub moves_played: u8,
}

impl PlayerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards this seat holds in any zone.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.board.total() + self.banked.len()
    }
}

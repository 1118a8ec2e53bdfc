//! Zone system: where each card is.
//!
//! A card is in exactly one zone at a time. Zones are plain ordered
//! [`Pile`]s owned by the match or by a seat's ledger; the [`Zone`] enum
//! names them so a card can be located or relocated by identity.

mod board;
mod pile;

pub use board::Board;
pub use pile::Pile;

use serde::{Deserialize, Serialize};

use crate::cards::Category;
use crate::core::PlayerId;

/// Name of a zone in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    DrawPile,
    DiscardPile,
    Hand(PlayerId),
    Board(PlayerId, Category),
    /// Capital cards converted into a seat's bank.
    Banked(PlayerId),
    /// Held by the pending attack at this queue index.
    Attack(usize),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::DrawPile => write!(f, "draw pile"),
            Zone::DiscardPile => write!(f, "discard pile"),
            Zone::Hand(seat) => write!(f, "{} hand", seat),
            Zone::Board(seat, category) => write!(f, "{} {} board", seat, category),
            Zone::Banked(seat) => write!(f, "{} bank", seat),
            Zone::Attack(index) => write!(f, "pending attack {}", index),
        }
    }
}

//! Match state: the single unit of truth passed through every operation.
//!
//! ## MatchState
//!
//! - Draw pile (top = end) and discard pile
//! - Pending-attack queue
//! - One `PlayerLedger` per seat
//! - Turn bookkeeping: current seat, phase, turn number, winner
//! - Move history and the seeded RNG
//!
//! Every sequence is an `im::Vector`, so cloning a match is O(1). The
//! engine never holds state of its own; callers own the `MatchState` and
//! serialize moves against it.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::error::{SnapshotError, ZoneError};
use super::ledger::PlayerLedger;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{catalog, CardId, Category};
use crate::stack::AttackQueue;
use crate::zones::{Pile, Zone};

/// Phase of the current seat's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the turn-begin hook to draw.
    #[default]
    Draw,
    /// The seat may issue moves.
    Action,
    /// The turn-end hook has run; the next seat has not begun.
    End,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub draw_pile: Pile,

    pub discard_pile: Pile,

    pub pending_attacks: AttackQueue,

    pub players: PlayerMap<PlayerLedger>,

    /// Seat whose turn it is.
    pub current: PlayerId,

    pub phase: TurnPhase,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Set once a seat has won; no move is accepted afterwards.
    pub winner: Option<PlayerId>,

    /// Accepted moves, oldest first.
    pub history: Vector<MoveRecord>,

    pub rng: GameRng,

    /// Sequence within the current turn.
    move_sequence: u32,
}

impl MatchState {
    /// Fresh match: the whole catalog shuffled into the draw pile, every
    /// ledger empty, seat 0 about to begin.
    #[must_use]
    pub fn new(seat_count: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck: Vec<CardId> = catalog::ids().collect();
        rng.shuffle(&mut deck);

        Self {
            draw_pile: deck.into_iter().collect(),
            discard_pile: Pile::new(),
            pending_attacks: AttackQueue::new(),
            players: PlayerMap::with_default(seat_count),
            current: PlayerId::new(0),
            phase: TurnPhase::Draw,
            turn_number: 1,
            winner: None,
            history: Vector::new(),
            rng,
            move_sequence: 0,
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    #[must_use]
    pub fn ledger(&self, seat: PlayerId) -> Option<&PlayerLedger> {
        self.players.get(seat)
    }

    /// Whether the match has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    // === History ===

    /// Record an accepted move.
    pub fn record(&mut self, seat: PlayerId, mv: Move) {
        let sequence = self.move_sequence;
        self.move_sequence += 1;
        self.history
            .push_back(MoveRecord::new(seat, mv, self.turn_number, sequence));
    }

    /// Move to the next turn number.
    pub(crate) fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.move_sequence = 0;
    }

    // === Zones ===

    /// Pile for a placeable zone.
    fn pile_mut(&mut self, zone: Zone) -> Option<&mut Pile> {
        match zone {
            Zone::DrawPile => Some(&mut self.draw_pile),
            Zone::DiscardPile => Some(&mut self.discard_pile),
            Zone::Hand(seat) => self.players.get_mut(seat).map(|p| &mut p.hand),
            Zone::Board(seat, category) => self.players.get_mut(seat).map(|p| &mut p.board[category]),
            Zone::Banked(seat) => self.players.get_mut(seat).map(|p| &mut p.banked),
            Zone::Attack(_) => None,
        }
    }

    /// Every zone holding cards, with its contents.
    fn zones(&self) -> Vec<(Zone, Vec<CardId>)> {
        let mut zones = vec![
            (Zone::DrawPile, self.draw_pile.to_vec()),
            (Zone::DiscardPile, self.discard_pile.to_vec()),
        ];
        for (seat, ledger) in self.players.iter() {
            zones.push((Zone::Hand(seat), ledger.hand.to_vec()));
            zones.push((Zone::Banked(seat), ledger.banked.to_vec()));
            for category in Category::ALL {
                zones.push((Zone::Board(seat, category), ledger.board[category].to_vec()));
            }
        }
        for (index, record) in self.pending_attacks.iter().enumerate() {
            if record.is_pending() {
                zones.push((Zone::Attack(index), vec![record.card]));
            }
        }
        zones
    }

    /// Zone currently holding `card`.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<Zone> {
        self.zones()
            .into_iter()
            .find(|(_, cards)| cards.contains(&card))
            .map(|(zone, _)| zone)
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.zones().iter().map(|(_, cards)| cards.len()).sum()
    }

    /// Check that every catalog card is in exactly one zone.
    pub fn audit(&self) -> Result<(), ZoneError> {
        let mut seen: FxHashMap<CardId, Zone> = FxHashMap::default();
        for (zone, cards) in self.zones() {
            for card in cards {
                if catalog::get(card).is_none() {
                    return Err(ZoneError::UnknownCard { card });
                }
                if let Some(first) = seen.insert(card, zone) {
                    return Err(ZoneError::Duplicated {
                        card,
                        first,
                        second: zone,
                    });
                }
            }
        }
        match catalog::ids().find(|card| !seen.contains_key(card)) {
            Some(card) => Err(ZoneError::Missing { card }),
            None => Ok(()),
        }
    }

    /// Move a card by identity to the top of another zone.
    ///
    /// Intended for arranging positions (tests, puzzles, replays); it
    /// bypasses every rule.
    pub fn relocate(&mut self, card: CardId, to: Zone) -> Result<(), ZoneError> {
        let from = self.locate(card).ok_or(ZoneError::Missing { card })?;
        if self.pile_mut(to).is_none() {
            return Err(ZoneError::UnplaceableZone { zone: to });
        }
        let removed = self
            .pile_mut(from)
            .is_some_and(|pile| pile.remove_card(card));
        if !removed {
            return Err(ZoneError::NotInZone { card, zone: from });
        }
        if let Some(pile) = self.pile_mut(to) {
            pile.push_top(card);
        }
        log::trace!("relocated {} from {} to {}", card, from, to);
        Ok(())
    }

    // === Snapshots ===

    /// Encode the whole match, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a match produced by [`MatchState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

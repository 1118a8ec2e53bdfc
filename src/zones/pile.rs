//! Ordered card sequences.
//!
//! Every zone in a match (hands, board categories, the draw and discard
//! piles) is a `Pile`: an ordered `im::Vector` of card ids. The "top" of a
//! pile is its end, so draws pop from the back.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<CardId>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Index of a card by identity.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Put a card on top (the end).
    pub fn push_top(&mut self, card: CardId) {
        self.cards.push_back(card);
    }

    /// Take the top card.
    pub fn pop_top(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn take(&mut self, index: usize) -> Option<CardId> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Remove a card by identity. Returns `false` if it is not here.
    pub fn remove_card(&mut self, card: CardId) -> bool {
        match self.position(card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Move every card out, leaving this pile empty.
    pub fn take_all(&mut self) -> Pile {
        std::mem::take(self)
    }

    /// Append another pile on top of this one, preserving its order.
    pub fn append(&mut self, other: Pile) {
        self.cards.append(other.cards);
    }

    /// Remove every card matching `predicate`, returning them in order.
    pub fn extract_where(&mut self, mut predicate: impl FnMut(CardId) -> bool) -> Pile {
        let (taken, kept): (Vector<CardId>, Vector<CardId>) =
            self.cards.iter().copied().partition(|&card| predicate(card));
        self.cards = kept;
        Pile { cards: taken }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<CardId> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<CardId> for Pile {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

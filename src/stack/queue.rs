//! The pending-attack queue.
//!
//! Records are appended in play order and keep their index until a
//! compaction removes settled ones. Indices handed to clients are only
//! valid until the next compaction.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Category};
use crate::core::PlayerId;
use crate::effects::{ActionEffect, Attack};

/// Resolution state of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStatus {
    /// Waiting for the defender.
    Pending,
    /// Stopped by a block card.
    Blocked,
    /// Declined; the effect was applied.
    Processed,
}

/// A blockable action waiting for, or past, its defender's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub attacker: PlayerId,
    pub target: PlayerId,
    /// The action card. It left the attacker's hand when played and goes
    /// to the discard pile when the attack settles.
    pub card: CardId,
    pub attack: Attack,
    pub status: AttackStatus,
}

impl AttackRecord {
    #[must_use]
    pub fn new(attacker: PlayerId, target: PlayerId, card: CardId, attack: Attack) -> Self {
        Self {
            attacker,
            target,
            card,
            attack,
            status: AttackStatus::Pending,
        }
    }

    #[must_use]
    pub fn effect(&self) -> ActionEffect {
        self.attack.effect()
    }

    #[must_use]
    pub fn target_category(&self) -> Option<Category> {
        self.attack.target_category()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == AttackStatus::Pending
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == AttackStatus::Blocked
    }

    #[must_use]
    pub fn is_processed(&self) -> bool {
        self.status == AttackStatus::Processed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackQueue {
    entries: Vector<AttackRecord>,
}

impl AttackQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AttackRecord> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackRecord> {
        self.entries.iter()
    }

    /// Append a record and return its index.
    pub fn push(&mut self, record: AttackRecord) -> usize {
        self.entries.push_back(record);
        self.entries.len() - 1
    }

    /// Set the status of the record at `index`.
    pub(crate) fn settle(&mut self, index: usize, status: AttackStatus) {
        if let Some(record) = self.entries.get_mut(index) {
            record.status = status;
        }
    }

    /// Pending attacks aimed at `defender`, with their queue indices.
    pub fn pending_for(&self, defender: PlayerId) -> impl Iterator<Item = (usize, &AttackRecord)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.target == defender && record.is_pending())
    }

    /// Index of the attack `defender` must answer next.
    #[must_use]
    pub fn next_pending_for(&self, defender: PlayerId) -> Option<usize> {
        self.pending_for(defender).map(|(index, _)| index).next()
    }

    #[must_use]
    pub fn has_pending_for(&self, defender: PlayerId) -> bool {
        self.next_pending_for(defender).is_some()
    }

    /// Whether any record is settled and waiting for compaction.
    #[must_use]
    pub fn has_settled(&self) -> bool {
        self.entries.iter().any(|record| !record.is_pending())
    }

    /// Remove every settled record, keeping pending ones in order.
    /// Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|record| record.is_pending());
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fine(attacker: u8, target: u8, card: u32) -> AttackRecord {
        AttackRecord::new(
            PlayerId::new(attacker),
            PlayerId::new(target),
            CardId::new(card),
            Attack::ImposeFine { amount: 5 },
        )
    }

    #[test]
    fn test_push_returns_index() {
        let mut queue = AttackQueue::new();
        assert_eq!(queue.push(fine(0, 1, 13)), 0);
        assert_eq!(queue.push(fine(0, 1, 21)), 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_pending_for_defender_in_order() {
        let mut queue = AttackQueue::new();
        queue.push(fine(0, 1, 13));
        queue.push(fine(1, 0, 14));
        queue.push(fine(0, 1, 21));

        let indices: Vec<_> = queue.pending_for(PlayerId::new(1)).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);

        queue.settle(0, AttackStatus::Processed);
        assert_eq!(queue.next_pending_for(PlayerId::new(1)), Some(2));
    }

    #[test]
    fn test_compact_removes_only_settled() {
        let mut queue = AttackQueue::new();
        queue.push(fine(0, 1, 13));
        queue.push(fine(0, 1, 21));
        queue.push(fine(0, 1, 15));
        queue.settle(0, AttackStatus::Blocked);
        queue.settle(2, AttackStatus::Processed);

        assert!(queue.has_settled());
        assert_eq!(queue.compact(), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(0).map(|r| r.card), Some(CardId::new(21)));
    }

    #[test]
    fn test_compact_without_settled_is_noop() {
        let mut queue = AttackQueue::new();
        queue.push(fine(0, 1, 13));
        let before = queue.clone();

        assert_eq!(queue.compact(), 0);
        assert_eq!(queue, before);
    }

    #[test]
    fn test_status_predicates() {
        let mut record = fine(0, 1, 13);
        assert!(record.is_pending());
        record.status = AttackStatus::Blocked;
        assert!(record.is_blocked() && !record.is_processed());
        assert_eq!(record.effect(), ActionEffect::ImposeFine { amount: 5 });
    }
}

//! Effect resolver - applies effects to a match.
//!
//! Every transformation checks its own preconditions and does nothing when
//! they do not hold (a category that is no longer complete, a coordinate
//! that no longer resolves). The boolean results report whether anything
//! changed.

use crate::cards::{catalog, CardId, Category};
use crate::core::{MatchConfig, MatchState, PlayerId};
use crate::rules::turn;
use crate::zones::Pile;

use super::effect::{ActionEffect, Attack};
use super::targeting::AssetCoord;

/// Applies effects to a `MatchState` under a given configuration.
///
/// ```
/// use impact_engine::core::{MatchConfig, MatchState, PlayerId};
/// use impact_engine::effects::{Attack, EffectResolver};
///
/// let config = MatchConfig::default();
/// let mut state = MatchState::new(2, 1);
/// let resolver = EffectResolver::new(&config);
///
/// resolver.apply_attack(&mut state, PlayerId::new(0), PlayerId::new(1), &Attack::ImposeFine { amount: 5 });
/// assert_eq!(state.players[PlayerId::new(1)].fines, 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EffectResolver<'a> {
    config: &'a MatchConfig,
}

impl<'a> EffectResolver<'a> {
    #[must_use]
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    /// Apply a bound attack from `attacker` against `target`.
    pub fn apply_attack(
        &self,
        state: &mut MatchState,
        attacker: PlayerId,
        target: PlayerId,
        attack: &Attack,
    ) -> bool {
        match *attack {
            Attack::ImposeFine { amount } => self.impose_fine(state, target, amount),
            Attack::StealCompleteSet { category } => {
                self.steal_complete_set(state, attacker, target, category)
            }
            Attack::DestroyTaggedAssets => {
                self.destroy_tagged_assets(state, target, &Category::ALL) > 0
            }
            Attack::SwapAsset { theirs, yours } => {
                self.swap_asset(state, attacker, target, theirs, yours)
            }
            Attack::DiscardOpponentAsset { asset } => {
                self.discard_opponent_asset(state, target, asset).is_some()
            }
        }
    }

    /// Apply a non-blockable effect for `actor`.
    ///
    /// `card` is the action card being played; only pass-hands-left
    /// moves it (to the discard pile, before hands rotate). Blockable
    /// effects are resolved through [`EffectResolver::apply_attack`] and
    /// do nothing here, as do block cards played outside a response.
    pub fn apply_immediate(
        &self,
        state: &mut MatchState,
        actor: PlayerId,
        card: CardId,
        effect: ActionEffect,
    ) -> bool {
        match effect {
            ActionEffect::CollectFromAll { amount } => self.collect_from_all(state, actor, amount) > 0,
            ActionEffect::DrawExtra { count } => !turn::draw_cards(state, actor, count).is_empty(),
            ActionEffect::PassHandsLeft => self.pass_hands_left(state, actor, card),
            ActionEffect::BlockAny
            | ActionEffect::BlockEnvironment
            | ActionEffect::ImposeFine { .. }
            | ActionEffect::StealCompleteSet
            | ActionEffect::DestroyTaggedAssets
            | ActionEffect::SwapAsset
            | ActionEffect::DiscardOpponentAsset => false,
        }
    }

    pub fn impose_fine(&self, state: &mut MatchState, target: PlayerId, amount: u32) -> bool {
        match state.players.get_mut(target) {
            Some(ledger) => {
                ledger.fines = ledger.fines.saturating_add(amount);
                log::debug!("{} fined {} (owes {})", target, amount, ledger.fines);
                true
            }
            None => false,
        }
    }

    /// Move the target's whole `category` to the attacker if it is
    /// complete.
    pub fn steal_complete_set(
        &self,
        state: &mut MatchState,
        attacker: PlayerId,
        target: PlayerId,
        category: Category,
    ) -> bool {
        let set_size = self.config.complete_set_size;
        let Some((thief, victim)) = state.players.pair_mut(attacker, target) else {
            return false;
        };
        if !victim.board.is_complete(category, set_size) {
            return false;
        }
        let stolen = victim.board[category].take_all();
        log::debug!("{} takes {} {} assets from {}", attacker, stolen.len(), category, target);
        thief.board[category].append(stolen);
        true
    }

    /// Discard every greenwashing asset in the given categories of the
    /// target's board. Returns how many were discarded.
    pub fn destroy_tagged_assets(
        &self,
        state: &mut MatchState,
        target: PlayerId,
        categories: &[Category],
    ) -> usize {
        let Some(ledger) = state.players.get_mut(target) else {
            return 0;
        };
        let mut destroyed = Pile::new();
        for &category in categories {
            destroyed.append(ledger.board[category].extract_where(is_greenwashing));
        }
        let count = destroyed.len();
        if count > 0 {
            log::debug!("audit on {} discards {} greenwashing asset(s)", target, count);
        }
        state.discard_pile.append(destroyed);
        count
    }

    /// Every other seat pays `min(amount, bank)` to `actor`. Returns the
    /// total collected.
    pub fn collect_from_all(&self, state: &mut MatchState, actor: PlayerId, amount: u32) -> u32 {
        if !state.players.contains(actor) {
            return 0;
        }
        let mut collected = 0;
        for (seat, ledger) in state.players.iter_mut() {
            if seat == actor {
                continue;
            }
            let paid = amount.min(ledger.bank);
            ledger.bank -= paid;
            collected += paid;
        }
        state.players[actor].bank += collected;
        log::debug!("{} collects {} from the table", actor, collected);
        collected
    }

    /// Exchange the target's asset at `theirs` with the attacker's asset at
    /// `yours`. Each lands in the receiver's board under the category it
    /// was taken from.
    pub fn swap_asset(
        &self,
        state: &mut MatchState,
        attacker: PlayerId,
        target: PlayerId,
        theirs: AssetCoord,
        yours: AssetCoord,
    ) -> bool {
        let Some((own, other)) = state.players.pair_mut(attacker, target) else {
            return false;
        };
        if other.board.get(theirs).is_none() || own.board.get(yours).is_none() {
            return false;
        }
        let (Some(their_card), Some(your_card)) = (other.board.take(theirs), own.board.take(yours))
        else {
            return false;
        };
        own.board[theirs.category].push_top(their_card);
        other.board[yours.category].push_top(your_card);
        log::debug!("{} swaps {} for {} with {}", attacker, your_card, their_card, target);
        true
    }

    /// Discard the target's asset at `coord`.
    pub fn discard_opponent_asset(
        &self,
        state: &mut MatchState,
        target: PlayerId,
        coord: AssetCoord,
    ) -> Option<CardId> {
        let card = state.players.get_mut(target)?.board.take(coord)?;
        state.discard_pile.push_top(card);
        log::debug!("{} loses {} to the discard pile", target, card);
        Some(card)
    }

    /// Take `card` out of `actor`'s hand, pass every hand to the next
    /// seat, and discard `card`.
    pub fn pass_hands_left(&self, state: &mut MatchState, actor: PlayerId, card: CardId) -> bool {
        let Some(ledger) = state.players.get_mut(actor) else {
            return false;
        };
        if !ledger.hand.remove_card(card) {
            return false;
        }

        let seat_count = state.seat_count();
        let hands: Vec<(PlayerId, Pile)> = state
            .players
            .iter_mut()
            .map(|(seat, ledger)| (seat, ledger.hand.take_all()))
            .collect();
        for (seat, hand) in hands {
            state.players[seat.next(seat_count)].hand = hand;
        }

        state.discard_pile.push_top(card);
        log::debug!("{} passes every hand to the left", actor);
        true
    }
}

fn is_greenwashing(card: CardId) -> bool {
    catalog::get(card).is_some_and(|def| def.is_greenwashing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Zone;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn place(state: &mut MatchState, ids: &[u32], zone: Zone) {
        for &id in ids {
            state.relocate(CardId::new(id), zone).unwrap();
        }
    }

    fn board_ids(state: &MatchState, seat: PlayerId, category: Category) -> Vec<u32> {
        state.players[seat].board[category].iter().map(CardId::raw).collect()
    }

    #[test]
    fn test_fine_accumulates() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);

        resolver.impose_fine(&mut state, P1, 5);
        resolver.impose_fine(&mut state, P1, 5);

        assert_eq!(state.players[P1].fines, 10);
        assert_eq!(state.players[P0].fines, 0);
    }

    #[test]
    fn test_steal_needs_complete_set() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[4, 5], Zone::Board(P1, Category::Social));

        assert!(!resolver.steal_complete_set(&mut state, P0, P1, Category::Social));
        assert_eq!(board_ids(&state, P1, Category::Social), vec![4, 5]);

        place(&mut state, &[6], Zone::Board(P1, Category::Social));
        place(&mut state, &[12], Zone::Board(P0, Category::Social));
        assert!(resolver.steal_complete_set(&mut state, P0, P1, Category::Social));
        assert!(state.players[P1].board[Category::Social].is_empty());
        assert_eq!(board_ids(&state, P0, Category::Social), vec![12, 4, 5, 6]);
    }

    #[test]
    fn test_destroy_tagged_assets_scoped() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[1, 10], Zone::Board(P1, Category::Environment));
        place(&mut state, &[11, 4], Zone::Board(P1, Category::Social));

        let destroyed =
            resolver.destroy_tagged_assets(&mut state, P1, &[Category::Social, Category::Governance]);

        assert_eq!(destroyed, 1);
        assert_eq!(board_ids(&state, P1, Category::Environment), vec![1, 10]);
        assert_eq!(board_ids(&state, P1, Category::Social), vec![4]);
        assert_eq!(state.locate(CardId::new(11)), Some(Zone::DiscardPile));
    }

    #[test]
    fn test_collect_caps_at_bank() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(3, 1);
        let resolver = EffectResolver::new(&config);
        state.players[P1].bank = 1;
        state.players[PlayerId::new(2)].bank = 9;

        let collected = resolver.collect_from_all(&mut state, P0, 2);

        assert_eq!(collected, 3);
        assert_eq!(state.players[P0].bank, 3);
        assert_eq!(state.players[P1].bank, 0);
        assert_eq!(state.players[PlayerId::new(2)].bank, 7);
    }

    #[test]
    fn test_swap_crosses_categories() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[1], Zone::Board(P1, Category::Environment));
        place(&mut state, &[7], Zone::Board(P0, Category::Governance));

        let swapped = resolver.swap_asset(
            &mut state,
            P0,
            P1,
            AssetCoord::new(Category::Environment, 0),
            AssetCoord::new(Category::Governance, 0),
        );

        assert!(swapped);
        assert_eq!(board_ids(&state, P0, Category::Environment), vec![1]);
        assert_eq!(board_ids(&state, P1, Category::Governance), vec![7]);
        assert!(state.players[P0].board[Category::Governance].is_empty());
    }

    #[test]
    fn test_swap_with_one_side_missing_changes_nothing() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[1], Zone::Board(P1, Category::Environment));
        let before = state.players.clone();

        let swapped = resolver.swap_asset(
            &mut state,
            P0,
            P1,
            AssetCoord::new(Category::Environment, 0),
            AssetCoord::new(Category::Governance, 0),
        );

        assert!(!swapped);
        assert_eq!(state.players, before);
    }

    #[test]
    fn test_discard_opponent_asset() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[7, 8], Zone::Board(P1, Category::Governance));

        let coord = AssetCoord::new(Category::Governance, 1);
        assert_eq!(resolver.discard_opponent_asset(&mut state, P1, coord), Some(CardId::new(8)));
        assert_eq!(resolver.discard_opponent_asset(&mut state, P1, coord), None);
        assert_eq!(state.discard_pile.to_vec(), vec![CardId::new(8)]);
    }

    #[test]
    fn test_pass_hands_left_rotates() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);
        place(&mut state, &[22, 1, 2], Zone::Hand(P0));
        place(&mut state, &[4], Zone::Hand(P1));

        assert!(resolver.pass_hands_left(&mut state, P0, CardId::new(22)));

        assert_eq!(state.players[P0].hand.to_vec(), vec![CardId::new(4)]);
        assert_eq!(state.players[P1].hand.to_vec(), vec![CardId::new(1), CardId::new(2)]);
        assert_eq!(state.locate(CardId::new(22)), Some(Zone::DiscardPile));
        assert!(state.audit().is_ok());
    }

    #[test]
    fn test_immediate_ignores_blockable_effects() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, 1);
        let resolver = EffectResolver::new(&config);

        let changed =
            resolver.apply_immediate(&mut state, P0, CardId::new(13), ActionEffect::ImposeFine { amount: 5 });

        assert!(!changed);
        assert_eq!(state.players[P1].fines, 0);
    }
}

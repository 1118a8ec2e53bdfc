//! Turn controller: draw, reshuffle, and the begin/end-of-turn hooks.
//!
//! A turn goes Draw → Action → End. `on_turn_begin` performs the draw and
//! opens the Action phase; `on_turn_end` closes it. Moving to the next
//! seat is the engine's job.

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{HandLimit, MatchConfig, MatchState, MoveRejected, PlayerId, TurnPhase};

/// Cards drawn by one draw step. Five covers an opening hand.
pub type Drawn = SmallVec<[CardId; 5]>;

/// Turn the discard pile into a freshly shuffled draw pile.
///
/// Returns the number of cards moved.
pub fn reshuffle(state: &mut MatchState) -> usize {
    let mut cards = state.discard_pile.take_all().to_vec();
    state.rng.shuffle(&mut cards);
    let count = cards.len();
    state.draw_pile.append(cards.into_iter().collect());
    log::debug!("reshuffled {} discarded cards into the draw pile", count);
    count
}

/// Draw one card into `seat`'s hand, reshuffling the discard pile first
/// if the draw pile is empty. `None` when both piles are empty.
pub fn draw_card(state: &mut MatchState, seat: PlayerId) -> Option<CardId> {
    if !state.players.contains(seat) {
        return None;
    }
    if state.draw_pile.is_empty() && !state.discard_pile.is_empty() {
        reshuffle(state);
    }
    let card = state.draw_pile.pop_top()?;
    state.players[seat].hand.push_top(card);
    log::trace!("{} drew {}", seat, card);
    Some(card)
}

/// Draw up to `count` cards. Running out of cards is not an error; the
/// result is simply shorter.
pub fn draw_cards(state: &mut MatchState, seat: PlayerId, count: usize) -> Drawn {
    let mut drawn = Drawn::new();
    for _ in 0..count {
        match draw_card(state, seat) {
            Some(card) => drawn.push(card),
            None => break,
        }
    }
    drawn
}

/// Begin `seat`'s turn: draw (five into an empty hand, otherwise two),
/// reset the move counter and open the Action phase.
pub fn on_turn_begin(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
) -> Result<Drawn, MoveRejected> {
    if !state.players.contains(seat) {
        return Err(MoveRejected::UnknownSeat { seat });
    }

    state.current = seat;
    state.phase = TurnPhase::Draw;

    let count = config.turn_draw(state.players[seat].hand.len());
    let drawn = draw_cards(state, seat, count);

    state.players[seat].moves_played = 0;
    state.phase = TurnPhase::Action;

    log::info!(
        "turn {} begins for {}: drew {} of {}",
        state.turn_number,
        seat,
        drawn.len(),
        count
    );
    Ok(drawn)
}

/// End `seat`'s turn. Under [`HandLimit::Enforced`] a hand over the limit
/// keeps the turn open.
pub fn on_turn_end(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
) -> Result<(), MoveRejected> {
    let hand_size = state
        .ledger(seat)
        .map(|ledger| ledger.hand.len())
        .ok_or(MoveRejected::UnknownSeat { seat })?;

    if config.hand_limit_policy == HandLimit::Enforced && hand_size > config.hand_limit {
        return Err(MoveRejected::HandOverLimit {
            size: hand_size,
            limit: config.hand_limit,
            policy: config.hand_limit_policy,
        });
    }
    if hand_size > config.hand_limit {
        log::debug!("{} ends turn holding {} cards", seat, hand_size);
    }

    state.phase = TurnPhase::End;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::zones::Zone;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_opening_draw_is_five() {
        let mut state = MatchState::new(2, 42);
        let config = MatchConfig::default();

        let drawn = on_turn_begin(&mut state, &config, P0).unwrap();

        assert_eq!(drawn.len(), 5);
        assert_eq!(state.players[P0].hand.len(), 5);
        assert_eq!(state.draw_pile.len(), DECK_SIZE - 5);
        assert_eq!(state.phase, TurnPhase::Action);
    }

    #[test]
    fn test_refill_draw_is_two_and_resets_moves() {
        let mut state = MatchState::new(2, 42);
        let config = MatchConfig::default();
        on_turn_begin(&mut state, &config, P0).unwrap();
        state.players[P0].moves_played = 3;

        let drawn = on_turn_begin(&mut state, &config, P0).unwrap();

        assert_eq!(drawn.len(), 2);
        assert_eq!(state.players[P0].hand.len(), 7);
        assert_eq!(state.players[P0].moves_played, 0);
    }

    #[test]
    fn test_draw_pops_from_the_top() {
        let mut state = MatchState::new(2, 5);
        let top = state.draw_pile.get(state.draw_pile.len() - 1);

        assert_eq!(draw_card(&mut state, P1), top);
    }

    #[test]
    fn test_reshuffle_when_draw_pile_empty() {
        let mut state = MatchState::new(2, 42);
        while let Some(card) = state.draw_pile.pop_top() {
            state.discard_pile.push_top(card);
        }
        let discarded = state.discard_pile.len();

        let card = draw_card(&mut state, P0);

        assert!(card.is_some());
        assert!(state.discard_pile.is_empty());
        assert_eq!(state.draw_pile.len(), discarded - 1);
        assert!(state.audit().is_ok());
    }

    #[test]
    fn test_draw_with_both_piles_empty_yields_fewer() {
        let mut state = MatchState::new(2, 42);
        for card in state.draw_pile.to_vec().into_iter().skip(1) {
            state.relocate(card, Zone::Banked(P1)).unwrap();
        }

        let drawn = draw_cards(&mut state, P0, 5);

        assert_eq!(drawn.len(), 1);
        assert!(draw_card(&mut state, P0).is_none());
    }

    #[test]
    fn test_turn_end_hand_limit() {
        let mut state = MatchState::new(2, 42);
        for card in state.draw_pile.to_vec().into_iter().take(8) {
            state.relocate(card, Zone::Hand(P0)).unwrap();
        }

        let advisory = MatchConfig::default();
        assert!(on_turn_end(&mut state.clone(), &advisory, P0).is_ok());

        let enforced = MatchConfig {
            hand_limit_policy: HandLimit::Enforced,
            ..MatchConfig::default()
        };
        let result = on_turn_end(&mut state, &enforced, P0);
        assert!(matches!(result, Err(MoveRejected::HandOverLimit { size: 8, limit: 7, .. })));
        assert_ne!(state.phase, TurnPhase::End);
    }

    #[test]
    fn test_unknown_seat() {
        let mut state = MatchState::new(2, 42);
        let config = MatchConfig::default();
        let seat = PlayerId::new(4);

        assert_eq!(
            on_turn_begin(&mut state, &config, seat),
            Err(MoveRejected::UnknownSeat { seat })
        );
        assert!(draw_card(&mut state, seat).is_none());
    }
}

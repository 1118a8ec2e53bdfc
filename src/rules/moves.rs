//! Move validation and application for the plays a seat makes from hand.
//!
//! Each function validates fully before touching the state, so a rejected
//! move leaves the match exactly as it was. Seat and phase checks are the
//! engine's; these functions only check what is specific to the move.

use crate::cards::{catalog, CardDefinition, CardId, CardType, Category};
use crate::core::{MatchConfig, MatchState, MoveOutcome, MoveRejected, PlayerId, PlayerLedger};
use crate::effects::{ActionEffect, ActionTargets, AssetCoord, Attack, EffectResolver};
use crate::stack::AttackRecord;

fn ledger(state: &MatchState, seat: PlayerId) -> Result<&PlayerLedger, MoveRejected> {
    state.ledger(seat).ok_or(MoveRejected::UnknownSeat { seat })
}

/// Reject the play if the seat has used its moves for the turn.
pub fn check_budget(
    state: &MatchState,
    config: &MatchConfig,
    seat: PlayerId,
) -> Result<(), MoveRejected> {
    if ledger(state, seat)?.moves_played >= config.moves_per_turn {
        return Err(MoveRejected::OutOfMoves {
            limit: config.moves_per_turn,
        });
    }
    Ok(())
}

/// The card at `index` in `seat`'s hand, checked against `expected`.
fn hand_card(
    state: &MatchState,
    seat: PlayerId,
    index: usize,
    expected: CardType,
) -> Result<(CardId, &'static CardDefinition), MoveRejected> {
    let card = ledger(state, seat)?
        .hand
        .get(index)
        .ok_or(MoveRejected::NoSuchCard { index })?;
    let def = catalog::get(card).ok_or(MoveRejected::NoSuchCard { index })?;
    if def.card_type() != expected {
        return Err(MoveRejected::WrongCardKind {
            expected,
            actual: def.card_type(),
        });
    }
    Ok((card, def))
}

/// Put an asset from hand onto the board.
///
/// An explicit `category` wins; otherwise the card's own category is
/// used, and a wild card without one is rejected.
pub fn play_asset(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    card_index: usize,
    category: Option<Category>,
) -> Result<MoveOutcome, MoveRejected> {
    check_budget(state, config, seat)?;
    let (card, def) = hand_card(state, seat, card_index, CardType::Asset)?;
    let category = category
        .or_else(|| def.asset_category().and_then(|c| c.board_category()))
        .ok_or(MoveRejected::WildNeedsCategory)?;

    let ledger = &mut state.players[seat];
    ledger.hand.take(card_index);
    ledger.board[category].push_top(card);
    ledger.moves_played += 1;

    log::debug!("{} plays {} into {}", seat, def.name, category);
    Ok(MoveOutcome::AssetPlayed { card, category })
}

/// Convert a capital card into bank value. The card moves to the seat's
/// banked pile and never returns to circulation.
pub fn play_capital(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    card_index: usize,
) -> Result<MoveOutcome, MoveRejected> {
    check_budget(state, config, seat)?;
    let (card, def) = hand_card(state, seat, card_index, CardType::Capital)?;
    let value = def.capital_value().unwrap_or(0);

    let ledger = &mut state.players[seat];
    ledger.hand.take(card_index);
    ledger.banked.push_top(card);
    ledger.bank = ledger.bank.saturating_add(value);
    ledger.moves_played += 1;

    log::debug!("{} banks {} worth {}", seat, def.name, value);
    Ok(MoveOutcome::CapitalBanked { card, value })
}

/// Bind a blockable effect to the targets it was played with.
///
/// Everything the attack needs must resolve now: a target seat other
/// than the actor, and for coordinate effects the named assets.
pub fn bind_attack(
    state: &MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    effect: ActionEffect,
    targets: &ActionTargets,
) -> Result<(PlayerId, Attack), MoveRejected> {
    let target = targets.player.ok_or(MoveRejected::MissingTarget { effect })?;
    let defender = match state.ledger(target) {
        Some(ledger) if target != seat => ledger,
        _ => return Err(MoveRejected::InvalidTarget { seat: target }),
    };
    let resolve_theirs = |coord: Option<AssetCoord>| {
        coord
            .filter(|&c| defender.board.get(c).is_some())
            .ok_or(MoveRejected::InvalidAssetCoordinate)
    };

    let attack = match effect {
        ActionEffect::ImposeFine { amount } => Attack::ImposeFine { amount },
        ActionEffect::StealCompleteSet => {
            let category = targets
                .set_category()
                .ok_or(MoveRejected::MissingCategory { effect })?;
            if !defender.board.is_complete(category, config.complete_set_size) {
                return Err(MoveRejected::NoCompleteSet);
            }
            Attack::StealCompleteSet { category }
        }
        ActionEffect::DestroyTaggedAssets => Attack::DestroyTaggedAssets,
        ActionEffect::SwapAsset => {
            let theirs = resolve_theirs(targets.their_asset)?;
            let yours = targets
                .your_asset
                .filter(|&c| state.ledger(seat).is_some_and(|own| own.board.get(c).is_some()))
                .ok_or(MoveRejected::InvalidAssetCoordinate)?;
            Attack::SwapAsset { theirs, yours }
        }
        ActionEffect::DiscardOpponentAsset => Attack::DiscardOpponentAsset {
            asset: resolve_theirs(targets.their_asset)?,
        },
        ActionEffect::CollectFromAll { .. }
        | ActionEffect::BlockAny
        | ActionEffect::BlockEnvironment
        | ActionEffect::DrawExtra { .. }
        | ActionEffect::PassHandsLeft => return Err(MoveRejected::MissingTarget { effect }),
    };
    Ok((target, attack))
}

/// Play an action card.
///
/// Blockable effects leave the hand and wait in the attack queue for the
/// target's answer. Everything else resolves at once and the card is
/// discarded afterwards; pass-hands-left discards its own card before the
/// hands move.
pub fn play_action(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    card_index: usize,
    targets: &ActionTargets,
) -> Result<MoveOutcome, MoveRejected> {
    check_budget(state, config, seat)?;
    let (card, def) = hand_card(state, seat, card_index, CardType::Action)?;
    let Some(effect) = def.effect() else {
        return Err(MoveRejected::WrongCardKind {
            expected: CardType::Action,
            actual: def.card_type(),
        });
    };

    if effect.is_blockable() {
        let (target, attack) = bind_attack(state, config, seat, effect, targets)?;
        let ledger = &mut state.players[seat];
        ledger.hand.take(card_index);
        ledger.moves_played += 1;
        let attack_index = state
            .pending_attacks
            .push(AttackRecord::new(seat, target, card, attack));
        log::debug!("{} plays {} against {} (attack {})", seat, def.name, target, attack_index);
        return Ok(MoveOutcome::AttackQueued { attack_index });
    }

    EffectResolver::new(config).apply_immediate(state, seat, card, effect);
    if effect != ActionEffect::PassHandsLeft {
        let ledger = &mut state.players[seat];
        if ledger.hand.remove_card(card) {
            state.discard_pile.push_top(card);
        }
    }
    state.players[seat].moves_played += 1;

    log::debug!("{} plays {}", seat, def.name);
    Ok(MoveOutcome::ActionResolved { card, effect })
}

/// Pay `amount` of fines out of the bank.
pub fn pay_fine(
    state: &mut MatchState,
    seat: PlayerId,
    amount: u32,
) -> Result<MoveOutcome, MoveRejected> {
    if amount == 0 {
        return Err(MoveRejected::InvalidAmount);
    }
    let ledger = ledger(state, seat)?;
    if ledger.bank < amount || ledger.fines < amount {
        return Err(MoveRejected::InsufficientFunds {
            amount,
            bank: ledger.bank,
            fines: ledger.fines,
        });
    }

    let ledger = &mut state.players[seat];
    ledger.bank -= amount;
    ledger.fines -= amount;
    log::debug!("{} pays {} in fines ({} left)", seat, amount, ledger.fines);
    Ok(MoveOutcome::FinePaid { amount })
}

/// Discard a card from hand. Not counted against the turn's plays.
pub fn discard_card(
    state: &mut MatchState,
    seat: PlayerId,
    card_index: usize,
) -> Result<MoveOutcome, MoveRejected> {
    let card = ledger(state, seat)?
        .hand
        .get(card_index)
        .ok_or(MoveRejected::NoSuchCard { index: card_index })?;

    state.players[seat].hand.take(card_index);
    state.discard_pile.push_top(card);
    log::debug!("{} discards {}", seat, card);
    Ok(MoveOutcome::CardDiscarded { card })
}

//! Block and decline resolution for queued attacks.
//!
//! A defender answers its attacks one at a time, oldest first. Blocking
//! spends a block card from hand; declining lets the effect through. In
//! both cases the attack card ends in the discard pile and the record
//! stays in the queue, settled, until the next compaction.

use crate::cards::{catalog, CardId, CardType, Category};
use crate::core::{MatchConfig, MatchState, MoveOutcome, MoveRejected, PlayerId};
use crate::effects::{ActionEffect, Attack, EffectResolver};

use super::queue::{AttackRecord, AttackStatus};

/// How far a block card covers an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockCoverage {
    /// The attack is stopped entirely.
    Full,
    /// Only the Environment category is protected; the attack still runs
    /// on the other categories.
    EnvironmentOnly,
}

/// Whether `block` stops `record`, given the defender's current board.
///
/// The environment-scoped block covers attacks aimed at the Environment
/// category, and an audit when the defender holds greenwashing there.
#[must_use]
pub fn block_coverage(
    state: &MatchState,
    record: &AttackRecord,
    block: ActionEffect,
) -> Option<BlockCoverage> {
    match block {
        ActionEffect::BlockAny => Some(BlockCoverage::Full),
        ActionEffect::BlockEnvironment => {
            if record.target_category() == Some(Category::Environment) {
                return Some(BlockCoverage::Full);
            }
            let exposed = state
                .ledger(record.target)
                .is_some_and(|ledger| ledger.board.has_greenwashing(Category::Environment));
            match record.attack {
                Attack::DestroyTaggedAssets if exposed => Some(BlockCoverage::EnvironmentOnly),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Check that `seat` may answer the attack at `index` now.
fn answerable(state: &MatchState, seat: PlayerId, index: usize) -> Result<AttackRecord, MoveRejected> {
    let record = state
        .pending_attacks
        .get(index)
        .ok_or(MoveRejected::NoSuchAttack { index })?;
    if !record.is_pending() {
        return Err(MoveRejected::AttackSettled { index });
    }
    if record.target != seat {
        return Err(MoveRejected::NotTheDefender {
            index,
            defender: record.target,
        });
    }
    match state.pending_attacks.next_pending_for(seat) {
        Some(next) if next != index => Err(MoveRejected::AttackOutOfOrder { index, next }),
        _ => Ok(record.clone()),
    }
}

/// Find the block card at `block_card_index` in `seat`'s hand and the
/// coverage it gives against `record`.
fn block_card(
    state: &MatchState,
    seat: PlayerId,
    record: &AttackRecord,
    block_card_index: usize,
) -> Result<(CardId, BlockCoverage), MoveRejected> {
    let card = state
        .ledger(seat)
        .and_then(|ledger| ledger.hand.get(block_card_index))
        .ok_or(MoveRejected::NoSuchCard {
            index: block_card_index,
        })?;
    let def = catalog::get(card).ok_or(MoveRejected::NoSuchCard {
        index: block_card_index,
    })?;
    let effect = def.effect().ok_or(MoveRejected::WrongCardKind {
        expected: CardType::Action,
        actual: def.card_type(),
    })?;
    if !effect.is_block() {
        return Err(MoveRejected::NotABlockCard { card });
    }
    let coverage =
        block_coverage(state, record, effect).ok_or(MoveRejected::BlockNotApplicable { effect })?;
    Ok((card, coverage))
}

/// Stop the attack at `attack_index` with a block card from `seat`'s hand.
pub fn block_attack(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    attack_index: usize,
    block_card_index: usize,
) -> Result<MoveOutcome, MoveRejected> {
    let record = answerable(state, seat, attack_index)?;
    let (card, coverage) = block_card(state, seat, &record, block_card_index)?;

    state.players[seat].hand.take(block_card_index);
    state.discard_pile.push_top(record.card);
    state.discard_pile.push_top(card);
    state.pending_attacks.settle(attack_index, AttackStatus::Blocked);

    let partial = coverage == BlockCoverage::EnvironmentOnly;
    if partial {
        EffectResolver::new(config).destroy_tagged_assets(
            state,
            seat,
            &[Category::Social, Category::Governance],
        );
    }
    log::debug!(
        "{} blocks {:?} from {} with {}{}",
        seat,
        record.effect(),
        record.attacker,
        card,
        if partial { " (environment only)" } else { "" }
    );

    settle_followup(state, config, seat);
    Ok(MoveOutcome::AttackBlocked {
        attack_index,
        partial,
    })
}

/// Let the attack at `attack_index` take effect against `seat`.
///
/// Coordinates that no longer resolve make the effect a no-op; the
/// attack is still settled and its card discarded.
pub fn decline_block(
    state: &mut MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    attack_index: usize,
) -> Result<MoveOutcome, MoveRejected> {
    let record = answerable(state, seat, attack_index)?;

    let applied = EffectResolver::new(config).apply_attack(
        state,
        record.attacker,
        record.target,
        &record.attack,
    );
    state.discard_pile.push_top(record.card);
    state.pending_attacks.settle(attack_index, AttackStatus::Processed);
    log::debug!(
        "{} takes {:?} from {}{}",
        seat,
        record.effect(),
        record.attacker,
        if applied { "" } else { " (no effect)" }
    );

    settle_followup(state, config, seat);
    Ok(MoveOutcome::AttackDeclined { attack_index })
}

/// Drop every settled record from the queue.
pub fn process_all_attacks(state: &mut MatchState) -> MoveOutcome {
    let removed = state.pending_attacks.compact();
    if removed > 0 {
        log::debug!("cleared {} settled attack(s)", removed);
    }
    MoveOutcome::AttacksCompacted { removed }
}

fn settle_followup(state: &mut MatchState, config: &MatchConfig, defender: PlayerId) {
    if config.auto_compact && !state.pending_attacks.has_pending_for(defender) {
        process_all_attacks(state);
    }
}

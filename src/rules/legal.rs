//! Candidate move enumeration.
//!
//! Produces every move worth offering a seat in the current position. The
//! engine filters the candidates through full validation, so this only
//! has to be complete, not exact.

use crate::cards::{catalog, AssetCategory, CardKind, Category};
use crate::core::{MatchConfig, MatchState, Move, PlayerId, TurnPhase};
use crate::effects::{ActionEffect, ActionTargets, AssetCoord};
use crate::zones::Board;

/// Every asset coordinate currently occupied on `board`.
fn coords(board: &Board) -> Vec<AssetCoord> {
    board
        .iter()
        .flat_map(|(category, pile)| (0..pile.len()).map(move |i| AssetCoord::new(category, i)))
        .collect()
}

/// Target combinations for a blockable effect played by `seat`.
fn attack_targets(
    state: &MatchState,
    config: &MatchConfig,
    seat: PlayerId,
    effect: ActionEffect,
) -> Vec<ActionTargets> {
    let mut out = Vec::new();
    let own = state.ledger(seat).map(|ledger| coords(&ledger.board)).unwrap_or_default();

    for (target, ledger) in state.players.iter().filter(|(other, _)| *other != seat) {
        let base = ActionTargets::player(target);
        match effect {
            ActionEffect::ImposeFine { .. } | ActionEffect::DestroyTaggedAssets => out.push(base),
            ActionEffect::StealCompleteSet => out.extend(
                Category::ALL
                    .into_iter()
                    .filter(|&c| ledger.board.is_complete(c, config.complete_set_size))
                    .map(|c| base.with_category(c)),
            ),
            ActionEffect::DiscardOpponentAsset => out.extend(
                coords(&ledger.board)
                    .into_iter()
                    .map(|coord| base.with_their_asset(coord)),
            ),
            ActionEffect::SwapAsset => {
                for theirs in coords(&ledger.board) {
                    for &yours in &own {
                        out.push(base.with_their_asset(theirs).with_your_asset(yours));
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// Candidate moves for `seat`. Empty when it is not that seat's turn to act.
///
/// A seat with unsettled attacks against it is offered the answers to the
/// oldest one. Compaction is only offered when something is settled, and
/// fine payment pays as much as the bank and fines allow.
#[must_use]
pub fn candidate_moves(state: &MatchState, config: &MatchConfig, seat: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(ledger) = state.ledger(seat) else {
        return moves;
    };
    if state.is_over() || seat != state.current || state.phase != TurnPhase::Action {
        return moves;
    }

    if let Some(attack_index) = state.pending_attacks.next_pending_for(seat) {
        moves.push(Move::DeclineBlock { attack_index });
        for (block_card_index, card) in ledger.hand.iter().enumerate() {
            if catalog::get(card)
                .and_then(|def| def.effect())
                .is_some_and(ActionEffect::is_block)
            {
                moves.push(Move::BlockAttack {
                    attack_index,
                    block_card_index,
                });
            }
        }
    }
    if state.pending_attacks.has_settled() {
        moves.push(Move::ProcessAllAttacks);
    }

    if ledger.moves_played < config.moves_per_turn {
        for (card_index, card) in ledger.hand.iter().enumerate() {
            let Some(def) = catalog::get(card) else {
                continue;
            };
            match def.kind {
                CardKind::Asset {
                    category: AssetCategory::Wild,
                    ..
                } => moves.extend(Category::ALL.into_iter().map(|c| Move::PlayAsset {
                    card_index,
                    category: Some(c),
                })),
                CardKind::Asset { .. } => moves.push(Move::PlayAsset {
                    card_index,
                    category: None,
                }),
                CardKind::Capital { .. } => moves.push(Move::PlayCapital { card_index }),
                CardKind::Action { effect } if effect.is_blockable() => moves.extend(
                    attack_targets(state, config, seat, effect)
                        .into_iter()
                        .map(|targets| Move::PlayAction {
                            card_index,
                            targets,
                        }),
                ),
                CardKind::Action { .. } => moves.push(Move::PlayAction {
                    card_index,
                    targets: ActionTargets::none(),
                }),
            }
        }
    }

    let payable = ledger.bank.min(ledger.fines);
    if payable > 0 {
        moves.push(Move::PayFine { amount: payable });
    }
    moves.extend((0..ledger.hand.len()).map(|card_index| Move::DiscardCard { card_index }));
    moves.push(Move::EndTurn);
    moves
}

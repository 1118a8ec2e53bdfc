//! Serialization tests.
//!
//! Moves, rejections and configuration travel as JSON between a client
//! and the session layer; whole matches are persisted as bincode
//! snapshots and must resume exactly where they stopped.

use impact_engine::cards::{catalog, CardId, Category};
use impact_engine::core::{HandLimit, MatchConfig, MatchState, Move, MoveOutcome, MoveRejected, PlayerId};
use impact_engine::effects::{ActionTargets, AssetCoord};
use impact_engine::rules::{ImpactRules, RulesEngine};
use serde_json::json;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

#[test]
fn test_move_from_client_json() {
    let raw = json!({
        "PlayAction": {
            "card_index": 2,
            "targets": {
                "player": 1,
                "category": null,
                "their_asset": { "category": "Environment", "index": 0 },
                "your_asset": { "category": "Governance", "index": 1 }
            }
        }
    });

    let mv: Move = serde_json::from_value(raw).unwrap();

    let expected = Move::PlayAction {
        card_index: 2,
        targets: ActionTargets::player(P1)
            .with_their_asset(AssetCoord::new(Category::Environment, 0))
            .with_your_asset(AssetCoord::new(Category::Governance, 1)),
    };
    assert_eq!(mv, expected);
}

#[test]
fn test_rejection_is_tagged() {
    let reason = MoveRejected::InsufficientFunds { amount: 5, bank: 2, fines: 5 };

    let value = serde_json::to_value(&reason).unwrap();

    assert_eq!(value["type"], "InsufficientFunds");
    assert_eq!(value["bank"], 2);
    let restored: MoveRejected = serde_json::from_value(value).unwrap();
    assert_eq!(restored, reason);
    assert_eq!(
        reason.to_string(),
        "payment of 5 needs bank 2 and fines 5 to cover it"
    );
}

#[test]
fn test_config_json() {
    let config = MatchConfig {
        hand_limit_policy: HandLimit::Enforced,
        ..MatchConfig::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    let restored: MatchConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
    assert_eq!(ImpactRules::new(restored).config().moves_per_turn, 3);
}

#[test]
fn test_catalog_exports_as_json() {
    let value = serde_json::to_value(catalog::all()).unwrap();
    let cards = value.as_array().unwrap();

    assert_eq!(cards.len(), 30);
    assert_eq!(cards[0]["name"], "Solar Array");
    assert_eq!(cards[24]["kind"]["Capital"]["value"], 10);
}

#[test]
fn test_outcome_json() {
    let outcome = MoveOutcome::CapitalBanked { card: CardId::new(25), value: 10 };
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value, json!({ "CapitalBanked": { "card": 25, "value": 10 } }));
}

/// A restored snapshot continues with the same shuffles as the original.
#[test]
fn test_snapshot_resumes_identically() {
    let rules = ImpactRules::default();
    let mut state = rules.start(77).unwrap();
    rules.apply_move(&mut state, P0, &Move::EndTurn).unwrap();
    for card in state.draw_pile.to_vec() {
        state.relocate(card, impact_engine::zones::Zone::DiscardPile).unwrap();
    }

    let bytes = state.to_bytes().unwrap();
    let mut restored = MatchState::from_bytes(&bytes).unwrap();

    let a = rules.apply_move(&mut state, P1, &Move::EndTurn).unwrap();
    let b = rules.apply_move(&mut restored, P1, &Move::EndTurn).unwrap();

    assert_eq!(a, b);
    assert_eq!(state.draw_pile, restored.draw_pile);
    assert_eq!(state.history, restored.history);
    assert!(restored.audit().is_ok());
}

#[test]
fn test_history_serializes() {
    let rules = ImpactRules::default();
    let mut state = rules.start(3).unwrap();
    rules.apply_move(&mut state, P0, &Move::EndTurn).unwrap();

    let json = serde_json::to_string(&state.history).unwrap();
    let restored: im::Vector<impact_engine::core::MoveRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state.history);
}

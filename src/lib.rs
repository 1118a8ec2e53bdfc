//! # impact-engine
//!
//! Rules engine for Impact, a two-player card game about building an
//! ESG portfolio: collect a complete set of assets in Environment, Social
//! and Governance while staying clear of fines.
//!
//! ## Design Principles
//!
//! 1. **State Is a Value**: A match is one owned `MatchState`. The engine
//!    keeps nothing between calls, so any number of matches can share it.
//!
//! 2. **Rejections Are Results**: An illegal move returns a
//!    `MoveRejected` and leaves the state exactly as it was.
//!
//! 3. **Seeded Randomness**: Every shuffle goes through the match's own
//!    `GameRng`, so a seed and a move list replay a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, which makes
//!   `RulesEngine::step` and legal-move enumeration cheap.
//!
//! - **Cards by Identity**: All 30 cards are fixed catalog entries and
//!   every zone holds `CardId`s, so `MatchState::audit` can prove that no
//!   card was lost or duplicated.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors, moves and match state
//! - `cards`: Card definitions and the 30-card catalog
//! - `zones`: Piles, boards and zone names
//! - `effects`: Action effects, targets and the effect resolver
//! - `stack`: Pending attacks and block/decline resolution
//! - `rules`: Turn controller, move validation, win check, `RulesEngine`

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    AttackGuard, GameRng, GameRngState, HandLimit, MatchConfig, MatchState, Move, MoveOutcome,
    MoveRecord, MoveRejected, PlayerId, PlayerLedger, PlayerMap, SnapshotError, TurnPhase,
    ZoneError,
};

pub use crate::cards::{AssetCategory, CardDefinition, CardId, CardKind, CardType, Category};

pub use crate::zones::{Board, Pile, Zone};

pub use crate::effects::{ActionEffect, ActionTargets, AssetCoord, Attack, EffectResolver};

pub use crate::stack::{AttackQueue, AttackRecord, AttackStatus};

pub use crate::rules::{ImpactRules, ImpactRulesBuilder, RulesEngine};

//! Core match types: seats, RNG, configuration, moves, ledgers, state.
//!
//! Everything here is plain data. The rules that transform it live in
//! `rules`, `effects` and `stack`.

pub mod action;
pub mod config;
pub mod error;
pub mod ledger;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveOutcome, MoveRecord};
pub use config::{AttackGuard, HandLimit, MatchConfig};
pub use error::{MoveRejected, SnapshotError, ZoneError};
pub use ledger::PlayerLedger;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchState, TurnPhase};

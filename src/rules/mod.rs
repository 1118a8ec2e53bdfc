//! Game rules: the turn controller, move validation, the win condition,
//! and the `RulesEngine` that ties them together.
//!
//! Callers normally go through [`ImpactRules`]; the free functions are
//! exposed for session layers that drive turns themselves.

pub mod engine;
pub mod legal;
pub mod moves;
pub mod turn;
pub mod win;

pub use engine::{ImpactRules, ImpactRulesBuilder, RulesEngine};
pub use turn::{draw_card, draw_cards, on_turn_begin, on_turn_end, reshuffle, Drawn};
pub use win::check_win;

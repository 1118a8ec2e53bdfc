//! Effect system for action cards.
//!
//! - `ActionEffect`: what an action card does, with its printed parameters
//! - `Attack`: a blockable effect bound to its coordinates
//! - `ActionTargets` / `AssetCoord`: targets chosen when a card is played
//! - `EffectResolver`: applies effects to a `MatchState`
//!
//! Each effect is an independent transformation. The resolver is reused
//! by immediate plays and by declined attacks, so an effect behaves the
//! same whichever path reaches it.

mod effect;
mod resolver;
mod targeting;

pub use effect::{ActionEffect, Attack};
pub use resolver::EffectResolver;
pub use targeting::{ActionTargets, AssetCoord};

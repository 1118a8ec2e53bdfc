//! Pending attacks and their resolution.
//!
//! Blockable actions do not resolve when played. They are queued as
//! [`AttackRecord`]s and wait for the defender to block or decline:
//!
//! ```text
//! Pending ──block──▶ Blocked
//!    └────decline──▶ Processed
//! ```
//!
//! Settled records stay in the queue (so indices stay stable while a
//! defender works through them) until `process_all_attacks` compacts it.

mod queue;
mod resolve;

pub use queue::{AttackQueue, AttackRecord, AttackStatus};
pub use resolve::{block_attack, block_coverage, decline_block, process_all_attacks, BlockCoverage};

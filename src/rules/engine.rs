//! The rules engine: one entry point that validates and applies moves.
//!
//! `RulesEngine` is the seam a session layer talks to. It never owns a
//! match; every call takes the `MatchState` it works on, so one engine can
//! serve any number of matches.

use crate::core::{
    AttackGuard, HandLimit, MatchConfig, MatchState, Move, MoveOutcome, MoveRejected, PlayerId,
    TurnPhase,
};
use crate::stack;

use super::legal;
use super::moves;
use super::turn::{self, Drawn};
use super::win::check_win;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move` must leave the state untouched when it rejects.
/// - `apply_move` must be deterministic given the state (the RNG lives in
///   the state).
/// - `is_terminal` returns `None` while the match continues.
pub trait RulesEngine {
    fn config(&self) -> &MatchConfig;

    /// A fresh match: catalog shuffled into the draw pile, seat 0 about
    /// to begin its first turn.
    fn setup(&self, seed: u64) -> MatchState;

    /// Every move `seat` could submit right now that would be accepted.
    fn legal_moves(&self, state: &MatchState, seat: PlayerId) -> Vec<Move>;

    /// Validate and apply a move for `seat`.
    fn apply_move(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        mv: &Move,
    ) -> Result<MoveOutcome, MoveRejected>;

    /// The winner, once there is one.
    fn is_terminal(&self, state: &MatchState) -> Option<PlayerId> {
        state.winner
    }

    // === Convenience Methods ===

    /// Value-in, value-out form of [`RulesEngine::apply_move`].
    ///
    /// The input is left as it was; on success the new state is returned
    /// with the outcome.
    fn step(
        &self,
        state: &MatchState,
        seat: PlayerId,
        mv: &Move,
    ) -> Result<(MatchState, MoveOutcome), MoveRejected> {
        let mut next = state.clone();
        let outcome = self.apply_move(&mut next, seat, mv)?;
        Ok((next, outcome))
    }
}

/// The ESG card game rules.
///
/// ## Example
///
/// ```
/// use impact_engine::core::{Move, PlayerId};
/// use impact_engine::rules::{ImpactRules, RulesEngine};
///
/// let rules = ImpactRules::builder().build();
/// let mut state = rules.start(42).unwrap();
/// assert_eq!(state.players[PlayerId::new(0)].hand.len(), 5);
///
/// let outcome = rules.apply_move(&mut state, PlayerId::new(0), &Move::EndTurn).unwrap();
/// assert_eq!(state.current, PlayerId::new(1));
/// # let _ = outcome;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImpactRules {
    config: MatchConfig,
}

impl ImpactRules {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        assert!((2..=4).contains(&config.seat_count), "Seat count must be 2-4");
        Self { config }
    }

    #[must_use]
    pub fn builder() -> ImpactRulesBuilder {
        ImpactRulesBuilder::new()
    }

    /// Set up a match and begin seat 0's first turn.
    pub fn start(&self, seed: u64) -> Result<MatchState, MoveRejected> {
        let mut state = self.setup(seed);
        self.on_turn_begin(&mut state, PlayerId::new(0))?;
        Ok(state)
    }

    /// Begin `seat`'s turn and evaluate the win condition for it.
    pub fn on_turn_begin(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
    ) -> Result<Drawn, MoveRejected> {
        let drawn = turn::on_turn_begin(state, &self.config, seat)?;
        self.evaluate_win(state);
        Ok(drawn)
    }

    /// End `seat`'s turn without passing it on.
    pub fn on_turn_end(&self, state: &mut MatchState, seat: PlayerId) -> Result<(), MoveRejected> {
        turn::on_turn_end(state, &self.config, seat)
    }

    /// Whether `seat` has met the win condition.
    #[must_use]
    pub fn check_win(&self, state: &MatchState, seat: PlayerId) -> Option<PlayerId> {
        check_win(state, &self.config, seat)
    }

    /// Reject a move the state does not allow at all, before looking at
    /// the move's own arguments.
    fn admit(&self, state: &MatchState, seat: PlayerId, mv: &Move) -> Result<(), MoveRejected> {
        if let Some(winner) = state.winner {
            return Err(MoveRejected::MatchOver { winner });
        }
        if !state.players.contains(seat) {
            return Err(MoveRejected::UnknownSeat { seat });
        }
        if seat != state.current {
            return Err(MoveRejected::NotYourTurn {
                current: state.current,
            });
        }
        if state.phase != TurnPhase::Action {
            return Err(MoveRejected::WrongPhase { phase: state.phase });
        }
        if self.config.attack_guard == AttackGuard::Strict && !mv.is_response() {
            let count = state.pending_attacks.pending_for(seat).count();
            if count > 0 {
                return Err(MoveRejected::AttacksPending { seat, count });
            }
        }
        Ok(())
    }

    /// Validate and apply without logging. History and the win check are
    /// part of applying.
    fn dispatch(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        mv: &Move,
    ) -> Result<MoveOutcome, MoveRejected> {
        self.admit(state, seat, mv)?;
        let config = &self.config;

        let outcome = match *mv {
            Move::PlayAsset {
                card_index,
                category,
            } => moves::play_asset(state, config, seat, card_index, category)?,
            Move::PlayCapital { card_index } => moves::play_capital(state, config, seat, card_index)?,
            Move::PlayAction {
                card_index,
                ref targets,
            } => moves::play_action(state, config, seat, card_index, targets)?,
            Move::BlockAttack {
                attack_index,
                block_card_index,
            } => stack::block_attack(state, config, seat, attack_index, block_card_index)?,
            Move::DeclineBlock { attack_index } => {
                stack::decline_block(state, config, seat, attack_index)?
            }
            Move::ProcessAllAttacks => stack::process_all_attacks(state),
            Move::PayFine { amount } => moves::pay_fine(state, seat, amount)?,
            Move::DiscardCard { card_index } => moves::discard_card(state, seat, card_index)?,
            Move::EndTurn => return self.end_turn(state, seat),
        };

        // A compaction with nothing settled leaves the state untouched.
        if outcome == (MoveOutcome::AttacksCompacted { removed: 0 }) {
            return Ok(outcome);
        }
        state.record(seat, mv.clone());
        self.evaluate_win(state);
        Ok(outcome)
    }

    /// Close `seat`'s turn and begin the next seat's.
    fn end_turn(&self, state: &mut MatchState, seat: PlayerId) -> Result<MoveOutcome, MoveRejected> {
        turn::on_turn_end(state, &self.config, seat)?;
        state.record(seat, Move::EndTurn);
        state.advance_turn();

        let next = seat.next(state.seat_count());
        let drawn = self.on_turn_begin(state, next)?;
        Ok(MoveOutcome::TurnEnded { next, drawn })
    }

    fn evaluate_win(&self, state: &mut MatchState) {
        if state.winner.is_some() {
            return;
        }
        if let Some(winner) = check_win(state, &self.config, state.current) {
            state.winner = Some(winner);
            log::info!("{} wins on turn {}", winner, state.turn_number);
        }
    }
}

impl RulesEngine for ImpactRules {
    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn setup(&self, seed: u64) -> MatchState {
        MatchState::new(self.config.seat_count, seed)
    }

    fn legal_moves(&self, state: &MatchState, seat: PlayerId) -> Vec<Move> {
        legal::candidate_moves(state, &self.config, seat)
            .into_iter()
            .filter(|mv| self.dispatch(&mut state.clone(), seat, mv).is_ok())
            .collect()
    }

    fn apply_move(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        mv: &Move,
    ) -> Result<MoveOutcome, MoveRejected> {
        let result = self.dispatch(state, seat, mv);
        match &result {
            Ok(outcome) => log::debug!("{} {}: {:?}", seat, mv.name(), outcome),
            Err(reason) => log::debug!("{} {} rejected: {}", seat, mv.name(), reason),
        }
        result
    }
}

/// Builder for [`ImpactRules`].
#[derive(Clone, Debug, Default)]
pub struct ImpactRulesBuilder {
    config: MatchConfig,
}

impl ImpactRulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seat_count(mut self, count: usize) -> Self {
        assert!((2..=4).contains(&count), "Seat count must be 2-4");
        self.config.seat_count = count;
        self
    }

    #[must_use]
    pub fn hand_limit(mut self, policy: HandLimit) -> Self {
        self.config.hand_limit_policy = policy;
        self
    }

    #[must_use]
    pub fn attack_guard(mut self, guard: AttackGuard) -> Self {
        self.config.attack_guard = guard;
        self
    }

    #[must_use]
    pub fn auto_compact(mut self, enabled: bool) -> Self {
        self.config.auto_compact = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> ImpactRules {
        ImpactRules::new(self.config)
    }
}

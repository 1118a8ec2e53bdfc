//! Win evaluation.

use crate::core::{MatchConfig, MatchState, PlayerId};

/// `Some(seat)` if `seat` has a complete set in every category and owes
/// no fines. There is no draw condition.
///
/// ```
/// use impact_engine::cards::{CardId, Category};
/// use impact_engine::core::{MatchConfig, MatchState, PlayerId};
/// use impact_engine::rules::check_win;
/// use impact_engine::zones::Zone;
///
/// let config = MatchConfig::default();
/// let mut state = MatchState::new(2, 1);
/// let seat = PlayerId::new(0);
/// for (category, ids) in [
///     (Category::Environment, [1, 2, 3]),
///     (Category::Social, [4, 5, 6]),
///     (Category::Governance, [7, 8, 9]),
/// ] {
///     for id in ids {
///         state.relocate(CardId::new(id), Zone::Board(seat, category)).unwrap();
///     }
/// }
///
/// assert_eq!(check_win(&state, &config, seat), Some(seat));
/// ```
#[must_use]
pub fn check_win(state: &MatchState, config: &MatchConfig, seat: PlayerId) -> Option<PlayerId> {
    let ledger = state.ledger(seat)?;
    (ledger.fines == 0 && ledger.board.all_complete(config.complete_set_size)).then_some(seat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};
    use crate::zones::Zone;

    const P0: PlayerId = PlayerId::new(0);

    fn fill(state: &mut MatchState, category: Category, ids: &[u32]) {
        for &id in ids {
            state.relocate(CardId::new(id), Zone::Board(P0, category)).unwrap();
        }
    }

    fn winning_board() -> MatchState {
        let mut state = MatchState::new(2, 1);
        fill(&mut state, Category::Environment, &[1, 2, 3]);
        fill(&mut state, Category::Social, &[4, 5, 6]);
        fill(&mut state, Category::Governance, &[7, 8, 9]);
        state
    }

    #[test]
    fn test_complete_board_without_fines_wins() {
        let state = winning_board();
        assert_eq!(check_win(&state, &MatchConfig::default(), P0), Some(P0));
        assert_eq!(check_win(&state, &MatchConfig::default(), PlayerId::new(1)), None);
    }

    #[test]
    fn test_fines_block_the_win() {
        let mut state = winning_board();
        state.players[P0].fines = 5;
        assert_eq!(check_win(&state, &MatchConfig::default(), P0), None);
    }

    #[test]
    fn test_two_assets_is_not_a_set() {
        let mut state = winning_board();
        state.relocate(CardId::new(9), Zone::DiscardPile).unwrap();
        assert_eq!(check_win(&state, &MatchConfig::default(), P0), None);
    }

    #[test]
    fn test_unknown_seat() {
        let state = winning_board();
        assert_eq!(check_win(&state, &MatchConfig::default(), PlayerId::new(7)), None);
    }
}

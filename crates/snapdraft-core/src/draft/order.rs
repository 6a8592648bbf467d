// Snake draft ordering.

/// The 1-based draft slot on the clock for a 1-based overall pick.
///
/// Odd rounds run 1..=teams, even rounds run teams..=1.
pub fn snake_slot(pick: usize, num_teams: usize) -> usize {
    debug_assert!(pick > 0 && num_teams > 0);
    let zero_based = pick - 1;
    let round = zero_based / num_teams;
    let idx = zero_based % num_teams;
    if round % 2 == 0 {
        idx + 1
    } else {
        num_teams - idx
    }
}

/// The 1-based round an overall pick falls in.
pub fn round_of(pick: usize, num_teams: usize) -> usize {
    (pick - 1) / num_teams + 1
}

/// First overall pick strictly after `after` that belongs to `slot`.
pub fn next_pick_for_slot(after: usize, slot: usize, num_teams: usize) -> usize {
    // A slot picks at least once in any window of 2 * num_teams picks.
    (after + 1..=after + 2 * num_teams)
        .find(|&p| snake_slot(p, num_teams) == slot)
        .unwrap_or(after + 2 * num_teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_runs_forward() {
        let slots: Vec<usize> = (1..=4).map(|p| snake_slot(p, 4)).collect();
        assert_eq!(slots, vec![1, 2, 3, 4]);
    }

    #[test]
    fn second_round_runs_backward() {
        let slots: Vec<usize> = (5..=8).map(|p| snake_slot(p, 4)).collect();
        assert_eq!(slots, vec![4, 3, 2, 1]);
    }

    #[test]
    fn third_round_runs_forward_again() {
        assert_eq!(snake_slot(9, 4), 1);
        assert_eq!(snake_slot(12, 4), 4);
    }

    #[test]
    fn round_of_counts_from_one() {
        assert_eq!(round_of(1, 12), 1);
        assert_eq!(round_of(12, 12), 1);
        assert_eq!(round_of(13, 12), 2);
    }

    #[test]
    fn next_pick_turn_around() {
        // Slot 12 of 12 picks back-to-back at the turn: 12, 13.
        assert_eq!(next_pick_for_slot(0, 12, 12), 12);
        assert_eq!(next_pick_for_slot(12, 12, 12), 13);
        assert_eq!(next_pick_for_slot(13, 12, 12), 36);
    }

    #[test]
    fn next_pick_middle_slot() {
        // Slot 5 of 12: picks 5, 20, 29, 44.
        assert_eq!(next_pick_for_slot(0, 5, 12), 5);
        assert_eq!(next_pick_for_slot(5, 5, 12), 20);
        assert_eq!(next_pick_for_slot(7, 5, 12), 20);
        assert_eq!(next_pick_for_slot(20, 5, 12), 29);
    }

    #[test]
    fn single_team_league_picks_every_time() {
        assert_eq!(next_pick_for_slot(3, 1, 1), 4);
    }
}

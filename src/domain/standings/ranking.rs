// Tie-break ordering and rank assignment for a round's standings table.

use std::cmp::Ordering;

use super::StandingsRow;

/// The tie-break chain: total points desc, games played asc, goal
/// difference desc, goals for desc. Team id ascending is the final
/// determinism guard so equal teams always come back in the same order.
fn compare(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| a.games_played.cmp(&b.games_played))
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// The part of the sort key that decides rank equality
///
/// Team id deliberately excluded: it orders tied teams but does not
/// separate their ranks.
fn rank_key(row: &StandingsRow) -> (i32, i32, i32, i32) {
    (
        row.total_points,
        row.games_played,
        row.goal_difference,
        row.goals_for,
    )
}

/// Sorts the rows by the tie-break chain and assigns competition ranks
///
/// Standard competition ranking: teams tied on the full key share a rank,
/// and the next distinct group's rank is 1 + the number of teams strictly
/// ahead of it, so ranks skip over ties.
pub fn assign_ranks(rows: &mut [StandingsRow]) {
    rows.sort_by(compare);

    let mut current_rank = 1;
    for i in 0..rows.len() {
        if i > 0 && rank_key(&rows[i]) != rank_key(&rows[i - 1]) {
            current_rank = i as i32 + 1;
        }
        rows[i].rank = current_rank;
    }
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::league::GoalieGameStat;

/// A goalie's accumulated season line, keyed by (goalie_id, season_id)
///
/// `gaa` is goals against normalized to a 60-minute basis and is `None`
/// when the goalie has no recorded minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalieSeasonStats {
    pub goalie_id: Uuid,
    pub season_id: Uuid,
    pub games_played: i32,
    pub goals_against: i32,
    pub minutes_played: i32,
    pub gaa: Option<f64>,
    pub eligible: bool,
}

/// Aggregates goalie game lines into per-goalie season lines
///
/// The caller passes only lines of completed games in rounds counting for
/// goalie statistics. `games_played` is the number of distinct games with
/// a recorded line; eligibility is games played against `min_games`.
/// Output is sorted by goalie id for deterministic replacement.
pub fn aggregate_goalie_stats(
    season_id: Uuid,
    lines: &[GoalieGameStat],
    min_games: i32,
) -> Vec<GoalieSeasonStats> {
    #[derive(Default)]
    struct Acc {
        games: BTreeSet<Uuid>,
        goals_against: i32,
        minutes_played: i32,
    }

    let mut per_goalie: BTreeMap<Uuid, Acc> = BTreeMap::new();

    for line in lines {
        let acc = per_goalie.entry(line.goalie_id).or_default();
        acc.games.insert(line.game_id);
        acc.goals_against += line.goals_against;
        acc.minutes_played += line.minutes_played;
    }

    per_goalie
        .into_iter()
        .map(|(goalie_id, acc)| {
            let games_played = acc.games.len() as i32;
            GoalieSeasonStats {
                goalie_id,
                season_id,
                games_played,
                goals_against: acc.goals_against,
                minutes_played: acc.minutes_played,
                gaa: goals_against_average(acc.goals_against, acc.minutes_played),
                eligible: games_played >= min_games,
            }
        })
        .collect()
}

/// GAA on a 60-minute basis, `None` when no minutes were recorded
pub fn goals_against_average(goals_against: i32, minutes_played: i32) -> Option<f64> {
    if minutes_played > 0 {
        Some(f64::from(goals_against) * 60.0 / f64::from(minutes_played))
    } else {
        None
    }
}

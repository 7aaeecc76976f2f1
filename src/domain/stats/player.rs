use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::league::{GameEvent, GameEventKind};

/// A player's accumulated season line, keyed by (player_id, season_id)
///
/// Owned by the player statistics aggregator; the whole season set is
/// replaced on every recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub player_id: Uuid,
    pub season_id: Uuid,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub points: i32,
    pub penalty_minutes: i32,
}

/// Aggregates ledger events into per-player season lines
///
/// The caller passes only events of completed games in rounds counting for
/// player statistics; events of other rounds must never reach this
/// function. `games_played` is the number of distinct games in which the
/// player has at least one recorded event. Output is sorted by player id,
/// so identical inputs always produce an identical set.
pub fn aggregate_player_stats(season_id: Uuid, events: &[GameEvent]) -> Vec<PlayerSeasonStats> {
    #[derive(Default)]
    struct Acc {
        games: BTreeSet<Uuid>,
        goals: i32,
        assists: i32,
        penalty_minutes: i32,
    }

    let mut per_player: BTreeMap<Uuid, Acc> = BTreeMap::new();

    for event in events {
        let acc = per_player.entry(event.player_id).or_default();
        acc.games.insert(event.game_id);
        match event.kind {
            GameEventKind::Goal => acc.goals += 1,
            GameEventKind::Assist => acc.assists += 1,
            GameEventKind::Penalty => acc.penalty_minutes += event.penalty_contribution(),
        }
    }

    per_player
        .into_iter()
        .map(|(player_id, acc)| PlayerSeasonStats {
            player_id,
            season_id,
            games_played: acc.games.len() as i32,
            goals: acc.goals,
            assists: acc.assists,
            points: acc.goals + acc.assists,
            penalty_minutes: acc.penalty_minutes,
        })
        .collect()
}

//! Engine integration tests
//!
//! Drive the recalculation engine end to end through its repository ports
//! with in-memory implementations, verifying:
//! - games-played conservation and the scoring formula
//! - tie-break ordering and competition ranking
//! - idempotence of repeated recomputes
//! - bonus point isolation
//! - correction handling (postponed game drops out entirely)
//! - round inclusion flags for player and goalie statistics
//! - fail-fast error semantics that leave prior aggregates untouched
//! - per-scope mutual exclusion

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

use rinkside_api::domain::league::{
    BonusPoint, Game, GameEvent, GameEventKind, GameStatus, GoalieGameStat, Round,
};
use rinkside_api::domain::repositories::{
    BonusPointRepository, GameEventRepository, GameRepository, GoalieStatRepository,
    GoalieStatsRepository, PlayerStatsRepository, RoundRepository, StandingsRepository,
};
use rinkside_api::domain::standings::StandingsRow;
use rinkside_api::domain::stats::{GoalieSeasonStats, PlayerSeasonStats};
use rinkside_api::engine::{RecalcEngine, RecalcError};

/// In-memory backing store implementing every repository port
#[derive(Default)]
struct MemoryStore {
    rounds: RwLock<Vec<Round>>,
    games: RwLock<Vec<Game>>,
    bonus_points: RwLock<Vec<BonusPoint>>,
    events: RwLock<Vec<GameEvent>>,
    goalie_lines: RwLock<Vec<GoalieGameStat>>,
    standings: RwLock<HashMap<Uuid, Vec<StandingsRow>>>,
    player_stats: RwLock<HashMap<Uuid, Vec<PlayerSeasonStats>>>,
    goalie_stats: RwLock<HashMap<Uuid, Vec<GoalieSeasonStats>>>,
}

impl MemoryStore {
    fn add_round(&self, round: Round) {
        self.rounds.write().unwrap().push(round);
    }

    fn add_game(&self, game: Game) {
        self.games.write().unwrap().push(game);
    }

    fn add_bonus(&self, round_id: Uuid, team_id: Uuid, points: i32) {
        self.bonus_points.write().unwrap().push(BonusPoint {
            id: Uuid::new_v4(),
            round_id,
            team_id,
            points,
            reason: None,
        });
    }

    fn add_event(&self, game_id: Uuid, player_id: Uuid, kind: GameEventKind, pim: Option<i32>) {
        self.events.write().unwrap().push(GameEvent {
            game_id,
            player_id,
            kind,
            penalty_minutes: pim,
        });
    }

    fn add_goalie_line(&self, game_id: Uuid, goalie_id: Uuid, ga: i32, minutes: i32) {
        self.goalie_lines.write().unwrap().push(GoalieGameStat {
            game_id,
            goalie_id,
            goals_against: ga,
            minutes_played: minutes,
        });
    }

    fn replace_game(&self, game: Game) {
        let mut games = self.games.write().unwrap();
        if let Some(slot) = games.iter_mut().find(|g| g.id() == game.id()) {
            *slot = game;
        }
    }

    fn standings_of(&self, round_id: Uuid) -> Vec<StandingsRow> {
        self.standings
            .read()
            .unwrap()
            .get(&round_id)
            .cloned()
            .unwrap_or_default()
    }

    fn player_stats_of(&self, season_id: Uuid) -> Vec<PlayerSeasonStats> {
        self.player_stats
            .read()
            .unwrap()
            .get(&season_id)
            .cloned()
            .unwrap_or_default()
    }

    fn goalie_stats_of(&self, season_id: Uuid) -> Vec<GoalieSeasonStats> {
        self.goalie_stats
            .read()
            .unwrap()
            .get(&season_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl RoundRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Round>, String> {
        Ok(self.rounds.read().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<Round>, String> {
        Ok(self
            .rounds
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.season_id == season_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GameRepository for MemoryStore {
    async fn save(&self, game: &Game) -> Result<(), String> {
        self.replace_game(game.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, String> {
        Ok(self.games.read().unwrap().iter().find(|g| g.id() == id).cloned())
    }

    async fn find_completed_by_round(&self, round_id: Uuid) -> Result<Vec<Game>, String> {
        Ok(self
            .games
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.round_id() == round_id && g.status() == GameStatus::Completed)
            .cloned()
            .collect())
    }

    async fn find_completed_by_rounds(&self, round_ids: &[Uuid]) -> Result<Vec<Game>, String> {
        Ok(self
            .games
            .read()
            .unwrap()
            .iter()
            .filter(|g| round_ids.contains(&g.round_id()) && g.status() == GameStatus::Completed)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BonusPointRepository for MemoryStore {
    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<BonusPoint>, String> {
        Ok(self
            .bonus_points
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.round_id == round_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GameEventRepository for MemoryStore {
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GameEvent>, String> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| game_ids.contains(&e.game_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GoalieStatRepository for MemoryStore {
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GoalieGameStat>, String> {
        Ok(self
            .goalie_lines
            .read()
            .unwrap()
            .iter()
            .filter(|l| game_ids.contains(&l.game_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StandingsRepository for MemoryStore {
    async fn replace_round(&self, round_id: Uuid, rows: &[StandingsRow]) -> Result<(), String> {
        self.standings
            .write()
            .unwrap()
            .insert(round_id, rows.to_vec());
        Ok(())
    }

    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<StandingsRow>, String> {
        Ok(self.standings_of(round_id))
    }
}

#[async_trait]
impl PlayerStatsRepository for MemoryStore {
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[PlayerSeasonStats],
    ) -> Result<(), String> {
        self.player_stats
            .write()
            .unwrap()
            .insert(season_id, stats.to_vec());
        Ok(())
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<PlayerSeasonStats>, String> {
        Ok(self.player_stats_of(season_id))
    }
}

#[async_trait]
impl GoalieStatsRepository for MemoryStore {
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[GoalieSeasonStats],
    ) -> Result<(), String> {
        self.goalie_stats
            .write()
            .unwrap()
            .insert(season_id, stats.to_vec());
        Ok(())
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<GoalieSeasonStats>, String> {
        Ok(self.goalie_stats_of(season_id))
    }
}

fn engine_over(store: &Arc<MemoryStore>) -> RecalcEngine {
    RecalcEngine::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    )
}

fn round(season_id: Uuid, points: (i32, i32, i32)) -> Round {
    Round {
        id: Uuid::new_v4(),
        season_id,
        name: "Regular season".to_string(),
        points_win: points.0,
        points_draw: points.1,
        points_loss: points.2,
        counts_for_player_stats: true,
        counts_for_goalie_stats: true,
        goalie_min_games: 1,
    }
}

fn completed_game(round_id: Uuid, home: Uuid, away: Uuid, score: (i32, i32)) -> Game {
    let mut game = Game::new(round_id, home, away, None).expect("valid game");
    game.report_result(score.0, score.1).expect("valid result");
    game
}

fn row_of(rows: &[StandingsRow], team_id: Uuid) -> &StandingsRow {
    rows.iter()
        .find(|r| r.team_id == team_id)
        .expect("team has a standings row")
}

#[tokio::test]
async fn worked_scenario_a_beats_b_on_goal_difference() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b, c, d) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    // A: 2 wins, 1 loss, 10 for, 4 against
    store.add_game(completed_game(round_id, a, c, (5, 1)));
    store.add_game(completed_game(round_id, a, d, (4, 1)));
    // B: 1 win (over A), 1 draw, 1 loss, 7 for, 7 against
    store.add_game(completed_game(round_id, b, a, (2, 1)));
    store.add_game(completed_game(round_id, b, c, (2, 2)));
    store.add_game(completed_game(round_id, d, b, (4, 3)));

    store.add_bonus(round_id, b, 1);

    let engine = engine_over(&store);
    engine.recalc_standings(round_id).await.expect("recalc ok");

    let rows = store.standings_of(round_id);

    let row_a = row_of(&rows, a);
    assert_eq!(row_a.games_played, 3);
    assert_eq!(row_a.wins, 2);
    assert_eq!(row_a.losses, 1);
    assert_eq!(row_a.goals_for, 10);
    assert_eq!(row_a.goals_against, 4);
    assert_eq!(row_a.goal_difference, 6);
    assert_eq!(row_a.total_points, 4);

    let row_b = row_of(&rows, b);
    assert_eq!(row_b.games_played, 3);
    assert_eq!(row_b.goal_difference, 0);
    assert_eq!(row_b.bonus_points, 1);
    assert_eq!(row_b.total_points, 4);

    // equal points, equal games played: goal difference decides
    assert_eq!(row_a.rank, 1);
    assert_eq!(row_b.rank, 2);

    // conservation: sum of games played is twice the completed game count
    let total_gp: i32 = rows.iter().map(|r| r.games_played).sum();
    assert_eq!(total_gp, 2 * 5);
}

#[tokio::test]
async fn recalc_twice_is_idempotent() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (3, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    store.add_game(completed_game(round_id, a, b, (2, 0)));
    store.add_game(completed_game(round_id, b, c, (1, 1)));
    store.add_bonus(round_id, c, -2);

    let engine = engine_over(&store);
    engine.recalc_standings(round_id).await.expect("first recalc");
    let first = store.standings_of(round_id);

    engine.recalc_standings(round_id).await.expect("second recalc");
    let second = store.standings_of(round_id);

    assert_eq!(first, second);
}

#[tokio::test]
async fn bonus_point_affects_only_its_team() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    store.add_game(completed_game(round_id, a, b, (3, 0)));
    store.add_game(completed_game(round_id, a, c, (2, 1)));
    store.add_game(completed_game(round_id, b, c, (1, 1)));

    let engine = engine_over(&store);
    engine.recalc_standings(round_id).await.expect("baseline recalc");
    let before = store.standings_of(round_id);

    // +2 to the team already leading keeps every other row identical
    store.add_bonus(round_id, a, 2);
    engine.recalc_standings(round_id).await.expect("recalc with bonus");
    let after = store.standings_of(round_id);

    let a_before = row_of(&before, a);
    let a_after = row_of(&after, a);
    assert_eq!(a_after.total_points, a_before.total_points + 2);
    assert_eq!(a_after.bonus_points, 2);

    for team in [b, c] {
        assert_eq!(row_of(&before, team), row_of(&after, team));
    }
}

#[tokio::test]
async fn postponed_game_contribution_is_removed_entirely() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let corrected = completed_game(round_id, a, b, (6, 0));
    let corrected_id = corrected.id();
    store.add_game(corrected);
    store.add_game(completed_game(round_id, b, a, (2, 1)));

    let engine = engine_over(&store);
    engine.recalc_standings(round_id).await.expect("initial recalc");
    assert_eq!(row_of(&store.standings_of(round_id), a).games_played, 2);

    // correction: the 6:0 result is pulled back out of scope
    let mut game = GameRepository::find_by_id(store.as_ref(), corrected_id)
        .await
        .unwrap()
        .unwrap();
    assert!(game.postpone().expect("postpone allowed"));
    store.replace_game(game);

    engine.recalc_standings(round_id).await.expect("recalc after correction");
    let rows = store.standings_of(round_id);

    let row_a = row_of(&rows, a);
    assert_eq!(row_a.games_played, 1);
    assert_eq!(row_a.goals_for, 1);
    assert_eq!(row_a.wins, 0);
    assert_eq!(row_a.losses, 1);

    let row_b = row_of(&rows, b);
    assert_eq!(row_b.games_played, 1);
    assert_eq!(row_b.wins, 1);
    assert_eq!(row_b.total_points, 2);
}

#[tokio::test]
async fn unknown_round_is_configuration_missing() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine_over(&store);

    let round_id = Uuid::new_v4();
    let err = engine.recalc_standings(round_id).await.unwrap_err();
    assert!(matches!(
        err,
        RecalcError::ConfigurationMissing { round_id: id } if id == round_id
    ));
}

#[tokio::test]
async fn invalid_game_aborts_and_leaves_prior_rows_untouched() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_game(completed_game(round_id, a, b, (1, 0)));

    let engine = engine_over(&store);
    engine.recalc_standings(round_id).await.expect("valid recalc");
    let before = store.standings_of(round_id);

    // a completed game with a missing score is structurally invalid
    let broken = Game::from_persistence(
        Uuid::new_v4(),
        round_id,
        a,
        b,
        Some(3),
        None,
        GameStatus::Completed,
        None,
    );
    let broken_id = broken.id();
    store.add_game(broken);

    let err = engine.recalc_standings(round_id).await.unwrap_err();
    assert!(matches!(
        err,
        RecalcError::InvalidGameState { game_id, .. } if game_id == broken_id
    ));

    // stale but consistent: the previous row set is still there
    assert_eq!(store.standings_of(round_id), before);
}

#[tokio::test]
async fn player_stats_ignore_non_counting_rounds() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();

    let counting = round(season, (2, 1, 0));
    let mut friendly = round(season, (2, 1, 0));
    friendly.counts_for_player_stats = false;
    let (counting_id, friendly_id) = (counting.id, friendly.id);
    store.add_round(counting);
    store.add_round(friendly);

    let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
    let league_game = completed_game(counting_id, home, away, (2, 1));
    let friendly_game = completed_game(friendly_id, home, away, (5, 5));
    let (league_game_id, friendly_game_id) = (league_game.id(), friendly_game.id());
    store.add_game(league_game);
    store.add_game(friendly_game);

    let scorer = Uuid::new_v4();
    store.add_event(league_game_id, scorer, GameEventKind::Goal, None);
    store.add_event(league_game_id, scorer, GameEventKind::Assist, None);
    // a hat trick in the friendly must contribute nothing
    store.add_event(friendly_game_id, scorer, GameEventKind::Goal, None);
    store.add_event(friendly_game_id, scorer, GameEventKind::Goal, None);
    store.add_event(friendly_game_id, scorer, GameEventKind::Goal, None);

    let engine = engine_over(&store);
    engine.recalc_player_stats(season).await.expect("recalc ok");

    let stats = store.player_stats_of(season);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].player_id, scorer);
    assert_eq!(stats[0].games_played, 1);
    assert_eq!(stats[0].goals, 1);
    assert_eq!(stats[0].assists, 1);
    assert_eq!(stats[0].points, 2);
}

#[tokio::test]
async fn player_stats_full_replace_drops_disqualified_players() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
    let game = completed_game(round_id, home, away, (1, 0));
    let game_id = game.id();
    store.add_game(game);

    let player = Uuid::new_v4();
    store.add_event(game_id, player, GameEventKind::Goal, None);

    let engine = engine_over(&store);
    engine.recalc_player_stats(season).await.expect("first recalc");
    assert_eq!(store.player_stats_of(season).len(), 1);

    // the game is corrected away; the player no longer qualifies
    let mut corrected = GameRepository::find_by_id(store.as_ref(), game_id)
        .await
        .unwrap()
        .unwrap();
    corrected.cancel().expect("cancel allowed");
    store.replace_game(corrected);

    engine.recalc_player_stats(season).await.expect("second recalc");
    assert!(store.player_stats_of(season).is_empty());
}

#[tokio::test]
async fn goalie_stats_gaa_and_eligibility() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let mut r = round(season, (2, 1, 0));
    r.goalie_min_games = 2;
    let round_id = r.id;
    store.add_round(r);

    let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
    let g1 = completed_game(round_id, home, away, (3, 2));
    let g2 = completed_game(round_id, away, home, (1, 1));
    let (g1_id, g2_id) = (g1.id(), g2.id());
    store.add_game(g1);
    store.add_game(g2);

    let starter = Uuid::new_v4();
    let backup = Uuid::new_v4();
    store.add_goalie_line(g1_id, starter, 2, 60);
    store.add_goalie_line(g2_id, starter, 1, 60);
    // backup appears once, with no minutes recorded
    store.add_goalie_line(g2_id, backup, 0, 0);

    let engine = engine_over(&store);
    engine.recalc_goalie_stats(season).await.expect("recalc ok");

    let stats = store.goalie_stats_of(season);
    assert_eq!(stats.len(), 2);

    let starter_line = stats.iter().find(|s| s.goalie_id == starter).unwrap();
    assert_eq!(starter_line.games_played, 2);
    assert_eq!(starter_line.goals_against, 3);
    assert_eq!(starter_line.minutes_played, 120);
    let gaa = starter_line.gaa.expect("starter has minutes");
    assert!((gaa - 1.5).abs() < 1e-9);
    assert!(starter_line.eligible);

    let backup_line = stats.iter().find(|s| s.goalie_id == backup).unwrap();
    assert_eq!(backup_line.gaa, None);
    assert!(!backup_line.eligible);
}

#[tokio::test]
async fn goalie_stats_ignore_non_counting_rounds_and_use_strictest_threshold() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();

    let mut lenient = round(season, (2, 1, 0));
    lenient.goalie_min_games = 1;
    let mut strict = round(season, (2, 1, 0));
    strict.goalie_min_games = 3;
    let mut excluded = round(season, (2, 1, 0));
    excluded.counts_for_goalie_stats = false;
    let (lenient_id, strict_id, excluded_id) = (lenient.id, strict.id, excluded.id);
    store.add_round(lenient);
    store.add_round(strict);
    store.add_round(excluded);

    let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
    let g1 = completed_game(lenient_id, home, away, (2, 0));
    let g2 = completed_game(strict_id, away, home, (0, 4));
    let g3 = completed_game(excluded_id, home, away, (1, 0));
    let (g1_id, g2_id, g3_id) = (g1.id(), g2.id(), g3.id());
    store.add_game(g1);
    store.add_game(g2);
    store.add_game(g3);

    let goalie = Uuid::new_v4();
    store.add_goalie_line(g1_id, goalie, 0, 60);
    store.add_goalie_line(g2_id, goalie, 0, 60);
    // this line sits in an excluded round and must not be counted
    store.add_goalie_line(g3_id, goalie, 9, 60);

    let engine = engine_over(&store);
    engine.recalc_goalie_stats(season).await.expect("recalc ok");

    let stats = store.goalie_stats_of(season);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].games_played, 2);
    assert_eq!(stats[0].goals_against, 0);
    // threshold is the max across counting rounds (3), so 2 games is short
    assert!(!stats[0].eligible);
}

#[tokio::test]
async fn different_rounds_recalculate_independently() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r1 = round(season, (2, 1, 0));
    let r2 = round(season, (3, 1, 0));
    let (r1_id, r2_id) = (r1.id, r2.id);
    store.add_round(r1);
    store.add_round(r2);

    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_game(completed_game(r1_id, a, b, (1, 0)));
    store.add_game(completed_game(r2_id, a, b, (2, 0)));

    let engine = Arc::new(engine_over(&store));
    let (first, second) = tokio::join!(
        engine.recalc_standings(r1_id),
        engine.recalc_standings(r2_id)
    );
    first.expect("round one recalc");
    second.expect("round two recalc");

    // different point configurations per round
    assert_eq!(row_of(&store.standings_of(r1_id), a).total_points, 2);
    assert_eq!(row_of(&store.standings_of(r2_id), a).total_points, 3);
}

/// Game repository wrapper that parks the first fetch until released,
/// keeping its scope lock held for the conflict test below
struct GatedGames {
    inner: Arc<MemoryStore>,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl GameRepository for GatedGames {
    async fn save(&self, game: &Game) -> Result<(), String> {
        GameRepository::save(self.inner.as_ref(), game).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, String> {
        GameRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_completed_by_round(&self, round_id: Uuid) -> Result<Vec<Game>, String> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.find_completed_by_round(round_id).await
    }

    async fn find_completed_by_rounds(&self, round_ids: &[Uuid]) -> Result<Vec<Game>, String> {
        self.inner.find_completed_by_rounds(round_ids).await
    }
}

#[tokio::test]
async fn concurrent_recalc_of_same_round_conflicts() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let r = round(season, (2, 1, 0));
    let round_id = r.id;
    store.add_round(r);

    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    store.add_game(completed_game(round_id, a, b, (2, 1)));

    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let gated = Arc::new(GatedGames {
        inner: store.clone(),
        entered: entered.clone(),
        release: release.clone(),
    });

    let engine = Arc::new(RecalcEngine::new(
        store.clone(),
        gated,
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    ));

    let background = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.recalc_standings(round_id).await })
    };

    // wait until the first recompute holds the round's scope lock
    entered.notified().await;

    let err = engine.recalc_standings(round_id).await.unwrap_err();
    assert!(matches!(
        err,
        RecalcError::ConcurrentRecalcConflict { scope } if scope == round_id
    ));

    release.notify_one();
    background
        .await
        .expect("task join")
        .expect("first recalc succeeds");

    // the scope is free again: the caller's retry goes through
    release.notify_one();
    assert_eq!(store.standings_of(round_id).len(), 2);
}

#[tokio::test]
async fn season_with_no_counting_rounds_gets_empty_stat_sets() {
    let store = Arc::new(MemoryStore::default());
    let season = Uuid::new_v4();
    let mut r = round(season, (2, 1, 0));
    r.counts_for_player_stats = false;
    r.counts_for_goalie_stats = false;
    let round_id = r.id;
    store.add_round(r);

    let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
    let game = completed_game(round_id, home, away, (4, 2));
    let game_id = game.id();
    store.add_game(game);
    store.add_event(game_id, Uuid::new_v4(), GameEventKind::Goal, None);
    store.add_goalie_line(game_id, Uuid::new_v4(), 2, 60);

    // pre-existing rows from an earlier configuration must be cleared
    store.player_stats.write().unwrap().insert(
        season,
        vec![PlayerSeasonStats {
            player_id: Uuid::new_v4(),
            season_id: season,
            games_played: 1,
            goals: 1,
            assists: 0,
            points: 1,
            penalty_minutes: 0,
        }],
    );

    let engine = engine_over(&store);
    engine.recalc_player_stats(season).await.expect("player recalc");
    engine.recalc_goalie_stats(season).await.expect("goalie recalc");

    assert!(store.player_stats_of(season).is_empty());
    assert!(store.goalie_stats_of(season).is_empty());
}

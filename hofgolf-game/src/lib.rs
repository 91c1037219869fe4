//! HOF Golf Game Engine
//!
//! Platform-agnostic core game logic for the HOF Golf statistics trivia
//! game. This crate provides the game state machine, target lookups,
//! starting pools, and scoring without UI or storage-specific dependencies.

pub mod constants;
pub mod data;
pub mod error;
pub mod history;
pub mod lookup;
pub mod mode;
pub mod pools;
pub mod roster;
pub mod scoring;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use data::{
    AllStarEntry, FreePickTeam, HofEntry, ManagerEntry, ReferenceData, RosterPlayer, TeamRecord,
    TeamSeason,
};
pub use error::GameError;
pub use history::{GameLedger, SavedGame};
pub use lookup::{LookupCache, TargetLookup};
pub use mode::{
    BonusCondition, GameBonus, GameMode, ModeBonuses, ModeInfo, ModeList, PointsPer,
    ScoringCategory, ScoringCfg, StartCfg, StartingPool,
};
pub use pools::{eligible_teams, random_start};
pub use roster::{RosterTarget, TargetList, targets_on_roster};
pub use scoring::{OverrideWhen, ScoringOverride, resolve_points};
pub use session::{
    ActiveGame, GameOutcome, GameRound, GameSession, NavigateOptions, StartOptions,
};
pub use timer::RoundTimer;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Trait for read-only queries against the historical statistics store.
/// Platform-specific implementations should provide this.
pub trait StatsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Distinct players with any batting or pitching appearance for a
    /// team-season. Duplicate rows are permitted; callers de-duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster query fails.
    fn roster_of(&self, team_id: &str, year_id: u16) -> Result<Vec<RosterPlayer>, Self::Error>;

    /// Season win/loss record for a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the record query fails.
    fn record_of(&self, team_id: &str, year_id: u16) -> Result<TeamRecord, Self::Error>;

    /// Every team fielding in the given season.
    ///
    /// # Errors
    ///
    /// Returns an error if the team query fails.
    fn teams_in_season(&self, year_id: u16) -> Result<Vec<TeamSeason>, Self::Error>;
}

/// Trait for abstracting save/load of game progress.
/// Platform-specific implementations should provide this.
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the active game snapshot (`None` clears it).
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be saved.
    fn save_active(&self, game: Option<&ActiveGame>) -> Result<(), Self::Error>;

    /// Load the persisted active game, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded.
    fn load_active(&self) -> Result<Option<ActiveGame>, Self::Error>;

    /// Persist the history/best-scores ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be saved.
    fn save_ledger(&self, ledger: &GameLedger) -> Result<(), Self::Error>;

    /// Load the persisted ledger, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be loaded.
    fn load_ledger(&self) -> Result<Option<GameLedger>, Self::Error>;
}

/// Main engine wiring the statistics store, static configuration, and
/// persistence into the game session.
///
/// Persistence is fire-and-forget: the in-memory session is the source of
/// truth and storage failures are logged, never surfaced to game flow.
pub struct GolfEngine<S, P>
where
    S: StatsStore,
    P: GameStorage,
{
    stats: S,
    storage: P,
    modes: ModeList,
    reference: ReferenceData,
    lookups: LookupCache,
    session: GameSession,
    rng: ChaCha20Rng,
}

impl<S, P> GolfEngine<S, P>
where
    S: StatsStore,
    P: GameStorage,
{
    /// Create an engine over the given store, storage, and static data.
    /// `seed` drives starting-team selection deterministically.
    #[must_use]
    pub fn new(stats: S, storage: P, modes: ModeList, reference: ReferenceData, seed: u64) -> Self {
        Self {
            stats,
            storage,
            modes,
            reference,
            lookups: LookupCache::new(),
            session: GameSession::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Reload persisted state after a process restart.
    ///
    /// # Errors
    ///
    /// Returns the storage error if either snapshot fails to load.
    pub fn restore(&mut self) -> Result<(), P::Error> {
        let active = self.storage.load_active()?;
        let ledger = self.storage.load_ledger()?.unwrap_or_default();
        self.session = GameSession::from_parts(active, ledger);
        Ok(())
    }

    /// Eligible starting team-seasons for a mode (the choose-your-own-start
    /// listing).
    ///
    /// # Errors
    ///
    /// Returns configuration or data-integrity errors per the pool rules.
    pub fn eligible_starting_teams(&mut self, mode_id: &str) -> Result<Vec<TeamSeason>, GameError> {
        let mode = self.mode(mode_id)?;
        let category = mode.scoring_category()?;
        let lookup = self.lookups.get_or_build(category, &self.reference);
        pools::eligible_teams(&self.stats, &mode, &self.reference, lookup)
    }

    /// Start a game on a uniformly random team from the mode's pool.
    ///
    /// # Errors
    ///
    /// Returns configuration, pool, or store errors from the start flow.
    pub fn start_random_game(
        &mut self,
        mode_id: &str,
        timed: bool,
        now_ms: u64,
    ) -> Result<(), GameError> {
        let mode = self.mode(mode_id)?;
        let category = mode.scoring_category()?;
        let lookup = self.lookups.get_or_build(category, &self.reference);
        let start = pools::random_start(&self.stats, &mode, &self.reference, lookup, &mut self.rng)?;
        self.launch(&mode, &start, timed, now_ms)
    }

    /// Start a game on a team the player chose from the eligible listing.
    ///
    /// # Errors
    ///
    /// Returns configuration or store errors from the start flow.
    pub fn start_game_with_team(
        &mut self,
        mode_id: &str,
        start: &TeamSeason,
        timed: bool,
        now_ms: u64,
    ) -> Result<(), GameError> {
        let mode = self.mode(mode_id)?;
        self.launch(&mode, start, timed, now_ms)
    }

    fn launch(
        &mut self,
        mode: &GameMode,
        start: &TeamSeason,
        timed: bool,
        now_ms: u64,
    ) -> Result<(), GameError> {
        let category = mode.scoring_category()?;
        let lookup = self.lookups.get_or_build(category, &self.reference);
        let targets = targets_on_roster(
            &self.stats,
            &start.team_id,
            start.year_id,
            lookup,
            mode.scoring_overrides(),
        )
        .map_err(GameError::stats)?;
        let record = self
            .stats
            .record_of(&start.team_id, start.year_id)
            .map_err(GameError::stats)?;

        self.session.start_game(
            mode,
            start,
            targets,
            StartOptions {
                timed,
                team_w: record.wins,
                team_l: record.losses,
                now_ms,
            },
        );
        self.persist();
        Ok(())
    }

    /// Record the player chosen to leave the current round. No-op without
    /// an unfinished active game.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMode` if the active game references a missing mode.
    pub fn pick_player(&mut self, player_id: &str, player_name: &str) -> Result<(), GameError> {
        let Some(mode_id) = self.session.active().map(|a| a.mode_id.clone()) else {
            return Ok(());
        };
        let mode = self.mode(&mode_id)?;
        self.session.pick_player(&mode, player_id, player_name);
        self.persist();
        Ok(())
    }

    /// Advance the active game to a new team-season, scanning its roster
    /// and consuming any latched round timeout. No-op without an unfinished
    /// active game.
    ///
    /// # Errors
    ///
    /// Returns configuration or store errors from the transition flow.
    pub fn visit_team(&mut self, team_id: &str, year_id: u16, now_ms: u64) -> Result<(), GameError> {
        let Some((mode_id, finished)) = self
            .session
            .active()
            .map(|a| (a.mode_id.clone(), a.finished))
        else {
            return Ok(());
        };
        if finished {
            return Ok(());
        }

        let mode = self.mode(&mode_id)?;
        let category = mode.scoring_category()?;
        let lookup = self.lookups.get_or_build(category, &self.reference);
        let targets = targets_on_roster(
            &self.stats,
            team_id,
            year_id,
            lookup,
            mode.scoring_overrides(),
        )
        .map_err(GameError::stats)?;
        let record = self
            .stats
            .record_of(team_id, year_id)
            .map_err(GameError::stats)?;
        let name = self
            .stats
            .teams_in_season(year_id)
            .map_err(GameError::stats)?
            .into_iter()
            .find(|team| team.team_id == team_id)
            .map_or_else(|| team_id.to_string(), |team| team.name);

        let team = TeamSeason {
            team_id: team_id.to_string(),
            year_id,
            name,
        };
        let timed_out = self.session.consume_timeout();
        self.session.navigate_to_team(
            &mode,
            &team,
            targets,
            NavigateOptions {
                team_w: record.wins,
                team_l: record.losses,
                timed_out,
                now_ms,
            },
        );
        self.persist();
        Ok(())
    }

    /// End the active game: evaluate the bonus, archive it, update best
    /// scores, and clear it. Returns `None` when no game is active.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMode` if the active game references a missing mode.
    pub fn end_game(&mut self, now_ms: u64) -> Result<Option<GameOutcome>, GameError> {
        let Some(mode_id) = self.session.active().map(|a| a.mode_id.clone()) else {
            return Ok(None);
        };
        let mode = self.mode(&mode_id)?;
        let outcome = self.session.end_game(&mode, now_ms);
        self.persist();
        Ok(outcome)
    }

    /// Discard the active game without archiving it.
    pub fn abandon_game(&mut self) {
        self.session.abandon_game();
        self.persist();
    }

    /// Advance the round clock; returns true on the tick that latches a
    /// timeout. Only timed, unfinished games are affected.
    pub fn tick_timer(&mut self, now_ms: u64) -> bool {
        self.session.tick_timer(now_ms)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn modes(&self) -> &ModeList {
        &self.modes
    }

    #[must_use]
    pub const fn active(&self) -> Option<&ActiveGame> {
        self.session.active()
    }

    #[must_use]
    pub const fn ledger(&self) -> &GameLedger {
        self.session.ledger()
    }

    fn mode(&self, mode_id: &str) -> Result<GameMode, GameError> {
        self.modes
            .get(mode_id)
            .cloned()
            .ok_or_else(|| GameError::UnknownMode(mode_id.to_string()))
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save_active(self.session.active()) {
            log::warn!("failed to persist active game: {err}");
        }
        if let Err(err) = self.storage.save_ledger(self.session.ledger()) {
            log::warn!("failed to persist game ledger: {err}");
        }
    }
}

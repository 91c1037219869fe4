//! Active-game state machine: rounds, scoring, completion, archival.
//!
//! The session owns at most one [`ActiveGame`] (NoGame / InProgress), the
//! [`GameLedger`] it archives into, and the round timer. Every public
//! operation is a synchronous, atomic transition; round-transition calls on
//! a missing or finished game are guarded no-ops so late UI events (a timer
//! callback after a manual advance, a double tap) are harmless.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::{TeamRecord, TeamSeason};
use crate::history::{GameLedger, SavedGame};
use crate::mode::{BonusCondition, GameMode};
use crate::roster::TargetList;
use crate::timer::RoundTimer;

/// One step of a game: the team-season visited, the full target list on
/// that roster (including already-seen targets, for display), and the
/// points actually earned by newly discovered targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    #[serde(rename = "teamID")]
    pub team_id: String,
    pub team_name: String,
    #[serde(rename = "yearID")]
    pub year_id: u16,
    #[serde(rename = "pickedPlayerID")]
    pub picked_player_id: Option<String>,
    pub picked_player_name: Option<String>,
    pub targets_found: TargetList,
    pub points_earned: u32,
    pub team_w: u32,
    pub team_l: u32,
    pub timed_out: bool,
}

/// The sole mutable aggregate while a game is in progress.
///
/// Invariants: `rounds` is never empty (round 0 is created with the game);
/// `seen_targets` only grows; before bonus evaluation `total_points` equals
/// the sum of all rounds' `points_earned`; once `finished` is set no further
/// round is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGame {
    pub id: String,
    pub mode_id: String,
    pub started_at: u64,
    pub rounds: Vec<GameRound>,
    pub seen_targets: HashSet<String>,
    pub total_points: u32,
    pub finished: bool,
    pub timed: bool,
    pub bonus_points: u32,
}

impl ActiveGame {
    /// Index of the current (last) round.
    #[must_use]
    pub fn current_round_index(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }

    /// Win/loss record summed across all rounds visited so far.
    #[must_use]
    pub fn cumulative_record(&self) -> TeamRecord {
        let mut record = TeamRecord::default();
        for round in &self.rounds {
            record.wins += round.team_w;
            record.losses += round.team_l;
        }
        record
    }
}

/// Options for [`GameSession::start_game`].
#[derive(Debug, Clone, Copy)]
pub struct StartOptions {
    pub timed: bool,
    pub team_w: u32,
    pub team_l: u32,
    pub now_ms: u64,
}

/// Options for [`GameSession::navigate_to_team`].
#[derive(Debug, Clone, Copy)]
pub struct NavigateOptions {
    pub team_w: u32,
    pub team_l: u32,
    pub timed_out: bool,
    pub now_ms: u64,
}

/// Result of archiving a finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub saved: SavedGame,
    /// Whether the final total set a new best for the mode.
    pub new_best: bool,
}

/// The game session state machine.
#[derive(Debug, Default)]
pub struct GameSession {
    active: Option<ActiveGame>,
    ledger: GameLedger,
    timer: RoundTimer,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted state (process restart).
    #[must_use]
    pub fn from_parts(active: Option<ActiveGame>, ledger: GameLedger) -> Self {
        Self {
            active,
            ledger,
            timer: RoundTimer::default(),
        }
    }

    /// Start a new game on `start`, with the roster's `targets` pre-credited
    /// as found (the freebie round). An existing game is overwritten; routing
    /// through resume/abandon first is the caller's responsibility.
    pub fn start_game(
        &mut self,
        mode: &GameMode,
        start: &TeamSeason,
        targets: TargetList,
        opts: StartOptions,
    ) {
        let seen_targets: HashSet<String> =
            targets.iter().map(|t| t.player_id.clone()).collect();
        let points_earned: u32 = targets.iter().map(|t| t.points).sum();

        let round0 = GameRound {
            team_id: start.team_id.clone(),
            team_name: start.name.clone(),
            year_id: start.year_id,
            picked_player_id: None,
            picked_player_name: None,
            targets_found: targets,
            points_earned,
            team_w: opts.team_w,
            team_l: opts.team_l,
            timed_out: false,
        };

        self.active = Some(ActiveGame {
            id: format!("{}-{}", mode.id, opts.now_ms),
            mode_id: mode.id.clone(),
            started_at: opts.now_ms,
            rounds: vec![round0],
            seen_targets,
            total_points: points_earned,
            finished: false,
            timed: opts.timed,
            bonus_points: 0,
        });
        self.timer.restart(opts.now_ms);
        log::debug!(
            "started {} game at {} {} ({points_earned} freebie points)",
            mode.id,
            start.year_id,
            start.name
        );
    }

    /// Record the player chosen to leave the current round. Guarded no-op
    /// without an unfinished active game. A pick recorded on or past the
    /// mode's final round ends the game.
    pub fn pick_player(&mut self, mode: &GameMode, player_id: &str, player_name: &str) {
        let Some(active) = self.active.as_mut().filter(|a| !a.finished) else {
            return;
        };
        if let Some(round) = active.rounds.last_mut() {
            round.picked_player_id = Some(player_id.to_string());
            round.picked_player_name = Some(player_name.to_string());
        }
        Self::refresh_completion(active, mode);
    }

    /// Advance to a new team-season. Guarded no-op without an unfinished
    /// active game.
    ///
    /// A timed-out transition scores 0 and leaves `seen_targets` untouched,
    /// so the round's targets stay collectible on a later visit. Otherwise
    /// only targets not yet seen earn their points, and exactly those join
    /// the seen set. The appended round always carries the full target list
    /// for display.
    pub fn navigate_to_team(
        &mut self,
        mode: &GameMode,
        team: &TeamSeason,
        targets: TargetList,
        opts: NavigateOptions,
    ) {
        let Some(active) = self.active.as_mut().filter(|a| !a.finished) else {
            return;
        };

        let mut points_earned = 0;
        if !opts.timed_out {
            for target in &targets {
                if active.seen_targets.insert(target.player_id.clone()) {
                    points_earned += target.points;
                }
            }
        }

        active.rounds.push(GameRound {
            team_id: team.team_id.clone(),
            team_name: team.name.clone(),
            year_id: team.year_id,
            picked_player_id: None,
            picked_player_name: None,
            targets_found: targets,
            points_earned,
            team_w: opts.team_w,
            team_l: opts.team_l,
            timed_out: opts.timed_out,
        });
        active.total_points += points_earned;
        log::debug!(
            "round {} at {} {}: +{points_earned} -> {}",
            active.rounds.len() - 1,
            team.year_id,
            team.name,
            active.total_points
        );
        Self::refresh_completion(active, mode);
        self.timer.restart(opts.now_ms);
    }

    /// Canonical completion rule, evaluated after every mutation: the game
    /// finishes when a pick has been recorded while the round count has
    /// reached the mode's quota. Navigation alone never finishes a game.
    fn refresh_completion(active: &mut ActiveGame, mode: &GameMode) {
        let quota_reached = active.rounds.len() as u32 >= mode.rounds;
        let picked = active
            .rounds
            .last()
            .is_some_and(|round| round.picked_player_id.is_some());
        if quota_reached && picked {
            active.finished = true;
            log::debug!("game {} finished at {} points", active.id, active.total_points);
        }
    }

    /// End the game: evaluate the mode's bonus, archive a [`SavedGame`]
    /// (most recent first), update the best score, and clear the active
    /// game. Returns `None` (no-op) when no game is active.
    pub fn end_game(&mut self, mode: &GameMode, now_ms: u64) -> Option<GameOutcome> {
        let active = self.active.take()?;

        let mut bonus_points = 0;
        if let Some(bonus) = mode.game_bonus() {
            match bonus.condition {
                BonusCondition::CumulativeLosingRecord => {
                    let record = active.cumulative_record();
                    if record.losses > record.wins {
                        bonus_points = bonus.points;
                    }
                }
            }
        }

        let saved = SavedGame {
            id: active.id,
            mode_id: active.mode_id,
            started_at: active.started_at,
            finished_at: now_ms,
            total_points: active.total_points + bonus_points,
            rounds: active.rounds,
            timed: active.timed,
            bonus_points,
        };
        let new_best = self.ledger.record(saved.clone());
        log::debug!(
            "archived {} with {} points ({bonus_points} bonus, new best: {new_best})",
            saved.id,
            saved.total_points
        );
        Some(GameOutcome { saved, new_best })
    }

    /// Discard the active game without archiving. History and best scores
    /// are untouched.
    pub fn abandon_game(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!("abandoned {} after {} rounds", active.id, active.rounds.len());
        }
    }

    /// Arm-and-tick the round clock. Only latches for timed, unfinished
    /// games; returns true on the tick that latches the timeout.
    pub fn tick_timer(&mut self, now_ms: u64) -> bool {
        let armed = self
            .active
            .as_ref()
            .is_some_and(|a| a.timed && !a.finished);
        if !armed {
            return false;
        }
        self.timer.tick(now_ms)
    }

    /// Read and clear the latched timeout; the value feeds the next
    /// navigation's `timed_out` option.
    pub const fn consume_timeout(&mut self) -> bool {
        self.timer.consume_timeout()
    }

    #[must_use]
    pub const fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    #[must_use]
    pub const fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    #[must_use]
    pub const fn ledger(&self) -> &GameLedger {
        &self.ledger
    }

    /// Whether a game is active and has actually begun. A restored game
    /// with no rounds does not count for UI-routing purposes.
    #[must_use]
    pub fn is_game_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| !a.finished && !a.rounds.is_empty())
    }

    /// Index of the current round, when a game is active.
    #[must_use]
    pub fn current_round_index(&self) -> Option<usize> {
        self.active.as_ref().map(ActiveGame::current_round_index)
    }

    /// Cumulative win/loss record of the active game (zero without one).
    #[must_use]
    pub fn cumulative_record(&self) -> TeamRecord {
        self.active
            .as_ref()
            .map(ActiveGame::cumulative_record)
            .unwrap_or_default()
    }
}

//! Starting pool strategies and the random-start pick.

use rand::Rng;

use crate::StatsStore;
use crate::constants::REFERENCE_YEAR;
use crate::data::{ReferenceData, TeamSeason};
use crate::error::GameError;
use crate::lookup::TargetLookup;
use crate::mode::{GameMode, StartingPool};
use crate::roster::targets_on_roster;

/// Resolve the set of eligible starting team-seasons for a mode.
///
/// The single-target pool is recomputed per request: it depends on the
/// scoring category's roster scans, not on static data.
///
/// # Errors
///
/// Returns `UnknownStartingPool` for an unrecognized pool identifier and
/// `NoEligibleTeams` when the resolved pool is empty.
pub fn eligible_teams<S: StatsStore>(
    store: &S,
    mode: &GameMode,
    data: &ReferenceData,
    lookup: &TargetLookup,
) -> Result<Vec<TeamSeason>, GameError> {
    let pool = mode.starting_pool()?;
    let teams = match pool {
        StartingPool::FreePick => free_pick_pool(mode, data),
        StartingPool::SingleTarget => single_target_pool(store, lookup)?,
        StartingPool::Unrestricted => store
            .teams_in_season(REFERENCE_YEAR)
            .map_err(GameError::stats)?,
    };
    if teams.is_empty() {
        return Err(GameError::NoEligibleTeams {
            pool: pool.as_str().to_string(),
        });
    }
    Ok(teams)
}

/// Pick a uniformly random starting team-season from the eligible pool.
///
/// # Errors
///
/// Propagates [`eligible_teams`] errors.
pub fn random_start<S: StatsStore, R: Rng>(
    store: &S,
    mode: &GameMode,
    data: &ReferenceData,
    lookup: &TargetLookup,
    rng: &mut R,
) -> Result<TeamSeason, GameError> {
    let mut teams = eligible_teams(store, mode, data, lookup)?;
    let index = rng.gen_range(0..teams.len());
    Ok(teams.swap_remove(index))
}

fn free_pick_pool(mode: &GameMode, data: &ReferenceData) -> Vec<TeamSeason> {
    let (min_year, max_year) = match mode.start.year_range {
        Some([min, max]) => (min, max),
        None => (u16::MIN, u16::MAX),
    };
    data.free_pick_teams
        .iter()
        .filter(|team| (min_year..=max_year).contains(&team.year_id))
        .map(|team| TeamSeason {
            team_id: team.team_id.clone(),
            year_id: team.year_id,
            name: team.name.clone(),
        })
        .collect()
}

fn single_target_pool<S: StatsStore>(
    store: &S,
    lookup: &TargetLookup,
) -> Result<Vec<TeamSeason>, GameError> {
    let mut eligible = Vec::new();
    for team in store
        .teams_in_season(REFERENCE_YEAR)
        .map_err(GameError::stats)?
    {
        let targets = targets_on_roster(store, &team.team_id, team.year_id, lookup, &[])
            .map_err(GameError::stats)?;
        if targets.len() == 1 {
            eligible.push(team);
        }
    }
    Ok(eligible)
}

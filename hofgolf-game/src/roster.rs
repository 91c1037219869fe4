//! Roster target scan: project a team-season's roster onto qualifying targets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::StatsStore;
use crate::lookup::TargetLookup;
use crate::scoring::{ScoringOverride, resolve_points};

/// Targets per roster stored inline without additional allocations.
pub type TargetList = SmallVec<[RosterTarget; 4]>;

/// A roster member qualifying under the mode's scoring category, carrying
/// its override-resolved point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTarget {
    #[serde(rename = "playerID")]
    pub player_id: String,
    pub name: String,
    pub points: u32,
}

/// Scan a team-season roster for qualifying targets.
///
/// The roster union (batting + pitching appearances) is de-duplicated by
/// player; each hit is priced through the mode's override rules. Order
/// follows the store's roster order and carries no game meaning.
///
/// # Errors
///
/// Returns the store's error if the roster query fails.
pub fn targets_on_roster<S: StatsStore>(
    store: &S,
    team_id: &str,
    year_id: u16,
    lookup: &TargetLookup,
    overrides: &[ScoringOverride],
) -> Result<TargetList, S::Error> {
    let mut seen = HashSet::new();
    let mut targets = TargetList::new();
    for player in store.roster_of(team_id, year_id)? {
        if !seen.insert(player.player_id.clone()) {
            continue;
        }
        if lookup.has(&player.player_id) {
            let raw = lookup.points_for(&player.player_id);
            let name = player.display_name();
            targets.push(RosterTarget {
                player_id: player.player_id,
                name,
                points: resolve_points(raw, overrides),
            });
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AllStarEntry, ReferenceData, RosterPlayer, TeamRecord, TeamSeason};
    use crate::mode::ScoringCategory;
    use crate::scoring::OverrideWhen;
    use std::convert::Infallible;

    struct RosterFixture(Vec<RosterPlayer>);

    impl StatsStore for RosterFixture {
        type Error = Infallible;

        fn roster_of(&self, _team_id: &str, _year_id: u16) -> Result<Vec<RosterPlayer>, Self::Error> {
            Ok(self.0.clone())
        }

        fn record_of(&self, _team_id: &str, _year_id: u16) -> Result<TeamRecord, Self::Error> {
            Ok(TeamRecord::default())
        }

        fn teams_in_season(&self, _year_id: u16) -> Result<Vec<TeamSeason>, Self::Error> {
            Ok(vec![])
        }
    }

    fn player(id: &str, first: &str, last: &str) -> RosterPlayer {
        RosterPlayer {
            player_id: id.to_string(),
            name_first: first.to_string(),
            name_last: last.to_string(),
        }
    }

    fn all_star_lookup() -> TargetLookup {
        let data = ReferenceData {
            all_stars: vec![
                AllStarEntry {
                    player_id: "aaronha01".to_string(),
                    selections: 25,
                },
                AllStarEntry {
                    player_id: "bumgama01".to_string(),
                    selections: 4,
                },
            ],
            ..ReferenceData::empty()
        };
        TargetLookup::build(ScoringCategory::AllStar, &data)
    }

    #[test]
    fn scan_dedups_roster_and_keeps_only_targets() {
        // Aaron appears in both batting and pitching rows; the scan must
        // credit him once and skip the non-target entirely.
        let store = RosterFixture(vec![
            player("aaronha01", "Hank", "Aaron"),
            player("aaronha01", "Hank", "Aaron"),
            player("benchjo01", "Johnny", "Bench"),
            player("bumgama01", "Madison", "Bumgarner"),
        ]);
        let targets =
            targets_on_roster(&store, "ATL", 1970, &all_star_lookup(), &[]).unwrap();

        let ids: Vec<_> = targets.iter().map(|t| t.player_id.as_str()).collect();
        assert_eq!(ids, vec!["aaronha01", "bumgama01"]);
        assert_eq!(targets[0].name, "Hank Aaron");
        assert_eq!(targets[0].points, 25);
        assert_eq!(targets[1].points, 4);
    }

    #[test]
    fn scan_applies_scoring_overrides() {
        let store = RosterFixture(vec![
            player("aaronha01", "Hank", "Aaron"),
            player("bumgama01", "Madison", "Bumgarner"),
        ]);
        let overrides = [ScoringOverride {
            when: OverrideWhen::Gte,
            threshold: 2,
            points: 2,
        }];
        let targets =
            targets_on_roster(&store, "ATL", 1970, &all_star_lookup(), &overrides).unwrap();
        // Both multi-selection All-Stars flatten to the override value.
        assert!(targets.iter().all(|t| t.points == 2));
    }

    #[test]
    fn empty_roster_yields_no_targets() {
        let store = RosterFixture(vec![]);
        let targets = targets_on_roster(&store, "ATL", 1970, &all_star_lookup(), &[]).unwrap();
        assert!(targets.is_empty());
    }
}

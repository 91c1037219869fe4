//! Target qualification lookups, built per scoring category.

use std::collections::HashMap;

use crate::constants::{FLAT_TARGET_POINTS, HOF_PLAYER_CATEGORY};
use crate::data::ReferenceData;
use crate::mode::ScoringCategory;

/// Answers "is this player a qualifying target, and for how many points?"
/// for one scoring category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLookup {
    label: &'static str,
    points: HashMap<String, u32>,
}

impl TargetLookup {
    /// Build the lookup for a scoring category from the reference datasets.
    #[must_use]
    pub fn build(category: ScoringCategory, data: &ReferenceData) -> Self {
        match category {
            ScoringCategory::Hof => build_hof(data),
            ScoringCategory::AllStar => build_all_star(data),
            ScoringCategory::Manager => build_manager(data),
        }
    }

    #[must_use]
    pub fn has(&self, player_id: &str) -> bool {
        self.points.contains_key(player_id)
    }

    /// Raw point value for a player; 0 if not a target.
    #[must_use]
    pub fn points_for(&self, player_id: &str) -> u32 {
        self.points.get(player_id).copied().unwrap_or(0)
    }

    /// Display noun for a single target of this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn build_hof(data: &ReferenceData) -> TargetLookup {
    let mut points = HashMap::new();
    for entry in &data.hall_of_famers {
        if entry.category == HOF_PLAYER_CATEGORY {
            points.insert(entry.player_id.clone(), FLAT_TARGET_POINTS);
        }
    }
    // Managers-who-played count too when they hold any non-Player induction.
    for manager in &data.managers_who_played {
        let inducted_otherwise = data
            .hall_of_famers
            .iter()
            .any(|h| h.player_id == manager.player_id && h.category != HOF_PLAYER_CATEGORY);
        if inducted_otherwise {
            points.insert(manager.player_id.clone(), FLAT_TARGET_POINTS);
        }
    }
    TargetLookup {
        label: "Hall of Famer",
        points,
    }
}

fn build_all_star(data: &ReferenceData) -> TargetLookup {
    let points = data
        .all_stars
        .iter()
        .map(|entry| (entry.player_id.clone(), entry.selections))
        .collect();
    TargetLookup {
        label: "All-Star",
        points,
    }
}

fn build_manager(data: &ReferenceData) -> TargetLookup {
    let points = data
        .managers_who_played
        .iter()
        .map(|entry| (entry.player_id.clone(), FLAT_TARGET_POINTS))
        .collect();
    TargetLookup {
        label: "Manager",
        points,
    }
}

/// Lookup cache owned by the engine; each category is built at most once
/// per reference dataset.
#[derive(Debug, Default)]
pub struct LookupCache {
    built: HashMap<ScoringCategory, TargetLookup>,
}

impl LookupCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the lookup for a category, building it on first use.
    pub fn get_or_build(
        &mut self,
        category: ScoringCategory,
        data: &ReferenceData,
    ) -> &TargetLookup {
        self.built
            .entry(category)
            .or_insert_with(|| TargetLookup::build(category, data))
    }

    /// Drop all built lookups (e.g. after reference data is replaced).
    pub fn clear(&mut self) {
        self.built.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AllStarEntry, HofEntry, ManagerEntry};

    fn reference_fixture() -> ReferenceData {
        ReferenceData {
            hall_of_famers: vec![
                HofEntry {
                    player_id: "ruthba01".to_string(),
                    category: "Player".to_string(),
                },
                HofEntry {
                    player_id: "mackco01".to_string(),
                    category: "Manager".to_string(),
                },
                HofEntry {
                    player_id: "rickebr01".to_string(),
                    category: "Pioneer/Executive".to_string(),
                },
            ],
            all_stars: vec![
                AllStarEntry {
                    player_id: "aaronha01".to_string(),
                    selections: 25,
                },
                AllStarEntry {
                    player_id: "troutmi01".to_string(),
                    selections: 11,
                },
            ],
            managers_who_played: vec![
                ManagerEntry {
                    player_id: "mackco01".to_string(),
                },
                ManagerEntry {
                    player_id: "roseped01".to_string(),
                },
            ],
            free_pick_teams: vec![],
        }
    }

    #[test]
    fn hof_lookup_includes_player_inductees() {
        let lookup = TargetLookup::build(ScoringCategory::Hof, &reference_fixture());
        assert!(lookup.has("ruthba01"));
        assert_eq!(lookup.points_for("ruthba01"), 1);
    }

    #[test]
    fn hof_lookup_cross_references_managers_who_played() {
        let lookup = TargetLookup::build(ScoringCategory::Hof, &reference_fixture());
        // Inducted as a manager and also played: qualifies.
        assert!(lookup.has("mackco01"));
        // Played-and-managed but never inducted: does not.
        assert!(!lookup.has("roseped01"));
        // Inducted in a non-Player category without a managing career: does not.
        assert!(!lookup.has("rickebr01"));
    }

    #[test]
    fn all_star_lookup_values_players_by_selection_count() {
        let lookup = TargetLookup::build(ScoringCategory::AllStar, &reference_fixture());
        assert_eq!(lookup.points_for("aaronha01"), 25);
        assert_eq!(lookup.points_for("troutmi01"), 11);
        assert_eq!(lookup.points_for("nobody99"), 0);
        assert!(!lookup.has("nobody99"));
    }

    #[test]
    fn manager_lookup_scores_flat_points() {
        let lookup = TargetLookup::build(ScoringCategory::Manager, &reference_fixture());
        assert_eq!(lookup.points_for("roseped01"), 1);
        assert_eq!(lookup.points_for("mackco01"), 1);
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn cache_reuses_built_lookups() {
        let data = reference_fixture();
        let mut cache = LookupCache::new();
        let first_len = cache.get_or_build(ScoringCategory::AllStar, &data).len();
        // A second request against empty data must hit the cached build.
        let empty = ReferenceData::empty();
        let second_len = cache.get_or_build(ScoringCategory::AllStar, &empty).len();
        assert_eq!(first_len, second_len);

        cache.clear();
        assert!(cache.get_or_build(ScoringCategory::AllStar, &empty).is_empty());
    }
}

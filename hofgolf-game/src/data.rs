//! Static reference datasets and statistics-store row types.
//!
//! The reference lists mirror the JSON metadata shipped with the app
//! (Hall of Fame inductions, All-Star selection counts, managers who also
//! played, and the curated free-pick team pool). Field names keep the
//! Lahman-style `playerID`/`teamID`/`yearID` keys of that data format.

use serde::{Deserialize, Serialize};

/// One Hall of Fame induction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HofEntry {
    #[serde(rename = "playerID")]
    pub player_id: String,
    /// Induction category, e.g. "Player", "Manager", "Pioneer/Executive".
    pub category: String,
}

/// Lifetime All-Star selection count for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllStarEntry {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "allStarSelections")]
    pub selections: u32,
}

/// A manager who also appeared as a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerEntry {
    #[serde(rename = "playerID")]
    pub player_id: String,
}

/// Curated free-pick pool entry: a team-season with no current targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreePickTeam {
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "yearID")]
    pub year_id: u16,
    pub name: String,
}

/// One team in one year, as reported by the statistics store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeason {
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "yearID")]
    pub year_id: u16,
    pub name: String,
}

/// Season win/loss record for a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

/// One roster appearance row (batting or pitching) from the statistics store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "nameFirst")]
    pub name_first: String,
    #[serde(rename = "nameLast")]
    pub name_last: String,
}

impl RosterPlayer {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name_first, self.name_last)
    }
}

/// Container for all static reference data the engine consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceData {
    #[serde(default)]
    pub hall_of_famers: Vec<HofEntry>,
    #[serde(default)]
    pub all_stars: Vec<AllStarEntry>,
    #[serde(default)]
    pub managers_who_played: Vec<ManagerEntry>,
    #[serde(default)]
    pub free_pick_teams: Vec<FreePickTeam>,
}

impl ReferenceData {
    /// Create empty reference data (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load reference data from a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Assemble reference data from the four separate JSON lists the app
    /// ships as individual metadata files.
    ///
    /// # Errors
    ///
    /// Returns an error if any list fails to parse.
    pub fn from_json_parts(
        hall_of_famers: &str,
        all_stars: &str,
        managers_who_played: &str,
        free_pick_teams: &str,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            hall_of_famers: serde_json::from_str(hall_of_famers)?,
            all_stars: serde_json::from_str(all_stars)?,
            managers_who_played: serde_json::from_str(managers_who_played)?,
            free_pick_teams: serde_json::from_str(free_pick_teams)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_data_assembles_from_metadata_lists() {
        let data = ReferenceData::from_json_parts(
            r#"[{"playerID": "ruthba01", "category": "Player"}]"#,
            r#"[{"playerID": "aaronha01", "allStarSelections": 25}]"#,
            r#"[{"playerID": "roseped01"}]"#,
            r#"[{"teamID": "SEA", "yearID": 1985, "name": "Seattle Mariners"}]"#,
        )
        .unwrap();

        assert_eq!(data.hall_of_famers[0].player_id, "ruthba01");
        assert_eq!(data.all_stars[0].selections, 25);
        assert_eq!(data.managers_who_played[0].player_id, "roseped01");
        assert_eq!(data.free_pick_teams[0].year_id, 1985);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let data = ReferenceData::from_json(r#"{"hall_of_famers": []}"#).unwrap();
        assert!(data.all_stars.is_empty());
        assert!(data.free_pick_teams.is_empty());
    }

    #[test]
    fn roster_player_formats_display_name() {
        let player = RosterPlayer {
            player_id: "mayswi01".to_string(),
            name_first: "Willie".to_string(),
            name_last: "Mays".to_string(),
        };
        assert_eq!(player.display_name(), "Willie Mays");
    }
}

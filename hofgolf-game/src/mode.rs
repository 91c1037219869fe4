//! Game mode configuration.
//!
//! Modes are immutable data loaded once at startup. Behavioral variation
//! (scoring category, starting pool, bonuses) lives in data fields that are
//! parsed into exhaustive enums at the point of use, so unrecognized
//! identifiers surface as configuration errors while dispatch stays
//! compile-time checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::scoring::ScoringOverride;

const DEFAULT_MODES_DATA: &str = include_str!("../assets/game-modes.json");

/// Target category a mode scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringCategory {
    Hof,
    AllStar,
    Manager,
}

impl ScoringCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hof => "hof",
            Self::AllStar => "all-star",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for ScoringCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringCategory {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hof" => Ok(Self::Hof),
            "all-star" => Ok(Self::AllStar),
            "manager" => Ok(Self::Manager),
            other => Err(GameError::UnknownScoringType(other.to_string())),
        }
    }
}

/// Starting pool strategy. The string forms are the stable identifiers used
/// by the mode-definition data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartingPool {
    /// Curated team-seasons with no current targets, filtered by year range.
    FreePick,
    /// Reference-year teams whose roster holds exactly one target.
    SingleTarget,
    /// Every reference-year team.
    Unrestricted,
}

impl StartingPool {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreePick => "hof-free-teams",
            Self::SingleTarget => "one-allstar-2025-teams",
            Self::Unrestricted => "all-2025-teams",
        }
    }
}

impl fmt::Display for StartingPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartingPool {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hof-free-teams" => Ok(Self::FreePick),
            "one-allstar-2025-teams" => Ok(Self::SingleTarget),
            "all-2025-teams" => Ok(Self::Unrestricted),
            other => Err(GameError::UnknownStartingPool(other.to_string())),
        }
    }
}

/// Display form of a mode's per-target value: a flat number or a phrase
/// like "1 per selection". The engine never computes from this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointsPer {
    Flat(u32),
    Label(String),
}

impl Default for PointsPer {
    fn default() -> Self {
        Self::Flat(1)
    }
}

/// Scoring block of a mode definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringCfg {
    /// Scoring category identifier; parse with [`GameMode::scoring_category`].
    #[serde(rename = "type")]
    pub category: String,
    /// Display noun for the target set, e.g. "Hall of Famers".
    #[serde(rename = "targetSet", default)]
    pub target_set: String,
    #[serde(rename = "pointsPer", default)]
    pub points_per: PointsPer,
    #[serde(rename = "uniqueOnly", default)]
    pub unique_only: bool,
}

/// Start block of a mode definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCfg {
    /// Pool identifier; parse with [`GameMode::starting_pool`].
    pub pool: String,
    /// Inclusive year range applied by the free-pick pool.
    #[serde(rename = "yearRange", default)]
    pub year_range: Option<[u16; 2]>,
    /// Whether the starting roster is pre-credited as found.
    #[serde(default)]
    pub freebie: bool,
}

/// Condition attached to an end-of-game bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusCondition {
    #[serde(rename = "cumulative-losing-record")]
    CumulativeLosingRecord,
}

/// A single end-of-game bonus, evaluated once by `end_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBonus {
    pub points: u32,
    pub condition: BonusCondition,
}

/// Optional bonus block: scoring overrides plus at most one game bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModeBonuses {
    #[serde(rename = "scoringOverrides", default)]
    pub scoring_overrides: Vec<ScoringOverride>,
    #[serde(rename = "gameBonus", default)]
    pub game_bonus: Option<GameBonus>,
}

/// Instructional copy shown on the mode detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModeInfo {
    #[serde(default)]
    pub overview: String,
    #[serde(rename = "overviewBrief", default)]
    pub overview_brief: String,
    #[serde(rename = "howToPlay", default)]
    pub how_to_play: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// One game mode definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Round count required to complete a game.
    pub rounds: u32,
    pub scoring: ScoringCfg,
    pub start: StartCfg,
    #[serde(default)]
    pub info: ModeInfo,
    #[serde(default)]
    pub bonuses: Option<ModeBonuses>,
}

impl GameMode {
    /// Parse the configured scoring category.
    ///
    /// # Errors
    ///
    /// Returns `UnknownScoringType` for an unrecognized identifier.
    pub fn scoring_category(&self) -> Result<ScoringCategory, GameError> {
        self.scoring.category.parse()
    }

    /// Parse the configured starting pool.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStartingPool` for an unrecognized identifier.
    pub fn starting_pool(&self) -> Result<StartingPool, GameError> {
        self.start.pool.parse()
    }

    /// Scoring override rules, empty when the mode has none.
    #[must_use]
    pub fn scoring_overrides(&self) -> &[ScoringOverride] {
        self.bonuses
            .as_ref()
            .map_or(&[], |b| b.scoring_overrides.as_slice())
    }

    /// The mode's end-of-game bonus, if configured.
    #[must_use]
    pub fn game_bonus(&self) -> Option<&GameBonus> {
        self.bonuses.as_ref().and_then(|b| b.game_bonus.as_ref())
    }
}

/// Ordered list of mode definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModeList(pub Vec<GameMode>);

impl ModeList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Load mode definitions from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid modes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self)
    }

    /// The mode definitions shipped with the crate.
    #[must_use]
    pub fn load_default() -> Self {
        Self::from_json(DEFAULT_MODES_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GameMode> {
        self.0.iter().find(|mode| mode.id == id)
    }

    /// Modes available for play.
    pub fn active(&self) -> impl Iterator<Item = &GameMode> {
        self.0.iter().filter(|mode| mode.active)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameMode> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModeList {
    type Item = &'a GameMode;
    type IntoIter = std::slice::Iter<'a, GameMode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Fixed tuning values shared across the engine.

/// Season queried by the reference-year starting pools.
pub const REFERENCE_YEAR: u16 = 2025;

/// Per-round clock budget for timed games, in seconds.
pub const ROUND_SECONDS: u64 = 60;

/// Point value for flat-scoring target categories (HOF, player-manager).
pub const FLAT_TARGET_POINTS: u32 = 1;

/// Hall of Fame induction category that qualifies a player outright.
pub const HOF_PLAYER_CATEGORY: &str = "Player";

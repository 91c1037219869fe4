//! Engine error taxonomy.
//!
//! Configuration errors (`UnknownScoringType`, `UnknownStartingPool`,
//! `UnknownMode`) and data-integrity errors (`NoEligibleTeams`, `Stats`) are
//! hard failures; late or duplicate UI events are handled as guarded no-ops
//! by the session and never reach this enum.

use thiserror::Error;

/// Errors raised by mode configuration and starting-pool resolution.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown scoring type: {0}")]
    UnknownScoringType(String),
    #[error("unknown starting pool: {0}")]
    UnknownStartingPool(String),
    #[error("unknown game mode: {0}")]
    UnknownMode(String),
    #[error("no eligible starting teams for pool {pool}")]
    NoEligibleTeams { pool: String },
    #[error("statistics store query failed")]
    Stats(#[source] anyhow::Error),
}

impl GameError {
    /// Wrap a statistics-store failure.
    pub fn stats(err: impl Into<anyhow::Error>) -> Self {
        Self::Stats(err.into())
    }
}

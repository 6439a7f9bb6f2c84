//! Error types for nw-roster.

use thiserror::Error;

use crate::select::Duty;

/// Errors from quota distribution over a single squad.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributeError {
    #[error("cannot distribute duty hours across an empty squad")]
    EmptySquad,

    #[error("{remaining} duty hours left over after capping drivers for rest")]
    RestOverflow { remaining: u32 },
}

/// Errors from building a full roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster configuration error: {0}")]
    Config(String),

    #[error("squad {squad}: {source}")]
    Distribute {
        /// 1-based squad position.
        squad: usize,
        #[source]
        source: DistributeError,
    },

    #[error("squad {squad}: no eligible member for {duty} at {time}")]
    NoEligibleMember {
        /// 1-based squad position.
        squad: usize,
        duty:  Duty,
        time:  String,
    },
}

/// Shorthand result type for nw-roster.
pub type RosterResult<T> = Result<T, RosterError>;

//! Errors raised by session reactions and settings loading
//!
//! Duplicate overlap/collision events are not errors; they are no-ops.
//! Everything here is fatal to the session it came from.

use thiserror::Error;

use crate::sim::{EntityId, EntityKind};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// The level palette has no entry for the level being entered
    #[error("no palette entry for level {level} (highest configured index: {max_index:?})")]
    PaletteExhausted { level: u32, max_index: Option<u32> },

    /// Palette entries must be indexed 0, 1, 2, ... with no gaps or repeats
    #[error("palette entry at position {position} has index {index}")]
    PaletteOutOfOrder { position: usize, index: u32 },

    /// Settings parsed but describe an unplayable session
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A reaction named an entity the registry never created
    #[error("entity {id} is not registered")]
    UnknownEntity { id: EntityId },

    /// A reaction named an entity of the wrong kind
    #[error("entity {id} is not a {expected:?}")]
    WrongEntityKind { id: EntityId, expected: EntityKind },

    /// A hazard collision named someone other than the session's player
    #[error("entity {id} is not the session player")]
    UnknownPlayer { id: EntityId },

    /// The session already hit a configuration error and cannot continue
    #[error("session is faulted; start a new session")]
    SessionFaulted,

    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Configuration and invariant errors poison the session; i/o errors don't
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GameError::Settings(_) | GameError::Io(_))
    }
}

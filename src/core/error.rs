//! Structural errors.
//!
//! Only protocol violations surface as errors: bounds breaches, role misuse,
//! and stepping a finished episode. Blocked pushes, malformed rule text, and
//! contradictory properties are all legal game states with silent,
//! deterministic outcomes - they never appear here.

use thiserror::Error;

use super::position::Position;
use crate::objects::TypeKey;

/// Error kinds surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A placement or move targeted a cell outside the grid rectangle.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// A token-role query was made against a non-text type. Programmer
    /// error, not a game condition.
    #[error("type {key:?} is not a text object")]
    NotText { key: TypeKey },

    /// `step` was called after a terminal outcome was latched.
    #[error("episode already ended; call reset() before stepping again")]
    EpisodeEnded,
}

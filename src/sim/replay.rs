//! Episode records: compact, replayable transcripts of finished runs.
//!
//! Because turn resolution is deterministic, a level plus the action list is
//! a complete description of an episode. Records serialize with bincode for
//! storage in training buffers and can be replayed to verify the stored
//! outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameError};
use crate::levels::LevelLayout;
use crate::objects::ObjectRegistry;
use crate::sim::Session;
use crate::turn::Outcome;

/// A finished (or in-progress) episode, captured for storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub level: LevelLayout,
    pub actions: Vec<Action>,
    pub outcome: Outcome,
    pub steps: u32,
}

impl EpisodeRecord {
    /// Capture a session's history so far.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            level: session.layout().clone(),
            actions: session.history().iter().map(|record| record.action).collect(),
            outcome: session.outcome(),
            steps: session.steps(),
        }
    }

    /// Serialize to bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying bincode error on failure.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from bytes produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns the underlying bincode error on malformed input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    /// Re-run the stored actions from the stored level and return the final
    /// outcome.
    ///
    /// Actions past a terminal outcome are ignored, matching what a live
    /// session would have refused to step.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the stored level is malformed.
    pub fn replay(&self, registry: ObjectRegistry) -> Result<Outcome, GameError> {
        let mut session = Session::new(registry, self.level.clone())?;
        for &action in &self.actions {
            match session.step(action) {
                Ok(_) => {}
                Err(GameError::EpisodeEnded) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(session.outcome())
    }
}

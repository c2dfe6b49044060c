//! Object instances - identity-bearing board occupants.

use serde::{Deserialize, Serialize};

use super::definition::TypeKey;
use crate::core::Position;

/// Unique identifier for one object instance.
///
/// Instance ids are allocated by the grid and never reused within a session,
/// so "the same rock" can be tracked through a push chain. Transformation
/// allocates a *new* id: `ROCK IS BABA` destroys the rock instance and
/// creates a baba instance at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A live object on the grid.
///
/// Only `position` mutates during a turn (movement); `id` and `type_key` are
/// fixed for the instance's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInstance {
    /// Stable identity.
    pub id: InstanceId,

    /// The type this instance belongs to.
    pub type_key: TypeKey,

    /// Current cell. Invariant: always matches the cell that lists this id.
    pub position: Position,
}

impl ObjectInstance {
    /// Create an instance.
    #[must_use]
    pub const fn new(id: InstanceId, type_key: TypeKey, position: Position) -> Self {
        Self {
            id,
            type_key,
            position,
        }
    }
}

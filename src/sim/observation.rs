//! Observations: owned snapshots of simulation state.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::grid::Grid;
use crate::objects::{InstanceId, ObjectRegistry, TypeKey};
use crate::rules::RuleSet;
use crate::turn::Outcome;

/// One object as seen in an observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: InstanceId,
    pub type_key: TypeKey,
    pub name: String,
    pub position: Position,
    pub is_text: bool,
}

/// A full snapshot of the simulation after a turn (or reset).
///
/// Observations are owned copies: mutating the session afterwards never
/// changes an observation already handed out, and callers cannot reach the
/// engine's grid through one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub width: u32,
    pub height: u32,
    /// Turns stepped since the last reset.
    pub steps: u32,
    pub outcome: Outcome,
    /// Every object on the board, row-major, ties by instance id.
    pub objects: Vec<ObjectView>,
    /// The rule set the turn was resolved against.
    pub rules: RuleSet,
}

impl Observation {
    pub(crate) fn capture(
        grid: &Grid,
        registry: &ObjectRegistry,
        rules: RuleSet,
        steps: u32,
        outcome: Outcome,
    ) -> Self {
        let objects = grid
            .instances_row_major()
            .into_iter()
            .map(|instance| ObjectView {
                id: instance.id,
                type_key: instance.type_key,
                name: registry.name(instance.type_key).to_string(),
                position: instance.position,
                is_text: registry.is_text(instance.type_key),
            })
            .collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            steps,
            outcome,
            objects,
            rules,
        }
    }

    /// Objects stacked at one position.
    pub fn objects_at(&self, position: Position) -> impl Iterator<Item = &ObjectView> {
        self.objects
            .iter()
            .filter(move |view| view.position == position)
    }

    /// Every object of one type.
    pub fn find(&self, type_key: TypeKey) -> impl Iterator<Item = &ObjectView> {
        self.objects
            .iter()
            .filter(move |view| view.type_key == type_key)
    }

    /// Flat `height x width x depth` tensor of type keys for agent callers.
    ///
    /// Cells encode `type_key + 1` so that 0 means empty; stacks deeper than
    /// `depth` are truncated in instance-id order.
    #[must_use]
    pub fn type_tensor(&self, depth: usize) -> Vec<u16> {
        let mut tensor = vec![0u16; self.height as usize * self.width as usize * depth];
        let mut fill = vec![0usize; self.height as usize * self.width as usize];

        for view in &self.objects {
            let cell = view.position.row as usize * self.width as usize + view.position.col as usize;
            if fill[cell] < depth {
                tensor[cell * depth + fill[cell]] = view.type_key.raw() + 1;
                fill[cell] += 1;
            }
        }
        tensor
    }
}

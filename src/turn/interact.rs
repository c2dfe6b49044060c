//! The interaction pass: SINK, HOT/MELT, DEFEAT.
//!
//! Per occupied cell, in row-major order:
//! - a SINK instance sharing its cell with anything destroys the whole cell,
//!   itself included;
//! - a HOT instance destroys co-located MELT instances;
//! - a DEFEAT instance destroys co-located YOU instances (only those).

use crate::core::Position;
use crate::grid::Grid;
use crate::objects::{InstanceId, Property};
use crate::rules::RuleSet;

/// Run the interaction pass.
pub(crate) fn run_interactions(grid: &mut Grid, rules: &RuleSet) {
    let cells: Vec<Position> = grid.occupied_cells().map(|(position, _)| position).collect();

    for position in cells {
        let ids: Vec<InstanceId> = grid.ids_at(position).to_vec();
        if ids.len() >= 2 && any_has(grid, rules, &ids, Property::Sink) {
            for id in ids {
                grid.despawn(id);
            }
            continue;
        }

        if any_has(grid, rules, &ids, Property::Hot) {
            for id in with_property(grid, rules, &ids, Property::Melt) {
                grid.despawn(id);
            }
        }

        let ids: Vec<InstanceId> = grid.ids_at(position).to_vec();
        if any_has(grid, rules, &ids, Property::Defeat) {
            for id in with_property(grid, rules, &ids, Property::You) {
                grid.despawn(id);
            }
        }
    }
}

fn any_has(grid: &Grid, rules: &RuleSet, ids: &[InstanceId], property: Property) -> bool {
    ids.iter()
        .any(|id| rules.has_property(grid.get(*id).type_key, property))
}

fn with_property(
    grid: &Grid,
    rules: &RuleSet,
    ids: &[InstanceId],
    property: Property,
) -> Vec<InstanceId> {
    ids.iter()
        .copied()
        .filter(|id| rules.has_property(grid.get(*id).type_key, property))
        .collect()
}

//! The transformation phase: `NOUN IS NOUN` replacements.
//!
//! Transformation is replace-not-mutate: the old instance is destroyed and a
//! new one spawned at the same position, so instance identity stays clean
//! for push-chain tracking. Text never transforms.

use crate::core::Position;
use crate::grid::Grid;
use crate::objects::{ObjectRegistry, TypeKey};
use crate::rules::RuleSet;

/// Run the transformation phase.
///
/// Every non-text instance whose type has `becomes-type` targets is replaced
/// with the *first* target in rule discovery order (row scans before column
/// scans) - a documented arbitrary tie-break, not a semantic guarantee.
/// A self-target (`ROCK IS ROCK`) as the first target is a no-op.
pub(crate) fn run_transformations(grid: &mut Grid, registry: &ObjectRegistry, rules: &RuleSet) {
    // Collect first: replacements must not feed new instances back into this
    // turn's pass.
    let mut pending: Vec<(crate::objects::InstanceId, TypeKey, Position)> = Vec::new();

    for instance in grid.instances_row_major() {
        if registry.is_text(instance.type_key) {
            continue;
        }
        let targets = rules.transformations_for(instance.type_key);
        if let Some(&target) = targets.first() {
            if target != instance.type_key {
                pending.push((instance.id, target, instance.position));
            }
        }
    }

    for (id, target, position) in pending {
        grid.despawn(id);
        grid.spawn(target, position)
            .expect("transformation keeps a valid position");
    }
}

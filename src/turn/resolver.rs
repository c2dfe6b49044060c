//! The turn resolver: five phases, fixed order.

use serde::{Deserialize, Serialize};

use super::{interact, movement, transform};
use crate::core::Action;
use crate::grid::Grid;
use crate::objects::{ObjectRegistry, Property};
use crate::rules::{scan_rules, RuleSet};

/// The result of one resolved turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The episode continues.
    #[default]
    Ongoing,
    /// A YOU instance shares a cell with a WIN instance.
    Won,
    /// No YOU instance remains on the board.
    Lost,
}

impl Outcome {
    /// Won or lost?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Executes one discrete turn against a grid.
///
/// The resolver is stateless between turns; everything it needs is re-derived
/// from the board. Blocked pushes are silent no-ops - the only observable is
/// an unchanged grid.
#[derive(Clone, Copy, Debug)]
pub struct TurnResolver<'a> {
    registry: &'a ObjectRegistry,
}

impl<'a> TurnResolver<'a> {
    /// Create a resolver over a registry.
    #[must_use]
    pub fn new(registry: &'a ObjectRegistry) -> Self {
        Self { registry }
    }

    /// Resolve one turn, mutating the grid in place.
    ///
    /// Returns the post-movement rule set (the one interactions and the
    /// terminal check were evaluated against) and the turn outcome.
    pub fn resolve(&self, grid: &mut Grid, action: Action) -> (RuleSet, Outcome) {
        // Phase 1: rules as the board stands before movement.
        let rules = scan_rules(grid, self.registry);

        // Phase 2: movement; Wait skips it entirely.
        if let Some(direction) = action.direction() {
            movement::run_movement(grid, self.registry, &rules, direction);
        }

        // Phase 3: rescan - movement may have formed or broken rules - then
        // apply transformations.
        let rules = scan_rules(grid, self.registry);
        transform::run_transformations(grid, self.registry, &rules);

        // Phase 4: cell interactions.
        interact::run_interactions(grid, &rules);

        // Phase 5: terminal check, win before lose.
        let outcome = self.terminal(grid, &rules);
        (rules, outcome)
    }

    /// Win iff a YOU instance shares a cell with a distinct WIN instance;
    /// otherwise lose iff no YOU instance remains. Win is checked first, so
    /// a turn that triggers both is a win (documented precedence).
    fn terminal(&self, grid: &Grid, rules: &RuleSet) -> Outcome {
        for (_, ids) in grid.occupied_cells() {
            if ids.len() < 2 {
                continue;
            }
            for you in ids {
                if !rules.has_property(grid.get(*you).type_key, Property::You) {
                    continue;
                }
                let touching_win = ids.iter().any(|win| {
                    win != you && rules.has_property(grid.get(*win).type_key, Property::Win)
                });
                if touching_win {
                    return Outcome::Won;
                }
            }
        }

        let any_you = rules
            .subjects_with_property(Property::You)
            .into_iter()
            .any(|type_key| grid.find_by_type(type_key).next().is_some());
        if any_you {
            Outcome::Ongoing
        } else {
            Outcome::Lost
        }
    }
}

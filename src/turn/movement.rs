//! The movement phase: YOU movers and push chains.
//!
//! Every instance whose type holds YOU attempts one step in the requested
//! direction. Movers are collected up front in ascending row-major order
//! (ties by instance id) and then resolved one at a time against the live
//! grid, so an earlier mover's push can legally clear - or block - a later
//! mover's path in the same phase.

use crate::core::{Direction, Position};
use crate::grid::Grid;
use crate::objects::{InstanceId, ObjectInstance, ObjectRegistry, Property};
use crate::rules::RuleSet;

/// Run the movement phase.
pub(crate) fn run_movement(
    grid: &mut Grid,
    registry: &ObjectRegistry,
    rules: &RuleSet,
    direction: Direction,
) {
    let mut movers: Vec<(Position, InstanceId)> = rules
        .subjects_with_property(Property::You)
        .into_iter()
        .flat_map(|type_key| {
            grid.find_by_type(type_key)
                .map(|instance| (instance.position, instance.id))
                .collect::<Vec<_>>()
        })
        .collect();
    movers.sort();

    for (_, mover) in movers {
        // A mover may itself have been pushed by an earlier mover; its
        // current position is what counts.
        if grid.instance(mover).is_some() {
            try_move(grid, registry, rules, mover, direction);
        }
    }
}

/// Attempt to move one instance, pushing whatever stands in the way.
///
/// Walks cells from the mover's target onward: a blocking occupant (STOP
/// without PUSH) cancels the whole move; a pushable occupant extends the
/// chain; anything else - an empty cell or passive occupants - ends the walk
/// and the move succeeds, overlapping passive occupants where they stand.
/// Reaching the boundary before the walk ends cancels the move.
///
/// On success, pushable occupants shift one cell starting from the farthest
/// chain cell so no destination is transiently double-booked, then the mover
/// steps in. Returns whether anything moved; a blocked chain is a silent
/// no-op.
pub(crate) fn try_move(
    grid: &mut Grid,
    registry: &ObjectRegistry,
    rules: &RuleSet,
    mover: InstanceId,
    direction: Direction,
) -> bool {
    let start = grid.get(mover).position;

    let mut chain: Vec<Position> = Vec::new();
    let mut cursor = start.step(direction);
    loop {
        if !grid.in_bounds(cursor) {
            return false;
        }
        let mut any_pushable = false;
        for occupant in grid.objects_at(cursor) {
            if blocks(registry, rules, occupant) {
                return false;
            }
            any_pushable |= pushable(registry, rules, occupant);
        }
        if !any_pushable {
            break;
        }
        chain.push(cursor);
        cursor = cursor.step(direction);
    }

    // Farthest cell first; every destination is in bounds because the walk
    // terminated inside the grid.
    for cell in chain.iter().rev() {
        let pushed: Vec<InstanceId> = grid
            .ids_at(*cell)
            .iter()
            .copied()
            .filter(|id| pushable(registry, rules, grid.get(*id)))
            .collect();
        let destination = cell.step(direction);
        for id in pushed {
            grid.move_to(id, destination)
                .expect("push destination in bounds");
        }
    }
    grid.move_to(mover, start.step(direction))
        .expect("move destination in bounds");
    true
}

/// Text tokens are intrinsically pushable; everything else needs PUSH.
fn pushable(registry: &ObjectRegistry, rules: &RuleSet, instance: &ObjectInstance) -> bool {
    registry.is_text(instance.type_key) || rules.has_property(instance.type_key, Property::Push)
}

/// STOP blocks unless the same type also holds PUSH.
fn blocks(registry: &ObjectRegistry, rules: &RuleSet, instance: &ObjectInstance) -> bool {
    !registry.is_text(instance.type_key)
        && rules.has_property(instance.type_key, Property::Stop)
        && !rules.has_property(instance.type_key, Property::Push)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Catalog;
    use crate::rules::Rule;

    fn rules_with(rules: &[Rule]) -> RuleSet {
        rules.iter().copied().collect()
    }

    #[test]
    fn test_move_into_empty_cell() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 5);
        let baba = grid.spawn(c.baba, Position::new(2, 2)).unwrap();
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(2, 3));
    }

    #[test]
    fn test_boundary_blocks() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 5);
        let baba = grid.spawn(c.baba, Position::new(0, 0)).unwrap();
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        assert!(!try_move(&mut grid, &registry, &rules, baba, Direction::Up));
        assert_eq!(grid.get(baba).position, Position::new(0, 0));
    }

    #[test]
    fn test_push_single_rock() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 5);
        let baba = grid.spawn(c.baba, Position::new(2, 1)).unwrap();
        let rock = grid.spawn(c.rock, Position::new(2, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.rock, Property::Push),
        ]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(2, 2));
        assert_eq!(grid.get(rock).position, Position::new(2, 3));
    }

    #[test]
    fn test_push_chain_of_rocks() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(6, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 0)).unwrap();
        let rock_a = grid.spawn(c.rock, Position::new(1, 1)).unwrap();
        let rock_b = grid.spawn(c.rock, Position::new(1, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.rock, Property::Push),
        ]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(1, 1));
        assert_eq!(grid.get(rock_a).position, Position::new(1, 2));
        assert_eq!(grid.get(rock_b).position, Position::new(1, 3));
    }

    #[test]
    fn test_stop_blocks_chain() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(6, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 0)).unwrap();
        let rock = grid.spawn(c.rock, Position::new(1, 1)).unwrap();
        let wall = grid.spawn(c.wall, Position::new(1, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.rock, Property::Push),
            Rule::property(c.wall, Property::Stop),
        ]);

        assert!(!try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(1, 0));
        assert_eq!(grid.get(rock).position, Position::new(1, 1));
        assert_eq!(grid.get(wall).position, Position::new(1, 2));
    }

    #[test]
    fn test_push_chain_blocked_by_boundary() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(3, 3);
        let baba = grid.spawn(c.baba, Position::new(0, 1)).unwrap();
        let rock = grid.spawn(c.rock, Position::new(0, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.rock, Property::Push),
        ]);

        assert!(!try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(0, 1));
        assert_eq!(grid.get(rock).position, Position::new(0, 2));
    }

    #[test]
    fn test_stop_with_push_is_pushable() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 1)).unwrap();
        let wall = grid.spawn(c.wall, Position::new(1, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.wall, Property::Stop),
            Rule::property(c.wall, Property::Push),
        ]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(wall).position, Position::new(1, 3));
    }

    #[test]
    fn test_text_is_pushable_without_rules() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 1)).unwrap();
        let token = grid.spawn(c.win_text, Position::new(1, 2)).unwrap();
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(token).position, Position::new(1, 3));
    }

    #[test]
    fn test_passive_occupant_is_overlapped_not_pushed() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 1)).unwrap();
        let flag = grid.spawn(c.flag, Position::new(1, 2)).unwrap();
        // Flag holds no property: walking into it means sharing its cell.
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        assert_eq!(grid.get(baba).position, Position::new(1, 2));
        assert_eq!(grid.get(flag).position, Position::new(1, 2));
    }

    #[test]
    fn test_chain_ends_on_passive_cell() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(5, 3);
        let baba = grid.spawn(c.baba, Position::new(1, 0)).unwrap();
        let rock = grid.spawn(c.rock, Position::new(1, 1)).unwrap();
        let flag = grid.spawn(c.flag, Position::new(1, 2)).unwrap();
        let rules = rules_with(&[
            Rule::property(c.baba, Property::You),
            Rule::property(c.rock, Property::Push),
        ]);

        assert!(try_move(&mut grid, &registry, &rules, baba, Direction::Right));
        // The rock lands on the flag; the flag stays put.
        assert_eq!(grid.get(rock).position, Position::new(1, 2));
        assert_eq!(grid.get(flag).position, Position::new(1, 2));
        assert_eq!(grid.get(baba).position, Position::new(1, 1));
    }

    #[test]
    fn test_movers_resolve_in_row_major_order() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(4, 3);
        // Two YOU babas in one column moving right; the upper one goes first.
        let upper = grid.spawn(c.baba, Position::new(0, 0)).unwrap();
        let lower = grid.spawn(c.baba, Position::new(1, 0)).unwrap();
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        run_movement(&mut grid, &registry, &rules, Direction::Right);

        assert_eq!(grid.get(upper).position, Position::new(0, 1));
        assert_eq!(grid.get(lower).position, Position::new(1, 1));
    }

    #[test]
    fn test_earlier_mover_clears_path_for_later() {
        let (registry, c) = Catalog::standard();
        let mut grid = Grid::new(3, 4);
        // Column of two YOU babas moving up: the upper clears the cell the
        // lower then enters.
        let upper = grid.spawn(c.baba, Position::new(1, 1)).unwrap();
        let lower = grid.spawn(c.baba, Position::new(2, 1)).unwrap();
        let rules = rules_with(&[Rule::property(c.baba, Property::You)]);

        run_movement(&mut grid, &registry, &rules, Direction::Up);

        assert_eq!(grid.get(upper).position, Position::new(0, 1));
        assert_eq!(grid.get(lower).position, Position::new(1, 1));
    }
}

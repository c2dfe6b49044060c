//! Grid storage and placement primitives.
//!
//! The grid owns every [`ObjectInstance`] for the duration of a turn. Cells
//! stack: several instances may share a position, and overlap is semantically
//! meaningful (that is how WIN, SINK, and DEFEAT contacts happen).
//!
//! ## Invariants
//!
//! - An instance id appears in exactly one cell.
//! - `instance.position` always matches the cell listing the id.
//! - No operation places or moves an instance outside the rectangle; such
//!   requests fail with [`GameError::OutOfBounds`] and mutate nothing.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameError, Position};
use crate::objects::{InstanceId, ObjectInstance, TypeKey};

/// Per-cell instance stack. Four covers nearly every real board; deeper
/// stacks spill to the heap.
type CellStack = SmallVec<[InstanceId; 4]>;

/// A fixed `width x height` board of stacked object instances.
///
/// All operations are O(1) or O(instances at the touched cell); lookups by
/// type go through a per-type index rather than a board scan.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellStack>,
    instances: FxHashMap<InstanceId, ObjectInstance>,
    by_type: FxHashMap<TypeKey, CellStack>,
    next_id: u32,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must have positive area");
        Self {
            width,
            height,
            cells: vec![CellStack::new(); (width * height) as usize],
            instances: FxHashMap::default(),
            by_type: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Does the rectangle contain `position`?
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as u32) < self.height
            && (position.col as u32) < self.width
    }

    fn cell_index(&self, position: Position) -> usize {
        debug_assert!(self.in_bounds(position));
        position.row as usize * self.width as usize + position.col as usize
    }

    fn bounds_check(&self, position: Position) -> Result<(), GameError> {
        if self.in_bounds(position) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    // === Placement ===

    /// Create a new instance of `type_key` at `position`.
    ///
    /// Fails with [`GameError::OutOfBounds`] outside the rectangle.
    pub fn spawn(&mut self, type_key: TypeKey, position: Position) -> Result<InstanceId, GameError> {
        self.bounds_check(position)?;

        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let index = self.cell_index(position);
        self.cells[index].push(id);
        self.by_type.entry(type_key).or_default().push(id);
        self.instances
            .insert(id, ObjectInstance::new(id, type_key, position));
        Ok(id)
    }

    /// Remove an instance from the board, returning its final record.
    ///
    /// Returns `None` if the id is not on the grid (already destroyed).
    pub fn despawn(&mut self, id: InstanceId) -> Option<ObjectInstance> {
        let instance = self.instances.remove(&id)?;

        let index = self.cell_index(instance.position);
        self.cells[index].retain(|other| *other != id);
        if let Some(ids) = self.by_type.get_mut(&instance.type_key) {
            ids.retain(|other| *other != id);
        }
        Some(instance)
    }

    /// Move an instance to a new cell.
    ///
    /// Fails with [`GameError::OutOfBounds`] outside the rectangle; the grid
    /// is unchanged on failure. Callers pre-check pushability - the grid
    /// knows nothing about STOP or PUSH.
    ///
    /// Panics if the id is not on the grid.
    pub fn move_to(&mut self, id: InstanceId, position: Position) -> Result<(), GameError> {
        self.bounds_check(position)?;

        let instance = self.instances.get_mut(&id).expect("instance not on grid");
        let old = instance.position;
        instance.position = position;

        let width = self.width as usize;
        let old_index = old.row as usize * width + old.col as usize;
        let new_index = position.row as usize * width + position.col as usize;
        self.cells[old_index].retain(|other| *other != id);
        self.cells[new_index].push(id);
        Ok(())
    }

    // === Queries ===

    /// Instance ids stacked at a cell, in insertion order.
    ///
    /// Out-of-bounds positions hold nothing.
    #[must_use]
    pub fn ids_at(&self, position: Position) -> &[InstanceId] {
        if self.in_bounds(position) {
            &self.cells[self.cell_index(position)]
        } else {
            &[]
        }
    }

    /// Instances stacked at a cell.
    pub fn objects_at(&self, position: Position) -> impl Iterator<Item = &ObjectInstance> {
        self.ids_at(position).iter().map(move |id| self.get(*id))
    }

    /// Look up an instance by id.
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&ObjectInstance> {
        self.instances.get(&id)
    }

    /// Look up an instance known to be on the grid.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> &ObjectInstance {
        self.instances.get(&id).expect("instance not on grid")
    }

    /// Every instance of a type, unordered.
    pub fn find_by_type(&self, type_key: TypeKey) -> impl Iterator<Item = &ObjectInstance> {
        self.by_type
            .get(&type_key)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |id| self.get(*id))
    }

    /// All instances, sorted row-major then by instance id.
    ///
    /// This is the canonical deterministic iteration order for turn phases.
    #[must_use]
    pub fn instances_row_major(&self) -> Vec<ObjectInstance> {
        let mut all: Vec<ObjectInstance> = self.instances.values().copied().collect();
        all.sort_by_key(|instance| (instance.position, instance.id));
        all
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Position, &[InstanceId])> {
        self.cells.iter().enumerate().filter_map(move |(index, ids)| {
            if ids.is_empty() {
                None
            } else {
                let row = (index / self.width as usize) as i32;
                let col = (index % self.width as usize) as i32;
                Some((Position::new(row, col), ids.as_slice()))
            }
        })
    }

    /// Number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: u16) -> TypeKey {
        TypeKey::new(raw)
    }

    #[test]
    fn test_spawn_and_query() {
        let mut grid = Grid::new(5, 4);
        let pos = Position::new(1, 2);
        let id = grid.spawn(key(1), pos).unwrap();

        assert_eq!(grid.ids_at(pos), &[id]);
        assert_eq!(grid.get(id).position, pos);
        assert_eq!(grid.get(id).type_key, key(1));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_spawn_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        let err = grid.spawn(key(1), Position::new(3, 0)).unwrap_err();

        assert_eq!(
            err,
            GameError::OutOfBounds {
                position: Position::new(3, 0),
                width: 3,
                height: 3,
            }
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stacking() {
        let mut grid = Grid::new(3, 3);
        let pos = Position::new(0, 0);
        let a = grid.spawn(key(1), pos).unwrap();
        let b = grid.spawn(key(2), pos).unwrap();

        assert_eq!(grid.ids_at(pos), &[a, b]);
    }

    #[test]
    fn test_move_updates_both_sides() {
        let mut grid = Grid::new(4, 4);
        let from = Position::new(2, 2);
        let to = Position::new(2, 3);
        let id = grid.spawn(key(1), from).unwrap();

        grid.move_to(id, to).unwrap();

        assert!(grid.ids_at(from).is_empty());
        assert_eq!(grid.ids_at(to), &[id]);
        assert_eq!(grid.get(id).position, to);
    }

    #[test]
    fn test_move_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(4, 4);
        let from = Position::new(0, 0);
        let id = grid.spawn(key(1), from).unwrap();

        let result = grid.move_to(id, Position::new(0, -1));

        assert!(result.is_err());
        assert_eq!(grid.ids_at(from), &[id]);
        assert_eq!(grid.get(id).position, from);
    }

    #[test]
    fn test_despawn() {
        let mut grid = Grid::new(3, 3);
        let pos = Position::new(1, 1);
        let id = grid.spawn(key(1), pos).unwrap();

        let removed = grid.despawn(id).unwrap();

        assert_eq!(removed.position, pos);
        assert!(grid.ids_at(pos).is_empty());
        assert!(grid.instance(id).is_none());
        assert!(grid.despawn(id).is_none()); // already gone
    }

    #[test]
    fn test_ids_never_reused() {
        let mut grid = Grid::new(3, 3);
        let a = grid.spawn(key(1), Position::new(0, 0)).unwrap();
        grid.despawn(a);
        let b = grid.spawn(key(1), Position::new(0, 0)).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_find_by_type() {
        let mut grid = Grid::new(4, 4);
        let a = grid.spawn(key(1), Position::new(0, 0)).unwrap();
        let _ = grid.spawn(key(2), Position::new(1, 1)).unwrap();
        let c = grid.spawn(key(1), Position::new(2, 2)).unwrap();

        let mut found: Vec<InstanceId> = grid.find_by_type(key(1)).map(|i| i.id).collect();
        found.sort();
        assert_eq!(found, vec![a, c]);
        assert_eq!(grid.find_by_type(key(9)).count(), 0);
    }

    #[test]
    fn test_occupied_cells_row_major() {
        let mut grid = Grid::new(3, 3);
        grid.spawn(key(1), Position::new(2, 0)).unwrap();
        grid.spawn(key(1), Position::new(0, 1)).unwrap();
        grid.spawn(key(1), Position::new(0, 0)).unwrap();

        let order: Vec<Position> = grid.occupied_cells().map(|(pos, _)| pos).collect();
        assert_eq!(
            order,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_instances_row_major_breaks_ties_by_id() {
        let mut grid = Grid::new(3, 3);
        let pos = Position::new(1, 1);
        let a = grid.spawn(key(1), pos).unwrap();
        let b = grid.spawn(key(2), pos).unwrap();

        let order: Vec<InstanceId> = grid
            .instances_row_major()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_out_of_bounds_cell_is_empty() {
        let grid = Grid::new(2, 2);
        assert!(grid.ids_at(Position::new(-1, 0)).is_empty());
        assert!(grid.ids_at(Position::new(0, 5)).is_empty());
    }
}

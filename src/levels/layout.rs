//! Placement records and level layouts.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::objects::TypeKey;

/// One object to create at grid construction time.
///
/// `x`/`y` follow the loader contract (column, row); `layer` orders stacking
/// within a cell - lower layers are spawned first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub layer: u8,
    pub type_key: TypeKey,
}

impl Placement {
    /// The grid position of this placement.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.y, self.x)
    }
}

/// A decoded level: dimensions plus the ordered placement list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl LevelLayout {
    /// Create an empty layout.
    #[must_use]
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Add a placement on layer 0 (builder style).
    #[must_use]
    pub fn with(mut self, x: i32, y: i32, type_key: TypeKey) -> Self {
        self.place(x, y, 0, type_key);
        self
    }

    /// Add a run of placements left-to-right starting at (x, y).
    ///
    /// Convenient for laying out rule text.
    #[must_use]
    pub fn with_row(mut self, x: i32, y: i32, type_keys: &[TypeKey]) -> Self {
        for (offset, type_key) in type_keys.iter().enumerate() {
            self.place(x + offset as i32, y, 0, *type_key);
        }
        self
    }

    /// Add a placement.
    pub fn place(&mut self, x: i32, y: i32, layer: u8, type_key: TypeKey) {
        self.placements.push(Placement { x, y, layer, type_key });
    }

    /// Placements in spawn order: stable-sorted by layer, list order within
    /// a layer.
    #[must_use]
    pub fn spawn_order(&self) -> Vec<Placement> {
        let mut ordered = self.placements.clone();
        ordered.sort_by_key(|placement| placement.layer);
        ordered
    }
}

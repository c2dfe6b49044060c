//! Built-in demo layouts over the standard catalog.

use super::layout::LevelLayout;
use crate::objects::Catalog;

/// The 12x12 starter puzzle: walk baba to the flag.
///
/// Active rules: `BABA IS YOU`, `FLAG IS WIN`.
#[must_use]
pub fn tutorial(catalog: &Catalog) -> LevelLayout {
    LevelLayout::new("tutorial", 12, 12)
        .with(1, 1, catalog.baba)
        .with_row(1, 3, &[catalog.baba_text, catalog.is_text, catalog.you_text])
        .with(8, 8, catalog.flag)
        .with_row(7, 1, &[catalog.flag_text, catalog.is_text, catalog.win_text])
}

/// A 10x8 pond puzzle: a rock must be sacrificed to the water.
///
/// Active rules: `BABA IS YOU`, `FLAG IS WIN`, `ROCK IS PUSH`,
/// `WATER IS SINK`. A column of water separates baba from the flag; pushing
/// the rock in sinks one water cell and opens the crossing.
#[must_use]
pub fn pond(catalog: &Catalog) -> LevelLayout {
    let mut layout = LevelLayout::new("pond", 10, 8)
        .with(1, 4, catalog.baba)
        .with(3, 4, catalog.rock)
        .with(8, 4, catalog.flag)
        .with_row(0, 0, &[catalog.baba_text, catalog.is_text, catalog.you_text])
        .with_row(0, 7, &[catalog.rock_text, catalog.is_text, catalog.push_text])
        .with_row(4, 0, &[catalog.water_text, catalog.is_text, catalog.sink_text])
        .with_row(4, 7, &[catalog.flag_text, catalog.is_text, catalog.win_text]);
    for y in 1..7 {
        layout.place(5, y, 0, catalog.water);
    }
    layout
}

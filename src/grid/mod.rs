//! The board: a fixed rectangle of cells holding stacked object instances.

mod board;

pub use board::Grid;

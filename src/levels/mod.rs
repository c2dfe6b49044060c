//! Level layouts: the decoded placement lists a session is built from.
//!
//! The engine performs no file decoding; an external loader hands over an
//! already-decoded placement list and the grid dimensions. The built-in
//! layouts exist for tests, docs, and the Python demo path.

pub mod builtin;
mod layout;

pub use layout::{LevelLayout, Placement};

//! Core vocabulary: positions, directions, actions, and structural errors.
//!
//! Everything here is a plain value type shared by every other module.
//! Game behavior lives elsewhere - `core` carries no rules knowledge.

mod action;
mod error;
mod position;

pub use action::{Action, ParseActionError};
pub use error::GameError;
pub use position::{Direction, Position};

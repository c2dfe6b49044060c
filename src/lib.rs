//! # rulegrid
//!
//! A deterministic rule-rewriting grid puzzle engine optimized for RL
//! training.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Board State**: No behavior is hardcoded on objects. Every
//!    property (YOU, WIN, STOP, ...) is granted by text arrangements on the
//!    board, re-derived from scratch each turn. Push the text apart and the
//!    behavior vanishes.
//!
//! 2. **Deterministic Turns**: A level plus an action list fully determines
//!    an episode. No randomness anywhere in resolution, so episodes replay
//!    byte-for-byte.
//!
//! 3. **Owned Observations**: Sessions hand out snapshot copies, never live
//!    handles. Parallel rollouts share nothing mutable.
//!
//! ## Architecture
//!
//! A turn runs in five fixed phases: rule refresh, movement, transformation,
//! interaction, terminal check. Phases 2-3 each rescan the board, so movement
//! can form or break rules that the same turn then acts on.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, actions, structural errors
//! - `objects`: Type definitions, text tokens, instances, the registry
//! - `grid`: The board and its stacked-cell instance index
//! - `rules`: Token scanning and the derived rule set
//! - `turn`: The five-phase turn resolver
//! - `levels`: Placement lists and built-in demo layouts
//! - `sim`: Sessions, observations, episode records
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod grid;
pub mod levels;
pub mod objects;
pub mod rules;
pub mod sim;
pub mod turn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, Direction, GameError, ParseActionError, Position};

pub use crate::objects::{
    Catalog, DefKind, InstanceId, ObjectDef, ObjectInstance, ObjectRegistry, Property, Token,
    TokenRole, TypeKey,
};

pub use crate::grid::Grid;

pub use crate::rules::{scan_rules, Complement, Rule, RuleSet};

pub use crate::turn::{Outcome, TurnResolver};

pub use crate::levels::{LevelLayout, Placement};

pub use crate::sim::{EpisodeRecord, ObjectView, Observation, Session, TurnRecord};

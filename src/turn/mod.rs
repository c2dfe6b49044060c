//! Turn resolution: one discrete game turn against the freshly derived rules.
//!
//! Fixed phase order, no phase re-entrant:
//!
//! 1. Rule refresh (scan the pre-movement board)
//! 2. Movement (YOU movers, push chains)
//! 3. Transformation (rescan, then `NOUN IS NOUN` replacements)
//! 4. Interaction pass (SINK, HOT/MELT, DEFEAT)
//! 5. Terminal check (win before lose)

mod interact;
mod movement;
mod resolver;
mod transform;

pub use resolver::{Outcome, TurnResolver};

//! The simulation façade: the stepping interface external callers consume.
//!
//! A [`Session`] owns one grid exclusively; every `step` runs a whole turn to
//! completion and hands back an owned [`Observation`] snapshot, never a live
//! handle. Independent sessions share no mutable state, so batched
//! evaluation parallelizes trivially at this layer.

mod observation;
mod replay;
mod session;

pub use observation::{ObjectView, Observation};
pub use replay::EpisodeRecord;
pub use session::{Session, TurnRecord};

//! Python bindings for the rulegrid puzzle engine.
//!
//! This module provides PyO3 bindings for training agents against the grid
//! environment through a gym-style reset/step interface.
//!
//! # Quick Start
//!
//! ```python
//! import rulegrid
//!
//! env = rulegrid.Session("tutorial")
//! obs = env.reset()
//!
//! obs, reward, done, info = env.step("right")
//! if done:
//!     print(info["outcome"], env.active_rules())
//! ```

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Action, GameError};
use crate::levels::{builtin, LevelLayout};
use crate::objects::Catalog;
use crate::sim::{EpisodeRecord, Observation, Session};
use crate::turn::Outcome;

/// Channels per cell in the observation tensor.
const TENSOR_DEPTH: usize = 4;

fn builtin_layout(name: &str, catalog: &Catalog) -> PyResult<LevelLayout> {
    match name {
        "tutorial" => Ok(builtin::tutorial(catalog)),
        "pond" => Ok(builtin::pond(catalog)),
        other => Err(PyValueError::new_err(format!(
            "unknown level '{other}' (expected 'tutorial' or 'pond')"
        ))),
    }
}

fn outcome_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ongoing => "ongoing",
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    }
}

fn reward(outcome: Outcome) -> f32 {
    match outcome {
        Outcome::Ongoing => 0.0,
        Outcome::Won => 1.0,
        Outcome::Lost => -1.0,
    }
}

/// Python wrapper for a running episode.
///
/// Follows the gym convention: `reset` returns the initial state tensor,
/// `step` returns `(state, reward, done, info)`.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Create a session over a built-in level.
    ///
    /// # Arguments
    /// - level: "tutorial" or "pond"
    #[new]
    #[pyo3(signature = (level = "tutorial"))]
    fn new(level: &str) -> PyResult<Self> {
        let (registry, catalog) = Catalog::standard();
        let layout = builtin_layout(level, &catalog)?;
        let session = Session::new(registry, layout)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self { session })
    }

    /// Start a fresh episode and return the initial state tensor.
    fn reset<'py>(&mut self, py: Python<'py>) -> Bound<'py, PyArray1<u16>> {
        let observation = self.session.reset();
        tensor(py, &observation)
    }

    /// Resolve one turn.
    ///
    /// # Arguments
    /// - action: "up", "down", "left", "right" or "wait"
    ///
    /// Returns `(state, reward, done, info)` where info carries the outcome
    /// string and the step counter.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: &str,
    ) -> PyResult<(Bound<'py, PyArray1<u16>>, f32, bool, Bound<'py, PyDict>)> {
        let action: Action = action
            .parse()
            .map_err(|err: crate::core::ParseActionError| PyValueError::new_err(err.to_string()))?;

        let (observation, outcome) = self.session.step(action).map_err(|err| match err {
            GameError::EpisodeEnded => {
                PyRuntimeError::new_err("episode has ended; call reset() first")
            }
            other => PyRuntimeError::new_err(other.to_string()),
        })?;

        let info = PyDict::new_bound(py);
        info.set_item("outcome", outcome_str(outcome))?;
        info.set_item("steps", observation.steps)?;

        Ok((
            tensor(py, &observation),
            reward(outcome),
            outcome.is_terminal(),
            info,
        ))
    }

    /// Board width in cells.
    #[getter]
    fn width(&self) -> u32 {
        self.session.layout().width
    }

    /// Board height in cells.
    #[getter]
    fn height(&self) -> u32 {
        self.session.layout().height
    }

    /// Turns stepped since the last reset.
    #[getter]
    fn steps(&self) -> u32 {
        self.session.steps()
    }

    /// The rules active as of the last turn, as readable strings.
    fn active_rules(&self) -> Vec<String> {
        self.session.rules().describe(self.session.registry())
    }

    /// Serialize the episode so far with bincode.
    fn episode_bytes(&self) -> PyResult<Vec<u8>> {
        EpisodeRecord::from_session(&self.session)
            .to_bytes()
            .map_err(|err| PyRuntimeError::new_err(err.to_string()))
    }
}

/// Replay a serialized episode and return the final outcome string.
#[pyfunction]
fn replay_episode(bytes: &[u8]) -> PyResult<String> {
    let record = EpisodeRecord::from_bytes(bytes)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    let (registry, _) = Catalog::standard();
    let outcome = record
        .replay(registry)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(outcome_str(outcome).to_string())
}

fn tensor<'py>(py: Python<'py>, observation: &Observation) -> Bound<'py, PyArray1<u16>> {
    PyArray1::from_slice_bound(py, &observation.type_tensor(TENSOR_DEPTH))
}

/// rulegrid: a rule-rewriting grid puzzle engine for agent training.
///
/// This module provides:
/// - A gym-style Session over the built-in levels
/// - Flat uint16 state tensors (height x width x 4, 0 = empty)
/// - Episode serialization and deterministic replay
#[pymodule]
fn rulegrid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(replay_episode, m)?)?;
    Ok(())
}

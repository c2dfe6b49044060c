//! Sessions: the reset/step loop around the turn resolver.
//!
//! A [`Session`] owns a level layout plus the live grid built from it and
//! drives complete episodes. It is the surface an agent trains against:
//! `reset` rebuilds the board from the layout, `step` resolves one turn and
//! returns a fresh [`Observation`]. Once an episode reaches a terminal
//! outcome, further steps are rejected until the next reset.

use im::Vector;

use crate::core::{Action, GameError};
use crate::grid::Grid;
use crate::levels::LevelLayout;
use crate::objects::ObjectRegistry;
use crate::rules::{scan_rules, RuleSet};
use crate::sim::Observation;
use crate::turn::{Outcome, TurnResolver};

/// One resolved turn, as remembered by the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub step: u32,
    pub action: Action,
    pub outcome: Outcome,
}

/// A running episode over one level.
#[derive(Debug)]
pub struct Session {
    registry: ObjectRegistry,
    layout: LevelLayout,
    grid: Grid,
    steps: u32,
    outcome: Outcome,
    rules: RuleSet,
    history: Vector<TurnRecord>,
}

impl Session {
    /// Create a session over a layout, validating every placement.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if any placement falls outside the
    /// layout's dimensions.
    pub fn new(registry: ObjectRegistry, layout: LevelLayout) -> Result<Self, GameError> {
        let grid = build_grid(&layout)?;
        let rules = scan_rules(&grid, &registry);
        Ok(Self {
            registry,
            layout,
            grid,
            steps: 0,
            outcome: Outcome::Ongoing,
            rules,
            history: Vector::new(),
        })
    }

    /// Rebuild the board from the layout and start a fresh episode.
    pub fn reset(&mut self) -> Observation {
        self.grid = build_grid(&self.layout).expect("layout validated at construction");
        self.steps = 0;
        self.outcome = Outcome::Ongoing;
        self.rules = scan_rules(&self.grid, &self.registry);
        self.history = Vector::new();
        self.observe()
    }

    /// Resolve one turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EpisodeEnded`] if the previous turn already
    /// reached a terminal outcome.
    pub fn step(&mut self, action: Action) -> Result<(Observation, Outcome), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::EpisodeEnded);
        }

        let resolver = TurnResolver::new(&self.registry);
        let (rules, outcome) = resolver.resolve(&mut self.grid, action);
        self.steps += 1;
        self.rules = rules;
        self.outcome = outcome;
        self.history.push_back(TurnRecord {
            step: self.steps,
            action,
            outcome,
        });

        Ok((self.observe(), outcome))
    }

    /// Snapshot the current state without advancing it.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation::capture(
            &self.grid,
            &self.registry,
            self.rules.clone(),
            self.steps,
            self.outcome,
        )
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    #[must_use]
    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    /// Active rules as of the last resolved turn (or the initial scan).
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Turns resolved since the last reset, oldest first.
    ///
    /// The returned vector is a persistent snapshot: cloning it is O(1) and
    /// later steps never mutate a clone already taken.
    #[must_use]
    pub fn history(&self) -> Vector<TurnRecord> {
        self.history.clone()
    }
}

fn build_grid(layout: &LevelLayout) -> Result<Grid, GameError> {
    let mut grid = Grid::new(layout.width, layout.height);
    for placement in layout.spawn_order() {
        grid.spawn(placement.type_key, placement.position())?;
    }
    Ok(grid)
}

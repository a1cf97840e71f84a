use core::time::Duration;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Running,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Running
    }
}

/// One game from first reveal to win or loss. Owns its grid; a new game is a new `Session`.
///
/// The reveal and flag operations live in the engine module.
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    pub(crate) grid: Grid,
    pub(crate) outcome: Outcome,
    pub(crate) started_at: Option<Instant>,
    pub(crate) ended_at: Option<Instant>,
    /// Cascade work queue, see [`Session::step`].
    pub(crate) pending: VecDeque<Coord2>,
    /// Cells currently in `pending`.
    pub(crate) queued: Array2<bool>,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(grid: Grid) -> Self {
        Self::with_clock(grid, SystemClock)
    }

    /// Generates a fresh grid for `config` from `seed`.
    pub fn new_game(config: GameConfig, seed: u64) -> Self {
        Self::new(DensityGenerator::new(seed).generate(config))
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(grid: Grid, clock: C) -> Self {
        Self {
            queued: Array2::default(ix(grid.size())),
            grid,
            outcome: Outcome::Running,
            started_at: None,
            ended_at: None,
            pending: VecDeque::new(),
            clock,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shorthand for [`Grid::cell_at`].
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid.cell_at(coords)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_running(&self) -> bool {
        self.outcome.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Time since the first reveal: zero before it, live while running, frozen once ended.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(|| self.clock.now())
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn flags_placed(&self) -> CellCount {
        self.grid.flagged_count()
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.flagged_count() as isize)
    }

    /// Records the start time on the first call, later calls keep it.
    pub(crate) fn mark_started(&mut self) {
        if self.started_at.is_none() {
            let now = self.clock.now();
            log::debug!("Session started");
            self.started_at = Some(now);
        }
    }

    /// Terminal transition, ignored unless still running.
    pub(crate) fn mark_ended(&mut self, outcome: Outcome) {
        debug_assert!(outcome.is_finished(), "cannot end a session as {outcome:?}");
        if !self.outcome.is_running() {
            return;
        }

        self.ended_at = Some(self.clock.now());
        self.outcome = outcome;
        self.pending.clear();
        self.queued.fill(false);
        log::debug!("Session ended {:?} after {:?}", outcome, self.elapsed());
    }
}

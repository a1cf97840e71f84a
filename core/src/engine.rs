use core::time::Duration;

use crate::*;

/// Pause between cascade layers when a frontend animates the flood with [`Session::step`].
pub const CASCADE_STEP_DELAY: Duration = Duration::from_millis(20);

/// What a reveal, or a run of cascade layers, did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    /// The game ended, either [`Outcome::Won`] or [`Outcome::Lost`].
    Ended(Outcome),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Folds the outcome of a later reveal into this one. Nothing is revealed after an ending, so it sticks.
    pub const fn then(self, later: Self) -> Self {
        match (self, later) {
            (Self::Ended(outcome), _) | (_, Self::Ended(outcome)) => Self::Ended(outcome),
            (Self::NoChange, Self::NoChange) => Self::NoChange,
            _ => Self::Revealed,
        }
    }
}

impl<C: Clock> Session<C> {
    /// Reveals the cell at `coords` on the player's behalf.
    ///
    /// Flagged and already revealed cells are left alone, as is everything once the game is over. Revealing a mine
    /// loses the game and opens the whole board. Revealing a zero cell queues its neighbors for the cascade, which
    /// runs through [`Session::step`] or [`Session::settle`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.checked_coords(coords)?;
        Ok(self.reveal_cell(coords, false))
    }

    /// Reveals and then runs the resulting cascade to completion.
    pub fn reveal_settled(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let outcome = self.reveal(coords)?;
        Ok(outcome.then(self.settle()))
    }

    /// Flags or unflags a covered cell, returns whether anything changed.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.checked_coords(coords)?;
        if !self.outcome.is_running() {
            return Ok(false);
        }
        Ok(self.grid.toggle_flag(coords))
    }

    /// Whether the cascade queue is empty.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cells waiting in the cascade queue.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Runs one cascade layer: every coordinate queued before this call is revealed, and zero cells among them
    /// queue the next layer.
    ///
    /// Flags are checked as each cell comes up, so a flag removed while the cell waited no longer stops it.
    pub fn step(&mut self) -> RevealOutcome {
        let layer = self.pending.len();
        if layer > 0 {
            log::trace!("Cascade layer of {} cells", layer);
        }

        let mut outcome = RevealOutcome::NoChange;
        for _ in 0..layer {
            // a win inside the layer clears the queue
            let Some(coords) = self.pending.pop_front() else {
                break;
            };
            self.queued[ix(coords)] = false;
            outcome = outcome.then(self.reveal_cell(coords, false));
        }
        outcome
    }

    /// Runs cascade layers until none are left.
    pub fn settle(&mut self) -> RevealOutcome {
        let mut outcome = RevealOutcome::NoChange;
        while !self.is_settled() {
            outcome = outcome.then(self.step());
        }
        outcome
    }

    /// Force-reveals every cell, ignoring flags and without loss or cascade side effects.
    pub(crate) fn reveal_all(&mut self) {
        for coords in self.grid.iter_coords() {
            self.reveal_cell(coords, true);
        }
    }

    /// Ends the game once; a loss first opens the whole board.
    pub(crate) fn end_session(&mut self, outcome: Outcome) {
        if !self.outcome.is_running() {
            return;
        }
        if outcome == Outcome::Lost {
            self.reveal_all();
        }
        self.mark_ended(outcome);
    }

    fn reveal_cell(&mut self, coords: Coord2, forced: bool) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.outcome.is_running() {
            return NoChange;
        }

        let cell = self.grid[coords];
        if cell.is_revealed() {
            return NoChange;
        }
        if !forced && cell.is_flagged() {
            return NoChange;
        }

        self.mark_started();
        self.grid.uncover(coords);

        if cell.is_mine() {
            if forced {
                return Revealed;
            }
            log::debug!("Mine hit at {:?}", coords);
            self.end_session(Outcome::Lost);
            return Ended(Outcome::Lost);
        }

        if forced {
            return Revealed;
        }

        if cell.adjacent_mines() == 0 {
            self.enqueue_neighbors(coords);
        }

        if self.grid.covered_count() == self.grid.mine_count() {
            self.end_session(Outcome::Won);
            Ended(Outcome::Won)
        } else {
            Revealed
        }
    }

    /// Queues every covered neighbor, flagged ones included.
    fn enqueue_neighbors(&mut self, coords: Coord2) {
        for pos in self.grid.neighbors(coords) {
            let queued = &mut self.queued[ix(pos)];
            if *queued || self.grid[pos].is_revealed() {
                continue;
            }
            *queued = true;
            self.pending.push_back(pos);
        }
    }

    fn checked_coords(&self, coords: Coord2) -> Result<Coord2> {
        let checked = self.grid.validate_coords(coords);
        debug_assert!(
            checked.is_ok(),
            "coordinates {:?} outside of {:?} grid",
            coords,
            self.grid.size()
        );
        checked
    }
}

//! Grid-reveal puzzle engine: density-based mine placement, cascading reveal, and the session state machine.
//!
//! A presentation layer owns a [`Session`], forwards reveal and flag intents into it, and pulls cell and timer
//! state back out to render.

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use preset::*;
pub use session::*;
pub use types::*;

mod cell;
mod clock;
mod engine;
mod error;
mod generator;
mod grid;
mod preset;
mod session;
mod types;

/// Validated parameters for a new game. Only [`GameConfig::new`] builds one, deserializing included.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct GameConfig {
    size: Coord2,
    mine_probability: f64,
}

#[derive(Deserialize)]
struct ConfigFields {
    size: Coord2,
    mine_probability: f64,
}

impl TryFrom<ConfigFields> for GameConfig {
    type Error = GameError;

    fn try_from(fields: ConfigFields) -> Result<Self> {
        Self::new(fields.size, fields.mine_probability)
    }
}

impl GameConfig {
    /// Rejects empty grids and probabilities outside `(0, 1]`.
    pub fn new(size: Coord2, mine_probability: f64) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        // also rejects NaN
        if !(mine_probability > 0.0 && mine_probability <= 1.0) {
            return Err(GameError::InvalidProbability);
        }
        Ok(Self {
            size,
            mine_probability,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mine_probability(&self) -> f64 {
        self.mine_probability
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    /// Upper bound on placed mines: `floor(width * height * p)`.
    pub fn mine_cap(&self) -> CellCount {
        let target = f64::from(self.total_cells()) * self.mine_probability;
        // `as` saturates, and `target` never exceeds the cell count anyway
        target.floor() as CellCount
    }
}

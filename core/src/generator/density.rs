use ndarray::Array2;
use rand::Rng;

use super::*;

/// Generation strategy that gives each cell an independent chance of holding a mine, capped at
/// `floor(width * height * p)` placed mines.
///
/// Cells are visited column-major (x outer, y inner). Once the cap is hit the remaining cells stay safe, so later
/// columns are slightly less likely to hold mines. The cap is an upper bound, not a target: the realized count is
/// random and, particularly on small grids, usually lands below the nominal density.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGenerator {
    seed: u64,
}

impl DensityGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for DensityGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate(config, &mut rng)
    }
}

/// Places mines for `config` drawing from `rng`; the same random stream always yields the same grid.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Grid {
    let cap = config.mine_cap();
    let (size_x, size_y) = config.size();
    let p = config.mine_probability();

    let mut mines: Array2<bool> = Array2::default(ix(config.size()));
    let mut mines_placed: CellCount = 0;
    for x in 0..size_x {
        for y in 0..size_y {
            // no draw once the cap is reached
            if mines_placed < cap && rng.random_bool(p) {
                mines[ix((x, y))] = true;
                mines_placed += 1;
            }
        }
    }

    log::debug!(
        "Generated {}x{} grid, placed {} mines out of a cap of {}",
        size_x,
        size_y,
        mines_placed,
        cap
    );
    Grid::from_mine_mask_unchecked(&mines)
}

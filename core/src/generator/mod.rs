use crate::*;
pub use density::*;

mod density;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}

use rand::{SeedableRng, rngs::StdRng};

mod prim;

pub use prim::randomized_prim;

use crate::{
    error::Result,
    maze::{Coordinate, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carve a perfect maze into `grid`, growing it from `start`.
pub fn generate_maze(grid: &mut Grid, start: Coordinate, seed: Option<u64>) -> Result<()> {
    let mut rng = get_rng(seed);
    randomized_prim(grid, start, &mut rng)
}

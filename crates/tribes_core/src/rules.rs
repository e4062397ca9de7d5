//! The multi-tribe birth/survival rule.
//!
//! Each cell looks at its Moore neighborhood, clipped at the grid edge:
//!
//! | current | neighbors | next |
//! |---|---|---|
//! | alive | fewer than 2 or more than 3 alive | `None` |
//! | alive | 2 or 3 of its own tribe | unchanged |
//! | alive | 2 or 3 alive, not dominated by its own tribe | unchanged with p = 0.5, else `None` |
//! | dead | some tribe has exactly 3 | first such tribe in `Tribe::LIVING` order |
//! | dead | otherwise | `None` |
//!
//! Only the contested-survival row consumes randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tribes_data::{Grid, Tribe};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-tribe live neighbor counts of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: [u8; Tribe::LIVING.len()],
}

impl NeighborCounts {
    /// Neighbors belonging to `tribe`. Always 0 for `Tribe::None`.
    #[inline]
    pub fn of(&self, tribe: Tribe) -> u8 {
        tribe.living_index().map_or(0, |i| self.counts[i])
    }

    /// Live neighbors across all tribes.
    #[inline]
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// First tribe in enumeration order with exactly `n` neighbors.
    pub fn first_with(&self, n: u8) -> Option<Tribe> {
        Tribe::LIVING
            .iter()
            .zip(self.counts.iter())
            .find(|&(_, &count)| count == n)
            .map(|(tribe, _)| *tribe)
    }
}

/// Counts live neighbors of `(row, col)` per tribe. No wraparound.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if !grid.in_bounds(r, c) {
            continue;
        }
        if let Some(i) = grid.get(r as usize, c as usize).living_index() {
            counts.counts[i] += 1;
        }
    }
    counts
}

/// Next state of a single cell given the current grid.
pub fn next_cell<R: Rng + ?Sized>(grid: &Grid, row: usize, col: usize, rng: &mut R) -> Tribe {
    let current = grid.get(row, col);
    let neighbors = count_neighbors(grid, row, col);
    let alive = neighbors.total();

    if !current.is_alive() {
        return neighbors.first_with(3).unwrap_or(Tribe::None);
    }

    if !(2..=3).contains(&alive) {
        return Tribe::None;
    }

    match neighbors.of(current) {
        2 | 3 => current,
        _ if rng.gen_bool(0.5) => current,
        _ => Tribe::None,
    }
}

/// Writes the generation following `current` into `next`.
///
/// Rows are computed in parallel. Row `r` draws from its own RNG seeded from
/// `seed` and `r`, so the result depends only on `current` and `seed`.
/// `next` is reshaped to match `current` if needed.
pub fn apply(current: &Grid, next: &mut Grid, seed: u64) {
    if next.rows() != current.rows() || next.cols() != current.cols() {
        *next = Grid::new(current.rows(), current.cols());
    }
    let cols = current.cols();
    if cols == 0 {
        return;
    }

    next.cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out)| {
            let mut rng = ChaCha8Rng::seed_from_u64(row_seed(seed, row));
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = next_cell(current, row, col, &mut rng);
            }
        });
}

/// Convenience wrapper around [`apply`] that allocates the output grid.
pub fn step(current: &Grid, seed: u64) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols());
    apply(current, &mut next, seed);
    next
}

#[inline]
fn row_seed(seed: u64, row: usize) -> u64 {
    seed ^ (row as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

//! Board fingerprinting for cycle detection.

use std::collections::BTreeSet;
use tribes_data::{Grid, Tribe};

const HASH_MULTIPLIER: u32 = 31;

/// Living tribes present on a board plus its rolling hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TribeHash {
    /// Distinct living tribes; `Tribe::None` is never included.
    pub tribes: BTreeSet<Tribe>,
    pub hash: u32,
}

/// Polynomial rolling hash (multiplier 31, wrapping 32-bit) over every
/// cell's tribe code in row-major order, empty cells included.
pub fn tribe_hash(grid: &Grid) -> TribeHash {
    let mut hash = 0u32;
    let mut tribes = BTreeSet::new();
    for &tribe in grid.cells() {
        hash = hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(tribe.code());
        if tribe.is_alive() {
            tribes.insert(tribe);
        }
    }
    TribeHash { tribes, hash }
}

use crate::classify::CycleMemo;
use crate::config::BoardConfig;
use serde::{Deserialize, Serialize};
use tribes_data::Grid;

/// Serializable state of a board between generations.
///
/// The in-flight next generation is not part of a snapshot; it is recomputed
/// from `seed` when the board is restored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub generation: u64,
    pub front: Grid,
    pub memo: CycleMemo,
    /// The board's resolved RNG seed, also when `config.seed` is `None`.
    pub seed: u64,
}

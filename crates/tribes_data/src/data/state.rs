use crate::data::tribe::Tribe;
use serde::{Deserialize, Serialize};

/// Classification of the board after a generation has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimulationState {
    #[default]
    Running,
    /// The revealed board hashes to a value seen before.
    Cycling,
    TribeVictorious(Tribe),
    EveryoneLost,
}

impl SimulationState {
    /// Whether the driving loop should stop advancing generations.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationState::Running)
    }
}

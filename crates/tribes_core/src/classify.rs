//! Terminal-state classification and the cycle memo.

use crate::error::{EngineError, Result};
use crate::hashing::TribeHash;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tribes_data::SimulationState;

/// Insertion-ordered set of board hashes seen while running.
///
/// Append-only: a hash is inserted at most once and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct CycleMemo {
    order: Vec<u32>,
    seen: HashSet<u32>,
}

impl CycleMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.seen.contains(&hash)
    }

    /// Records `hash`. Returns `false` if it was already present.
    pub fn insert(&mut self, hash: u32) -> bool {
        if !self.seen.insert(hash) {
            return false;
        }
        self.order.push(hash);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Hashes in insertion order.
    pub fn entries(&self) -> &[u32] {
        &self.order
    }

    /// How many entries before the most recent one `hash` was recorded.
    ///
    /// The most recent entry itself is 0 generations ago.
    pub fn cycle_frequency(&self, hash: u32) -> Result<usize> {
        self.order
            .iter()
            .rev()
            .position(|&h| h == hash)
            .ok_or(EngineError::CycleNotFound { hash })
    }
}

impl From<Vec<u32>> for CycleMemo {
    fn from(hashes: Vec<u32>) -> Self {
        let mut memo = CycleMemo::new();
        for hash in hashes {
            memo.insert(hash);
        }
        memo
    }
}

impl From<CycleMemo> for Vec<u32> {
    fn from(memo: CycleMemo) -> Self {
        memo.order
    }
}

/// Classifies a freshly revealed board. First match wins:
///
/// 1. hash already in `memo` → `Cycling` (not re-inserted)
/// 2. no living tribe present → `EveryoneLost`
/// 3. exactly one living tribe → `TribeVictorious`
/// 4. otherwise the hash is recorded and the board keeps `Running`
pub fn classify(fingerprint: &TribeHash, memo: &mut CycleMemo) -> SimulationState {
    if memo.contains(fingerprint.hash) {
        return SimulationState::Cycling;
    }

    let mut tribes = fingerprint.tribes.iter();
    match (tribes.next(), tribes.next()) {
        (None, _) => SimulationState::EveryoneLost,
        (Some(&only), None) => SimulationState::TribeVictorious(only),
        _ => {
            memo.insert(fingerprint.hash);
            SimulationState::Running
        }
    }
}

//! Double-buffered board and generation driver.
//!
//! The board owns two buffers. `front` is the generation being displayed and
//! classified; the other buffer holds the next generation, either ready or
//! still being computed on tokio's blocking pool. Advancing the board:
//!
//! 1. waits for the next generation to be finished,
//! 2. swaps it in as `front`,
//! 3. hands `front` to the render callback,
//! 4. moves the retired buffer into a background task that computes the
//!    generation after this one,
//! 5. sleeps for the configured delay,
//! 6. classifies `front`.
//!
//! The background task owns the buffer it writes and only reads `front`
//! through an `Arc`, so a swap can never expose a partially written grid.
//!
//! Generation `g` is always computed with [`generation_seed`]`(seed, g)`, so a
//! board restored from a snapshot continues exactly like the original.

use crate::classify::{classify, CycleMemo};
use crate::clustering::{sample_positions, KMeans};
use crate::config::BoardConfig;
use crate::error::{EngineError, Result};
use crate::hashing::{tribe_hash, TribeHash};
use crate::metrics::Metrics;
use crate::rules;
use crate::snapshot::BoardSnapshot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tribes_data::{Grid, Pair, SimulationState, Tribe};

enum NextGeneration {
    Ready(Grid),
    Pending(JoinHandle<(Grid, Duration)>),
}

pub struct Board {
    config: BoardConfig,
    front: Arc<Grid>,
    next: Option<NextGeneration>,
    memo: CycleMemo,
    /// Resolved RNG seed: `config.seed`, or entropy drawn at creation.
    seed: u64,
    generation: u64,
    metrics: Metrics,
}

impl Board {
    /// Builds a board, seeds its population by clustering, and eagerly
    /// computes the first next generation.
    pub fn create(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let seed = resolve_seed(config.seed);

        let mut front = Grid::new(config.rows, config.cols);
        seed_population(&mut front, &config, &mut ChaCha8Rng::seed_from_u64(seed));

        Ok(Self::assemble(config, front, CycleMemo::new(), 0, seed))
    }

    /// Builds a board around an existing grid instead of a clustered one.
    ///
    /// `config.rows` and `config.cols` are taken from `grid`.
    pub fn with_grid(mut config: BoardConfig, grid: Grid) -> Result<Self> {
        if !grid.is_well_formed() {
            return Err(EngineError::invalid_config("grid storage does not match its shape"));
        }
        config.rows = grid.rows();
        config.cols = grid.cols();
        config.validate()?;
        let seed = resolve_seed(config.seed);
        Ok(Self::assemble(config, grid, CycleMemo::new(), 0, seed))
    }

    /// Rebuilds a board from a snapshot. The next generation is recomputed
    /// from the snapshot's seed, so it matches the one the original would show.
    pub fn restore(snapshot: BoardSnapshot) -> Result<Self> {
        let BoardSnapshot {
            config,
            generation,
            front,
            memo,
            seed,
        } = snapshot;

        config.validate()?;
        if !front.is_well_formed() || front.rows() != config.rows || front.cols() != config.cols {
            return Err(EngineError::invalid_config(format!(
                "snapshot grid is {}x{} but config expects {}x{}",
                front.rows(),
                front.cols(),
                config.rows,
                config.cols
            )));
        }
        Ok(Self::assemble(config, front, memo, generation, seed))
    }

    fn assemble(
        config: BoardConfig,
        front: Grid,
        memo: CycleMemo,
        generation: u64,
        seed: u64,
    ) -> Self {
        let metrics = Metrics::new();
        let started = Instant::now();
        let mut back = Grid::new(front.rows(), front.cols());
        rules::apply(&front, &mut back, generation_seed(seed, generation + 1));
        metrics.record_generation(started.elapsed(), live_cells(&back));

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            generation = generation,
            "Board ready"
        );

        Self {
            config,
            front: Arc::new(front),
            next: Some(NextGeneration::Ready(back)),
            memo,
            seed,
            generation,
            metrics,
        }
    }

    /// Advances one generation and classifies the result.
    ///
    /// `render` receives the newly revealed grid and its generation number
    /// before the display delay starts.
    pub async fn next_state<F>(&mut self, render: F) -> Result<SimulationState>
    where
        F: FnOnce(&Grid, u64),
    {
        let prepared = self.take_next().await?;
        let retired = std::mem::replace(&mut self.front, Arc::new(prepared));
        self.generation += 1;

        render(&self.front, self.generation);

        self.schedule_next(retired);

        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }

        let fingerprint = self.tribe_hash_board();
        let state = classify(&fingerprint, &mut self.memo);

        tracing::debug!(
            generation = self.generation,
            hash = fingerprint.hash,
            tribes = fingerprint.tribes.len(),
            state = ?state,
            "Generation classified"
        );
        if state.is_terminal() {
            tracing::info!(generation = self.generation, state = ?state, "Simulation settled");
        }

        Ok(state)
    }

    async fn take_next(&mut self) -> Result<Grid> {
        match self.next.take() {
            Some(NextGeneration::Ready(grid)) => Ok(grid),
            Some(NextGeneration::Pending(handle)) => {
                let (grid, elapsed) = handle.await?;
                self.metrics.record_generation(elapsed, live_cells(&grid));
                Ok(grid)
            }
            // Only after a failed background task: recompute on this thread.
            None => {
                tracing::warn!(generation = self.generation, "Recomputing lost generation");
                let started = Instant::now();
                let grid = rules::step(
                    &self.front,
                    generation_seed(self.seed, self.generation + 1),
                );
                self.metrics
                    .record_generation(started.elapsed(), live_cells(&grid));
                Ok(grid)
            }
        }
    }

    fn schedule_next(&mut self, retired: Arc<Grid>) {
        let source = Arc::clone(&self.front);
        let mut target = Arc::try_unwrap(retired).unwrap_or_else(|shared| (*shared).clone());
        let seed = generation_seed(self.seed, self.generation + 1);

        let handle = tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            rules::apply(&source, &mut target, seed);
            (target, started.elapsed())
        });
        self.next = Some(NextGeneration::Pending(handle));
    }

    /// Living tribes on the displayed grid and its rolling hash.
    pub fn tribe_hash_board(&self) -> TribeHash {
        tribe_hash(&self.front)
    }

    /// Generations between the last occurrence of `hash` and the most recent
    /// memo entry. Only meaningful right after a `Cycling` classification.
    pub fn cycle_frequency(&self, hash: u32) -> Result<usize> {
        self.memo.cycle_frequency(hash)
    }

    /// Captures the board, waiting for any in-flight generation first.
    pub async fn snapshot(&mut self) -> Result<BoardSnapshot> {
        let prepared = self.take_next().await?;
        self.next = Some(NextGeneration::Ready(prepared));
        Ok(BoardSnapshot {
            config: self.config.clone(),
            generation: self.generation,
            front: (*self.front).clone(),
            memo: self.memo.clone(),
            seed: self.seed,
        })
    }

    /// The displayed generation.
    pub fn front(&self) -> &Grid {
        &self.front
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn memo(&self) -> &CycleMemo {
        &self.memo
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen())
}

/// Rule seed for computing generation `generation` of a board seeded with `seed`.
///
/// Each generation reads its own ChaCha stream, so the value depends only on
/// the pair and not on how many generations were computed before.
pub fn generation_seed(seed: u64, generation: u64) -> u64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(generation);
    rng.gen()
}

/// Samples candidate cells, clusters them and paints cluster `i` with `Tribe::LIVING[i]`.
fn seed_population<R: Rng + ?Sized>(grid: &mut Grid, config: &BoardConfig, rng: &mut R) {
    let points = sample_positions(
        Pair::of(0, config.rows),
        Pair::of(0, config.cols),
        config.fill,
        rng,
    );
    let clusters = KMeans::new(config.clusters, config.max_iterations).cluster(&points, rng);

    for (tribe, cluster) in Tribe::LIVING.iter().zip(&clusters) {
        for point in cluster {
            grid.set(point.x, point.y, *tribe);
        }
    }

    tracing::info!(
        sampled = points.len(),
        clusters = clusters.len(),
        sizes = ?clusters.iter().map(Vec::len).collect::<Vec<_>>(),
        "Initial population seeded"
    );
}

fn live_cells(grid: &Grid) -> usize {
    grid.population().iter().sum()
}

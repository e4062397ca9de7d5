//! Generation metrics and logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How often `record_generation` emits an `info` summary.
const SUMMARY_INTERVAL: u64 = 100;

/// Counters describing the work done by one board.
pub struct Metrics {
    generations: AtomicU64,
    population: AtomicU64,
    last_compute_micros: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            population: AtomicU64::new(0),
            last_compute_micros: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a computed generation, its duration and its live cell count.
    pub fn record_generation(&self, duration: Duration, population: usize) {
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.population.store(population as u64, Ordering::Relaxed);
        self.last_compute_micros
            .store(duration.as_micros() as u64, Ordering::Relaxed);

        if generation % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                generation = generation,
                population = population,
                compute_us = duration.as_micros() as u64,
                "Generation computed"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    /// Live cells in the most recently computed generation.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_compute(&self) -> Duration {
        Duration::from_micros(self.last_compute_micros.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a global `tracing` subscriber writing to stderr.
///
/// `level` is an `EnvFilter` directive; `RUST_LOG` takes precedence when set.
/// Calling this more than once is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

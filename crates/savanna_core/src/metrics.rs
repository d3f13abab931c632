//! Simulation health metrics and structured logging.
//!
//! A lightweight collector the shell feeds once per tick; it keeps running
//! totals and emits a periodic INFO line so a headless run stays observable
//! without a renderer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Running counters for a simulation session.
pub struct Metrics {
    tick_count: AtomicU64,
    herbivore_count: AtomicU64,
    carnivore_count: AtomicU64,
    edible_food_count: AtomicU64,
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
            tick_count: AtomicU64::new(0),
            herbivore_count: AtomicU64::new(0),
            carnivore_count: AtomicU64::new(0),
            edible_food_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration and the post-tick gauges.
    pub fn record_tick(
        &self,
        duration: Duration,
        herbivores: usize,
        carnivores: usize,
        edible_food: usize,
    ) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.herbivore_count
            .store(herbivores as u64, Ordering::Relaxed);
        self.carnivore_count
            .store(carnivores as u64, Ordering::Relaxed);
        self.edible_food_count
            .store(edible_food as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick.is_multiple_of(100) {
            tracing::info!(
                tick = tick,
                herbivores = herbivores,
                carnivores = carnivores,
                edible_food = edible_food,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn herbivore_count(&self) -> u64 {
        self.herbivore_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn carnivore_count(&self) -> u64 {
        self.carnivore_count.load(Ordering::Relaxed)
    }

    /// Elapsed wall-clock time since the collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

//! Headless driving of the simulation core.
//!
//! The engine has no clock of its own; this runner is the external one. It
//! ticks the world as fast as it can, feeds the metrics collector, and stops
//! early if the population dies out.

use anyhow::Result;
use savanna_core::{Metrics, SimConfig, World};
use serde::Serialize;
use std::time::Instant;

/// Final figures from a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub herbivores: usize,
    pub carnivores: usize,
    pub edible_food: usize,
    pub theme: String,
}

/// Builds a world from the configuration and advances it `ticks` steps.
pub fn run_headless(config: SimConfig, ticks: u64) -> Result<(World, RunReport)> {
    let metrics = Metrics::new();
    let mut world = World::build(config)?;

    for _ in 0..ticks {
        let started = Instant::now();
        world.tick();
        metrics.record_tick(
            started.elapsed(),
            world.herbivores.len(),
            world.carnivores.len(),
            world.edible_food(),
        );
        if world.population() == 0 && !world.disaster_active() {
            tracing::info!(tick = world.tick, "Population extinct, stopping early");
            break;
        }
    }

    let report = RunReport {
        ticks: metrics.tick_count(),
        elapsed_ms: metrics.elapsed().as_millis() as u64,
        herbivores: world.herbivores.len(),
        carnivores: world.carnivores.len(),
        edible_food: world.edible_food(),
        theme: world.theme.label().to_string(),
    };
    Ok((world, report))
}

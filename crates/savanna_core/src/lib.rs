//! # Savanna Core
//!
//! The simulation engine for Savanna — a small predator/prey world on a
//! bounded 2D plane, advanced one discrete tick at a time.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Entity creation and spawn placement
//! - Bounding-disc collision detection
//! - Pairwise interaction rules (foraging, predation, denning, breeding)
//! - The tick-modulo event scheduler
//! - The disaster countdown state machine
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! A single `World` owns every entity collection; `tick()` runs the fixed
//! pass order synchronously on the calling thread. All randomness flows
//! through one seedable RNG, so a seeded run replays exactly.
//!
//! ## Example
//!
//! ```
//! use savanna_core::config::SimConfig;
//! use savanna_core::world::World;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//!
//! let mut world = World::build(config).unwrap();
//! world.tick();
//! assert_eq!(world.snapshot().tick, 1);
//! ```

/// Bounding-disc overlap testing
pub mod collision;
/// Configuration management for simulation parameters
pub mod config;
/// Disaster countdown state machine
pub mod disaster;
/// Error types for construction and placement
pub mod error;
/// Entity creation and spawn placement
pub mod lifecycle;
/// Metrics collection and structured logging
pub mod metrics;
/// Read-only world snapshots for external collaborators
pub mod snapshot;
/// Per-tick simulation systems (movement, foraging, predation, breeding)
pub mod systems;
/// World state and the tick loop
pub mod world;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use snapshot::WorldSnapshot;
pub use world::World;

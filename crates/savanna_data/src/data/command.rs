use serde::{Deserialize, Serialize};

/// A discrete instruction from the UI collaborator.
///
/// Commands are enqueued between ticks and drained exactly once at the start
/// of the next tick, which replaces the original design's externally mutated
/// one-shot booleans with something a test can drive without a live UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Spawn one herbivore at a fresh random position.
    AddHerbivore,
    /// Spawn one carnivore at a fresh random position.
    AddCarnivore,
    /// Remove the most recently added herbivore, if any.
    RemoveHerbivore,
    /// Remove the most recently added carnivore, if any.
    RemoveCarnivore,
    /// Arm the disaster countdown (ignored while one is already running).
    TriggerDisaster,
    /// Sticky toggle: every agent is ready to breed regardless of energy.
    ForceBreeding(bool),
    /// Sticky toggle: expose sense discs through snapshots.
    DevVisuals(bool),
    /// Give every herbivore an energy and intelligence bump.
    BoostHerbivores,
    /// Give every carnivore an energy and intelligence bump.
    BoostCarnivores,
}

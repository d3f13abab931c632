//! World state: the entity collections, the clock, and the mode flags.
//!
//! The world owns everything; systems borrow collections for the duration of
//! a pass and nothing mutates outside `tick`. Collections are plain
//! insertion-ordered vectors — removal-by-command pops the newest entry, and
//! every purge is a deferred `retain` so passes never fight index shifts.

use crate::config::SimConfig;
use crate::disaster::DisasterController;
use rand_chacha::ChaCha8Rng;
use savanna_data::{Agent, Command, Den, FoodSource, Obstacle, Species, WarningMarker, WorldTheme};
use std::collections::VecDeque;

pub mod commands;
pub mod init;
pub mod update;

pub struct World {
    pub width: u32,
    pub height: u32,
    pub tick: u64,
    pub config: SimConfig,

    pub herbivores: Vec<Agent>,
    pub carnivores: Vec<Agent>,
    pub food: Vec<FoodSource>,
    pub obstacles: Vec<Obstacle>,
    pub dens: Vec<Den>,

    pub theme: WorldTheme,
    pub warning_marker: Option<WarningMarker>,
    pub force_breeding: bool,
    pub dev_visuals: bool,

    pub(crate) commands: VecDeque<Command>,
    pub(crate) pending_herbivores: u32,
    pub(crate) pending_carnivores: u32,
    pub(crate) disaster: DisasterController,
    pub(crate) rng: ChaCha8Rng,
}

impl World {
    /// Enqueues a UI command; the next `tick` drains the queue and applies
    /// each command exactly once.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Total live agent count across both species.
    #[must_use]
    pub fn population(&self) -> usize {
        self.herbivores.len() + self.carnivores.len()
    }

    #[must_use]
    pub fn agents_of(&self, species: Species) -> &[Agent] {
        match species {
            Species::Herbivore => &self.herbivores,
            Species::Carnivore => &self.carnivores,
        }
    }

    /// Food sources currently available to foragers.
    #[must_use]
    pub fn edible_food(&self) -> usize {
        self.food.iter().filter(|f| f.edible).count()
    }

    /// True while a disaster countdown is running.
    #[must_use]
    pub fn disaster_active(&self) -> bool {
        self.disaster.is_active()
    }

    /// Spawn requests raised by breeding and not yet placed.
    #[must_use]
    pub fn pending_spawns(&self) -> (u32, u32) {
        (self.pending_herbivores, self.pending_carnivores)
    }
}

//! World construction and runtime spawning.

use crate::config::SimConfig;
use crate::disaster::DisasterController;
use crate::lifecycle;
use crate::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use savanna_data::{Species, WorldTheme};
use std::collections::VecDeque;

impl World {
    /// Builds and populates a world from a validated configuration.
    ///
    /// Populations are created in the original's order: carnivores,
    /// herbivores, obstacles, one den per `den_ratio` life forms, then food.
    /// A seed makes the whole run reproducible; without one the RNG is drawn
    /// from entropy.
    pub fn build(config: SimConfig) -> anyhow::Result<World> {
        config.validate()?;

        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut world = World {
            width: config.world.width,
            height: config.world.height,
            tick: 0,
            herbivores: Vec::with_capacity(config.world.herbivores),
            carnivores: Vec::with_capacity(config.world.carnivores),
            food: Vec::with_capacity(config.world.food),
            obstacles: Vec::with_capacity(config.world.obstacles),
            dens: Vec::new(),
            theme: WorldTheme::Meadow,
            warning_marker: None,
            force_breeding: false,
            dev_visuals: false,
            commands: VecDeque::new(),
            pending_herbivores: 0,
            pending_carnivores: 0,
            disaster: DisasterController::new(config.schedule.disaster_countdown),
            rng,
            config,
        };
        world.populate();

        tracing::info!(
            width = world.width,
            height = world.height,
            herbivores = world.herbivores.len(),
            carnivores = world.carnivores.len(),
            obstacles = world.obstacles.len(),
            food = world.food.len(),
            dens = world.dens.len(),
            "World built"
        );
        Ok(world)
    }

    fn populate(&mut self) {
        for _ in 0..self.config.world.carnivores {
            self.spawn_agent(Species::Carnivore);
        }
        for _ in 0..self.config.world.herbivores {
            self.spawn_agent(Species::Herbivore);
        }
        for _ in 0..self.config.world.obstacles {
            self.spawn_obstacle();
        }
        let life_forms = self.config.world.carnivores + self.config.world.herbivores;
        for i in 0..life_forms {
            if i % self.config.world.den_ratio == 0 {
                self.spawn_den();
            }
        }
        for _ in 0..self.config.world.food {
            self.spawn_food();
        }
    }

    /// Places one agent of the given species. A placement failure drops the
    /// spawn with a warning; it never aborts the tick.
    pub(crate) fn spawn_agent(&mut self, species: Species) {
        match lifecycle::create_agent(species, &self.config, &mut self.rng) {
            Ok(agent) => match species {
                Species::Herbivore => self.herbivores.push(agent),
                Species::Carnivore => self.carnivores.push(agent),
            },
            Err(err) => {
                tracing::warn!(species = species.label(), %err, "Dropped spawn request");
            }
        }
    }

    pub(crate) fn spawn_food(&mut self) {
        match lifecycle::create_food(&self.config, &mut self.rng) {
            Ok(food) => self.food.push(food),
            Err(err) => tracing::warn!(%err, "Dropped food placement"),
        }
    }

    pub(crate) fn spawn_obstacle(&mut self) {
        match lifecycle::create_obstacle(&self.config, &mut self.rng) {
            Ok(obstacle) => self.obstacles.push(obstacle),
            Err(err) => tracing::warn!(%err, "Dropped obstacle placement"),
        }
    }

    pub(crate) fn spawn_den(&mut self) {
        match lifecycle::create_den(&self.config, &mut self.rng) {
            Ok(den) => self.dens.push(den),
            Err(err) => tracing::warn!(%err, "Dropped den placement"),
        }
    }

    /// Removes the most recently added agent of the species, if any.
    pub(crate) fn remove_newest(&mut self, species: Species) {
        let removed = match species {
            Species::Herbivore => self.herbivores.pop(),
            Species::Carnivore => self.carnivores.pop(),
        };
        if removed.is_none() {
            tracing::debug!(
                species = species.label(),
                "Removal requested on an empty population"
            );
        }
    }
}

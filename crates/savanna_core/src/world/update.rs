//! The tick loop: one call advances the simulation by one step.

use crate::systems::{breeding, cull_dead, foraging, movement, predation, scheduler};
use crate::world::World;

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Pass order is fixed and load-bearing:
    /// 1. clock, command drain, pending breeding spawns;
    /// 2. movement and the pairwise interaction rules;
    /// 3. aging, then death detection (an agent's last tick of age must be
    ///    observable before it is removed);
    /// 4. breeding-readiness recomputation;
    /// 5. the remaining periodic rules, then the disaster step.
    ///
    /// Everything is synchronous; when this returns the tick is fully
    /// applied.
    pub fn tick(&mut self) {
        self.tick += 1;
        self.apply_commands();
        self.place_pending_spawns();

        // Interaction resolver.
        movement::reflect_and_move(&mut self.herbivores, self.width, self.height, &self.config);
        movement::reflect_and_move(&mut self.carnivores, self.width, self.height, &self.config);
        movement::bounce_off_obstacles(&mut self.herbivores, &self.obstacles, &self.config);
        movement::bounce_off_obstacles(&mut self.carnivores, &self.obstacles, &self.config);
        foraging::forage(&mut self.herbivores, &mut self.food, &self.config);
        foraging::shelter(&mut self.herbivores, &mut self.dens, &self.config);

        let kills = predation::hunt(&mut self.carnivores, &mut self.herbivores, &self.config);
        if kills > 0 {
            self.herbivores.retain(|h| h.alive);
            tracing::debug!(kills, tick = self.tick, "Predation pass");
        }

        self.pending_herbivores += breeding::breed(&mut self.herbivores, &self.config);
        self.pending_carnivores += breeding::breed(&mut self.carnivores, &self.config);

        // Aging precedes the death check within the same tick.
        scheduler::age_agents(&mut self.herbivores);
        scheduler::age_agents(&mut self.carnivores);
        let max_age = self.config.behavior.max_age;
        let dead = cull_dead(&mut self.herbivores, max_age) + cull_dead(&mut self.carnivores, max_age);
        if dead > 0 {
            tracing::debug!(dead, tick = self.tick, "Death pass");
        }

        let threshold = self.config.energy.breeding_threshold;
        breeding::recompute_readiness(&mut self.herbivores, threshold, self.force_breeding);
        breeding::recompute_readiness(&mut self.carnivores, threshold, self.force_breeding);

        self.run_periodic_rules();
        self.advance_disaster();
    }

    /// Places the offspring whose spawn requests breeding raised last tick.
    fn place_pending_spawns(&mut self) {
        let herbivores = std::mem::take(&mut self.pending_herbivores);
        for _ in 0..herbivores {
            self.spawn_agent(savanna_data::Species::Herbivore);
        }
        let carnivores = std::mem::take(&mut self.pending_carnivores);
        for _ in 0..carnivores {
            self.spawn_agent(savanna_data::Species::Carnivore);
        }
    }

    fn run_periodic_rules(&mut self) {
        let schedule = self.config.schedule.clone();
        let tick = self.tick;

        if tick.is_multiple_of(schedule.poison_mark_period) {
            scheduler::mark_poisoned(&mut self.herbivores);
            scheduler::mark_poisoned(&mut self.carnivores);
        }
        if tick.is_multiple_of(schedule.reheading_period) {
            scheduler::reassign_idle_headings(&mut self.herbivores, &self.config, &mut self.rng);
            scheduler::reassign_idle_headings(&mut self.carnivores, &self.config, &mut self.rng);
        }
        if tick.is_multiple_of(schedule.food_regrowth_period) {
            scheduler::regrow_food(&mut self.food);
        }
        if tick.is_multiple_of(schedule.den_eject_period) {
            scheduler::eject_sheltered(&mut self.herbivores, &self.config);
        }
        if tick.is_multiple_of(schedule.den_release_period) {
            scheduler::release_dens(&mut self.dens);
        }
    }
}

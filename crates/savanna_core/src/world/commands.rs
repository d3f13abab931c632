//! Draining and applying the external command queue.

use crate::config::EnergyConfig;
use crate::world::World;
use savanna_data::{Agent, Command, Species};

impl World {
    /// Applies every queued command in arrival order, exactly once each.
    pub(crate) fn apply_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            tracing::debug!(?command, tick = self.tick, "Applying command");
            match command {
                Command::AddHerbivore => self.spawn_agent(Species::Herbivore),
                Command::AddCarnivore => self.spawn_agent(Species::Carnivore),
                Command::RemoveHerbivore => self.remove_newest(Species::Herbivore),
                Command::RemoveCarnivore => self.remove_newest(Species::Carnivore),
                Command::TriggerDisaster => self.disaster.trigger(),
                Command::ForceBreeding(on) => self.force_breeding = on,
                Command::DevVisuals(on) => self.dev_visuals = on,
                Command::BoostHerbivores => boost(&mut self.herbivores, &self.config.energy),
                Command::BoostCarnivores => boost(&mut self.carnivores, &self.config.energy),
            }
        }
    }
}

/// The boost a keeper can hand a flagging population: flat energy plus an
/// intelligence bump, capped at the maximum.
fn boost(agents: &mut [Agent], energy: &EnergyConfig) {
    for agent in agents.iter_mut().filter(|a| a.alive) {
        agent.gain_energy(energy.boost_energy);
        agent.intelligence = (agent.intelligence + energy.boost_intelligence).min(1.0);
    }
}

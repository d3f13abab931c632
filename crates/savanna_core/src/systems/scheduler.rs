//! Periodic maintenance rules fired by tick-modulo dispatch.
//!
//! `World::tick` owns the dispatch table; the functions here are the rule
//! bodies. Aging is the one rule with an ordering constraint: it must run
//! before death detection so an agent's final year is observable.

use crate::config::SimConfig;
use crate::lifecycle::random_heading;
use rand::Rng;
use savanna_data::{Agent, Den, FoodSource, Species};

/// Every agent gets a tick older.
pub fn age_agents(agents: &mut [Agent]) {
    for agent in agents.iter_mut().filter(|a| a.alive) {
        agent.age += 1;
    }
}

/// Flags poisoned agents for the rendering collaborator's outline treatment.
pub fn mark_poisoned(agents: &mut [Agent]) {
    for agent in agents.iter_mut().filter(|a| a.alive) {
        if agent.poisoned {
            agent.poison_marked = true;
        }
    }
}

/// Hands a fresh compass heading to agents that have stalled.
///
/// The idleness test is species-specific, kept as observed in the original:
/// a carnivore re-rolls when either component is zero, a herbivore only when
/// fully stopped and visible (a denned herbivore must stay put).
pub fn reassign_idle_headings<R: Rng>(agents: &mut [Agent], config: &SimConfig, rng: &mut R) {
    let speed = config.behavior.wander_speed;
    for agent in agents.iter_mut().filter(|a| a.alive) {
        let idle = match agent.species {
            Species::Carnivore => agent.dx == 0.0 || agent.dy == 0.0,
            Species::Herbivore => agent.is_stationary() && agent.visible,
        };
        if idle {
            let (dx, dy) = random_heading(speed, rng);
            agent.dx = dx;
            agent.dy = dy;
        }
    }
}

/// Consumed food grows back: edible and visible again.
pub fn regrow_food(food: &mut [FoodSource]) {
    for item in food.iter_mut() {
        if !item.edible {
            item.edible = true;
            item.visible = true;
        }
    }
}

/// Turns denned herbivores loose with a fixed outward velocity. The den's
/// occupancy is left alone; the release rule owns that.
pub fn eject_sheltered(herbivores: &mut [Agent], config: &SimConfig) {
    let speed = config.behavior.eject_speed;
    for grazer in herbivores.iter_mut().filter(|a| a.alive) {
        if !grazer.visible {
            grazer.visible = true;
            grazer.dx = speed;
            grazer.dy = speed;
        }
    }
}

/// Frees every occupied den, whether or not its occupant still exists.
pub fn release_dens(dens: &mut [Den]) {
    for den in dens.iter_mut() {
        den.occupied = false;
    }
}

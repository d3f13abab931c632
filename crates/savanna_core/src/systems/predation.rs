//! Carnivore hunting.

use crate::collision::{collides, Disc};
use crate::config::SimConfig;
use crate::systems::steer_towards;
use savanna_data::Agent;

/// Carnivores chase visible herbivores inside their sense disc and consume
/// them on body contact.
///
/// A carnivore sharp enough to recognize poisoned prey veers off instead of
/// chasing. One too dim still makes the kill but takes the poison in place of
/// the flavour energy. Kills are marked dead in place and left for the
/// caller's purge so no index shifts mid-pass; the returned count tells the
/// caller whether a purge is due.
pub fn hunt(carnivores: &mut [Agent], herbivores: &mut [Agent], config: &SimConfig) -> usize {
    let cutoff = config.behavior.intelligence_cutoff;
    let mut kills = 0;

    for hunter in carnivores.iter_mut().filter(|a| a.alive) {
        let sense = Disc::new(hunter.x, hunter.y, config.body.sense_radius);
        for prey in herbivores.iter_mut().filter(|h| h.alive && h.visible) {
            let prey_body = Disc::new(prey.x, prey.y, config.body.agent_radius);
            if !collides(&sense, &prey_body) {
                continue;
            }

            if prey.poisoned && hunter.intelligence >= cutoff {
                hunter.dx = -hunter.dx;
                hunter.dy = -hunter.dy;
                continue;
            }

            steer_towards(hunter, prey.x, prey.y, config.behavior.chase_steer_speed);

            let body = Disc::new(hunter.x, hunter.y, config.body.agent_radius);
            if collides(&body, &prey_body) {
                if prey.poisoned {
                    // Only a hunter below the cutoff reaches this branch, and
                    // tainted meat yields no energy.
                    hunter.poisoned = true;
                } else {
                    hunter.gain_energy(prey.flavour);
                }
                prey.alive = false;
                hunter.halt();
                kills += 1;
            }
        }
    }
    kills
}

//! Herbivore foraging and den seeking.

use crate::collision::{collides, Disc};
use crate::config::SimConfig;
use crate::systems::steer_towards;
use savanna_data::{Agent, Den, FoodSource};

/// Herbivores home on edible food inside their sense disc and consume it on
/// body contact.
///
/// Poisonous food poisons an eater too dim to recognize it; the calories are
/// gained either way, and the food goes inedible and hidden until the
/// regrowth rule restores it.
pub fn forage(herbivores: &mut [Agent], food: &mut [FoodSource], config: &SimConfig) {
    let cutoff = config.behavior.intelligence_cutoff;
    for grazer in herbivores.iter_mut().filter(|a| a.alive && a.visible) {
        let sense = Disc::new(grazer.x, grazer.y, config.body.sense_radius);
        for item in food.iter_mut().filter(|f| f.edible) {
            let item_body = Disc::new(item.x, item.y, config.body.food_radius);
            if !collides(&sense, &item_body) {
                continue;
            }
            steer_towards(grazer, item.x, item.y, config.behavior.forage_steer_speed);

            let body = Disc::new(grazer.x, grazer.y, config.body.agent_radius);
            if collides(&body, &item_body) {
                if item.poisonous && grazer.intelligence < cutoff {
                    grazer.poisoned = true;
                }
                item.edible = false;
                item.visible = false;
                grazer.halt();
                grazer.gain_energy(item.calories);
            }
        }
    }
}

/// Herbivores home on unoccupied dens, paying a small toll per steering axis,
/// and disappear into one on body contact.
///
/// A hidden herbivore stops seeking: it stays halted inside the den until the
/// ejection rule turns it loose.
pub fn shelter(herbivores: &mut [Agent], dens: &mut [Den], config: &SimConfig) {
    let speed = config.behavior.forage_steer_speed;
    for grazer in herbivores.iter_mut().filter(|a| a.alive && a.visible) {
        let sense = Disc::new(grazer.x, grazer.y, config.body.sense_radius);
        for den in dens.iter_mut().filter(|d| !d.occupied) {
            let den_body = Disc::new(den.x, den.y, config.body.den_radius);
            if !collides(&sense, &den_body) {
                continue;
            }
            grazer.dx = if grazer.x > den.x { -speed } else { speed };
            grazer.expend_energy(config.energy.den_steer_cost);
            grazer.dy = if grazer.y > den.y { -speed } else { speed };
            grazer.expend_energy(config.energy.den_steer_cost);

            let body = Disc::new(grazer.x, grazer.y, config.body.agent_radius);
            if collides(&body, &den_body) {
                den.occupied = true;
                grazer.visible = false;
                grazer.halt();
                grazer.expend_energy(config.energy.den_entry_cost);
                break;
            }
        }
    }
}

//! Same-species breeding and breeding-readiness bookkeeping.

use crate::collision::{collides, Disc};
use crate::config::SimConfig;
use savanna_data::Agent;

/// Pairs off ready-to-breed agents whose body discs overlap.
///
/// Each colliding pair clears both flags, charges both parents the breeding
/// cost, and counts one spawn request; the world places the offspring at the
/// start of the next tick. Iterating unordered pairs (i < j) makes the
/// once-per-pair guarantee structural, and the cleared flags keep an agent
/// from breeding twice in one tick even when it overlaps two partners.
pub fn breed(agents: &mut [Agent], config: &SimConfig) -> u32 {
    let radius = config.body.agent_radius;
    let cost = config.energy.breeding_cost;
    let mut requests = 0;

    for i in 0..agents.len() {
        for j in (i + 1)..agents.len() {
            let (left, right) = agents.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            if !a.alive || !b.alive || !a.ready_to_breed || !b.ready_to_breed {
                continue;
            }
            let a_body = Disc::new(a.x, a.y, radius);
            let b_body = Disc::new(b.x, b.y, radius);
            if collides(&a_body, &b_body) {
                a.ready_to_breed = false;
                b.ready_to_breed = false;
                a.expend_energy(cost);
                b.expend_energy(cost);
                requests += 1;
            }
        }
    }
    requests
}

/// Recomputes every agent's readiness from its energy; forced-breeding mode
/// overrides the threshold entirely.
pub fn recompute_readiness(agents: &mut [Agent], threshold: i32, forced: bool) {
    for agent in agents.iter_mut().filter(|a| a.alive) {
        agent.ready_to_breed = forced || agent.energy > threshold;
    }
}

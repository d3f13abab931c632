//! Per-tick simulation systems.
//!
//! Each system is a free function over the world's collections; `World::tick`
//! calls them in a fixed order. None of them ever returns an error: an
//! interaction that cannot apply is skipped, never allowed to abort the tick.

pub mod breeding;
pub mod foraging;
pub mod movement;
pub mod predation;
pub mod scheduler;

use savanna_data::Agent;

/// Points an agent at a target by mirroring the steering speed on each axis:
/// negative when the agent is already past the target, positive otherwise.
pub(crate) fn steer_towards(agent: &mut Agent, target_x: f64, target_y: f64, speed: f64) {
    agent.dx = if agent.x > target_x { -speed } else { speed };
    agent.dy = if agent.y > target_y { -speed } else { speed };
}

/// Purges agents that died this tick: eaten, starved, or past the age limit.
/// Deferred to a single `retain` pass so no iteration ever observes a
/// shifted index.
pub(crate) fn cull_dead(agents: &mut Vec<Agent>, max_age: u32) -> usize {
    let before = agents.len();
    agents.retain(|a| a.alive && a.energy > 0 && a.age <= max_age);
    before - agents.len()
}

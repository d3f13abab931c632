//! Boundary reflection, translation, and obstacle bounces.

use crate::collision::{collides, Disc};
use crate::config::SimConfig;
use savanna_data::{Agent, Obstacle};

/// Reflects agents whose body disc crosses a world edge, charges the boundary
/// penalty, then advances every agent by its velocity.
///
/// The reflection happens before the move so an agent never renders outside
/// the world for a frame.
pub fn reflect_and_move(agents: &mut [Agent], width: u32, height: u32, config: &SimConfig) {
    let w = f64::from(width);
    let h = f64::from(height);
    let r = config.body.agent_radius;
    let cost = config.energy.boundary_cost;

    for agent in agents.iter_mut().filter(|a| a.alive) {
        if agent.x - r < 0.0 || agent.x + r > w {
            agent.dx = -agent.dx;
            agent.expend_energy(cost);
        }
        if agent.y - r < 0.0 || agent.y + r > h {
            agent.dy = -agent.dy;
            agent.expend_energy(cost);
        }
        agent.x += agent.dx;
        agent.y += agent.dy;
    }
}

/// Bounces agents off impassable scenery: both velocity components flip and
/// the obstacle penalty is charged.
pub fn bounce_off_obstacles(agents: &mut [Agent], obstacles: &[Obstacle], config: &SimConfig) {
    for agent in agents.iter_mut().filter(|a| a.alive) {
        let body = Disc::new(agent.x, agent.y, config.body.agent_radius);
        for obstacle in obstacles {
            let area = Disc::new(obstacle.x, obstacle.y, config.body.obstacle_radius);
            if collides(&body, &area) {
                agent.dx = -agent.dx;
                agent.dy = -agent.dy;
                agent.expend_energy(config.energy.obstacle_cost);
            }
        }
    }
}

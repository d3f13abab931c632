//! Read-only state snapshots for the rendering and status-listing
//! collaborators.
//!
//! Snapshots are plain serializable values detached from the world; nothing
//! handed out here can mutate simulation state.

use crate::world::World;
use savanna_data::{Agent, Den, FoodSource, Obstacle, Species, WarningMarker, WorldTheme};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub species: Species,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub energy: i32,
    pub max_energy: i32,
    pub age: u32,
    pub intelligence: f32,
    pub flavour: i32,
    pub body_radius: f64,
    pub sense_radius: f64,
    pub poisoned: bool,
    pub poison_marked: bool,
    pub visible: bool,
    pub ready_to_breed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub calories: i32,
    pub poisonous: bool,
    pub edible: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenSnapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub occupied: bool,
}

/// One coherent view of the whole world at a tick boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u32,
    pub height: u32,
    pub theme: WorldTheme,
    pub dev_visuals: bool,
    pub warning_marker: Option<WarningMarker>,
    pub herbivores: Vec<AgentSnapshot>,
    pub carnivores: Vec<AgentSnapshot>,
    pub food: Vec<FoodSnapshot>,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub dens: Vec<DenSnapshot>,
}

impl World {
    /// Captures the current state as a detached snapshot.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        let agent_view = |a: &Agent| AgentSnapshot {
            id: a.id,
            species: a.species,
            x: a.x,
            y: a.y,
            dx: a.dx,
            dy: a.dy,
            energy: a.energy,
            max_energy: a.max_energy,
            age: a.age,
            intelligence: a.intelligence,
            flavour: a.flavour,
            body_radius: self.config.body.agent_radius,
            sense_radius: self.config.body.sense_radius,
            poisoned: a.poisoned,
            poison_marked: a.poison_marked,
            visible: a.visible,
            ready_to_breed: a.ready_to_breed,
        };
        let food_view = |f: &FoodSource| FoodSnapshot {
            x: f.x,
            y: f.y,
            radius: self.config.body.food_radius,
            calories: f.calories,
            poisonous: f.poisonous,
            edible: f.edible,
            visible: f.visible,
        };
        let obstacle_view = |o: &Obstacle| ObstacleSnapshot {
            x: o.x,
            y: o.y,
            radius: self.config.body.obstacle_radius,
        };
        let den_view = |d: &Den| DenSnapshot {
            x: d.x,
            y: d.y,
            radius: self.config.body.den_radius,
            occupied: d.occupied,
        };

        WorldSnapshot {
            tick: self.tick,
            width: self.width,
            height: self.height,
            theme: self.theme,
            dev_visuals: self.dev_visuals,
            warning_marker: self.warning_marker,
            herbivores: self.herbivores.iter().map(agent_view).collect(),
            carnivores: self.carnivores.iter().map(agent_view).collect(),
            food: self.food.iter().map(food_view).collect(),
            obstacles: self.obstacles.iter().map(obstacle_view).collect(),
            dens: self.dens.iter().map(den_view).collect(),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Species tag for a mobile agent.
///
/// Species-specific interaction rules dispatch on this tag rather than on a
/// type hierarchy, so one `Agent` record serves both populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Herbivore,
    Carnivore,
}

impl Species {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Species::Herbivore => "herbivore",
            Species::Carnivore => "carnivore",
        }
    }
}

/// A mobile life form: position, discretized heading, metabolic state and the
/// status flags the interaction rules read and write.
///
/// Energy is signed: it may dip below zero within a tick (a poisoned agent
/// pays double for every action) and the death pass removes the agent before
/// the next tick begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
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
    pub alive: bool,
    pub poisoned: bool,
    /// Outline indicator toggled by the periodic poison sweep; purely a
    /// presentation hint for the rendering collaborator.
    pub poison_marked: bool,
    pub visible: bool,
    pub ready_to_breed: bool,
}

impl Agent {
    /// Spends energy on an action. Poisoned agents pay double.
    pub fn expend_energy(&mut self, value: i32) {
        if self.poisoned {
            self.energy -= value * 2;
        } else {
            self.energy -= value;
        }
    }

    /// Unconditional energy gain (eating never costs extra while poisoned).
    pub fn gain_energy(&mut self, value: i32) {
        self.energy += value;
    }

    /// Stops the agent in place until the idle re-heading rule picks it up.
    pub fn halt(&mut self) {
        self.dx = 0.0;
        self.dy = 0.0;
    }

    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A static food source. Once consumed it goes inedible and hidden until the
/// periodic regrowth rule restores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSource {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub calories: i32,
    pub poisonous: bool,
    pub edible: bool,
    pub visible: bool,
}

/// An impassable scenery disc. Agents bounce off it and lose energy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub passable: bool,
}

/// A shelter one herbivore at a time can occupy to become hidden.
///
/// Occupancy is released only by the periodic den-release rule, never by the
/// occupant leaving or dying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Den {
    pub x: f64,
    pub y: f64,
    pub occupied: bool,
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use savanna_core::config::SimConfig;
use savanna_core::world::World;
use savanna_data::{Agent, Den, FoodSource, Obstacle, Species};
use uuid::Uuid;

/// Builds a world with empty populations and hand-placed entities, so a test
/// controls exactly which discs overlap.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    herbivores: Vec<Agent>,
    carnivores: Vec<Agent>,
    food: Vec<FoodSource>,
    obstacles: Vec<Obstacle>,
    dens: Vec<Den>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.carnivores = 0;
        config.world.herbivores = 0;
        config.world.obstacles = 0;
        config.world.food = 0;
        config.world.seed = Some(0);
        Self {
            config,
            herbivores: Vec::new(),
            carnivores: Vec::new(),
            food: Vec::new(),
            obstacles: Vec::new(),
            dens: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        match agent.species {
            Species::Herbivore => self.herbivores.push(agent),
            Species::Carnivore => self.carnivores.push(agent),
        }
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, calories: i32, poisonous: bool) -> Self {
        self.food.push(FoodSource {
            id: Uuid::from_u128(1000 + self.food.len() as u128),
            x,
            y,
            calories,
            poisonous,
            edible: true,
            visible: true,
        });
        self
    }

    pub fn with_obstacle(mut self, x: f64, y: f64) -> Self {
        self.obstacles.push(Obstacle {
            x,
            y,
            passable: false,
        });
        self
    }

    pub fn with_den(mut self, x: f64, y: f64) -> Self {
        self.dens.push(Den {
            x,
            y,
            occupied: false,
        });
        self
    }

    pub fn build(self) -> World {
        let mut world = World::build(self.config).expect("test world must build");
        world.herbivores.extend(self.herbivores);
        world.carnivores.extend(self.carnivores);
        world.food.extend(self.food);
        world.obstacles.extend(self.obstacles);
        world.dens.extend(self.dens);
        world
    }
}

/// Builds a single agent with deterministic attributes. The id is derived
/// from the position so two builders at the same spot collide on purpose
/// only when a test asks them to.
#[allow(dead_code)]
pub struct AgentBuilder {
    species: Species,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    energy: i32,
    age: u32,
    intelligence: f32,
    flavour: i32,
    poisoned: bool,
    visible: bool,
    ready_to_breed: bool,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn herbivore() -> Self {
        Self::new(Species::Herbivore)
    }

    pub fn carnivore() -> Self {
        Self::new(Species::Carnivore)
    }

    fn new(species: Species) -> Self {
        Self {
            species,
            x: 100.0,
            y: 100.0,
            dx: 0.0,
            dy: 0.0,
            energy: 1500,
            age: 0,
            intelligence: 0.5,
            flavour: 200,
            poisoned: false,
            visible: true,
            ready_to_breed: false,
            id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn velocity(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn energy(mut self, amount: i32) -> Self {
        self.energy = amount;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn intelligence(mut self, level: f32) -> Self {
        self.intelligence = level;
        self
    }

    pub fn flavour(mut self, flavour: i32) -> Self {
        self.flavour = flavour;
        self
    }

    pub fn poisoned(mut self) -> Self {
        self.poisoned = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn ready_to_breed(mut self) -> Self {
        self.ready_to_breed = true;
        self
    }

    pub fn build(self) -> Agent {
        // Deterministic id derived from the spawn point to keep test runs
        // reproducible without thread_rng.
        let id = self.id.unwrap_or_else(|| {
            let seed = (self.x.to_bits() ^ self.y.to_bits()).wrapping_mul(0x517CC1B727220A95);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Uuid::from_u128(rng.gen::<u128>())
        });
        Agent {
            id,
            species: self.species,
            x: self.x,
            y: self.y,
            dx: self.dx,
            dy: self.dy,
            energy: self.energy,
            max_energy: self.energy,
            age: self.age,
            intelligence: self.intelligence,
            flavour: self.flavour,
            alive: true,
            poisoned: self.poisoned,
            poison_marked: false,
            visible: self.visible,
            ready_to_breed: self.ready_to_breed,
        }
    }
}

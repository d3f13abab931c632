//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to an optional
//! `config.toml` file. Every numeric threshold the interaction rules use is
//! named here so tests can probe boundary behavior directly instead of
//! chasing literals through the systems code.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1200
//! height = 800
//! herbivores = 12
//! carnivores = 4
//! seed = 42
//!
//! [energy]
//! breeding_threshold = 2000
//! ```

use serde::{Deserialize, Serialize};

/// World dimensions, initial population counts and placement parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub carnivores: usize,
    pub herbivores: usize,
    pub obstacles: usize,
    pub food: usize,
    /// Border strip reserved for HUD framing; nothing spawns inside it.
    pub spawn_margin: u32,
    /// Rejection-sampling retry cap before a spawn attempt is abandoned.
    pub placement_attempts: u32,
    /// One den is created per this many life forms.
    pub den_ratio: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            carnivores: 4,
            herbivores: 12,
            obstacles: 6,
            food: 10,
            spawn_margin: 45,
            placement_attempts: 64,
            den_ratio: 20,
            seed: None,
        }
    }
}

/// Bounding-disc radii. The sense disc never blocks; it only detects.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BodyConfig {
    pub agent_radius: f64,
    pub sense_radius: f64,
    pub food_radius: f64,
    pub obstacle_radius: f64,
    pub den_radius: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            agent_radius: 15.0,
            sense_radius: 100.0,
            food_radius: 20.0,
            obstacle_radius: 30.0,
            den_radius: 20.0,
        }
    }
}

/// Energy bookkeeping: spawn ranges, action costs and breeding economics.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EnergyConfig {
    /// Lower bound of the spawn energy draw.
    pub spawn_min: i32,
    /// Width of the spawn energy draw (exclusive upper bound).
    pub spawn_span: i32,
    pub boundary_cost: i32,
    pub obstacle_cost: i32,
    pub den_entry_cost: i32,
    /// Paid per steering axis while homing on a den.
    pub den_steer_cost: i32,
    pub breeding_cost: i32,
    /// An agent above this is ready to breed.
    pub breeding_threshold: i32,
    /// Energy granted by a boost command.
    pub boost_energy: i32,
    /// Intelligence granted by a boost command, clamped to 1.0.
    pub boost_intelligence: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            spawn_min: 1000,
            spawn_span: 1000,
            boundary_cost: 100,
            obstacle_cost: 100,
            den_entry_cost: 100,
            den_steer_cost: 1,
            breeding_cost: 1000,
            breeding_threshold: 2000,
            boost_energy: 200,
            boost_intelligence: 0.1,
        }
    }
}

/// Behavioral thresholds and the discretized movement speeds.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BehaviorConfig {
    /// An agent at or above this intelligence recognizes poison.
    pub intelligence_cutoff: f32,
    /// Agents strictly older than this die of old age.
    pub max_age: u32,
    /// Exclusive upper bound of the spawn age draw.
    pub spawn_age_span: u32,
    /// Compass-step magnitude for wandering.
    pub wander_speed: f64,
    /// Steering magnitude while homing on food or a den.
    pub forage_steer_speed: f64,
    /// Steering magnitude while a carnivore closes on prey.
    pub chase_steer_speed: f64,
    /// Velocity given to a herbivore ejected from a den.
    pub eject_speed: f64,
    /// Lower bound of the flavour draw.
    pub flavour_min: i32,
    /// Width of the flavour draw (exclusive upper bound).
    pub flavour_span: i32,
    /// Exclusive upper bound of the calorie draw.
    pub calories_span: i32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            intelligence_cutoff: 0.7,
            max_age: 200,
            spawn_age_span: 5,
            wander_speed: 1.5,
            forage_steer_speed: 2.5,
            chase_steer_speed: 2.0,
            eject_speed: 2.5,
            flavour_min: 80,
            flavour_span: 300,
            calories_span: 10,
        }
    }
}

/// Tick-modulo periods for the event scheduler and the disaster countdown.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScheduleConfig {
    pub poison_mark_period: u64,
    pub reheading_period: u64,
    pub food_regrowth_period: u64,
    pub den_eject_period: u64,
    pub den_release_period: u64,
    pub disaster_countdown: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poison_mark_period: 2,
            reheading_period: 3,
            food_regrowth_period: 10,
            den_eject_period: 20,
            den_release_period: 25,
            disaster_countdown: 5,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub body: BodyConfig,
    pub energy: EnergyConfig,
    pub behavior: BehaviorConfig,
    pub schedule: ScheduleConfig,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure. Callers are expected to
    /// clamp user input before it gets here; the checks are the engine's
    /// preconditions, not a UI.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.width <= 10_000 && self.world.height <= 10_000,
            "World dimensions too large (max 10000)"
        );
        anyhow::ensure!(
            self.world.width > 2 * self.world.spawn_margin
                && self.world.height > 2 * self.world.spawn_margin,
            "World too small for the spawn margin (needs > {} on each axis)",
            2 * self.world.spawn_margin
        );
        anyhow::ensure!(
            self.world.placement_attempts > 0,
            "Placement attempts must be positive"
        );
        anyhow::ensure!(self.world.den_ratio > 0, "Den ratio must be positive");
        anyhow::ensure!(
            self.world.carnivores <= 10_000 && self.world.herbivores <= 10_000,
            "Initial population too large (max 10000 per species)"
        );

        anyhow::ensure!(self.body.agent_radius > 0.0, "Agent radius must be positive");
        anyhow::ensure!(
            self.body.sense_radius >= self.body.agent_radius,
            "Sense radius must not be smaller than the body radius"
        );
        anyhow::ensure!(self.body.food_radius > 0.0, "Food radius must be positive");
        anyhow::ensure!(
            self.body.obstacle_radius > 0.0,
            "Obstacle radius must be positive"
        );
        anyhow::ensure!(self.body.den_radius > 0.0, "Den radius must be positive");

        anyhow::ensure!(self.energy.spawn_min > 0, "Spawn energy must be positive");
        anyhow::ensure!(self.energy.spawn_span > 0, "Spawn energy span must be positive");
        anyhow::ensure!(
            self.energy.breeding_threshold > 0,
            "Breeding threshold must be positive"
        );
        anyhow::ensure!(
            self.energy.breeding_cost >= 0,
            "Breeding cost must be non-negative"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.behavior.intelligence_cutoff),
            "Intelligence cutoff must be in [0.0, 1.0]"
        );
        anyhow::ensure!(self.behavior.max_age > 0, "Max age must be positive");
        anyhow::ensure!(
            self.behavior.calories_span > 0,
            "Calorie span must be positive"
        );
        anyhow::ensure!(
            self.behavior.flavour_span > 0,
            "Flavour span must be positive"
        );

        anyhow::ensure!(
            self.schedule.poison_mark_period > 0
                && self.schedule.reheading_period > 0
                && self.schedule.food_regrowth_period > 0
                && self.schedule.den_eject_period > 0
                && self.schedule.den_release_period > 0,
            "Scheduler periods must be positive"
        );
        anyhow::ensure!(
            self.schedule.disaster_countdown > 0,
            "Disaster countdown must be positive"
        );

        Ok(())
    }

    /// Loads and validates configuration from TOML text. Missing sections and
    /// fields fall back to defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}

pub mod data;

pub use data::command::Command;
pub use data::entity::{Agent, Den, FoodSource, Obstacle, Species};
pub use data::environment::{WarningMarker, WorldTheme};

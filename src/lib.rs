pub mod runner;

pub use savanna_core::{SimConfig, World};

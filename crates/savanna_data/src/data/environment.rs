use serde::{Deserialize, Serialize};

/// Background theme of the world, swapped by the disaster controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldTheme {
    #[default]
    Meadow,
    Wasteland,
}

impl WorldTheme {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            WorldTheme::Meadow => "meadow",
            WorldTheme::Wasteland => "wasteland",
        }
    }
}

/// The crimson disc painted over the world while a disaster counts down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarningMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

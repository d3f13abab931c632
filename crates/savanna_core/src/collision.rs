//! Bounding-disc overlap testing.
//!
//! The one spatial primitive in the engine. Every interaction rule is a
//! sequence of these tests over the entity collections; there is no spatial
//! index, so each pass is brute-force pairwise.

use serde::{Deserialize, Serialize};

/// A circle used either as a physical body or as a non-blocking sense area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Disc {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

/// Returns true when the two discs overlap or touch.
///
/// Compares squared center distance against the squared radius sum, so exact
/// tangency reports a collision and no square root is taken.
#[must_use]
pub fn collides(a: &Disc, b: &Disc) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let reach = a.radius + b.radius;
    dx * dx + dy * dy <= reach * reach
}

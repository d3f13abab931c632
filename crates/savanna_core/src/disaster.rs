//! The disaster countdown: a five-step siren that ends in a population cull
//! and a scorched backdrop.

use crate::world::World;
use savanna_data::{WarningMarker, WorldTheme};

/// Linear countdown state machine driven once per tick.
///
/// `trigger` arms it; the arming tick latches the countdown and each later
/// tick runs one siren step. The first step paints the warning marker, the
/// step that sees 1 removes every herbivore and carnivore, clears the marker
/// and swaps the theme; then the machine resets and idles until re-armed.
/// Triggering while a countdown runs is ignored.
#[derive(Debug, Clone)]
pub struct DisasterController {
    pending: bool,
    active: bool,
    countdown: u8,
    steps: u8,
}

impl DisasterController {
    #[must_use]
    pub fn new(steps: u8) -> Self {
        Self {
            pending: false,
            active: false,
            countdown: steps,
            steps,
        }
    }

    /// Arms the countdown unless one is already running.
    pub fn trigger(&mut self) {
        if !self.active {
            self.pending = true;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Steps remaining, meaningful only while active.
    #[must_use]
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
}

impl World {
    /// Runs one disaster-controller step; called at the end of every tick.
    pub(crate) fn advance_disaster(&mut self) {
        if self.disaster.pending {
            self.disaster.pending = false;
            self.disaster.active = true;
            self.disaster.countdown = self.disaster.steps;
            tracing::info!(tick = self.tick, "Disaster armed");
            return;
        }
        if !self.disaster.active {
            return;
        }

        if self.disaster.countdown == self.disaster.steps {
            let height = f64::from(self.height);
            self.warning_marker = Some(WarningMarker {
                x: f64::from(self.width) / 2.0,
                y: height / 2.0,
                radius: height / 2.0,
            });
        }

        if self.disaster.countdown == 1 {
            let culled = self.population();
            self.herbivores.clear();
            self.carnivores.clear();
            self.warning_marker = None;
            self.theme = WorldTheme::Wasteland;
            self.disaster.active = false;
            self.disaster.countdown = self.disaster.steps;
            tracing::info!(tick = self.tick, culled, "Disaster struck");
            return;
        }

        self.disaster.countdown -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_is_ignored_while_active() {
        let mut controller = DisasterController::new(5);
        controller.trigger();
        assert!(controller.pending);

        controller.pending = false;
        controller.active = true;
        controller.trigger();
        assert!(!controller.pending);
    }

    #[test]
    fn new_controller_idles() {
        let controller = DisasterController::new(5);
        assert!(!controller.is_active());
        assert_eq!(controller.countdown(), 5);
    }
}

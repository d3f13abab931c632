mod common;

use common::AgentBuilder;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use savanna_core::collision::{collides, Disc};
use savanna_core::config::SimConfig;
use savanna_core::lifecycle;

proptest! {
    #[test]
    fn collision_is_symmetric(
        ax in -2000.0f64..2000.0, ay in -2000.0f64..2000.0,
        bx in -2000.0f64..2000.0, by in -2000.0f64..2000.0,
        ar in 0.1f64..200.0, br in 0.1f64..200.0,
    ) {
        let a = Disc::new(ax, ay, ar);
        let b = Disc::new(bx, by, br);
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn tangent_discs_always_collide(
        x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
        r1 in 1.0f64..100.0, r2 in 1.0f64..100.0,
    ) {
        // Place B exactly r1 + r2 away along the x axis.
        let a = Disc::new(x, y, r1);
        let b = Disc::new(x + r1 + r2, y, r2);
        prop_assert!(collides(&a, &b));
    }

    #[test]
    fn clearly_separated_discs_never_collide(
        x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
        r1 in 1.0f64..100.0, r2 in 1.0f64..100.0,
        gap in 0.5f64..500.0,
    ) {
        let a = Disc::new(x, y, r1);
        let b = Disc::new(x + r1 + r2 + gap, y, r2);
        prop_assert!(!collides(&a, &b));
    }

    #[test]
    fn expenditure_is_linear_and_doubles_when_poisoned(
        energy in -10_000i32..10_000, cost in 0i32..5_000,
    ) {
        let mut healthy = AgentBuilder::herbivore().energy(energy).build();
        healthy.expend_energy(cost);
        prop_assert_eq!(healthy.energy, energy - cost);

        let mut sick = AgentBuilder::herbivore().energy(energy).poisoned().build();
        sick.expend_energy(cost);
        prop_assert_eq!(sick.energy, energy - 2 * cost);
    }

    #[test]
    fn gain_is_unconditional(
        energy in -10_000i32..10_000, amount in 0i32..5_000,
    ) {
        let mut sick = AgentBuilder::carnivore().energy(energy).poisoned().build();
        sick.gain_energy(amount);
        prop_assert_eq!(sick.energy, energy + amount);
    }

    #[test]
    fn placement_never_violates_the_margin(seed in 0u64..10_000) {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (x, y) = lifecycle::place_within(&config, &mut rng).unwrap();
        let margin = f64::from(config.world.spawn_margin);
        prop_assert!(x > margin && x < f64::from(config.world.width) - margin);
        prop_assert!(y > margin && y < f64::from(config.world.height) - margin);
    }

    #[test]
    fn headings_are_always_one_of_the_compass_pairs(seed in 0u64..10_000) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (dx, dy) = lifecycle::random_heading(1.5, &mut rng);
        let legal = [
            (0.0, -1.5),
            (1.5, -1.5),
            (1.5, 0.0),
            (1.5, 1.5),
            (0.0, 1.5),
            (-1.5, 0.0),
            (-1.5, -1.5),
        ];
        prop_assert!(legal.contains(&(dx, dy)));
    }
}

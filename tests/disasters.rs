mod common;

use common::{AgentBuilder, WorldBuilder};
use savanna_data::{Command, WorldTheme};

fn stocked_world() -> savanna_core::World {
    WorldBuilder::new()
        .with_agent(AgentBuilder::herbivore().at(200.0, 200.0).build())
        .with_agent(AgentBuilder::herbivore().at(600.0, 300.0).build())
        .with_agent(AgentBuilder::carnivore().at(900.0, 600.0).build())
        .build()
}

#[test]
fn disaster_empties_the_world_five_ticks_after_arming() {
    let mut world = stocked_world();
    world.push_command(Command::TriggerDisaster);

    // The arming tick: the countdown latches but no siren step has run yet.
    world.tick();
    let armed_at = world.tick;
    assert!(world.disaster_active());
    assert!(world.warning_marker.is_none());

    // First siren step paints the warning disc over the world center.
    world.tick();
    let marker = world.warning_marker.expect("marker should be painted");
    assert_eq!(marker.x, 600.0);
    assert_eq!(marker.y, 400.0);
    assert_eq!(marker.radius, 400.0);

    // The populations survive until the final step.
    while world.tick < armed_at + 4 {
        world.tick();
        assert!(world.population() > 0);
        assert!(world.warning_marker.is_some());
    }

    world.tick();
    assert_eq!(world.tick, armed_at + 5);
    assert!(world.herbivores.is_empty());
    assert!(world.carnivores.is_empty());
    assert!(world.warning_marker.is_none());
    assert_eq!(world.theme, WorldTheme::Wasteland);
    assert!(!world.disaster_active());
}

#[test]
fn scenery_and_resources_survive_a_disaster() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::herbivore().at(200.0, 200.0).build())
        .with_food(500.0, 500.0, 5, false)
        .with_obstacle(700.0, 300.0)
        .with_den(400.0, 600.0)
        .build();

    world.push_command(Command::TriggerDisaster);
    for _ in 0..6 {
        world.tick();
    }

    assert!(world.herbivores.is_empty());
    assert_eq!(world.food.len(), 1);
    assert_eq!(world.obstacles.len(), 1);
    assert_eq!(world.dens.len(), 1);
}

#[test]
fn retriggering_mid_countdown_does_not_restart_it() {
    let mut world = stocked_world();
    world.push_command(Command::TriggerDisaster);
    world.tick();
    let armed_at = world.tick;

    // Spam the trigger while the siren runs.
    for _ in 0..3 {
        world.push_command(Command::TriggerDisaster);
        world.tick();
    }
    while world.tick < armed_at + 5 {
        world.tick();
    }

    assert!(world.herbivores.is_empty());
    assert!(!world.disaster_active(), "the spammed triggers were ignored");

    // The machine idles afterwards; nothing re-arms on its own.
    world.tick();
    assert!(!world.disaster_active());
}

#[test]
fn the_world_can_be_restocked_after_a_disaster() {
    let mut world = stocked_world();
    world.push_command(Command::TriggerDisaster);
    for _ in 0..6 {
        world.tick();
    }
    assert_eq!(world.population(), 0);

    world.push_command(Command::AddHerbivore);
    world.push_command(Command::AddCarnivore);
    world.tick();
    assert_eq!(world.herbivores.len(), 1);
    assert_eq!(world.carnivores.len(), 1);
    assert_eq!(world.theme, WorldTheme::Wasteland, "the scar stays");
}

#[test]
fn a_second_disaster_can_run_after_the_first_completes() {
    let mut world = stocked_world();
    world.push_command(Command::TriggerDisaster);
    for _ in 0..6 {
        world.tick();
    }

    world.push_command(Command::AddHerbivore);
    world.tick();
    assert_eq!(world.population(), 1);

    world.push_command(Command::TriggerDisaster);
    for _ in 0..6 {
        world.tick();
    }
    assert_eq!(world.population(), 0);
}

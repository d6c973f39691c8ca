//! Fleet-strategy lookout tests.
//!
//! Each test scripts one world snapshot, runs a single tick and
//! asserts on the recorded action requests and mission lifecycle calls.

use corsair_core::prelude::*;
use corsair_test_utils::fixtures::fixed_f;
use corsair_test_utils::scenario::ScenarioWorld;

const OWNER: PlayerId = PlayerId(1);
const ENEMY: PlayerId = PlayerId(2);
const NEUTRAL: PlayerId = PlayerId(3);

fn world_at_war() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.make_hostile(OWNER, ENEMY);
    world
}

fn run_tick(world: ScenarioWorld) -> ScenarioWorld {
    let mut engine = CombatDecisionEngine::new(OWNER, world);
    engine.tick();
    engine.into_context()
}

#[test]
fn test_quiet_mission_is_continued_exactly_once() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let s2 = world.spawn(OWNER, ShipClass::Fighting);
    let mission = world.launch_mission_in_combat(vec![s1, s2]);

    let world = run_tick(world);

    assert_eq!(world.continued, vec![mission]);
    assert!(world.aborted.is_empty());
}

#[test]
fn test_empty_fleet_is_aborted_with_no_request() {
    // Scenario B: the whole fleet was destroyed since the last tick.
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let mission = world.launch_mission_in_combat(vec![s1]);
    world.destroy_ship(s1);

    let world = run_tick(world);

    assert_eq!(world.aborted, vec![mission]);
    assert!(world.continued.is_empty());
    assert!(world.requests.is_empty());
}

#[test]
fn test_fighting_ships_preempt_pirates() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let pirate = world.spawn(ENEMY, ShipClass::Pirate);
    let warship = world.spawn(ENEMY, ShipClass::Fighting);
    world.launch_mission_in_combat(vec![s1]);
    world.set_nearby(s1, vec![pirate, warship]);

    let world = run_tick(world);

    // One request only, and it targets the warships, not the pirates.
    assert_eq!(world.requests.len(), 1);
    let request = &world.requests[0];
    assert_eq!(request.action_type, ActionType::Offensive);
    assert_eq!(request.trigger, Trigger::FightingShipsInSight);
    assert_eq!(request.environment.enemies, Some(vec![warship]));
    // Unresolved combat: no lifecycle call either way.
    assert!(world.continued.is_empty());
    assert!(world.aborted.is_empty());
}

#[test]
fn test_engagement_computes_power_balance_over_both_groups() {
    // Scenario A: fleet [S1, S2] against one hostile warship.
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let s2 = world.spawn(OWNER, ShipClass::Fighting);
    let e1 = world.spawn(ENEMY, ShipClass::Fighting);
    world.launch_mission_in_combat(vec![s1, s2]);
    world.set_nearby(s1, vec![e1]);
    world.script_balance(PowerBalance::new(fixed_f(1.5)));

    let world = run_tick(world);

    assert_eq!(
        world.balance_calls.borrow().as_slice(),
        &[(vec![s1, s2], vec![e1])]
    );
    assert_eq!(world.requests.len(), 1);
    let request = &world.requests[0];
    assert_eq!(request.trigger, Trigger::FightingShipsInSight);
    assert_eq!(request.environment.ship_group, vec![s1, s2]);
    assert_eq!(
        request.environment.power_balance,
        Some(PowerBalance::new(fixed_f(1.5)))
    );
}

#[test]
fn test_pirates_alone_draw_a_pirate_engagement() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let pirate = world.spawn(ENEMY, ShipClass::Pirate);
    world.launch_mission_in_combat(vec![s1]);
    world.set_nearby(s1, vec![pirate]);

    let world = run_tick(world);

    assert_eq!(world.requests.len(), 1);
    let request = &world.requests[0];
    assert_eq!(request.action_type, ActionType::Offensive);
    assert_eq!(request.trigger, Trigger::PiratesInSight);
    assert_eq!(request.environment.enemies, Some(vec![pirate]));
    assert_eq!(world.balance_calls.borrow().len(), 1);
    assert!(world.continued.is_empty());
}

#[test]
fn test_hostile_traders_do_not_block_resolution() {
    // Only warships and pirates count as unresolved combat; a hostile
    // merchant nearby still lets the mission continue.
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let trader = world.spawn(ENEMY, ShipClass::Trade);
    let mission = world.launch_mission_in_combat(vec![s1]);
    world.set_nearby(s1, vec![trader]);

    let world = run_tick(world);

    assert_eq!(world.continued, vec![mission]);
    // All ships idle, so the idle request is also emitted.
    assert_eq!(world.requests.len(), 1);
    assert_eq!(world.requests[0].trigger, Trigger::NoOneInSight);
}

#[test]
fn test_neutral_warships_are_not_engaged() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let bystander = world.spawn(NEUTRAL, ShipClass::Fighting);
    let mission = world.launch_mission_in_combat(vec![s1]);
    world.set_nearby(s1, vec![bystander]);

    let world = run_tick(world);

    assert_eq!(world.continued, vec![mission]);
    assert!(world
        .requests
        .iter()
        .all(|request| request.action_type != ActionType::Offensive));
}

#[test]
fn test_idle_request_requires_unanimous_idleness() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let s2 = world.spawn(OWNER, ShipClass::Fighting);
    let mission = world.launch_mission_in_combat(vec![s1, s2]);
    world.set_movement_state(s2, MovementState::OnMission);

    let world = run_tick(world);

    // Mission continues, but a partially busy fleet gets no idle order.
    assert_eq!(world.continued, vec![mission]);
    assert!(world.requests.is_empty());
}

#[test]
fn test_fully_idle_fleet_gets_the_idle_request() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let s2 = world.spawn(OWNER, ShipClass::Fighting);
    world.launch_mission_in_combat(vec![s1, s2]);

    let world = run_tick(world);

    assert_eq!(world.requests.len(), 1);
    let request = &world.requests[0];
    assert_eq!(request.action_type, ActionType::Idle);
    assert_eq!(request.trigger, Trigger::NoOneInSight);
    assert_eq!(request.environment.ship_group, vec![s1, s2]);
    assert!(request.environment.enemies.is_none());
    assert!(request.environment.power_balance.is_none());
}

#[test]
fn test_missions_are_decided_independently() {
    let mut world = world_at_war();
    let a1 = world.spawn(OWNER, ShipClass::Fighting);
    let b1 = world.spawn(OWNER, ShipClass::Fighting);
    let warship = world.spawn(ENEMY, ShipClass::Fighting);
    let _embattled = world.launch_mission_in_combat(vec![a1]);
    let quiet = world.launch_mission_in_combat(vec![b1]);
    world.set_nearby(a1, vec![warship]);
    world.set_movement_state(b1, MovementState::OnMission);

    let world = run_tick(world);

    assert_eq!(world.continued, vec![quiet]);
    assert_eq!(world.requests.len(), 1);
    assert_eq!(world.requests[0].trigger, Trigger::FightingShipsInSight);
    assert_eq!(world.requests[0].environment.ship_group, vec![a1]);
}

#[test]
fn test_sailing_missions_are_ignored() {
    let mut world = world_at_war();
    let s1 = world.spawn(OWNER, ShipClass::Fighting);
    let warship = world.spawn(ENEMY, ShipClass::Fighting);
    let _sailing = world.missions.launch(vec![s1]).unwrap();
    world.set_nearby(s1, vec![warship]);

    let world = run_tick(world);

    // Not flagged in-combat: the fleet engine does not watch it.
    assert!(world.requests.is_empty());
    assert!(world.continued.is_empty());
    assert!(world.aborted.is_empty());
}

//! Lookout benchmarks for corsair_core.
//!
//! Run with: `cargo bench -p corsair_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use corsair_core::prelude::*;
use corsair_test_utils::scenario::ScenarioWorld;

const OWNER: PlayerId = PlayerId(1);
const ENEMY: PlayerId = PlayerId(2);

/// A world with `missions` in-combat fleets of three ships, half of
/// them with a hostile warship in sight.
fn embattled_world(missions: usize) -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.make_hostile(OWNER, ENEMY);
    for i in 0..missions {
        let fleet: Vec<ShipId> = (0..3).map(|_| world.spawn(OWNER, ShipClass::Fighting)).collect();
        if i % 2 == 0 {
            let warship = world.spawn(ENEMY, ShipClass::Fighting);
            world.set_nearby(fleet[0], vec![warship]);
        }
        world.launch_mission_in_combat(fleet);
    }
    world
}

/// Benchmarks one fleet lookout tick over worlds of growing size.
pub fn lookout_benchmark(c: &mut Criterion) {
    for missions in [4usize, 32, 128] {
        let world = embattled_world(missions);
        c.bench_function(&format!("fleet_lookout/{missions}_missions"), |b| {
            b.iter_batched(
                || CombatDecisionEngine::new(OWNER, world.clone()),
                |mut engine| {
                    engine.tick();
                    engine
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, lookout_benchmark);
criterion_main!(benches);

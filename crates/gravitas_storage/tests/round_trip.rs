use gravitas_core::SimConfig;
use gravitas_physics::{procgen, EulerMethodGravityEvolution, MergeCollision, StarFormation};
use gravitas_sim::{Iterations, Simulator};
use gravitas_storage::{decode, encode, from_file, to_file};

fn star_planet_simulator(limit: u64) -> Simulator {
    Simulator::new(
        vec![Box::new(EulerMethodGravityEvolution::default())],
        vec![Box::new(MergeCollision), Box::new(StarFormation::default())],
        procgen::star_planet_system(),
        Box::new(Iterations::new(limit)),
    )
}

#[test]
fn star_planet_simulator_round_trips() {
    let before = star_planet_simulator(1000);
    let encoding = encode(&before).unwrap();
    let after = decode(&encoding).unwrap();
    assert_eq!(format!("{before:?}"), format!("{after:?}"));
}

#[test]
fn round_trip_through_file() {
    let path = std::env::temp_dir().join(format!("gravitas-simulator-{}.json", std::process::id()));
    let before = star_planet_simulator(10);

    to_file(&before, &path).unwrap();
    let after = from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(format!("{before:?}"), format!("{after:?}"));
}

#[test]
fn decoded_simulator_continues_identically() {
    let config = SimConfig {
        seed: 3,
        body_count: 8,
        iterations: 40,
        ..SimConfig::default()
    };
    let mut original = Simulator::from_config(&config);
    for _ in 0..15 {
        original.step().unwrap();
    }
    let mut restored = decode(&encode(&original).unwrap()).unwrap();

    original.run().unwrap();
    restored.run().unwrap();
    assert_eq!(original.universe(), restored.universe());
}

use gravitas_core::{Body, Evolves, Resolves, Universe, Vector2D};
use gravitas_physics::{procgen, EulerMethodGravityEvolution, MergeCollision, StarFormation};
use gravitas_sim::{Iterations, Simulator, TraceRender};

fn resting(x: f64, y: f64, mass: f64, radius: f64) -> Body {
    Body::new(Vector2D::new(x, y), Vector2D::zero(), mass, radius, false)
}

fn separation(universe: &Universe) -> f64 {
    let bodies = universe.bodies();
    (bodies[0].position - bodies[1].position).length()
}

#[test]
fn two_bodies_fall_together() {
    let gravity: Vec<Box<dyn Evolves>> = vec![Box::new(EulerMethodGravityEvolution::default())];
    let universe = Universe::new(vec![resting(0.0, 0.0, 1.0, 0.0), resting(0.0, 4.0, 1.0, 0.0)]);

    let mut simulator = Simulator::new(gravity, vec![], universe, Box::new(Iterations::new(1)));
    simulator.run().unwrap();
    assert!((separation(simulator.universe()) - 3.9375).abs() < 1e-9);

    let gravity: Vec<Box<dyn Evolves>> = vec![Box::new(EulerMethodGravityEvolution::default())];
    let mut simulator = Simulator::new(
        gravity,
        vec![],
        simulator.universe().clone(),
        Box::new(Iterations::new(1)),
    );
    simulator.run().unwrap();
    assert!((separation(simulator.universe()) - 3.748).abs() < 5e-4);
}

#[test]
fn three_overlapping_bodies_merge_into_a_star() {
    let resolution: Vec<Box<dyn Resolves>> = vec![
        Box::new(MergeCollision),
        Box::new(StarFormation::new(500.0)),
    ];
    let universe = Universe::new(vec![
        resting(100.0, 100.0, 200.0, 10.0),
        resting(110.0, 100.0, 200.0, 10.0),
        resting(105.0, 108.0, 200.0, 10.0),
    ]);

    let mut simulator = Simulator::new(vec![], resolution, universe, Box::new(Iterations::new(1)));
    let summary = simulator.run().unwrap();

    assert_eq!(1, summary.bodies_remaining);
    let merged = &simulator.universe().bodies()[0];
    assert_eq!(600.0, merged.mass);
    assert!(merged.star);
    // Radii truncate at each merge: 14, then sqrt(14² + 10²) ≈ 17.2
    assert_eq!(17.0, merged.radius);
}

#[test]
fn star_planet_system_runs() {
    let evolution: Vec<Box<dyn Evolves>> = vec![Box::new(EulerMethodGravityEvolution::default())];
    let resolution: Vec<Box<dyn Resolves>> = vec![
        Box::new(MergeCollision),
        Box::new(StarFormation::default()),
    ];
    let mut simulator = Simulator::new(
        evolution,
        resolution,
        procgen::star_planet_system(),
        Box::new(Iterations::new(10)),
    )
    .with_renderer(Box::new(TraceRender::new(5)));

    let mass = simulator.universe().total_mass();
    let summary = simulator.run().unwrap();
    assert_eq!(10, summary.iterations);
    assert!((simulator.universe().total_mass() - mass).abs() < 1e-9);
    assert!(simulator.universe().bodies()[0].star);
}

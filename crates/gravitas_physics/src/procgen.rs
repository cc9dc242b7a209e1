use gravitas_core::constants::UNIVERSE_SIZE;
use gravitas_core::{Body, ScenarioKind, SimConfig, Universe, Vector2D};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Universe side length as an integer for inclusive integer draws
const SIZE: i64 = UNIVERSE_SIZE as i64;

/// Mass and radius shared by every body of `static_identical_planets`
const IDENTICAL_MASS: f64 = 150.0;
const IDENTICAL_RADIUS: f64 = 10.0;

/// Uniform integer in `[low, high]`, as a float
fn draw(rng: &mut impl Rng, low: i64, high: i64) -> f64 {
    rng.gen_range(low..=high) as f64
}

fn random_position(rng: &mut impl Rng) -> Vector2D {
    Vector2D::new(draw(rng, 0, SIZE), draw(rng, 0, SIZE))
}

/// Generate `count` non-star bodies with random state.
///
/// Positions cover the whole universe, velocities are small and signed,
/// mass in [SIZE/30, SIZE] and radius in [SIZE/100, SIZE/30].
pub fn random(count: usize, rng: &mut impl Rng) -> Universe {
    let bodies = (0..count)
        .map(|_| {
            let position = random_position(rng);
            let velocity = Vector2D::new(draw(rng, -3, 3), draw(rng, -SIZE / 30, SIZE / 30));
            let mass = draw(rng, SIZE / 30, SIZE);
            let radius = draw(rng, SIZE / 100, SIZE / 30);
            Body::new(position, velocity, mass, radius, false)
        })
        .collect();
    Universe::new(bodies)
}

/// A heavy star resting at the center with one light planet on a spiralling
/// orbit.
pub fn star_planet_system() -> Universe {
    let star = Body::new(
        Vector2D::splat(UNIVERSE_SIZE / 2.0),
        Vector2D::zero(),
        UNIVERSE_SIZE * 10.0,
        8.0,
        true,
    );
    let planet = Body::new(
        Vector2D::splat(UNIVERSE_SIZE / 3.0),
        Vector2D::new(4.0, -4.0),
        UNIVERSE_SIZE / 1000.0,
        2.0,
        false,
    );
    Universe::new(vec![star, planet])
}

/// Generate `count` resting bodies of identical mass and radius at random
/// positions.
pub fn static_identical_planets(count: usize, rng: &mut impl Rng) -> Universe {
    let bodies = (0..count)
        .map(|_| {
            Body::new(
                random_position(rng),
                Vector2D::zero(),
                IDENTICAL_MASS,
                IDENTICAL_RADIUS,
                false,
            )
        })
        .collect();
    Universe::new(bodies)
}

/// Build the initial universe described by `config`, deterministic in its seed
pub fn generate(config: &SimConfig) -> Universe {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    match config.scenario {
        ScenarioKind::Random => random(config.body_count, &mut rng),
        ScenarioKind::StarPlanet => star_planet_system(),
        ScenarioKind::StaticIdentical => static_identical_planets(config.body_count, &mut rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let universe = random(200, &mut rng);
        assert_eq!(200, universe.len());
        for body in &universe {
            assert!((0.0..=640.0).contains(&body.position.x));
            assert!((0.0..=640.0).contains(&body.position.y));
            assert!((-3.0..=3.0).contains(&body.velocity.x));
            assert!((-21.0..=21.0).contains(&body.velocity.y));
            assert!((21.0..=640.0).contains(&body.mass));
            assert!((6.0..=21.0).contains(&body.radius));
            assert_eq!(body.position, body.position.round());
            assert!(!body.star);
        }
    }

    #[test]
    fn test_star_planet_system() {
        let universe = star_planet_system();
        assert_eq!(2, universe.len());
        let star = &universe.bodies()[0];
        let planet = &universe.bodies()[1];

        assert!(star.star);
        assert_eq!(Vector2D::splat(320.0), star.position);
        assert_eq!(Vector2D::zero(), star.velocity);
        assert_eq!(6400.0, star.mass);
        assert_eq!(8.0, star.radius);

        assert!(!planet.star);
        assert_eq!(Vector2D::new(4.0, -4.0), planet.velocity);
        assert!(planet.mass > 0.0 && planet.mass < star.mass);
        assert!(!star.overlaps(planet));
    }

    #[test]
    fn test_static_identical_planets() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let universe = static_identical_planets(25, &mut rng);
        assert_eq!(25, universe.len());
        for body in &universe {
            assert_eq!(Vector2D::zero(), body.velocity);
            assert_eq!(150.0, body.mass);
            assert_eq!(10.0, body.radius);
            assert!(!body.star);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = SimConfig {
            seed: 99,
            body_count: 15,
            ..SimConfig::default()
        };
        assert_eq!(generate(&config), generate(&config));

        let other = SimConfig { seed: 100, ..config.clone() };
        assert_ne!(generate(&config), generate(&other));
    }

    #[test]
    fn test_generate_by_scenario() {
        let config = SimConfig {
            scenario: ScenarioKind::StarPlanet,
            body_count: 50,
            ..SimConfig::default()
        };
        assert_eq!(star_planet_system(), generate(&config));

        let config = SimConfig {
            scenario: ScenarioKind::StaticIdentical,
            body_count: 4,
            ..SimConfig::default()
        };
        assert!(generate(&config).iter().all(|b| b.mass == 150.0));
    }
}

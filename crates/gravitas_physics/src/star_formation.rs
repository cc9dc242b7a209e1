use gravitas_core::constants::DEFAULT_THRESHOLD_MASS;
use gravitas_core::{Resolves, SimError, Universe};
use std::any::Any;
use tracing::debug;

/// Flags every body heavier than `threshold_mass` as a star.
///
/// Promotion only: a body that is already a star stays one even if its mass
/// later drops to or below the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarFormation {
    pub threshold_mass: f64,
}

impl StarFormation {
    pub fn new(threshold_mass: f64) -> Self {
        Self { threshold_mass }
    }

    /// Promote qualifying bodies, returning how many were newly promoted
    pub fn promote(&self, universe: &mut Universe) -> usize {
        let mut promoted = 0;
        for (index, body) in universe.bodies_mut().iter_mut().enumerate() {
            if body.mass > self.threshold_mass && !body.star {
                body.star = true;
                promoted += 1;
                debug!("Body {} became a star (mass {:.1})", index, body.mass);
            }
        }
        promoted
    }
}

impl Default for StarFormation {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_MASS)
    }
}

impl Resolves for StarFormation {
    fn resolve(&self, universe: &mut Universe) -> Result<(), SimError> {
        self.promote(universe);
        Ok(())
    }

    fn name(&self) -> &str {
        "star_formation"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravitas_core::{Body, Vector2D};

    fn universe_with_masses(masses: &[f64]) -> Universe {
        Universe::new(
            masses
                .iter()
                .enumerate()
                .map(|(i, &m)| Body::new(Vector2D::splat(i as f64 * 50.0), Vector2D::zero(), m, 5.0, false))
                .collect(),
        )
    }

    #[test]
    fn test_low_threshold_promotes_all() {
        let mut universe = universe_with_masses(&[10.0, 10.0, 10.0]);
        StarFormation::new(0.0).resolve(&mut universe).unwrap();
        assert!(universe.iter().all(|b| b.star));
    }

    #[test]
    fn test_high_threshold_promotes_none() {
        let mut universe = universe_with_masses(&[10.0, 10.0, 10.0]);
        StarFormation::new(20.0).resolve(&mut universe).unwrap();
        assert!(universe.iter().all(|b| !b.star));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut universe = universe_with_masses(&[500.0, 500.5, 499.0]);
        StarFormation::default().resolve(&mut universe).unwrap();
        let flags: Vec<bool> = universe.iter().map(|b| b.star).collect();
        assert_eq!(vec![false, true, false], flags);
    }

    #[test]
    fn test_idempotent_and_never_demotes() {
        let mut universe = universe_with_masses(&[600.0, 100.0]);
        let formation = StarFormation::default();
        assert_eq!(1, formation.promote(&mut universe));
        assert_eq!(0, formation.promote(&mut universe));

        universe.bodies_mut()[0].mass = 1.0;
        formation.resolve(&mut universe).unwrap();
        assert!(universe.bodies()[0].star);
        assert!(!universe.bodies()[1].star);
    }
}

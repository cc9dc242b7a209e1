use gravitas_core::constants::{DEFAULT_TIME_STEP, G};
use gravitas_core::{Body, Evolves, SimError, Universe, Vector2D};
use std::any::Any;

/// Calculate the gravitational acceleration of `bodies[index]` due to every
/// other body in `bodies`.
///
/// Each contribution has magnitude `G·m / r²`. The sum is accumulated along
/// the target-minus-other displacement and negated at the end so the result
/// points toward the attracting mass.
///
/// Fails with [`SimError::DegenerateConfiguration`] if another body sits at
/// exactly the same position.
pub fn gravity_acceleration(index: usize, bodies: &[Body]) -> Result<Vector2D, SimError> {
    let target = &bodies[index];
    let mut outward = Vector2D::zero();

    for (other_index, other) in bodies.iter().enumerate() {
        if other_index == index {
            continue;
        }
        let diff = target.position - other.position;
        let r = diff.length();
        if r == 0.0 {
            return Err(SimError::DegenerateConfiguration {
                first: index.min(other_index),
                second: index.max(other_index),
                position: target.position,
            });
        }
        let magnitude = G * other.mass / (r * r);
        outward = outward + (diff / r) * magnitude;
    }

    Ok(-outward)
}

/// Evolves bodies under mutual Newtonian gravity with a second-order
/// Euler (Taylor) step:
///
/// ```text
/// x' = x + v·t + a·t²/2
/// v' = v + a·t
/// ```
///
/// All bodies are advanced against the same pre-step snapshot and the new
/// list is installed in one swap, so no body sees another's updated state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerMethodGravityEvolution {
    /// Step size
    pub t: f64,
}

impl EulerMethodGravityEvolution {
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Compute the next state of every body without touching `bodies`
    pub fn step(&self, bodies: &[Body]) -> Result<Vec<Body>, SimError> {
        let t = self.t;
        let mut next = Vec::with_capacity(bodies.len());

        for (index, body) in bodies.iter().enumerate() {
            let acceleration = gravity_acceleration(index, bodies)?;
            let position = body.position + body.velocity * t + acceleration * (t * t) / 2.0;
            let velocity = body.velocity + acceleration * t;
            next.push(Body::new(position, velocity, body.mass, body.radius, body.star));
        }

        Ok(next)
    }
}

impl Default for EulerMethodGravityEvolution {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl Evolves for EulerMethodGravityEvolution {
    fn evolve(&self, universe: &mut Universe) -> Result<(), SimError> {
        let next = self.step(universe.bodies())?;
        universe.replace_bodies(next);
        Ok(())
    }

    fn name(&self) -> &str {
        "euler_method_gravity"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

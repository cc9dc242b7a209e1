use gravitas_core::{Body, Resolves, SimError, Universe};
use std::any::Any;
use tracing::debug;

/// Merges bodies whose discs overlap, conserving mass, momentum and area.
///
/// Scans pairs `(i, j)` with `i < j` in index order and merges the first
/// overlapping pair, `j` into `i`. A merge can create new overlaps, so the
/// scan starts over until a full pass finds none. Each merge removes one
/// body, which bounds the work at n−1 merges (O(n³) worst case).
///
/// The merged-away body is swap-removed; body order is not preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MergeCollision;

impl MergeCollision {
    pub fn new() -> Self {
        Self
    }

    /// Merge until no overlapping pair is left, returning the number of merges
    pub fn merge_all(&self, universe: &mut Universe) -> usize {
        let mut merges = 0;
        while let Some((i, j)) = first_collision(universe.bodies()) {
            let absorbed = universe.remove_at(j);
            let survivor = &mut universe.bodies_mut()[i];
            merge_into(survivor, &absorbed);
            debug!(
                "Merged body {} into {} (mass {:.1}, radius {})",
                j, i, survivor.mass, survivor.radius
            );
            merges += 1;
        }
        merges
    }
}

/// First overlapping pair in `(i, j)`, `i < j` order
fn first_collision(bodies: &[Body]) -> Option<(usize, usize)> {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if bodies[i].overlaps(&bodies[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Fold `other` into `survivor`: center of mass, mass-weighted velocity,
/// summed mass and an area-conserving radius
fn merge_into(survivor: &mut Body, other: &Body) {
    let total_mass = survivor.mass + other.mass;
    let center_of_mass =
        (survivor.position * survivor.mass + other.position * other.mass) / total_mass;
    let velocity = (survivor.momentum() + other.momentum()) / total_mass;
    let radius = Body::radius_from_area(survivor.area() + other.area());

    survivor.position = center_of_mass;
    survivor.velocity = velocity;
    survivor.mass = total_mass;
    survivor.radius = radius;
}

impl Resolves for MergeCollision {
    fn resolve(&self, universe: &mut Universe) -> Result<(), SimError> {
        self.merge_all(universe);
        Ok(())
    }

    fn name(&self) -> &str {
        "merge_collision"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

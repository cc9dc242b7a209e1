use serde::{Deserialize, Serialize};

use crate::body::Body;

/// The set of bodies at one simulation instant.
///
/// Order carries no meaning. Evolution policies swap in a whole new body list
/// through [`Universe::replace_bodies`]; resolution policies edit in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    bodies: Vec<Body>,
}

impl Universe {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Placeholder with no bodies
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Install a new body list, returning the old one
    pub fn replace_bodies(&mut self, bodies: Vec<Body>) -> Vec<Body> {
        std::mem::replace(&mut self.bodies, bodies)
    }

    /// Remove the first body equal to `body`
    pub fn remove(&mut self, body: &Body) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b == body)?;
        Some(self.bodies.remove(index))
    }

    /// Remove the body at `index`; the last body takes its slot
    pub fn remove_at(&mut self, index: usize) -> Body {
        self.bodies.swap_remove(index)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn star_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.star).count()
    }
}

impl From<Vec<Body>> for Universe {
    fn from(bodies: Vec<Body>) -> Self {
        Self::new(bodies)
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

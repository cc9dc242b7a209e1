use std::any::Any;
use std::fmt::Debug;

use crate::error::SimError;
use crate::universe::Universe;

/// Advances a universe by one time step.
///
/// Implementations must present the step as atomic: either the whole body
/// list is replaced or nothing observable changes.
///
/// Object-safe; the simulator holds these as `Vec<Box<dyn Evolves>>`.
pub trait Evolves: Debug {
    fn evolve(&self, universe: &mut Universe) -> Result<(), SimError>;

    /// Stable name used in logs and encoded simulator state
    fn name(&self) -> &str;

    /// Get self as Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Corrects a universe right after it has evolved (merging, promotion, ...).
///
/// Resolution is not transactional: a failure may leave the universe
/// partially modified.
pub trait Resolves: Debug {
    fn resolve(&self, universe: &mut Universe) -> Result<(), SimError>;

    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// Decides, once per iteration, whether the simulation keeps going.
pub trait TerminationCondition: Debug {
    /// Queried before every iteration. Implementations may inspect the
    /// universe or ignore it.
    fn keep_running(&mut self, universe: &Universe) -> bool;

    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

use thiserror::Error;

use crate::vector::Vector2D;

/// Errors raised while stepping a simulation.
///
/// Any of these aborts the current `run()`; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Two bodies share a position when gravity is evaluated, so their
    /// separation is zero and the force between them is undefined.
    #[error("bodies {first} and {second} coincide at {position}")]
    DegenerateConfiguration {
        first: usize,
        second: usize,
        position: Vector2D,
    },
    /// A user-supplied policy failed.
    #[error("policy '{name}' failed: {reason}")]
    Policy { name: String, reason: String },
}

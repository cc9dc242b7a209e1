use gravitas_core::{TerminationCondition, Universe};
use std::any::Any;

/// Stops the simulation after `limit` iterations.
///
/// Answers `true` exactly `limit` times, then `false` forever; the counter
/// never moves past the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iterations {
    limit: u64,
    /// Iterations already granted
    iteration: u64,
}

impl Iterations {
    pub fn new(limit: u64) -> Self {
        Self { limit, iteration: 0 }
    }

    /// Counter restored from saved state, clamped to the limit
    pub fn resume(limit: u64, completed: u64) -> Self {
        Self {
            limit,
            iteration: completed.min(limit),
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn completed(&self) -> u64 {
        self.iteration
    }
}

impl TerminationCondition for Iterations {
    fn keep_running(&mut self, _universe: &Universe) -> bool {
        if self.iteration >= self.limit {
            return false;
        }
        self.iteration += 1;
        true
    }

    fn name(&self) -> &str {
        "iterations"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

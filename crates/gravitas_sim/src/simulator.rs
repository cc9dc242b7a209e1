use gravitas_core::{Evolves, Resolves, SimConfig, SimError, TerminationCondition, Universe};
use gravitas_physics::{procgen, EulerMethodGravityEvolution, MergeCollision, StarFormation};
use std::fmt;
use tracing::{info, info_span, warn};

use crate::render::{NullRender, Render};
use crate::termination::Iterations;

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations fully completed (evolve, resolve, render)
    pub iterations: u64,
    pub bodies_remaining: usize,
}

/// Drives a universe through its policies until the termination condition
/// says stop.
///
/// Each iteration applies every evolution policy in order, then every
/// resolution policy in order, then calls the render hook once. The loop
/// itself holds no state beyond its collaborators.
pub struct Simulator {
    evolution: Vec<Box<dyn Evolves>>,
    resolution: Vec<Box<dyn Resolves>>,
    universe: Universe,
    termination: Box<dyn TerminationCondition>,
    renderer: Box<dyn Render>,
}

impl Simulator {
    pub fn new(
        evolution: Vec<Box<dyn Evolves>>,
        resolution: Vec<Box<dyn Resolves>>,
        universe: Universe,
        termination: Box<dyn TerminationCondition>,
    ) -> Self {
        Self {
            evolution,
            resolution,
            universe,
            termination,
            renderer: Box::new(NullRender),
        }
    }

    /// Gravity evolution followed by collision merging and star formation,
    /// with every knob taken from `config`
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            vec![Box::new(EulerMethodGravityEvolution::new(config.time_step))],
            vec![
                Box::new(MergeCollision),
                Box::new(StarFormation::new(config.threshold_mass)),
            ],
            procgen::generate(config),
            Box::new(Iterations::new(config.iterations)),
        )
    }

    /// Replace the render hook (a [`NullRender`] by default)
    pub fn with_renderer(mut self, renderer: Box<dyn Render>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn evolution(&self) -> &[Box<dyn Evolves>] {
        &self.evolution
    }

    pub fn resolution(&self) -> &[Box<dyn Resolves>] {
        &self.resolution
    }

    pub fn termination(&self) -> &dyn TerminationCondition {
        self.termination.as_ref()
    }

    /// Run one iteration without consulting the termination condition
    pub fn step(&mut self) -> Result<(), SimError> {
        for policy in &self.evolution {
            policy.evolve(&mut self.universe).inspect_err(|e| {
                warn!("Evolution policy {} failed: {}", policy.name(), e);
            })?;
        }
        for policy in &self.resolution {
            policy.resolve(&mut self.universe).inspect_err(|e| {
                warn!("Resolution policy {} failed: {}", policy.name(), e);
            })?;
        }
        self.renderer.render(&self.universe);
        Ok(())
    }

    /// Loop until the termination condition returns false.
    ///
    /// The first policy error aborts the run and is returned; the universe
    /// keeps whatever partial changes the failing iteration made.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        let _span = info_span!("run", termination = self.termination.name()).entered();
        info!(
            "Starting simulation: {} bodies, {} evolution / {} resolution policies",
            self.universe.len(),
            self.evolution.len(),
            self.resolution.len()
        );

        let mut iterations = 0;
        while self.termination.keep_running(&self.universe) {
            self.step()?;
            iterations += 1;
        }

        let summary = RunSummary {
            iterations,
            bodies_remaining: self.universe.len(),
        };
        info!(
            "Simulation finished after {} iterations with {} bodies ({} stars)",
            summary.iterations,
            summary.bodies_remaining,
            self.universe.star_count()
        );
        Ok(summary)
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("evolution", &self.evolution)
            .field("resolution", &self.resolution)
            .field("universe", &self.universe)
            .field("termination", &self.termination)
            .finish_non_exhaustive()
    }
}

//! Textual encoding of a whole simulator.
//!
//! Policies are trait objects, so they are written as tagged records and
//! rebuilt on decode. Only the built-in policies and termination conditions
//! have records; anything else fails with
//! [`StorageError::UnregisteredPolicy`]. The render hook is not state and is
//! not encoded.

use gravitas_core::{Evolves, Resolves, TerminationCondition, Universe, Vector2D};
use gravitas_physics::{EulerMethodGravityEvolution, MergeCollision, StarFormation};
use gravitas_sim::{Iterations, Simulator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::StorageError;

/// Bumped whenever the record layout changes incompatibly
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum EvolutionRecord {
    EulerMethodGravity { t: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ResolutionRecord {
    MergeCollision,
    StarFormation { threshold_mass: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum TerminationRecord {
    Iterations { limit: u64, completed: u64 },
}

fn ensure_finite(value: f64, field: impl FnOnce() -> String) -> Result<(), StorageError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StorageError::NonFinite { field: field() })
    }
}

fn ensure_finite_vector(vector: Vector2D, field: &str) -> Result<(), StorageError> {
    ensure_finite(vector.x, || format!("{field}.x"))?;
    ensure_finite(vector.y, || format!("{field}.y"))
}

/// Complete simulator state for save/load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorRecord {
    pub version: u32,
    pub evolution: Vec<EvolutionRecord>,
    pub resolution: Vec<ResolutionRecord>,
    pub universe: Universe,
    pub termination: TerminationRecord,
}

impl EvolutionRecord {
    fn capture(policy: &dyn Evolves) -> Result<Self, StorageError> {
        if let Some(gravity) = policy.as_any().downcast_ref::<EulerMethodGravityEvolution>() {
            ensure_finite(gravity.t, || format!("{}.t", policy.name()))?;
            return Ok(Self::EulerMethodGravity { t: gravity.t });
        }
        Err(StorageError::UnregisteredPolicy {
            name: policy.name().to_string(),
        })
    }

    fn build(&self) -> Box<dyn Evolves> {
        match *self {
            Self::EulerMethodGravity { t } => Box::new(EulerMethodGravityEvolution::new(t)),
        }
    }
}

impl ResolutionRecord {
    fn capture(policy: &dyn Resolves) -> Result<Self, StorageError> {
        let any = policy.as_any();
        if any.is::<MergeCollision>() {
            return Ok(Self::MergeCollision);
        }
        if let Some(formation) = any.downcast_ref::<StarFormation>() {
            ensure_finite(formation.threshold_mass, || {
                format!("{}.threshold_mass", policy.name())
            })?;
            return Ok(Self::StarFormation {
                threshold_mass: formation.threshold_mass,
            });
        }
        Err(StorageError::UnregisteredPolicy {
            name: policy.name().to_string(),
        })
    }

    fn build(&self) -> Box<dyn Resolves> {
        match *self {
            Self::MergeCollision => Box::new(MergeCollision),
            Self::StarFormation { threshold_mass } => Box::new(StarFormation::new(threshold_mass)),
        }
    }
}

impl TerminationRecord {
    fn capture(condition: &dyn TerminationCondition) -> Result<Self, StorageError> {
        if let Some(iterations) = condition.as_any().downcast_ref::<Iterations>() {
            return Ok(Self::Iterations {
                limit: iterations.limit(),
                completed: iterations.completed(),
            });
        }
        Err(StorageError::UnregisteredPolicy {
            name: condition.name().to_string(),
        })
    }

    fn build(&self) -> Box<dyn TerminationCondition> {
        match *self {
            Self::Iterations { limit, completed } => Box::new(Iterations::resume(limit, completed)),
        }
    }
}

fn check_universe(universe: &Universe) -> Result<(), StorageError> {
    for (i, body) in universe.iter().enumerate() {
        ensure_finite_vector(body.position, &format!("bodies[{i}].position"))?;
        ensure_finite_vector(body.velocity, &format!("bodies[{i}].velocity"))?;
        ensure_finite(body.mass, || format!("bodies[{i}].mass"))?;
        ensure_finite(body.radius, || format!("bodies[{i}].radius"))?;
    }
    Ok(())
}

impl SimulatorRecord {
    /// Describe `simulator` as plain data.
    ///
    /// Fails with [`StorageError::NonFinite`] if any parameter or body field
    /// is infinite or NaN, since such a record could not be decoded again.
    pub fn capture(simulator: &Simulator) -> Result<Self, StorageError> {
        let evolution = simulator
            .evolution()
            .iter()
            .map(|p| EvolutionRecord::capture(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let resolution = simulator
            .resolution()
            .iter()
            .map(|p| ResolutionRecord::capture(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        check_universe(simulator.universe())?;

        Ok(Self {
            version: FORMAT_VERSION,
            evolution,
            resolution,
            universe: simulator.universe().clone(),
            termination: TerminationRecord::capture(simulator.termination())?,
        })
    }

    /// Rebuild a simulator; the render hook starts out as a no-op
    pub fn build(self) -> Result<Simulator, StorageError> {
        if self.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: self.version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(Simulator::new(
            self.evolution.iter().map(EvolutionRecord::build).collect(),
            self.resolution.iter().map(ResolutionRecord::build).collect(),
            self.universe,
            self.termination.build(),
        ))
    }
}

/// Encode a simulator as pretty-printed JSON
pub fn encode(simulator: &Simulator) -> Result<String, StorageError> {
    let record = SimulatorRecord::capture(simulator)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Inverse of [`encode`]
pub fn decode(text: &str) -> Result<Simulator, StorageError> {
    let record: SimulatorRecord = serde_json::from_str(text)?;
    record.build()
}

/// Encode `simulator` into the file at `path`
pub fn to_file(simulator: &Simulator, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let text = encode(simulator)?;
    fs::write(path, text)?;
    debug!("Wrote simulator state to {}", path.display());
    Ok(())
}

/// Decode a simulator from the file at `path`
pub fn from_file(path: impl AsRef<Path>) -> Result<Simulator, StorageError> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

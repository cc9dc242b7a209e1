pub mod codec;
pub mod error;

pub use codec::{decode, encode, from_file, to_file, SimulatorRecord};
pub use error::StorageError;

use gravitas_core::Universe;
use std::fs;
use std::path::Path;
use tracing::info;

/// Save a universe snapshot to disk as bincode
pub fn save_snapshot(universe: &Universe, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = bincode::serialize(universe)?;
    fs::write(path, data)?;
    info!("Saved {} bodies to {}", universe.len(), path.display());
    Ok(())
}

/// Load a universe snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<Universe, StorageError> {
    let data = fs::read(path)?;
    let universe = bincode::deserialize(&data)?;
    Ok(universe)
}

pub mod body;
pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod universe;
pub mod vector;

pub use body::Body;
pub use config::{ScenarioKind, SimConfig};
pub use constants::*;
pub use error::SimError;
pub use traits::{Evolves, Resolves, TerminationCondition};
pub use universe::Universe;
pub use vector::Vector2D;

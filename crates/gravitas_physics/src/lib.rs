pub mod collision;
pub mod gravity;
pub mod procgen;
pub mod star_formation;

pub use collision::MergeCollision;
pub use gravity::EulerMethodGravityEvolution;
pub use star_formation::StarFormation;

// Simulation units are screen pixels and ticks:
// - Distance: 1 unit = 1 pixel on a SIZE x SIZE screen
// - Time: 1 unit = 1 simulator iteration
// G is 1.0 in these units; the real value would make nothing move.

/// Gravitational constant in simulation units
pub const G: f64 = 1.0;

/// Side length of the square universe (and of the screen it is drawn on)
pub const UNIVERSE_SIZE: f64 = 640.0;

/// Default integration step for gravity evolution
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Mass above which a body is promoted to a star
pub const DEFAULT_THRESHOLD_MASS: f64 = 500.0;

/// Default iteration limit for a simulator run
pub const DEFAULT_ITERATIONS: u64 = 1000;

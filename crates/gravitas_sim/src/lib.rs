pub mod render;
pub mod simulator;
pub mod termination;

pub use render::{NullRender, Render, TraceRender};
pub use simulator::{RunSummary, Simulator};
pub use termination::Iterations;

use gravitas_core::Universe;
use tracing::info;

/// Hook invoked once after every completed iteration.
///
/// Drawing happens outside the core; an implementation may end the process
/// (e.g. on a window close) without notifying the simulator.
pub trait Render {
    fn render(&mut self, universe: &Universe);
}

/// Renders nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn render(&mut self, _universe: &Universe) {}
}

/// Logs a one-line summary of the universe every `every` frames
#[derive(Debug, Clone)]
pub struct TraceRender {
    every: u64,
    frame: u64,
}

impl TraceRender {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frame: 0,
        }
    }

    /// Frames seen so far
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl Default for TraceRender {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Render for TraceRender {
    fn render(&mut self, universe: &Universe) {
        self.frame += 1;
        if self.frame % self.every == 0 {
            info!(
                "Frame {}: {} bodies, {} stars, total mass {:.1}",
                self.frame,
                universe.len(),
                universe.star_count(),
                universe.total_mass()
            );
        }
    }
}

//! Frame timestamp bookkeeping

/// Turns host timestamps (milliseconds) into per-frame elapsed time
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the loop start so the first frame measures from here
    pub fn start(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Elapsed milliseconds since the previous tick (or start). The very first tick of an
    /// unstarted clock and any backwards timestamp yield 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        elapsed as f32
    }
}

use std::time::Instant;

/// Source of "current time" in milliseconds for elapsed-time computation.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

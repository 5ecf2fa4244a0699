use std::time::{Duration, Instant};

/// Wall-clock timer for a run and the demonstrations inside it.
#[derive(Debug)]
pub struct RunMonitor {
    start_time: Instant,
    lap_start: Instant,
}

impl RunMonitor {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            lap_start: now,
        }
    }

    pub fn start_lap(&mut self) {
        self.lap_start = Instant::now();
    }

    pub fn finish_lap(&self, label: &str) -> Duration {
        let elapsed = self.lap_start.elapsed();
        tracing::debug!("⏱️  {} finished in {:?}", label, elapsed);
        elapsed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_fits_inside_run() {
        let mut monitor = RunMonitor::new();
        monitor.start_lap();
        let lap = monitor.finish_lap("SRP");
        assert!(monitor.elapsed() >= lap);
    }
}

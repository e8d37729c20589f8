//! Step observers
//!
//! The integrator reports every completed step to a [`StepObserver`].
//! Observers only watch: nothing they do can change the numerical result.
//!
//! - [`NoProgress`]: does nothing (non-interactive runs)
//! - [`LogProgress`]: `log::info!` at fixed percentage intervals
//! - any `FnMut(step, total_steps)` closure

/// Receives progress notifications from a solver
pub trait StepObserver {
    /// Called once before the first step.
    fn on_start(&mut self, _total_steps: usize) {}

    /// Called after step `step` (1-based) of `total_steps` has been stored.
    fn on_step(&mut self, step: usize, total_steps: usize);

    /// Called once after the last step.
    fn on_finish(&mut self) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl StepObserver for NoProgress {
    fn on_step(&mut self, _step: usize, _total_steps: usize) {}
}

impl<F> StepObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_step(&mut self, step: usize, total_steps: usize) {
        self(step, total_steps)
    }
}

/// Observer logging progress through the `log` facade
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    every_percent: usize,
    next_percent: usize,
}

impl LogProgress {
    /// Log every `every_percent` percent (clamped to `1..=100`).
    pub fn new(label: &str, every_percent: usize) -> Self {
        let every_percent = every_percent.clamp(1, 100);
        Self {
            label: label.to_string(),
            every_percent,
            next_percent: every_percent,
        }
    }

    fn percent(step: usize, total_steps: usize) -> usize {
        if total_steps == 0 {
            100
        } else {
            step * 100 / total_steps
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new("fabric", 10)
    }
}

impl StepObserver for LogProgress {
    fn on_start(&mut self, total_steps: usize) {
        self.next_percent = self.every_percent;
        log::info!("{} :: starting {} steps", self.label, total_steps);
    }

    fn on_step(&mut self, step: usize, total_steps: usize) {
        let percent = Self::percent(step, total_steps);
        if percent >= self.next_percent {
            log::info!("{} :: step {}/{} ({}%)", self.label, step, total_steps, percent);
            while self.next_percent <= percent {
                self.next_percent += self.every_percent;
            }
        }
    }

    fn on_finish(&mut self) {
        log::info!("{} :: done", self.label);
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |step: usize, total: usize| seen.push((step, total));
            observer.on_start(3);
            for step in 1..=3 {
                observer.on_step(step, 3);
            }
            observer.on_finish();
        }
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_log_progress_thresholds_advance() {
        let mut observer = LogProgress::new("test", 25);
        observer.on_start(8);
        observer.on_step(1, 8);
        assert_eq!(observer.next_percent, 25);
        observer.on_step(2, 8);
        assert_eq!(observer.next_percent, 50);
        observer.on_step(8, 8);
        assert_eq!(observer.next_percent, 125);
    }

    #[test]
    fn test_log_progress_clamps_interval() {
        assert_eq!(LogProgress::new("x", 0).every_percent, 1);
        assert_eq!(LogProgress::new("x", 500).every_percent, 100);
    }
}

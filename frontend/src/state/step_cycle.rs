#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Index frozen, no timer.
    Idle,
    Running { interval_ms: u32 },
}

/// Index that walks a ring of `len` steps, one step per timer tick.
///
/// The cycler does not own a timer. Whoever drives it reads `interval_ms()`
/// to decide whether a timer should exist and calls `tick()` when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCycler {
    len: usize,
    index: usize,
    phase: CyclePhase,
}

impl StepCycler {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            phase: CyclePhase::Idle,
        }
    }

    pub fn start(&mut self, interval_ms: u32) {
        self.phase = CyclePhase::Running { interval_ms };
    }

    /// Halts advancement. The index is kept.
    pub fn stop(&mut self) {
        self.phase = CyclePhase::Idle;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Advances one step if running. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            CyclePhase::Idle => false,
            CyclePhase::Running { .. } => {
                self.index = (self.index + 1) % self.len;
                true
            }
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, CyclePhase::Running { .. })
    }

    pub fn interval_ms(&self) -> Option<u32> {
        match self.phase {
            CyclePhase::Idle => None,
            CyclePhase::Running { interval_ms } => Some(interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ticks_do_nothing() {
        let mut cycler = StepCycler::new(5);
        for _ in 0..10 {
            assert!(!cycler.tick());
        }
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.interval_ms(), None);
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let mut cycler = StepCycler::new(5);
        cycler.start(2000);
        cycler.tick();
        cycler.tick();
        let start = cycler.index();

        for _ in 0..cycler.len() {
            assert!(cycler.tick());
        }
        assert_eq!(cycler.index(), start);
    }

    #[test]
    fn test_wraps_modulo_len() {
        let mut cycler = StepCycler::new(3);
        cycler.start(100);
        let seen: Vec<usize> = (0..7)
            .map(|_| {
                cycler.tick();
                cycler.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_stop_keeps_index_and_reset_clears_it() {
        let mut cycler = StepCycler::new(5);
        cycler.start(2000);
        cycler.tick();
        cycler.tick();
        cycler.stop();

        assert!(!cycler.is_running());
        assert_eq!(cycler.index(), 2);
        assert!(!cycler.tick());
        assert_eq!(cycler.index(), 2);

        cycler.reset();
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn test_phase_reports_interval() {
        let mut cycler = StepCycler::new(5);
        assert_eq!(cycler.phase(), CyclePhase::Idle);
        cycler.start(750);
        assert_eq!(cycler.phase(), CyclePhase::Running { interval_ms: 750 });
        assert_eq!(cycler.interval_ms(), Some(750));
    }

    #[test]
    fn test_zero_length_is_clamped() {
        let mut cycler = StepCycler::new(0);
        cycler.start(10);
        cycler.tick();
        assert_eq!(cycler.len(), 1);
        assert_eq!(cycler.index(), 0);
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

/// Count of trials finished so far, shared between a running simulation
/// and outside observers.
///
/// Updates and reads are relaxed: the counter is observational only and
/// is never consulted when producing the final statistics.
#[derive(Debug)]
pub struct ProgressCounter {
    current: AtomicU64,
    total: u64,
}

impl ProgressCounter {
    pub(crate) fn new(total: u64) -> ProgressCounter {
        ProgressCounter {
            current: AtomicU64::new(0),
            total,
        }
    }

    pub(crate) fn tick(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }

    /// (trials completed so far, trials requested).
    pub fn snapshot(&self) -> (u64, u64) {
        (self.current.load(Ordering::Relaxed), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_to_total() {
        let progress = ProgressCounter::new(3);
        assert_eq!(progress.snapshot(), (0, 3));
        progress.tick();
        progress.tick();
        assert_eq!(progress.snapshot(), (2, 3));
    }
}

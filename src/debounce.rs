use std::time::{Duration, Instant};

/// Cancel-and-reschedule timer over the latest submitted value.
///
/// Each `submit` replaces the pending value and pushes the deadline out
/// to `now + quiet`; `poll` yields the value exactly once, after the
/// input has been stable for the whole quiet period. Time is an explicit
/// argument, so callers and tests drive it deterministically.
#[derive(Debug)]
pub struct Debounce<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(quiet: Duration) -> Self {
        Debounce {
            quiet,
            pending: None,
        }
    }

    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    /// Commits the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, due)) if due <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops whatever is pending, e.g. on teardown.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

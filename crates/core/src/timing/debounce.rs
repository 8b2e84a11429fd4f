/// Trailing-edge delay: fires once, `wait_ms` after the last trigger.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Record an event; any earlier pending deadline is pushed back.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.wait_ms));
    }

    /// Returns `true` exactly once per quiet period, when `now_ms` has
    /// reached the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_coalesces_into_one_trailing_call() {
        let mut debounce = Debounce::new(250);
        for t in (0..250).step_by(25) {
            debounce.trigger(t);
            assert!(!debounce.poll(t));
        }
        // Last trigger was at 225.
        assert!(!debounce.poll(474));
        assert!(debounce.poll(475));
        assert!(!debounce.poll(1000));
    }

    #[test]
    fn cancel_drops_pending_call() {
        let mut debounce = Debounce::new(250);
        debounce.trigger(0);
        debounce.cancel();
        assert!(!debounce.poll(300));
    }
}

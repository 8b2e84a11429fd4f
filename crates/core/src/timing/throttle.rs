/// Leading-edge rate limiter.
///
/// The first call fires and closes a window of `window_ms`; calls inside
/// the window are dropped, not queued, and nothing fires when it reopens.
#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: u64,
    reopens_at: Option<u64>,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            reopens_at: None,
        }
    }

    /// Returns `true` when the wrapped work should run now.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        match self.reopens_at {
            Some(reopens_at) if now_ms < reopens_at => false,
            _ => {
                self.reopens_at = Some(now_ms.saturating_add(self.window_ms));
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.reopens_at = None;
    }
}

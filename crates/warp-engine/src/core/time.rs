/// Single-shot trailing debounce driven by host timestamps (milliseconds).
///
/// Re-arming replaces the pending deadline, so at most one expiry is ever
/// outstanding. Expiry is observed by polling `fire` with the current time.
#[derive(Debug, Clone)]
pub struct Debounce {
    /// Quiet period after the last `arm` before the debounce fires.
    delay_ms: f64,
    /// Pending expiry time, if armed.
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet period at `now_ms`.
    pub fn arm(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns true exactly once when `now_ms` has reached the pending deadline.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_fire_before_delay() {
        let mut d = Debounce::new(100.0);
        d.arm(0.0);
        assert!(!d.fire(99.9));
        assert!(d.is_pending());
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut d = Debounce::new(100.0);
        d.arm(10.0);
        assert!(d.fire(110.0));
        assert!(!d.fire(200.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn rearm_replaces_pending_deadline() {
        let mut d = Debounce::new(100.0);
        d.arm(0.0);
        d.arm(80.0);
        assert_eq!(d.deadline(), Some(180.0));
        assert!(!d.fire(120.0), "first deadline must have been discarded");
        assert!(d.fire(180.0));
    }

    #[test]
    fn idle_debounce_never_fires() {
        let mut d = Debounce::new(100.0);
        assert!(!d.fire(1_000_000.0));
    }
}

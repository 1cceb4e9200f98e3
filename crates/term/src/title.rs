//! Rate limiting for window title updates.
//!
//! The engine pushes a new FPS title every frame; terminals redraw their chrome on
//! every title escape, so changes go out at most once per interval.

#[derive(Debug, Clone)]
pub struct TitleThrottle {
    min_interval_ms: u64,
    last_set_ms: u64,
    has_set: bool,
}

impl TitleThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_set_ms: 0,
            has_set: false,
        }
    }

    /// Decide whether a title update at `now_ms` should be sent.
    pub fn should_set(&mut self, now_ms: u64) -> bool {
        if !self.has_set || now_ms.saturating_sub(self.last_set_ms) >= self.min_interval_ms {
            self.has_set = true;
            self.last_set_ms = now_ms;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_always_goes_out() {
        let mut t = TitleThrottle::new(250);
        assert!(t.should_set(1_000));
    }

    #[test]
    fn test_updates_inside_the_interval_are_dropped() {
        let mut t = TitleThrottle::new(250);
        assert!(t.should_set(0));
        assert!(!t.should_set(100));
        assert!(!t.should_set(249));
        assert!(t.should_set(250));
        assert!(!t.should_set(400));
        assert!(t.should_set(500));
    }

    #[test]
    fn test_zero_interval_never_throttles() {
        let mut t = TitleThrottle::new(0);
        assert!(t.should_set(5));
        assert!(t.should_set(5));
    }
}

//! Trailing-edge debounce for viewport resize notifications.

use crate::api::error::HostError;
use crate::api::host::Host;
use crate::api::types::TimerHandle;

/// Coalesces bursts of resize notifications into one deferred action.
///
/// Every notification restarts the timer; only the timer started by the
/// last notification is honored when it fires.
pub struct ResizeDebounce {
    delay_ms: f64,
    pending: Option<TimerHandle>,
}

impl ResizeDebounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Cancel any pending timer and start a fresh one.
    pub fn notify<H: Host>(&mut self, host: &mut H) -> Result<TimerHandle, HostError> {
        if let Some(handle) = self.pending.take() {
            host.cancel_timer(handle);
        }
        let handle = host.start_timer(self.delay_ms)?;
        self.pending = Some(handle);
        Ok(handle)
    }

    /// A timer fired. Returns true if it is the live one, which it also consumes.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel<H: Host>(&mut self, host: &mut H) {
        if let Some(handle) = self.pending.take() {
            host.cancel_timer(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;

    #[test]
    fn notify_restarts_timer() {
        let mut host = FakeHost::new(800.0, 600.0, 1.0);
        let mut debounce = ResizeDebounce::new(120.0);

        let first = debounce.notify(&mut host).unwrap();
        let second = debounce.notify(&mut host).unwrap();

        assert_ne!(first, second);
        assert_eq!(host.live_timers(), 1);
        assert!(!debounce.fire(first), "stale timer must be ignored");
        assert!(debounce.fire(second));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn cancel_clears_host_timer() {
        let mut host = FakeHost::new(800.0, 600.0, 1.0);
        let mut debounce = ResizeDebounce::new(120.0);
        debounce.notify(&mut host).unwrap();
        debounce.cancel(&mut host);
        assert_eq!(host.live_timers(), 0);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn failed_timer_leaves_nothing_pending() {
        let mut host = FakeHost::new(800.0, 600.0, 1.0);
        host.fail_timers = true;
        let mut debounce = ResizeDebounce::new(120.0);
        assert!(debounce.notify(&mut host).is_err());
        assert!(!debounce.is_pending());
    }
}

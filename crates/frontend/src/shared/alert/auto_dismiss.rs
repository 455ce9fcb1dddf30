use contracts::shared::notification::{Notification, AUTO_CLOSE_DELAY_MS};

/// Slot holding at most one pending auto-dismiss timer.
///
/// `H` is the timer handle; dropping it must cancel the timer
/// (`gloo_timers::callback::Timeout` in the browser). Replacing or clearing
/// the slot therefore cancels whatever was scheduled before.
pub struct AutoDismiss<H> {
    handle: Option<H>,
}

impl<H> Default for AutoDismiss<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> AutoDismiss<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending timer, then schedules a new one if `notification`
    /// asks for it. `schedule` receives the delay in milliseconds.
    ///
    /// Returns whether a timer is now pending.
    pub fn arm<F>(&mut self, notification: &Notification, schedule: F) -> bool
    where
        F: FnOnce(u32) -> H,
    {
        self.disarm();
        if notification.should_auto_close() {
            self.handle = Some(schedule(AUTO_CLOSE_DELAY_MS));
        }
        self.handle.is_some()
    }

    pub fn disarm(&mut self) {
        self.handle.take();
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Handle from `Clock::schedule`; dropping it cancels the callback.
    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    struct Clock {
        pending: RefCell<Vec<(u32, Rc<Cell<bool>>, Box<dyn FnOnce()>)>>,
    }

    impl Clock {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                pending: RefCell::new(Vec::new()),
            })
        }

        fn schedule(&self, delay: u32, callback: impl FnOnce() + 'static) -> FakeTimer {
            let cancelled = Rc::new(Cell::new(false));
            let callback: Box<dyn FnOnce()> = Box::new(callback);
            self.pending
                .borrow_mut()
                .push((delay, cancelled.clone(), callback));
            FakeTimer { cancelled }
        }

        /// Advance time to `now` ms, firing every live timer that is due.
        fn advance_to(&self, now: u32) {
            let due: Vec<_> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<_>, Vec<_>) =
                    pending.drain(..).partition(|(delay, _, _)| *delay <= now);
                *pending = rest;
                due
            };
            for (_, cancelled, callback) in due {
                if !cancelled.get() {
                    callback();
                }
            }
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        (calls, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_created_alert_closes_once_after_delay() {
        let clock = Clock::new();
        let (calls, on_close) = counter();
        let mut slot = AutoDismiss::new();

        let armed = slot.arm(&Notification::product_created("Product created"), |delay| {
            assert_eq!(delay, 9_000);
            clock.schedule(delay, on_close)
        });
        assert!(armed);

        clock.advance_to(8_999);
        assert_eq!(calls.get(), 0);
        clock.advance_to(9_000);
        assert_eq!(calls.get(), 1);
        clock.advance_to(20_000);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_teardown_before_delay_cancels() {
        let clock = Clock::new();
        let (calls, on_close) = counter();
        let mut slot = AutoDismiss::new();
        slot.arm(&Notification::product_created("Product created"), |d| {
            clock.schedule(d, on_close)
        });

        drop(slot);
        clock.advance_to(10_000);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_explicit_dismiss_cancels() {
        let clock = Clock::new();
        let (calls, on_close) = counter();
        let mut slot = AutoDismiss::new();
        slot.arm(&Notification::product_created("Product created"), |d| {
            clock.schedule(d, on_close)
        });

        slot.disarm();
        assert!(!slot.is_armed());
        clock.advance_to(10_000);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_replacing_notification_cancels_previous_timer() {
        let clock = Clock::new();
        let (first_calls, first_close) = counter();
        let mut slot = AutoDismiss::new();
        slot.arm(&Notification::product_created("first"), |d| {
            clock.schedule(d, first_close)
        });

        let armed = slot.arm(&Notification::error("failed"), |_| -> FakeTimer {
            panic!("error alerts never auto close")
        });
        assert!(!armed);
        clock.advance_to(10_000);
        assert_eq!(first_calls.get(), 0);
    }

    #[test]
    fn test_other_kinds_never_schedule() {
        let mut slot: AutoDismiss<FakeTimer> = AutoDismiss::new();
        for n in [
            Notification::success("done").with_auto_close(true),
            Notification::confirm_delete("sure?").with_auto_close(true),
            Notification::product_created("created").with_auto_close(false),
            Notification::product_created("created").closed(),
        ] {
            assert!(!slot.arm(&n, |_| panic!("unexpected schedule for {:?}", n.kind)));
        }
    }
}

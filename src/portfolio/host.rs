use std::{cell::RefCell, collections::BTreeMap, rc::Rc, time::Duration};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("couldn't schedule timer: {0}")]
    Schedule(String),
    #[error("repeating timer period must be non-zero")]
    ZeroPeriod,
}

/// Capabilities the page borrows from the environment it is mounted in.
///
/// Every handle returned here must eventually be passed back to [`Host::cancel`];
/// a cancelled handle's callback never runs again.
pub trait Host {
    type Handle;

    /// Calls `handler` with the current vertical scroll offset on every scroll event.
    fn subscribe_scroll(&self, handler: Box<dyn Fn(f64)>) -> Result<Self::Handle, HostError>;

    fn schedule_repeating(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<Self::Handle, HostError>;

    fn schedule_once(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, HostError>;

    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualHandle(u64);

enum TimerKind {
    Repeating {
        period: Duration,
        callback: Rc<dyn Fn()>,
    },
    Once(Box<dyn FnOnce()>),
}

struct Timer {
    due: Duration,
    kind: TimerKind,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Timer>,
    scroll_handlers: BTreeMap<u64, Rc<dyn Fn(f64)>>,
}

impl Clock {
    fn next_handle(&mut self) -> VirtualHandle {
        let id = self.next_id;
        self.next_id += 1;
        VirtualHandle(id)
    }

    /// Earliest timer due strictly before `until`; ties go to the one scheduled first.
    fn next_due(&self, until: Duration) -> Option<u64> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due < until)
            .min_by_key(|(id, t)| (t.due, **id))
            .map(|(id, _)| *id)
    }
}

/// A manually driven event loop with virtual time.
///
/// Time only moves through [`VirtualHost::advance`]. A timer whose deadline lies
/// strictly before the new time fires during that call; one due exactly at the
/// new time is still pending and fires on the next advance. Callbacks run with
/// no internal borrow held, so they may schedule or cancel freely.
#[derive(Default)]
pub struct VirtualHost {
    clock: RefCell<Clock>,
}

impl VirtualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    pub fn scroll_subscribers(&self) -> usize {
        self.clock.borrow().scroll_handlers.len()
    }

    pub fn advance(&self, by: Duration) {
        let until = self.now() + by;
        loop {
            let fire = {
                let mut clock = self.clock.borrow_mut();
                let Some((id, timer)) = clock
                    .next_due(until)
                    .and_then(|id| clock.timers.remove(&id).map(|t| (id, t)))
                else {
                    break;
                };
                clock.now = timer.due;
                match timer.kind {
                    TimerKind::Repeating { period, callback } => {
                        clock.timers.insert(
                            id,
                            Timer {
                                due: timer.due + period,
                                kind: TimerKind::Repeating {
                                    period,
                                    callback: callback.clone(),
                                },
                            },
                        );
                        Fire::Repeating(callback)
                    }
                    TimerKind::Once(callback) => Fire::Once(callback),
                }
            };
            match fire {
                Fire::Repeating(callback) => callback(),
                Fire::Once(callback) => callback(),
            }
        }
        self.clock.borrow_mut().now = until;
    }

    /// Delivers one scroll event at `offset` to every live subscriber.
    pub fn scroll_to(&self, offset: f64) {
        let handlers = self
            .clock
            .borrow()
            .scroll_handlers
            .values()
            .cloned()
            .collect::<Vec<_>>();
        for handler in handlers {
            handler(offset);
        }
    }
}

enum Fire {
    Repeating(Rc<dyn Fn()>),
    Once(Box<dyn FnOnce()>),
}

impl Host for VirtualHost {
    type Handle = VirtualHandle;

    fn subscribe_scroll(&self, handler: Box<dyn Fn(f64)>) -> Result<VirtualHandle, HostError> {
        let mut clock = self.clock.borrow_mut();
        let handle = clock.next_handle();
        clock.scroll_handlers.insert(handle.0, Rc::from(handler));
        Ok(handle)
    }

    fn schedule_repeating(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<VirtualHandle, HostError> {
        if period.is_zero() {
            return Err(HostError::ZeroPeriod);
        }
        let mut clock = self.clock.borrow_mut();
        let handle = clock.next_handle();
        let due = clock.now + period;
        clock.timers.insert(
            handle.0,
            Timer {
                due,
                kind: TimerKind::Repeating {
                    period,
                    callback: Rc::from(callback),
                },
            },
        );
        Ok(handle)
    }

    fn schedule_once(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<VirtualHandle, HostError> {
        let mut clock = self.clock.borrow_mut();
        let handle = clock.next_handle();
        let due = clock.now + delay;
        clock.timers.insert(
            handle.0,
            Timer {
                due,
                kind: TimerKind::Once(callback),
            },
        );
        Ok(handle)
    }

    fn cancel(&self, handle: VirtualHandle) {
        let mut clock = self.clock.borrow_mut();
        clock.timers.remove(&handle.0);
        clock.scroll_handlers.remove(&handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_once_fires_after_deadline() {
        let host = VirtualHost::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        host.schedule_once(ms(100), Box::new(move || f.set(true)))
            .unwrap();

        host.advance(ms(99));
        assert!(!fired.get());
        // due exactly at the new time, still pending
        host.advance(ms(1));
        assert!(!fired.get());
        host.advance(ms(1));
        assert!(fired.get());
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_repeating_rearms() {
        let host = VirtualHost::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        host.schedule_repeating(ms(10), Box::new(move || c.set(c.get() + 1)))
            .unwrap();

        host.advance(ms(35));
        assert_eq!(count.get(), 3);
        assert_eq!(host.now(), ms(35));
        assert_eq!(host.pending_timers(), 1);
    }

    #[test]
    fn test_zero_period_rejected() {
        let host = VirtualHost::new();
        let res = host.schedule_repeating(Duration::ZERO, Box::new(|| {}));
        assert_eq!(res, Err(HostError::ZeroPeriod));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let host = VirtualHost::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let handle = host
            .schedule_repeating(ms(10), Box::new(move || c.set(c.get() + 1)))
            .unwrap();
        host.advance(ms(15));
        host.cancel(handle);
        host.advance(ms(100));
        assert_eq!(count.get(), 1);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_callback_can_schedule() {
        let host = Rc::new(VirtualHost::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let (h, l) = (host.clone(), log.clone());
        host.schedule_once(
            ms(10),
            Box::new(move || {
                l.borrow_mut().push(h.now());
                let l = l.clone();
                let inner = h.clone();
                h.schedule_once(ms(5), Box::new(move || l.borrow_mut().push(inner.now())))
                    .unwrap();
            }),
        )
        .unwrap();

        host.advance(ms(30));
        assert_eq!(*log.borrow(), vec![ms(10), ms(15)]);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let host = VirtualHost::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let o = order.clone();
            host.schedule_once(ms(5), Box::new(move || o.borrow_mut().push(i)))
                .unwrap();
        }
        host.advance(ms(6));
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_scroll_subscription() {
        let host = VirtualHost::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let handle = host
            .subscribe_scroll(Box::new(move |y| s.borrow_mut().push(y)))
            .unwrap();
        host.scroll_to(10.0);
        host.scroll_to(80.0);
        host.cancel(handle);
        host.scroll_to(200.0);
        assert_eq!(*seen.borrow(), vec![10.0, 80.0]);
        assert_eq!(host.scroll_subscribers(), 0);
    }
}

use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::portfolio::{Host, HostError, TipPicker};

pub enum BrowserHandle {
    Scroll(WindowListenerHandle),
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

/// Scroll events and timers from the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    type Handle = BrowserHandle;

    fn subscribe_scroll(&self, handler: Box<dyn Fn(f64)>) -> Result<BrowserHandle, HostError> {
        let handle = window_event_listener(ev::scroll, move |_| {
            match window().scroll_y() {
                Ok(offset) => handler(offset),
                Err(e) => log::warn!("couldn't read scroll offset: {e:?}"),
            }
        });
        Ok(BrowserHandle::Scroll(handle))
    }

    fn schedule_repeating(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<BrowserHandle, HostError> {
        if period.is_zero() {
            return Err(HostError::ZeroPeriod);
        }
        set_interval_with_handle(move || callback(), period)
            .map(BrowserHandle::Interval)
            .map_err(|e| HostError::Schedule(format!("{e:?}")))
    }

    fn schedule_once(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<BrowserHandle, HostError> {
        set_timeout_with_handle(move || callback(), delay)
            .map(BrowserHandle::Timeout)
            .map_err(|e| HostError::Schedule(format!("{e:?}")))
    }

    fn cancel(&self, handle: BrowserHandle) {
        match handle {
            BrowserHandle::Scroll(h) => h.remove(),
            BrowserHandle::Interval(h) => h.clear(),
            BrowserHandle::Timeout(h) => h.clear(),
        }
    }
}

/// Uniform picks from `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandomPicker;

impl TipPicker for MathRandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        (js_sys::Math::random() * len as f64).floor() as usize
    }
}

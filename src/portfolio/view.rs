use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use super::{
    scroll::{is_scrolled, SCROLL_THRESHOLD},
    tips::choose_tip,
    Host, HostError, Store, Tab, TipPicker, TipState,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub tip_period: Duration,
    pub tip_visible_for: Duration,
    pub scroll_threshold: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tip_period: Duration::from_secs(30),
            tip_visible_for: Duration::from_secs(5),
            scroll_threshold: SCROLL_THRESHOLD,
        }
    }
}

struct Handles<T> {
    scroll: Option<T>,
    repeating: Option<T>,
    hide: Option<T>,
}

impl<T> Default for Handles<T> {
    fn default() -> Self {
        Self {
            scroll: None,
            repeating: None,
            hide: None,
        }
    }
}

/// A mounted portfolio page.
///
/// Owns the scroll subscription, the repeating tip timer and any pending
/// dismissal timer. Dropping it (or calling [`PortfolioView::unmount`])
/// cancels all three, after which the store is never written again.
pub struct PortfolioView<H: Host, S> {
    host: Rc<H>,
    store: S,
    handles: Rc<RefCell<Handles<H::Handle>>>,
}

impl<H, S> PortfolioView<H, S>
where
    H: Host + 'static,
    S: Store + Clone + 'static,
{
    pub fn mount<P>(host: Rc<H>, store: S, picker: P, timings: Timings) -> Result<Self, HostError>
    where
        P: TipPicker + 'static,
    {
        // built first so an error below still releases what was acquired
        let view = Self {
            host: host.clone(),
            store: store.clone(),
            handles: Rc::new(RefCell::new(Handles::default())),
        };

        let scroll_store = store.clone();
        let threshold = timings.scroll_threshold;
        let scroll = host.subscribe_scroll(Box::new(move |offset| {
            let flag = is_scrolled(offset, threshold);
            if scroll_store.scrolled() != flag {
                scroll_store.set_scrolled(flag);
            }
        }))?;
        view.handles.borrow_mut().scroll = Some(scroll);

        let show_tip = tip_activation(
            Rc::downgrade(&host),
            store,
            view.handles.clone(),
            RefCell::new(picker),
            timings.tip_visible_for,
        );
        let repeating = host.schedule_repeating(timings.tip_period, Box::new(show_tip))?;
        view.handles.borrow_mut().repeating = Some(repeating);

        log::debug!("portfolio view mounted");
        Ok(view)
    }

    pub fn select_tab(&self, tab: Tab) {
        log::debug!("selecting tab {tab}");
        self.store.select_tab(tab);
    }

    pub fn unmount(self) {
        log::debug!("portfolio view unmounted");
    }
}

fn tip_activation<H, S, P>(
    host: Weak<H>,
    store: S,
    handles: Rc<RefCell<Handles<H::Handle>>>,
    picker: RefCell<P>,
    visible_for: Duration,
) -> impl Fn() + 'static
where
    H: Host + 'static,
    S: Store + Clone + 'static,
    P: TipPicker + 'static,
{
    move || {
        let Some(host) = host.upgrade() else {
            return;
        };
        let text = choose_tip(&mut *picker.borrow_mut());
        log::debug!("showing security tip: {text}");
        store.set_tip(TipState::Visible { text });

        let pending = handles.borrow_mut().hide.take();
        if let Some(pending) = pending {
            host.cancel(pending);
        }

        let hide_store = store.clone();
        let hide_handles = handles.clone();
        let hide = host.schedule_once(
            visible_for,
            Box::new(move || {
                hide_handles.borrow_mut().hide = None;
                hide_store.set_tip(TipState::Hidden);
            }),
        );
        match hide {
            Ok(hide) => handles.borrow_mut().hide = Some(hide),
            Err(e) => {
                log::error!("couldn't schedule tip dismissal: {e}");
                store.set_tip(TipState::Hidden);
            }
        }
    }
}

impl<H: Host, S> Drop for PortfolioView<H, S> {
    fn drop(&mut self) {
        let mut handles = self.handles.borrow_mut();
        let live = [
            handles.scroll.take(),
            handles.repeating.take(),
            handles.hide.take(),
        ];
        for handle in live.into_iter().flatten() {
            self.host.cancel(handle);
        }
    }
}

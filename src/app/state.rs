use leptos::prelude::*;

use crate::portfolio::{Store, Tab, TipState};

/// Reactive cells backing the page. Copy, so it can be handed to every component.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore {
    pub selected: RwSignal<Tab>,
    pub scrolled: RwSignal<bool>,
    pub tip: RwSignal<TipState>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Tab::default()),
            scrolled: RwSignal::new(false),
            tip: RwSignal::new(TipState::Hidden),
        }
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for SignalStore {
    fn selected(&self) -> Tab {
        self.selected.get_untracked()
    }

    fn select_tab(&self, tab: Tab) {
        if self.selected.get_untracked() != tab {
            self.selected.set(tab);
        }
    }

    fn scrolled(&self) -> bool {
        self.scrolled.get_untracked()
    }

    fn set_scrolled(&self, scrolled: bool) {
        self.scrolled.set(scrolled);
    }

    fn tip(&self) -> TipState {
        self.tip.get_untracked()
    }

    fn set_tip(&self, tip: TipState) {
        self.tip.set(tip);
    }
}

use std::{cell::RefCell, rc::Rc};

use super::{Tab, TipState};

/// The three state cells the page renders from.
pub trait Store {
    fn selected(&self) -> Tab;
    /// Makes `tab` the active panel. Selecting the active tab again is a no-op.
    fn select_tab(&self, tab: Tab);

    fn scrolled(&self) -> bool;
    fn set_scrolled(&self, scrolled: bool);

    fn tip(&self) -> TipState;
    fn set_tip(&self, tip: TipState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub selected: Tab,
    pub scrolled: bool,
    pub tip: TipState,
}

#[derive(Debug, Default)]
struct Cells {
    state: Snapshot,
    writes: usize,
}

/// Plain in-memory store for headless use.
#[derive(Debug, Clone, Default)]
pub struct LocalStore(Rc<RefCell<Cells>>);

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.0.borrow().state
    }

    /// Number of writes performed through any setter.
    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }

    fn write(&self, f: impl FnOnce(&mut Snapshot)) {
        let mut cells = self.0.borrow_mut();
        f(&mut cells.state);
        cells.writes += 1;
    }
}

impl Store for LocalStore {
    fn selected(&self) -> Tab {
        self.0.borrow().state.selected
    }

    fn select_tab(&self, tab: Tab) {
        if self.selected() != tab {
            self.write(|s| s.selected = tab);
        }
    }

    fn scrolled(&self) -> bool {
        self.0.borrow().state.scrolled
    }

    fn set_scrolled(&self, scrolled: bool) {
        self.write(|s| s.scrolled = scrolled);
    }

    fn tip(&self) -> TipState {
        self.0.borrow().state.tip
    }

    fn set_tip(&self, tip: TipState) {
        self.write(|s| s.tip = tip);
    }
}

//! Lifecycle observer for the demo

use std::cell::RefCell;
use std::rc::Rc;

use callout_ui::PopoverObserver;
use tracing::info;

/// Counters shown in the status line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleStats {
    pub shown: u32,
    pub dismissed: u32,
    pub last_event: Option<String>,
}

/// Logs every lifecycle hook and keeps the shared counters current
#[derive(Debug, Clone)]
pub struct LifecycleLog {
    stats: Rc<RefCell<LifecycleStats>>,
}

impl LifecycleLog {
    pub fn new(stats: Rc<RefCell<LifecycleStats>>) -> Self {
        Self { stats }
    }

    fn record(&self, hook: &str, id: &str) {
        info!(popover = id, hook, "Popover lifecycle");
        self.stats.borrow_mut().last_event = Some(format!("{hook} {id}"));
    }
}

impl PopoverObserver for LifecycleLog {
    fn will_show(&mut self, id: &str) {
        self.record("will_show", id);
    }

    fn did_show(&mut self, id: &str) {
        self.stats.borrow_mut().shown += 1;
        self.record("did_show", id);
    }

    fn will_dismiss(&mut self, id: &str) {
        self.record("will_dismiss", id);
    }

    fn did_dismiss(&mut self, id: &str) {
        self.stats.borrow_mut().dismissed += 1;
        self.record("did_dismiss", id);
    }
}

//! Lifecycle hooks between a component and the controllers it owns.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An object that follows its host component's connection state.
pub trait ReactiveController {
    /// The host was inserted into the document.
    fn host_connected(&self) {}

    /// The host was removed from the document.
    fn host_disconnected(&self) {}
}

/// A component that forwards its lifecycle to registered controllers.
pub trait ControllerHost {
    fn add_controller(&self, controller: Rc<dyn ReactiveController>);
}

/// Plain controller list for hosts that have no lifecycle machinery of their own.
#[derive(Default)]
pub struct HostControllers {
    controllers: RefCell<Vec<Rc<dyn ReactiveController>>>,
    connected: Cell<bool>,
}

impl HostControllers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.borrow().is_empty()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Mark the host connected and notify every controller.
    pub fn connect(&self) {
        self.connected.set(true);
        for controller in self.snapshot() {
            controller.host_connected();
        }
    }

    /// Mark the host disconnected and notify every controller.
    pub fn disconnect(&self) {
        self.connected.set(false);
        for controller in self.snapshot() {
            controller.host_disconnected();
        }
    }

    fn snapshot(&self) -> Vec<Rc<dyn ReactiveController>> {
        self.controllers.borrow().clone()
    }
}

impl ControllerHost for HostControllers {
    /// Controllers added while the host is connected are notified immediately.
    fn add_controller(&self, controller: Rc<dyn ReactiveController>) {
        self.controllers.borrow_mut().push(Rc::clone(&controller));
        if self.is_connected() {
            controller.host_connected();
        }
    }
}

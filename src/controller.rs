//! Controller attached directly to one element, and the handles it hands out
//! for declarative attachment.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::DragConfig;
use crate::host::{ControllerHost, ReactiveController};
use crate::platform::Platform;
use crate::point::Point;
use crate::tracker::DragTracker;

/// Owns a drag configuration and, when the configuration names a target,
/// the press listener on that element.
///
/// A controller without a target never listens for anything itself; it still
/// serves as the shared configuration for [`DragHandle`]s made with [`bind`](Self::bind).
pub struct DragController<P: Platform, D> {
    tracker: Rc<DragTracker<P, D>>,
    press_listener: RefCell<Option<P::Listener>>,
}

impl<P: Platform, D: 'static> DragController<P, D> {
    /// Register with `host` and attach to the configured target, if any.
    ///
    /// A target that refuses the press listener leaves the controller inert;
    /// the failure is logged.
    pub fn new<H: ControllerHost + ?Sized>(host: &H, platform: Rc<P>, config: DragConfig<P, D>) -> Rc<Self> {
        let target = config.target.clone();
        let tracker = DragTracker::new(platform, Rc::new(config));
        let press_listener = target.and_then(|node| match tracker.attach(&node) {
            Ok(listener) => Some(listener),
            Err(err) => {
                log::warn!("drag: controller target not attached: {err}");
                None
            }
        });
        let controller = Rc::new(Self { tracker, press_listener: RefCell::new(press_listener) });
        host.add_controller(Rc::clone(&controller) as Rc<dyn ReactiveController>);
        controller
    }

    /// A handle carrying `data`, for a [`DragBinding`](crate::binding::DragBinding).
    #[must_use]
    pub fn bind(self: &Rc<Self>, data: D) -> DragHandle<P, D> {
        DragHandle { controller: Rc::clone(self), data: Rc::new(data) }
    }

    /// Payload passed to callbacks of drags on the direct target.
    #[must_use]
    pub fn data(&self) -> Option<Rc<D>> {
        self.tracker.data()
    }

    pub fn set_data(&self, data: Option<D>) {
        self.tracker.set_data(data.map(Rc::new));
    }

    #[must_use]
    pub fn config(&self) -> Rc<DragConfig<P, D>> {
        self.tracker.config()
    }

    #[must_use]
    pub fn platform(&self) -> &Rc<P> {
        self.tracker.platform()
    }

    /// Whether a drag on the direct target is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Layout offset of the direct target captured at press, while dragging.
    #[must_use]
    pub fn element_offset(&self) -> Option<Point> {
        self.tracker.element_offset()
    }

    /// Whether the press listener is installed on the direct target.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.press_listener.borrow().is_some()
    }

    /// Remove the press listener from the direct target and end any drag
    /// without calling `on_end`.
    pub fn detach(&self) {
        self.press_listener.borrow_mut().take();
        self.tracker.teardown();
    }
}

impl<P: Platform, D: 'static> ReactiveController for DragController<P, D> {
    fn host_connected(&self) {}

    fn host_disconnected(&self) {
        self.tracker.teardown();
    }
}

impl<P: Platform, D> fmt::Debug for DragController<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("attached", &self.press_listener.borrow().is_some())
            .finish_non_exhaustive()
    }
}

/// A controller plus the payload for one bound node.
pub struct DragHandle<P: Platform, D> {
    controller: Rc<DragController<P, D>>,
    data: Rc<D>,
}

impl<P: Platform, D> DragHandle<P, D> {
    #[must_use]
    pub fn controller(&self) -> &Rc<DragController<P, D>> {
        &self.controller
    }

    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    pub(crate) fn payload(&self) -> Rc<D> {
        Rc::clone(&self.data)
    }
}

impl<P: Platform, D> Clone for DragHandle<P, D> {
    fn clone(&self) -> Self {
        Self { controller: Rc::clone(&self.controller), data: Rc::clone(&self.data) }
    }
}

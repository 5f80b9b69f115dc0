//! The press/move/release state machine shared by controllers and bindings.
//!
//! A [`DragTracker`] is `Idle` while it holds no [`ActiveDrag`] and `Dragging`
//! while it does. The active drag owns the three global listener handles, so
//! ending the drag and releasing the listeners are the same operation: taking
//! the `ActiveDrag` out of the tracker and dropping it.
//!
//! The payload is read once per press and kept with the active drag, so a
//! `set_data` during a drag only affects the next one.
//!
//! Handlers hold only weak references to the tracker. No `RefCell` borrow is
//! held while a caller callback runs, so callbacks may re-enter the tracker
//! (e.g. to replace the payload).

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::DragConfig;
use crate::error::DragError;
use crate::event::{EventKind, PointerInput};
use crate::platform::{Handler, Platform, Target};
use crate::point::Point;
use crate::session::Session;

/// A session, the payload it started with, and the global listeners that feed it.
struct ActiveDrag<P: Platform, D> {
    session: Session<P, D>,
    data: Option<Rc<D>>,
    _listeners: Vec<P::Listener>,
}

pub struct DragTracker<P: Platform, D> {
    platform: Rc<P>,
    config: RefCell<Rc<DragConfig<P, D>>>,
    data: RefCell<Option<Rc<D>>>,
    active: RefCell<Option<ActiveDrag<P, D>>>,
}

impl<P: Platform, D: 'static> DragTracker<P, D> {
    #[must_use]
    pub fn new(platform: Rc<P>, config: Rc<DragConfig<P, D>>) -> Rc<Self> {
        Rc::new(Self {
            platform,
            config: RefCell::new(config),
            data: RefCell::new(None),
            active: RefCell::new(None),
        })
    }

    #[must_use]
    pub fn platform(&self) -> &Rc<P> {
        &self.platform
    }

    /// Replace the configuration used by the next session.
    pub fn set_config(&self, config: Rc<DragConfig<P, D>>) {
        *self.config.borrow_mut() = config;
    }

    #[must_use]
    pub fn config(&self) -> Rc<DragConfig<P, D>> {
        Rc::clone(&self.config.borrow())
    }

    pub fn set_data(&self, data: Option<Rc<D>>) {
        *self.data.borrow_mut() = data;
    }

    #[must_use]
    pub fn data(&self) -> Option<Rc<D>> {
        self.data.borrow().clone()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// Register this tracker's press listener on `node`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the platform refuses the listener.
    pub fn attach(self: &Rc<Self>, node: &P::Node) -> Result<P::Listener, DragError> {
        let weak = Rc::downgrade(self);
        let pressed = node.clone();
        let handler: Handler<P::Event> = Rc::new(move |event: &P::Event| {
            if let Some(tracker) = weak.upgrade() {
                tracker.press(&pressed, event);
            }
        });
        self.platform.listen(Target::Element(node), EventKind::MouseDown, handler)
    }

    /// Idle -> Dragging. A press while already dragging is ignored.
    pub fn press(self: &Rc<Self>, node: &P::Node, event: &P::Event) {
        if self.is_dragging() {
            log::trace!("drag: press ignored, session already active");
            return;
        }

        let press = event.client_point();
        let element_offset = self.platform.offset(node);
        let config = self.config();
        let data = self.data();
        let overrides = config.on_start.as_ref().and_then(|on_start| on_start(event, data.as_deref()));

        // on_start may have re-entered and started a session of its own.
        if self.is_dragging() {
            log::trace!("drag: session started from within on_start");
            return;
        }

        let session = Session::resolve(press, element_offset, overrides, &config);
        log::debug!(
            "drag: start press=({}, {}) start=({}, {}) offset=({}, {})",
            press.x,
            press.y,
            session.start().x,
            session.start().y,
            element_offset.x,
            element_offset.y,
        );
        let (listeners, can_end) = self.listen_session();
        if !can_end {
            // Nothing could ever release this drag; close it on the spot.
            log::warn!("drag: no release listener registered, ending drag at press");
            drop(listeners);
            if let Some(on_end) = session.on_end() {
                on_end(event, data.as_deref());
            }
            return;
        }
        *self.active.borrow_mut() = Some(ActiveDrag { session, data, _listeners: listeners });
    }

    /// Register the move, release and context-menu listeners on the global surface.
    ///
    /// The flag is false when neither release path was registered.
    fn listen_session(self: &Rc<Self>) -> (Vec<P::Listener>, bool) {
        let mut listeners = Vec::with_capacity(EventKind::SESSION.len());
        let mut can_end = false;
        for kind in EventKind::SESSION {
            let weak: Weak<Self> = Rc::downgrade(self);
            let handler: Handler<P::Event> = Rc::new(move |event: &P::Event| {
                if let Some(tracker) = weak.upgrade() {
                    if kind.ends_session() {
                        tracker.release(event);
                    } else {
                        tracker.motion(event);
                    }
                }
            });
            match self.platform.listen(Target::Global, kind, handler) {
                Ok(listener) => {
                    can_end |= kind.ends_session();
                    listeners.push(listener);
                }
                Err(err) => log::warn!("drag: {err}"),
            }
        }
        (listeners, can_end)
    }

    /// Dragging -> Dragging. One `on_move` per event, no coalescing.
    ///
    /// The payload is the one captured at press, whatever `set_data` did since.
    pub fn motion(&self, event: &P::Event) {
        event.prevent_default();
        let resolved = self.active.borrow().as_ref().map(|active| {
            let delta = active.session.delta(event.client_point());
            (delta, active.session.on_move(), active.data.clone())
        });
        let Some((delta, on_move, data)) = resolved else {
            return;
        };
        if let Some(on_move) = on_move {
            on_move(delta.x, delta.y, event, data.as_deref());
        }
    }

    /// Dragging -> Idle, on release or context menu. Calls `on_end`.
    pub fn release(&self, event: &P::Event) {
        event.prevent_default();
        let Some(active) = self.end_session() else {
            return;
        };
        let ActiveDrag { session, data, _listeners: listeners } = active;
        drop(listeners);
        log::debug!("drag: end");
        if let Some(on_end) = session.on_end() {
            on_end(event, data.as_deref());
        }
    }

    /// Layout offset of the pressed element for the drag in progress.
    #[must_use]
    pub fn element_offset(&self) -> Option<Point> {
        self.active.borrow().as_ref().map(|active| active.session.element_offset())
    }

    /// Drop an active session and its listeners without calling `on_end`.
    pub fn teardown(&self) {
        if self.end_session().is_some() {
            log::debug!("drag: session torn down");
        }
    }

    fn end_session(&self) -> Option<ActiveDrag<P, D>> {
        self.active.borrow_mut().take()
    }
}

//! The seam between the drag state machine and the page.
//!
//! [`Platform`] covers the three services a drag consumes: registering event
//! listeners, reading an element's layout offset, and the event type itself.
//! Listener registrations are returned as owned handles; dropping the handle
//! removes the listener, so a set of handles is released by dropping the set.

use std::rc::Rc;

use crate::error::DragError;
use crate::event::{EventKind, PointerInput};
use crate::point::Point;

/// Callback invoked with each dispatched event.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Where a listener is registered.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a, N> {
    /// A specific element.
    Element(&'a N),
    /// The global pointer-tracking surface (the window in a browser).
    Global,
}

pub trait Platform: 'static {
    /// Input event delivered to handlers.
    type Event: PointerInput + 'static;
    /// Element a press listener can be attached to. Equality is node identity.
    type Node: Clone + PartialEq + 'static;
    /// Registration handle. Dropping it removes the listener.
    type Listener: 'static;

    /// Register `handler` for `kind` events on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the listener could not be registered.
    fn listen(
        &self,
        target: Target<'_, Self::Node>,
        kind: EventKind,
        handler: Handler<Self::Event>,
    ) -> Result<Self::Listener, DragError>;

    /// The element's layout offset relative to its offset parent.
    fn offset(&self, node: &Self::Node) -> Point;
}

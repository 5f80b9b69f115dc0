//! Declarative drag attachment for nodes chosen at render time.
//!
//! A [`DragBinding`] is created once per binding site in a template and
//! updated on every render with the node it landed on and a [`DragHandle`].
//! It keeps its own session and payload but reads callbacks from the handle's
//! controller, so one configuration can drive many independently dragged
//! children.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::fmt;
use std::rc::Rc;

use crate::controller::{DragController, DragHandle};
use crate::error::DragError;
use crate::platform::Platform;
use crate::point::Point;
use crate::tracker::DragTracker;

/// Kind of template position a binding can be placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Child,
    Attribute,
    Property,
    BooleanAttribute,
    Event,
    Element,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Child => "a child position",
            Self::Attribute => "an attribute",
            Self::Property => "a property",
            Self::BooleanAttribute => "a boolean attribute",
            Self::Event => "an event binding",
            Self::Element => "an element",
        })
    }
}

/// Where in a template a binding sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInfo {
    pub kind: PartKind,
}

impl PartInfo {
    #[must_use]
    pub fn new(kind: PartKind) -> Self {
        Self { kind }
    }
}

/// The node currently listened on and its press listener.
struct Attachment<P: Platform> {
    node: P::Node,
    _listener: P::Listener,
}

pub struct DragBinding<P: Platform, D> {
    tracker: Option<Rc<DragTracker<P, D>>>,
    attachment: Option<Attachment<P>>,
}

impl<P: Platform, D: 'static> DragBinding<P, D> {
    /// # Errors
    ///
    /// Returns [`DragError::UnsupportedPart`] unless `part` is an element part.
    pub fn new(part: &PartInfo) -> Result<Self, DragError> {
        if part.kind != PartKind::Element {
            return Err(DragError::UnsupportedPart(part.kind));
        }
        Ok(Self { tracker: None, attachment: None })
    }

    /// Take the payload and configuration from `handle` and make sure the
    /// press listener is on `node`.
    ///
    /// When `node` differs from the current attachment, the new listener is
    /// installed first and the old one is removed by replacing the attachment.
    /// If the new listener is refused the old attachment stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the platform refuses the press listener.
    pub fn update(&mut self, node: &P::Node, handle: &DragHandle<P, D>) -> Result<(), DragError> {
        let tracker = self.tracker_for(handle.controller());
        tracker.set_data(Some(handle.payload()));

        if self.attachment.as_ref().is_some_and(|current| current.node == *node) {
            return Ok(());
        }
        let listener = tracker.attach(node)?;
        if self.attachment.is_some() {
            log::debug!("drag: binding moved to a new node");
        }
        self.attachment = Some(Attachment { node: node.clone(), _listener: listener });
        Ok(())
    }

    fn tracker_for(&mut self, controller: &DragController<P, D>) -> Rc<DragTracker<P, D>> {
        let config = controller.config();
        let tracker = self
            .tracker
            .get_or_insert_with(|| DragTracker::new(Rc::clone(controller.platform()), Rc::clone(&config)));
        tracker.set_config(config);
        Rc::clone(tracker)
    }

    /// Remove the press listener and end any drag without calling `on_end`.
    /// The next [`update`](Self::update) attaches again.
    pub fn disconnect(&mut self) {
        self.attachment = None;
        if let Some(tracker) = &self.tracker {
            tracker.teardown();
        }
    }

    #[must_use]
    pub fn is_attached_to(&self, node: &P::Node) -> bool {
        self.attachment.as_ref().is_some_and(|current| current.node == *node)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.as_ref().is_some_and(|tracker| tracker.is_dragging())
    }

    /// Layout offset of the bound node captured at press, while dragging.
    #[must_use]
    pub fn element_offset(&self) -> Option<Point> {
        self.tracker.as_ref().and_then(|tracker| tracker.element_offset())
    }

    /// Payload from the most recent update. A drag already in progress keeps
    /// the payload it started with.
    #[must_use]
    pub fn data(&self) -> Option<Rc<D>> {
        self.tracker.as_ref().and_then(|tracker| tracker.data())
    }
}

impl<P: Platform, D> fmt::Debug for DragBinding<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragBinding")
            .field("attached", &self.attachment.is_some())
            .finish_non_exhaustive()
    }
}

//! Event kinds the drag machinery listens for, and the minimal view of a
//! pointer event it needs.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::fmt;

use crate::point::Point;

/// DOM event types used by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Button pressed on the owning element; starts a session.
    MouseDown,
    /// Pointer moved anywhere in the window.
    MouseMove,
    /// Button released anywhere in the window; ends the session.
    MouseUp,
    /// Context menu requested; ends the session like a release.
    ContextMenu,
}

impl EventKind {
    /// The listener kinds registered on the global surface for one session.
    pub const SESSION: [Self; 3] = [Self::MouseMove, Self::MouseUp, Self::ContextMenu];

    /// DOM event type string, as passed to `addEventListener`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::ContextMenu => "contextmenu",
        }
    }

    /// Whether this event ends an active session.
    #[must_use]
    pub fn ends_session(self) -> bool {
        matches!(self, Self::MouseUp | Self::ContextMenu)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the state machine reads from, and does to, an input event.
pub trait PointerInput {
    /// Pointer position in viewport (client) coordinates.
    fn client_point(&self) -> Point;

    /// Suppress the browser's default handling (text selection, context menu).
    fn prevent_default(&self);
}

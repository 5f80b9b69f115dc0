//! State for one press-to-release cycle.
//!
//! A [`Session`] is resolved once, when the press is handled: the starting
//! offset and the callbacks it will use are fixed at that point, taking
//! `on_start`'s overrides over the shared configuration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::config::{DragConfig, EndFn, MoveFn, StartOverrides};
use crate::platform::Platform;
use crate::point::Point;

pub struct Session<P: Platform, D> {
    /// Client position of the press.
    press: Point,
    /// Offset added to every delta.
    start: Point,
    /// Layout offset of the pressed element at press time.
    element_offset: Point,
    on_move: Option<MoveFn<P, D>>,
    on_end: Option<EndFn<P, D>>,
}

impl<P: Platform, D> Session<P, D> {
    /// Fix the session's start offset and callbacks.
    ///
    /// Without overrides the start offset is the origin, not `element_offset`.
    #[must_use]
    pub fn resolve(
        press: Point,
        element_offset: Point,
        overrides: Option<StartOverrides<P, D>>,
        config: &DragConfig<P, D>,
    ) -> Self {
        let (start, on_move, on_end) = match overrides {
            Some(o) => {
                let start = o.start_point();
                (start, o.on_move, o.on_end)
            }
            None => (Point::ORIGIN, None, None),
        };
        Self {
            press,
            start,
            element_offset,
            on_move: on_move.or_else(|| config.on_move.clone()),
            on_end: on_end.or_else(|| config.on_end.clone()),
        }
    }

    /// `current - press + start`, per axis.
    #[must_use]
    pub fn delta(&self, current: Point) -> Point {
        current - self.press + self.start
    }

    #[must_use]
    pub fn press(&self) -> Point {
        self.press
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Layout offset of the pressed element when the drag started.
    ///
    /// Deltas never include it. Callers that position relative to the element
    /// read it through `DragController::element_offset` or
    /// `DragBinding::element_offset` while the drag is active.
    #[must_use]
    pub fn element_offset(&self) -> Point {
        self.element_offset
    }

    pub(crate) fn on_move(&self) -> Option<MoveFn<P, D>> {
        self.on_move.clone()
    }

    pub(crate) fn on_end(&self) -> Option<EndFn<P, D>> {
        self.on_end.clone()
    }
}

impl<P: Platform, D> fmt::Debug for Session<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("press", &self.press)
            .field("start", &self.start)
            .field("element_offset", &self.element_offset)
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

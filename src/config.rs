//! Drag callbacks and the per-session overrides `on_start` may return.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::rc::Rc;

use crate::platform::Platform;
use crate::point::Point;

/// Called on press. May return overrides for this drag only.
pub type StartFn<P, D> = Rc<dyn Fn(&<P as Platform>::Event, Option<&D>) -> Option<StartOverrides<P, D>>>;
/// Called on every move with `(delta_x, delta_y, event, data)`.
pub type MoveFn<P, D> = Rc<dyn Fn(f64, f64, &<P as Platform>::Event, Option<&D>)>;
/// Called once when the drag ends by release or context menu.
pub type EndFn<P, D> = Rc<dyn Fn(&<P as Platform>::Event, Option<&D>)>;

/// Caller configuration shared by a controller and every binding made from it.
///
/// All callbacks are optional; a missing callback makes its phase a no-op.
pub struct DragConfig<P: Platform, D> {
    pub(crate) on_start: Option<StartFn<P, D>>,
    pub(crate) on_move: Option<MoveFn<P, D>>,
    pub(crate) on_end: Option<EndFn<P, D>>,
    pub(crate) target: Option<P::Node>,
}

impl<P: Platform, D> Default for DragConfig<P, D> {
    fn default() -> Self {
        Self { on_start: None, on_move: None, on_end: None, target: None }
    }
}

impl<P: Platform, D> DragConfig<P, D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_start(mut self, f: impl Fn(&P::Event, Option<&D>) -> Option<StartOverrides<P, D>> + 'static) -> Self {
        self.on_start = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_move(mut self, f: impl Fn(f64, f64, &P::Event, Option<&D>) + 'static) -> Self {
        self.on_move = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_end(mut self, f: impl Fn(&P::Event, Option<&D>) + 'static) -> Self {
        self.on_end = Some(Rc::new(f));
        self
    }

    /// Element the controller attaches its press listener to on construction.
    #[must_use]
    pub fn target(mut self, node: P::Node) -> Self {
        self.target = Some(node);
        self
    }

    #[must_use]
    pub fn target_node(&self) -> Option<&P::Node> {
        self.target.as_ref()
    }
}

impl<P: Platform, D> fmt::Debug for DragConfig<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("target", &self.target.is_some())
            .finish()
    }
}

/// Result of `on_start`: values that apply to the drag it just started.
///
/// Omitted start coordinates are 0. Callbacks set here replace the configured
/// ones for this drag; unset ones fall back to the configuration.
pub struct StartOverrides<P: Platform, D> {
    pub start_x: Option<f64>,
    pub start_y: Option<f64>,
    pub(crate) on_move: Option<MoveFn<P, D>>,
    pub(crate) on_end: Option<EndFn<P, D>>,
}

impl<P: Platform, D> Default for StartOverrides<P, D> {
    fn default() -> Self {
        Self { start_x: None, start_y: None, on_move: None, on_end: None }
    }
}

impl<P: Platform, D> StartOverrides<P, D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting offset added to every delta of this drag.
    #[must_use]
    pub fn start(mut self, x: f64, y: f64) -> Self {
        self.start_x = Some(x);
        self.start_y = Some(y);
        self
    }

    #[must_use]
    pub fn on_move(mut self, f: impl Fn(f64, f64, &P::Event, Option<&D>) + 'static) -> Self {
        self.on_move = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_end(mut self, f: impl Fn(&P::Event, Option<&D>) + 'static) -> Self {
        self.on_end = Some(Rc::new(f));
        self
    }

    /// The starting offset, with omitted coordinates read as 0.
    #[must_use]
    pub fn start_point(&self) -> Point {
        Point::new(self.start_x.unwrap_or(0.0), self.start_y.unwrap_or(0.0))
    }
}

impl<P: Platform, D> fmt::Debug for StartOverrides<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartOverrides")
            .field("start_x", &self.start_x)
            .field("start_y", &self.start_y)
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

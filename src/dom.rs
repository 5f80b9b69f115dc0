//! Browser implementation of [`Platform`] on top of `web-sys`.
//!
//! Press listeners go on the element; session listeners go on `window` so the
//! drag keeps tracking after the pointer leaves the element. Each registration
//! owns its `Closure`, and dropping the [`DomListener`] calls
//! `removeEventListener` with the same function before the closure is freed.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use crate::binding::DragBinding;
use crate::config::{DragConfig, StartOverrides};
use crate::controller::{DragController, DragHandle};
use crate::error::DragError;
use crate::event::{EventKind, PointerInput};
use crate::platform::{Handler, Platform, Target};
use crate::point::Point;

pub type DomConfig<D> = DragConfig<DomPlatform, D>;
pub type DomStartOverrides<D> = StartOverrides<DomPlatform, D>;
pub type DomController<D> = DragController<DomPlatform, D>;
pub type DomHandle<D> = DragHandle<DomPlatform, D>;
pub type DomBinding<D> = DragBinding<DomPlatform, D>;

impl PointerInput for MouseEvent {
    fn client_point(&self) -> Point {
        Point::new(f64::from(self.client_x()), f64::from(self.client_y()))
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// The page the crate runs in.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomPlatform;

/// A live `addEventListener` registration.
pub struct DomListener {
    target: EventTarget,
    kind: EventKind,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind.as_str(), self.closure.as_ref().unchecked_ref())
        {
            log::warn!("drag: failed to remove {} listener: {}", self.kind, describe(&err));
        }
    }
}

impl Platform for DomPlatform {
    type Event = MouseEvent;
    type Node = HtmlElement;
    type Listener = DomListener;

    fn listen(
        &self,
        target: Target<'_, HtmlElement>,
        kind: EventKind,
        handler: Handler<MouseEvent>,
    ) -> Result<DomListener, DragError> {
        let target: EventTarget = match target {
            Target::Element(node) => node.clone().into(),
            Target::Global => web_sys::window().ok_or(DragError::NoWindow)?.into(),
        };
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| handler(&event)) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|err| DragError::Listen { kind, reason: describe(&err) })?;
        Ok(DomListener { target, kind, closure })
    }

    fn offset(&self, node: &HtmlElement) -> Point {
        Point::new(f64::from(node.offset_left()), f64::from(node.offset_top()))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Route `log` records to the browser console and report panics there.
///
/// # Errors
///
/// Returns the logger error when another logger is already installed.
#[cfg(feature = "console")]
pub fn init_console(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
}

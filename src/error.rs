use crate::binding::PartKind;
use crate::event::EventKind;

/// Errors raised while wiring a drag to the page.
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    /// A drag binding was placed somewhere other than an element.
    #[error("drag binding can only be used on an element, not on {0}")]
    UnsupportedPart(PartKind),
    /// There is no global `window` to track the pointer on.
    #[error("no global window available")]
    NoWindow,
    /// The platform refused to register a listener.
    #[error("failed to add {kind} listener: {reason}")]
    Listen { kind: EventKind, reason: String },
}

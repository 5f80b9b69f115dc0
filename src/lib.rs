//! Mouse drag controller for DOM elements.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It attaches a
//! press listener to an element, follows the pointer on the window while the
//! button is held, and reports movement deltas to caller-supplied callbacks.
//! The same state machine backs two attachment styles: a [`controller::DragController`]
//! bound directly to one element, and [`binding::DragBinding`]s that re-attach to
//! whichever node a render pass hands them while sharing the controller's
//! configuration.
//!
//! Everything except [`dom`] is written against the [`platform::Platform`] trait
//! so the drag logic can be tested without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Element-attached controller and payload-carrying handles |
//! | [`binding`] | Declarative adapter that follows re-rendered nodes |
//! | [`tracker`] | Press/move/release state machine and listener lifecycle |
//! | [`session`] | Per-drag state and delta arithmetic |
//! | [`config`] | Callback configuration and `on_start` overrides |
//! | [`host`] | Lifecycle host traits and a simple controller registry |
//! | [`platform`] | Listener registration and layout abstraction |
//! | [`event`] | Event kinds and the pointer event view |
//! | [`point`] | 2D point type |
//! | [`dom`] | `web-sys` implementation of [`platform::Platform`] |
//! | [`error`] | Crate error type |

pub mod binding;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod event;
pub mod host;
pub mod platform;
pub mod point;
pub mod session;
pub mod tracker;

#[cfg(test)]
#[path = "fake_test.rs"]
pub(crate) mod fake;

pub use binding::{DragBinding, PartInfo, PartKind};
pub use config::{DragConfig, StartOverrides};
pub use controller::{DragController, DragHandle};
pub use error::DragError;
pub use host::{ControllerHost, HostControllers, ReactiveController};
pub use point::Point;

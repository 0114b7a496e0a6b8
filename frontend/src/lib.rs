//! Accessible modal dialog primitives for Yew.
//!
//! `DialogOverlay` renders a backdrop into a [`Portal`](components::Portal)
//! at the end of the document body and dismisses when the backdrop itself is
//! clicked. `DialogContent` is the modal surface inside it; `Dialog` combines
//! the two.

pub mod app;
pub mod components;
pub mod hooks;
pub mod services;

#[cfg(test)]
mod test_utils;

pub use components::{Dialog, DialogContent, DialogInner, DialogOverlay, Portal};
pub use services::events::{compose_callbacks, compose_listeners};
pub use shared::{assign_ref, compose_event_handlers, compose_refs, DialogConfig, DialogError};

/// A ref that can receive a DOM element
pub type ElementRef = shared::Ref<web_sys::Element>;

//! Framework-independent building blocks for the dialog components.
//!
//! Nothing in here touches the DOM directly. The Yew components in the
//! frontend crate drive these types from their render and effect cycle.

pub mod backdrop;
pub mod config;
pub mod error;
pub mod events;
pub mod portal;
pub mod refs;

pub use backdrop::BackdropTracker;
pub use config::{DialogConfig, LogConfig, LogLevel, PortalConfig};
pub use error::{DialogError, Result};
pub use events::{compose_event_handlers, DefaultPrevented};
pub use portal::{PortalEvent, PortalPhase};
pub use refs::{assign_ref, compose_refs, ComposedRef, Ref};

/// Marker attribute placed on the overlay (backdrop) element
pub const OVERLAY_ATTRIBUTE: &str = "data-dialog-overlay";

/// Marker attribute placed on the dialog content element
pub const CONTENT_ATTRIBUTE: &str = "data-dialog-content";

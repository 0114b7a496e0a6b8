//! Lifecycle of a portal's mount node.
//!
//! ```text
//! Unmounted --Render--> Pending --Attached--> Mounted --TornDown--> Unmounted
//! ```
//!
//! While `Pending` the portal renders only an invisible anchor, used to find
//! the owning document once the first commit has happened.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalPhase {
    #[default]
    Unmounted,
    /// Anchor rendered, container not created yet
    Pending,
    /// Container attached to the document body; children render into it
    Mounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalEvent {
    Render,
    Attached,
    TornDown,
}

impl PortalPhase {
    /// Apply an event. Events that do not fit the current phase leave it
    /// unchanged.
    pub fn next(self, event: PortalEvent) -> PortalPhase {
        match (self, event) {
            (PortalPhase::Unmounted, PortalEvent::Render) => PortalPhase::Pending,
            (PortalPhase::Pending, PortalEvent::Attached) => PortalPhase::Mounted,
            (_, PortalEvent::TornDown) => PortalPhase::Unmounted,
            (phase, _) => phase,
        }
    }

    /// Whether the mount effect should create a container. A detached anchor
    /// (a component swapped out before its effect ran) skips the mount.
    pub fn should_attach(self, anchor_connected: bool) -> bool {
        self == PortalPhase::Pending && anchor_connected
    }

    pub fn is_mounted(self) -> bool {
        self == PortalPhase::Mounted
    }
}

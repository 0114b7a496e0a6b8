pub mod use_forwarded_ref;
pub mod use_hide_outside;
pub mod use_initial_focus;

pub use use_forwarded_ref::use_forwarded_ref;
pub use use_hide_outside::use_hide_outside;
pub use use_initial_focus::use_initial_focus;
